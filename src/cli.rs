//! Command-line front end shared by the `gof` binary and the per-family
//! binaries.

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::catalogue::{self, Category, Pattern, RunSummary};
use crate::config::{CatalogueConfig, LOG_ENV};
use crate::console::Transcript;

#[derive(Debug, Parser)]
#[command(name = "gof", version, about = "Gang-of-Four patterns, told on a car assembly line")]
pub struct Cli {
    /// Path to a gof.toml configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable colored headings
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Record the examples without printing them
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the catalogue with each pattern's intent
    List {
        #[arg(long, value_enum)]
        category: Option<Category>,
    },
    /// Run the named examples
    Run {
        #[arg(value_enum, required = true)]
        patterns: Vec<Pattern>,
    },
    /// Run every example selected by the configuration
    All,
}

/// Filter directives to use: a non-blank `GOF_LOG` value wins over the
/// configured one.
pub fn select_log_filter(env_value: Option<&str>, configured: &str) -> String {
    env_value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or(configured)
        .to_string()
}

/// Installs the stderr subscriber.
pub fn init_tracing(configured_filter: &str) {
    let env_value = std::env::var(LOG_ENV).ok();
    let directives = select_log_filter(env_value.as_deref(), configured_filter);
    let filter = EnvFilter::try_new(&directives).unwrap_or_else(|e| {
        eprintln!("Ignoring invalid log filter '{}': {}", directives, e);
        EnvFilter::new(configured_filter)
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

pub fn execute(cli: Cli) -> Result<()> {
    let config = CatalogueConfig::resolve(cli.config.as_deref())?;
    init_tracing(&config.log_filter);

    if cli.no_color || !config.color {
        colored::control::set_override(false);
    }

    let mut out = if cli.quiet {
        Transcript::new()
    } else {
        Transcript::echoing()
    };

    match cli.command {
        Command::List { category } => {
            catalogue::list(category, &mut out);
            Ok(())
        }
        Command::Run { patterns } => finish(
            catalogue::run_patterns(&patterns, config.stop_on_error, &mut out),
            config.stop_on_error,
        ),
        Command::All => {
            let patterns = config.selected_patterns();
            info!(count = patterns.len(), "running catalogue");
            finish(
                catalogue::run_patterns(&patterns, config.stop_on_error, &mut out),
                config.stop_on_error,
            )
        }
    }
}

/// Entry point of the per-family binaries: every example of one family,
/// echoed, stopping at the first failure.
pub fn run_category(category: Category) -> Result<()> {
    let config = CatalogueConfig::resolve(None)?;
    init_tracing(&config.log_filter);
    if !config.color {
        colored::control::set_override(false);
    }

    let patterns: Vec<Pattern> = Pattern::in_category(category).collect();
    let mut out = Transcript::echoing();
    finish(catalogue::run_patterns(&patterns, true, &mut out), true)
}

fn finish(summary: RunSummary, stop_on_error: bool) -> Result<()> {
    let line = format!("{} examples run, {} failed", summary.total(), summary.failed.len());
    if summary.is_success() {
        eprintln!("\n{}", line.green());
        return Ok(());
    }

    eprintln!("\n{}", line.red());
    for (pattern, err) in &summary.failed {
        warn!(pattern = %pattern, error = %err, "failed example");
    }
    if stop_on_error {
        bail!("example '{}' failed", summary.failed[0].0);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PatternError;

    #[test]
    fn test_parse_run_with_kebab_names() {
        let cli = Cli::try_parse_from(["gof", "run", "chain-of-responsibility", "proxy"]).unwrap();
        match cli.command {
            Command::Run { patterns } => {
                assert_eq!(patterns, vec![Pattern::ChainOfResponsibility, Pattern::Proxy])
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_unknown_pattern() {
        assert!(Cli::try_parse_from(["gof", "run", "interpreter"]).is_err());
    }

    #[test]
    fn test_parse_run_requires_a_pattern() {
        assert!(Cli::try_parse_from(["gof", "run"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["gof", "list", "--category", "structural", "--quiet", "--no-color"])
                .unwrap();
        assert!(cli.quiet);
        assert!(cli.no_color);
        assert!(matches!(
            cli.command,
            Command::List {
                category: Some(Category::Structural)
            }
        ));
    }

    fn summary_with_failure() -> RunSummary {
        RunSummary {
            passed: vec![Pattern::State],
            failed: vec![(Pattern::Command, PatternError::NoCommandConfigured)],
        }
    }

    #[test]
    fn test_finish_fails_only_when_stopping_on_error() {
        assert!(finish(summary_with_failure(), true).is_err());
        assert!(finish(summary_with_failure(), false).is_ok());

        let clean = RunSummary {
            passed: vec![Pattern::State],
            failed: Vec::new(),
        };
        assert!(finish(clean, true).is_ok());
    }

    #[test]
    fn test_finish_error_names_the_failed_example() {
        let err = finish(summary_with_failure(), true).unwrap_err();
        assert_eq!(err.to_string(), "example 'command' failed");
    }

    #[test]
    fn test_env_log_filter_wins() {
        assert_eq!(
            select_log_filter(Some("gof_patterns=debug"), "gof_patterns=info"),
            "gof_patterns=debug"
        );
    }

    #[test]
    fn test_configured_log_filter_without_env() {
        assert_eq!(select_log_filter(None, "gof_patterns=info"), "gof_patterns=info");
        assert_eq!(select_log_filter(Some("  "), "warn"), "warn");
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}

//! Integration tests for the catalogue runner and its configuration.
//!
//! Uses tempfile for config files on disk.

use std::path::PathBuf;

use gof_patterns::catalogue::{self, run_patterns};
use gof_patterns::config::CatalogueConfig;
use gof_patterns::{Category, ConfigError, Pattern, Transcript};
use tempfile::TempDir;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

fn write_config(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("gof.toml");
    std::fs::write(&path, content).unwrap();
    path
}

// =============================================================================
// RUNNER TESTS
// =============================================================================

#[test]
fn test_every_example_runs_cleanly() {
    let mut out = Transcript::new();
    let summary = run_patterns(&Pattern::ALL, true, &mut out);

    assert!(summary.is_success(), "failures: {:?}", summary.failed);
    assert_eq!(summary.passed.len(), 22);
    for pattern in Pattern::ALL {
        assert!(out.contains(&format!("=== {} ===", pattern.title())));
    }
}

#[test]
fn test_examples_are_independent_of_order() {
    let mut forward = Transcript::new();
    run_patterns(&[Pattern::Memento, Pattern::Flyweight], true, &mut forward);

    let mut memento_alone = Transcript::new();
    Pattern::Memento.run(&mut memento_alone).unwrap();

    let mut flyweight_alone = Transcript::new();
    Pattern::Flyweight.run(&mut flyweight_alone).unwrap();

    let lines = forward.lines();
    assert_eq!(&lines[1..=memento_alone.len()], memento_alone.lines());
    assert!(lines.ends_with(flyweight_alone.lines()));
}

#[test]
fn test_family_selection() {
    let structural: Vec<Pattern> = Pattern::in_category(Category::Structural).collect();
    let mut out = Transcript::new();
    let summary = run_patterns(&structural, true, &mut out);

    assert_eq!(summary.total(), 7);
    assert!(out.contains("The total weight of the freight is: 200 *units*"));
    assert!(!out.contains("=== Observer ==="));
}

#[test]
fn test_listing_mentions_every_pattern() {
    let mut out = Transcript::new();
    catalogue::list(None, &mut out);
    for pattern in Pattern::ALL {
        assert!(out.contains(pattern.name()), "missing {}", pattern);
    }
}

// =============================================================================
// CONFIG TESTS
// =============================================================================

#[test]
fn test_load_config_from_file() {
    let temp = create_temp_dir();
    let path = write_config(
        &temp,
        r#"
color = false
log_filter = "gof_patterns=debug"
stop_on_error = true
patterns = ["observer", "visitor"]
"#,
    );

    let config = CatalogueConfig::load(&path).unwrap();
    assert!(!config.color);
    assert!(config.stop_on_error);
    assert_eq!(config.log_filter, "gof_patterns=debug");
    assert_eq!(config.selected_patterns(), vec![Pattern::Observer, Pattern::Visitor]);
}

#[test]
fn test_explicit_config_must_exist() {
    let temp = create_temp_dir();
    let missing = temp.path().join("nope.toml");

    let err = CatalogueConfig::resolve(Some(missing.as_path())).unwrap_err();
    match err {
        ConfigError::Read { path, .. } => assert_eq!(path, missing),
        other => panic!("expected read error, got {:?}", other),
    }
}

#[test]
fn test_unknown_key_in_file_rejected() {
    let temp = create_temp_dir();
    let path = write_config(&temp, "color = true\nverbose = true\n");

    let err = CatalogueConfig::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_configured_selection_drives_run() {
    let temp = create_temp_dir();
    let path = write_config(&temp, r#"patterns = ["singleton", "state"]"#);
    let config = CatalogueConfig::load(&path).unwrap();

    let mut out = Transcript::new();
    let summary = run_patterns(&config.selected_patterns(), config.stop_on_error, &mut out);

    assert_eq!(summary.passed, vec![Pattern::Singleton, Pattern::State]);
    assert!(out.contains("Same instance: true"));
}

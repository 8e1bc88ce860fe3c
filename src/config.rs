//! Runner configuration, read from an optional `gof.toml`.
//!
//! ```toml
//! color = true
//! log_filter = "gof_patterns=info"
//! stop_on_error = false
//! patterns = ["observer", "visitor"]
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::catalogue::Pattern;
use crate::error::ConfigError;

pub const DEFAULT_CONFIG_FILE: &str = "gof.toml";

/// Environment variable that overrides [`CatalogueConfig::log_filter`].
pub const LOG_ENV: &str = "GOF_LOG";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogueConfig {
    pub color: bool,
    pub log_filter: String,
    pub stop_on_error: bool,
    /// Examples run by `gof all`. Empty means the whole catalogue.
    pub patterns: Vec<Pattern>,
}

impl Default for CatalogueConfig {
    fn default() -> Self {
        Self {
            color: true,
            log_filter: default_log_filter(),
            stop_on_error: false,
            patterns: Vec::new(),
        }
    }
}

fn default_log_filter() -> String {
    "gof_patterns=info".to_string()
}

impl CatalogueConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// An explicit path must exist. Without one, `gof.toml` in the current
    /// directory is used when present, defaults otherwise.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if fallback.is_file() {
                    Self::load(fallback)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn selected_patterns(&self) -> Vec<Pattern> {
        if self.patterns.is_empty() {
            Pattern::ALL.to_vec()
        } else {
            self.patterns.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_gives_defaults() {
        let config = CatalogueConfig::from_toml_str("").unwrap();
        assert_eq!(config, CatalogueConfig::default());
        assert!(config.color);
        assert_eq!(config.log_filter, "gof_patterns=info");
    }

    #[test]
    fn test_partial_document_keeps_other_defaults() {
        let config = CatalogueConfig::from_toml_str("stop_on_error = true").unwrap();
        assert!(config.stop_on_error);
        assert!(config.color);
        assert_eq!(config.selected_patterns().len(), 22);
    }

    #[test]
    fn test_patterns_use_kebab_names() {
        let config =
            CatalogueConfig::from_toml_str(r#"patterns = ["chain-of-responsibility", "proxy"]"#)
                .unwrap();
        assert_eq!(
            config.selected_patterns(),
            vec![Pattern::ChainOfResponsibility, Pattern::Proxy]
        );
    }

    #[test]
    fn test_unknown_pattern_rejected() {
        let err = CatalogueConfig::from_toml_str(r#"patterns = ["interpreter"]"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = CatalogueConfig::from_toml_str("colour = false").unwrap_err();
        assert!(err.to_string().contains("colour"));
    }
}

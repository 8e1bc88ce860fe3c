use std::path::PathBuf;
use thiserror::Error;

// =============================================================================
// Errors raised by the pattern examples themselves
// =============================================================================

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    #[error("Component '{name}' is not in storage")]
    ComponentNotFound { name: String },

    #[error("Assembly line has no parts command configured")]
    NoCommandConfigured,

    #[error("Iterator not yet initiated")]
    IteratorNotStarted,

    #[error("Machine '{machine}' is no longer attached to a mediator")]
    MediatorDetached { machine: &'static str },

    #[error("Nothing to undo: history is empty")]
    EmptyHistory,

    #[error("No prototype registered under '{name}'")]
    UnknownPrototype { name: String },

    #[error("User '{user}' is not authorized to operate the assembly machine")]
    Unauthorized { user: String },
}

impl PatternError {
    pub fn component_not_found(name: impl Into<String>) -> Self {
        Self::ComponentNotFound { name: name.into() }
    }

    pub fn unknown_prototype(name: impl Into<String>) -> Self {
        Self::UnknownPrototype { name: name.into() }
    }

    pub fn unauthorized(user: impl Into<String>) -> Self {
        Self::Unauthorized { user: user.into() }
    }
}

// =============================================================================
// Errors raised while loading the runner configuration
// =============================================================================

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_error_messages() {
        assert_eq!(
            PatternError::component_not_found("Hood").to_string(),
            "Component 'Hood' is not in storage"
        );
        assert_eq!(
            PatternError::unauthorized("Eve").to_string(),
            "User 'Eve' is not authorized to operate the assembly machine"
        );
        assert_eq!(
            PatternError::IteratorNotStarted.to_string(),
            "Iterator not yet initiated"
        );
    }

    #[test]
    fn test_config_parse_error_converts() {
        let err: ConfigError = toml::from_str::<toml::Value>("color = ")
            .map_err(ConfigError::from)
            .unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse config"));
    }
}

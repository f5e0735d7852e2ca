//! Error types for configuration loading and resolution

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for lintrc operations
#[derive(Debug, Error)]
pub enum LintrcError {
    /// A rule, preset or environment references a plugin that is not declared
    #[error("Plugin '{plugin}' referenced by '{referenced_by}' is not declared")]
    UnknownPlugin {
        plugin: String,
        referenced_by: String,
    },

    /// More than one distinct parser was selected
    #[error("Conflicting parser selections: '{first}' and '{second}'")]
    ConflictingParser { first: String, second: String },

    /// Rule severity is not one of off/warn/error or 0/1/2
    #[error("Invalid severity for rule '{rule}': {value} (expected off, warn, error, 0, 1 or 2)")]
    InvalidSeverity { rule: String, value: String },

    /// A preset identifier has no bundle in the registry
    #[error("Preset '{preset}' could not be resolved")]
    UnresolvedPreset { preset: String },

    /// Environment flag is not known to the registry
    #[error("Unknown environment '{environment}'")]
    UnknownEnvironment { environment: String },

    /// Presets extend each other in a cycle
    #[error("Circular preset extension: {chain}")]
    CircularPreset { chain: String },

    /// Configuration loading or validation errors
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    /// File system I/O errors
    #[error("IO error for path '{path}': {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Error kind enumeration for categorizing errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Plugin,
    Parser,
    Severity,
    Preset,
    Environment,
    Config,
    Io,
}

impl LintrcError {
    /// Get the error kind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            LintrcError::UnknownPlugin { .. } => ErrorKind::Plugin,
            LintrcError::ConflictingParser { .. } => ErrorKind::Parser,
            LintrcError::InvalidSeverity { .. } => ErrorKind::Severity,
            LintrcError::UnresolvedPreset { .. } => ErrorKind::Preset,
            LintrcError::CircularPreset { .. } => ErrorKind::Preset,
            LintrcError::UnknownEnvironment { .. } => ErrorKind::Environment,
            LintrcError::ConfigError { .. } => ErrorKind::Config,
            LintrcError::IoError { .. } => ErrorKind::Io,
        }
    }

    /// Identifier the error is about (plugin, rule, preset or environment name)
    pub fn offending_identifier(&self) -> Option<&str> {
        match self {
            LintrcError::UnknownPlugin { plugin, .. } => Some(plugin),
            LintrcError::ConflictingParser { second, .. } => Some(second),
            LintrcError::InvalidSeverity { rule, .. } => Some(rule),
            LintrcError::UnresolvedPreset { preset } => Some(preset),
            LintrcError::UnknownEnvironment { environment } => Some(environment),
            LintrcError::CircularPreset { .. }
            | LintrcError::ConfigError { .. }
            | LintrcError::IoError { .. } => None,
        }
    }

    /// Create an unknown plugin error
    pub fn unknown_plugin(plugin: impl Into<String>, referenced_by: impl Into<String>) -> Self {
        Self::UnknownPlugin {
            plugin: plugin.into(),
            referenced_by: referenced_by.into(),
        }
    }

    /// Create a conflicting parser error
    pub fn conflicting_parser(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self::ConflictingParser {
            first: first.into(),
            second: second.into(),
        }
    }

    /// Create an invalid severity error
    pub fn invalid_severity(rule: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidSeverity {
            rule: rule.into(),
            value: value.into(),
        }
    }

    /// Create an unresolved preset error
    pub fn unresolved_preset(preset: impl Into<String>) -> Self {
        Self::UnresolvedPreset {
            preset: preset.into(),
        }
    }

    /// Create an unknown environment error
    pub fn unknown_environment(environment: impl Into<String>) -> Self {
        Self::UnknownEnvironment {
            environment: environment.into(),
        }
    }

    /// Create a circular preset error from the extension chain
    pub fn circular_preset<S: AsRef<str>>(chain: &[S]) -> Self {
        Self::CircularPreset {
            chain: chain
                .iter()
                .map(|s| s.as_ref())
                .collect::<Vec<_>>()
                .join(" -> "),
        }
    }

    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    /// Create an IO error with path context
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::IoError {
            path: path.into(),
            source,
        }
    }
}

/// Convert from std::io::Error
impl From<std::io::Error> for LintrcError {
    fn from(err: std::io::Error) -> Self {
        Self::IoError {
            path: PathBuf::new(),
            source: err,
        }
    }
}

//! Error types for the pastebin client workspace

use thiserror::Error;

/// Main error type for the pastebin workspace
#[derive(Error, Debug)]
pub enum PastebinError {
    /// Configuration related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filesystem errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for pastebin operations
pub type Result<T> = std::result::Result<T, PastebinError>;

/// Configuration specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration directory not found
    #[error("Configuration directory not found: {path}")]
    FileNotFound { path: String },

    /// Parse error
    #[error("Configuration parse error: {0}")]
    ParseError(String),
}

impl From<ConfigError> for PastebinError {
    fn from(err: ConfigError) -> Self {
        PastebinError::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_conversion() {
        let err: PastebinError = ConfigError::ParseError("staging record: invalid type".to_string()).into();

        assert!(matches!(err, PastebinError::Config(_)));
        assert_eq!(
            err.to_string(),
            "Configuration error: Configuration parse error: staging record: invalid type"
        );
    }
}

use std::error::Error;

/// Base trait for all application errors
pub trait DocwatchError: Error + Send + Sync + 'static {
    /// Error code for programmatic handling
    fn error_code(&self) -> &'static str;

    /// Whether this error should be logged as an error or warning
    fn is_user_error(&self) -> bool {
        false
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("Could not resolve default data path: {source}")]
    DataPathUnresolved {
        #[from]
        source: std::io::Error,
    },
}

impl DocwatchError for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            ConfigError::InvalidConfiguration { .. } => "INVALID_CONFIGURATION",
            ConfigError::DataPathUnresolved { .. } => "DATA_PATH_UNRESOLVED",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, ConfigError::InvalidConfiguration { .. })
    }
}

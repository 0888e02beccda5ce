//! Configuration validation.

use crate::config::types::RefreshConfig;
use crate::errors::ConfigError;

/// Validate a refresh configuration.
///
/// An empty platform list is valid: the pass only stamps the document.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidConfiguration`] when the timeout is zero or
/// a platform key is blank.
pub fn validate_config(config: &RefreshConfig) -> Result<(), ConfigError> {
    if config.timeout.is_zero() {
        return Err(ConfigError::InvalidConfiguration {
            message: "timeout must be greater than zero".to_string(),
        });
    }

    if let Some(index) = config.platforms.iter().position(|p| p.trim().is_empty()) {
        return Err(ConfigError::InvalidConfiguration {
            message: format!("platform key at position {} is empty", index),
        });
    }

    Ok(())
}

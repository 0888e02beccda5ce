//! # Configuration System
//!
//! Runtime configuration for a docwatch refresh pass.
//!
//! There is no configuration file: the catalog document is the only file
//! docwatch reads. Values are resolved in this order (later sources override
//! earlier ones):
//! 1. **Hardcoded defaults** - see [`defaults`]
//! 2. **CLI arguments** - Command-line flags (highest priority)
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use docwatch_core::config::RefreshConfig;
//! use std::time::Duration;
//!
//! fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = RefreshConfig::new()?
//!         .with_platforms(vec!["bedrock".to_string()])
//!         .with_timeout(Duration::from_secs(30));
//!     config.validate()?;
//!     Ok(())
//! }
//! ```

pub mod defaults;
pub mod types;
pub mod validation;

// Public API exports
pub use defaults::{
    DEFAULT_DENSITY_THRESHOLD, DEFAULT_PLATFORMS, DEFAULT_TIMEOUT_SECS, default_data_path,
};
pub use types::RefreshConfig;
pub use validation::validate_config;

impl RefreshConfig {
    /// Validate the configuration.
    ///
    /// See [`validation::validate_config`] for details.
    pub fn validate(&self) -> Result<(), crate::errors::ConfigError> {
        validation::validate_config(self)
    }
}

//! Configuration type definitions for docwatch.

use crate::config::defaults;
use crate::errors::ConfigError;
use std::path::PathBuf;
use std::time::Duration;

/// Runtime configuration for one refresh pass.
#[derive(Debug, Clone, PartialEq)]
pub struct RefreshConfig {
    /// Catalog document read at start and rewritten at the end
    pub data_path: PathBuf,
    /// Platform keys to scan, in scan order
    pub platforms: Vec<String>,
    /// Per-request HTTP timeout
    pub timeout: Duration,
    /// Model density above which a page counts as depth-confirmed
    pub density_threshold: usize,
}

impl RefreshConfig {
    /// Build a config with the default executable-relative data path.
    pub fn new() -> Result<Self, ConfigError> {
        Ok(Self::for_path(defaults::default_data_path()?))
    }

    /// Build a config with defaults for everything except the data path.
    pub fn for_path(data_path: impl Into<PathBuf>) -> Self {
        Self {
            data_path: data_path.into(),
            platforms: defaults::default_platforms(),
            timeout: Duration::from_secs(defaults::DEFAULT_TIMEOUT_SECS),
            density_threshold: defaults::DEFAULT_DENSITY_THRESHOLD,
        }
    }

    pub fn with_data_path(mut self, data_path: impl Into<PathBuf>) -> Self {
        self.data_path = data_path.into();
        self
    }

    pub fn with_platforms(mut self, platforms: Vec<String>) -> Self {
        self.platforms = platforms;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_density_threshold(mut self, threshold: usize) -> Self {
        self.density_threshold = threshold;
        self
    }
}

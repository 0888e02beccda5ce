use crate::errors::DocwatchError;

#[derive(Debug, thiserror::Error)]
pub enum RefreshError {
    #[error(transparent)]
    Catalog {
        #[from]
        source: crate::catalog::errors::CatalogError,
    },

    #[error("Invalid refresh configuration: {source}")]
    Config {
        #[from]
        source: crate::errors::ConfigError,
    },

    #[error("Platform '{platform}' is missing from the catalog")]
    PlatformMissing { platform: String },

    #[error("Platform '{platform}' has no 'doc' URL")]
    DocUrlMissing { platform: String },

    #[error("Could not create page fetcher: {source}")]
    FetcherInit {
        #[from]
        source: crate::fetch::errors::FetchError,
    },
}

impl RefreshError {
    /// True when the catalog file itself is absent.
    pub fn is_catalog_missing(&self) -> bool {
        matches!(
            self,
            RefreshError::Catalog {
                source: crate::catalog::errors::CatalogError::NotFound { .. }
            }
        )
    }
}

impl DocwatchError for RefreshError {
    fn error_code(&self) -> &'static str {
        match self {
            RefreshError::Catalog { source } => source.error_code(),
            RefreshError::Config { source } => source.error_code(),
            RefreshError::PlatformMissing { .. } => "REFRESH_PLATFORM_MISSING",
            RefreshError::DocUrlMissing { .. } => "REFRESH_DOC_URL_MISSING",
            RefreshError::FetcherInit { .. } => "REFRESH_FETCHER_INIT_FAILED",
        }
    }

    fn is_user_error(&self) -> bool {
        match self {
            RefreshError::Catalog { source } => source.is_user_error(),
            RefreshError::Config { source } => source.is_user_error(),
            RefreshError::PlatformMissing { .. } | RefreshError::DocUrlMissing { .. } => true,
            RefreshError::FetcherInit { .. } => false,
        }
    }
}

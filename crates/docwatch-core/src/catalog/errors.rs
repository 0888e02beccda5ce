use crate::errors::DocwatchError;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("{path} not found.")]
    NotFound { path: String },

    #[error("Failed to parse catalog '{path}': {message}")]
    ParseFailed { path: String, message: String },

    #[error("Catalog '{path}' must contain a JSON object at the top level")]
    NotAnObject { path: String },

    #[error("Failed to serialize catalog: {message}")]
    SerializeFailed { message: String },

    #[error("IO error on catalog file: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

impl DocwatchError for CatalogError {
    fn error_code(&self) -> &'static str {
        match self {
            CatalogError::NotFound { .. } => "CATALOG_NOT_FOUND",
            CatalogError::ParseFailed { .. } => "CATALOG_PARSE_FAILED",
            CatalogError::NotAnObject { .. } => "CATALOG_NOT_AN_OBJECT",
            CatalogError::SerializeFailed { .. } => "CATALOG_SERIALIZE_FAILED",
            CatalogError::IoError { .. } => "CATALOG_IO_ERROR",
        }
    }

    fn is_user_error(&self) -> bool {
        match self {
            CatalogError::NotFound { .. }
            | CatalogError::ParseFailed { .. }
            | CatalogError::NotAnObject { .. } => true,

            CatalogError::SerializeFailed { .. } | CatalogError::IoError { .. } => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let error = CatalogError::NotFound {
            path: "/srv/data/models.json".to_string(),
        };
        assert_eq!(error.to_string(), "/srv/data/models.json not found.");
        assert_eq!(error.error_code(), "CATALOG_NOT_FOUND");
        assert!(error.is_user_error());
    }

    #[test]
    fn test_io_error_is_not_user_error() {
        let error = CatalogError::from(std::io::Error::other("disk full"));
        assert_eq!(error.error_code(), "CATALOG_IO_ERROR");
        assert!(!error.is_user_error());
    }
}

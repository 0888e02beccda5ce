//! Catalog document handling
//!
//! The catalog document is the JSON file listing each platform's
//! documentation URL. It is read once per refresh pass and written back with
//! only `last_update` changed.

pub mod errors;
pub mod persistence;
pub mod types;

// Re-export commonly used types
pub use errors::CatalogError;
pub use persistence::{load_catalog, save_catalog};
pub use types::{CatalogDocument, LAST_UPDATE_FORMAT, LAST_UPDATE_KEY};

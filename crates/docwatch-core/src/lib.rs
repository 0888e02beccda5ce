//! docwatch-core: Core library for model catalog documentation scanning
//!
//! This library fetches vendor documentation pages listed in a catalog
//! document, runs a heuristic scan over each page body and stamps the
//! document with the time of the last check. It is used by the CLI.
//!
//! # Main Entry Points
//!
//! - [`refresh`] - Run one refresh pass over all configured platforms
//! - [`scan`] - Heuristic page analysis
//! - [`catalog`] - Load and save the catalog document
//! - [`fetch`] - Page fetcher trait and HTTP implementation
//! - [`config`] - Runtime configuration

pub mod catalog;
pub mod config;
pub mod errors;
pub mod events;
pub mod fetch;
pub mod logging;
pub mod refresh;
pub mod scan;

// Re-export commonly used types at crate root for convenience
pub use catalog::{CatalogDocument, CatalogError};
pub use config::RefreshConfig;
pub use errors::DocwatchError;
pub use fetch::{FetchError, HttpFetcher, PageFetcher};
pub use refresh::{PlatformOutcome, PlatformResult, RefreshError, RefreshReport};
pub use scan::{PageAnalysis, deep_analyze_html};

// Re-export handler modules as the primary API
pub use refresh::handler as refresh_ops;

// Re-export logging initialization
pub use logging::init_logging;

pub mod errors;
pub mod handler;
pub mod operations;
pub mod types;

// Re-export commonly used types
pub use errors::RefreshError;
pub use handler::{run_refresh, run_refresh_with};
pub use types::{PlatformOutcome, PlatformResult, RefreshReport};

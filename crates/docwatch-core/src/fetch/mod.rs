pub mod errors;
pub mod http;
pub mod traits;

// Re-export commonly used types
pub use errors::FetchError;
pub use http::HttpFetcher;
pub use traits::PageFetcher;

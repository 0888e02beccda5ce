pub mod operations;
pub mod types;

// Re-export commonly used types
pub use operations::deep_analyze_html;
pub use types::PageAnalysis;

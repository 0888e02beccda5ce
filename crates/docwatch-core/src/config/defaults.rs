//! Default values for configuration types.

use std::path::PathBuf;

/// Platforms scanned when none are given, in scan order.
pub const DEFAULT_PLATFORMS: [&str; 2] = ["bedrock", "gcp"];

/// Per-request HTTP timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Model density above which a page is reported as depth-confirmed.
pub const DEFAULT_DENSITY_THRESHOLD: usize = 10;

pub fn default_platforms() -> Vec<String> {
    DEFAULT_PLATFORMS.iter().map(|p| p.to_string()).collect()
}

/// Returns `data/models.json` next to the running executable.
pub fn default_data_path() -> Result<PathBuf, std::io::Error> {
    let exe = std::env::current_exe()?;
    let base_dir = exe.parent().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Executable path has no parent directory",
        )
    })?;
    Ok(base_dir.join("data").join("models.json"))
}

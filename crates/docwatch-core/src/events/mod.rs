use crate::config::RefreshConfig;
use crate::errors::DocwatchError;
use crate::refresh::RefreshReport;
use tracing::{error, info, warn};

/// Records which catalog and platforms this invocation will refresh.
pub fn log_app_startup(config: &RefreshConfig, json_output: bool) {
    info!(
        event = "core.app.startup_completed",
        version = env!("CARGO_PKG_VERSION"),
        data_path = %config.data_path.display(),
        platforms = ?config.platforms,
        timeout_secs = config.timeout.as_secs(),
        json_output = json_output
    );
}

pub fn log_refresh_completed(report: &RefreshReport) {
    info!(
        event = "core.app.refresh_completed",
        data_path = %report.data_path.display(),
        scanned = report.scanned_count(),
        failed = report.failed_count(),
        last_update = %report.last_update
    );
}

/// A missing catalog is reported to the user but is not a failed run.
pub fn log_catalog_missing(error: &dyn DocwatchError) {
    warn!(
        event = "core.app.catalog_missing",
        error = %error,
        error_code = error.error_code()
    );
}

pub fn log_app_error(error: &dyn DocwatchError) {
    error!(
        event = "core.app.error_occurred",
        error = %error,
        error_code = error.error_code(),
        user_error = error.is_user_error()
    );
}

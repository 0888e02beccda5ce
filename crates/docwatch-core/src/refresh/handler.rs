use crate::catalog;
use crate::config::RefreshConfig;
use crate::fetch::{HttpFetcher, PageFetcher};
use crate::refresh::{errors::RefreshError, operations, types::RefreshReport};
use tracing::{error, info};

/// Run one refresh pass using the HTTP fetcher.
pub fn run_refresh(config: &RefreshConfig) -> Result<RefreshReport, RefreshError> {
    config.validate()?;
    let fetcher = HttpFetcher::new(config.timeout)?;
    run_refresh_with(config, &fetcher)
}

/// Run one refresh pass with the given fetcher.
///
/// The catalog is loaded and every platform URL resolved before any request
/// is made. Per-platform fetch failures are recorded in the report and do not
/// stop the pass; the catalog is always stamped and saved once every platform
/// has been attempted.
pub fn run_refresh_with<F: PageFetcher>(
    config: &RefreshConfig,
    fetcher: &F,
) -> Result<RefreshReport, RefreshError> {
    let started_at = operations::stamp_now();
    let data_path = &config.data_path;

    info!(
        event = "core.refresh.started",
        data_path = %data_path.display(),
        platform_count = config.platforms.len()
    );

    let mut doc = catalog::load_catalog(data_path)?;

    let targets = operations::resolve_targets(&doc, &config.platforms).inspect_err(|e| {
        error!(event = "core.refresh.resolve_failed", error = %e);
    })?;

    let results: Vec<_> = targets
        .iter()
        .map(|target| operations::run_target(fetcher, target, config.density_threshold))
        .collect();

    let last_update = operations::stamp_now();
    doc.set_last_update(last_update.clone());
    catalog::save_catalog(&doc, data_path)?;

    let report = RefreshReport {
        data_path: data_path.clone(),
        started_at,
        finished_at: operations::stamp_now(),
        last_update,
        results,
    };

    info!(
        event = "core.refresh.completed",
        total = report.total_count(),
        scanned = report.scanned_count(),
        failed = report.failed_count(),
        last_update = %report.last_update
    );

    Ok(report)
}

use crate::catalog::{CatalogDocument, LAST_UPDATE_FORMAT};
use crate::fetch::PageFetcher;
use crate::refresh::errors::RefreshError;
use crate::refresh::types::{PlatformOutcome, PlatformResult};
use crate::scan;
use chrono::Local;
use tracing::{info, warn};

/// Current local time in the catalog's `last_update` format.
pub fn stamp_now() -> String {
    Local::now().format(LAST_UPDATE_FORMAT).to_string()
}

/// A platform to scan, as found in the catalog.
#[derive(Debug, Clone, PartialEq)]
pub enum ScanTarget {
    Url { platform: String, url: String },
    /// `doc` is present but not a string; the platform fails without a request
    InvalidDoc { platform: String, doc: String },
}

/// Resolve the `doc` entry of every platform, in order.
///
/// A platform missing from the catalog, or an entry with no `doc` at all,
/// fails the whole pass.
pub fn resolve_targets(
    doc: &CatalogDocument,
    platforms: &[String],
) -> Result<Vec<ScanTarget>, RefreshError> {
    platforms
        .iter()
        .map(|platform| {
            if !doc.contains_platform(platform) {
                return Err(RefreshError::PlatformMissing {
                    platform: platform.clone(),
                });
            }
            let value = doc
                .doc_value(platform)
                .ok_or_else(|| RefreshError::DocUrlMissing {
                    platform: platform.clone(),
                })?;
            Ok(match value.as_str() {
                Some(url) => ScanTarget::Url {
                    platform: platform.clone(),
                    url: url.to_string(),
                },
                None => ScanTarget::InvalidDoc {
                    platform: platform.clone(),
                    doc: value.to_string(),
                },
            })
        })
        .collect()
}

/// Produce the result for one target: scan a URL, or fail an unusable `doc`.
pub fn run_target<F: PageFetcher>(
    fetcher: &F,
    target: &ScanTarget,
    density_threshold: usize,
) -> PlatformResult {
    match target {
        ScanTarget::Url { platform, url } => {
            scan_platform(fetcher, platform, url, density_threshold)
        }
        ScanTarget::InvalidDoc { platform, doc } => {
            warn!(
                event = "core.refresh.platform_invalid_doc",
                platform = %platform,
                doc = %doc
            );

            PlatformResult {
                platform: platform.clone(),
                url: doc.clone(),
                outcome: PlatformOutcome::Failed {
                    reason: format!("doc URL is not a string: {}", doc),
                },
            }
        }
    }
}

/// Fetch and scan one platform page. Fetch failures become a `Failed` outcome.
pub fn scan_platform<F: PageFetcher>(
    fetcher: &F,
    platform: &str,
    url: &str,
    density_threshold: usize,
) -> PlatformResult {
    info!(event = "core.refresh.platform_started", platform = platform, url = url);

    let outcome = match fetcher.fetch(url) {
        Ok(body) => {
            let analysis = scan::deep_analyze_html(platform, &body);
            let depth_confirmed = analysis.is_depth_confirmed(density_threshold);

            info!(
                event = "core.refresh.platform_scanned",
                platform = platform,
                date_count = analysis.date_count,
                model_density = analysis.model_density,
                content_length = analysis.content_length,
                depth_confirmed = depth_confirmed
            );

            PlatformOutcome::Scanned {
                analysis,
                depth_confirmed,
            }
        }
        Err(e) => {
            warn!(
                event = "core.refresh.platform_failed",
                platform = platform,
                url = url,
                error = %e
            );

            PlatformOutcome::Failed {
                reason: e.to_string(),
            }
        }
    };

    PlatformResult {
        platform: platform.to_string(),
        url: url.to_string(),
        outcome,
    }
}

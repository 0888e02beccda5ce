use docwatch_core::{PlatformOutcome, RefreshReport};

/// Render the human-readable transcript of a refresh pass, one line per entry.
pub fn render_transcript(report: &RefreshReport) -> Vec<String> {
    let mut lines = vec![format!(
        "=== Starting Deep Scan at {} ===",
        report.started_at
    )];

    for result in &report.results {
        lines.push(format!("Scanning {}: {}...", result.platform, result.url));

        match &result.outcome {
            PlatformOutcome::Scanned {
                analysis,
                depth_confirmed,
            } => {
                lines.push(format!(
                    "  [Analysis] Found {} dates and {} model mentions.",
                    analysis.date_count, analysis.model_density
                ));
                if *depth_confirmed {
                    lines.push(format!(
                        "  [Info] Document depth confirmed for {}.",
                        result.platform
                    ));
                }
            }
            PlatformOutcome::Failed { reason } => {
                lines.push(format!(
                    "  [Warning] Failed to deep scan {}: {}",
                    result.platform, reason
                ));
            }
        }
    }

    lines.push(String::new());
    lines.push(format!(
        "✅ Deep scan complete: {} scanned, {} failed. last_update = {}",
        report.scanned_count(),
        report.failed_count(),
        report.last_update
    ));

    lines
}

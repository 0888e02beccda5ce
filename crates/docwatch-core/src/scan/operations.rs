use crate::scan::types::PageAnalysis;
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

static DATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d{4}\s*年\s*\d{1,2}\s*月\s*\d{1,2}\s*日)|(\d{4}-\d{2}-\d{2})")
        .expect("date pattern is valid")
});

static MODEL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)gemini-|claude-|llama-|titan-|imagen-").expect("model pattern is valid")
});

/// Run the deep scan heuristics over a page body.
///
/// `platform` only tags the debug event; every platform is scanned with the
/// same rules.
pub fn deep_analyze_html(platform: &str, html: &str) -> PageAnalysis {
    let analysis = PageAnalysis {
        date_count: DATE_PATTERN.find_iter(html).count(),
        model_density: MODEL_PATTERN.find_iter(html).count(),
        content_length: html.chars().count(),
    };

    debug!(
        event = "core.scan.analyze_completed",
        platform = platform,
        date_count = analysis.date_count,
        model_density = analysis.model_density,
        content_length = analysis.content_length
    );

    analysis
}

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with optional verbose mode.
///
/// When `verbose` is false, only error-level events are emitted (default),
/// so stdout stays reserved for the scan transcript.
/// When `verbose` is true, info-level and above events are emitted.
pub fn init_logging(verbose: bool) {
    let directive = if verbose {
        "docwatch=info"
    } else {
        "docwatch=error"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_current_span(false)
                .with_span_list(false),
        )
        .with(
            EnvFilter::from_default_env()
                .add_directive(directive.parse().expect("Invalid log directive")),
        )
        .init();
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_init_logging() {
        // Can only install a global subscriber once per test process, so this
        // is exercised through the CLI integration tests instead.
    }
}

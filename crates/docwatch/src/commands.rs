use clap::ArgMatches;
use std::path::PathBuf;
use std::time::Duration;
use tracing::error;

use docwatch_core::{RefreshConfig, events, refresh_ops};

use crate::output::render_transcript;

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let config = build_config(matches)?;
    let json_output = matches.get_flag("json");

    events::log_app_startup(&config, json_output);

    let report = match refresh_ops::run_refresh(&config) {
        Ok(report) => report,
        Err(e) if e.is_catalog_missing() => {
            // Missing catalog is reported, not treated as a failed run
            println!("Error: {}", e);
            events::log_catalog_missing(&e);
            return Ok(());
        }
        Err(e) => {
            eprintln!("❌ Refresh failed: {}", e);
            error!(event = "cli.refresh_failed", error = %e);
            events::log_app_error(&e);
            return Err(e.into());
        }
    };

    if json_output {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for line in render_transcript(&report) {
            println!("{}", line);
        }
    }

    events::log_refresh_completed(&report);

    Ok(())
}

/// Apply CLI overrides on top of the default refresh configuration.
fn build_config(matches: &ArgMatches) -> Result<RefreshConfig, Box<dyn std::error::Error>> {
    let mut config = match matches.get_one::<PathBuf>("data") {
        Some(path) => RefreshConfig::for_path(path),
        None => RefreshConfig::new()?,
    };

    if let Some(platforms) = matches.get_many::<String>("platform") {
        config = config.with_platforms(platforms.cloned().collect());
    }
    if let Some(&secs) = matches.get_one::<u64>("timeout") {
        config = config.with_timeout(Duration::from_secs(secs));
    }
    if let Some(&threshold) = matches.get_one::<usize>("threshold") {
        config = config.with_density_threshold(threshold);
    }

    Ok(config)
}

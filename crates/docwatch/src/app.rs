use clap::{Arg, ArgAction, Command, value_parser};

pub fn build_cli() -> Command {
    Command::new("docwatch")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Deep scan model catalog documentation pages and stamp the catalog")
        .long_about("docwatch fetches the documentation page of every platform listed in the catalog document, counts date mentions and model-name prefixes in each page, and writes the time of the check back to the catalog's last_update field. Running it with no arguments performs one pass over the default catalog.")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("data")
                .long("data")
                .short('d')
                .value_name("PATH")
                .help("Catalog document to scan (default: data/models.json next to the executable)")
                .value_parser(value_parser!(std::path::PathBuf)),
        )
        .arg(
            Arg::new("platform")
                .long("platform")
                .short('p')
                .value_name("KEY")
                .help("Platform key to scan; repeat to scan several (default: bedrock, gcp)")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("timeout")
                .long("timeout")
                .short('t')
                .value_name("SECS")
                .help("Per-request timeout in seconds (default: 15)")
                .value_parser(value_parser!(u64).range(1..)),
        )
        .arg(
            Arg::new("threshold")
                .long("threshold")
                .value_name("N")
                .help("Model mentions above which a page counts as depth-confirmed (default: 10)")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Output the scan report in JSON format")
                .action(ArgAction::SetTrue),
        )
}

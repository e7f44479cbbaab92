mod commands;
mod config;
mod context;
mod logging;
mod output;

use clap::Parser;
use log::{info, warn};
use rfband::{Allocations, Range};

use crate::context::{Cli, Commands, OutputFormat};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    // Load config file: explicit path > auto-detect > default
    let (config, config_path) = config::load(cli.config.as_deref())?;

    logging::init_logging(cli.verbose, config.logging.level.as_deref())?;
    if let Some(path) = &config_path {
        info!("Loaded config from: {}", path.display());
    }

    // Command line takes precedence over the config file
    let format = cli.format.or(config.output.format).unwrap_or_default();

    println!("{}", execute(cli.command, format, &config.band_plan)?);
    Ok(())
}

/// Run one subcommand and render its report.
fn execute(
    command: Commands,
    format: OutputFormat,
    band_plan: &Allocations,
) -> Result<String, serde_json::Error> {
    match command {
        Commands::Parse { frequencies } => {
            let reports: Vec<_> = frequencies.into_iter().map(commands::parse_report).collect();
            output::render(format, reports.as_slice())
        }
        Commands::Lookup { frequency } => {
            let report = commands::lookup(frequency, band_plan);
            if report.matches.is_empty() {
                warn!("{} is not in any known allocation", frequency);
            }
            output::render(format, &report)
        }
        Commands::Bands { table } => {
            let rows = commands::list_bands(table, band_plan);
            output::render(format, rows.as_slice())
        }
        Commands::Range {
            low,
            high,
            shift,
            against,
        } => {
            let against = match against.as_deref() {
                Some(&[low, high]) => Some(Range::new(low, high)),
                _ => None,
            };
            let report = commands::range_report(low, high, shift, against);
            output::render(format, &report)
        }
    }
}

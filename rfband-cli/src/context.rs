use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rfband::{parse_hz, Hz};
use serde::Deserialize;

#[derive(Debug, Parser)]
#[clap(name = "rfband")]
#[clap(about = "rfband parses radio frequencies, classifies them into ITU/SI bands and does range math. ", long_about = None)]
#[clap(author = "maleicacid")]
#[clap(version)]
pub(crate) struct Cli {
    /// Configuration file path.{n}
    /// Defaults to `rfband.toml` in the current directory if it exists.
    #[clap(short = 'f', long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[clap(short, long, global = true)]
    pub verbose: bool,

    /// Output format.{n}
    /// Overrides `output.format` from the configuration file.
    #[clap(value_enum, long, global = true)]
    pub format: Option<OutputFormat>,

    #[clap(subcommand)]
    pub command: Commands,
}

/// Output format for reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
}

/// Allocation table selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub(crate) enum TableChoice {
    /// SI magnitude bands (KHz, MHz, GHz)
    Si,
    /// ITU bands (ELF through EHF)
    Itu,
    /// Band plan from the configuration file
    Plan,
    /// All of the above
    #[default]
    All,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// Parse frequencies.{n}
    /// Prints each frequency in normalized form together with its value in Hz,
    /// the SI and ITU band it falls in, and its wavelength.
    #[clap(name = "parse")]
    Parse {
        /// Frequencies such as `144.39MHz`, `-10Hz` or `2.4ghz`.
        #[clap(required = true, allow_hyphen_values = true, value_parser = parse_hz)]
        frequencies: Vec<Hz>,
    },
    /// Find every allocation containing a frequency.{n}
    /// Searches the SI bands, the ITU bands and the configured band plan.
    #[clap(name = "lookup")]
    Lookup {
        #[clap(allow_hyphen_values = true, value_parser = parse_hz)]
        frequency: Hz,
    },
    /// List allocation tables.
    #[clap(name = "bands")]
    Bands {
        #[clap(value_enum, long, default_value_t = TableChoice::All)]
        table: TableChoice,
    },
    /// Range arithmetic.{n}
    /// Prints center and width of LOW..HIGH, optionally shifted, and how it
    /// relates to a second range given with `--against`.
    #[clap(name = "range")]
    Range {
        #[clap(allow_hyphen_values = true, value_parser = parse_hz)]
        low: Hz,

        #[clap(allow_hyphen_values = true, value_parser = parse_hz)]
        high: Hz,

        /// Shift the range by this frequency before comparing.
        #[clap(long, allow_hyphen_values = true, value_parser = parse_hz)]
        shift: Option<Hz>,

        /// A second range to compare against.
        #[clap(
            long,
            num_args = 2,
            value_names = ["LOW", "HIGH"],
            allow_hyphen_values = true,
            value_parser = parse_hz
        )]
        against: Option<Vec<Hz>>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_debug_assert() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_subcommand() {
        let cli = Cli::try_parse_from(["rfband", "parse", "144.39MHz", "-10Hz"]).unwrap();
        match cli.command {
            Commands::Parse { frequencies } => {
                assert_eq!(frequencies, vec![Hz::new(144_390_000.0), Hz::new(-10.0)]);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_bad_frequency() {
        assert!(Cli::try_parse_from(["rfband", "parse", "10XHz"]).is_err());
        assert!(Cli::try_parse_from(["rfband", "lookup", ""]).is_err());
    }

    #[test]
    fn test_range_subcommand() {
        let cli = Cli::try_parse_from([
            "rfband", "--format", "json", "range", "-3kHz", "3kHz", "--shift", "144.39MHz",
            "--against", "144.388MHz", "144.5MHz",
        ])
        .unwrap();
        assert_eq!(cli.format, Some(OutputFormat::Json));
        match cli.command {
            Commands::Range {
                low,
                high,
                shift,
                against,
            } => {
                assert_eq!(low, Hz::new(-3000.0));
                assert_eq!(high, Hz::new(3000.0));
                assert_eq!(shift, Some(Hz::new(144_390_000.0)));
                assert_eq!(
                    against,
                    Some(vec![Hz::new(144_388_000.0), Hz::new(144_500_000.0)])
                );
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_bands_default_table() {
        let cli = Cli::try_parse_from(["rfband", "bands"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Bands {
                table: TableChoice::All
            }
        ));
    }
}

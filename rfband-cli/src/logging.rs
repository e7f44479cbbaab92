//! Console logging setup.

use env_logger::{Builder, Env};

/// Filter used when neither `-v`, the config file nor `RUST_LOG` set one.
const DEFAULT_FILTER: &str = "warn";

/// Pick the log filter: `-v` > config `logging.level` > default.
/// `RUST_LOG` still overrides whatever is returned here.
pub(crate) fn default_filter(verbose: bool, configured: Option<&str>) -> &str {
    if verbose {
        "debug"
    } else {
        configured.unwrap_or(DEFAULT_FILTER)
    }
}

/// Initialize the logger. Logs go to stderr so reports on stdout stay
/// machine readable.
pub(crate) fn init_logging(verbose: bool, configured: Option<&str>) -> Result<(), log::SetLoggerError> {
    Builder::from_env(Env::default().default_filter_or(default_filter(verbose, configured)))
        .format_target(true)
        .try_init()
}

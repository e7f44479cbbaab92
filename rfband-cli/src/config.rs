//! Configuration file loading.
//!
//! The configuration is a TOML file. It is looked up in the following order:
//! 1. The path given with `--config`
//! 2. `rfband.toml` in the current directory
//! 3. Default values
//!
//! ```toml
//! [logging]
//! level = "info"
//!
//! [output]
//! format = "table"
//!
//! [[band_plan]]
//! name = "2m"
//! range = { low = "144MHz", high = "148MHz" }
//! ```

use std::path::{Path, PathBuf};

use log::debug;
use rfband::Allocations;
use serde::Deserialize;
use thiserror::Error;

use crate::context::OutputFormat;

/// Default configuration file name, looked up in the current directory.
pub(crate) const DEFAULT_CONFIG_FILE: &str = "rfband.toml";

/// Errors raised while loading the configuration file.
#[derive(Error, Debug)]
pub(crate) enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Configuration file format.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ConfigFile {
    #[serde(default)]
    pub logging: LoggingSection,
    #[serde(default)]
    pub output: OutputSection,
    /// User defined allocations, searched by `lookup` and listed by `bands`.
    #[serde(default)]
    pub band_plan: Allocations,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct LoggingSection {
    pub level: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct OutputSection {
    pub format: Option<OutputFormat>,
}

impl ConfigFile {
    /// Parse configuration from TOML text.
    pub fn from_toml(path: &Path, contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Load a configuration file from `path`.
pub(crate) fn load_config(path: &Path) -> Result<ConfigFile, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config = ConfigFile::from_toml(path, &contents)?;
    debug!(
        "Band plan from {} has {} entries",
        path.display(),
        config.band_plan.len()
    );
    Ok(config)
}

/// Pick the configuration file: explicit path > auto-detect in `dir` > none.
pub(crate) fn resolve_config_path(explicit: Option<&Path>, dir: &Path) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    let default_path = dir.join(DEFAULT_CONFIG_FILE);
    default_path.exists().then_some(default_path)
}

/// Resolve and load the configuration, falling back to defaults when no
/// file is found. Returns the path that was loaded, if any.
pub(crate) fn load(explicit: Option<&Path>) -> Result<(ConfigFile, Option<PathBuf>), ConfigError> {
    let dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    match resolve_config_path(explicit, &dir) {
        Some(path) => Ok((load_config(&path)?, Some(path))),
        None => Ok((ConfigFile::default(), None)),
    }
}

//! Generation settings loaded from `pharma-synth.toml`
//!
//! Only ambient settings live here: where the CSV files are appended and how
//! the RNG is seeded. The dataset itself always has the same shape. With no
//! file present the generator appends to the working directory using an
//! entropy-seeded RNG.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::{
    io,
    path::{Path, PathBuf},
};

/// Environment variable overriding the configuration file location.
pub const CONFIG_PATH_ENV: &str = "PHARMA_SYNTH_CONFIG";
/// Configuration file read when no override is set.
pub const DEFAULT_CONFIG_PATH: &str = "pharma-synth.toml";

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Directory the CSV files are appended to
    pub output_dir: PathBuf,
    /// Fixed RNG seed; `None` seeds from OS entropy
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            seed: None,
        }
    }
}

/// Parses configuration from TOML text.
///
/// # Errors
/// Returns an error if the TOML is invalid or contains unknown keys.
pub fn parse_config(contents: &str) -> Result<GeneratorConfig> {
    toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse configuration: {e}"),
    })
}

/// Loads configuration from `path`, falling back to defaults if the file does not exist.
///
/// # Errors
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<GeneratorConfig> {
    let path_ref = path.as_ref();
    tracing::debug!("Attempting to load configuration from: {:?}", path_ref);
    match std::fs::read_to_string(path_ref) {
        Ok(contents) => parse_config(&contents),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::info!("No configuration at {:?}, using defaults", path_ref);
            Ok(GeneratorConfig::default())
        }
        Err(e) => Err(Error::Config {
            message: format!("Failed to read config file {path_ref:?}: {e}"),
        }),
    }
}

/// Loads configuration from `$PHARMA_SYNTH_CONFIG`, or `./pharma-synth.toml` when unset.
///
/// # Errors
/// Returns an error if the selected file exists but cannot be read or parsed.
pub fn load_default_config() -> Result<GeneratorConfig> {
    let path = std::env::var_os(CONFIG_PATH_ENV)
        .map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from);
    load_config(path)
}

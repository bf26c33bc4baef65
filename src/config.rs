use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};

use crate::pipeline::DEFAULT_MAX_INPUT_BYTES;

/// Central configuration loaded from environment variables.
///
/// Nothing is required; every setting has a default. The .env file is
/// loaded at startup via dotenvy, so values can live there instead.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Largest input accepted for analysis, in bytes (LAFZ_MAX_INPUT_BYTES)
    pub max_input_bytes: usize,
    /// How many symbols to show in the bar chart (LAFZ_TOP_SYMBOLS)
    pub top_symbols: usize,
    /// Where `--csv` writes when no path is given (LAFZ_CSV_PATH)
    pub csv_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
            top_symbols: 5,
            csv_path: PathBuf::from("punjabi_neologisms.csv"),
        }
    }
}

impl Config {
    /// Load configuration from the process environment.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. Split out from `load` so
    /// tests don't have to mutate the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let max_input_bytes =
            parse_var(&lookup, "LAFZ_MAX_INPUT_BYTES")?.unwrap_or(defaults.max_input_bytes);
        if max_input_bytes == 0 {
            anyhow::bail!("LAFZ_MAX_INPUT_BYTES must be greater than zero");
        }

        Ok(Self {
            max_input_bytes,
            top_symbols: parse_var(&lookup, "LAFZ_TOP_SYMBOLS")?.unwrap_or(defaults.top_symbols),
            csv_path: lookup("LAFZ_CSV_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.csv_path),
        })
    }
}

fn parse_var<F, T>(lookup: &F, key: &str) -> Result<Option<T>>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    lookup(key)
        .map(|raw| {
            raw.trim()
                .parse::<T>()
                .with_context(|| format!("{key} is not a valid number: {raw:?}"))
        })
        .transpose()
}

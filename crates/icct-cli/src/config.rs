//! Application configuration.
//!
//! Defaults come from the environment; a JSON file passed with `--config`
//! overrides them field by field.

use std::path::Path;

use icct_core::color::HexCase;
use serde::{Deserialize, Serialize};

use crate::error::CliError;

/// Default `tracing` filter.
const DEFAULT_LOG_FILTER: &str = "info";

/// Runtime configuration for the `icct` command line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Chain filter steps onto the previous result instead of restarting
    /// from the original each time.
    pub cumulative: bool,
    /// Letter case of hex colours in picker output.
    pub hex_case: HexCase,
    /// `tracing` filter directive, e.g. `info` or `icct_core=debug`.
    pub log: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }
}

impl AppConfig {
    /// Build defaults from `ICCT_CUMULATIVE`, `ICCT_HEX_UPPERCASE` and
    /// `ICCT_LOG`, read through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let flag = |key: &str| lookup(key).and_then(|v| parse_flag(&v));

        Self {
            cumulative: flag("ICCT_CUMULATIVE").unwrap_or(false),
            hex_case: match flag("ICCT_HEX_UPPERCASE") {
                Some(false) => HexCase::Lower,
                _ => HexCase::Upper,
            },
            log: lookup("ICCT_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        }
    }

    /// Defaults, overridden by the JSON file at `path` when given.
    pub fn load(path: Option<&Path>) -> Result<Self, CliError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = std::fs::read_to_string(path).map_err(|source| CliError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| CliError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

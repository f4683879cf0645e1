use crate::event::DEFAULT_CURRENCY;
use anyhow::{ensure, Context, Result};
use serde::Deserialize;
use std::{fs, path::Path};

pub const DEFAULT_LOG_FILTER: &str = "lot_auction=warn";

/// Console auction settings, read from a TOML file
///
/// Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Printed in front of every amount
    pub currency: String,
    /// `tracing` filter directive used unless `RUST_LOG` is set
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency: DEFAULT_CURRENCY.to_owned(),
            log_filter: DEFAULT_LOG_FILTER.to_owned(),
        }
    }
}

impl Settings {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let settings: Self = toml::from_str(s).context("invalid settings")?;
        ensure!(
            !settings.log_filter.trim().is_empty(),
            "log_filter must not be empty"
        );
        Ok(settings)
    }

    /// Load settings from `path`, or the defaults when there is none
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let s = fs::read_to_string(path)
            .with_context(|| format!("failed to read settings from {}", path.display()))?;
        Self::from_toml_str(&s).with_context(|| format!("in {}", path.display()))
    }
}

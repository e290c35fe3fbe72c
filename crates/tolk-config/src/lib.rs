use std::env;

use serde::{Deserialize, Serialize};

use self::translator::TranslatorConfig;
use self::ui::UiConfig;

pub mod translator;
pub mod ui;

#[derive(Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub translator: TranslatorConfig,
    pub ui: UiConfig,
}

impl Config {
    /// Read the whole config from the process environment
    pub fn new() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from any key lookup, unset keys fall back to defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Config {
            translator: TranslatorConfig::from_lookup(&lookup),
            ui: UiConfig::from_lookup(&lookup),
        }
    }
}

/// Parse a numeric variable, logging and ignoring values that don't parse
pub(crate) fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Option<T> {
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!("Ignoring {key}={raw:?}: not a valid number");
            None
        }
    }
}

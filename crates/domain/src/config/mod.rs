//! Configuration module for Cinder DNS
//!
//! Configuration structures organized by area:
//! - `hosts`: hosts-file resolver settings
//! - `errors`: configuration errors

pub mod errors;
pub mod hosts;

pub use errors::ConfigError;
pub use hosts::HostsConfig;

use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Top-level resolver configuration, loaded from TOML.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub hosts: HostsConfig,
}

impl Config {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text =
            fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::from_toml_str(&text)
    }
}

use anyhow::{Context, Result};
use serde::Deserialize;
use std::{fs, path};

use crate::level::LogLevel;

pub const DEFAULT_CONFIG_FILE: &str = "levelfmt.toml";

#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub output: Output,
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Output {
    pub color: bool,
    pub min_level: LogLevel,
}

impl Default for Output {
    fn default() -> Self {
        Output {
            color: true,
            min_level: LogLevel::Warn,
        }
    }
}

impl Config {
    /// Load `path` if given, otherwise `levelfmt.toml` in the current
    /// directory when it exists, otherwise the defaults.
    pub fn load(path: Option<&path::Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let default = path::PathBuf::from(DEFAULT_CONFIG_FILE);
                if !default.exists() {
                    return Ok(Config::default());
                }
                default
            }
        };

        let config_str = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file at {}", path.display()))?;
        Self::parse(&config_str)
            .with_context(|| format!("Invalid config file at {}", path.display()))
    }

    pub fn parse(config_str: &str) -> Result<Self> {
        Ok(toml::from_str(config_str)?)
    }
}

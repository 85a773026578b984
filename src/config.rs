//! Configuration file support for verdict.
//!
//! This module handles loading and discovering `.verdict.yaml` configuration
//! files, which control the default retention policy and the teardown
//! output.

use anyhow::{Context as _, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::output::{OutputConfig, OutputMode};

/// Default configuration embedded at compile time.
const DEFAULT_CONFIG_STR: &str = include_str!("../default.verdict.yaml");

/// Parsed default config, initialized once on first access.
fn default_config() -> &'static Config {
    static CONFIG: OnceLock<Config> = OnceLock::new();
    CONFIG.get_or_init(|| {
        serde_yaml::from_str(DEFAULT_CONFIG_STR)
            .expect("embedded default.verdict.yaml should be valid YAML")
    })
}

/// Configuration for test cases.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Retain only failed assertions (passed ones are still counted).
    #[serde(default)]
    pub only_failures: bool,

    /// When to print the rendered log at teardown.
    pub log: OutputMode,

    /// Force ANSI colors on or off; unset means auto-detect from TTY.
    #[serde(default)]
    pub colors: Option<bool>,

    /// Maximum characters before truncating an assertion message.
    pub truncate_at: usize,
}

impl Default for Config {
    fn default() -> Self {
        default_config().clone()
    }
}

impl Config {
    /// Discover config by searching from start_dir upward.
    pub fn discover(start_dir: &Path) -> Option<Self> {
        let config_path = find_config_file(start_dir)?;
        load_config(&config_path).ok()
    }

    /// Load config from explicit path.
    pub fn load(path: &Path) -> Result<Self> {
        load_config(path)
    }

    /// Build the output settings this config describes.
    pub fn output(&self) -> OutputConfig {
        let output = OutputConfig::new()
            .log(self.log)
            .truncate_at(self.truncate_at);

        match self.colors {
            Some(enabled) => output.colors(enabled),
            None => output,
        }
    }
}

/// Search for a config file starting from start_dir and walking up to root.
fn find_config_file(start: &Path) -> Option<PathBuf> {
    let mut current = start.canonicalize().ok()?;

    loop {
        let candidate = current.join(".verdict.yaml");
        if candidate.exists() {
            return Some(candidate);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load and parse a config file.
fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;
    let config: Config = serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;
    Ok(config)
}

//! Configuration loading
//!
//! Reads `~/.config/regex-lens/config.toml`. A missing or unreadable file
//! falls back to defaults so the tool always starts.

use std::fs;
use std::path::{Path, PathBuf};

mod types;

pub use types::{
    Config, DEFAULT_SERVICE_URL, DEFAULT_TIMEOUT_SECS, DisplayConfig, OutputFormat, ServiceConfig,
};

const CONFIG_DIR: &str = "regex-lens";
const CONFIG_FILE: &str = "config.toml";

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

pub fn load_config() -> Config {
    let Some(path) = config_path() else {
        return Config::default();
    };

    load_config_from_path(&path)
}

pub fn load_config_from_path(path: &Path) -> Config {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            log::debug!("No config at {}: {}", path.display(), e);
            return Config::default();
        }
    };

    parse_config_toml(&contents)
}

pub fn parse_config_toml(content: &str) -> Config {
    match toml::from_str::<Config>(content) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Ignoring invalid config: {}", e);
            Config::default()
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;

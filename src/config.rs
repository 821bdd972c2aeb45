//! Configuration loading
//!
//! Reads `~/.config/locpick/config.toml`. A missing default file means defaults; a file
//! named explicitly on the command line must exist.

mod types;

use std::fs;
use std::path::{Path, PathBuf};

pub use types::{AutocompleteConfig, Config, LookupConfig};

use crate::error::LocpickError;

const CONFIG_DIR: &str = "locpick";
const CONFIG_FILE: &str = "config.toml";

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load the configuration from `explicit` if given, otherwise from the default location
pub fn load_config(explicit: Option<&Path>) -> Result<Config, LocpickError> {
    if let Some(path) = explicit {
        return load_config_from_path(path);
    }

    match config_path() {
        Some(path) if path.exists() => load_config_from_path(&path),
        _ => {
            log::debug!("No config file found, using defaults");
            Ok(Config::default())
        }
    }
}

pub fn load_config_from_path(path: &Path) -> Result<Config, LocpickError> {
    let contents = fs::read_to_string(path).map_err(|source| LocpickError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config_toml(&contents).map_err(|e| LocpickError::ConfigParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

pub fn parse_config_toml(content: &str) -> Result<Config, toml::de::Error> {
    toml::from_str(content)
}

// src/config/io.rs
use super::types::{Config, InvisiblesToml};
use crate::error::{InvisiblesError, Result};
use colored::Colorize;
use std::fs;
use std::path::Path;

pub const CONFIG_FILE: &str = "invisibles.toml";

/// Loads `invisibles.toml` from `dir` into `config`.
///
/// A missing file leaves the defaults in place. A malformed file is reported
/// on stderr and also leaves the defaults in place.
pub fn load_toml_config(config: &mut Config, dir: &Path) {
    let path = dir.join(CONFIG_FILE);
    let Ok(content) = fs::read_to_string(&path) else {
        return;
    };
    if let Err(e) = parse_toml(config, &content) {
        eprintln!(
            "{} ignoring {}: {e}",
            "warning:".yellow().bold(),
            path.display()
        );
    }
}

/// Applies TOML `content` to `config`.
///
/// # Errors
/// Returns `InvisiblesError::Config` if the TOML does not parse.
pub fn parse_toml(config: &mut Config, content: &str) -> Result<()> {
    let parsed: InvisiblesToml = toml::from_str(content)?;
    config.preferences = parsed.preferences;
    config.scan = parsed.scan;
    Ok(())
}

/// Writes the current settings to `invisibles.toml` in `dir`.
///
/// # Errors
/// Returns error if serialization or the file write fails.
pub fn save_to_file(config: &Config, dir: &Path) -> Result<()> {
    let toml = InvisiblesToml {
        preferences: config.preferences.clone(),
        scan: config.scan.clone(),
    };
    let content =
        toml::to_string_pretty(&toml).map_err(|e| InvisiblesError::Config(e.to_string()))?;
    let path = dir.join(CONFIG_FILE);
    fs::write(&path, content).map_err(|e| InvisiblesError::io(e, path))
}

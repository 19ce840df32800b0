// src/config/mod.rs
pub mod io;
pub mod types;

pub use self::io::CONFIG_FILE;
pub use self::types::{Config, InvisiblesToml, Preferences, ScanConfig};
use crate::error::Result;
use crate::scanner::CancelToken;
use std::path::Path;
use std::time::Duration;

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new config and loads `invisibles.toml` from the working
    /// directory, if present.
    #[must_use]
    pub fn load() -> Self {
        let mut config = Self::new();
        config.load_local_config();
        config
    }

    pub fn load_local_config(&mut self) {
        self.load_from(Path::new("."));
    }

    pub fn load_from(&mut self, dir: &Path) {
        io::load_toml_config(self, dir);
    }

    /// Applies TOML settings on top of the current ones.
    ///
    /// # Errors
    /// Returns error if the TOML is malformed.
    pub fn parse_toml(&mut self, content: &str) -> Result<()> {
        io::parse_toml(self, content)
    }

    /// Saves the current configuration to `invisibles.toml` in `dir`.
    ///
    /// # Errors
    /// Returns error if file write fails.
    pub fn save(&self, dir: &Path) -> Result<()> {
        io::save_to_file(self, dir)
    }

    /// Scan deadline, if one is configured.
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        match self.scan.timeout_ms {
            0 => None,
            ms => Some(Duration::from_millis(ms)),
        }
    }

    /// A fresh cancellation token honoring the configured deadline.
    #[must_use]
    pub fn cancel_token(&self) -> CancelToken {
        self.timeout()
            .map_or_else(CancelToken::new, CancelToken::with_timeout)
    }
}

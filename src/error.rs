// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InvisiblesError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Scan cancelled before completion")]
    Cancelled,

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, InvisiblesError>;

// Allow `?` on std::io::Error by converting to InvisiblesError::Io with unknown path.
impl From<std::io::Error> for InvisiblesError {
    fn from(source: std::io::Error) -> Self {
        InvisiblesError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}

impl From<toml::de::Error> for InvisiblesError {
    fn from(e: toml::de::Error) -> Self {
        InvisiblesError::Config(e.to_string())
    }
}

impl InvisiblesError {
    /// Attaches a path to an I/O error.
    #[must_use]
    pub fn io(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        InvisiblesError::Io {
            source,
            path: path.into(),
        }
    }
}

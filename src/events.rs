// src/events.rs
//! Machine-readable event logging for audit trails.
//!
//! Events are appended to `.invisibles/events.jsonl`.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    ScanStarted {
        source: String,
        chars: usize,
    },
    ScanCompleted {
        source: String,
        findings: usize,
        kinds: usize,
    },
    ScanCancelled {
        source: String,
    },
    ReportWritten {
        path: String,
        bytes: usize,
    },
    ReportCopied {
        bytes: usize,
    },
    CopyFailed {
        error: String,
    },
}

#[derive(Debug, Serialize, Deserialize)]
pub struct InvisiblesEvent {
    pub timestamp: u64,
    pub kind: EventKind,
}

#[derive(Clone)]
pub struct EventLogger {
    log_path: Option<PathBuf>,
}

impl EventLogger {
    #[must_use]
    pub fn new(root: &Path) -> Self {
        let log_path = root.join(".invisibles").join("events.jsonl");
        Self {
            log_path: Some(log_path),
        }
    }

    /// A logger that drops every event.
    #[must_use]
    pub fn disabled() -> Self {
        Self { log_path: None }
    }

    pub fn log(&self, kind: EventKind) {
        let Some(path) = &self.log_path else {
            return;
        };
        // Logging is best-effort. Errors never reach the caller.
        if let Ok(json) = Self::serialize_event(kind) {
            let _ = Self::append_to_file(path, &json);
        }
    }

    fn serialize_event(kind: EventKind) -> Result<String> {
        let timestamp = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs();
        let event = InvisiblesEvent { timestamp, kind };
        Ok(serde_json::to_string(&event)?)
    }

    fn append_to_file(path: &Path, line: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        writeln!(file, "{line}")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_one_json_line_per_event() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let logger = EventLogger::new(dir.path());
        logger.log(EventKind::ScanStarted { source: "a.txt".into(), chars: 3 });
        logger.log(EventKind::ReportCopied { bytes: 10 });

        let content = fs::read_to_string(dir.path().join(".invisibles/events.jsonl"))?;
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: InvisiblesEvent = serde_json::from_str(lines[0])?;
        assert_eq!(
            first.kind,
            EventKind::ScanStarted { source: "a.txt".into(), chars: 3 }
        );
        Ok(())
    }

    #[test]
    fn disabled_logger_writes_nothing() -> Result<()> {
        let dir = tempfile::tempdir()?;
        EventLogger::disabled().log(EventKind::ReportCopied { bytes: 1 });
        assert!(!dir.path().join(".invisibles").exists());
        Ok(())
    }
}

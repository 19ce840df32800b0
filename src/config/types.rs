use crate::report::REPORT_FILE_NAME;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    /// Copy the generated report to the clipboard after `report`.
    #[serde(default)]
    pub auto_copy: bool,
    #[serde(default = "default_report_path")]
    pub report_path: String,
    /// Append JSONL events to `.invisibles/events.jsonl`.
    #[serde(default)]
    pub event_log: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            auto_copy: false,
            report_path: default_report_path(),
            event_log: false,
        }
    }
}

fn default_report_path() -> String {
    REPORT_FILE_NAME.to_string()
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Per-input scan deadline in milliseconds. 0 disables it.
    #[serde(default)]
    pub timeout_ms: u64,
}

/// On-disk shape of `invisibles.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InvisiblesToml {
    #[serde(default)]
    pub preferences: Preferences,
    #[serde(default)]
    pub scan: ScanConfig,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub verbose: bool,
    pub preferences: Preferences,
    pub scan: ScanConfig,
}

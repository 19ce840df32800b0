// src/exit.rs
//! Standardized process exit codes for `invisibles`.
//!
//! Provides a stable contract for scripts and automation.

use colored::Colorize;
use std::process::Termination;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum InvisiblesExit {
    /// Operation completed and the text is clean.
    Success = 0,
    /// Generic error (e.g. IO, clipboard, config).
    Error = 1,
    /// Input validation failed (index out of range, no input text).
    InvalidInput = 2,
    /// Invisible characters were found.
    Found = 6,
}

impl InvisiblesExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl Termination for InvisiblesExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}

impl From<anyhow::Result<InvisiblesExit>> for InvisiblesExit {
    fn from(res: anyhow::Result<InvisiblesExit>) -> Self {
        match res {
            Ok(code) => code,
            Err(e) => {
                eprintln!("{} {e:#}", "error:".red().bold());
                Self::Error
            }
        }
    }
}

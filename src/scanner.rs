// src/scanner.rs
//! Walks text one scalar value at a time and records registry matches.

use crate::error::{InvisiblesError, Result};
use crate::registry;
use crate::types::ScanResult;
use rayon::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// How many scalars are scanned between cancellation checks.
const CHECK_INTERVAL: usize = 4096;

/// Cooperative cancellation for long scans.
///
/// Clones share the same flag, so one handle can be given to another thread
/// and tripped from there.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
    timeout: Option<Duration>,
    deadline: Option<Instant>,
}

impl CancelToken {
    /// A token that only trips when [`CancelToken::cancel`] is called.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A token that also trips once `timeout` has elapsed from now.
    #[must_use]
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            flag: Arc::default(),
            timeout: Some(timeout),
            deadline: Instant::now().checked_add(timeout),
        }
    }

    /// A handle on the same flag whose deadline starts counting again now.
    #[must_use]
    pub fn restarted(&self) -> Self {
        Self {
            flag: Arc::clone(&self.flag),
            timeout: self.timeout,
            deadline: self.timeout.and_then(|t| Instant::now().checked_add(t)),
        }
    }

    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
            || self.deadline.is_some_and(|d| Instant::now() >= d)
    }
}

/// Scans `text` for registered invisible characters.
///
/// Never fails: any string, including an empty one, produces a result.
#[must_use]
pub fn scan(text: &str) -> ScanResult {
    let mut result = ScanResult::default();
    for (index, c) in text.chars().enumerate() {
        if let Some(def) = registry::lookup(c) {
            result.push(index, def);
        }
        result.char_count = index + 1;
    }
    result
}

/// Like [`scan`], but checks `token` periodically and stops early.
///
/// # Errors
/// Returns `InvisiblesError::Cancelled` if the token trips mid-scan.
pub fn scan_with(text: &str, token: &CancelToken) -> Result<ScanResult> {
    let mut result = ScanResult::default();
    for (index, c) in text.chars().enumerate() {
        if index % CHECK_INTERVAL == 0 && token.is_cancelled() {
            return Err(InvisiblesError::Cancelled);
        }
        if let Some(def) = registry::lookup(c) {
            result.push(index, def);
        }
        result.char_count = index + 1;
    }
    Ok(result)
}

/// Scans independent texts in parallel. Results keep the input order.
///
/// Each text gets its own deadline from `token`; cancelling `token` stops
/// them all.
///
/// # Errors
/// Returns `InvisiblesError::Cancelled` if any scan is cancelled.
pub fn scan_many<S>(texts: &[S], token: &CancelToken) -> Result<Vec<ScanResult>>
where
    S: AsRef<str> + Sync,
{
    texts
        .par_iter()
        .map(|t| scan_with(t.as_ref(), &token.restarted()))
        .collect()
}

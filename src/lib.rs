// src/lib.rs
//! Detection and reporting of invisible Unicode characters.
//!
//! The core is [`scanner::scan`], which turns text into a [`types::ScanResult`],
//! and [`report::generate_report`], which renders that result as the plain-text
//! analysis report. Everything under [`cli`] is a thin caller on top.

pub mod cli;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod events;
pub mod exit;
pub mod input;
pub mod registry;
pub mod report;
pub mod scanner;
pub mod selection;
pub mod text;
pub mod types;

pub use registry::{lookup, InvisibleCharDef, INVISIBLE_CHARS};
pub use report::generate_report;
pub use scanner::{scan, scan_with, CancelToken};
pub use selection::{locate, selection_range, Location};
pub use types::{Finding, GroupEntry, GroupedCount, ScanResult};

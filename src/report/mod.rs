// src/report/mod.rs
//! Renderings of a scan result.
//!
//! `text` is the interchange format shared with existing reports and must
//! stay byte-stable. The other renderers are free to evolve.

pub mod json;
pub mod preview;
pub mod terminal;
pub mod text;

pub use self::text::{excerpt, excerpt_in, generate_report, REPORT_CONTENT_TYPE, REPORT_FILE_NAME};

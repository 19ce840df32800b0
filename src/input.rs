// src/input.rs
//! Where scanned text comes from. Every source is decoded lossily: malformed
//! UTF-8 becomes U+FFFD instead of an error.

use crate::clipboard;
use crate::error::{InvisiblesError, Result};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    File(PathBuf),
    Stdin,
    Clipboard,
}

impl InputSource {
    /// Human-readable label used in output and events.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::File(path) => path.display().to_string(),
            Self::Stdin => "<stdin>".to_string(),
            Self::Clipboard => "<clipboard>".to_string(),
        }
    }

    /// Reads the full text from this source.
    ///
    /// # Errors
    /// Returns error if the file, stdin or clipboard cannot be read.
    pub fn read(&self) -> Result<String> {
        match self {
            Self::File(path) => read_file(path),
            Self::Stdin => read_stdin(),
            Self::Clipboard => clipboard::read_clipboard(),
        }
    }
}

/// A source label paired with the text read from it.
#[derive(Debug, Clone)]
pub struct Input {
    pub label: String,
    pub text: String,
}

/// Picks the input sources for a command. Explicit flags win; with neither a
/// flag nor a file, stdin is used.
#[must_use]
pub fn resolve(files: &[PathBuf], stdin: bool, clipboard: bool) -> Vec<InputSource> {
    let mut sources: Vec<InputSource> = files.iter().cloned().map(InputSource::File).collect();
    if stdin {
        sources.push(InputSource::Stdin);
    }
    if clipboard {
        sources.push(InputSource::Clipboard);
    }
    if sources.is_empty() {
        sources.push(InputSource::Stdin);
    }
    sources
}

/// Reads every source in order.
///
/// # Errors
/// Returns the first read error.
pub fn read_all(sources: &[InputSource]) -> Result<Vec<Input>> {
    sources
        .iter()
        .map(|s| {
            Ok(Input {
                label: s.label(),
                text: s.read()?,
            })
        })
        .collect()
}

/// Decodes raw bytes, replacing invalid sequences with U+FFFD.
#[must_use]
pub fn decode(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

fn read_file(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| InvisiblesError::io(e, path))?;
    Ok(decode(&bytes))
}

fn read_stdin() -> Result<String> {
    let mut bytes = Vec::new();
    std::io::stdin()
        .read_to_end(&mut bytes)
        .map_err(|e| InvisiblesError::io(e, "<stdin>"))?;
    Ok(decode(&bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_defaults_to_stdin() {
        assert_eq!(resolve(&[], false, false), vec![InputSource::Stdin]);
    }

    #[test]
    fn resolve_keeps_files_then_flags() {
        let files = vec![PathBuf::from("a.txt")];
        assert_eq!(
            resolve(&files, false, true),
            vec![InputSource::File(PathBuf::from("a.txt")), InputSource::Clipboard]
        );
    }

    #[test]
    fn decode_never_fails() {
        assert_eq!(decode(b"ok\xFF"), "ok\u{FFFD}");
    }

    #[test]
    fn reads_file_lossily() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("t.txt");
        fs::write(&path, b"a\xE2\x80\x8Bb\xC0")?;
        let text = InputSource::File(path).read()?;
        assert_eq!(text, "a\u{200B}b\u{FFFD}");
        Ok(())
    }

    #[test]
    fn missing_file_reports_path() {
        let err = InputSource::File(PathBuf::from("/nonexistent/x.txt")).read();
        assert!(matches!(err, Err(InvisiblesError::Io { ref path, .. }) if path.ends_with("x.txt")));
    }
}

// src/clipboard.rs
use crate::error::{InvisiblesError, Result};
use std::io::Write;
use std::process::{Command, Stdio};

/// Copies text to the system clipboard.
///
/// # Errors
/// Returns `InvisiblesError::Clipboard` if no clipboard command succeeds.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    perform_copy(text)
}

/// Reads text from the system clipboard. Invalid UTF-8 is replaced, not
/// rejected.
///
/// # Errors
/// Returns `InvisiblesError::Clipboard` if no clipboard command succeeds.
pub fn read_clipboard() -> Result<String> {
    perform_read()
}

fn pipe_to(program: &str, args: &[&str], text: &str) -> Result<()> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .spawn()
        .map_err(|e| InvisiblesError::Clipboard(format!("{program}: {e}")))?;
    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(text.as_bytes())?;
    }
    let status = child.wait()?;
    if status.success() {
        Ok(())
    } else {
        Err(InvisiblesError::Clipboard(format!("{program} exited with {status}")))
    }
}

fn read_from(program: &str, args: &[&str]) -> Result<String> {
    let output = Command::new(program)
        .args(args)
        .output()
        .map_err(|e| InvisiblesError::Clipboard(format!("{program}: {e}")))?;
    if !output.status.success() {
        return Err(InvisiblesError::Clipboard(format!(
            "{program} exited with {}",
            output.status
        )));
    }
    Ok(String::from_utf8_lossy(&output.stdout).to_string())
}

#[cfg(target_os = "macos")]
fn perform_copy(text: &str) -> Result<()> {
    pipe_to("pbcopy", &[], text)
}

#[cfg(target_os = "macos")]
fn perform_read() -> Result<String> {
    read_from("pbpaste", &[])
}

#[cfg(target_os = "linux")]
fn perform_copy(text: &str) -> Result<()> {
    pipe_to("xclip", &["-selection", "clipboard", "-in"], text)
        .or_else(|_| pipe_to("wl-copy", &[], text))
}

#[cfg(target_os = "linux")]
fn perform_read() -> Result<String> {
    read_from("xclip", &["-selection", "clipboard", "-out"]).or_else(|_| read_from("wl-paste", &[]))
}

#[cfg(target_os = "windows")]
fn perform_copy(text: &str) -> Result<()> {
    pipe_to("clip", &[], text)
}

#[cfg(target_os = "windows")]
fn perform_read() -> Result<String> {
    // Powershell is slow but reliable without external deps
    read_from("powershell", &["-command", "Get-Clipboard"])
}

#[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
fn perform_copy(_text: &str) -> Result<()> {
    Err(InvisiblesError::Clipboard("unsupported platform".into()))
}

#[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
fn perform_read() -> Result<String> {
    Err(InvisiblesError::Clipboard("unsupported platform".into()))
}

// src/cli/handlers.rs
use crate::cli::args::InputArgs;
use crate::clipboard;
use crate::config::Config;
use crate::events::{EventKind, EventLogger};
use crate::exit::InvisiblesExit;
use crate::input::{self, Input};
use crate::registry::{self, INVISIBLE_CHARS};
use crate::report::{self, json, preview, terminal};
use crate::scanner;
use crate::selection::{locate, selection_range};
use crate::text::{char_count, slice_chars};
use crate::types::ScanResult;
use anyhow::{Context, Result};
use chrono::Local;
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

fn get_root() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

fn event_logger(config: &Config) -> EventLogger {
    if config.preferences.event_log {
        EventLogger::new(&get_root())
    } else {
        EventLogger::disabled()
    }
}

/// Reads exactly one input for commands that work on a single text.
fn read_single(file: Option<&PathBuf>, args: &InputArgs) -> Result<Option<Input>> {
    let files: Vec<PathBuf> = file.cloned().into_iter().collect();
    let sources = input::resolve(&files, args.stdin, args.clipboard);
    if sources.len() > 1 {
        eprintln!(
            "{} expected one input, got {}",
            "error:".red().bold(),
            sources.len()
        );
        return Ok(None);
    }
    let mut inputs = input::read_all(&sources)?;
    Ok(inputs.pop())
}

fn scan_one(config: &Config, logger: &EventLogger, input: &Input) -> Result<ScanResult> {
    logger.log(EventKind::ScanStarted {
        source: input.label.clone(),
        chars: char_count(&input.text),
    });
    match scanner::scan_with(&input.text, &config.cancel_token()) {
        Ok(result) => {
            log_completed(logger, &input.label, &result);
            Ok(result)
        }
        Err(e) => {
            logger.log(EventKind::ScanCancelled { source: input.label.clone() });
            Err(e).context("scan did not finish")
        }
    }
}

fn log_completed(logger: &EventLogger, source: &str, result: &ScanResult) {
    logger.log(EventKind::ScanCompleted {
        source: source.to_string(),
        findings: result.finding_count(),
        kinds: result.grouped.len(),
    });
}

fn exit_for<'a>(results: impl IntoIterator<Item = &'a ScanResult>) -> InvisiblesExit {
    if results.into_iter().all(ScanResult::is_clean) {
        InvisiblesExit::Success
    } else {
        InvisiblesExit::Found
    }
}

/// Handles the scan command.
///
/// # Errors
/// Returns error if an input cannot be read or a scan is cancelled.
pub fn handle_scan(
    files: &[PathBuf],
    args: &InputArgs,
    json_out: bool,
    verbose: bool,
) -> Result<InvisiblesExit> {
    let mut config = Config::load();
    config.verbose = verbose;
    let logger = event_logger(&config);

    let sources = input::resolve(files, args.stdin, args.clipboard);
    let inputs = input::read_all(&sources)?;
    for i in &inputs {
        logger.log(EventKind::ScanStarted {
            source: i.label.clone(),
            chars: char_count(&i.text),
        });
    }

    let texts: Vec<&str> = inputs.iter().map(|i| i.text.as_str()).collect();
    let outcome = scanner::scan_many(&texts, &config.cancel_token());
    let results = match outcome {
        Ok(results) => results,
        Err(e) => {
            for i in &inputs {
                logger.log(EventKind::ScanCancelled { source: i.label.clone() });
            }
            return Err(e).context("scan did not finish");
        }
    };

    for (i, r) in inputs.iter().zip(&results) {
        log_completed(&logger, &i.label, r);
    }

    if json_out {
        let items: Vec<_> = inputs
            .iter()
            .zip(&results)
            .map(|(i, r)| (i.label.as_str(), i.text.as_str(), r))
            .collect();
        let out = if let [single] = items.as_slice() {
            json::format_json(single.0, single.1, single.2)?
        } else {
            json::format_json_many(&items)?
        };
        println!("{out}");
    } else {
        for (i, r) in inputs.iter().zip(&results) {
            terminal::print_summary(&i.label, &i.text, r, config.verbose);
        }
    }

    Ok(exit_for(&results))
}

/// Options for the report command.
#[derive(Debug, Clone, Default)]
pub struct ReportArgs {
    pub file: Option<PathBuf>,
    pub input: InputArgs,
    pub output: Option<PathBuf>,
    pub stdout: bool,
    pub copy: bool,
}

/// Handles the report command.
///
/// # Errors
/// Returns error if the input cannot be read or the report cannot be written.
/// Clipboard failures are reported but do not fail the command.
pub fn handle_report(args: &ReportArgs) -> Result<InvisiblesExit> {
    let config = Config::load();
    let logger = event_logger(&config);

    let Some(input) = read_single(args.file.as_ref(), &args.input)? else {
        return Ok(InvisiblesExit::InvalidInput);
    };
    let result = scan_one(&config, &logger, &input)?;
    let text = report::generate_report(&input.text, &result, Local::now().naive_local());

    if args.stdout {
        print!("{text}");
    } else {
        let path = args
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from(&config.preferences.report_path));
        write_report(&path, &text)?;
        logger.log(EventKind::ReportWritten {
            path: path.display().to_string(),
            bytes: text.len(),
        });
        eprintln!(
            "{} report written to {}",
            "[OK]".green().bold(),
            path.display()
        );
    }

    if args.copy || config.preferences.auto_copy {
        copy_report(&logger, &text);
    }

    Ok(exit_for([&result]))
}

fn write_report(path: &Path, text: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(path, text).with_context(|| format!("failed to write {}", path.display()))
}

fn copy_report(logger: &EventLogger, text: &str) {
    match clipboard::copy_to_clipboard(text) {
        Ok(()) => {
            logger.log(EventKind::ReportCopied { bytes: text.len() });
            eprintln!("{}", "[OK] report copied to clipboard".green());
        }
        Err(e) => {
            logger.log(EventKind::CopyFailed { error: e.to_string() });
            eprintln!("{} could not copy report: {e}", "warning:".yellow().bold());
        }
    }
}

/// Handles the locate command.
///
/// # Errors
/// Returns error if the input cannot be read.
pub fn handle_locate(
    index: usize,
    file: Option<&PathBuf>,
    args: &InputArgs,
) -> Result<InvisiblesExit> {
    let Some(input) = read_single(file, args)? else {
        return Ok(InvisiblesExit::InvalidInput);
    };
    let text = &input.text;

    let (Some((start, end)), Some(loc)) = (selection_range(text, index), locate(text, index))
    else {
        eprintln!(
            "{} position {index} is outside {} ({} chars)",
            "error:".red().bold(),
            input.label,
            char_count(text)
        );
        return Ok(InvisiblesExit::InvalidInput);
    };

    let at = text.chars().nth(index).and_then(registry::lookup);
    let what = at.map_or_else(|| "visible character".to_string(), |d| d.name.to_string());

    println!("{} {what}", format!("[{index}]").blue());
    println!("  {} line {}, column {}", "-->".blue(), loc.line, loc.column);
    println!("  {} {start}..{end}", "selection:".dimmed());
    println!(
        "  {} {}",
        "|".blue(),
        preview::render_marked(&slice_chars(text, start, end).replace('\n', " "))
    );

    Ok(if at.is_some() {
        InvisiblesExit::Found
    } else {
        InvisiblesExit::Success
    })
}

/// Handles the preview command.
///
/// # Errors
/// Returns error if the input cannot be read.
pub fn handle_preview(file: Option<&PathBuf>, args: &InputArgs) -> Result<InvisiblesExit> {
    let Some(input) = read_single(file, args)? else {
        return Ok(InvisiblesExit::InvalidInput);
    };
    let marked = preview::render_with(&input.text, |c| {
        format!("[{}]", registry::code_label(c)).red().bold().to_string()
    });
    print!("{marked}");
    Ok(exit_for([&scanner::scan(&input.text)]))
}

/// Handles the patterns command.
///
/// # Errors
/// Returns error only on internal failures; clipboard errors are reported.
pub fn handle_patterns(copy: Option<&str>) -> Result<InvisiblesExit> {
    let Some(code) = copy else {
        for def in INVISIBLE_CHARS {
            println!("  {:<8} {}", def.code_label().yellow(), def.name);
        }
        return Ok(InvisiblesExit::Success);
    };

    let wanted = normalize_code(code);
    let Some(def) = INVISIBLE_CHARS.iter().find(|d| d.code_label() == wanted) else {
        eprintln!("{} unknown code {code}", "error:".red().bold());
        return Ok(InvisiblesExit::InvalidInput);
    };

    let label = def.code_label();
    match clipboard::copy_to_clipboard(&label) {
        Ok(()) => println!("{} copied to clipboard", label.yellow()),
        Err(e) => {
            eprintln!("{} could not copy {label}: {e}", "warning:".yellow().bold());
            return Ok(InvisiblesExit::Error);
        }
    }
    Ok(InvisiblesExit::Success)
}

/// Accepts `U+200B`, `u+200b` or `200B`.
fn normalize_code(code: &str) -> String {
    let upper = code.trim().to_uppercase();
    let hex = upper.strip_prefix("U+").unwrap_or(&upper);
    format!("U+{hex:0>4}")
}

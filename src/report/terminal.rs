// src/report/terminal.rs
use crate::registry::code_label;
use crate::report::text::excerpt_in;
use crate::selection::{locate_all, Location};
use crate::types::{Finding, ScanResult};
use colored::Colorize;
use std::fmt::Write;

/// Prints a colored summary of one scan to stdout.
///
/// `verbose` adds a context line for every finding.
pub fn print_summary(source: &str, text: &str, result: &ScanResult, verbose: bool) {
    print!("{}", format_summary(source, text, result, verbose));
}

/// Builds the colored summary as a string. Colors follow the `colored`
/// crate's global override, so tests can switch them off.
#[must_use]
pub fn format_summary(source: &str, text: &str, result: &ScanResult, verbose: bool) -> String {
    let mut out = String::new();

    if result.is_clean() {
        let _ = writeln!(
            out,
            "{} {source}: no invisible characters ({} chars).",
            "OK".green().bold(),
            result.char_count
        );
        return out;
    }

    let total = result.finding_count();
    let _ = writeln!(
        out,
        "{} {source}: {total} invisible {} found",
        "!!".yellow().bold(),
        pluralize("character", total)
    );

    for group in result.grouped.entries() {
        let positions: Vec<String> = group.positions.iter().map(ToString::to_string).collect();
        let _ = writeln!(
            out,
            "  {} {}: {} {} {}",
            "-".blue(),
            group.name.yellow(),
            group.count,
            pluralize("occurrence", group.count),
            format!("at [{}]", positions.join(", ")).dimmed()
        );
    }

    if verbose {
        let chars: Vec<char> = text.chars().collect();
        let indices: Vec<usize> = result.findings.iter().map(|f| f.index).collect();
        let locations = locate_all(text, &indices);

        out.push('\n');
        for (n, (finding, loc)) in result.findings.iter().zip(locations).enumerate() {
            write_finding(&mut out, &chars, n + 1, finding, loc);
        }
    }
    out
}

fn write_finding(
    out: &mut String,
    chars: &[char],
    n: usize,
    finding: &Finding,
    loc: Option<Location>,
) {
    let position = loc
        .map(|loc| format!("{}:{}", loc.line, loc.column))
        .unwrap_or_default();
    let (before, after) = excerpt_in(chars, finding.index);
    let tag = format!("[{}]", code_label(finding.code_point));

    let _ = writeln!(
        out,
        "  {} {} {} {}",
        format!("[{n}]").blue(),
        finding.name,
        "-->".blue(),
        position
    );
    let _ = writeln!(
        out,
        "      {}{}{}",
        before.dimmed(),
        tag.red().bold(),
        after.dimmed()
    );
}

pub(crate) fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::scan;

    #[test]
    fn clean_summary_is_one_line() {
        colored::control::set_override(false);
        let out = format_summary("a.txt", "hello", &scan("hello"), false);
        assert_eq!(out, "OK a.txt: no invisible characters (5 chars).\n");
    }

    #[test]
    fn summary_lists_groups_and_positions() {
        colored::control::set_override(false);
        let text = "x\u{200B}y\n\u{200B}";
        let out = format_summary("<stdin>", text, &scan(text), true);
        assert!(out.starts_with("!! <stdin>: 2 invisible characters found\n"));
        assert!(out.contains("- Zero Width Space (U+200B): 2 occurrences at [1, 4]"));
        assert!(out.contains("[2] Zero Width Space (U+200B) --> 2:1"));
        assert!(out.contains("x[U+200B]y "));
    }

    #[test]
    fn pluralize_singular() {
        assert_eq!(pluralize("occurrence", 1), "occurrence");
        assert_eq!(pluralize("occurrence", 0), "occurrences");
    }
}

// src/report/json.rs
use crate::error::Result;
use crate::registry::code_label;
use crate::report::text::excerpt_in;
use crate::selection::{locate_all, selection_range_in, Location};
use crate::text::word_count;
use crate::types::ScanResult;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    source: &'a str,
    stats: JsonStats,
    groups: Vec<JsonGroup<'a>>,
    findings: Vec<JsonFinding>,
}

#[derive(Debug, Serialize)]
struct JsonStats {
    char_count: usize,
    word_count: usize,
    finding_count: usize,
    distinct_kinds: usize,
    clean: bool,
}

#[derive(Debug, Serialize)]
struct JsonGroup<'a> {
    name: &'static str,
    code: String,
    count: usize,
    positions: &'a [usize],
}

#[derive(Debug, Serialize)]
struct JsonFinding {
    index: usize,
    code: String,
    name: &'static str,
    #[serde(flatten)]
    location: Option<Location>,
    selection: Option<(usize, usize)>,
    excerpt: String,
}

/// Formats one scan result as pretty-printed JSON for machine consumption.
///
/// `source` names where the text came from (a path, `<stdin>`, ...).
///
/// # Errors
/// Returns error if serialization fails.
pub fn format_json(source: &str, text: &str, result: &ScanResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(&build(source, text, result))?)
}

/// Formats several scan results as one JSON array.
///
/// # Errors
/// Returns error if serialization fails.
pub fn format_json_many(items: &[(&str, &str, &ScanResult)]) -> Result<String> {
    let reports: Vec<_> = items
        .iter()
        .map(|(source, text, result)| build(source, text, result))
        .collect();
    Ok(serde_json::to_string_pretty(&reports)?)
}

fn build<'a>(source: &'a str, text: &str, result: &'a ScanResult) -> JsonReport<'a> {
    let groups = result
        .grouped
        .entries()
        .iter()
        .map(|g| JsonGroup {
            name: g.name,
            code: code_label(g.code_point),
            count: g.count,
            positions: &g.positions,
        })
        .collect();

    let chars: Vec<char> = text.chars().collect();
    let indices: Vec<usize> = result.findings.iter().map(|f| f.index).collect();
    let locations = locate_all(text, &indices);

    let findings = result
        .findings
        .iter()
        .zip(locations)
        .map(|(f, location)| {
            let (before, after) = excerpt_in(&chars, f.index);
            let code = code_label(f.code_point);
            JsonFinding {
                index: f.index,
                excerpt: format!("{before}[{code}]{after}"),
                code,
                name: f.name,
                location,
                selection: selection_range_in(&chars, f.index),
            }
        })
        .collect();

    JsonReport {
        source,
        stats: JsonStats {
            char_count: result.char_count,
            word_count: word_count(text),
            finding_count: result.finding_count(),
            distinct_kinds: result.grouped.len(),
            clean: result.is_clean(),
        },
        groups,
        findings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::scan;

    #[test]
    fn json_carries_stats_and_locations() {
        let text = "ab\nc\u{200B}d";
        let out = format_json("<test>", text, &scan(text)).unwrap_or_default();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap_or_default();

        assert_eq!(value["source"], "<test>");
        assert_eq!(value["stats"]["char_count"], 6);
        assert_eq!(value["stats"]["finding_count"], 1);
        assert_eq!(value["stats"]["clean"], false);
        assert_eq!(value["groups"][0]["code"], "U+200B");
        assert_eq!(value["findings"][0]["index"], 4);
        assert_eq!(value["findings"][0]["line"], 2);
        assert_eq!(value["findings"][0]["column"], 2);
        assert_eq!(value["findings"][0]["excerpt"], "ab c[U+200B]d");
    }

    #[test]
    fn json_many_is_an_array() {
        let a = scan("x");
        let b = scan("\u{FEFF}");
        let out = format_json_many(&[("a", "x", &a), ("b", "\u{FEFF}", &b)]).unwrap_or_default();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap_or_default();
        assert_eq!(value.as_array().map(Vec::len), Some(2));
        assert_eq!(value[0]["stats"]["clean"], true);
        assert_eq!(value[1]["groups"][0]["name"], "Zero Width No-Break Space (U+FEFF)");
    }
}

// src/report/text.rs
//! The plain-text analysis report (Spanish template).

use crate::text::word_count;
use crate::types::ScanResult;
use chrono::NaiveDateTime;
use std::fmt::Write;

/// Default file name for a saved report.
pub const REPORT_FILE_NAME: &str = "informe_caracteres_invisibles.txt";

/// Content type for a saved or served report.
pub const REPORT_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

const TITLE: &str = "INFORME DE DETECCIÓN DE CARACTERES INVISIBLES";
const SEPARATOR: &str = "=============================================";
const NONE_FOUND: &str = "No se encontraron caracteres invisibles en el texto.";
const MARKER: &str = "[INVISIBLE CHAR]";
const FOOTER_NAME: &str = "Generado por Detector de Caracteres Invisibles";
const FOOTER_URL: &str = "https://github.com/686f6c61/artificial-intelligence-text-detector-unicode";

/// Scalars of context shown on each side of a finding.
const CONTEXT: usize = 20;

/// Builds the full report for `text` and its scan `result`.
///
/// The output depends only on the arguments, so the same inputs always give
/// the same bytes.
#[must_use]
pub fn generate_report(text: &str, result: &ScanResult, generated_at: NaiveDateTime) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::new();

    let _ = writeln!(out, "{TITLE}");
    let _ = writeln!(out, "{SEPARATOR}\n");

    let _ = writeln!(out, "Fecha: {}", generated_at.format("%d/%m/%Y"));
    let _ = writeln!(out, "Hora: {}\n", generated_at.format("%H:%M:%S"));

    let _ = writeln!(out, "Total de caracteres: {}", chars.len());
    let _ = writeln!(out, "Total de palabras: {}\n", word_count(text));

    if result.is_clean() {
        let _ = writeln!(out, "{NONE_FOUND}");
    } else {
        write_findings(&mut out, &chars, result);
    }

    let _ = writeln!(out, "\n{SEPARATOR}");
    let _ = writeln!(out, "{FOOTER_NAME}");
    out.push_str(FOOTER_URL);

    out
}

fn write_findings(out: &mut String, chars: &[char], result: &ScanResult) {
    let _ = writeln!(
        out,
        "Se encontraron {} caracteres invisibles:\n",
        result.finding_count()
    );

    for group in result.grouped.entries() {
        let _ = writeln!(out, "- {}: {} veces", group.name, group.count);
    }

    out.push_str("\nExtracciones de contexto:\n");
    for (n, finding) in result.findings.iter().enumerate() {
        let (before, after) = excerpt_in(chars, finding.index);
        let _ = writeln!(
            out,
            "\n[{}] {} encontrado en posición {}:",
            n + 1,
            finding.name,
            finding.index
        );
        let _ = writeln!(out, "\"...{before}{MARKER}{after}...\"");
    }
}

/// Returns the single-line context around `index`: up to twenty scalars
/// before it and the scalars after it up to `index + 20`.
#[must_use]
pub fn excerpt(text: &str, index: usize) -> (String, String) {
    let chars: Vec<char> = text.chars().collect();
    excerpt_in(&chars, index)
}

/// [`excerpt`] over text already split into scalars. Costs only the window.
#[must_use]
pub fn excerpt_in(chars: &[char], index: usize) -> (String, String) {
    let len = chars.len();
    let start = index.saturating_sub(CONTEXT).min(len);
    let end = (index + CONTEXT).min(len);
    let before = flatten(&chars[start..index.min(len)]);
    let after = flatten(&chars[(index + 1).min(end)..end]);
    (before, after)
}

fn flatten(window: &[char]) -> String {
    window
        .iter()
        .map(|&c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::scan;
    use chrono::NaiveDate;

    fn at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 4, 7)
            .and_then(|d| d.and_hms_opt(9, 5, 3))
            .expect("valid timestamp")
    }

    #[test]
    fn clean_report_layout() {
        let report = generate_report("", &scan(""), at());
        let expected = "INFORME DE DETECCIÓN DE CARACTERES INVISIBLES\n\
=============================================\n\
\n\
Fecha: 07/04/2025\n\
Hora: 09:05:03\n\
\n\
Total de caracteres: 0\n\
Total de palabras: 0\n\
\n\
No se encontraron caracteres invisibles en el texto.\n\
\n\
=============================================\n\
Generado por Detector de Caracteres Invisibles\n\
https://github.com/686f6c61/artificial-intelligence-text-detector-unicode";
        assert_eq!(report, expected);
    }

    #[test]
    fn found_report_layout() {
        let text = "a\u{200B}b";
        let report = generate_report(text, &scan(text), at());
        let expected_body = "Total de caracteres: 3\n\
Total de palabras: 1\n\
\n\
Se encontraron 1 caracteres invisibles:\n\
\n\
- Zero Width Space (U+200B): 1 veces\n\
\n\
Extracciones de contexto:\n\
\n\
[1] Zero Width Space (U+200B) encontrado en posición 1:\n\
\"...a[INVISIBLE CHAR]b...\"\n\
\n\
=============================================\n";
        assert!(report.contains(expected_body), "{report}");
        assert!(report.ends_with(FOOTER_URL));
    }

    #[test]
    fn groups_follow_first_occurrence() {
        let text = "\u{200E}x\u{200B}y\u{200E}";
        let report = generate_report(text, &scan(text), at());
        let lrm = report.find("- Left-to-Right Mark (U+200E): 2 veces");
        let zwsp = report.find("- Zero Width Space (U+200B): 1 veces");
        assert!(lrm.is_some() && zwsp.is_some());
        assert!(lrm < zwsp);
        assert!(report.contains("[3] Left-to-Right Mark (U+200E) encontrado en posición 4:"));
    }

    #[test]
    fn excerpt_is_bounded_and_single_line() {
        let text = format!("{}\nline\u{200B}two\r\n{}", "a".repeat(30), "b".repeat(30));
        let idx = text.chars().position(|c| c == '\u{200B}').unwrap_or(0);
        let (before, after) = excerpt(&text, idx);
        assert_eq!(before.chars().count(), 20);
        assert_eq!(after.chars().count(), 19);
        assert!(!before.contains('\n') && !after.contains('\n') && !after.contains('\r'));
        assert!(before.ends_with(" line"));
        assert!(after.starts_with("two  b"));
    }

    #[test]
    fn excerpt_clamps_at_edges() {
        assert_eq!(excerpt("\u{200B}", 0), (String::new(), String::new()));
        assert_eq!(excerpt("ab\u{200B}cd", 2), ("ab".to_string(), "cd".to_string()));
    }

    #[test]
    fn report_is_deterministic() {
        let text = "hello world\u{200B}\u{200B}foo";
        let result = scan(text);
        assert_eq!(
            generate_report(text, &result, at()),
            generate_report(text, &result, at())
        );
    }
}

// tests/unit_report.rs
use chrono::{NaiveDate, NaiveDateTime};
use invisibles_core::report::{
    generate_report, json, preview, terminal, REPORT_CONTENT_TYPE, REPORT_FILE_NAME,
};
use invisibles_core::scanner::scan;
use invisibles_core::selection::selection_range;
use invisibles_core::text::word_count;
use proptest::prelude::*;
use std::time::{Duration, Instant};

const FOOTER: &str = "Generado por Detector de Caracteres Invisibles\n\
https://github.com/686f6c61/artificial-intelligence-text-detector-unicode";

fn at() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 12, 31)
        .and_then(|d| d.and_hms_opt(23, 59, 1))
        .unwrap()
}

fn report(text: &str) -> String {
    generate_report(text, &scan(text), at())
}

#[test]
fn test_export_constants() {
    assert_eq!(REPORT_FILE_NAME, "informe_caracteres_invisibles.txt");
    assert_eq!(REPORT_CONTENT_TYPE, "text/plain; charset=utf-8");
}

#[test]
fn test_timestamp_lines() {
    let r = report("x");
    assert!(r.contains("\nFecha: 31/12/2025\nHora: 23:59:01\n\n"));
}

#[test]
fn test_empty_text() {
    let r = report("");
    assert!(r.contains("Total de caracteres: 0\n"));
    assert!(r.contains("Total de palabras: 0\n"));
    assert!(r.contains("No se encontraron caracteres invisibles en el texto.\n"));
    assert!(!r.contains("Extracciones de contexto"));
}

#[test]
fn test_hello_world_counts() {
    let r = report("hello world\u{200B}\u{200B}foo");
    assert!(r.contains("Total de caracteres: 16\n"));
    assert!(r.contains("Total de palabras: 2\n"));
    assert!(r.contains("Se encontraron 2 caracteres invisibles:\n"));
    assert!(r.contains("- Zero Width Space (U+200B): 2 veces\n"));
    assert!(r.contains("[1] Zero Width Space (U+200B) encontrado en posición 11:\n"));
    assert!(r.contains("\"...hello world[INVISIBLE CHAR]\u{200B}foo...\"\n"));
    assert!(r.contains("[2] Zero Width Space (U+200B) encontrado en posición 12:\n"));
    assert!(r.contains("\"...hello world\u{200B}[INVISIBLE CHAR]foo...\"\n"));
}

#[test]
fn test_multiline_excerpt_stays_on_one_line() {
    let r = report("first line\nsecond\u{00AD}line\nthird");
    let excerpt = r
        .lines()
        .find(|l| l.contains("[INVISIBLE CHAR]"))
        .unwrap();
    assert_eq!(excerpt, "\"...first line second[INVISIBLE CHAR]line third...\"");
}

#[test]
fn test_word_count_cases() {
    assert_eq!(word_count("  a   b  "), 2);
    assert_eq!(word_count("   "), 0);
    assert_eq!(word_count("a\u{200B}b"), 1);
}

#[test]
fn test_selection_for_report_position() {
    let text = "word1 \u{200B} word2";
    let (start, end) = selection_range(text, 6).unwrap();
    assert_eq!((start, end), (0, 13));
    assert!(end - start <= 20);
}

#[test]
fn test_preview_marks_report_findings() {
    assert_eq!(preview::render_marked("a\u{FEFF}b"), "a[U+FEFF]b");
}

#[test]
fn test_dense_findings_render_in_linear_time() {
    colored::control::set_override(false);
    // 200k scalars, every other one invisible.
    let text = "a\u{200B}".repeat(100_000);
    let result = scan(&text);
    assert_eq!(result.finding_count(), 100_000);

    let started = Instant::now();
    let r = generate_report(&text, &result, at());
    let out = json::format_json("<dense>", &text, &result).unwrap();
    let summary = terminal::format_summary("<dense>", &text, &result, true);
    let elapsed = started.elapsed();

    assert!(r.contains("Total de caracteres: 200000\n"));
    assert!(r.contains("[100000] Zero Width Space (U+200B) encontrado en posición 199999:"));
    assert!(out.contains("\"index\": 199999"));
    assert!(summary.contains("[100000] Zero Width Space (U+200B)"));
    assert!(elapsed < Duration::from_secs(20), "rendering took {elapsed:?}");
}

proptest! {
    #[test]
    fn report_always_ends_with_footer(text in any::<String>()) {
        let r = report(&text);
        prop_assert!(r.ends_with(FOOTER));
        prop_assert!(r.starts_with("INFORME DE DETECCIÓN DE CARACTERES INVISIBLES\n"));
    }

    #[test]
    fn report_branch_matches_scan(text in any::<String>()) {
        let result = scan(&text);
        let r = generate_report(&text, &result, at());
        let none = r.contains("No se encontraron caracteres invisibles en el texto.");
        prop_assert_eq!(none, result.is_clean());
    }
}

//! Translation key checks.
//!
//! Every `t!("key")` used under `src/` must exist in the fallback catalog,
//! and every other locale must define every fallback key exactly once.
//! Only direct literal keys are found; that is how the crate uses `t!`.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

const FTL_FILENAME: &str = "catalog-ui.ftl";
const FALLBACK: &str = "en-US";

fn crate_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Message ids defined in a Fluent file. Terms, attributes and comments are skipped.
fn message_ids(src: &str) -> Vec<String> {
    src.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with(['#', '-', '.']))
        .filter_map(|line| line.split_once('='))
        .map(|(id, _)| id.trim())
        .filter(|id| !id.is_empty() && id.chars().all(is_key_char))
        .map(str::to_string)
        .collect()
}

fn is_key_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '-')
}

fn read_catalog(locale: &str) -> String {
    let path = crate_root().join("i18n").join(locale).join(FTL_FILENAME);
    fs::read_to_string(&path).unwrap_or_else(|err| panic!("cannot read {path:?}: {err}"))
}

fn locales() -> Vec<String> {
    let mut found: Vec<String> = fs::read_dir(crate_root().join("i18n"))
        .expect("i18n directory")
        .flatten()
        .filter(|entry| entry.path().is_dir())
        .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
        .collect();
    found.sort();
    found
}

fn rust_sources(dir: &Path, out: &mut Vec<PathBuf>) {
    for entry in fs::read_dir(dir).expect("readable source dir").flatten() {
        let path = entry.path();
        if path.is_dir() {
            rust_sources(&path, out);
        } else if path.extension().and_then(|ext| ext.to_str()) == Some("rs") {
            out.push(path);
        }
    }
}

/// Literal keys of `t!("...")` calls. `format!("...")` and friends also end
/// in `t!(`, so the macro name must not be preceded by an identifier char.
fn t_macro_keys(content: &str) -> Vec<String> {
    const NEEDLE: &str = "t!(\"";
    content
        .match_indices(NEEDLE)
        .filter(|(at, _)| {
            !content[..*at]
                .chars()
                .next_back()
                .is_some_and(|c| c.is_alphanumeric() || c == '_')
        })
        .filter_map(|(at, _)| content[at + NEEDLE.len()..].split_once('"'))
        .map(|(key, _)| key)
        .filter(|key| !key.is_empty() && key.chars().all(is_key_char))
        .map(str::to_string)
        .collect()
}

fn referenced_keys() -> BTreeSet<String> {
    let mut files = Vec::new();
    rust_sources(&crate_root().join("src"), &mut files);

    let mut keys = BTreeSet::new();
    for file in files {
        let content = fs::read_to_string(&file).expect("readable source file");
        keys.extend(t_macro_keys(&content));
    }
    keys
}

#[test]
fn message_ids_skip_comments_and_terms() {
    let ids = message_ids("# comment\n-brand = X\nnav-explorer = Explorer\n    .title = t\n");
    assert_eq!(ids, vec!["nav-explorer".to_string()]);
}

#[test]
fn scanner_ignores_format_macros() {
    let src = r#"let a = t!("nav-explorer"); let b = format!("abc"); crate::t!("quality-label")"#;
    assert_eq!(t_macro_keys(src), vec!["nav-explorer", "quality-label"]);
}

#[test]
fn referenced_keys_exist_in_fallback() {
    let fallback: BTreeSet<String> = message_ids(&read_catalog(FALLBACK)).into_iter().collect();
    let referenced = referenced_keys();
    assert!(!referenced.is_empty(), "no t!() usages found under src/");

    let missing: Vec<_> = referenced.difference(&fallback).cloned().collect();
    assert!(
        missing.is_empty(),
        "keys used in src/ but missing from {FALLBACK}:\n  {}",
        missing.join("\n  ")
    );
}

#[test]
fn every_locale_is_complete_and_unique() {
    let fallback: BTreeSet<String> = message_ids(&read_catalog(FALLBACK)).into_iter().collect();
    let all = locales();
    assert!(all.iter().any(|l| l == FALLBACK));

    let mut failures = Vec::new();
    for locale in &all {
        let ids = message_ids(&read_catalog(locale));
        let unique: BTreeSet<String> = ids.iter().cloned().collect();
        if unique.len() != ids.len() {
            failures.push(format!("{locale}: duplicate message ids"));
        }
        let missing: Vec<_> = fallback.difference(&unique).cloned().collect();
        if !missing.is_empty() {
            failures.push(format!("{locale} is missing: {}", missing.join(", ")));
        }
    }

    assert!(failures.is_empty(), "{}", failures.join("\n"));
}

//! Hygiene — enforces coding standards at test time
//!
//! These tests scan the crate's production sources for antipatterns and for
//! card markup built outside the card model. Each has a budget (ideally zero).
//! If you must add one, fix an existing one first — the budget never grows.
#![allow(clippy::absurd_extreme_comparisons)]

use std::fs;
use std::path::Path;

/// `(pattern, budget)` pairs that must hold across all production sources.
const BUDGETS: &[(&str, usize)] = &[
    // Panics — these crash the host page.
    (".unwrap()", 0),
    (".expect(", 0),
    ("panic!(", 0),
    ("unreachable!(", 0),
    ("todo!(", 0),
    ("unimplemented!(", 0),
    // Silent loss — discards errors without inspecting.
    ("let _ =", 0),
    (".ok()", 0),
    // Style / structure.
    ("#[allow(dead_code)]", 0),
];

/// Files allowed to produce card markup or write shadow roots.
const MARKUP_OWNER: &str = "markup.rs";
const SHADOW_OWNER: &str = "shadow.rs";

struct SourceFile {
    path: String,
    content: String,
}

/// Collect production `.rs` files under `src/`, excluding `*_test.rs`.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") {
            let path_str = path.to_string_lossy().to_string();
            if path_str.ends_with("_test.rs") {
                continue;
            }
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path: path_str, content });
            }
        }
    }
}

fn hits_for(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

fn format_hits(hits: &[(String, usize)]) -> String {
    hits.iter()
        .map(|(path, count)| format!("  {path}: {count}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn sources_are_found() {
    let files = source_files();
    assert!(files.iter().any(|f| f.path.ends_with("lib.rs")), "run from the crate root");
}

#[test]
fn antipattern_budgets() {
    let files = source_files();
    let mut failures = Vec::new();
    for (pattern, budget) in BUDGETS {
        let hits = hits_for(&files, pattern);
        let count: usize = hits.iter().map(|(_, c)| c).sum();
        if count > *budget {
            failures.push(format!("{pattern} budget exceeded: found {count}, max {budget}.\n{}", format_hits(&hits)));
        }
    }
    assert!(failures.is_empty(), "{}", failures.join("\n"));
}

#[test]
fn card_markup_is_built_in_one_place() {
    let files = source_files();
    let stray = hits_for(&files, "<p class=")
        .into_iter()
        .filter(|(path, _)| !path.ends_with(MARKUP_OWNER))
        .collect::<Vec<_>>();
    assert!(stray.is_empty(), "card markup built outside {MARKUP_OWNER}:\n{}", format_hits(&stray));
}

#[test]
fn shadow_roots_are_written_in_one_place() {
    let files = source_files();
    let stray = hits_for(&files, "set_inner_html(")
        .into_iter()
        .filter(|(path, _)| !path.ends_with(SHADOW_OWNER))
        .collect::<Vec<_>>();
    assert!(stray.is_empty(), "shadow root written outside {SHADOW_OWNER}:\n{}", format_hits(&stray));
}

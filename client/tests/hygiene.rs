//! Hygiene: enforces coding standards at test time.
//!
//! These tests scan the client crate source tree for antipatterns that
//! violate project standards. Each has a budget (ideally zero). If you must
//! add one, you have to fix an existing one first. The budget never grows.
#![allow(clippy::absurd_extreme_comparisons)]

use std::fs;
use std::path::Path;

// Panics crash the WASM module.
const MAX_UNWRAP: usize = 0;
const MAX_EXPECT: usize = 0;
const MAX_PANIC: usize = 0;
const MAX_UNREACHABLE: usize = 0;
const MAX_TODO: usize = 0;
const MAX_UNIMPLEMENTED: usize = 0;

// Silent loss. The remaining discards are unused-parameter sinks in the
// non-browser build.
const MAX_SILENT_DISCARD: usize = 10;
// Storage, media-query and confirm lookups where absence is a valid answer,
// plus one `Response::ok()` status check.
const MAX_DOT_OK: usize = 6;

// Style / structure.
const MAX_ALLOW_DEAD_CODE: usize = 0;

struct SourceFile {
    path: String,
    content: String,
}

/// Collect production `.rs` files from `client/src/`, excluding test files.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn is_test_file(path: &str) -> bool {
    path.ends_with("_test.rs") || path.ends_with("test_support.rs")
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
            if is_test_file(&path_str) {
                continue;
            }
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path: path_str, content });
            }
        }
    }
}

fn count_in_source(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

fn check_budget(pattern: &str, max: usize) {
    let files = source_files();
    assert!(!files.is_empty(), "hygiene scan found no sources; run from the client crate root");
    let hits = count_in_source(&files, pattern);
    let count: usize = hits.iter().map(|(_, c)| c).sum();
    let listing = hits
        .iter()
        .map(|(path, count)| format!("  {path}: {count}"))
        .collect::<Vec<_>>()
        .join("\n");
    assert!(count <= max, "{pattern} budget exceeded: found {count}, max {max}.\n{listing}");
}

#[test]
fn unwrap_budget() {
    check_budget(".unwrap()", MAX_UNWRAP);
}

#[test]
fn expect_budget() {
    check_budget(".expect(", MAX_EXPECT);
}

#[test]
fn panic_budget() {
    check_budget("panic!(", MAX_PANIC);
}

#[test]
fn unreachable_budget() {
    check_budget("unreachable!(", MAX_UNREACHABLE);
}

#[test]
fn todo_budget() {
    check_budget("todo!(", MAX_TODO);
}

#[test]
fn unimplemented_budget() {
    check_budget("unimplemented!(", MAX_UNIMPLEMENTED);
}

#[test]
fn silent_discard_budget() {
    check_budget("let _ =", MAX_SILENT_DISCARD);
}

#[test]
fn dot_ok_budget() {
    check_budget(".ok()", MAX_DOT_OK);
}

#[test]
fn allow_dead_code_budget() {
    check_budget("#[allow(dead_code)]", MAX_ALLOW_DEAD_CODE);
}

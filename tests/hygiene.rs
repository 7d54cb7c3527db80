//! Hygiene — enforces coding standards at test time
//!
//! Scans `src/` for panic-prone or error-swallowing patterns. Each pattern
//! has a budget; adding an occurrence means removing another first.

use std::fs;
use std::path::{Path, PathBuf};

struct Budget {
    pattern: &'static str,
    max: usize,
    why: &'static str,
}

const BUDGETS: &[Budget] = &[
    Budget { pattern: ".unwrap()", max: 0, why: "panics in the browser" },
    // The email pattern is a literal compiled once at first use.
    Budget { pattern: ".expect(", max: 1, why: "panics in the browser" },
    Budget { pattern: "panic!(", max: 0, why: "panics in the browser" },
    Budget { pattern: "unreachable!(", max: 0, why: "panics in the browser" },
    Budget { pattern: "todo!(", max: 0, why: "unfinished stub" },
    Budget { pattern: "unimplemented!(", max: 0, why: "unfinished stub" },
    // Only the native no-op branches of browser shims.
    Budget { pattern: "let _ =", max: 4, why: "discards a value unseen" },
    // Storage and DOM lookups where "absent" and "failed" mean the same thing.
    Budget { pattern: ".ok()", max: 5, why: "drops an error" },
    Budget { pattern: "#[allow(dead_code)]", max: 0, why: "hides unused code" },
];

struct SourceFile {
    path: PathBuf,
    content: String,
}

fn rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            rs_files(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") {
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path, content });
            }
        }
    }
}

fn is_test_file(file: &SourceFile) -> bool {
    file.path.to_string_lossy().ends_with("_test.rs")
}

fn all_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    rs_files(Path::new("src"), &mut files);
    files
}

#[test]
fn pattern_budgets() {
    let files = all_files();
    let production = files.iter().filter(|f| !is_test_file(f)).collect::<Vec<_>>();
    assert!(!production.is_empty(), "no sources found; run from the crate root");

    let mut failures = Vec::new();
    for budget in BUDGETS {
        let hits = production
            .iter()
            .map(|f| (f.path.display().to_string(), f.content.lines().filter(|l| l.contains(budget.pattern)).count()))
            .filter(|(_, n)| *n > 0)
            .collect::<Vec<_>>();
        let count: usize = hits.iter().map(|(_, n)| n).sum();
        if count > budget.max {
            let detail = hits.iter().map(|(p, n)| format!("    {p}: {n}")).collect::<Vec<_>>().join("\n");
            failures.push(format!(
                "{} ({}): found {count}, max {}\n{detail}",
                budget.pattern, budget.why, budget.max
            ));
        }
    }
    assert!(failures.is_empty(), "hygiene budgets exceeded:\n{}", failures.join("\n"));
}

/// Sidecar test files only run if their module declares them with
/// `#[path = "<name>_test.rs"]`; a forgotten hookup silently skips them.
#[test]
fn every_sidecar_test_is_wired() {
    let files = all_files();
    let mut orphans = Vec::new();
    for test_file in files.iter().filter(|f| is_test_file(f)) {
        let Some(name) = test_file.path.file_name().map(|n| n.to_string_lossy().into_owned()) else {
            continue;
        };
        let module = test_file.path.with_file_name(name.replace("_test.rs", ".rs"));
        let hookup = format!("#[path = \"{name}\"]");
        let wired = files
            .iter()
            .any(|f| f.path == module && f.content.contains(&hookup));
        if !wired {
            orphans.push(test_file.path.display().to_string());
        }
    }
    assert!(orphans.is_empty(), "unwired test files:\n  {}", orphans.join("\n  "));
}

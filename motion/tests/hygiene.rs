//! Hygiene: source-level budgets for the motion crate.
//!
//! Scans `motion/src/` (test files excluded) for patterns that either crash
//! the page or lose information silently. Every budget is zero. Motion code
//! runs inside event handlers and animation frames where a panic takes down
//! the whole WASM instance.

use std::fs;
use std::path::{Path, PathBuf};

struct Budget {
    pattern: &'static str,
    max: usize,
    hint: &'static str,
}

const BUDGETS: &[Budget] = &[
    Budget { pattern: ".unwrap()", max: 0, hint: "return Option/Result or fall back to a default" },
    Budget { pattern: ".expect(", max: 0, hint: "return Option/Result or fall back to a default" },
    Budget { pattern: "panic!(", max: 0, hint: "degrade to a no-op instead" },
    Budget { pattern: "unreachable!(", max: 0, hint: "model the state in the type instead" },
    Budget { pattern: "todo!(", max: 0, hint: "finish the stub" },
    Budget { pattern: "unimplemented!(", max: 0, hint: "finish the stub" },
    Budget { pattern: "let _ =", max: 0, hint: "inspect or log the value" },
    Budget { pattern: ".ok()", max: 0, hint: "inspect or log the error" },
    Budget { pattern: "#[allow(dead_code)]", max: 0, hint: "delete the dead code" },
    Budget { pattern: "println!(", max: 0, hint: "use the log facade" },
    Budget { pattern: "dbg!(", max: 0, hint: "remove debugging output" },
];

fn production_files(dir: &Path, out: &mut Vec<PathBuf>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            production_files(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs")
            && !path.to_string_lossy().ends_with("_test.rs")
        {
            out.push(path);
        }
    }
}

fn hits(pattern: &str) -> Vec<(String, usize)> {
    let mut files = Vec::new();
    production_files(Path::new("src"), &mut files);
    files.sort();
    files
        .into_iter()
        .filter_map(|path| {
            let content = fs::read_to_string(&path).ok()?;
            let count = content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (path.display().to_string(), count))
        })
        .collect()
}

#[test]
fn source_tree_is_found() {
    let mut files = Vec::new();
    production_files(Path::new("src"), &mut files);
    assert!(
        files.iter().any(|p| p.ends_with("lib.rs")),
        "hygiene scan found no lib.rs; is the working directory the crate root?"
    );
}

#[test]
fn budgets_hold() {
    let mut failures = Vec::new();
    for budget in BUDGETS {
        let found = hits(budget.pattern);
        let count: usize = found.iter().map(|(_, c)| c).sum();
        if count > budget.max {
            let listing: Vec<String> = found.iter().map(|(p, c)| format!("    {p}: {c}")).collect();
            failures.push(format!(
                "`{}` found {count}, max {} ({})\n{}",
                budget.pattern,
                budget.max,
                budget.hint,
                listing.join("\n")
            ));
        }
    }
    assert!(failures.is_empty(), "hygiene budgets exceeded:\n{}", failures.join("\n"));
}

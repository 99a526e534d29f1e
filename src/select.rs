//! Candidate file selection: a fixed priority list of entry-point names
//! plus capped, extension-based discovery.

use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Entry-point and documentation filenames checked directly under the root,
/// in this order.
pub const PRIORITY_FILES: [&str; 12] = [
    "README.md",
    "readme.md",
    "main.py",
    "server.py",
    "index.py",
    "app.js",
    "index.js",
    "server.js",
    "app.tsx",
    "index.tsx",
    "pom.xml",
    "build.gradle",
];

/// Source extensions considered during discovery, iterated in this order.
pub const SOURCE_EXTENSIONS: [&str; 5] = ["py", "js", "ts", "java", "cpp"];

/// Default cap on the discovery portion of the candidate list.
pub const DEFAULT_MAX_DISCOVERED: usize = 10;

/// Select candidate files under `root`, returned relative to it.
///
/// Priority files come first in their fixed order and are not counted
/// against the cap. Discovered files follow, deduplicated against the
/// priority hits; the discovery list is truncated to `max_discovered`
/// before deduplication.
///
/// This is a filename heuristic, not a relevance ranking: no file content
/// is inspected.
pub fn select_files(root: &Path, max_discovered: usize) -> Vec<PathBuf> {
    let mut selected: Vec<PathBuf> = Vec::new();
    for name in PRIORITY_FILES {
        if root.join(name).is_file() {
            selected.push(PathBuf::from(name));
        }
    }
    debug!(count = selected.len(), "Priority pass complete");

    for path in discover_files(root, max_discovered) {
        if !selected.contains(&path) {
            selected.push(path);
        }
    }

    info!(
        root = %root.display(),
        count = selected.len(),
        "Selected candidate files"
    );
    selected
}

/// Recursively enumerate files matching the source extensions, grouped in
/// extension order, lexicographic within an extension, truncated to `max`.
fn discover_files(root: &Path, max: usize) -> Vec<PathBuf> {
    let mut matches: Vec<PathBuf> = Vec::new();
    visit_dir(root, root, &mut matches);
    matches.sort();

    let mut discovered = Vec::with_capacity(matches.len());
    for ext in SOURCE_EXTENSIONS {
        for path in &matches {
            if path.extension().and_then(|e| e.to_str()) == Some(ext) {
                discovered.push(path.clone());
            }
        }
    }
    discovered.truncate(max);
    discovered
}

fn visit_dir(dir: &Path, root: &Path, results: &mut Vec<PathBuf>) {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            debug!(error = ?e, path = %dir.display(), "Skipping unreadable directory");
            return;
        }
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
            if name == ".git" || name == "target" {
                continue;
            }
            visit_dir(&path, root, results);
        } else if path.is_file() {
            let matches_ext = path
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| SOURCE_EXTENSIONS.contains(&e));
            if matches_ext {
                if let Ok(rel) = path.strip_prefix(root) {
                    results.push(rel.to_path_buf());
                }
            }
        }
    }
}

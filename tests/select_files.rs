use std::fs;
use std::path::{Path, PathBuf};

use repo_onboard::select::{select_files, DEFAULT_MAX_DISCOVERED};
use tempfile::tempdir;

fn touch(path: &Path) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, b"content").unwrap();
}

#[test]
fn priority_files_precede_discovered_files() {
    let dir = tempdir().unwrap();
    touch(&dir.path().join("main.py"));
    touch(&dir.path().join("README.md"));
    touch(&dir.path().join("src/util.py"));

    let selected = select_files(dir.path(), DEFAULT_MAX_DISCOVERED);
    assert_eq!(
        selected,
        vec![
            PathBuf::from("README.md"),
            PathBuf::from("main.py"),
            PathBuf::from("src/util.py"),
        ]
    );
}

#[test]
fn no_duplicate_paths_when_priority_and_discovery_overlap() {
    // main.py is both a priority name and a .py discovery hit.
    let dir = tempdir().unwrap();
    touch(&dir.path().join("main.py"));
    touch(&dir.path().join("helper.py"));

    let selected = select_files(dir.path(), DEFAULT_MAX_DISCOVERED);
    assert_eq!(
        selected,
        vec![PathBuf::from("main.py"), PathBuf::from("helper.py")]
    );
}

#[test]
fn discovery_is_capped_but_priority_files_are_not() {
    let dir = tempdir().unwrap();
    touch(&dir.path().join("README.md"));
    for i in 0..15 {
        touch(&dir.path().join(format!("module_{i:02}.py")));
    }

    let selected = select_files(dir.path(), 10);
    assert_eq!(selected.len(), 11);
    assert_eq!(selected[0], PathBuf::from("README.md"));
}

#[test]
fn fifteen_modules_without_priority_files_yield_exactly_the_cap() {
    let dir = tempdir().unwrap();
    for i in 0..15 {
        touch(&dir.path().join(format!("module_{i:02}.py")));
    }

    let selected = select_files(dir.path(), 10);
    assert_eq!(selected.len(), 10);
}

#[test]
fn discovery_groups_extensions_in_fixed_order() {
    let dir = tempdir().unwrap();
    touch(&dir.path().join("a.ts"));
    touch(&dir.path().join("b.py"));
    touch(&dir.path().join("c.js"));
    touch(&dir.path().join("d.java"));

    let selected = select_files(dir.path(), 10);
    assert_eq!(
        selected,
        vec![
            PathBuf::from("b.py"),
            PathBuf::from("c.js"),
            PathBuf::from("a.ts"),
            PathBuf::from("d.java"),
        ]
    );
}

#[test]
fn git_and_target_directories_are_skipped() {
    let dir = tempdir().unwrap();
    touch(&dir.path().join(".git/hooks/sample.py"));
    touch(&dir.path().join("target/generated.py"));
    touch(&dir.path().join("lib.py"));

    let selected = select_files(dir.path(), 10);
    assert_eq!(selected, vec![PathBuf::from("lib.py")]);
}

#[test]
fn unrelated_extensions_are_ignored() {
    let dir = tempdir().unwrap();
    touch(&dir.path().join("notes.txt"));
    touch(&dir.path().join("style.css"));

    let selected = select_files(dir.path(), 10);
    assert!(selected.is_empty());
}

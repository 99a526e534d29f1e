//! Repository acquisition: clone remote URLs into a temporary directory or
//! borrow an existing local path.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, error, info};

use crate::error::OnboardError;

/// Where the repository contents come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoSource {
    /// Remote repository to clone over http(s).
    Remote(String),
    /// Existing local directory, borrowed read-only.
    Local(PathBuf),
}

impl RepoSource {
    /// Classify a raw request string. Blank input is rejected; anything
    /// without a recognized URL scheme is treated as a local path.
    pub fn parse(raw: &str) -> Result<Self, OnboardError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(OnboardError::MissingSource);
        }
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            Ok(RepoSource::Remote(trimmed.to_string()))
        } else {
            Ok(RepoSource::Local(PathBuf::from(trimmed)))
        }
    }
}

/// A readable repository root, released when dropped.
///
/// Owned roots (fresh clones) are deleted recursively on drop, on every exit
/// path including panics. Borrowed local paths are left untouched.
#[derive(Debug)]
pub struct Workdir {
    root: PathBuf,
    owned: bool,
}

impl Workdir {
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn is_owned(&self) -> bool {
        self.owned
    }
}

impl Drop for Workdir {
    fn drop(&mut self) {
        if self.owned {
            remove_dir_all_forced(&self.root);
        }
    }
}

/// Produce a readable root for the source.
///
/// Remote sources are cloned into a fresh temporary directory; a failed
/// clone removes the partially-populated directory before returning the
/// error. Local sources must already exist and are never mutated.
pub fn acquire(source: &RepoSource) -> Result<Workdir, OnboardError> {
    match source {
        RepoSource::Remote(url) => clone_remote(url),
        RepoSource::Local(path) => {
            if !path.exists() {
                error!(path = %path.display(), "Local repository path does not exist");
                return Err(OnboardError::PathNotFound(path.clone()));
            }
            debug!(path = %path.display(), "Using local repository path");
            Ok(Workdir {
                root: path.clone(),
                owned: false,
            })
        }
    }
}

fn clone_remote(url: &str) -> Result<Workdir, OnboardError> {
    let dir = tempfile::Builder::new()
        .prefix("repo-onboard-")
        .tempdir()?
        .keep();

    // `git clone <url> <dir>`
    let status = Command::new("git").arg("clone").arg(url).arg(&dir).status();

    match status {
        Ok(s) if s.success() => {
            info!(repo_url = url, path = %dir.display(), "Cloned repository");
            Ok(Workdir {
                root: dir,
                owned: true,
            })
        }
        Ok(s) => {
            error!(repo_url = url, "Git exited with non-zero code: {}", s);
            remove_dir_all_forced(&dir);
            Err(OnboardError::CloneFailed(format!(
                "git clone exited with {s}"
            )))
        }
        Err(e) => {
            error!(error = ?e, repo_url = url, "Failed to launch git process");
            remove_dir_all_forced(&dir);
            Err(OnboardError::CloneFailed(format!(
                "failed to launch git: {e}"
            )))
        }
    }
}

/// Recursive delete that survives read-only permission bits left by the
/// clone tool (e.g. under `.git/objects`): on failure, clear the bits
/// file-by-file and retry once.
fn remove_dir_all_forced(path: &Path) {
    if !path.exists() {
        return;
    }
    if fs::remove_dir_all(path).is_ok() {
        debug!(path = %path.display(), "Removed working directory");
        return;
    }
    clear_readonly(path);
    match fs::remove_dir_all(path) {
        Ok(()) => debug!(path = %path.display(), "Removed working directory after permission fix"),
        Err(e) => error!(error = ?e, path = %path.display(), "Failed to remove working directory"),
    }
}

fn clear_readonly(path: &Path) {
    let Ok(metadata) = fs::symlink_metadata(path) else {
        return;
    };
    let mut perms = metadata.permissions();
    if perms.readonly() {
        #[allow(clippy::permissions_set_readonly_false)]
        perms.set_readonly(false);
        let _ = fs::set_permissions(path, perms);
    }
    if metadata.is_dir() {
        if let Ok(entries) = fs::read_dir(path) {
            for entry in entries.flatten() {
                clear_readonly(&entry.path());
            }
        }
    }
}

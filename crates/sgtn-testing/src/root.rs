//! Project-root discovery.
//!
//! Test binaries start in whatever directory cargo (or a developer) picked.
//! The project root is the nearest ancestor containing the marker subtree
//! (`testdata/` by default); fixture paths are resolved against it.

use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

/// Directory whose presence marks the project root.
pub const DEFAULT_MARKER: &str = "testdata";

/// An absolute directory that fixture paths are resolved against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRoot(PathBuf);

impl ProjectRoot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    pub fn path(&self) -> &Path {
        &self.0
    }

    /// `root/relative`.
    pub fn join(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.0.join(relative)
    }

    /// Make this the process working directory.
    pub fn apply(&self) -> io::Result<()> {
        std::env::set_current_dir(&self.0)
    }
}

/// How the harness arrived at its project root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootSource {
    /// Taken verbatim from the `WD` environment variable.
    Override,
    /// The starting directory already contained the marker.
    AlreadyPresent,
    /// Found the marker `levels` directories above the starting directory.
    Discovered { levels: usize },
    /// No ancestor holds the marker; the starting directory is used as is.
    NotFound,
}

/// Result of a successful upward search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootFound {
    pub root: ProjectRoot,
    /// Number of parent steps taken from the starting directory.
    pub levels: usize,
}

/// Whether `dir/marker` exists. Probe errors count as absent.
fn has_marker(dir: &Path, marker: &Path) -> bool {
    matches!(dir.join(marker).try_exists(), Ok(true))
}

/// Walk from `start` towards the filesystem root and return the first
/// directory containing `marker`. Pure: the working directory is untouched.
pub fn find_project_root(start: &Path, marker: impl AsRef<Path>) -> Option<RootFound> {
    let marker = marker.as_ref();
    start
        .ancestors()
        .enumerate()
        .find(|(_, dir)| has_marker(dir, marker))
        .map(|(levels, dir)| RootFound {
            root: ProjectRoot::new(dir),
            levels,
        })
}

/// Search upward from the current working directory and, on success, change
/// into the directory that holds `marker`. On failure the working directory is
/// left as it was.
pub fn resolve(marker: impl AsRef<Path>) -> Option<RootFound> {
    let marker = marker.as_ref();
    let cwd = match std::env::current_dir() {
        Ok(cwd) => cwd,
        Err(e) => {
            warn!(error = %e, "cannot read current directory");
            return None;
        }
    };

    match find_project_root(&cwd, marker) {
        Some(found) => {
            info!(root = %found.root.path().display(), levels = found.levels, "found project root");
            if let Err(e) = found.root.apply() {
                warn!(root = %found.root.path().display(), error = %e, "cannot change into project root");
                return None;
            }
            Some(found)
        }
        None => {
            debug!(start = %cwd.display(), marker = %marker.display(), "failed to find project root");
            None
        }
    }
}

/// Settle the project root once per process.
///
/// `wd` (the `WD` override) wins and is entered without checking for the
/// marker. Otherwise the current directory is kept if it already holds the
/// marker, and searched upward from if it does not.
pub fn establish(wd: Option<&Path>, marker: &Path) -> (ProjectRoot, RootSource) {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    info!(cwd = %cwd.display(), "current directory");

    if let Some(wd) = wd {
        info!(wd = %wd.display(), "WD environment variable is set");
        if let Err(e) = std::env::set_current_dir(wd) {
            warn!(wd = %wd.display(), error = %e, "cannot change into WD");
            return (ProjectRoot::new(cwd.join(wd)), RootSource::Override);
        }
        let root = std::env::current_dir().unwrap_or_else(|_| cwd.join(wd));
        return (ProjectRoot::new(root), RootSource::Override);
    }

    if has_marker(&cwd, marker) {
        return (ProjectRoot::new(cwd), RootSource::AlreadyPresent);
    }

    debug!(
        marker = %marker.display(),
        "project root isn't set; set WD to the project root. Searching upward for the marker"
    );
    match resolve(marker) {
        Some(found) => (found.root, RootSource::Discovered { levels: found.levels }),
        None => {
            warn!(cwd = %cwd.display(), marker = %marker.display(), "project root not found; fixture paths may not resolve");
            (ProjectRoot::new(cwd), RootSource::NotFound)
        }
    }
}

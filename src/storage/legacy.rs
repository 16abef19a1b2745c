//! Removal of session artifacts left behind by the old pickle/JSON storage.
//!
//! Cleanup is best effort: a path that cannot be removed is logged and
//! skipped, and the remaining paths are still processed.

use log::{debug, info, warn};
use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

/// Legacy paths relative to the installation root. The pickle inside `.mm`
/// comes before `.mm` itself so the directory can be emptied in one pass.
pub const LEGACY_ARTIFACTS: [&str; 3] = [".mm/mm_session.pickle", "monarch_session.json", ".mm"];

enum Outcome {
    Missing,
    RemovedFile,
    RemovedDir,
    DirNotEmpty,
    Skipped,
}

/// Remove every legacy artifact found under `root`, returning the paths removed.
pub fn cleanup(root: &Path) -> Vec<PathBuf> {
    let mut removed = Vec::new();

    for relative in LEGACY_ARTIFACTS {
        let path = root.join(relative);
        match remove_artifact(&path) {
            Ok(Outcome::RemovedFile) => {
                info!("Cleaned up old session file: {}", path.display());
                removed.push(path);
            }
            Ok(Outcome::RemovedDir) => {
                info!("Cleaned up empty session directory: {}", path.display());
                removed.push(path);
            }
            Ok(Outcome::DirNotEmpty) => {
                debug!("Leaving non-empty directory in place: {}", path.display());
            }
            Ok(Outcome::Missing) | Ok(Outcome::Skipped) => {}
            Err(e) => warn!("Could not clean up {}: {}", path.display(), e),
        }
    }

    removed
}

fn remove_artifact(path: &Path) -> io::Result<Outcome> {
    let metadata = match fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Outcome::Missing),
        Err(e) => return Err(e),
    };

    if metadata.is_file() {
        fs::remove_file(path)?;
        Ok(Outcome::RemovedFile)
    } else if metadata.is_dir() {
        if fs::read_dir(path)?.next().is_some() {
            return Ok(Outcome::DirNotEmpty);
        }
        fs::remove_dir(path)?;
        Ok(Outcome::RemovedDir)
    } else {
        Ok(Outcome::Skipped)
    }
}

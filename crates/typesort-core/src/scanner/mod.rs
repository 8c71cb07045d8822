/// Scanner module: validates the scan root and drives classification.
///
/// A scan is a single synchronous call: the root is checked and
/// canonicalised up front, then the serial walker visits every entry
/// beneath it and groups qualifying files by extension. The two root failures
/// (`PathNotFound`, `NotADirectory`) are raised before anything is walked,
/// so a caller never sees a partial map.
pub mod stats;
mod walk;

pub use stats::ScanStats;

use crate::model::{FilterCriteria, ResultMap};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Fatal errors raised before traversal begins.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("{} does not exist", .path.display())]
    PathNotFound { path: PathBuf },

    #[error("{} is not a directory", .path.display())]
    NotADirectory { path: PathBuf },

    #[error("cannot access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A completed scan: the canonical root, the grouped files, and counters.
#[derive(Debug, Clone)]
pub struct ScanReport {
    /// Canonical root every path in `files` is prefixed with.
    pub root: PathBuf,
    pub files: ResultMap,
    pub stats: ScanStats,
}

/// Scan `root` recursively and group qualifying files by extension.
///
/// Per-file errors are logged and skipped; see [`scan_with_stats`] to find
/// out how many there were.
pub fn scan(root: impl AsRef<Path>, criteria: &FilterCriteria) -> Result<ResultMap, ScanError> {
    scan_with_stats(root, criteria).map(|report| report.files)
}

/// Like [`scan`], but also returns the canonical root and scan counters.
pub fn scan_with_stats(
    root: impl AsRef<Path>,
    criteria: &FilterCriteria,
) -> Result<ScanReport, ScanError> {
    let root = resolve_root(root.as_ref())?;
    Ok(walk::walk(root, criteria))
}

/// Check that `path` is an existing directory and canonicalise it.
fn resolve_root(path: &Path) -> Result<PathBuf, ScanError> {
    let meta = match fs::metadata(path) {
        Ok(meta) => meta,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Err(ScanError::PathNotFound {
                path: path.to_path_buf(),
            });
        }
        Err(source) => {
            return Err(ScanError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    if !meta.is_dir() {
        return Err(ScanError::NotADirectory {
            path: path.to_path_buf(),
        });
    }

    fs::canonicalize(path).map_err(|source| ScanError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Serial directory walker using `jwalk`.
///
/// The walk runs on the calling thread (`Parallelism::Serial`) with entries
/// sorted by name, so two scans of an unchanged tree produce identical
/// maps. Symlinks are never followed into directories; a symlink to a
/// regular file is classified under its own path using the target's
/// metadata.
///
/// Each file costs exactly one `fs::metadata` call. Nothing is held open
/// between entries.
use super::stats::ScanStats;
use super::ScanReport;
use crate::model::size::format_size;
use crate::model::{escape_os, FileRecord, FilterCriteria, ResultMap};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Walk the canonical `root` and classify every qualifying file.
///
/// Per-file failures are counted in `ScanStats::error_count` and skipped.
pub(super) fn walk(root: PathBuf, criteria: &FilterCriteria) -> ScanReport {
    let start = Instant::now();
    let mut files = ResultMap::new();
    let mut stats = ScanStats::default();

    info!(dir = %root.display(), "starting scan");

    let walker = jwalk::WalkDir::new(&root)
        .sort(true)
        .skip_hidden(false)
        .follow_links(false)
        .parallelism(jwalk::Parallelism::Serial);

    for entry_result in walker {
        let entry = match entry_result {
            Ok(e) => e,
            Err(err) => {
                // Typically access-denied on a directory read.
                stats.error_count += 1;
                let path = err
                    .path()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default();
                warn!(path = %path, error = %err, "unreadable entry, skipping");
                continue;
            }
        };

        if entry.file_type().is_dir() {
            stats.dirs_visited += 1;
            let path = entry.path();
            info!(dir = %relative_display(&path, &root), "processing directory");
            continue;
        }

        classify(entry.path(), criteria, &mut files, &mut stats);
    }

    stats.duration = start.elapsed();
    info!(
        dir = %root.display(),
        matched = stats.files_matched,
        filtered = stats.files_filtered,
        errors = stats.error_count,
        "finished scan in {:?}",
        stats.duration
    );

    ScanReport { root, files, stats }
}

/// Stat one non-directory entry, apply the filters, and file it under its
/// extension.
fn classify(path: PathBuf, criteria: &FilterCriteria, files: &mut ResultMap, stats: &mut ScanStats) {
    // Follows symlinks: a link is measured by what it points at.
    let meta = match fs::metadata(&path) {
        Ok(meta) => meta,
        Err(err) => {
            stats.error_count += 1;
            warn!(file = %path.display(), error = %err, "cannot read metadata, skipping");
            return;
        }
    };

    if !meta.is_file() {
        debug!(file = %path.display(), "not a regular file, skipping");
        return;
    }

    let modified = match meta.modified() {
        Ok(modified) => modified,
        Err(err) => {
            stats.error_count += 1;
            warn!(file = %path.display(), error = %err, "modification time unavailable, skipping");
            return;
        }
    };
    let record = FileRecord::new(path, meta.len(), modified);

    if let Some(bound) = criteria.violated_bound(&record) {
        stats.record_filtered();
        debug!(
            file = %record.path.display(),
            size = %format_size(record.size),
            bound,
            "criteria mismatch, skipping"
        );
        return;
    }

    let extension = record.extension();
    debug!(file = %record.path.display(), extension = %escape_os(&extension), "classified");
    stats.record_match();
    files.push(&extension, record.path);
}

/// Path of `dir` relative to the scan root, `.` for the root itself.
fn relative_display(dir: &Path, root: &Path) -> String {
    match dir.strip_prefix(root) {
        Ok(rel) if rel.as_os_str().is_empty() => ".".to_string(),
        Ok(rel) => rel.display().to_string(),
        Err(_) => dir.display().to_string(),
    }
}

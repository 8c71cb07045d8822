/// A single regular file observed during a scan.
///
/// Records are ephemeral: one is built per file from a scoped metadata
/// lookup, checked against the active `FilterCriteria`, and dropped once the
/// path has been classified.
use super::size::bytes_to_kib;
use chrono::{DateTime, Local};
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// Path, size, and modification time of one file.
#[derive(Debug, Clone, PartialEq)]
pub struct FileRecord {
    /// Absolute path rooted at the canonical scan root.
    pub path: PathBuf,
    /// Logical size in bytes.
    pub size: u64,
    /// Last-modified timestamp in local time.
    pub modified: DateTime<Local>,
}

impl FileRecord {
    pub fn new(path: PathBuf, size: u64, modified: impl Into<DateTime<Local>>) -> Self {
        Self {
            path,
            size,
            modified: modified.into(),
        }
    }

    /// Size in KiB, the unit filter bounds are expressed in.
    #[inline]
    pub fn size_kib(&self) -> f64 {
        bytes_to_kib(self.size)
    }

    /// Extension key this record is grouped under.
    pub fn extension(&self) -> OsString {
        self.path
            .file_name()
            .map(extension_of)
            .unwrap_or_default()
    }
}

/// Extract the extension key from a bare file name.
///
/// Leading dots are ignored, then everything from the last remaining `.`
/// (inclusive) is the extension. Case is preserved, and the name is never
/// decoded, so non-Unicode extensions keep their exact bytes.
///
/// | name             | key     |
/// |------------------|---------|
/// | `a.txt`          | `.txt`  |
/// | `archive.tar.gz` | `.gz`   |
/// | `.gitignore`     | `""`    |
/// | `..hidden`       | `""`    |
/// | `file.`          | `.`     |
/// | `README`         | `""`    |
pub fn extension_of(file_name: &OsStr) -> OsString {
    let Some(ext) = Path::new(file_name).extension() else {
        return OsString::new();
    };

    // `Path::extension` splits `..hidden` into `.` + `hidden`; a stem made
    // only of dots means the name has no extension.
    let bytes = file_name.as_encoded_bytes();
    let stem = &bytes[..bytes.len() - ext.as_encoded_bytes().len() - 1];
    if stem.iter().all(|&b| b == b'.') {
        return OsString::new();
    }

    let mut key = OsString::with_capacity(ext.len() + 1);
    key.push(".");
    key.push(ext);
    key
}

/// Extension-keyed collection of classified file paths.
///
/// Keys are extension strings (`".txt"`, `""` for extensionless files) kept
/// in sorted order. Each value preserves the order files were discovered in.
/// A key only exists once at least one path has been pushed under it.
///
/// Keys are raw `OsString`s, so extensions that are not valid Unicode stay
/// separate groups. Serialisation renders keys and paths through
/// [`escape_os`]; see there for the one ambiguity that escaping leaves.
use super::os_text::escape_os;
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use std::collections::btree_map::{self, BTreeMap};
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// The fully materialised result of a scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultMap {
    groups: BTreeMap<OsString, Vec<PathBuf>>,
}

impl ResultMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `path` under `extension`, creating the group on first use.
    pub fn push(&mut self, extension: impl AsRef<OsStr>, path: PathBuf) {
        let extension = extension.as_ref();
        match self.groups.get_mut(extension) {
            Some(paths) => paths.push(path),
            None => {
                self.groups.insert(extension.to_os_string(), vec![path]);
            }
        }
    }

    /// Paths grouped under `extension`, in discovery order.
    pub fn get(&self, extension: impl AsRef<OsStr>) -> Option<&[PathBuf]> {
        self.groups.get(extension.as_ref()).map(Vec::as_slice)
    }

    /// `true` if `extension` has at least one path.
    pub fn contains_key(&self, extension: impl AsRef<OsStr>) -> bool {
        self.groups.contains_key(extension.as_ref())
    }

    /// Number of distinct extensions.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of paths across all extensions.
    pub fn file_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// Extension keys in sorted order.
    pub fn extensions(&self) -> impl Iterator<Item = &OsStr> {
        self.groups.keys().map(OsString::as_os_str)
    }

    /// `(extension, paths)` pairs in key order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.groups.iter(),
        }
    }

    /// Every path in the map, grouped by extension in key order.
    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.groups.values().flatten().map(PathBuf::as_path)
    }

    /// Consume the map, returning the underlying grouping.
    pub fn into_inner(self) -> BTreeMap<OsString, Vec<PathBuf>> {
        self.groups
    }
}

/// Serialises as a plain object: `{".txt": ["/abs/a.txt", ...]}`.
impl Serialize for ResultMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.groups.len()))?;
        for (ext, paths) in &self.groups {
            map.serialize_entry(&escape_os(ext), &EscapedPaths(paths))?;
        }
        map.end()
    }
}

struct EscapedPaths<'a>(&'a [PathBuf]);

impl Serialize for EscapedPaths<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.0.len()))?;
        for path in self.0 {
            seq.serialize_element(&escape_os(path.as_os_str()))?;
        }
        seq.end()
    }
}

/// Iterator over `(extension, paths)` pairs.
pub struct Iter<'a> {
    inner: btree_map::Iter<'a, OsString, Vec<PathBuf>>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a OsStr, &'a [PathBuf]);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(ext, paths)| (ext.as_os_str(), paths.as_slice()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a> IntoIterator for &'a ResultMap {
    type Item = (&'a OsStr, &'a [PathBuf]);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

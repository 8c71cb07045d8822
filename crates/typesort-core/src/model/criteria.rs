/// Optional size and modification-time bounds applied to every file.
///
/// Each bound is independent; `None` means "no constraint on that axis".
/// All bounds are inclusive, so a file sitting exactly on a bound passes.
use super::file_record::FileRecord;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading or validating a `FilterCriteria`.
#[derive(Debug, Error)]
pub enum CriteriaError {
    #[error("invalid filter criteria: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{axis} range is inverted: minimum is greater than maximum")]
    InvertedRange { axis: &'static str },
}

/// Filter bounds for a scan.
///
/// Size bounds are in KiB (bytes / 1024) and may be fractional. Time bounds
/// are compared against each file's last-modified timestamp.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FilterCriteria {
    pub min_size_kib: Option<f64>,
    pub max_size_kib: Option<f64>,
    pub min_mtime: Option<DateTime<Local>>,
    pub max_mtime: Option<DateTime<Local>>,
}

impl FilterCriteria {
    /// Criteria with no bounds; every file matches.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_min_size_kib(mut self, kib: f64) -> Self {
        self.min_size_kib = Some(kib);
        self
    }

    pub fn with_max_size_kib(mut self, kib: f64) -> Self {
        self.max_size_kib = Some(kib);
        self
    }

    pub fn with_min_mtime(mut self, at: DateTime<Local>) -> Self {
        self.min_mtime = Some(at);
        self
    }

    pub fn with_max_mtime(mut self, at: DateTime<Local>) -> Self {
        self.max_mtime = Some(at);
        self
    }

    /// Parse criteria from a JSON object and validate it.
    ///
    /// Missing fields are unbounded; timestamps use RFC 3339.
    pub fn from_json(json: &str) -> Result<Self, CriteriaError> {
        let criteria: Self = serde_json::from_str(json)?;
        criteria.validate()?;
        Ok(criteria)
    }

    /// Reject ranges whose minimum exceeds their maximum.
    ///
    /// `scan` does not call this; an inverted range there simply matches
    /// nothing.
    pub fn validate(&self) -> Result<(), CriteriaError> {
        if let (Some(min), Some(max)) = (self.min_size_kib, self.max_size_kib) {
            if min > max {
                return Err(CriteriaError::InvertedRange { axis: "size" });
            }
        }
        if let (Some(min), Some(max)) = (self.min_mtime, self.max_mtime) {
            if min > max {
                return Err(CriteriaError::InvertedRange { axis: "mtime" });
            }
        }
        Ok(())
    }

    /// `true` when no bound is set.
    pub fn is_unbounded(&self) -> bool {
        self.min_size_kib.is_none()
            && self.max_size_kib.is_none()
            && self.min_mtime.is_none()
            && self.max_mtime.is_none()
    }

    /// `true` if `record` satisfies every bound that is set.
    #[inline]
    pub fn matches(&self, record: &FileRecord) -> bool {
        self.violated_bound(record).is_none()
    }

    /// Name of the first bound `record` violates, if any.
    pub fn violated_bound(&self, record: &FileRecord) -> Option<&'static str> {
        let kib = record.size_kib();
        if self.min_size_kib.is_some_and(|min| kib < min) {
            return Some("min_size_kib");
        }
        if self.max_size_kib.is_some_and(|max| kib > max) {
            return Some("max_size_kib");
        }
        if self.min_mtime.is_some_and(|min| record.modified < min) {
            return Some("min_mtime");
        }
        if self.max_mtime.is_some_and(|max| record.modified > max) {
            return Some("max_mtime");
        }
        None
    }
}

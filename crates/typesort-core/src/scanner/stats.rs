/// Scan counters: totals collected while a scan walks the tree.
///
/// The data lives in `ScanReport::stats`; nothing here influences which
/// files end up in the result map.
use std::time::Duration;

/// Totals for one completed scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanStats {
    /// Directories entered, including the root.
    pub dirs_visited: u64,
    /// Files that were matched or filtered.
    pub files_seen: u64,
    /// Files that passed every filter and were classified.
    pub files_matched: u64,
    /// Files excluded by a size or time bound.
    pub files_filtered: u64,
    /// Non-fatal errors (unreadable directory, vanished file, dangling symlink).
    pub error_count: u64,
    /// Wall-clock time spent walking.
    pub duration: Duration,
}

impl ScanStats {
    #[inline]
    pub(crate) fn record_match(&mut self) {
        self.files_seen += 1;
        self.files_matched += 1;
    }

    #[inline]
    pub(crate) fn record_filtered(&mut self) {
        self.files_seen += 1;
        self.files_filtered += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seen_is_matched_plus_filtered() {
        let mut stats = ScanStats::default();
        stats.record_match();
        stats.record_match();
        stats.record_filtered();
        assert_eq!(stats.files_seen, 3);
        assert_eq!(stats.files_matched, 2);
        assert_eq!(stats.files_filtered, 1);
        assert_eq!(stats.error_count, 0);
    }
}

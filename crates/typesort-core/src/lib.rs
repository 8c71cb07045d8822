/// typesort core: recursive scanning and extension grouping.
///
/// The entry point is [`scanner::scan`]: walk a directory tree, drop files
/// outside the optional size/mtime bounds, and group the rest by extension.
/// The crate only emits `tracing` events; installing a subscriber is left to
/// the embedding program.
///
/// # Modules
///
/// - [`model`]: Filter criteria, per-file records, and the result map.
/// - [`scanner`]: Root validation and the serial directory walk.
/// - [`analysis`]: Category roll-ups over a finished result map.
/// - [`export`]: JSON and CSV rendering of a result map.
pub mod analysis;
pub mod export;
pub mod model;
pub mod scanner;

pub use model::{FilterCriteria, ResultMap};
pub use scanner::{scan, scan_with_stats, ScanError, ScanReport, ScanStats};

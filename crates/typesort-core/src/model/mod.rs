/// Data model for a typesort scan.
///
/// Filter configuration, the per-file record used during classification,
/// and the extension-keyed result map.
pub mod criteria;
pub mod file_record;
pub mod os_text;
pub mod result_map;
pub mod size;

pub use criteria::{CriteriaError, FilterCriteria};
pub use file_record::{extension_of, FileRecord};
pub use os_text::escape_os;
pub use result_map::ResultMap;

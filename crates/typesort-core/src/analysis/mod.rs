/// Analysis modules: summaries computed from a finished `ResultMap`.

pub mod file_types;

pub use file_types::{analyse_categories, categorise_extension, CategoryStats, FileCategory};

/// Broad file-category roll-up over a classified `ResultMap`.
///
/// The scanner groups by exact extension key; this folds those keys into a
/// handful of human-friendly categories (Documents, Images, Code, ...) with
/// file counts per category.
use crate::model::{escape_os, ResultMap};
use compact_str::CompactString;
use std::collections::HashMap;

/// Broad file type categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileCategory {
    Documents,
    Images,
    Video,
    Audio,
    Archives,
    Code,
    Executables,
    System,
    Other,
}

impl FileCategory {
    /// Human-readable label for display.
    pub fn label(self) -> &'static str {
        match self {
            Self::Documents => "Documents",
            Self::Images => "Images",
            Self::Video => "Video",
            Self::Audio => "Audio",
            Self::Archives => "Archives",
            Self::Code => "Code",
            Self::Executables => "Executables",
            Self::System => "System",
            Self::Other => "Other",
        }
    }
}

/// File count and contributing extension keys for one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryStats {
    pub category: FileCategory,
    pub file_count: u64,
    /// Extension keys folded into this category, in `ResultMap` key order.
    /// Keys that are not valid Unicode appear in their escaped form.
    pub extensions: Vec<CompactString>,
}

/// Longest extension (without the dot) that can map to a known category.
const MAX_KNOWN_EXT_LEN: usize = 8;

/// Map an extension key to a broad category.
///
/// Accepts keys with or without the leading dot and matches
/// case-insensitively, so `.JPG`, `jpg` and `.jpg` are all Images. The empty
/// key (extensionless files) is `Other`.
pub fn categorise_extension(ext: &str) -> FileCategory {
    let bare = ext.strip_prefix('.').unwrap_or(ext);
    if bare.is_empty() || bare.len() > MAX_KNOWN_EXT_LEN {
        return FileCategory::Other;
    }

    // Lowercase on the stack; every known extension is short ASCII.
    let mut buf = [0u8; MAX_KNOWN_EXT_LEN];
    let lower = &mut buf[..bare.len()];
    lower.copy_from_slice(bare.as_bytes());
    lower.make_ascii_lowercase();
    let Ok(lower) = std::str::from_utf8(lower) else {
        return FileCategory::Other;
    };

    match lower {
        "doc" | "docx" | "pdf" | "txt" | "rtf" | "odt" | "ods" | "xls" | "xlsx" | "ppt"
        | "pptx" | "csv" | "md" | "epub" => FileCategory::Documents,
        "jpg" | "jpeg" | "png" | "gif" | "bmp" | "svg" | "webp" | "ico" | "tiff" | "tif"
        | "psd" | "raw" | "cr2" | "nef" | "heic" | "heif" => FileCategory::Images,
        "mp4" | "mkv" | "avi" | "mov" | "wmv" | "flv" | "webm" | "m4v" | "mpg" | "mpeg" | "3gp" => {
            FileCategory::Video
        }
        "mp3" | "wav" | "flac" | "aac" | "ogg" | "wma" | "m4a" | "opus" => FileCategory::Audio,
        "zip" | "rar" | "7z" | "tar" | "gz" | "tgz" | "bz2" | "xz" | "zst" | "cab" | "iso"
        | "dmg" => FileCategory::Archives,
        "rs" | "py" | "js" | "ts" | "jsx" | "tsx" | "c" | "cpp" | "h" | "hpp" | "cs" | "java"
        | "go" | "rb" | "php" | "swift" | "kt" | "scala" | "html" | "css" | "scss" | "json"
        | "xml" | "yaml" | "yml" | "toml" | "sql" | "sh" | "bat" | "ps1" => FileCategory::Code,
        "exe" | "msi" | "dll" | "so" | "dylib" | "app" | "com" | "bin" => FileCategory::Executables,
        "sys" | "drv" | "inf" | "log" | "dat" | "reg" | "tmp" | "bak" | "ini" | "cfg" => {
            FileCategory::System
        }
        _ => FileCategory::Other,
    }
}

/// Fold every extension group in `files` into per-category totals.
///
/// Sorted by file count descending, ties broken by label.
pub fn analyse_categories(files: &ResultMap) -> Vec<CategoryStats> {
    let mut by_category: HashMap<FileCategory, CategoryStats> = HashMap::with_capacity(9);

    for (ext, paths) in files {
        let category = ext.to_str().map_or(FileCategory::Other, categorise_extension);
        let stats = by_category.entry(category).or_insert_with(|| CategoryStats {
            category,
            file_count: 0,
            extensions: Vec::new(),
        });
        stats.file_count += paths.len() as u64;
        stats.extensions.push(CompactString::new(escape_os(ext)));
    }

    let mut results: Vec<CategoryStats> = by_category.into_values().collect();
    results.sort_by(|a, b| {
        b.file_count
            .cmp(&a.file_count)
            .then_with(|| a.category.label().cmp(b.category.label()))
    });
    results
}

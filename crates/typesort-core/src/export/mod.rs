/// Export: render a `ResultMap` as JSON or CSV.
///
/// JSON mirrors the map's shape (`{".txt": ["/abs/a.txt", ...]}`); CSV
/// flattens it into one `extension,path` row per file. Both follow the map's
/// key order and each group's discovery order.
use crate::model::{escape_os, ResultMap};
use std::io::Write;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("JSON export failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),
}

/// Serialise `files` as a JSON object keyed by extension.
pub fn to_json(files: &ResultMap, pretty: bool) -> Result<String, ExportError> {
    let json = if pretty {
        serde_json::to_string_pretty(files)?
    } else {
        serde_json::to_string(files)?
    };
    Ok(json)
}

/// Write `files` as CSV with an `extension,path` header.
///
/// Extensions and paths that are not valid Unicode are written escaped, the
/// same way JSON export renders them (see [`escape_os`]).
pub fn write_csv<W: Write>(files: &ResultMap, writer: W) -> Result<(), ExportError> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(["extension", "path"])?;
    for (ext, paths) in files {
        let ext = escape_os(ext);
        for path in paths {
            csv.write_record([&*ext, &*escape_os(path.as_os_str())])?;
        }
    }
    csv.flush().map_err(csv::Error::from)?;
    Ok(())
}

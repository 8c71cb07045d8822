/// Size helpers: KiB conversion for filter bounds and human-readable output.
///
/// All sizes read from the filesystem are `u64` bytes. Filter bounds are
/// expressed in KiB (`f64`), so conversion happens exactly once per file at
/// the comparison boundary.

/// Bytes per kibibyte.
pub const KIB: u64 = 1024;

/// Convert a byte count to kibibytes.
#[inline]
pub fn bytes_to_kib(bytes: u64) -> f64 {
    bytes as f64 / KIB as f64
}

/// Format a byte count into a human-readable string with binary units.
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["KiB", "MiB", "GiB", "TiB"];

    if bytes < KIB {
        return format!("{bytes} B");
    }

    let mut value = bytes_to_kib(bytes);
    let mut unit = 0;
    while value >= KIB as f64 && unit < UNITS.len() - 1 {
        value /= KIB as f64;
        unit += 1;
    }
    format!("{value:.1} {}", UNITS[unit])
}

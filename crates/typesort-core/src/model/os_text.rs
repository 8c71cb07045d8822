/// Text rendering of `OsStr` values that may not be valid Unicode.
///
/// Scan results keep file names and extensions as raw `OsString`s so that
/// distinct byte sequences stay distinct. Anything that must become text
/// (log fields, JSON, CSV) goes through [`escape_os`] instead of a lossy
/// conversion, which would fold every invalid sequence into U+FFFD.
use std::borrow::Cow;
use std::ffi::OsStr;

/// Render `s` as text without losing information.
///
/// Valid Unicode is returned unchanged. Otherwise backslashes are doubled
/// and each invalid byte becomes `\xNN` (unix), or each unpaired surrogate
/// becomes `\u{XXXX}` (Windows). Two different invalid names never render
/// the same, though a valid name that literally contains `\xNN` text can
/// look like an escaped one.
pub fn escape_os(s: &OsStr) -> Cow<'_, str> {
    match s.to_str() {
        Some(text) => Cow::Borrowed(text),
        None => Cow::Owned(escape_invalid(s)),
    }
}

#[cfg(unix)]
fn escape_invalid(s: &OsStr) -> String {
    use std::fmt::Write;
    use std::os::unix::ffi::OsStrExt;

    let mut out = String::with_capacity(s.len() + 8);
    for chunk in s.as_bytes().utf8_chunks() {
        for c in chunk.valid().chars() {
            if c == '\\' {
                out.push_str("\\\\");
            } else {
                out.push(c);
            }
        }
        for byte in chunk.invalid() {
            let _ = write!(out, "\\x{byte:02X}");
        }
    }
    out
}

#[cfg(windows)]
fn escape_invalid(s: &OsStr) -> String {
    use std::fmt::Write;
    use std::os::windows::ffi::OsStrExt;

    let mut out = String::with_capacity(s.len() + 8);
    for unit in char::decode_utf16(s.encode_wide()) {
        match unit {
            Ok('\\') => out.push_str("\\\\"),
            Ok(c) => out.push(c),
            Err(err) => {
                let _ = write!(out, "\\u{{{:04X}}}", err.unpaired_surrogate());
            }
        }
    }
    out
}

#[cfg(not(any(unix, windows)))]
fn escape_invalid(s: &OsStr) -> String {
    s.to_string_lossy().into_owned()
}

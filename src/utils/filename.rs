use std::{
    ffi::{OsStr, OsString},
    path::Path,
};

/// Puts `prefix` in front of the final component of `path`, dropping any directories.
/// `logos/mark.png` with prefix `watermark-new-` becomes `watermark-new-mark.png`.
///
/// A path without a final component (`..`, `/`, empty) yields the prefix alone.
pub fn prefixed_file_name(prefix: &str, path: &Path) -> OsString {
    let mut new_name = OsString::from(prefix);
    if let Some(file_name) = path.file_name() {
        new_name.push(file_name);
    }
    new_name
}

/// Uppercased extension of `path`, or an empty string when there is none.
pub fn extension_for_display(path: &Path) -> OsString {
    path.extension()
        .unwrap_or(OsStr::new(""))
        .to_ascii_uppercase()
}

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Derives where the processed copy of `source` is written.
///
/// The marker and the source extension are appended after the *full* file
/// name, so `photos/a.jpg` with marker `_blurred` becomes
/// `<dest_dir>/a.jpg_blurred.jpg`.
pub fn derive_output_path(source: &Path, dest_dir: &Path, marker: &str) -> PathBuf {
    let mut name = source
        .file_name()
        .map(OsString::from)
        .unwrap_or_default();
    name.push(marker);
    if let Some(ext) = source.extension() {
        name.push(".");
        name.push(ext);
    }
    dest_dir.join(name)
}

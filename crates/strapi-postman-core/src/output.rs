//! Collection serialization and atomic file output

use std::{fs, io::Write, path::Path};

use tempfile::Builder;
use tracing::debug;

use crate::{postman::Collection, Error, Result};

/// Pretty-print a collection with two-space indentation.
///
/// # Errors
///
/// Returns error if serialization fails.
pub fn to_json(collection: &Collection) -> Result<String> {
    Ok(serde_json::to_string_pretty(collection)?)
}

/// Write a collection to `path`.
///
/// The JSON goes to a temporary file next to the destination which is then
/// renamed over it, so readers never observe a partially written file. An
/// existing destination keeps its permissions; a new one gets the usual
/// umask-filtered mode.
///
/// # Errors
///
/// Returns error if the destination directory is missing or not writable.
pub fn write_collection(collection: &Collection, path: &Path) -> Result<()> {
    let json = to_json(collection)?;
    let dir = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut file = temp_file_builder()
        .tempfile_in(dir)
        .map_err(|e| Error::io(dir, e))?;
    if let Ok(existing) = fs::metadata(path) {
        file.as_file()
            .set_permissions(existing.permissions())
            .map_err(|e| Error::io(file.path().to_path_buf(), e))?;
    }
    file.write_all(json.as_bytes())
        .and_then(|()| file.flush())
        .map_err(|e| Error::io(file.path().to_path_buf(), e))?;
    file.persist(path).map_err(|e| Error::io(path, e.error))?;

    debug!(path = %path.display(), bytes = json.len(), "collection written");
    Ok(())
}

#[cfg(unix)]
fn temp_file_builder() -> Builder<'static, 'static> {
    use std::os::unix::fs::PermissionsExt;

    // 0666 before the umask, like a plain `File::create`
    let mut builder = Builder::new();
    builder.permissions(fs::Permissions::from_mode(0o666));
    builder
}

#[cfg(not(unix))]
fn temp_file_builder() -> Builder<'static, 'static> {
    Builder::new()
}

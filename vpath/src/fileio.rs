//! Reading files through virtual paths.
//!
//! Each function resolves its path against a [`Vfs`] and then performs a
//! plain read of the resolved path.

use std::fs::{self, File};
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::vfs::Vfs;

/// Whether the resolved path can be opened for reading.
///
/// Resolution failures and open failures both yield `false`.
///
/// # Examples
///
/// ```
/// use vpath::{fileio, Vfs};
///
/// let mut vfs = Vfs::new();
/// vfs.add_wildcard("$DATA", "/definitely/not/here");
/// assert!(!fileio::exists(&vfs, "$DATA/config.ini"));
/// ```
#[must_use]
pub fn exists(vfs: &Vfs, path: &str) -> bool {
    match vfs.resolve(path) {
        Ok(resolved) => File::open(resolved).is_ok(),
        Err(_) => false,
    }
}

/// Read a whole file as bytes.
///
/// # Errors
///
/// Returns an error if:
/// - `path` cannot be resolved
/// - The resolved file does not exist ([`Error::FileNotFound`])
/// - Any other I/O error occurs
pub fn read_binary(vfs: &Vfs, path: &str) -> Result<Vec<u8>> {
    let resolved = PathBuf::from(vfs.resolve(path)?);

    let bytes = fs::read(&resolved).map_err(|e| read_error(path, resolved.clone(), e))?;
    log::debug!("Binary file read at path: {}", resolved.display());
    Ok(bytes)
}

/// Read a whole file as UTF-8 text.
///
/// # Errors
///
/// Returns the same errors as [`read_binary`], plus
/// [`Error::InvalidUtf8`] if the contents are not valid UTF-8.
pub fn read_text(vfs: &Vfs, path: &str) -> Result<String> {
    let resolved = PathBuf::from(vfs.resolve(path)?);

    let bytes = fs::read(&resolved).map_err(|e| read_error(path, resolved.clone(), e))?;
    String::from_utf8(bytes).map_err(|_| {
        log::error!(
            "Failed to read file {path} with full path {} as text",
            resolved.display()
        );
        Error::InvalidUtf8 { path: resolved }
    })
}

fn read_error(path: &str, resolved: PathBuf, err: std::io::Error) -> Error {
    if err.kind() == ErrorKind::NotFound {
        log::error!(
            "File {path} with full path {} was not found!",
            resolved.display()
        );
        Error::FileNotFound {
            path: path.to_string(),
            resolved,
        }
    } else {
        log::error!(
            "An I/O error occurred while reading file {path} with full path {}: {err}",
            resolved.display()
        );
        Error::Io(err)
    }
}

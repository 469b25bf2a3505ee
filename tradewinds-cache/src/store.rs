//! Persistent store: one JSON object per cache path.
//!
//! The store knows nothing about cache policy. It reads a whole mapping,
//! writes a whole mapping, and distinguishes "file absent" from every
//! other failure so the manager can treat absence as empty.

use crate::error::CacheError;
use serde::{de::DeserializeOwned, Serialize};
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Read the full key -> record mapping at `path`.
///
/// # Errors
///
/// [`CacheError::NotFound`] if the file does not exist,
/// [`CacheError::Corrupt`] if the content is not a valid JSON mapping of
/// the expected record type, [`CacheError::Io`] for any other read
/// failure.
pub fn read_mapping<T>(path: &Path) -> Result<BTreeMap<String, T>, CacheError>
where
    T: DeserializeOwned,
{
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(source) if source.kind() == ErrorKind::NotFound => {
            return Err(CacheError::NotFound {
                path: path.to_path_buf(),
            })
        }
        Err(source) => {
            return Err(CacheError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    serde_json::from_str(&contents).map_err(|source| CacheError::Corrupt {
        path: path.to_path_buf(),
        source,
    })
}

/// Serialize `mapping` to `path`, fully replacing prior content.
///
/// Intermediate directories are created on demand. The mapping is written
/// to a sibling temporary file and renamed into place, so a crash
/// mid-write leaves the previous file intact rather than a half-written
/// one.
pub fn write_mapping<T>(path: &Path, mapping: &BTreeMap<String, T>) -> Result<(), CacheError>
where
    T: Serialize,
{
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| CacheError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    }

    let contents =
        serde_json::to_string_pretty(mapping).map_err(|source| CacheError::Serialize {
            path: path.to_path_buf(),
            source,
        })?;

    let tmp = tmp_path(path);
    if let Err(source) = std::fs::write(&tmp, contents) {
        return Err(CacheError::Io { path: tmp, source });
    }
    if let Err(source) = std::fs::rename(&tmp, path) {
        let _ = std::fs::remove_file(&tmp);
        return Err(CacheError::Io {
            path: path.to_path_buf(),
            source,
        });
    }
    Ok(())
}

/// Sibling temp file used for atomic rewrites; same directory so the
/// rename never crosses filesystems.
fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}

//! Cache manager: read-through and write-through policy over the store.
//!
//! Every operation is a full read-modify-write cycle on one cache file.
//! A per-path mutex registry serializes those cycles within the process,
//! so two threads hitting the same path cannot interleave their reads
//! and writes and lose records.

use crate::error::CacheError;
use crate::store;
use serde::{de::DeserializeOwned, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Keyed disk cache over per-path JSON mapping files.
///
/// Cloning is cheap and clones share the same lock registry, so every
/// handle in the process agrees on which paths are in use.
#[derive(Debug, Clone, Default)]
pub struct RecordCache {
    locks: Arc<Mutex<HashMap<PathBuf, Arc<Mutex<()>>>>>,
}

impl RecordCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return one record, fetching and persisting it on a cache miss.
    ///
    /// On a hit the record is returned as-is and the file is not
    /// rewritten. On a miss `fetch` is called with `key`; the record it
    /// returns is inserted under the key the fetch reports (the remote
    /// id is authoritative, not the lookup key) and the whole mapping is
    /// rewritten. A fetch failure propagates untouched and nothing is
    /// written.
    ///
    /// The per-path guard is held across `fetch`, so the fetch closure
    /// must not call back into this cache for the same path.
    pub fn get_or_fetch<T, E, F>(&self, path: &Path, key: &str, fetch: F) -> Result<T, E>
    where
        T: Clone + Serialize + DeserializeOwned,
        E: From<CacheError>,
        F: FnOnce(&str) -> Result<(String, T), E>,
    {
        let lock = self.path_lock(path)?;
        let _guard = lock.lock().map_err(|_| CacheError::LockPoisoned {
            path: path.to_path_buf(),
        })?;

        let mut mapping = read_or_empty::<T>(path)?;
        if let Some(record) = mapping.get(key) {
            tracing::debug!(key = %key, path = %path.display(), "cache hit");
            return Ok(record.clone());
        }

        tracing::debug!(key = %key, path = %path.display(), "cache miss, fetching");
        let (fetched_key, record) = fetch(key)?;
        mapping.insert(fetched_key, record.clone());
        store::write_mapping(path, &mapping)?;
        Ok(record)
    }

    /// Merge `records` into the mapping at `path`, remote side winning.
    ///
    /// Existing records whose keys do not appear in `records` survive;
    /// colliding keys take the incoming value. An absent file starts
    /// from an empty mapping; a corrupt file is left untouched and the
    /// error propagates.
    pub fn merge<T>(&self, path: &Path, records: BTreeMap<String, T>) -> Result<(), CacheError>
    where
        T: Serialize + DeserializeOwned,
    {
        let lock = self.path_lock(path)?;
        let _guard = lock.lock().map_err(|_| CacheError::LockPoisoned {
            path: path.to_path_buf(),
        })?;

        let mut mapping = read_or_empty::<T>(path)?;
        let incoming = records.len();
        mapping.extend(records);
        store::write_mapping(path, &mapping)?;
        tracing::debug!(
            incoming,
            total = mapping.len(),
            path = %path.display(),
            "merged records into cache"
        );
        Ok(())
    }

    /// Return the full mapping at `path`, bootstrapping it on first use.
    ///
    /// If the file is absent, `reload` is invoked once to repopulate it
    /// (typically by fetching everything remote and merging), then the
    /// read is retried exactly once. A file that is still absent after a
    /// successful reload yields [`CacheError::NotFound`]; any other
    /// failure, including a corrupt file, propagates without invoking
    /// `reload`.
    ///
    /// No per-path guard is held here: `reload` is expected to call
    /// [`RecordCache::merge`] on the same path, which takes the guard
    /// itself.
    pub fn list_all<T, E, R>(&self, path: &Path, reload: R) -> Result<BTreeMap<String, T>, E>
    where
        T: DeserializeOwned,
        E: From<CacheError>,
        R: FnOnce() -> Result<(), E>,
    {
        match store::read_mapping(path) {
            Ok(mapping) => Ok(mapping),
            Err(err) if err.is_not_found() => {
                tracing::debug!(path = %path.display(), "cache absent, reloading");
                reload()?;
                store::read_mapping(path).map_err(E::from)
            }
            Err(err) => Err(err.into()),
        }
    }

    fn path_lock(&self, path: &Path) -> Result<Arc<Mutex<()>>, CacheError> {
        let mut locks = self.locks.lock().map_err(|_| CacheError::LockPoisoned {
            path: path.to_path_buf(),
        })?;
        Ok(Arc::clone(
            locks
                .entry(path.to_path_buf())
                .or_insert_with(|| Arc::new(Mutex::new(()))),
        ))
    }
}

/// Read the mapping at `path`, treating an absent file as empty.
fn read_or_empty<T>(path: &Path) -> Result<BTreeMap<String, T>, CacheError>
where
    T: DeserializeOwned,
{
    match store::read_mapping(path) {
        Ok(mapping) => Ok(mapping),
        Err(err) if err.is_not_found() => Ok(BTreeMap::new()),
        Err(err) => Err(err),
    }
}

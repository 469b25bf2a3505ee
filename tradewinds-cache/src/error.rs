//! Error types for cache operations.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the persistent store and the cache manager.
///
/// Only [`CacheError::NotFound`] is recoverable, and only inside the
/// manager (an absent file reads as an empty mapping). Everything else
/// propagates to the caller unchanged.
#[derive(Debug, Error)]
pub enum CacheError {
    /// The cache file does not exist yet.
    #[error("cache file not found: {path}")]
    NotFound { path: PathBuf },

    /// The cache file exists but is not a valid JSON mapping.
    ///
    /// Never auto-repaired: the file is left in place for inspection.
    #[error("cache file corrupt: {path}: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Records could not be serialized for writing.
    #[error("failed to serialize cache mapping for {path}: {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Reading or writing the cache file failed for a reason other than
    /// absence.
    #[error("cache I/O failed for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A thread panicked while holding this path's guard.
    #[error("cache lock poisoned for {path}")]
    LockPoisoned { path: PathBuf },
}

impl CacheError {
    /// True when the error merely reports an absent cache file.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// The cache path the error refers to.
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::NotFound { path }
            | Self::Corrupt { path, .. }
            | Self::Serialize { path, .. }
            | Self::Io { path, .. }
            | Self::LockPoisoned { path } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display_names_path() {
        let err = CacheError::NotFound {
            path: PathBuf::from("/tmp/cache/contracts/AGENT.json"),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("not found"));
        assert!(msg.contains("AGENT.json"));
    }

    #[test]
    fn test_is_not_found_discriminates() {
        let absent = CacheError::NotFound {
            path: PathBuf::from("a.json"),
        };
        let poisoned = CacheError::LockPoisoned {
            path: PathBuf::from("a.json"),
        };
        assert!(absent.is_not_found());
        assert!(!poisoned.is_not_found());
    }

    #[test]
    fn test_corrupt_preserves_source() {
        let source = serde_json::from_str::<serde_json::Value>("{oops")
            .expect_err("invalid JSON must not parse");
        let err = CacheError::Corrupt {
            path: PathBuf::from("b.json"),
            source,
        };
        assert!(std::error::Error::source(&err).is_some());
        assert!(format!("{}", err).contains("corrupt"));
    }
}

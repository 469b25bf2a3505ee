//! tradewinds Cache - Keyed Disk Cache
//!
//! One JSON object per cache path, mapping record identifiers to records.
//! [`RecordCache`] layers read-through and write-through semantics over
//! that file: a lookup reads the whole mapping, a miss fetches from the
//! caller-supplied remote function and rewrites the file, a merge folds a
//! batch of authoritative records in. The mapping lives in memory only for
//! the duration of one operation; nothing is cached across calls.
//!
//! # Failure Semantics
//!
//! An absent cache file is the one recoverable condition: lookups and
//! merges treat it as an empty mapping and create the file on first write.
//! A file that exists but does not parse is [`CacheError::Corrupt`] and
//! always propagates; the cache never overwrites a corrupt file, since
//! that would destroy the evidence of whatever produced it. Errors from
//! the caller's fetch function pass through untranslated and leave the
//! file untouched.
//!
//! # Concurrency
//!
//! Operations are synchronous blocking read-modify-write cycles. Threads
//! sharing one [`RecordCache`] (or its clones) are serialized per path by
//! an internal lock registry. Separate processes are not: two processes
//! merging into the same path can still lose one writer's update, so keep
//! a cache path owned by a single process.

pub mod error;
pub mod manager;
pub mod store;

pub use error::CacheError;
pub use manager::RecordCache;

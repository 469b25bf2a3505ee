//! Accessor for the contracts resource family.
//!
//! One accessor per agent: the cache path is derived from the callsign at
//! construction and never changes, so two agents can never read or write
//! each other's contract files. Reads go through the disk cache; bulk
//! reloads page through the remote listing and merge each page in, with
//! the remote side winning every key collision.

use crate::config::{ClientConfig, ConfigError};
use crate::error::ClientError;
use crate::http::ApiClient;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tradewinds_cache::RecordCache;
use tradewinds_core::{Callsign, Contract, Envelope, PagedEnvelope};

/// Records requested per listing page.
const PAGE_LIMIT: u64 = 20;

/// Cached accessor for one agent's contracts.
#[derive(Debug)]
pub struct ContractsClient {
    api: ApiClient,
    cache: RecordCache,
    cache_path: PathBuf,
}

impl ContractsClient {
    /// Build an accessor from a validated configuration.
    ///
    /// The cache path is computed here, once:
    /// `<cache_dir>/contracts/<CALLSIGN>.json`, with the callsign
    /// canonicalized to uppercase so differently-cased spellings of one
    /// agent share a single file.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let api = ApiClient::new(config)?;
        let callsign =
            Callsign::new(&config.callsign).map_err(|err| ConfigError::InvalidValue {
                field: "callsign",
                reason: err.to_string(),
            })?;
        let cache_path = config
            .cache_dir
            .join("contracts")
            .join(format!("{}.json", callsign));
        Ok(Self {
            api,
            cache: RecordCache::new(),
            cache_path,
        })
    }

    /// The file backing this agent's contract cache.
    pub fn cache_path(&self) -> &Path {
        &self.cache_path
    }

    /// Fetch one contract from the remote API, keyed by its own id.
    ///
    /// The remote response is not pre-keyed; this is where the canonical
    /// `(key, record)` pair is produced for the cache.
    pub fn fetch_one(&self, id: &str) -> Result<(String, Contract), ClientError> {
        let path = format!("/my/contracts/{}", id);
        let envelope: Envelope<Contract> = self.api.get_json::<_, ()>(&path, None)?;
        let contract = envelope.data;
        Ok((contract.id.clone(), contract))
    }

    /// Return one contract, reading through the cache.
    ///
    /// A cached contract is returned without touching the network; a miss
    /// fetches, persists, and returns it.
    pub fn get(&self, id: &str) -> Result<Contract, ClientError> {
        self.cache
            .get_or_fetch(&self.cache_path, id, |key| self.fetch_one(key))
    }

    /// Lazy iterator over the remote contract listing, one page at a time.
    ///
    /// Stops after the page whose window covers the reported total, or on
    /// an empty page. A request failure is yielded once and ends the
    /// iteration.
    pub fn pages(&self) -> Pages<'_> {
        Pages {
            api: &self.api,
            page: 1,
            done: false,
        }
    }

    /// Refresh the cache from the full remote listing.
    ///
    /// Each page is keyed by contract id and merged as it arrives, so a
    /// failure partway through leaves the pages already fetched persisted.
    pub fn reload(&self) -> Result<(), ClientError> {
        let mut fetched = 0usize;
        for page in self.pages() {
            let contracts = page?;
            fetched += contracts.len();
            self.cache.merge(&self.cache_path, key_by_id(contracts))?;
        }
        tracing::debug!(
            fetched,
            path = %self.cache_path.display(),
            "reloaded contracts into cache"
        );
        Ok(())
    }

    /// Return every contract known for this agent.
    ///
    /// Served from the cache file when it exists; on first use the file
    /// is bootstrapped with one [`ContractsClient::reload`] pass. An
    /// agent with no contracts at all has no file to read, so a fresh
    /// listing that comes back empty surfaces as
    /// [`CacheError::NotFound`](tradewinds_cache::CacheError).
    pub fn list_all(&self) -> Result<BTreeMap<String, Contract>, ClientError> {
        self.cache.list_all(&self.cache_path, || self.reload())
    }
}

/// Index a page of contracts by their own ids.
fn key_by_id(contracts: Vec<Contract>) -> BTreeMap<String, Contract> {
    contracts
        .into_iter()
        .map(|contract| (contract.id.clone(), contract))
        .collect()
}

/// Iterator driving the paginated contract listing.
pub struct Pages<'a> {
    api: &'a ApiClient,
    page: u64,
    done: bool,
}

impl Iterator for Pages<'_> {
    type Item = Result<Vec<Contract>, ClientError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let query = [("page", self.page), ("limit", PAGE_LIMIT)];
        let envelope: PagedEnvelope<Contract> =
            match self.api.get_json("/my/contracts", Some(&query)) {
                Ok(envelope) => envelope,
                Err(err) => {
                    self.done = true;
                    return Some(Err(err));
                }
            };
        if envelope.data.is_empty() {
            self.done = true;
            return None;
        }
        if !envelope.meta.has_next_page() {
            self.done = true;
        }
        self.page += 1;
        Some(Ok(envelope.data))
    }
}

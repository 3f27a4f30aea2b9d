// SPDX-License-Identifier: Apache-2.0
// © vomap contributors
//! In-memory config store for reader-option tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use vomap_core::{ConfigError, ConfigStore, ReaderOptions};

/// [`ConfigStore`] over a shared map, with a switch that makes loads fail.
///
/// Clones share storage, so a test can hand one clone to a
/// [`vomap_core::ConfigService`] and inspect the other.
///
/// ```
/// use vomap_core::{ConfigService, ReaderOptions};
/// use vomap_dry_tests::InMemoryConfigStore;
///
/// let store = InMemoryConfigStore::new();
/// let service = ConfigService::new(store.clone());
/// assert_eq!(service.reader_options().unwrap(), ReaderOptions::default());
/// assert_eq!(store.load_count(), 1);
/// ```
#[derive(Clone, Default)]
pub struct InMemoryConfigStore {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    blobs: HashMap<String, Vec<u8>>,
    loads: usize,
    unreadable: bool,
}

impl InMemoryConfigStore {
    /// Empty store; reader options load as defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store holding `options` as JSON under [`ReaderOptions::CONFIG_KEY`].
    pub fn with_options(options: &ReaderOptions) -> anyhow::Result<Self> {
        let store = Self::new();
        store.save_raw(ReaderOptions::CONFIG_KEY, &serde_json::to_vec(options)?)?;
        Ok(store)
    }

    /// Store holding `raw` verbatim as the reader options blob.
    pub fn with_raw_options(raw: &[u8]) -> Self {
        let store = Self::new();
        store
            .lock()
            .blobs
            .insert(ReaderOptions::CONFIG_KEY.to_owned(), raw.to_vec());
        store
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Make every load fail with an I/O error, as an unreadable file would.
    pub fn set_unreadable(&self, unreadable: bool) {
        self.lock().unreadable = unreadable;
    }

    /// Number of load attempts, failed ones included.
    pub fn load_count(&self) -> usize {
        self.lock().loads
    }
}

impl ConfigStore for InMemoryConfigStore {
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, ConfigError> {
        let mut inner = self.lock();
        inner.loads += 1;
        if inner.unreadable {
            return Err(ConfigError::Io(std::io::Error::other("config unreadable")));
        }
        inner.blobs.get(key).cloned().ok_or(ConfigError::NotFound)
    }

    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), ConfigError> {
        self.lock().blobs.insert(key.to_owned(), data.to_vec());
        Ok(())
    }
}

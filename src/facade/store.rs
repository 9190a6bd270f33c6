//! The "complex subsystem" hidden behind [`UserRepository`](super::UserRepository).

use super::StoreError;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, info};

/// A preferences store backed by an in-memory cache.
///
/// The file path is only ever reported, never opened: loading and committing are
/// log lines standing in for real I/O.
#[derive(Debug, Clone)]
pub struct ComplexSystemStore {
    file_path: String,
    cache: BTreeMap<String, String>,
}

/// What a commit would write out.
#[derive(Serialize)]
struct Snapshot<'a> {
    file_path: &'a str,
    entries: &'a BTreeMap<String, String>,
}

impl ComplexSystemStore {
    pub fn new(file_path: impl Into<String>) -> Self {
        let store = Self {
            file_path: file_path.into(),
            cache: BTreeMap::new(),
        };
        info!("{}", store.load_line());
        store
    }

    pub fn file_path(&self) -> &str {
        &self.file_path
    }

    /// The line announced when the store was created.
    pub fn load_line(&self) -> String {
        format!("Reading data from file: {}", self.file_path)
    }

    /// Insert or overwrite `key`.
    pub fn store(&mut self, key: impl Into<String>, payload: impl Into<String>) {
        let key = key.into();
        debug!(%key, "Caching entry");
        self.cache.insert(key, payload.into());
    }

    /// Value under `key`, or an empty string when nothing was stored.
    pub fn read(&self, key: &str) -> String {
        self.cache.get(key).cloned().unwrap_or_default()
    }

    /// Render the cache as it would be written to [`file_path`](Self::file_path).
    ///
    /// # Errors
    /// [`StoreError::Serialization`] if the snapshot cannot be rendered.
    pub fn commit(&self) -> Result<String, StoreError> {
        let snapshot = serde_json::to_string(&Snapshot {
            file_path: &self.file_path,
            entries: &self.cache,
        })?;
        info!(file = %self.file_path, cache = %snapshot, "Storing cached data");
        Ok(snapshot)
    }
}

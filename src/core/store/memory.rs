//! In-memory secrets store.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;

use zeroize::Zeroizing;

use super::{SecretData, SecretStore};
use crate::error::{Result, StoreError};

/// Secrets store backed by a map, with per-path failure injection.
///
/// Counts every read so callers can assert that a pipeline never touched
/// the store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    paths: BTreeMap<String, SecretData>,
    failing: Vec<String>,
    reads: Cell<usize>,
    log: RefCell<Vec<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `fields` under `path`, replacing anything already there.
    pub fn with_secret(mut self, path: &str, fields: &[(&str, &str)]) -> Self {
        let data = fields
            .iter()
            .map(|(k, v)| (k.to_string(), Zeroizing::new(v.to_string())))
            .collect();
        self.paths.insert(path.to_string(), data);
        self
    }

    /// Make every read of `path` fail as if the store were unreachable.
    pub fn with_failure(mut self, path: &str) -> Self {
        self.failing.push(path.to_string());
        self
    }

    /// Number of reads attempted so far.
    pub fn reads(&self) -> usize {
        self.reads.get()
    }

    /// Paths read so far, in order.
    pub fn read_paths(&self) -> Vec<String> {
        self.log.borrow().clone()
    }
}

impl SecretStore for MemoryStore {
    fn read(&self, path: &str) -> Result<Option<SecretData>> {
        self.reads.set(self.reads.get() + 1);
        self.log.borrow_mut().push(path.to_string());

        if self.failing.iter().any(|p| p == path) {
            return Err(StoreError::ReadFailed {
                path: path.to_string(),
                reason: "injected failure".to_string(),
            }
            .into());
        }

        Ok(self.paths.get(path).cloned())
    }
}

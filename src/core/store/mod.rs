//! Secrets store boundary.
//!
//! The fetcher only needs one capability from an authenticated session:
//! read the fields stored under a path. Backends implement [`SecretStore`].
//!
//! ## Adding a New Backend
//!
//! 1. Implement the `SecretStore` trait
//! 2. Add the implementation in a new file (e.g., `aws.rs`)
//! 3. Re-export from this module

use std::collections::BTreeMap;

use zeroize::Zeroizing;

use crate::error::Result;

mod memory;
mod vault;

pub use memory::MemoryStore;
pub use vault::Vault;

/// Fields stored under one secret path.
pub type SecretData = BTreeMap<String, Zeroizing<String>>;

/// Read access to an authenticated secrets-store session.
pub trait SecretStore {
    /// Read the fields stored under `path`.
    ///
    /// # Returns
    ///
    /// `Ok(None)` when the path does not exist or its current version was
    /// deleted or destroyed.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store could not be queried.
    fn read(&self, path: &str) -> Result<Option<SecretData>>;
}

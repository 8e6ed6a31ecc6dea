//! Secret retrieval.
//!
//! Walks the secret table in order, reads each path once and exports every
//! field it finds. Missing fields and unreadable paths are collected rather
//! than raised, so a single run reports every gap at once.

use std::fmt;

use tracing::{debug, warn};
use zeroize::Zeroizing;

use crate::core::emit::Emitter;
use crate::core::namespace;
use crate::core::spec::SecretSpec;
use crate::core::store::SecretStore;

/// Outcome of a fetch. The discriminant is the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum FetchStatus {
    NoError = 0,
    VaultLoginFailed = 1,
    InvalidNamespace = 2,
    SecretKeysNotFound = 3,
}

impl FetchStatus {
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for FetchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FetchStatus::NoError => "NO_ERROR",
            FetchStatus::VaultLoginFailed => "VAULT_LOGIN_FAILED",
            FetchStatus::InvalidNamespace => "INVALID_NAMESPACE",
            FetchStatus::SecretKeysNotFound => "SECRET_KEYS_NOT_FOUND",
        };
        f.write_str(name)
    }
}

/// A field that could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingField {
    pub path: String,
    pub field: String,
}

/// Values resolved so far, in export order.
#[derive(Default)]
pub struct ResolvedSecrets {
    values: Vec<(String, Zeroizing<String>)>,
    missing: Vec<MissingField>,
}

impl ResolvedSecrets {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Output names in the order they were resolved.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(|(n, _)| n.as_str())
    }

    pub fn missing(&self) -> &[MissingField] {
        &self.missing
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Result of [`fetch`].
pub struct FetchOutcome {
    pub secrets: ResolvedSecrets,
    pub status: FetchStatus,
}

impl FetchOutcome {
    fn aborted(status: FetchStatus) -> Self {
        Self {
            secrets: ResolvedSecrets::default(),
            status,
        }
    }
}

/// Fetch every field named by `specs` and emit it as it resolves.
///
/// # Arguments
///
/// * `session` - Authenticated store, or `None` when login failed
/// * `namespace` - Raw namespace string
/// * `specs` - Secret table, processed in order
/// * `emitter` - Receives each value and each diagnostic immediately
///
/// # Returns
///
/// `VaultLoginFailed` or `InvalidNamespace` without reading anything when
/// there is no session or the namespace is unmapped. Otherwise
/// `SecretKeysNotFound` if any field was missing, else `NoError`.
pub fn fetch<S, E>(
    session: Option<&S>,
    namespace: &str,
    specs: &[SecretSpec],
    emitter: &mut E,
) -> FetchOutcome
where
    S: SecretStore + ?Sized,
    E: Emitter + ?Sized,
{
    let Some(store) = session else {
        emitter.emit_error("Vault login failed.");
        return FetchOutcome::aborted(FetchStatus::VaultLoginFailed);
    };

    let cluster = match namespace::resolve(namespace) {
        Ok(cluster) => cluster,
        Err(_) => {
            emitter.emit_error(&format!("Invalid namespace: '{}'", namespace));
            return FetchOutcome::aborted(FetchStatus::InvalidNamespace);
        }
    };
    debug!(namespace, cluster = %cluster, "resolved cluster");

    let mut secrets = ResolvedSecrets::default();

    for spec in specs {
        let path = spec.render(cluster, namespace);
        let data = match store.read(&path) {
            Ok(data) => data.unwrap_or_default(),
            Err(e) => {
                warn!(path = %path, error = %e, "secret read failed");
                Default::default()
            }
        };

        for field in spec.fields {
            match data.get(field.source) {
                Some(value) => {
                    emitter.emit(field.output, value);
                    secrets
                        .values
                        .push((field.output.to_string(), value.clone()));
                }
                None => {
                    emitter.emit_error(&format!(
                        "Key '{}' not found in path '{}'",
                        field.source, path
                    ));
                    secrets.missing.push(MissingField {
                        path: path.clone(),
                        field: field.source.to_string(),
                    });
                }
            }
        }
    }

    let status = if secrets.missing.is_empty() {
        FetchStatus::NoError
    } else {
        FetchStatus::SecretKeysNotFound
    };

    FetchOutcome { secrets, status }
}

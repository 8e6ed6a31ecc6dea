//! Credential sources.
//!
//! Placeholders are resolved through a [`TokenSource`] so substitution does
//! not care where credentials come from. Environment lookups go through a
//! [`VarSource`] so precedence chains can be exercised without touching the
//! process environment.

use std::collections::HashMap;

use zeroize::Zeroizing;

use crate::core::constants::CREDENTIAL_VAR_PREFIX;

/// Named variable lookup.
pub trait VarSource {
    fn var(&self, name: &str) -> Option<String>;
}

/// The process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl VarSource for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

impl VarSource for HashMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

/// Return the first candidate variable that is set and non-empty.
///
/// Candidates are consulted strictly in order, so the slice is the
/// precedence order.
pub fn first_present<V: VarSource + ?Sized>(vars: &V, candidates: &[&str]) -> Option<String> {
    candidates
        .iter()
        .filter_map(|name| vars.var(name))
        .find(|value| !value.is_empty())
}

/// Resolves placeholder tokens to credential values.
pub trait TokenSource {
    /// Credential for `token`, or `None` if it is not available.
    fn lookup(&self, token: &str) -> Option<Zeroizing<String>>;

    /// Human-readable origin of `token`, used in error messages.
    fn describe(&self, token: &str) -> String {
        token.to_string()
    }
}

/// Name of the variable carrying the credential for `token`.
pub fn credential_var(token: &str) -> String {
    format!("{}{}", CREDENTIAL_VAR_PREFIX, token.to_uppercase())
}

/// Reads `EPHEMERAL_<TOKEN>` variables.
#[derive(Debug, Clone, Default)]
pub struct EnvTokenSource<V: VarSource = ProcessEnv> {
    vars: V,
}

impl EnvTokenSource<ProcessEnv> {
    pub fn new() -> Self {
        Self { vars: ProcessEnv }
    }
}

impl<V: VarSource> EnvTokenSource<V> {
    pub fn with_vars(vars: V) -> Self {
        Self { vars }
    }
}

impl<V: VarSource> TokenSource for EnvTokenSource<V> {
    fn lookup(&self, token: &str) -> Option<Zeroizing<String>> {
        self.vars.var(&credential_var(token)).map(Zeroizing::new)
    }

    fn describe(&self, token: &str) -> String {
        credential_var(token)
    }
}

/// Token source backed by a fixed map.
#[derive(Default)]
pub struct MapTokenSource {
    values: HashMap<String, Zeroizing<String>>,
}

impl MapTokenSource {
    pub fn new(pairs: &[(&str, &str)]) -> Self {
        Self {
            values: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), Zeroizing::new(v.to_string())))
                .collect(),
        }
    }
}

impl TokenSource for MapTokenSource {
    fn lookup(&self, token: &str) -> Option<Zeroizing<String>> {
        self.values.get(token).cloned()
    }
}

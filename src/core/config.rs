//! Runtime configuration from CLI overrides and the environment.

use std::path::PathBuf;

use zeroize::Zeroizing;

use crate::core::constants::{
    LEDGER_FILE, SCRATCH_DIR_VAR, SHARED_VOLUME_VAR, VAULT_ADDR_VARS, VAULT_TOKEN_VARS,
};
use crate::core::source::{first_present, VarSource};
use crate::error::{ConfigError, Result};

/// Vault connection settings.
pub struct VaultConfig {
    pub url: String,
    pub token: Zeroizing<String>,
}

impl VaultConfig {
    /// Resolve the endpoint and token.
    ///
    /// An explicit override wins; otherwise the candidate variables in
    /// [`VAULT_ADDR_VARS`] and [`VAULT_TOKEN_VARS`] are consulted in order.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingEndpoint` or `ConfigError::MissingToken`
    /// when nothing supplies a value.
    pub fn resolve<V: VarSource + ?Sized>(
        url: Option<String>,
        token: Option<String>,
        vars: &V,
    ) -> Result<Self> {
        let url = url
            .filter(|u| !u.is_empty())
            .or_else(|| first_present(vars, VAULT_ADDR_VARS))
            .ok_or_else(|| ConfigError::MissingEndpoint(VAULT_ADDR_VARS.join(", ")))?;

        let token = token
            .filter(|t| !t.is_empty())
            .or_else(|| first_present(vars, VAULT_TOKEN_VARS))
            .ok_or_else(|| ConfigError::MissingToken(VAULT_TOKEN_VARS.join(", ")))?;

        Ok(Self {
            url,
            token: Zeroizing::new(token),
        })
    }
}

/// Directories the requirements pipeline writes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildDirs {
    /// Where generated files are written.
    pub scratch: PathBuf,
    /// Shared volume holding the ledger.
    pub shared_volume: PathBuf,
}

impl BuildDirs {
    /// Read both directories from the environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingEnv` if either variable is unset or empty.
    pub fn from_vars<V: VarSource + ?Sized>(vars: &V) -> Result<Self> {
        Ok(Self {
            scratch: required(vars, SCRATCH_DIR_VAR)?.into(),
            shared_volume: required(vars, SHARED_VOLUME_VAR)?.into(),
        })
    }

    /// Path of the ledger file.
    pub fn ledger(&self) -> PathBuf {
        self.shared_volume.join(LEDGER_FILE)
    }
}

/// Read a required, non-empty variable.
pub fn required<V: VarSource + ?Sized>(vars: &V, name: &str) -> Result<String> {
    first_present(vars, &[name]).ok_or_else(|| ConfigError::MissingEnv(name.to_string()).into())
}

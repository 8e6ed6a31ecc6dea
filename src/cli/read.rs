//! Read command: Vault secrets as shell exports.

use tracing::info;

use crate::cli::output;
use crate::core::config::VaultConfig;
use crate::core::emit::{Emitter, ShellEmitter};
use crate::core::fetch::{fetch, FetchStatus};
use crate::core::namespace;
use crate::core::source::ProcessEnv;
use crate::core::spec::SECRET_SPECS;
use crate::core::store::Vault;
use crate::error::Result;

/// Print `export` lines for every build secret of `namespace`.
///
/// The namespace is checked before logging in, so an invalid one never
/// reaches the network. Any login failure, including a missing endpoint or
/// token, is reported as `VAULT_LOGIN_FAILED`.
///
/// # Returns
///
/// The `FetchStatus` code.
pub fn execute(
    namespace: &str,
    vault_url: Option<String>,
    github_token: Option<String>,
) -> Result<i32> {
    let mut emitter = ShellEmitter::stdio();

    if namespace::resolve(namespace).is_err() {
        emitter.emit_error(&format!("Invalid namespace: '{}'", namespace));
        output::hint(&format!("expected one of {}", namespace::Namespace::expected()));
        return Ok(FetchStatus::InvalidNamespace.code());
    }

    let session = match VaultConfig::resolve(vault_url, github_token, &ProcessEnv)
        .and_then(|config| Vault::login(&config.url, &config.token))
    {
        Ok(vault) => Some(vault),
        Err(e) => {
            output::error(&format!("Failed to log in: {}", e));
            None
        }
    };

    let outcome = fetch(session.as_ref(), namespace, SECRET_SPECS, &mut emitter);
    info!(
        status = %outcome.status,
        resolved = outcome.secrets.len(),
        "fetch finished"
    );

    if outcome.status == FetchStatus::SecretKeysNotFound {
        output::warn(&format!(
            "{} secret field(s) missing",
            outcome.secrets.missing().len()
        ));
    }

    Ok(outcome.status.code())
}

//! Constants used throughout buildcreds.
//!
//! Centralizes environment variable names, file names and placeholders.

/// Vault address candidates, highest precedence first.
pub const VAULT_ADDR_VARS: &[&str] = &["VAULT_ADDR", "VAULT", "LEAF_TEAM_VAULT_ADDR"];

/// GitHub token candidates for Vault login, highest precedence first.
pub const VAULT_TOKEN_VARS: &[&str] = &["VAULT_LOGIN", "VAULT_GITHUB_AUTH_TOKEN"];

/// Scratch directory for generated files, visible outside the build container.
pub const SCRATCH_DIR_VAR: &str = "TEMP_DIR_OUTSIDE_CONTAINER";

/// Shared volume holding the ledger.
pub const SHARED_VOLUME_VAR: &str = "CF_VOLUME_PATH";

/// Prefix of the environment variable carrying a placeholder's credential.
pub const CREDENTIAL_VAR_PREFIX: &str = "EPHEMERAL_";

/// Ledger file name inside the shared volume.
pub const LEDGER_FILE: &str = "env_vars_to_export";

/// Suffix appended to an item's logical name for its generated file.
pub const REQUIREMENTS_SUFFIX: &str = "_with_creds_requirements";

/// Placeholder for credentials to public source repositories.
pub const PUBLIC_PLACEHOLDER: &str = "LEAF_SOURCE_CREDENTIALS";

/// Placeholder for credentials to private source repositories.
pub const PRIVATE_PLACEHOLDER: &str = "LEAF_PRIVATE_SOURCE_CREDENTIALS";

/// Logical name of the generated AWS credentials file.
pub const AWS_CREDS_NAME: &str = "aws_creds";

/// AWS variables copied into the credentials file.
pub const AWS_ACCESS_KEY_VAR: &str = "AWS_ACCESS_KEY_ID";
pub const AWS_SECRET_KEY_VAR: &str = "AWS_SECRET_ACCESS_KEY";

/// Item name selecting every requirements file.
pub const ALL_ITEMS: &str = "all";

/// KV v2 mount holding the build secrets.
pub const KV_MOUNT: &str = "secret";

/// Per-request timeout against the secrets store, in seconds.
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

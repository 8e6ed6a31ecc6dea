//! Error types.
//!
//! One top-level [`Error`] wraps a focused enum per concern so callers can
//! match on the failure they care about and let `?` carry the rest.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Substitute(#[from] SubstituteError),

    #[error(transparent)]
    Write(#[from] WriteError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration and environment errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("required environment variable {0} is not set")]
    MissingEnv(String),

    #[error("no Vault address: pass --vault-url or set one of {0}")]
    MissingEndpoint(String),

    #[error("no GitHub token: pass --github-token or set one of {0}")]
    MissingToken(String),

    #[error("invalid namespace: '{namespace}' (expected one of {expected})")]
    InvalidNamespace { namespace: String, expected: String },

    #[error("unknown requirements item: '{name}' (expected 'all' or one of {expected})")]
    UnknownItem { name: String, expected: String },
}

/// Secrets store session errors.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("login denied by {url}: {reason}")]
    LoginDenied { url: String, reason: String },

    #[error("secrets store unreachable at {url}: {reason}")]
    Unreachable { url: String, reason: String },

    #[error("request to {url} timed out")]
    Timeout { url: String },

    #[error("malformed response from {url}: {reason}")]
    MalformedResponse { url: String, reason: String },

    #[error("failed to read '{path}': {reason}")]
    ReadFailed { path: String, reason: String },
}

/// Placeholder substitution errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SubstituteError {
    #[error("required env var {variable} is not defined (placeholder ${{{token}}})")]
    Unresolved { token: String, variable: String },
}

/// Output file and ledger errors.
#[derive(Error, Debug)]
pub enum WriteError {
    #[error("unable to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("unable to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("unable to append to ledger {path}: {source}")]
    Ledger {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

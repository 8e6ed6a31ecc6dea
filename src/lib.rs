//! Buildcreds - build-time credential provisioning.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── read          # Vault secrets as shell exports
//! │   ├── requirements  # Credentialed requirements files
//! │   ├── completions   # Shell completions
//! │   └── output        # Terminal output helpers
//! └── core/             # Core library components
//!     ├── namespace     # Namespace to cluster table
//!     ├── spec          # Secret path/field table
//!     ├── store/        # Secrets store boundary
//!     │   ├── mod       # SecretStore trait
//!     │   ├── vault     # Vault HTTP session
//!     │   └── memory    # In-memory store
//!     ├── fetch         # Collect-all secret retrieval
//!     ├── emit          # export NAME="value" emission
//!     ├── source        # Token sources and env precedence
//!     ├── substitute    # Fail-fast placeholder substitution
//!     ├── writer        # Generated files and the ledger
//!     ├── requirements  # Requirements item table and pipeline
//!     └── config        # Vault and directory settings
//! ```
//!
//! # Pipelines
//!
//! - `read`: namespace → cluster → secret paths → `export` lines on stdout
//! - `requirements`: placeholders → `EPHEMERAL_*` variables → credentialed
//!   files in the scratch directory, recorded in the shared-volume ledger

pub mod cli;
pub mod core;
pub mod error;

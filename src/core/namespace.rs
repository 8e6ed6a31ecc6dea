//! Namespace to cluster resolution.
//!
//! Every deployment namespace lives in exactly one secrets-store cluster.
//! The mapping is a static table; anything outside it is rejected before a
//! single secret path is built.

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// Deployment namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Namespace {
    Dev,
    Staging,
    Prod,
}

/// Secrets-store partition that houses one or more namespaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cluster(&'static str);

impl Cluster {
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Cluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

const DEV_STAGE: Cluster = Cluster("unileaf-dev-stage");
const NEUROAI: Cluster = Cluster("neuroai");

impl Namespace {
    pub const ALL: [Namespace; 3] = [Namespace::Dev, Namespace::Staging, Namespace::Prod];

    pub fn as_str(&self) -> &'static str {
        match self {
            Namespace::Dev => "dev",
            Namespace::Staging => "staging",
            Namespace::Prod => "prod",
        }
    }

    /// Cluster housing this namespace.
    pub fn cluster(&self) -> Cluster {
        match self {
            Namespace::Dev | Namespace::Staging => DEV_STAGE,
            Namespace::Prod => NEUROAI,
        }
    }

    /// Comma-separated list of valid names, for error messages.
    pub fn expected() -> String {
        Self::ALL
            .iter()
            .map(Namespace::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Namespace {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|ns| ns.as_str() == s)
            .ok_or_else(|| ConfigError::InvalidNamespace {
                namespace: s.to_string(),
                expected: Self::expected(),
            })
    }
}

/// Resolve a raw namespace string to its cluster.
///
/// # Errors
///
/// Returns `ConfigError::InvalidNamespace` for anything outside the table.
pub fn resolve(namespace: &str) -> Result<Cluster, ConfigError> {
    namespace.parse::<Namespace>().map(|ns| ns.cluster())
}

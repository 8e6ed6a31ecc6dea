//! Declarative table of the secrets fetched at build time.
//!
//! Each entry names a path template and the fields read from it. Order is
//! significant: it is the order in which values are exported.

use crate::core::namespace::Cluster;

/// One field read from a secret path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldMapping {
    /// Variable name the value is exported as.
    pub output: &'static str,
    /// Field name inside the secret's data.
    pub source: &'static str,
}

/// A secret path template and the fields read from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SecretSpec {
    /// Path with `{cluster}` and `{namespace}` placeholders.
    pub template: &'static str,
    pub fields: &'static [FieldMapping],
}

const fn field(output: &'static str, source: &'static str) -> FieldMapping {
    FieldMapping { output, source }
}

/// Secrets required by the build, in export order.
pub const SECRET_SPECS: &[SecretSpec] = &[
    SecretSpec {
        template: "clusters/{cluster}/{namespace}/s3CredsLeafBuildDAI",
        fields: &[
            field("AWS_SECRET_ACCESS_KEY", "AWS_SECRET_ACCESS_KEY"),
            field("AWS_ACCESS_KEY_ID", "AWS_ACCESS_KEY_ID"),
        ],
    },
    SecretSpec {
        template: "clusters/{cluster}/{namespace}/db-creds",
        fields: &[
            field("DB_USERNAME", "username"),
            field("DB_PASSWORD", "password"),
            field("DB_HOST", "host"),
            field("DB_PORT", "port"),
            field("DB_NAME", "dbname"),
        ],
    },
];

impl SecretSpec {
    /// Render the concrete secret path for a cluster and namespace.
    pub fn render(&self, cluster: Cluster, namespace: &str) -> String {
        self.template
            .replace("{cluster}", cluster.as_str())
            .replace("{namespace}", namespace)
    }
}

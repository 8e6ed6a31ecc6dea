//! Credentialed requirements files.
//!
//! Each item names a requirements file in the repository and the
//! placeholders it contains. Processing an item writes a copy with every
//! placeholder replaced into the scratch directory and records its location
//! in the ledger.

use std::path::{Path, PathBuf};

use tracing::info;
use zeroize::Zeroizing;

use crate::core::config::{required, BuildDirs};
use crate::core::constants::{
    ALL_ITEMS, AWS_ACCESS_KEY_VAR, AWS_CREDS_NAME, AWS_SECRET_KEY_VAR, PRIVATE_PLACEHOLDER,
    PUBLIC_PLACEHOLDER,
};
use crate::core::source::{TokenSource, VarSource};
use crate::core::substitute::substitute;
use crate::core::writer;
use crate::error::{ConfigError, Result};

/// A requirements file and the placeholders it must have resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequirementsItem {
    /// Logical name, used for the generated file and ledger variable.
    pub name: &'static str,
    /// Path relative to the repository root.
    pub file: &'static str,
    /// Placeholders, resolved in order.
    pub tokens: &'static [&'static str],
}

const BOTH: &[&str] = &[PUBLIC_PLACEHOLDER, PRIVATE_PLACEHOLDER];
const PUBLIC_ONLY: &[&str] = &[PUBLIC_PLACEHOLDER];

const fn item(
    name: &'static str,
    file: &'static str,
    tokens: &'static [&'static str],
) -> RequirementsItem {
    RequirementsItem { name, file, tokens }
}

/// Every requirements file the build knows how to credential.
pub const REQUIREMENTS_ITEMS: &[RequirementsItem] = &[
    item("pmdserver", "backend/pmdserver/requirements.txt", BOTH),
    item("analytics_chat", "backend/analytics/service/requirements.txt", BOTH),
    item("secrets_manager", "backend/secretsmanager/requirements.txt", BOTH),
    item("run_submission", "requirements.txt", BOTH),
    item("data_profiler", "backend/dataprofiler/requirements.txt", BOTH),
    item("inference_server", "backend/inferenceserver/requirements.txt", BOTH),
    item("task_server", "backend/taskserver/requirements.txt", BOTH),
    item("unit_tests", "requirements.txt", BOTH),
    item("integration_tests", "requirements.txt", BOTH),
    item("db_migration", "backend/pmdserver/migrations/requirements.txt", PUBLIC_ONLY),
    item("agents", "backend/agents/deploy/requirements.txt", BOTH),
];

/// Select items by name; `all` selects the whole table in order.
///
/// # Errors
///
/// Returns `ConfigError::UnknownItem` if `name` matches nothing.
pub fn select(items: &[RequirementsItem], name: &str) -> Result<Vec<RequirementsItem>> {
    let selected: Vec<RequirementsItem> = items
        .iter()
        .filter(|item| name == ALL_ITEMS || item.name == name)
        .copied()
        .collect();

    if selected.is_empty() {
        return Err(ConfigError::UnknownItem {
            name: name.to_string(),
            expected: items.iter().map(|i| i.name).collect::<Vec<_>>().join(", "),
        }
        .into());
    }

    Ok(selected)
}

/// Generate the credentialed copy of one item and record it in the ledger.
///
/// The source is read from `root`. Nothing is written unless every
/// placeholder resolves.
///
/// # Returns
///
/// Path of the generated file.
///
/// # Errors
///
/// Returns an error if the source cannot be read, a placeholder is
/// unresolved, or the output or ledger cannot be written.
pub fn process_item<S: TokenSource + ?Sized>(
    item: &RequirementsItem,
    root: &Path,
    dirs: &BuildDirs,
    source: &S,
) -> Result<PathBuf> {
    let text = writer::read_source(&root.join(item.file))?;
    let credentialed = substitute(&text, item.tokens, source)?;

    let path = writer::write(item.name, &dirs.scratch, &credentialed)?;
    writer::record_mapping(&writer::ledger_var(item.name), &path, &dirs.ledger())?;

    info!(item = item.name, path = %path.display(), "wrote credentialed requirements");
    Ok(path)
}

/// Process every selected item in order, stopping at the first failure.
pub fn process<S: TokenSource + ?Sized>(
    items: &[RequirementsItem],
    root: &Path,
    dirs: &BuildDirs,
    source: &S,
) -> Result<Vec<PathBuf>> {
    items
        .iter()
        .map(|item| process_item(item, root, dirs, source))
        .collect()
}

/// Write the AWS credentials file used as a build secret and record it.
///
/// # Errors
///
/// Returns `ConfigError::MissingEnv` if either AWS variable is unset.
pub fn build_aws_credentials<V: VarSource + ?Sized>(dirs: &BuildDirs, vars: &V) -> Result<PathBuf> {
    let access_key = Zeroizing::new(required(vars, AWS_ACCESS_KEY_VAR)?);
    let secret_key = Zeroizing::new(required(vars, AWS_SECRET_KEY_VAR)?);

    let path = dirs.scratch.join(format!("{}.txt", AWS_CREDS_NAME));
    let contents = Zeroizing::new(writer::aws_credentials(&access_key, &secret_key));
    writer::write_file(&path, &contents)?;
    writer::record_mapping(&AWS_CREDS_NAME.to_uppercase(), &path, &dirs.ledger())?;

    info!(path = %path.display(), "wrote aws credentials");
    Ok(path)
}

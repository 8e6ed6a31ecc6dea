//! Generated files and the export ledger.
//!
//! Generated files land in the scratch directory. Their locations are
//! appended to a `KEY=VALUE` ledger on the shared volume that a later build
//! step sources.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::constants::REQUIREMENTS_SUFFIX;
use crate::error::{Result, WriteError};

/// Path of the credentialed requirements file for `logical_name`.
pub fn requirements_path(directory: &Path, logical_name: &str) -> PathBuf {
    directory.join(format!("{}{}.txt", logical_name, REQUIREMENTS_SUFFIX))
}

/// Ledger variable naming the generated file for `logical_name`.
pub fn ledger_var(logical_name: &str) -> String {
    format!("{}{}", logical_name, REQUIREMENTS_SUFFIX).to_uppercase()
}

/// Write `content` as the credentialed requirements file for `logical_name`.
///
/// # Returns
///
/// The path written.
///
/// # Errors
///
/// Returns `WriteError::Write` if the file cannot be written.
pub fn write(logical_name: &str, directory: &Path, content: &str) -> Result<PathBuf> {
    let path = requirements_path(directory, logical_name);
    write_file(&path, content)?;
    Ok(path)
}

/// Write a file readable only by the owner (0600 on Unix).
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    options
        .open(path)
        .and_then(|mut file| file.write_all(content.as_bytes()))
        .map_err(|source| WriteError::Write {
            path: path.to_path_buf(),
            source,
        })?;

    debug!(path = %path.display(), bytes = content.len(), "wrote file");
    Ok(())
}

/// Append `{env_var_name}={path}` to the ledger.
///
/// Opens, appends one line and closes; existing lines are never rewritten.
///
/// # Errors
///
/// Returns `WriteError::Ledger` if the ledger cannot be opened or written.
pub fn record_mapping(env_var_name: &str, path: &Path, ledger: &Path) -> Result<()> {
    let line = format!("{}={}\n", env_var_name, path.display());

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(ledger)
        .and_then(|mut file| file.write_all(line.as_bytes()))
        .map_err(|source| WriteError::Ledger {
            path: ledger.to_path_buf(),
            source,
        })?;

    debug!(ledger = %ledger.display(), var = env_var_name, "recorded mapping");
    Ok(())
}

/// Render an AWS shared-credentials file with a single `[default]` profile.
pub fn aws_credentials(access_key_id: &str, secret_access_key: &str) -> String {
    format!(
        "\n[default]\naws_access_key_id = {}\naws_secret_access_key = {}\n",
        access_key_id, secret_access_key
    )
}

/// Read a source file, attributing failures to its path.
pub fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| {
        WriteError::Read {
            path: path.to_path_buf(),
            source,
        }
        .into()
    })
}

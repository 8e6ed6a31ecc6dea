//! Requirements command: credentialed requirements files.

use std::path::Path;

use tracing::info;

use crate::cli::output;
use crate::core::config::BuildDirs;
use crate::core::requirements::{build_aws_credentials, process, select, REQUIREMENTS_ITEMS};
use crate::core::source::{EnvTokenSource, ProcessEnv};
use crate::error::Result;

/// Process `item` (or every item for `all`), then write the AWS credentials file.
pub fn execute(item: &str, root: &Path) -> Result<i32> {
    let items = select(REQUIREMENTS_ITEMS, item)?;
    let dirs = BuildDirs::from_vars(&ProcessEnv)?;
    info!(count = items.len(), root = %root.display(), "processing requirements");

    let written = process(&items, root, &dirs, &EnvTokenSource::new())?;
    for path in &written {
        output::success(&format!("wrote {}", output::path(&path.display().to_string())));
    }

    let aws = build_aws_credentials(&dirs, &ProcessEnv)?;
    output::success(&format!("wrote {}", output::path(&aws.display().to_string())));

    Ok(0)
}

//! Placeholder substitution for requirements files.
//!
//! Tokens are resolved in order and the first unresolved one aborts the
//! whole substitution: a requirements file with a missing credential cannot
//! be installed from, so no partial result is ever returned.

use tracing::trace;

use crate::core::source::TokenSource;
use crate::error::SubstituteError;

/// The literal marker a token occupies in text, e.g. `${LEAF_SOURCE_CREDENTIALS}`.
pub fn placeholder(token: &str) -> String {
    format!("${{{}}}", token)
}

/// Replace every `${token}` in `text` with its resolved credential.
///
/// # Errors
///
/// Returns `SubstituteError::Unresolved` for the first token the source
/// cannot resolve. Later tokens are not looked up.
pub fn substitute<S: TokenSource + ?Sized>(
    text: &str,
    tokens: &[&str],
    source: &S,
) -> Result<String, SubstituteError> {
    let mut output = text.to_string();

    for token in tokens {
        let value = source
            .lookup(token)
            .ok_or_else(|| SubstituteError::Unresolved {
                token: token.to_string(),
                variable: source.describe(token),
            })?;

        let marker = placeholder(token);
        trace!(token, occurrences = output.matches(&marker).count(), "substituting");
        output = output.replace(&marker, &value);
    }

    Ok(output)
}

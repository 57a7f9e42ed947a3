//! In-place filtering of a text file.

use std::path::Path;

use crate::error::Result;
use crate::filter::ExclusionSet;

/// Counts from a completed filter pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterOutcome {
    pub chars_read: usize,
    pub chars_removed: usize,
}

/// Read `path`, drop every character in `symbols`, and overwrite the file with the result.
///
/// The write truncates the original; a failure mid-write can leave it partially written.
pub async fn filter_file(path: &Path, symbols: &ExclusionSet) -> Result<FilterOutcome> {
    let content = tokio::fs::read_to_string(path).await?;
    let filtered = symbols.filter(&content);

    let chars_read = content.chars().count();
    let outcome = FilterOutcome {
        chars_read,
        chars_removed: chars_read - filtered.chars().count(),
    };

    tokio::fs::write(path, filtered).await?;

    tracing::debug!(
        "Filtered {}: {} characters read, {} removed",
        path.display(),
        outcome.chars_read,
        outcome.chars_removed
    );

    Ok(outcome)
}

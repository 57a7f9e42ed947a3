//! Output path and directory management.

use std::path::{Path, PathBuf};

use crate::config::OptionsConfig;
use crate::error::Result;
use crate::fs::naming::image_filename;

/// Path of the `index`-th image (1-based) inside `directory`.
pub fn image_path(options: &OptionsConfig, directory: &Path, index: usize) -> PathBuf {
    directory.join(image_filename(
        &options.file_prefix,
        index,
        &options.file_extension,
    ))
}

/// Ensure a directory exists, creating it if necessary.
pub async fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        tokio::fs::create_dir_all(path).await?;
        tracing::debug!("Created directory: {}", path.display());
    }
    Ok(())
}

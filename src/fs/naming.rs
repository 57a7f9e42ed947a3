//! Filename generation and validation.

use crate::error::{Error, Result};

/// Characters that are not portable in filenames.
const RESERVED_CHARS: [char; 7] = [':', '*', '?', '"', '<', '>', '|'];

/// Check that `name` is a plain, portable filename.
///
/// Rejects names that could escape their directory and names containing
/// reserved or control characters.
pub fn validate_filename(name: &str) -> Result<()> {
    if name.contains("..") {
        return Err(Error::ConfigValidation {
            field: "filename".to_string(),
            message: format!("Path traversal detected: '{}'", name),
        });
    }

    if name.contains('/') || name.contains('\\') {
        return Err(Error::ConfigValidation {
            field: "filename".to_string(),
            message: format!("Path separators not allowed in filename: '{}'", name),
        });
    }

    if let Some(c) = name
        .chars()
        .find(|c| RESERVED_CHARS.contains(c) || c.is_control())
    {
        return Err(Error::ConfigValidation {
            field: "filename".to_string(),
            message: format!("Character {:?} not allowed in filename: '{}'", c, name),
        });
    }

    if name.trim().is_empty() {
        return Err(Error::ConfigValidation {
            field: "filename".to_string(),
            message: "Filename cannot be empty or whitespace-only".to_string(),
        });
    }

    Ok(())
}

/// Name of the `index`-th image (1-based), e.g. `dog3.jpg`.
pub fn image_filename(prefix: &str, index: usize, extension: &str) -> String {
    format!("{}{}.{}", prefix, index, extension)
}

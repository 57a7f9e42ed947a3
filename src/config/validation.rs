//! Configuration validation logic.

use std::path::Path;

use url::Url;

use crate::config::loader::FetchConfig;
use crate::error::{Error, Result};
use crate::fs::validate_filename;

/// Validate the entire configuration.
pub fn validate_config(config: &FetchConfig) -> Result<()> {
    validate_endpoint(&config.api.endpoint)?;
    validate_image_count(config.options.image_count)?;
    validate_directories(
        &config.options.sequential_directory,
        &config.options.parallel_directory,
    )?;
    validate_file_naming(&config.options.file_prefix, &config.options.file_extension)?;

    if config.api.timeout_seconds == Some(0) {
        return Err(Error::ConfigValidation {
            field: "timeout_seconds".to_string(),
            message: "Timeout must be at least 1 second when set".to_string(),
        });
    }

    Ok(())
}

/// Validate the metadata endpoint URL.
pub fn validate_endpoint(endpoint: &str) -> Result<()> {
    let url = Url::parse(endpoint)?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(Error::ConfigValidation {
            field: "endpoint".to_string(),
            message: format!("Unsupported URL scheme '{}'", url.scheme()),
        });
    }

    Ok(())
}

/// Validate the number of images per run.
pub fn validate_image_count(count: usize) -> Result<()> {
    if count == 0 {
        return Err(Error::ConfigValidation {
            field: "image_count".to_string(),
            message: "At least one image must be requested".to_string(),
        });
    }

    Ok(())
}

/// Validate the two output directories.
pub fn validate_directories(sequential: &Path, parallel: &Path) -> Result<()> {
    for (field, dir) in [
        ("sequential_directory", sequential),
        ("parallel_directory", parallel),
    ] {
        if dir.as_os_str().is_empty() {
            return Err(Error::ConfigValidation {
                field: field.to_string(),
                message: "Directory cannot be empty".to_string(),
            });
        }
    }

    if sequential == parallel {
        return Err(Error::ConfigValidation {
            field: "parallel_directory".to_string(),
            message: format!(
                "Sequential and parallel runs must write to different directories (both are '{}')",
                sequential.display()
            ),
        });
    }

    Ok(())
}

/// Validate the file prefix and extension used to name downloaded images.
pub fn validate_file_naming(prefix: &str, extension: &str) -> Result<()> {
    validate_filename(&format!("{}1.{}", prefix, extension)).map_err(|e| {
        Error::ConfigValidation {
            field: "file_prefix".to_string(),
            message: e.to_string(),
        }
    })?;

    if extension.is_empty() || extension.starts_with('.') {
        return Err(Error::ConfigValidation {
            field: "file_extension".to_string(),
            message: format!("Invalid file extension '{}'", extension),
        });
    }

    Ok(())
}

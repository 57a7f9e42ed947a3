//! Configuration structures and loading logic.

use crate::config::modes::RunMode;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Random dog image metadata endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://dog.ceo/api/breeds/image/random";

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FetchConfig {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub options: OptionsConfig,
}

/// Remote endpoint configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Metadata endpoint returning `{"message": <url>, "status": ...}`.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// User agent sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Per-request timeout. Unset means requests may wait forever.
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
}

/// Download options configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionsConfig {
    /// Number of images fetched by each strategy.
    #[serde(default = "default_image_count")]
    pub image_count: usize,

    /// Which strategies to run (both, sequential, parallel).
    #[serde(default)]
    pub mode: RunMode,

    /// Output directory for the sequential run.
    #[serde(default = "default_sequential_directory")]
    pub sequential_directory: PathBuf,

    /// Output directory for the parallel run.
    #[serde(default = "default_parallel_directory")]
    pub parallel_directory: PathBuf,

    /// File name prefix, files are named `{prefix}{index}.{extension}`.
    #[serde(default = "default_file_prefix")]
    pub file_prefix: String,

    #[serde(default = "default_file_extension")]
    pub file_extension: String,

    /// Whether to print per-image progress lines.
    #[serde(default = "default_true")]
    pub show_downloads: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            user_agent: default_user_agent(),
            timeout_seconds: None,
        }
    }
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            image_count: default_image_count(),
            mode: RunMode::default(),
            sequential_directory: default_sequential_directory(),
            parallel_directory: default_parallel_directory(),
            file_prefix: default_file_prefix(),
            file_extension: default_file_extension(),
            show_downloads: true,
        }
    }
}

impl ApiConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_user_agent() -> String {
    concat!("image-fetcher/", env!("CARGO_PKG_VERSION")).to_string()
}

fn default_image_count() -> usize {
    10
}

fn default_sequential_directory() -> PathBuf {
    PathBuf::from("images_sequentially")
}

fn default_parallel_directory() -> PathBuf {
    PathBuf::from("images_parallel")
}

fn default_file_prefix() -> String {
    "dog".to_string()
}

fn default_file_extension() -> String {
    "jpg".to_string()
}

fn default_true() -> bool {
    true
}

impl FetchConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!("Configuration file not found: {}", path.display()))
            } else {
                Error::Io(e)
            }
        })?;

        let config: FetchConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load from `path` if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(
                "No configuration file at {}, using defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = FetchConfig::default();
        assert_eq!(config.api.endpoint, DEFAULT_ENDPOINT);
        assert!(config.api.timeout().is_none());
        assert_eq!(config.options.image_count, 10);
        assert_eq!(config.options.mode, RunMode::Both);
        assert_eq!(
            config.options.sequential_directory,
            PathBuf::from("images_sequentially")
        );
        assert_eq!(
            config.options.parallel_directory,
            PathBuf::from("images_parallel")
        );
        assert_eq!(config.options.file_prefix, "dog");
        assert_eq!(config.options.file_extension, "jpg");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: FetchConfig = toml::from_str(
            r#"
            [api]
            timeout_seconds = 15

            [options]
            image_count = 3
            mode = "parallel"
            "#,
        )
        .unwrap();

        assert_eq!(config.api.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.api.timeout(), Some(Duration::from_secs(15)));
        assert_eq!(config.options.image_count, 3);
        assert_eq!(config.options.mode, RunMode::Parallel);
        assert_eq!(config.options.file_prefix, "dog");
        assert!(config.options.show_downloads);
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempdir().unwrap();
        let config = FetchConfig::load_or_default(&dir.path().join("missing.toml")).unwrap();
        assert_eq!(config.options.image_count, 10);
    }

    #[test]
    fn test_load_reports_parse_errors() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "[options]\nimage_count = \"many\"\n").unwrap();

        assert!(matches!(
            FetchConfig::load(&path),
            Err(Error::TomlParse(_))
        ));
    }
}

//! Configuration module for the image fetcher.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - Run mode selection
//! - Configuration validation

pub mod loader;
pub mod modes;
pub mod validation;

pub use loader::{ApiConfig, FetchConfig, OptionsConfig, DEFAULT_ENDPOINT};
pub use modes::{RunMode, Strategy};
pub use validation::validate_config;

//! Filesystem module.
//!
//! Provides:
//! - Output directory management
//! - Image filename generation and validation

pub mod naming;
pub mod paths;

pub use naming::{image_filename, validate_filename};
pub use paths::{ensure_dir, image_path};

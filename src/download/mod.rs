//! Download module for fetching random images.
//!
//! This module provides:
//! - Streaming a single image to disk
//! - Sequential and parallel download runs
//! - Run summaries with timing

pub mod image;
pub mod runner;
pub mod summary;

pub use image::{download_image, DownloadedImage};
pub use runner::{prepare_directories, run_parallel, run_sequential, run_strategy};
pub use summary::RunSummary;

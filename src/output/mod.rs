//! Output module for console output and progress.
//!
//! Provides:
//! - Colored console output
//! - Progress bars
//! - Run timing reports

pub mod console;
pub mod progress;
pub mod stats;

pub use console::{
    print_download_finished, print_download_started, print_error, print_heading, print_info,
};
pub use progress::create_item_bar;
pub use stats::{print_comparison, print_run_summary};

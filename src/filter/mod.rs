//! Character filtering for text files.
//!
//! Provides:
//! - The exclusion set parsed from a line of user input
//! - In-place filtering of a file's text content

pub mod exclusion;
pub mod file;

pub use exclusion::ExclusionSet;
pub use file::{filter_file, FilterOutcome};

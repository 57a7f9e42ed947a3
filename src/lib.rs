//! Two small command-line tools sharing one library.
//!
//! - `char-filter` removes a set of characters from a text file in place.
//! - `image-fetcher` downloads random dog images from the dog.ceo API, once
//!   sequentially and once in parallel, and reports how long each took.
//!
//! # Example
//!
//! ```no_run
//! use filter_fetch::{run_strategy, DogApi, FetchConfig, Strategy};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = FetchConfig::default();
//!     let api = DogApi::new(&config.api)?;
//!     filter_fetch::prepare_directories(&config.options).await?;
//!
//!     let summary = run_strategy(&api, &config.options, Strategy::Parallel).await?;
//!     println!("{} images in {:?}", summary.images, summary.elapsed);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod download;
pub mod error;
pub mod filter;
pub mod fs;
pub mod output;

// Re-exports for convenience
pub use api::{DogApi, ImageSource};
pub use config::{FetchConfig, RunMode, Strategy};
pub use download::{
    download_image, prepare_directories, run_parallel, run_sequential, run_strategy, RunSummary,
};
pub use error::{Error, Result};
pub use filter::{filter_file, ExclusionSet};

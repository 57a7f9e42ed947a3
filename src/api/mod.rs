//! Random image API module.
//!
//! Provides:
//! - Metadata endpoint response types
//! - The `ImageSource` abstraction over the network
//! - The reqwest-backed client for the dog.ceo API

pub mod client;
#[cfg(test)]
pub(crate) mod mock;
pub mod source;
pub mod types;

pub use client::DogApi;
pub use source::{ByteStream, ImageBody, ImageSource};
pub use types::{parse_image_url, RandomImageResponse};

//! Abstraction over where images come from.

use async_trait::async_trait;
use bytes::Bytes;
use futures::stream::BoxStream;

use crate::error::Result;

/// Stream of body chunks from an opened image response.
pub type ByteStream = BoxStream<'static, Result<Bytes>>;

/// An image response whose status has already been checked.
pub struct ImageBody {
    pub content_length: Option<u64>,
    pub chunks: ByteStream,
}

/// A source of random images.
///
/// Implementations are shared by reference across concurrent downloads.
#[async_trait]
pub trait ImageSource: Send + Sync {
    /// Ask the metadata endpoint for the URL of a random image.
    async fn image_url(&self) -> Result<String>;

    /// Open a streaming download of `url`.
    ///
    /// Fails before yielding a body if the server answers with a non-success status.
    async fn open(&self, url: &str) -> Result<ImageBody>;
}

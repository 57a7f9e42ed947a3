//! Single image downloading.

use std::path::{Path, PathBuf};

use futures::StreamExt;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use crate::api::ImageSource;
use crate::error::Result;
use crate::output::{print_download_finished, print_download_started};

/// An image that was fully written to disk.
#[derive(Debug, Clone)]
pub struct DownloadedImage {
    pub path: PathBuf,
    pub url: String,
    pub bytes: u64,
}

/// Fetch a random image URL from `source` and stream the image into `path`.
///
/// The file is only created once the image response has been accepted, so a
/// failed request leaves any existing file at `path` untouched.
pub async fn download_image<S: ImageSource + ?Sized>(
    source: &S,
    path: &Path,
    show_downloads: bool,
) -> Result<DownloadedImage> {
    let url = source.image_url().await?;
    if show_downloads {
        print_download_started(&url);
    }

    let body = source.open(&url).await?;
    let expected = body.content_length;

    let mut file = File::create(path).await?;
    let mut chunks = body.chunks;
    let mut written: u64 = 0;

    while let Some(chunk) = chunks.next().await {
        let chunk = chunk?;
        file.write_all(&chunk).await?;
        written += chunk.len() as u64;
    }

    file.flush().await?;

    if let Some(expected) = expected {
        if expected != written {
            tracing::warn!(
                "{}: expected {} bytes, received {}",
                path.display(),
                expected,
                written
            );
        }
    }
    tracing::debug!("Wrote {} bytes to {}", written, path.display());

    if show_downloads {
        print_download_finished(&url);
    }

    Ok(DownloadedImage {
        path: path.to_path_buf(),
        url,
        bytes: written,
    })
}

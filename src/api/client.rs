//! dog.ceo API HTTP client.

use async_trait::async_trait;
use futures::{StreamExt, TryStreamExt};
use reqwest::{header, Client, Response};

use crate::api::source::{ImageBody, ImageSource};
use crate::api::types::parse_image_url;
use crate::config::ApiConfig;
use crate::error::{Error, Result};

/// HTTP client for the random image API.
///
/// Owns one connection pool, shared by every download issued through it.
pub struct DogApi {
    client: Client,
    endpoint: String,
}

impl DogApi {
    /// Build the HTTP client from configuration.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(&config.user_agent);
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Make a GET request, rejecting non-success statuses.
    async fn get(&self, url: &str) -> Result<Response> {
        tracing::debug!("GET {}", url);

        let response = self.client.get(url).send().await?;

        let status = response.status();
        tracing::debug!("Response status: {}", status);

        if !status.is_success() {
            return Err(Error::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response)
    }
}

#[async_trait]
impl ImageSource for DogApi {
    async fn image_url(&self) -> Result<String> {
        let response = self.get(&self.endpoint).await?;
        let text = response.text().await?;
        tracing::debug!("Image metadata response: {}", text);

        parse_image_url(&text)
    }

    async fn open(&self, url: &str) -> Result<ImageBody> {
        let response = self.get(url).await?;

        if let Some(content_type) = response.headers().get(header::CONTENT_TYPE) {
            tracing::debug!("Content-Type for {}: {:?}", url, content_type);
        }

        Ok(ImageBody {
            content_length: response.content_length(),
            chunks: response.bytes_stream().map_err(Error::from).boxed(),
        })
    }
}

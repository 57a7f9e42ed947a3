//! In-memory `ImageSource` used by tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use futures::stream::{self, StreamExt};
use tokio::sync::Barrier;

use crate::api::source::{ImageBody, ImageSource};
use crate::error::{Error, Result};

/// Something the mock observed, tagged with the image id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Opened(usize),
    Served(usize),
}

/// Hands out `mock://image/{n}` URLs with n counting from 1.
///
/// Each image body is `image-{n}`, sent as two chunks.
#[derive(Default)]
pub struct MockSource {
    next_id: AtomicUsize,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
    events: Mutex<Vec<Event>>,
    fail_on: Option<usize>,
    barrier: Option<Barrier>,
    delay: Option<Duration>,
}

impl MockSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer HTTP 503 when opening image `id`.
    pub fn failing_on(mut self, id: usize) -> Self {
        self.fail_on = Some(id);
        self
    }

    /// Hold every open until `count` opens are waiting at once.
    pub fn gated(mut self, count: usize) -> Self {
        self.barrier = Some(Barrier::new(count));
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    fn record(&self, event: Event) {
        self.events.lock().unwrap().push(event);
    }
}

fn id_from_url(url: &str) -> Result<usize> {
    url.strip_prefix("mock://image/")
        .and_then(|id| id.parse().ok())
        .ok_or_else(|| Error::InvalidResponse(format!("unexpected url {}", url)))
}

#[async_trait]
impl ImageSource for MockSource {
    async fn image_url(&self) -> Result<String> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(format!("mock://image/{}", id))
    }

    async fn open(&self, url: &str) -> Result<ImageBody> {
        let id = id_from_url(url)?;
        self.record(Event::Opened(id));

        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        if let Some(barrier) = &self.barrier {
            barrier.wait().await;
        }
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        tokio::task::yield_now().await;

        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        if self.fail_on == Some(id) {
            return Err(Error::HttpStatus {
                url: url.to_string(),
                status: 503,
            });
        }

        self.record(Event::Served(id));

        let chunks = vec![Ok(Bytes::from_static(b"image-")), Ok(Bytes::from(id.to_string()))];
        Ok(ImageBody {
            content_length: Some(6 + id.to_string().len() as u64),
            chunks: stream::iter(chunks).boxed(),
        })
    }
}

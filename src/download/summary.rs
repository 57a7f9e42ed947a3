//! Per-run statistics.

use std::path::PathBuf;
use std::time::Duration;

use crate::config::Strategy;
use crate::download::DownloadedImage;

/// Outcome of one strategy run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub strategy: Strategy,
    pub directory: PathBuf,
    pub images: usize,
    pub bytes: u64,
    pub elapsed: Duration,
}

impl RunSummary {
    pub fn new(
        strategy: Strategy,
        directory: PathBuf,
        downloaded: &[DownloadedImage],
        elapsed: Duration,
    ) -> Self {
        Self {
            strategy,
            directory,
            images: downloaded.len(),
            bytes: downloaded.iter().map(|image| image.bytes).sum(),
            elapsed,
        }
    }

    /// How many times faster `other` finished than this run.
    pub fn speedup_over(&self, other: &RunSummary) -> Option<f64> {
        if other.elapsed.is_zero() {
            return None;
        }
        Some(self.elapsed.as_secs_f64() / other.elapsed.as_secs_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(bytes: u64) -> DownloadedImage {
        DownloadedImage {
            path: PathBuf::from("dog1.jpg"),
            url: "https://x/y.jpg".to_string(),
            bytes,
        }
    }

    #[test]
    fn test_summary_totals() {
        let summary = RunSummary::new(
            Strategy::Sequential,
            PathBuf::from("images_sequentially"),
            &[image(100), image(250)],
            Duration::from_millis(900),
        );
        assert_eq!(summary.images, 2);
        assert_eq!(summary.bytes, 350);
    }

    #[test]
    fn test_speedup() {
        let slow = RunSummary::new(
            Strategy::Sequential,
            PathBuf::from("a"),
            &[],
            Duration::from_millis(1000),
        );
        let fast = RunSummary::new(
            Strategy::Parallel,
            PathBuf::from("b"),
            &[],
            Duration::from_millis(250),
        );
        assert_eq!(slow.speedup_over(&fast), Some(4.0));

        let instant = RunSummary::new(Strategy::Parallel, PathBuf::from("c"), &[], Duration::ZERO);
        assert_eq!(slow.speedup_over(&instant), None);
    }
}

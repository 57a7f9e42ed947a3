//! Sequential and parallel download runs.

use std::path::Path;
use std::time::Instant;

use futures::future::try_join_all;
use indicatif::ProgressBar;

use crate::api::ImageSource;
use crate::config::{OptionsConfig, Strategy};
use crate::download::image::{download_image, DownloadedImage};
use crate::download::summary::RunSummary;
use crate::error::{Error, Result};
use crate::fs::{ensure_dir, image_path};
use crate::output::{create_item_bar, print_heading};

/// Create the output directories the selected mode writes to.
pub async fn prepare_directories(options: &OptionsConfig) -> Result<()> {
    for strategy in options.mode.strategies() {
        ensure_dir(strategy_directory(options, *strategy)).await?;
    }
    Ok(())
}

fn strategy_directory(options: &OptionsConfig, strategy: Strategy) -> &Path {
    match strategy {
        Strategy::Sequential => &options.sequential_directory,
        Strategy::Parallel => &options.parallel_directory,
    }
}

/// Item bar shown in place of per-image lines when those are hidden.
fn quiet_bar(options: &OptionsConfig, count: usize, strategy: Strategy) -> Option<ProgressBar> {
    if options.show_downloads {
        None
    } else {
        Some(create_item_bar(count as u64, &strategy.to_string()))
    }
}

/// Download `count` images one after another.
///
/// Image `i + 1` is not requested until image `i` is on disk.
pub async fn run_sequential<S: ImageSource + ?Sized>(
    source: &S,
    options: &OptionsConfig,
    count: usize,
) -> Result<Vec<DownloadedImage>> {
    let bar = quiet_bar(options, count, Strategy::Sequential);
    let mut downloaded = Vec::with_capacity(count);

    for index in 1..=count {
        let path = image_path(options, &options.sequential_directory, index);
        downloaded.push(download_image(source, &path, options.show_downloads).await?);

        if let Some(ref bar) = bar {
            bar.inc(1);
        }
    }

    if let Some(bar) = bar {
        bar.finish_and_clear();
    }

    Ok(downloaded)
}

/// Download `count` images concurrently and wait for all of them.
///
/// Every download is started at once, with no cap. The first failure fails the
/// run and drops the downloads still in flight; images already written stay on disk.
pub async fn run_parallel<S: ImageSource + ?Sized>(
    source: &S,
    options: &OptionsConfig,
    count: usize,
) -> Result<Vec<DownloadedImage>> {
    let bar = quiet_bar(options, count, Strategy::Parallel);

    let downloads = (1..=count).map(|index| {
        let path = image_path(options, &options.parallel_directory, index);
        let bar = bar.clone();
        async move {
            let image = download_image(source, &path, options.show_downloads).await?;
            if let Some(bar) = bar {
                bar.inc(1);
            }
            Ok::<_, Error>(image)
        }
    });

    let result = try_join_all(downloads).await;

    if let Some(bar) = bar {
        bar.finish_and_clear();
    }

    result
}

/// Run one strategy with the configured image count and time it.
pub async fn run_strategy<S: ImageSource + ?Sized>(
    source: &S,
    options: &OptionsConfig,
    strategy: Strategy,
) -> Result<RunSummary> {
    print_heading(strategy.heading());
    tracing::debug!(
        "Starting {} run of {} images",
        strategy,
        options.image_count
    );

    let started = Instant::now();
    let downloaded = match strategy {
        Strategy::Sequential => run_sequential(source, options, options.image_count).await?,
        Strategy::Parallel => run_parallel(source, options, options.image_count).await?,
    };
    let elapsed = started.elapsed();

    Ok(RunSummary::new(
        strategy,
        strategy_directory(options, strategy).to_path_buf(),
        &downloaded,
        elapsed,
    ))
}

//! image-fetcher - download random dog images sequentially and in parallel.

use std::process::ExitCode;

use clap::Parser;

use filter_fetch::{
    api::DogApi,
    cli::{init_logging, FetchArgs},
    config::{validate_config, FetchConfig},
    download::{prepare_directories, run_strategy},
    error::{exit_codes, Result},
    output::{print_comparison, print_error, print_info, print_run_summary},
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

async fn run() -> Result<()> {
    let args = FetchArgs::parse();
    init_logging(args.debug);

    let config_path = args.config.clone();
    let mut config = FetchConfig::load_or_default(&config_path)?;
    if config_path.exists() {
        print_info(&format!("Loaded configuration from {}", config_path.display()));
    }

    args.merge_into_config(&mut config);
    validate_config(&config)?;

    // One client for the whole run, shared by every download.
    let api = DogApi::new(&config.api)?;
    tracing::debug!("Using metadata endpoint {}", api.endpoint());

    prepare_directories(&config.options).await?;

    let mut summaries = Vec::new();
    for &strategy in config.options.mode.strategies() {
        let summary = run_strategy(&api, &config.options, strategy).await?;
        print_run_summary(&summary);
        summaries.push(summary);
    }

    if let [sequential, parallel] = summaries.as_slice() {
        print_comparison(sequential, parallel);
    }

    Ok(())
}

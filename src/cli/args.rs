//! Command-line argument definitions using clap.

use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};
use std::ffi::OsString;
use std::path::PathBuf;

use crate::config::{FetchConfig, RunMode};
use crate::error::{Error, Result};

/// Remove a set of characters from a text file in place.
#[derive(Parser, Debug)]
#[command(
    name = "char-filter",
    version,
    about = "Remove every occurrence of the given characters from a text file"
)]
pub struct FilterArgs {
    /// File to filter. It is overwritten with the result.
    pub filename: PathBuf,

    /// Characters to delete, without separators. Prompted for when omitted.
    #[arg(short, long)]
    pub symbols: Option<String>,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

impl FilterArgs {
    /// Parse arguments, turning usage mistakes into input errors.
    ///
    /// `--help` and `--version` still print and exit.
    pub fn try_parse_input<I, T>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::try_parse_from(args).map_err(|e| match e.kind() {
            ErrorKind::DisplayHelp
            | ErrorKind::DisplayVersion
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => e.exit(),
            _ => Error::Input(usage_message(&e)),
        })
    }
}

/// First paragraph of a clap error on one line, without the `error: ` tag.
fn usage_message(err: &clap::Error) -> String {
    let rendered = err.to_string();
    let summary: Vec<&str> = rendered
        .lines()
        .map(str::trim)
        .take_while(|line| !line.is_empty())
        .collect();
    summary
        .join(" ")
        .trim_start_matches("error: ")
        .to_string()
}

/// Random dog image fetcher CLI.
#[derive(Parser, Debug)]
#[command(
    name = "image-fetcher",
    version,
    about = "Download random dog images sequentially and in parallel, timing both",
    long_about = "Fetches a batch of random dog images from the dog.ceo API, first one at a time\n\
                  and then all at once, and reports how long each strategy took."
)]
pub struct FetchArgs {
    /// Path to configuration file (used only if it exists).
    #[arg(short, long, default_value = "image-fetcher.toml")]
    pub config: PathBuf,

    /// Number of images per strategy.
    #[arg(short = 'n', long)]
    pub count: Option<usize>,

    /// Which strategies to run.
    #[arg(short, long, value_enum)]
    pub mode: Option<RunModeArg>,

    /// Metadata endpoint returning a random image URL.
    #[arg(long, env = "IMAGE_FETCHER_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Output directory for the sequential run.
    #[arg(long)]
    pub sequential_dir: Option<PathBuf>,

    /// Output directory for the parallel run.
    #[arg(long)]
    pub parallel_dir: Option<PathBuf>,

    /// Per-request timeout in seconds.
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Hide per-image progress lines.
    #[arg(long, short)]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

/// CLI run mode argument.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum RunModeArg {
    /// Sequential run, then parallel run.
    Both,
    /// Only the sequential run.
    Sequential,
    /// Only the parallel run.
    Parallel,
}

impl From<RunModeArg> for RunMode {
    fn from(arg: RunModeArg) -> Self {
        match arg {
            RunModeArg::Both => RunMode::Both,
            RunModeArg::Sequential => RunMode::Sequential,
            RunModeArg::Parallel => RunMode::Parallel,
        }
    }
}

impl FetchArgs {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(self, config: &mut FetchConfig) {
        if let Some(endpoint) = self.endpoint {
            config.api.endpoint = endpoint;
        }

        if let Some(timeout) = self.timeout {
            config.api.timeout_seconds = Some(timeout);
        }

        if let Some(count) = self.count {
            config.options.image_count = count;
        }

        if let Some(mode) = self.mode {
            config.options.mode = mode.into();
        }

        if let Some(dir) = self.sequential_dir {
            config.options.sequential_directory = dir;
        }

        if let Some(dir) = self.parallel_dir {
            config.options.parallel_directory = dir;
        }

        if self.quiet {
            config.options.show_downloads = false;
        }
    }
}

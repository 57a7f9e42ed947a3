//! Command-line interfaces of both tools.

pub mod args;

pub use args::{FetchArgs, FilterArgs, RunModeArg};

use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Install the global tracing subscriber. `RUST_LOG` wins over `debug`.
///
/// Diagnostics go to stderr so they never interleave with the report on stdout.
pub fn init_logging(debug: bool) {
    subscriber_with_writer(debug, std::io::stderr).init();
}

/// Log subscriber writing to `writer`.
pub fn subscriber_with_writer<W>(debug: bool, writer: W) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let log_level = if debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(writer)
        .finish()
}

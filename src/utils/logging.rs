use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Default filter when `RUST_LOG` is unset
const DEFAULT_DIRECTIVE: &str = "prompt_history_viewer=warn";

/// Install the stderr log subscriber
///
/// Verbosity comes from `RUST_LOG`, e.g. `RUST_LOG=prompt_history_viewer=debug`
/// to see every skipped transcript line. Calling this twice is harmless.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .try_init();
}

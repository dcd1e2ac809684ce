pub mod catalog;
pub mod errors;
pub mod events;
pub mod focus;
pub mod hotkey;
pub mod observer;
pub mod platform;
pub mod sessions;

use tracing_subscriber::EnvFilter;

/// Initialize logging for the process.
///
/// Quiet mode (the default for CLI usage) only shows warnings and errors.
/// Verbose mode shows the full structured event stream. `RUST_LOG` takes
/// precedence over both when set.
pub fn init_logging(quiet: bool) {
    let default_filter = if quiet { "warn" } else { "info" };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    // try_init so repeated calls (e.g. in tests) are harmless.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

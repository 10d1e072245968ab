use tracing_subscriber::filter::{EnvFilter, LevelFilter};

/// Install the stderr log subscriber.
///
/// Logs go to stderr so they never end up inside the tables on stdout.
/// `RUST_LOG` wins over `verbose` when set.
pub fn initialize_logging(verbose: bool) {
    let default_level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    // A subscriber may already be installed when embedded; that's fine.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

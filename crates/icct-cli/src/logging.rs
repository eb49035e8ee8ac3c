//! `tracing` subscriber setup.

use tracing_subscriber::EnvFilter;

/// Install a stderr `fmt` subscriber using `filter`. Any `-v` replaces
/// `filter` with a global level: one for `debug`, two or more for `trace`.
pub fn init(filter: &str, verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    // A subscriber may already be installed (tests, embedding); keep it.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

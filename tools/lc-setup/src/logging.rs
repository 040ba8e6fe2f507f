use tracing_subscriber::EnvFilter;

/// Environment variable holding `EnvFilter` directives; overrides `-v`.
pub const LOG_ENV: &str = "LC_SETUP_LOG";

/// Install the stderr subscriber. `verbosity` counts `-v` flags.
pub fn init(verbosity: u8) {
    let default = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));

    // A second init (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

use tracing_subscriber::EnvFilter;

/// Install the stderr log subscriber.
///
/// Filter precedence: `--log-level`, then `RUST_LOG`, then the settings file.
pub fn init(cli_level: Option<&str>, settings_level: &str) {
    let filter = cli_level
        .and_then(|level| EnvFilter::try_new(level).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .or_else(|| EnvFilter::try_new(settings_level).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .init();
}

/// Initialize tracing/logging for the application.
///
/// This uses a simple `with_max_level` configuration based on `default_level`.
/// Records the MQTT client emits through the `log` facade end up here as well.
pub fn init(default_level: &str) {
    let lvl = parse_level(default_level);

    // try_init: tests and repeated calls must not panic
    let _ = tracing_subscriber::fmt()
        .with_max_level(lvl)
        .with_target(false)
        .try_init();
}

/// Maps the binary's verbosity switch onto a level name.
pub fn level_for_verbosity(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "info" }
}

pub(crate) fn parse_level(level: &str) -> tracing::Level {
    match level.to_lowercase().as_str() {
        "error" => tracing::Level::ERROR,
        "warn" | "warning" => tracing::Level::WARN,
        "debug" => tracing::Level::DEBUG,
        "trace" => tracing::Level::TRACE,
        _ => tracing::Level::INFO,
    }
}

const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::INFO;

/// The log level selected by `--verbose` or, failing that, by the value of
/// the `LOG_LEVEL` environment variable.
///
/// An unrecognized `LOG_LEVEL` falls back to the default level and returns
/// the warning to report once logging is up.
pub(crate) fn select_log_level(
    verbose: bool,
    env_level: Option<&str>,
) -> (tracing::Level, Option<String>) {
    if verbose {
        return (tracing::Level::DEBUG, None);
    }

    let Some(env_level) = env_level.map(str::trim) else {
        return (DEFAULT_LOG_LEVEL, None);
    };
    let level = match env_level.to_ascii_lowercase().as_str() {
        "trace" => tracing::Level::TRACE,
        "debug" | "verbose" => tracing::Level::DEBUG,
        "info" => tracing::Level::INFO,
        "warn" => tracing::Level::WARN,
        "error" => tracing::Level::ERROR,
        _ => {
            return (
                DEFAULT_LOG_LEVEL,
                Some(format!("Invalid `LOG_LEVEL` environment variable value: `{env_level}`")),
            );
        },
    };
    (level, None)
}

/// Logs go to stderr so that `generate --stdout` output stays clean.
pub(crate) fn setup_logger(verbose: bool) {
    let env_level = std::env::var("LOG_LEVEL").ok();
    let (log_level, warning) = select_log_level(verbose, env_level.as_deref());

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();
    log::trace!("Initial logging level set to `{log_level}`.");

    if let Some(warning) = warning {
        log::warn!("{warning}");
    }
}

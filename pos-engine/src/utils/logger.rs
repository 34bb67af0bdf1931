//! Tracing setup

use std::path::Path;

use tracing_subscriber::EnvFilter;

/// Initialize console logging.
///
/// `level` is a tracing filter directive ("info", "pos_engine=debug", ...);
/// a RUST_LOG environment variable takes precedence when set.
pub fn init_logger(level: &str) {
    init_logger_with_file(level, None);
}

/// Initialize logging with an optional daily-rolling file in `log_dir`.
/// Falls back to console-only when the directory does not exist.
pub fn init_logger_with_file(level: &str, log_dir: Option<&Path>) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    match log_dir {
        Some(dir) if dir.exists() => {
            let appender = tracing_appender::rolling::daily(dir, "pos-engine.log");
            builder.with_writer(appender).with_ansi(false).init();
        }
        _ => builder.init(),
    }
}

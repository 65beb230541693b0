//! Logging infrastructure
//!
//! Diagnostics go to a daily-rolling file when a log directory is
//! configured, otherwise to stderr. The interactive screens own stdout,
//! so tracing output must never be written there.

use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` controls the filter; defaults to `info`.
pub fn init_logger(log_dir: Option<&str>) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false);

    match log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "pos-terminal");
            builder.with_writer(appender).init();
        }
        None => {
            builder.with_writer(std::io::stderr).init();
        }
    }
}

use std::path::Path;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Initialize the stderr logger plus, when a directory is available, a
/// daily-rolling file under it. The returned guard must be held for the
/// process lifetime or buffered file output is lost.
pub fn init_logging(
    verbose: u8,
    log_dir: Option<&Path>,
) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    // Allow RUST_LOG overrides, fall back to the flag-controlled level
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let stderr = std::io::stderr.with_max_level(tracing::Level::TRACE);
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(stderr)
        .with_target(true)
        .compact();

    let file_layer = log_dir.and_then(|dir| {
        std::fs::create_dir_all(dir).ok()?;
        let appender = tracing_appender::rolling::daily(dir, "bstart.log");
        let (non_blocking, guard) = tracing_appender::non_blocking(appender);
        let layer = tracing_subscriber::fmt::layer()
            .with_writer(non_blocking)
            .with_ansi(false);
        Some((layer, guard))
    });

    match file_layer {
        Some((layer, guard)) => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(stderr_layer)
                .with(layer)
                .init();
            Some(guard)
        }
        None => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(stderr_layer)
                .init();
            None
        }
    }
}

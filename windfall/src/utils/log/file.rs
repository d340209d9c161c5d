use std::path::PathBuf;
use std::sync::OnceLock;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::prelude::__tracing_subscriber_SubscriberExt;

use tracing::Subscriber;
use tracing_subscriber::registry::LookupSpan;
use xdg::BaseDirectories;

const LOG_FILE_NAME: &str = "windfall.log";

// Lines still queued are written when the guard drops, so it lives as long as the process.
static GUARD: OnceLock<WorkerGuard> = OnceLock::new();

pub fn add_layer<S>(subscriber: S) -> impl Subscriber + for<'span> LookupSpan<'span>
where
    S: Subscriber + for<'span> LookupSpan<'span>,
{
    let layer = get_log_writer().map(|log_writer| {
        tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_writer(log_writer)
    });

    subscriber.with(layer)
}

fn prepare_path() -> Option<PathBuf> {
    let path = BaseDirectories::with_prefix("windfall").ok()?.get_cache_home();
    match std::fs::create_dir_all(&path) {
        Ok(()) => Some(path),
        Err(err) => {
            eprintln!("Couldn't create log directory {}: {err}", path.display());
            None
        }
    }
}

fn get_log_writer() -> Option<NonBlocking> {
    let writer = tracing_appender::rolling::never(prepare_path()?, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(writer);
    if GUARD.set(guard).is_err() {
        eprintln!("File logging is already set up");
    }
    Some(non_blocking)
}

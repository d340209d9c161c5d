use tracing::{metadata::LevelFilter, Subscriber};
use tracing_subscriber::{filter::ParseError, layer::SubscriberExt, EnvFilter};

#[cfg(feature = "file-log")]
pub mod file;

/// Builds the subscribers from a log level directive. A `RUST_LOG` environment value wins
/// over the one given. Falls back to `debug` and hands back the error when it does not parse.
#[must_use]
pub fn parse_log_level(level_regex: &str) -> (impl Subscriber, Option<ParseError>) {
    let from_env = std::env::var(EnvFilter::DEFAULT_ENV)
        .ok()
        .filter(|value| !value.trim().is_empty());
    let (filter, parse_err) = build_filter(from_env.as_deref().unwrap_or(level_regex));
    (get_subscribers(filter), parse_err)
}

fn build_filter(level_regex: &str) -> (EnvFilter, Option<ParseError>) {
    match EnvFilter::builder()
        .with_default_directive(LevelFilter::DEBUG.into())
        .parse(level_regex)
    {
        Ok(filter) => (filter, None),
        Err(err) => (EnvFilter::new("debug"), Some(err)),
    }
}

#[allow(clippy::let_and_return)]
pub fn get_subscribers(filter: EnvFilter) -> impl Subscriber {
    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    #[cfg(feature = "file-log")]
    let subscriber = file::add_layer(subscriber);

    subscriber
}

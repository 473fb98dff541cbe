use anyhow::Context;
use std::collections::HashMap;
use tracing::Subscriber;
use tracing::subscriber::set_global_default;
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_log::LogTracer;
use tracing_subscriber::{EnvFilter, Registry, fmt::MakeWriter, layer::SubscriberExt};

/// Bunyan JSON subscriber for the leaderboard service. Every record carries
/// `name` and the crate `version`, so logs from two deployments can be told
/// apart. `RUST_LOG` overrides `env_filter`.
pub fn get_subscriber(
    name: String,
    env_filter: String,
    sink: impl for<'a> MakeWriter<'a> + Send + Sync + 'static,
) -> impl Subscriber + Send + Sync {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(env_filter));
    let default_fields = HashMap::from([(
        "version".to_string(),
        serde_json::Value::from(env!("CARGO_PKG_VERSION")),
    )]);
    let formatting_layer = BunyanFormattingLayer::with_default_fields(name, sink, default_fields);
    Registry::default()
        .with(env_filter)
        .with(JsonStorageLayer)
        .with(formatting_layer)
}

/// Installs `subscriber` process-wide and routes `log` records into it.
/// Fails if either was already installed.
pub fn init_subscriber(subscriber: impl Subscriber + Send + Sync) -> anyhow::Result<()> {
    LogTracer::init().context("Failed to set logger")?;
    set_global_default(subscriber).context("Failed to set subscriber")?;
    Ok(())
}

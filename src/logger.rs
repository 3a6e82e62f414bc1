use crate::Result;
use std::env;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::fmt::Layer;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::Registry;

pub fn system_logger() -> Result<()> {
    let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

    // Console layer on stderr so user-facing output on stdout stays clean
    let console_layer = Layer::new()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_span_events(FmtSpan::CLOSE);

    // Create an EnvFilter layer to control log levels
    let filter_layer = EnvFilter::new(log_level);

    let subscriber = Registry::default().with(console_layer).with(filter_layer);

    // Set the subscriber as the global default
    tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}

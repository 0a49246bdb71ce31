use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// initializes the global tracing subscriber, logging to stdout
///
/// the `RUST_LOG` env var overrides the default level filter
pub fn init(is_development: bool) {
    let default_directive = if is_development { "debug" } else { "info" };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("[TRACER] initialized");
}

use super::CatalogConfig;

/// Configure tracing once at application startup for the entire process.
///
/// `RUST_LOG` wins when set; otherwise the configured log level applies.
///
/// ```bash
/// RUST_LOG=debug cargo run
/// RUST_LOG=catalog_store::clients=debug,info cargo run
/// ```
pub fn setup_tracing(config: &CatalogConfig) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .compact()
        .init();
}

mod cli;
mod telemetry;

use crate::cli::Cli;
use clap::Parser;
use snip_gateway::{App, AppState};
use snip_generator::RandomGenerator;
use snip_storage::{InMemoryMappingStore, StoreSettings};
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Cli::parse();
    telemetry::init(config.log_format);

    let generator = RandomGenerator::with_length(config.code_length)?;
    let settings = StoreSettings::builder()
        .max_attempts(config.max_attempts)
        .build();
    let store = InMemoryMappingStore::with_settings(generator, settings);
    let state = AppState::new(Arc::new(store), &config.base_url);

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    info!(
        listen_addr = %listener.local_addr()?,
        base_url = %config.base_url,
        code_length = config.code_length,
        max_attempts = config.max_attempts,
        log_format = %config.log_format,
        "starting gateway server"
    );

    axum::serve(listener, App::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("gateway server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}

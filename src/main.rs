mod app;
mod routes;
mod services;
mod types;
mod utils;

use std::{process::ExitCode, sync::Arc};

use tracing::{debug, error, info};
use utils::app_config::AppConfig;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt::init();
    info!("Starting app...");

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let session = match app::build_session(&config) {
        Ok(session) => Arc::new(session),
        Err(e) => {
            error!("Failed to start session: {}", e);
            return ExitCode::FAILURE;
        }
    };

    info!(
        "Place type filter {:?}, bias {:?}",
        session.config().place_type,
        session.config().bias
    );

    let mut results = session.subscribe_results();
    tokio::spawn(async move {
        while results.changed().await.is_ok() {
            let (sequence, count) = {
                let current = results.borrow_and_update();
                (current.sequence, current.places.len())
            };
            debug!("Results changed: query #{} has {} predictions", sequence, count);
        }
    });

    let listener = match tokio::net::TcpListener::bind(&config.bind_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind {}: {}", config.bind_addr, e);
            return ExitCode::FAILURE;
        }
    };

    info!("Listening on {}", config.bind_addr);
    if let Err(e) = axum::serve(listener, app::gen_app(session.clone())).await {
        error!("Server error: {}", e);
        session.shutdown();
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod auth;
mod commands;
mod config;
mod error;
mod metrics;
mod middleware;
mod models;
mod routes;
mod state;
mod store;
mod validation;

#[cfg(test)]
mod business_logic_tests;

use config::AppConfig;
use state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let (config, config_notes) = AppConfig::from_env();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.log_filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    for note in &config_notes {
        tracing::warn!("{}", note);
    }

    tracing::info!("Starting Dairy Hub backend...");

    let app_state = match AppState::from_config(&config) {
        Ok(state) => state,
        Err(e) => {
            tracing::error!("Failed to open session storage: {}", e);
            return;
        }
    };

    let app = routes::build_app(app_state);

    let addr = match config.bind_address().parse::<SocketAddr>() {
        Ok(addr) => addr,
        Err(e) => {
            tracing::error!("Invalid listen address {}: {}", config.bind_address(), e);
            return;
        }
    };

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind {}: {}", addr, e);
            return;
        }
    };

    tracing::info!("listening on {}", addr);
    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("Server stopped: {}", e);
    }
}

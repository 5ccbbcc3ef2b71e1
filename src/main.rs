// src/main.rs
use std::net::SocketAddr;
use std::sync::Arc;

use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing_subscriber::fmt::init as tracing_init;

use stockflow_backend::config::{Config, StoreBackend};
use stockflow_backend::database;
use stockflow_backend::state::AppState;
use stockflow_backend::store::{DataStore, MemoryStore, PgStore};

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_init();

    // Load environment variables
    dotenv().ok();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error=%e, "Invalid configuration");
            return;
        }
    };

    // Pick the data store backend
    let store: Arc<dyn DataStore> = match (config.store, config.database_url.as_deref()) {
        (StoreBackend::Postgres, Some(url)) => match database::create_pool(url).await {
            Ok(pool) => Arc::new(PgStore::new(pool)),
            Err(e) => {
                tracing::error!(error=%e, "Failed to create database pool");
                return;
            }
        },
        (StoreBackend::Postgres, None) => {
            tracing::error!("DATABASE_URL must be set");
            return;
        }
        (StoreBackend::Memory, _) => {
            tracing::warn!("Using in-memory store, data is lost on restart");
            Arc::new(MemoryStore::new())
        }
    };

    // Create application state
    let app_state = AppState::new(store, &config.jwt_secret);
    let app = stockflow_backend::app(app_state);

    // Try port..port+20 to avoid crash when address is in use
    let listener = {
        let mut bound = None;
        for offset in 0u16..=20 {
            let port = config.port.saturating_add(offset);
            let addr = SocketAddr::from((config.host, port));
            match TcpListener::bind(addr).await {
                Ok(l) => { bound = Some((l, addr)); break; }
                Err(e) => {
                    if offset == 0 { tracing::warn!(%addr, error=%e, "Port in use, trying next"); }
                }
            }
        }
        match bound {
            Some((l, addr)) => {
                tracing::info!("Server running on {}", addr);
                l
            }
            None => {
                tracing::error!("Failed to bind to any port starting at {} on {}", config.port, config.host);
                return;
            }
        }
    };

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error=%e, "Server error");
    }
}

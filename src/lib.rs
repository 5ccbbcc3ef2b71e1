// src/lib.rs
pub mod auth;
pub mod config;
pub mod database;
pub mod dtos;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod store;

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;

use crate::state::AppState;

/// Full application: authenticated API routes plus an open health check.
pub fn app(state: AppState) -> Router {
    routes::create_router(&state)
        .route("/health", get(health_check))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

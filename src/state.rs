// src/state.rs
use std::sync::Arc;

use crate::store::DataStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn DataStore>,
    pub jwt_secret: Arc<str>,
}

impl AppState {
    pub fn new(store: Arc<dyn DataStore>, jwt_secret: &str) -> Self {
        Self { store, jwt_secret: Arc::from(jwt_secret) }
    }
}

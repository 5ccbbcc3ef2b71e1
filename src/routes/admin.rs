use axum::{
    routing::{get, put},
    Router,
};
use crate::handlers::feature::{create_feature, delete_feature, list_features, update_feature};
use crate::handlers::module::{create_module, delete_module, list_modules, update_module};
use crate::middleware::auth::require_auth;
use crate::state::AppState;

// Handlers check the admin role themselves.
pub fn routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/admin/features", get(list_features).post(create_feature))
        .route("/admin/features/{id}", put(update_feature).delete(delete_feature))
        .route("/admin/modules", get(list_modules).post(create_module))
        .route("/admin/modules/{id}", put(update_module).delete(delete_module))
        .route_layer(axum::middleware::from_fn_with_state(state.clone(), require_auth))
}

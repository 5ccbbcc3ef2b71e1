use axum::{
    routing::{get, post},
    Router,
};
use crate::handlers::onboarding::{
    advance_progress, complete_onboarding, create_custom_categories, get_suggestions,
    list_industries, seed_categories,
};
use crate::middleware::auth::require_auth;
use crate::state::AppState;

pub fn routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/onboarding/industries", get(list_industries))
        .route("/onboarding/industries/{industry}/categories", get(get_suggestions))
        .route("/onboarding/seed", post(seed_categories))
        .route("/onboarding/custom-categories", post(create_custom_categories))
        .route("/onboarding/progress", post(advance_progress))
        .route("/onboarding/complete", post(complete_onboarding))
        .route_layer(axum::middleware::from_fn_with_state(state.clone(), require_auth))
}

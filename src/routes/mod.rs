pub mod admin;
pub mod customers;
pub mod onboarding;

use axum::Router;
use crate::state::AppState;

pub fn create_router(state: &AppState) -> Router<AppState> {
    Router::new()
        .merge(onboarding::routes(state))
        .merge(customers::routes(state))
        .merge(admin::routes(state))
}

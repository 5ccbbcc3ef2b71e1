// src/handlers/onboarding.rs
use axum::{
    extract::{Path, State},
    Extension, Json,
};
use serde_json::{json, Value};
use tracing::{info, instrument, warn};

use crate::dtos::onboarding::{
    CustomCategoriesRequest, ProgressRequest, ProgressResponse, SeedRequest, SuggestionsResponse,
};
use crate::error::AppError;
use crate::middleware::auth::AuthContext;
use crate::services::seeding::{SeedPlan, SeedResult, Seeder};
use crate::services::taxonomy::{all_industries, suggested_categories, IndustryKey, IndustryOption};
use crate::state::AppState;
use crate::store::{to_record, Filter, Table};

// GET /onboarding/industries
pub async fn list_industries() -> Json<Vec<IndustryOption>> {
    Json(all_industries())
}

// GET /onboarding/industries/{industry}/categories
pub async fn get_suggestions(Path(industry): Path<String>) -> Json<SuggestionsResponse> {
    let industry = IndustryKey::parse_lossy(&industry);
    Json(SuggestionsResponse {
        industry,
        label: industry.display_name(),
        categories: suggested_categories(industry),
    })
}

// POST /onboarding/seed - Create starter categories and sample products
#[instrument(skip(store, auth, req), fields(user = %auth.user_id, industry = %req.industry))]
pub async fn seed_categories(
    State(AppState { store, .. }): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Json(req): Json<SeedRequest>,
) -> Result<Json<SeedResult>, AppError> {
    let nothing_selected = matches!(&req.categories, Some(c) if c.is_empty());
    if nothing_selected && req.custom_categories.iter().all(|c| c.trim().is_empty()) {
        return Err(AppError::validation(
            "Please select at least one category or add a custom category",
        ));
    }

    let assigned = store
        .find(
            Table::BranchUsers,
            &Filter::new()
                .eq("branch_id", req.branch_id.to_string())
                .eq("user_id", auth.user_id.to_string()),
        )
        .await?;
    if assigned.is_none() {
        warn!(branch = %req.branch_id, "Seed requested for a branch the user is not assigned to");
        return Err(AppError::not_found("Branch not found"));
    }

    let plan = SeedPlan {
        owner: auth.user_id,
        location: req.branch_id,
        industry: req.industry.parse().ok(),
        selected: req.categories,
        custom: req.custom_categories,
        custom_industry: req.industry_specification,
    };
    let result = Seeder::new(store.as_ref()).run(&plan).await;
    info!(
        success = result.success,
        categories = result.categories_created,
        products = result.products_created,
        "Onboarding seed completed"
    );
    Ok(Json(result))
}

// POST /onboarding/custom-categories
#[instrument(skip(store, auth, req), fields(user = %auth.user_id))]
pub async fn create_custom_categories(
    State(AppState { store, .. }): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Json(req): Json<CustomCategoriesRequest>,
) -> Result<Json<SeedResult>, AppError> {
    if req.names.iter().all(|n| n.trim().is_empty()) {
        return Err(AppError::validation("At least one category name is required"));
    }
    let result = Seeder::new(store.as_ref())
        .seed_custom_categories(auth.user_id, &req.names)
        .await;
    Ok(Json(result))
}

// POST /onboarding/progress - Apply a wizard event to the client's progress
pub async fn advance_progress(
    Json(req): Json<ProgressRequest>,
) -> Result<Json<ProgressResponse>, AppError> {
    let next = req
        .progress
        .apply(req.event)
        .map_err(|e| AppError::conflict(e.to_string()))?;
    Ok(Json(ProgressResponse::from(next)))
}

#[derive(serde::Serialize)]
struct ProfileStatus<'a> {
    id: uuid::Uuid,
    onboarding: &'a str,
}

// POST /onboarding/complete
#[instrument(skip(store, auth), fields(user = %auth.user_id))]
pub async fn complete_onboarding(
    State(AppState { store, .. }): State<AppState>,
    Extension(auth): Extension<AuthContext>,
) -> Result<Json<Value>, AppError> {
    let row = to_record(Table::Profiles, &ProfileStatus { id: auth.user_id, onboarding: "done" })?;
    store.upsert(Table::Profiles, row, "id").await?;
    Ok(Json(json!({ "onboarding": "done" })))
}

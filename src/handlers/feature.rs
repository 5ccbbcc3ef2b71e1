// src/handlers/feature.rs
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use serde_json::Value;
use tracing::{error, info, instrument};
use uuid::Uuid;

use crate::dtos::customer::DeletedResponse;
use crate::dtos::feature::{CreateFeatureRequest, FeatureListQuery, UpdateFeatureRequest};
use crate::error::AppError;
use crate::middleware::auth::AuthContext;
use crate::models::feature::{Feature, FeatureCategory, FeatureVote};
use crate::services::feature_board::{build_board, FeatureBoard};
use crate::state::AppState;
use crate::store::{from_record, to_record, Filter, OrderBy, Table};

fn parse_category(raw: Option<&str>) -> Result<Option<FeatureCategory>, AppError> {
    match raw.map(str::trim) {
        None | Some("") | Some("all") => Ok(None),
        Some(name) => serde_json::from_value(Value::String(name.to_string()))
            .map(Some)
            .map_err(|_| AppError::validation(format!("Unknown feature category: {name}"))),
    }
}

// GET /admin/features - Board with vote counts
#[instrument(skip(store, auth), fields(user = %auth.user_id))]
pub async fn list_features(
    State(AppState { store, .. }): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Query(params): Query<FeatureListQuery>,
) -> Result<Json<FeatureBoard>, AppError> {
    auth.require_admin(store.as_ref()).await?;
    let category = parse_category(params.category.as_deref())?;

    let features = match store
        .list(Table::Features, &Filter::new(), Some(&OrderBy::desc("created_at")))
        .await
    {
        Ok(records) => records
            .into_iter()
            .map(from_record::<Feature>)
            .collect::<Result<Vec<_>, _>>()?,
        Err(e) => {
            error!(?e, "Failed to fetch features");
            return Err(e.into());
        }
    };
    let votes = store
        .list(Table::FeatureVotes, &Filter::new().eq("voted", true), None)
        .await?
        .into_iter()
        .map(from_record::<FeatureVote>)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Json(build_board(features, &votes, category, params.sort_by)))
}

// POST /admin/features
#[instrument(skip(store, auth, payload), fields(user = %auth.user_id))]
pub async fn create_feature(
    State(AppState { store, .. }): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Json(payload): Json<CreateFeatureRequest>,
) -> Result<(StatusCode, Json<Feature>), AppError> {
    auth.require_admin(store.as_ref()).await?;
    if payload.title.trim().is_empty() {
        return Err(AppError::validation("Feature title is required"));
    }

    let record = to_record(Table::Features, &payload)?;
    let saved = store.insert(Table::Features, record).await?;
    let feature: Feature = from_record(saved)?;
    info!(feature_id = %feature.id, "Feature created");
    Ok((StatusCode::CREATED, Json(feature)))
}

// PUT /admin/features/{id}
#[instrument(skip(store, auth, payload), fields(user = %auth.user_id))]
pub async fn update_feature(
    State(AppState { store, .. }): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateFeatureRequest>,
) -> Result<Json<Feature>, AppError> {
    auth.require_admin(store.as_ref()).await?;
    if matches!(payload.title.as_deref(), Some(t) if t.trim().is_empty()) {
        return Err(AppError::validation("Feature title cannot be empty"));
    }

    let patch = to_record(Table::Features, &payload)?;
    let updated = store
        .update(Table::Features, id, patch)
        .await?
        .ok_or_else(|| AppError::not_found("Feature not found"))?;
    Ok(Json(from_record(updated)?))
}

// DELETE /admin/features/{id}
#[instrument(skip(store, auth), fields(user = %auth.user_id))]
pub async fn delete_feature(
    State(AppState { store, .. }): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(id): Path<Uuid>,
) -> Result<Json<DeletedResponse>, AppError> {
    auth.require_admin(store.as_ref()).await?;
    if !store.delete(Table::Features, id).await? {
        return Err(AppError::not_found("Feature not found"));
    }
    info!(feature_id = %id, "Feature deleted");
    Ok(Json(DeletedResponse { id, deleted: true }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_or_missing_category_means_no_filter() {
        assert_eq!(parse_category(None).unwrap(), None);
        assert_eq!(parse_category(Some("all")).unwrap(), None);
        assert_eq!(
            parse_category(Some("premium")).unwrap(),
            Some(FeatureCategory::Premium)
        );
        assert!(parse_category(Some("gadgets")).is_err());
    }
}

// src/handlers/module.rs
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use tracing::{error, info, instrument};
use uuid::Uuid;

use crate::dtos::customer::DeletedResponse;
use crate::dtos::module::{CreateModuleRequest, UpdateModuleRequest};
use crate::error::AppError;
use crate::middleware::auth::AuthContext;
use crate::models::module::Module;
use crate::state::AppState;
use crate::store::{from_record, to_record, Filter, OrderBy, Table};

// GET /admin/modules
#[instrument(skip(store, auth), fields(user = %auth.user_id))]
pub async fn list_modules(
    State(AppState { store, .. }): State<AppState>,
    Extension(auth): Extension<AuthContext>,
) -> Result<Json<Vec<Module>>, AppError> {
    auth.require_admin(store.as_ref()).await?;
    match store
        .list(Table::Modules, &Filter::new(), Some(&OrderBy::desc("created_at")))
        .await
    {
        Ok(records) => Ok(Json(
            records
                .into_iter()
                .map(from_record::<Module>)
                .collect::<Result<Vec<_>, _>>()?,
        )),
        Err(e) => {
            error!(?e, "Failed to fetch modules");
            Err(e.into())
        }
    }
}

// POST /admin/modules
#[instrument(skip(store, auth, payload), fields(user = %auth.user_id))]
pub async fn create_module(
    State(AppState { store, .. }): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Json(payload): Json<CreateModuleRequest>,
) -> Result<(StatusCode, Json<Module>), AppError> {
    auth.require_admin(store.as_ref()).await?;
    if payload.title.trim().is_empty() {
        return Err(AppError::validation("Module title is required"));
    }
    if payload.price_monthly < 0.0 || payload.price_yearly < 0.0 {
        return Err(AppError::validation("Module prices cannot be negative"));
    }

    let record = to_record(Table::Modules, &payload)?;
    let saved = store.insert(Table::Modules, record).await?;
    let module: Module = from_record(saved)?;
    info!(module_id = %module.id, "Module created");
    Ok((StatusCode::CREATED, Json(module)))
}

// PUT /admin/modules/{id}
#[instrument(skip(store, auth, payload), fields(user = %auth.user_id))]
pub async fn update_module(
    State(AppState { store, .. }): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateModuleRequest>,
) -> Result<Json<Module>, AppError> {
    auth.require_admin(store.as_ref()).await?;
    if matches!(payload.title.as_deref(), Some(t) if t.trim().is_empty()) {
        return Err(AppError::validation("Module title cannot be empty"));
    }
    let negative = |p: Option<f64>| p.is_some_and(|p| p < 0.0);
    if negative(payload.price_monthly) || negative(payload.price_yearly) {
        return Err(AppError::validation("Module prices cannot be negative"));
    }

    let patch = to_record(Table::Modules, &payload)?;
    let updated = store
        .update(Table::Modules, id, patch)
        .await?
        .ok_or_else(|| AppError::not_found("Module not found"))?;
    Ok(Json(from_record(updated)?))
}

// DELETE /admin/modules/{id}
#[instrument(skip(store, auth), fields(user = %auth.user_id))]
pub async fn delete_module(
    State(AppState { store, .. }): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(id): Path<Uuid>,
) -> Result<Json<DeletedResponse>, AppError> {
    auth.require_admin(store.as_ref()).await?;
    if !store.delete(Table::Modules, id).await? {
        return Err(AppError::not_found("Module not found"));
    }
    info!(module_id = %id, "Module deleted");
    Ok(Json(DeletedResponse { id, deleted: true }))
}

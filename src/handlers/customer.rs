// src/handlers/customer.rs
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use serde_json::Value;
use tracing::{error, instrument};
use uuid::Uuid;

use crate::dtos::customer::{
    CreateCustomerRequest, CustomerListQuery, CustomerPageResponse, CustomerResponse,
    DeletedResponse, UpdateCustomerRequest, DEFAULT_PAGE_SIZE,
};
use crate::error::AppError;
use crate::middleware::auth::AuthContext;
use crate::models::customer::Customer;
use crate::services::customer_view::view;
use crate::state::AppState;
use crate::store::{from_record, to_record, DataStore, Filter, OrderBy, Table};

async fn find_owned(store: &dyn DataStore, owner: Uuid, id: Uuid) -> Result<Customer, AppError> {
    let record = store
        .find(
            Table::Customers,
            &Filter::new().eq("id", id.to_string()).eq("user_id", owner.to_string()),
        )
        .await?
        .ok_or_else(|| AppError::not_found("Customer not found"))?;
    Ok(from_record(record)?)
}

// GET /customers - Search, sort and page the caller's customers
#[instrument(skip(store, auth), fields(user = %auth.user_id))]
pub async fn list_customers(
    State(AppState { store, .. }): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Query(params): Query<CustomerListQuery>,
) -> Result<Json<CustomerPageResponse>, AppError> {
    let page_size = params.page_size.unwrap_or(DEFAULT_PAGE_SIZE);
    if page_size == 0 {
        return Err(AppError::validation("page_size must be greater than 0"));
    }
    let page = params.page.unwrap_or(1);

    let records = match store
        .list(
            Table::Customers,
            &Filter::new().eq("user_id", auth.user_id.to_string()),
            Some(&OrderBy::asc("name")),
        )
        .await
    {
        Ok(records) => records,
        Err(e) => {
            error!(?e, "Failed to fetch customers");
            return Err(e.into());
        }
    };
    let customers = records
        .into_iter()
        .map(from_record::<Customer>)
        .collect::<Result<Vec<_>, _>>()?;

    let result = view(
        &customers,
        params.q.as_deref().unwrap_or_default(),
        params.sort,
        params.direction,
        page,
        page_size,
    );
    Ok(Json(CustomerPageResponse {
        rows: result.rows.into_iter().map(CustomerResponse::from).collect(),
        total_pages: result.total_pages,
        total: result.total,
        page: result.page,
        page_size: result.page_size,
    }))
}

// GET /customers/{id}
#[instrument(skip(store, auth), fields(user = %auth.user_id))]
pub async fn get_customer(
    State(AppState { store, .. }): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(id): Path<Uuid>,
) -> Result<Json<CustomerResponse>, AppError> {
    let customer = find_owned(store.as_ref(), auth.user_id, id).await?;
    Ok(Json(CustomerResponse::from(customer)))
}

// POST /customers
#[instrument(skip(store, auth, payload), fields(user = %auth.user_id))]
pub async fn create_customer(
    State(AppState { store, .. }): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Json(payload): Json<CreateCustomerRequest>,
) -> Result<(StatusCode, Json<CustomerResponse>), AppError> {
    let name = payload
        .resolved_name()
        .ok_or_else(|| AppError::validation("Customer name is required"))?;

    let mut record = to_record(Table::Customers, &payload)?;
    record.insert("name".into(), Value::String(name));
    record.insert("user_id".into(), Value::String(auth.user_id.to_string()));
    if record.get("email").map_or(true, Value::is_null) {
        record.insert("email".into(), Value::String(String::new()));
    }
    if payload.same_as_billing {
        let billing = record.get("billing_address").cloned().unwrap_or(Value::Null);
        record.insert("delivery_address".into(), billing);
    }

    let saved = store.insert(Table::Customers, record).await?;
    let customer: Customer = from_record(saved)?;
    Ok((StatusCode::CREATED, Json(CustomerResponse::from(customer))))
}

// PUT /customers/{id}
#[instrument(skip(store, auth, payload), fields(user = %auth.user_id))]
pub async fn update_customer(
    State(AppState { store, .. }): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateCustomerRequest>,
) -> Result<Json<CustomerResponse>, AppError> {
    if matches!(payload.name.as_deref(), Some(n) if n.trim().is_empty()) {
        return Err(AppError::validation("Customer name cannot be empty"));
    }
    find_owned(store.as_ref(), auth.user_id, id).await?;

    let patch = to_record(Table::Customers, &payload)?;
    let updated = store
        .update(Table::Customers, id, patch)
        .await?
        .ok_or_else(|| AppError::not_found("Customer not found"))?;
    let customer: Customer = from_record(updated)?;
    Ok(Json(CustomerResponse::from(customer)))
}

// DELETE /customers/{id}
#[instrument(skip(store, auth), fields(user = %auth.user_id))]
pub async fn delete_customer(
    State(AppState { store, .. }): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(id): Path<Uuid>,
) -> Result<Json<DeletedResponse>, AppError> {
    find_owned(store.as_ref(), auth.user_id, id).await?;
    if !store.delete(Table::Customers, id).await? {
        return Err(AppError::not_found("Customer not found"));
    }
    Ok(Json(DeletedResponse { id, deleted: true }))
}

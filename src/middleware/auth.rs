use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::warn;
use uuid::Uuid;

use crate::auth::jwt::verify_token;
use crate::error::AppError;
use crate::models::profile::Profile;
use crate::state::AppState;
use crate::store::{from_record, DataStore, Filter, Table};

#[derive(Debug, Clone)]
pub struct AuthContext {
    pub user_id: Uuid,
    pub role: String,
    pub email: Option<String>,
}

impl AuthContext {
    /// Admin access comes from the caller's profile row; the token role is
    /// always "authenticated" for hosted sessions.
    pub async fn require_admin(&self, store: &dyn DataStore) -> Result<(), AppError> {
        let profile = store
            .find(Table::Profiles, &Filter::new().eq("id", self.user_id.to_string()))
            .await?
            .map(from_record::<Profile>)
            .transpose()?;
        match profile {
            Some(p) if p.is_admin() => Ok(()),
            _ => {
                warn!(user = %self.user_id, "Admin access denied");
                Err(AppError::forbidden("Only administrators can manage this resource"))
            }
        }
    }
}

#[derive(Serialize)]
struct ErrorBody { error: String, code: &'static str }

pub async fn require_auth(State(state): State<AppState>, mut req: Request, next: Next) -> Response {
    let auth_header = match req.headers()
        .get("Authorization")
        .and_then(|v| v.to_str().ok()) {
        Some(h) => h,
        None => return unauthorized("Missing Authorization header"),
    };

    // Expect "Bearer <token>"
    let token = match auth_header.strip_prefix("Bearer ") {
        Some(t) => t,
        None => return unauthorized("Invalid Authorization format"),
    };

    let claims = match verify_token(token, &state.jwt_secret) {
        Ok(c) => c,
        Err(_) => return unauthorized("Invalid or expired token"),
    };

    req.extensions_mut().insert(AuthContext {
        user_id: claims.sub,
        role: claims.role,
        email: claims.email,
    });

    next.run(req).await
}

fn unauthorized(msg: &str) -> Response {
    let body = axum::Json(ErrorBody { error: msg.to_string(), code: "unauthorized" });
    (StatusCode::UNAUTHORIZED, body).into_response()
}

use axum::{extract::Extension, response::IntoResponse, routing::post, Json, Router};
use serde_json::json;
use tracing::warn;

use crate::dto::{LoginRequest, ValidatedJson};
use crate::error::ApiError;
use crate::storage::SharedStore;

pub fn auth_routes() -> Router {
    Router::new().route("/auth/login", post(login))
}

// Unknown user and wrong password answer identically.
async fn login(
    Extension(store): Extension<SharedStore>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let admin = match store.get_admin_by_username(&payload.username).await? {
        Some(admin) if admin.check_password(&payload.password) => admin,
        _ => {
            warn!(username = %payload.username, "Failed admin login");
            return Err(ApiError::Unauthorized);
        }
    };

    Ok(Json(json!({
        "message": "Login successful",
        "admin": {
            "id": admin.id,
            "username": admin.username,
        }
    })))
}

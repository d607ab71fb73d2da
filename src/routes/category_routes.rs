use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde_json::json;

use crate::dto::{CategoryPatch, NewCategory, ValidatedJson};
use crate::error::{parse_id, ApiError};
use crate::storage::SharedStore;

//ROUTERS
// `:key` is a slug for reads and a numeric id for writes.
pub fn category_routes() -> Router {
    Router::new()
        .route("/categories", get(get_categories).post(create_category))
        .route(
            "/categories/:key",
            get(get_category_by_slug)
                .put(update_category)
                .delete(delete_category),
        )
}

//ROUTES
async fn get_categories(
    Extension(store): Extension<SharedStore>,
) -> Result<impl IntoResponse, ApiError> {
    let categories = store.list_categories().await?;
    Ok(Json(categories))
}

async fn get_category_by_slug(
    Path(slug): Path<String>,
    Extension(store): Extension<SharedStore>,
) -> Result<impl IntoResponse, ApiError> {
    match store.get_category_by_slug(&slug).await? {
        Some(category) => Ok(Json(category)),
        None => Err(not_found()),
    }
}

async fn create_category(
    Extension(store): Extension<SharedStore>,
    ValidatedJson(payload): ValidatedJson<NewCategory>,
) -> Result<impl IntoResponse, ApiError> {
    let category = store.create_category(payload).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

async fn update_category(
    Path(id): Path<String>,
    Extension(store): Extension<SharedStore>,
    ValidatedJson(payload): ValidatedJson<CategoryPatch>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id(&id)?;
    match store.update_category(id, payload).await? {
        Some(category) => Ok(Json(category)),
        None => Err(not_found()),
    }
}

async fn delete_category(
    Path(id): Path<String>,
    Extension(store): Extension<SharedStore>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id(&id)?;
    if !store.delete_category(id).await? {
        return Err(not_found());
    }

    Ok(Json(json!({
        "message": "Category deleted successfully"
    })))
}

fn not_found() -> ApiError {
    ApiError::NotFound("Category not found".to_string())
}

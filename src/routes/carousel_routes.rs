use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde_json::json;

use crate::dto::{CarouselImagePatch, NewCarouselImage, ValidatedJson};
use crate::error::{parse_id, ApiError};
use crate::storage::SharedStore;

//ROUTERS
pub fn carousel_routes() -> Router {
    Router::new()
        .route(
            "/carousel",
            get(get_carousel_images).post(create_carousel_image),
        )
        .route(
            "/carousel/:id",
            get(get_carousel_image)
                .put(update_carousel_image)
                .delete(delete_carousel_image),
        )
}

//ROUTES
async fn get_carousel_images(
    Extension(store): Extension<SharedStore>,
) -> Result<impl IntoResponse, ApiError> {
    let images = store.list_carousel_images().await?;
    Ok(Json(images))
}

async fn get_carousel_image(
    Path(id): Path<String>,
    Extension(store): Extension<SharedStore>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id(&id)?;
    match store.get_carousel_image(id).await? {
        Some(image) => Ok(Json(image)),
        None => Err(not_found()),
    }
}

async fn create_carousel_image(
    Extension(store): Extension<SharedStore>,
    ValidatedJson(payload): ValidatedJson<NewCarouselImage>,
) -> Result<impl IntoResponse, ApiError> {
    let image = store.create_carousel_image(payload).await?;
    Ok((StatusCode::CREATED, Json(image)))
}

async fn update_carousel_image(
    Path(id): Path<String>,
    Extension(store): Extension<SharedStore>,
    ValidatedJson(payload): ValidatedJson<CarouselImagePatch>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id(&id)?;
    match store.update_carousel_image(id, payload).await? {
        Some(image) => Ok(Json(image)),
        None => Err(not_found()),
    }
}

async fn delete_carousel_image(
    Path(id): Path<String>,
    Extension(store): Extension<SharedStore>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id(&id)?;
    if !store.delete_carousel_image(id).await? {
        return Err(not_found());
    }

    Ok(Json(json!({
        "message": "Carousel image deleted successfully"
    })))
}

fn not_found() -> ApiError {
    ApiError::NotFound("Carousel image not found".to_string())
}

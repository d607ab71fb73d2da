use axum::{
    body::Body,
    extract::{rejection::JsonRejection, DefaultBodyLimit, Extension, Path},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use std::sync::Arc;
use tokio_util::io::ReaderStream;
use validator::Validate;

use crate::dto::{invalid_body, UploadImage};
use crate::error::ApiError;
use crate::uploads::{ImageStore, UploadError};

//Routers
pub fn upload_routes(body_limit: usize) -> Router {
    Router::new()
        .route("/upload", post(upload_image))
        .layer(DefaultBodyLimit::max(body_limit))
}

pub fn public_image_router() -> Router {
    Router::new().route("/uploads/:file_name", get(serve_image))
}

//Routes
async fn upload_image(
    Extension(images): Extension<Arc<ImageStore>>,
    payload: Result<Json<UploadImage>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    // bodies past the buffer limit never reach `ImageStore::check`
    let Json(payload) = payload.map_err(|rejection| {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::from(UploadError::TooLarge {
                limit: images.max_bytes(),
            })
        } else {
            invalid_body(rejection)
        }
    })?;
    payload.validate()?;

    let stored = images
        .save(&payload.base64_data, &payload.filename)
        .await?;

    Ok(Json(json!({
        "path": stored.path
    })))
}

async fn serve_image(
    Path(file_name): Path<String>,
    Extension(images): Extension<Arc<ImageStore>>,
) -> Result<Response, ApiError> {
    let (file, path) = images.open(&file_name).await?;

    let content_type = mime_guess::from_path(&path)
        .first_raw()
        .unwrap_or("application/octet-stream");

    let stream = ReaderStream::new(file);
    let body = Body::from_stream(stream);

    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_str(content_type)
            .unwrap_or(HeaderValue::from_static("application/octet-stream")),
    );
    headers.insert(
        header::CONTENT_DISPOSITION,
        HeaderValue::from_static("inline"),
    );

    Ok((headers, body).into_response())
}

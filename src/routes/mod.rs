pub mod auth_routes;
pub mod carousel_routes;
pub mod category_routes;
pub mod product_routes;
pub mod upload_routes;

use axum::{middleware, Extension, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::middleware::logging::logging_middleware;
use crate::storage::SharedStore;
use crate::uploads::ImageStore;

use {
    auth_routes::auth_routes,
    carousel_routes::carousel_routes,
    category_routes::category_routes,
    product_routes::product_routes,
    upload_routes::{public_image_router, upload_routes},
};

pub fn api_router(store: SharedStore, images: Arc<ImageStore>) -> Router {
    let upload_body_limit = images.request_body_limit();
    let api_routes = Router::new()
        .merge(carousel_routes())
        .merge(category_routes())
        .merge(product_routes())
        .merge(upload_routes(upload_body_limit))
        .merge(auth_routes());

    Router::new()
        .nest("/api", api_routes)
        .merge(public_image_router())
        .layer(middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(Extension(store))
        .layer(Extension(images))
}

use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use crate::dto::{NewProduct, ProductPatch, ValidatedJson};
use crate::error::{parse_id, ApiError};
use crate::storage::SharedStore;

//ROUTERS
// `:key` is a slug for reads and a numeric id everywhere else.
pub fn product_routes() -> Router {
    Router::new()
        .route("/products", get(get_products).post(create_product))
        .route(
            "/products/:key",
            get(get_product_by_slug)
                .put(update_product)
                .delete(delete_product),
        )
        .route("/products/:key/related", get(get_related_products))
}

//ROUTES
async fn get_products(
    Query(params): Query<GetProductsQuery>,
    Extension(store): Extension<SharedStore>,
) -> Result<impl IntoResponse, ApiError> {
    let products = if let Some(slug) = params.category {
        let category = store
            .get_category_by_slug(&slug)
            .await?
            .ok_or_else(|| ApiError::NotFound("Category not found".to_string()))?;
        store.list_products_by_category(category.id).await?
    } else if params.featured.as_deref() == Some("true") {
        store.list_featured_products().await?
    } else {
        store.list_products().await?
    };

    Ok(Json(products))
}

async fn get_product_by_slug(
    Path(slug): Path<String>,
    Extension(store): Extension<SharedStore>,
) -> Result<impl IntoResponse, ApiError> {
    match store.get_product_by_slug(&slug).await? {
        Some(product) => Ok(Json(product)),
        None => Err(not_found()),
    }
}

async fn get_related_products(
    Path(id): Path<String>,
    Extension(store): Extension<SharedStore>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id(&id)?;
    let product = store.get_product(id).await?.ok_or_else(not_found)?;

    let related = match product.category_id {
        Some(category_id) => store.list_related_products(id, category_id).await?,
        None => Vec::new(),
    };
    Ok(Json(related))
}

async fn create_product(
    Extension(store): Extension<SharedStore>,
    ValidatedJson(payload): ValidatedJson<NewProduct>,
) -> Result<impl IntoResponse, ApiError> {
    let product = store.create_product(payload).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

async fn update_product(
    Path(id): Path<String>,
    Extension(store): Extension<SharedStore>,
    ValidatedJson(payload): ValidatedJson<ProductPatch>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id(&id)?;
    match store.update_product(id, payload).await? {
        Some(product) => Ok(Json(product)),
        None => Err(not_found()),
    }
}

async fn delete_product(
    Path(id): Path<String>,
    Extension(store): Extension<SharedStore>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id(&id)?;
    if !store.delete_product(id).await? {
        return Err(not_found());
    }

    Ok(Json(json!({
        "message": "Product deleted successfully"
    })))
}

//structs
#[derive(Deserialize)]
struct GetProductsQuery {
    category: Option<String>,
    featured: Option<String>,
}

fn not_found() -> ApiError {
    ApiError::NotFound("Product not found".to_string())
}

//! Data-access façade shared by every handler.
//!
//! `CatalogStore` is implemented twice: [`MemoryStore`] keeps everything in
//! process and [`DatabaseStore`] goes through sea-orm. Both enforce the same
//! slug/username uniqueness rules and merge partial updates with the same
//! `apply` routines from [`crate::dto`].

mod database;
mod memory;

pub use database::DatabaseStore;
pub use memory::MemoryStore;

use async_trait::async_trait;
use sea_orm::{DbErr, SqlErr};
use std::sync::Arc;
use thiserror::Error;

use crate::dto::{
    CarouselImagePatch, CategoryPatch, NewCarouselImage, NewCategory, NewProduct, ProductPatch,
};
use crate::entities::{admin, carousel_image, category, product};

/// Most related products returned for one product page.
pub const RELATED_PRODUCTS_LIMIT: usize = 4;

pub type SharedStore = Arc<dyn CatalogStore>;
pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{entity} with {field} \"{value}\" already exists")]
    Conflict {
        entity: &'static str,
        field: &'static str,
        value: String,
    },
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl StoreError {
    pub(crate) fn slug_taken(entity: &'static str, slug: &str) -> Self {
        StoreError::Conflict {
            entity,
            field: "slug",
            value: slug.to_string(),
        }
    }

    pub(crate) fn username_taken(username: &str) -> Self {
        StoreError::Conflict {
            entity: "Admin",
            field: "username",
            value: username.to_string(),
        }
    }

    /// Turns a unique-constraint violation raised by the database into the
    /// same conflict the pre-insert check would have reported.
    pub(crate) fn from_write(err: DbErr, conflict: StoreError) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => conflict,
            _ => StoreError::Database(err),
        }
    }
}

#[async_trait]
pub trait CatalogStore: Send + Sync {
    // Carousel
    async fn list_carousel_images(&self) -> StoreResult<Vec<carousel_image::Model>>;
    async fn get_carousel_image(&self, id: i32) -> StoreResult<Option<carousel_image::Model>>;
    async fn create_carousel_image(
        &self,
        data: NewCarouselImage,
    ) -> StoreResult<carousel_image::Model>;
    async fn update_carousel_image(
        &self,
        id: i32,
        patch: CarouselImagePatch,
    ) -> StoreResult<Option<carousel_image::Model>>;
    async fn delete_carousel_image(&self, id: i32) -> StoreResult<bool>;

    // Categories
    async fn list_categories(&self) -> StoreResult<Vec<category::Model>>;
    async fn get_category(&self, id: i32) -> StoreResult<Option<category::Model>>;
    async fn get_category_by_slug(&self, slug: &str) -> StoreResult<Option<category::Model>>;
    async fn create_category(&self, data: NewCategory) -> StoreResult<category::Model>;
    async fn update_category(
        &self,
        id: i32,
        patch: CategoryPatch,
    ) -> StoreResult<Option<category::Model>>;
    async fn delete_category(&self, id: i32) -> StoreResult<bool>;

    // Products
    async fn list_products(&self) -> StoreResult<Vec<product::Model>>;
    async fn get_product(&self, id: i32) -> StoreResult<Option<product::Model>>;
    async fn get_product_by_slug(&self, slug: &str) -> StoreResult<Option<product::Model>>;
    async fn list_products_by_category(&self, category_id: i32)
        -> StoreResult<Vec<product::Model>>;
    async fn list_featured_products(&self) -> StoreResult<Vec<product::Model>>;
    /// Active products of `category_id` other than `product_id`, ascending
    /// id, capped at [`RELATED_PRODUCTS_LIMIT`].
    async fn list_related_products(
        &self,
        product_id: i32,
        category_id: i32,
    ) -> StoreResult<Vec<product::Model>>;
    async fn create_product(&self, data: NewProduct) -> StoreResult<product::Model>;
    async fn update_product(
        &self,
        id: i32,
        patch: ProductPatch,
    ) -> StoreResult<Option<product::Model>>;
    async fn delete_product(&self, id: i32) -> StoreResult<bool>;

    // Admins
    async fn get_admin_by_username(&self, username: &str) -> StoreResult<Option<admin::Model>>;
    async fn create_admin(&self, data: NewAdmin) -> StoreResult<admin::Model>;
}

#[derive(Clone, Debug)]
pub struct NewAdmin {
    pub username: String,
    pub password: String,
    pub is_active: bool,
}

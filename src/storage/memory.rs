use async_trait::async_trait;
use sea_orm::{Set, TryIntoModel};
use std::collections::BTreeMap;
use tokio::sync::RwLock;
use tracing::warn;

use crate::dto::{
    CarouselImagePatch, CategoryPatch, NewCarouselImage, NewCategory, NewProduct, ProductPatch,
};
use crate::entities::{admin, carousel_image, category, product};
use crate::storage::{CatalogStore, NewAdmin, StoreError, StoreResult, RELATED_PRODUCTS_LIMIT};

/// In-process backend. Rows live in id-ordered maps, so every listing comes
/// out in ascending id order just like the database backend.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

#[derive(Default)]
struct Tables {
    carousel_images: BTreeMap<i32, carousel_image::Model>,
    categories: BTreeMap<i32, category::Model>,
    products: BTreeMap<i32, product::Model>,
    admins: BTreeMap<i32, admin::Model>,
    last_carousel_id: i32,
    last_category_id: i32,
    last_product_id: i32,
    last_admin_id: i32,
}

fn next_id(counter: &mut i32) -> i32 {
    *counter += 1;
    *counter
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CatalogStore for MemoryStore {
    async fn list_carousel_images(&self) -> StoreResult<Vec<carousel_image::Model>> {
        let tables = self.tables.read().await;
        let mut images: Vec<carousel_image::Model> = tables
            .carousel_images
            .values()
            .filter(|image| image.is_active)
            .cloned()
            .collect();
        // stable sort keeps id order between equal positions
        images.sort_by_key(|image| image.sort_order);
        Ok(images)
    }

    async fn get_carousel_image(&self, id: i32) -> StoreResult<Option<carousel_image::Model>> {
        Ok(self.tables.read().await.carousel_images.get(&id).cloned())
    }

    async fn create_carousel_image(
        &self,
        data: NewCarouselImage,
    ) -> StoreResult<carousel_image::Model> {
        let mut tables = self.tables.write().await;
        let id = next_id(&mut tables.last_carousel_id);

        let mut new_image = data.into_active_model();
        new_image.id = Set(id);
        let model = new_image.try_into_model()?;

        tables.carousel_images.insert(id, model.clone());
        Ok(model)
    }

    async fn update_carousel_image(
        &self,
        id: i32,
        patch: CarouselImagePatch,
    ) -> StoreResult<Option<carousel_image::Model>> {
        let mut tables = self.tables.write().await;
        match tables.carousel_images.get_mut(&id) {
            Some(image) => {
                patch.apply(image);
                Ok(Some(image.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete_carousel_image(&self, id: i32) -> StoreResult<bool> {
        Ok(self.tables.write().await.carousel_images.remove(&id).is_some())
    }

    async fn list_categories(&self) -> StoreResult<Vec<category::Model>> {
        let tables = self.tables.read().await;
        Ok(tables
            .categories
            .values()
            .filter(|category| category.is_active)
            .cloned()
            .collect())
    }

    async fn get_category(&self, id: i32) -> StoreResult<Option<category::Model>> {
        Ok(self.tables.read().await.categories.get(&id).cloned())
    }

    async fn get_category_by_slug(&self, slug: &str) -> StoreResult<Option<category::Model>> {
        let tables = self.tables.read().await;
        Ok(tables
            .categories
            .values()
            .find(|category| category.slug == slug)
            .cloned())
    }

    async fn create_category(&self, data: NewCategory) -> StoreResult<category::Model> {
        let mut tables = self.tables.write().await;
        if tables.categories.values().any(|c| c.slug == data.slug) {
            warn!(slug = %data.slug, "Rejected duplicate category slug");
            return Err(StoreError::slug_taken("Category", &data.slug));
        }

        let id = next_id(&mut tables.last_category_id);
        let mut new_category = data.into_active_model();
        new_category.id = Set(id);
        let model = new_category.try_into_model()?;

        tables.categories.insert(id, model.clone());
        Ok(model)
    }

    async fn update_category(
        &self,
        id: i32,
        patch: CategoryPatch,
    ) -> StoreResult<Option<category::Model>> {
        let mut tables = self.tables.write().await;
        if !tables.categories.contains_key(&id) {
            return Ok(None);
        }

        if let Some(slug) = patch.slug.as_deref() {
            if tables
                .categories
                .values()
                .any(|c| c.id != id && c.slug == slug)
            {
                warn!(slug = %slug, id, "Rejected duplicate category slug");
                return Err(StoreError::slug_taken("Category", slug));
            }
        }

        let category = match tables.categories.get_mut(&id) {
            Some(category) => category,
            None => return Ok(None),
        };
        patch.apply(category);
        Ok(Some(category.clone()))
    }

    async fn delete_category(&self, id: i32) -> StoreResult<bool> {
        Ok(self.tables.write().await.categories.remove(&id).is_some())
    }

    async fn list_products(&self) -> StoreResult<Vec<product::Model>> {
        Ok(self.tables.read().await.products.values().cloned().collect())
    }

    async fn get_product(&self, id: i32) -> StoreResult<Option<product::Model>> {
        Ok(self.tables.read().await.products.get(&id).cloned())
    }

    async fn get_product_by_slug(&self, slug: &str) -> StoreResult<Option<product::Model>> {
        let tables = self.tables.read().await;
        Ok(tables
            .products
            .values()
            .find(|product| product.slug == slug)
            .cloned())
    }

    async fn list_products_by_category(
        &self,
        category_id: i32,
    ) -> StoreResult<Vec<product::Model>> {
        let tables = self.tables.read().await;
        Ok(tables
            .products
            .values()
            .filter(|p| p.is_active && p.category_id == Some(category_id))
            .cloned()
            .collect())
    }

    async fn list_featured_products(&self) -> StoreResult<Vec<product::Model>> {
        let tables = self.tables.read().await;
        Ok(tables
            .products
            .values()
            .filter(|p| p.is_active && p.is_featured)
            .cloned()
            .collect())
    }

    async fn list_related_products(
        &self,
        product_id: i32,
        category_id: i32,
    ) -> StoreResult<Vec<product::Model>> {
        let tables = self.tables.read().await;
        Ok(tables
            .products
            .values()
            .filter(|p| p.is_active && p.id != product_id && p.category_id == Some(category_id))
            .take(RELATED_PRODUCTS_LIMIT)
            .cloned()
            .collect())
    }

    async fn create_product(&self, data: NewProduct) -> StoreResult<product::Model> {
        let mut tables = self.tables.write().await;
        if tables.products.values().any(|p| p.slug == data.slug) {
            warn!(slug = %data.slug, "Rejected duplicate product slug");
            return Err(StoreError::slug_taken("Product", &data.slug));
        }

        let id = next_id(&mut tables.last_product_id);
        let mut new_product = data.into_active_model();
        new_product.id = Set(id);
        let model = new_product.try_into_model()?;

        tables.products.insert(id, model.clone());
        Ok(model)
    }

    async fn update_product(
        &self,
        id: i32,
        patch: ProductPatch,
    ) -> StoreResult<Option<product::Model>> {
        let mut tables = self.tables.write().await;
        if !tables.products.contains_key(&id) {
            return Ok(None);
        }

        if let Some(slug) = patch.slug.as_deref() {
            if tables.products.values().any(|p| p.id != id && p.slug == slug) {
                warn!(slug = %slug, id, "Rejected duplicate product slug");
                return Err(StoreError::slug_taken("Product", slug));
            }
        }

        let product = match tables.products.get_mut(&id) {
            Some(product) => product,
            None => return Ok(None),
        };
        patch.apply(product);
        Ok(Some(product.clone()))
    }

    async fn delete_product(&self, id: i32) -> StoreResult<bool> {
        Ok(self.tables.write().await.products.remove(&id).is_some())
    }

    async fn get_admin_by_username(&self, username: &str) -> StoreResult<Option<admin::Model>> {
        let tables = self.tables.read().await;
        Ok(tables
            .admins
            .values()
            .find(|admin| admin.username == username)
            .cloned())
    }

    async fn create_admin(&self, data: NewAdmin) -> StoreResult<admin::Model> {
        let mut tables = self.tables.write().await;
        if tables.admins.values().any(|a| a.username == data.username) {
            return Err(StoreError::username_taken(&data.username));
        }

        let id = next_id(&mut tables.last_admin_id);
        let model = admin::Model {
            id,
            username: data.username,
            password: data.password,
            is_active: data.is_active,
        };

        tables.admins.insert(id, model.clone());
        Ok(model)
    }
}

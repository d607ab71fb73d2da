use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set, TransactionTrait,
};
use std::sync::Arc;
use tracing::warn;

use crate::dto::{
    CarouselImagePatch, CategoryPatch, NewCarouselImage, NewCategory, NewProduct, ProductPatch,
};
use crate::entities::{
    admin::{self, Entity as AdminEntity},
    carousel_image::{self, Entity as CarouselImageEntity},
    category::{self, Entity as CategoryEntity},
    product::{self, Entity as ProductEntity},
};
use crate::storage::{CatalogStore, NewAdmin, StoreError, StoreResult, RELATED_PRODUCTS_LIMIT};

/// Relational backend. Slug checks and the write that follows share one
/// transaction; the unique indexes catch whatever slips past the check.
#[derive(Clone)]
pub struct DatabaseStore {
    db: Arc<DatabaseConnection>,
}

impl DatabaseStore {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        DatabaseStore { db }
    }
}

#[async_trait]
impl CatalogStore for DatabaseStore {
    async fn list_carousel_images(&self) -> StoreResult<Vec<carousel_image::Model>> {
        Ok(CarouselImageEntity::find()
            .filter(carousel_image::Column::IsActive.eq(true))
            .order_by_asc(carousel_image::Column::SortOrder)
            .order_by_asc(carousel_image::Column::Id)
            .all(self.db.as_ref())
            .await?)
    }

    async fn get_carousel_image(&self, id: i32) -> StoreResult<Option<carousel_image::Model>> {
        Ok(CarouselImageEntity::find_by_id(id)
            .one(self.db.as_ref())
            .await?)
    }

    async fn create_carousel_image(
        &self,
        data: NewCarouselImage,
    ) -> StoreResult<carousel_image::Model> {
        Ok(data.into_active_model().insert(self.db.as_ref()).await?)
    }

    async fn update_carousel_image(
        &self,
        id: i32,
        patch: CarouselImagePatch,
    ) -> StoreResult<Option<carousel_image::Model>> {
        let txn = self.db.begin().await?;
        let mut image = match CarouselImageEntity::find_by_id(id).one(&txn).await? {
            Some(image) => image,
            None => return Ok(None),
        };

        patch.apply(&mut image);
        let updated = carousel_image::ActiveModel::from(image)
            .reset_all()
            .update(&txn)
            .await?;
        txn.commit().await?;
        Ok(Some(updated))
    }

    async fn delete_carousel_image(&self, id: i32) -> StoreResult<bool> {
        let result = CarouselImageEntity::delete_by_id(id)
            .exec(self.db.as_ref())
            .await?;
        Ok(result.rows_affected > 0)
    }

    async fn list_categories(&self) -> StoreResult<Vec<category::Model>> {
        Ok(CategoryEntity::find()
            .filter(category::Column::IsActive.eq(true))
            .order_by_asc(category::Column::Id)
            .all(self.db.as_ref())
            .await?)
    }

    async fn get_category(&self, id: i32) -> StoreResult<Option<category::Model>> {
        Ok(CategoryEntity::find_by_id(id).one(self.db.as_ref()).await?)
    }

    async fn get_category_by_slug(&self, slug: &str) -> StoreResult<Option<category::Model>> {
        Ok(CategoryEntity::find()
            .filter(category::Column::Slug.eq(slug))
            .one(self.db.as_ref())
            .await?)
    }

    async fn create_category(&self, data: NewCategory) -> StoreResult<category::Model> {
        let txn = self.db.begin().await?;
        let taken = CategoryEntity::find()
            .filter(category::Column::Slug.eq(data.slug.as_str()))
            .one(&txn)
            .await?;
        if taken.is_some() {
            txn.rollback().await?;
            warn!(slug = %data.slug, "Rejected duplicate category slug");
            return Err(StoreError::slug_taken("Category", &data.slug));
        }

        let slug = data.slug.clone();
        let model = data
            .into_active_model()
            .insert(&txn)
            .await
            .map_err(|err| StoreError::from_write(err, StoreError::slug_taken("Category", &slug)))?;
        txn.commit().await?;
        Ok(model)
    }

    async fn update_category(
        &self,
        id: i32,
        patch: CategoryPatch,
    ) -> StoreResult<Option<category::Model>> {
        let txn = self.db.begin().await?;
        let mut existing = match CategoryEntity::find_by_id(id).one(&txn).await? {
            Some(existing) => existing,
            None => return Ok(None),
        };

        if let Some(slug) = patch.slug.as_deref() {
            let taken = CategoryEntity::find()
                .filter(category::Column::Slug.eq(slug))
                .filter(category::Column::Id.ne(id))
                .one(&txn)
                .await?;
            if taken.is_some() {
                txn.rollback().await?;
                warn!(slug = %slug, id, "Rejected duplicate category slug");
                return Err(StoreError::slug_taken("Category", slug));
            }
        }

        patch.apply(&mut existing);
        let slug = existing.slug.clone();
        let updated = category::ActiveModel::from(existing)
            .reset_all()
            .update(&txn)
            .await
            .map_err(|err| StoreError::from_write(err, StoreError::slug_taken("Category", &slug)))?;
        txn.commit().await?;
        Ok(Some(updated))
    }

    async fn delete_category(&self, id: i32) -> StoreResult<bool> {
        let result = CategoryEntity::delete_by_id(id)
            .exec(self.db.as_ref())
            .await?;
        Ok(result.rows_affected > 0)
    }

    async fn list_products(&self) -> StoreResult<Vec<product::Model>> {
        Ok(ProductEntity::find()
            .order_by_asc(product::Column::Id)
            .all(self.db.as_ref())
            .await?)
    }

    async fn get_product(&self, id: i32) -> StoreResult<Option<product::Model>> {
        Ok(ProductEntity::find_by_id(id).one(self.db.as_ref()).await?)
    }

    async fn get_product_by_slug(&self, slug: &str) -> StoreResult<Option<product::Model>> {
        Ok(ProductEntity::find()
            .filter(product::Column::Slug.eq(slug))
            .one(self.db.as_ref())
            .await?)
    }

    async fn list_products_by_category(
        &self,
        category_id: i32,
    ) -> StoreResult<Vec<product::Model>> {
        Ok(ProductEntity::find()
            .filter(product::Column::CategoryId.eq(category_id))
            .filter(product::Column::IsActive.eq(true))
            .order_by_asc(product::Column::Id)
            .all(self.db.as_ref())
            .await?)
    }

    async fn list_featured_products(&self) -> StoreResult<Vec<product::Model>> {
        Ok(ProductEntity::find()
            .filter(product::Column::IsFeatured.eq(true))
            .filter(product::Column::IsActive.eq(true))
            .order_by_asc(product::Column::Id)
            .all(self.db.as_ref())
            .await?)
    }

    async fn list_related_products(
        &self,
        product_id: i32,
        category_id: i32,
    ) -> StoreResult<Vec<product::Model>> {
        Ok(ProductEntity::find()
            .filter(product::Column::CategoryId.eq(category_id))
            .filter(product::Column::Id.ne(product_id))
            .filter(product::Column::IsActive.eq(true))
            .order_by_asc(product::Column::Id)
            .limit(RELATED_PRODUCTS_LIMIT as u64)
            .all(self.db.as_ref())
            .await?)
    }

    async fn create_product(&self, data: NewProduct) -> StoreResult<product::Model> {
        let txn = self.db.begin().await?;
        let taken = ProductEntity::find()
            .filter(product::Column::Slug.eq(data.slug.as_str()))
            .one(&txn)
            .await?;
        if taken.is_some() {
            txn.rollback().await?;
            warn!(slug = %data.slug, "Rejected duplicate product slug");
            return Err(StoreError::slug_taken("Product", &data.slug));
        }

        let slug = data.slug.clone();
        let model = data
            .into_active_model()
            .insert(&txn)
            .await
            .map_err(|err| StoreError::from_write(err, StoreError::slug_taken("Product", &slug)))?;
        txn.commit().await?;
        Ok(model)
    }

    async fn update_product(
        &self,
        id: i32,
        patch: ProductPatch,
    ) -> StoreResult<Option<product::Model>> {
        let txn = self.db.begin().await?;
        let mut existing = match ProductEntity::find_by_id(id).one(&txn).await? {
            Some(existing) => existing,
            None => return Ok(None),
        };

        if let Some(slug) = patch.slug.as_deref() {
            let taken = ProductEntity::find()
                .filter(product::Column::Slug.eq(slug))
                .filter(product::Column::Id.ne(id))
                .one(&txn)
                .await?;
            if taken.is_some() {
                txn.rollback().await?;
                warn!(slug = %slug, id, "Rejected duplicate product slug");
                return Err(StoreError::slug_taken("Product", slug));
            }
        }

        patch.apply(&mut existing);
        let slug = existing.slug.clone();
        let updated = product::ActiveModel::from(existing)
            .reset_all()
            .update(&txn)
            .await
            .map_err(|err| StoreError::from_write(err, StoreError::slug_taken("Product", &slug)))?;
        txn.commit().await?;
        Ok(Some(updated))
    }

    async fn delete_product(&self, id: i32) -> StoreResult<bool> {
        let result = ProductEntity::delete_by_id(id)
            .exec(self.db.as_ref())
            .await?;
        Ok(result.rows_affected > 0)
    }

    async fn get_admin_by_username(&self, username: &str) -> StoreResult<Option<admin::Model>> {
        Ok(AdminEntity::find()
            .filter(admin::Column::Username.eq(username))
            .one(self.db.as_ref())
            .await?)
    }

    async fn create_admin(&self, data: NewAdmin) -> StoreResult<admin::Model> {
        let new_admin = admin::ActiveModel {
            username: Set(data.username.clone()),
            password: Set(data.password),
            is_active: Set(data.is_active),
            ..Default::default()
        };

        new_admin
            .insert(self.db.as_ref())
            .await
            .map_err(|err| StoreError::from_write(err, StoreError::username_taken(&data.username)))
    }
}

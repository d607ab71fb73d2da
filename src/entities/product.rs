use sea_orm::entity::prelude::*;
use serde::Serialize;

use crate::entities::StringList;

// category_id is a soft reference: no foreign key, so deleting a category
// leaves its products untouched on every backend.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "products")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub price: Option<String>,
    pub image_url: Option<String>,
    #[sea_orm(column_type = "Json", nullable)]
    pub images: Option<StringList>,
    pub category_id: Option<i32>,
    #[sea_orm(default_value = false)]
    pub is_featured: bool,
    #[sea_orm(default_value = true)]
    pub is_active: bool,
    #[sea_orm(unique)]
    pub slug: String,
    pub youtube_url: Option<String>,
    #[sea_orm(column_type = "Json", nullable)]
    pub features: Option<StringList>,
    #[sea_orm(column_type = "Json", nullable)]
    pub specifications: Option<StringList>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

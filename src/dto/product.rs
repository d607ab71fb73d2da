use sea_orm::{ActiveValue::NotSet, Set};
use serde::Deserialize;
use validator::Validate;

use crate::dto::{merge, present, SLUG_REGEX};
use crate::entities::{product, StringList};

#[derive(Clone, Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    pub description: Option<String>,
    pub price: Option<String>,
    pub image_url: Option<String>,
    pub images: Option<Vec<String>>,
    pub category_id: Option<i32>,
    pub is_featured: Option<bool>,
    pub is_active: Option<bool>,
    #[validate(regex(
        path = *SLUG_REGEX,
        message = "Slug may only contain lowercase letters, digits and single dashes"
    ))]
    pub slug: String,
    pub youtube_url: Option<String>,
    pub features: Option<Vec<String>>,
    pub specifications: Option<Vec<String>>,
}

impl NewProduct {
    pub fn into_active_model(self) -> product::ActiveModel {
        product::ActiveModel {
            id: NotSet,
            name: Set(self.name),
            description: Set(self.description),
            price: Set(self.price),
            image_url: Set(self.image_url),
            images: Set(self.images.map(StringList)),
            category_id: Set(self.category_id),
            is_featured: Set(self.is_featured.unwrap_or(false)),
            is_active: Set(self.is_active.unwrap_or(true)),
            slug: Set(self.slug),
            youtube_url: Set(self.youtube_url),
            features: Set(self.features.map(StringList)),
            specifications: Set(self.specifications.map(StringList)),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProductPatch {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub price: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub image_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub images: Option<Option<Vec<String>>>,
    #[serde(default, deserialize_with = "present")]
    pub category_id: Option<Option<i32>>,
    pub is_featured: Option<bool>,
    pub is_active: Option<bool>,
    #[validate(regex(
        path = *SLUG_REGEX,
        message = "Slug may only contain lowercase letters, digits and single dashes"
    ))]
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub youtube_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub features: Option<Option<Vec<String>>>,
    #[serde(default, deserialize_with = "present")]
    pub specifications: Option<Option<Vec<String>>>,
}

impl ProductPatch {
    pub fn apply(self, model: &mut product::Model) {
        merge(&mut model.name, self.name);
        merge(&mut model.description, self.description);
        merge(&mut model.price, self.price);
        merge(&mut model.image_url, self.image_url);
        merge(&mut model.images, self.images.map(|list| list.map(StringList)));
        merge(&mut model.category_id, self.category_id);
        merge(&mut model.is_featured, self.is_featured);
        merge(&mut model.is_active, self.is_active);
        merge(&mut model.slug, self.slug);
        merge(&mut model.youtube_url, self.youtube_url);
        merge(&mut model.features, self.features.map(|list| list.map(StringList)));
        merge(
            &mut model.specifications,
            self.specifications.map(|list| list.map(StringList)),
        );
    }
}

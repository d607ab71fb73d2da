use sea_orm::{ActiveValue::NotSet, Set};
use serde::Deserialize;
use validator::Validate;

use crate::dto::{merge, present, SLUG_REGEX};
use crate::entities::category;

#[derive(Clone, Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewCategory {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    #[validate(regex(
        path = *SLUG_REGEX,
        message = "Slug may only contain lowercase letters, digits and single dashes"
    ))]
    pub slug: String,
    pub is_active: Option<bool>,
}

impl NewCategory {
    pub fn into_active_model(self) -> category::ActiveModel {
        category::ActiveModel {
            id: NotSet,
            name: Set(self.name),
            description: Set(self.description),
            image_url: Set(self.image_url),
            slug: Set(self.slug),
            is_active: Set(self.is_active.unwrap_or(true)),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPatch {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub image_url: Option<Option<String>>,
    #[validate(regex(
        path = *SLUG_REGEX,
        message = "Slug may only contain lowercase letters, digits and single dashes"
    ))]
    pub slug: Option<String>,
    pub is_active: Option<bool>,
}

impl CategoryPatch {
    pub fn apply(self, model: &mut category::Model) {
        merge(&mut model.name, self.name);
        merge(&mut model.description, self.description);
        merge(&mut model.image_url, self.image_url);
        merge(&mut model.slug, self.slug);
        merge(&mut model.is_active, self.is_active);
    }
}

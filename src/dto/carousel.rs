use sea_orm::{ActiveValue::NotSet, Set};
use serde::Deserialize;
use validator::Validate;

use crate::dto::{merge, present};
use crate::entities::carousel_image;

#[derive(Clone, Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewCarouselImage {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Image URL is required"))]
    pub image_url: String,
    pub link_url: Option<String>,
    pub order: Option<i32>,
    pub is_active: Option<bool>,
}

impl NewCarouselImage {
    pub fn into_active_model(self) -> carousel_image::ActiveModel {
        carousel_image::ActiveModel {
            id: NotSet,
            title: Set(self.title),
            image_url: Set(self.image_url),
            link_url: Set(self.link_url),
            sort_order: Set(self.order.unwrap_or(0)),
            is_active: Set(self.is_active.unwrap_or(true)),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CarouselImagePatch {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: Option<String>,
    #[validate(length(min = 1, message = "Image URL is required"))]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub link_url: Option<Option<String>>,
    pub order: Option<i32>,
    pub is_active: Option<bool>,
}

impl CarouselImagePatch {
    pub fn apply(self, model: &mut carousel_image::Model) {
        merge(&mut model.title, self.title);
        merge(&mut model.image_url, self.image_url);
        merge(&mut model.link_url, self.link_url);
        merge(&mut model.sort_order, self.order);
        merge(&mut model.is_active, self.is_active);
    }
}

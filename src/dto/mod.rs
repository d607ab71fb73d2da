pub mod auth;
pub mod carousel;
pub mod category;
pub mod product;
pub mod upload;

use async_trait::async_trait;
use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{de::DeserializeOwned, Deserialize, Deserializer};
use validator::Validate;

use crate::error::{ApiError, FieldError};

pub use auth::LoginRequest;
pub use carousel::{CarouselImagePatch, NewCarouselImage};
pub use category::{CategoryPatch, NewCategory};
pub use product::{NewProduct, ProductPatch};
pub use upload::UploadImage;

pub(crate) static SLUG_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").unwrap());

/// Json body that has already passed `Validate`.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<T>::from_request(req, state)
            .await
            .map_err(invalid_body)?;

        payload.validate()?;
        Ok(ValidatedJson(payload))
    }
}

/// Reports a body that could not be read or parsed as a field error on
/// `body`.
pub(crate) fn invalid_body(rejection: JsonRejection) -> ApiError {
    ApiError::Validation(vec![FieldError::new("body", rejection.body_text())])
}

// Distinguishes an absent field (None) from an explicit null (Some(None)).
pub(crate) fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

pub(crate) fn merge<T>(target: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *target = value;
    }
}

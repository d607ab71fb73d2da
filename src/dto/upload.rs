use serde::Deserialize;
use validator::Validate;

#[derive(Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UploadImage {
    #[validate(length(min = 1, message = "Missing required field: base64Data"))]
    pub base64_data: String,
    #[validate(length(min = 1, message = "Missing required field: filename"))]
    pub filename: String,
}

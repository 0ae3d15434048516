use axum::extract::Multipart;
use medivoice_core::domain::recognition::value_objects::ImageInput;

use crate::application::http::server::api_entities::api_error::ApiError;

pub const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024; // 10MB
pub const IMAGE_FIELD: &str = "image";

/// Reads the `image` part of a multipart upload. Other parts are ignored.
pub async fn read_image(mut multipart: Multipart) -> Result<ImageInput, ApiError> {
    let mut image: Option<ImageInput> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read multipart field: {}", e)))?
    {
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }

        let mime_type = field.content_type().map(|c| c.to_string());
        let data = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadRequest(format!("Failed to read image: {}", e)))?;

        if data.is_empty() {
            return Err(ApiError::BadRequest("Image is empty".to_string()));
        }

        if data.len() > MAX_IMAGE_SIZE {
            return Err(ApiError::BadRequest(format!(
                "Image too large. Max size is {} bytes",
                MAX_IMAGE_SIZE
            )));
        }

        image = Some(ImageInput::new(data.to_vec(), mime_type));
    }

    image.ok_or_else(|| ApiError::BadRequest("Missing image field".to_string()))
}

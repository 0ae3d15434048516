pub const DEFAULT_IMAGE_MIME_TYPE: &str = "image/jpeg";

/// Raw image handed to the recognizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageInput {
    pub data: Vec<u8>,
    pub mime_type: String,
}

impl ImageInput {
    pub fn new(data: Vec<u8>, mime_type: Option<String>) -> Self {
        Self {
            data,
            mime_type: mime_type
                .filter(|m| m.starts_with("image/"))
                .unwrap_or_else(|| DEFAULT_IMAGE_MIME_TYPE.to_string()),
        }
    }
}

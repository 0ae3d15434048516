use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    medicine::entities::{MedicineRecord, ScannedMedicine},
    recognition::value_objects::ImageInput,
};

/// LLM Client trait for calling AI models
pub trait LLMClient: Send + Sync {
    fn generate_with_image(
        &self,
        prompt: String,
        image: ImageInput,
        response_schema: serde_json::Value,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Turns photos into structured records.
///
/// "Nothing found" is an empty or `None` result. Errors are reserved for a
/// failing or misbehaving recognizer.
pub trait ImageRecognizer: Send + Sync {
    fn extract_prescription(
        &self,
        image: ImageInput,
    ) -> impl Future<Output = Result<Vec<MedicineRecord>, CoreError>> + Send;

    fn recognize_medicine(
        &self,
        image: ImageInput,
    ) -> impl Future<Output = Result<Option<ScannedMedicine>, CoreError>> + Send;

    /// Identifies a food, restricted to `vocabulary`. Returns a canonical
    /// name from the vocabulary or `None`.
    fn recognize_food(
        &self,
        image: ImageInput,
        vocabulary: Vec<String>,
    ) -> impl Future<Output = Result<Option<String>, CoreError>> + Send;
}

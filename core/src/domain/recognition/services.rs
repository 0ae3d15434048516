use serde::Deserialize;

use crate::domain::{
    common::entities::app_errors::CoreError,
    medicine::entities::{MedicineRecord, ScannedMedicine, Timing},
    nutrition::entities::canonical_food_name,
    recognition::{
        ports::{ImageRecognizer, LLMClient},
        schema::{get_food_recognition_schema, get_medicine_list_schema},
        value_objects::ImageInput,
    },
};

const PRESCRIPTION_PROMPT: &str = "You are an expert OCR system for medical prescriptions. \
Analyze the provided image of a prescription. Extract all medications listed. For each medication, \
identify its name, dosage (including units like 'mg'), frequency (how many times a day, e.g., 1, 2, 3), \
and timing (determine if it is for morning, afternoon, or night based on instructions). \
Ignore any non-medication text. Provide the output as a JSON array of objects. \
If no medicines are found, return an empty array.";

const MEDICINE_PROMPT: &str = "You are an expert at identifying common medicines. \
Analyze the provided image of a medicine strip or bottle. Identify the medicine from the following list: \
Paracetamol (Dolo-650), Metformin (Glycomet 500), Amlodipine (Amlopres 5), Atorvastatin (Atorva 10), \
Omeprazole (Omez 20), Cetirizine (Cetzine 10), Amoxicillin (Mox 500), Aspirin (Ecosprin 75). \
Extract the medicine name, its dosage, a recommended frequency of 1, and a recommended timing of 'morning'. \
Provide the output as a JSON array containing a single object. \
If you cannot identify the medicine from the list, return an empty array.";

/// [`ImageRecognizer`] that asks a multimodal LLM for JSON constrained by a
/// response schema.
#[derive(Debug, Clone)]
pub struct LlmImageRecognizer<LLM: LLMClient> {
    llm_client: LLM,
}

#[derive(Debug, Deserialize)]
struct MedicinePayload {
    #[serde(default)]
    name: String,
    #[serde(default)]
    dosage: String,
    #[serde(default)]
    frequency: u32,
    #[serde(default)]
    timing: Vec<Timing>,
}

#[derive(Debug, Deserialize)]
struct FoodPayload {
    #[serde(default)]
    food_name: Option<String>,
}

impl<LLM: LLMClient> LlmImageRecognizer<LLM> {
    pub fn new(llm_client: LLM) -> Self {
        Self { llm_client }
    }
}

impl<LLM: LLMClient> ImageRecognizer for LlmImageRecognizer<LLM> {
    async fn extract_prescription(&self, image: ImageInput) -> Result<Vec<MedicineRecord>, CoreError> {
        let raw_response = self
            .llm_client
            .generate_with_image(
                PRESCRIPTION_PROMPT.to_string(),
                image,
                get_medicine_list_schema(),
            )
            .await?;

        parse_prescription(&raw_response)
    }

    async fn recognize_medicine(&self, image: ImageInput) -> Result<Option<ScannedMedicine>, CoreError> {
        let raw_response = self
            .llm_client
            .generate_with_image(MEDICINE_PROMPT.to_string(), image, get_medicine_list_schema())
            .await?;

        parse_scanned_medicine(&raw_response)
    }

    async fn recognize_food(
        &self,
        image: ImageInput,
        vocabulary: Vec<String>,
    ) -> Result<Option<String>, CoreError> {
        let prompt = format!(
            "You are an expert at identifying food items. Analyze the provided image and identify \
             the single main food item. Answer with one of the following names exactly: {}. \
             If the food is not one of them or you are not confident, answer with null.",
            vocabulary.join(", ")
        );

        let raw_response = self
            .llm_client
            .generate_with_image(prompt, image, get_food_recognition_schema(&vocabulary))
            .await?;

        parse_food_name(&raw_response, &vocabulary)
    }
}

fn parse_medicine_payloads(raw_response: &str) -> Result<Vec<MedicinePayload>, CoreError> {
    serde_json::from_str(raw_response.trim()).map_err(|e| {
        tracing::error!("Invalid medicine list format: {}", e);
        CoreError::ExternalServiceError(format!("Invalid medicine list format: {}", e))
    })
}

/// Records without a name are dropped; everything else is kept as read.
pub fn parse_prescription(raw_response: &str) -> Result<Vec<MedicineRecord>, CoreError> {
    let records = parse_medicine_payloads(raw_response)?
        .into_iter()
        .filter(|payload| !payload.name.trim().is_empty())
        .map(|payload| MedicineRecord {
            name: payload.name.trim().to_string(),
            dosage: payload.dosage.trim().to_string(),
            frequency: payload.frequency,
            timing: payload.timing,
        })
        .collect();

    Ok(records)
}

pub fn parse_scanned_medicine(raw_response: &str) -> Result<Option<ScannedMedicine>, CoreError> {
    let scanned = parse_medicine_payloads(raw_response)?
        .into_iter()
        .find(|payload| !payload.name.trim().is_empty())
        .map(|payload| ScannedMedicine {
            name: payload.name.trim().to_string(),
            dosage: payload.dosage.trim().to_string(),
        });

    Ok(scanned)
}

/// A name outside `vocabulary` counts as not identified.
pub fn parse_food_name(raw_response: &str, vocabulary: &[String]) -> Result<Option<String>, CoreError> {
    let payload: FoodPayload = serde_json::from_str(raw_response.trim()).map_err(|e| {
        tracing::error!("Invalid food recognition format: {}", e);
        CoreError::ExternalServiceError(format!("Invalid food recognition format: {}", e))
    })?;

    let Some(raw_name) = payload.food_name else {
        return Ok(None);
    };

    let food_name = canonical_food_name(&raw_name);
    if vocabulary.iter().any(|known| *known == food_name) {
        Ok(Some(food_name))
    } else {
        tracing::debug!("Recognizer answered with unknown food name: {}", raw_name);
        Ok(None)
    }
}

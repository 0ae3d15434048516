use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct VerifyMedicineByNameRequest {
    #[validate(length(min = 1, max = 200, message = "name must be between 1 and 200 characters"))]
    pub name: String,
    #[serde(default)]
    #[validate(length(max = 100, message = "dosage must be at most 100 characters"))]
    pub dosage: String,
}

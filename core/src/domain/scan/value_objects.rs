use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    medicine::entities::{MedicineRecord, Prescription, ScannedMedicine},
    nutrition::entities::NutritionProfile,
    suitability::entities::{HealthCondition, SuitabilityVerdict},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum PrescriptionScan {
    Captured { prescription: Prescription },
    NothingFound,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum MedicineVerification {
    NotIdentified,
    Verified {
        scanned: ScannedMedicine,
        on_prescription: bool,
        /// Prescription lines whose name contains the scanned name. Dosages
        /// are returned as-is and were not compared.
        matches: Vec<MedicineRecord>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum FoodScan {
    NotIdentified,
    UnknownFood {
        food_name: String,
    },
    Evaluated {
        food_name: String,
        nutrition: NutritionProfile,
        condition: HealthCondition,
        verdict: SuitabilityVerdict,
    },
}

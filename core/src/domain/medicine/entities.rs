use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Timing {
    Morning,
    Afternoon,
    Night,
}

/// One prescribed medicine. `timing` keeps the order it was read in and may
/// be empty when the prescription gives no schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MedicineRecord {
    pub name: String,
    pub dosage: String,
    pub frequency: u32,
    pub timing: Vec<Timing>,
}

/// A medicine identified from a package photo. Only used for one match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ScannedMedicine {
    pub name: String,
    pub dosage: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Prescription {
    pub id: Uuid,
    pub medicines: Vec<MedicineRecord>,
    pub captured_at: DateTime<Utc>,
}

impl Prescription {
    pub fn new(medicines: Vec<MedicineRecord>) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            medicines,
            captured_at: now,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.medicines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_prescription_gets_a_time_ordered_id() {
        let before = Utc::now();
        let prescription = Prescription::new(vec![]);

        assert_eq!(prescription.id.get_version_num(), 7);
        assert!(prescription.captured_at >= before);
        assert!(prescription.is_empty());
    }
}

use medivoice_core::domain::suitability::entities::HealthCondition;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct SetConditionRequest {
    pub condition: HealthCondition,
}

use medivoice_core::domain::suitability::entities::HealthCondition;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, IntoParams, ToSchema, Validate)]
#[into_params(parameter_in = Query)]
pub struct AssessFoodParams {
    /// Condition to judge against; the session's condition when omitted.
    pub condition: Option<HealthCondition>,
}

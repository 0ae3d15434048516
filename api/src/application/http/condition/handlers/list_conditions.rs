use medivoice_core::domain::{
    nutrition::entities::Nutrient, suitability::entities::HealthCondition,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::api_entities::{api_error::ApiError, response::Response};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ConditionDescription {
    pub id: HealthCondition,
    pub label: String,
    /// Nutrient checked for this condition, absent for `none`.
    pub nutrient: Option<Nutrient>,
    pub moderate_above: Option<f64>,
    pub avoid_above: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ListConditionsResponse {
    pub data: Vec<ConditionDescription>,
}

impl From<HealthCondition> for ConditionDescription {
    fn from(condition: HealthCondition) -> Self {
        let rule = condition.rule();

        Self {
            id: condition,
            label: condition.label().to_string(),
            nutrient: rule.map(|r| r.nutrient),
            moderate_above: rule.map(|r| r.moderate_above),
            avoid_above: rule.map(|r| r.avoid_above),
        }
    }
}

#[utoipa::path(
    get,
    path = "",
    tag = "condition",
    summary = "List health conditions",
    description = "Lists the selectable health conditions and the nutrient limits applied for each.",
    responses(
        (status = 200, body = ListConditionsResponse)
    ),
)]
pub async fn list_conditions() -> Result<Response<ListConditionsResponse>, ApiError> {
    let data = HealthCondition::ALL
        .into_iter()
        .map(ConditionDescription::from)
        .collect();

    Ok(Response::OK(ListConditionsResponse { data }))
}

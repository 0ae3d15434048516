use axum::{Extension, extract::State};
use medivoice_core::domain::{
    scan::ports::ConditionService, suitability::entities::HealthCondition,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
    session_middleware::SessionContext,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ConditionResponse {
    pub condition: HealthCondition,
    pub label: String,
}

impl From<HealthCondition> for ConditionResponse {
    fn from(condition: HealthCondition) -> Self {
        Self {
            condition,
            label: condition.label().to_string(),
        }
    }
}

#[utoipa::path(
    get,
    path = "",
    tag = "condition",
    summary = "Get the active health condition",
    responses(
        (status = 200, body = ConditionResponse)
    ),
    params(
        ("x-session-id" = Option<String>, Header, description = "Session identifier"),
    ),
)]
pub async fn get_condition(
    State(state): State<AppState>,
    Extension(session): Extension<SessionContext>,
) -> Result<Response<ConditionResponse>, ApiError> {
    let condition = state
        .service
        .get_condition(&session.session_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ConditionResponse::from(condition)))
}

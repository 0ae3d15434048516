use axum::{Extension, extract::State};
use medivoice_core::domain::scan::ports::ConditionService;

use crate::application::{
    http::{
        condition::{handlers::get_condition::ConditionResponse, validators::SetConditionRequest},
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
    },
    session_middleware::SessionContext,
};

#[utoipa::path(
    put,
    path = "",
    tag = "condition",
    summary = "Set the active health condition",
    description = "Replaces the health condition used to judge scanned food for this session.",
    request_body = SetConditionRequest,
    responses(
        (status = 200, body = ConditionResponse),
        (status = 400, description = "Unknown condition")
    ),
    params(
        ("x-session-id" = Option<String>, Header, description = "Session identifier"),
    ),
)]
pub async fn set_condition(
    State(state): State<AppState>,
    Extension(session): Extension<SessionContext>,
    ValidateJson(payload): ValidateJson<SetConditionRequest>,
) -> Result<Response<ConditionResponse>, ApiError> {
    let condition = state
        .service
        .set_condition(&session.session_id, payload.condition)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ConditionResponse::from(condition)))
}

use axum::{Extension, extract::State};
use medivoice_core::domain::scan::ports::PrescriptionService;
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
pub struct ClearPrescriptionResponse {
    pub message: String,
}

#[utoipa::path(
    delete,
    path = "/current",
    tag = "prescription",
    summary = "Clear the active prescription",
    responses(
        (status = 200, body = ClearPrescriptionResponse)
    ),
    params(
        ("x-session-id" = Option<String>, Header, description = "Session identifier"),
    ),
)]
pub async fn clear_prescription(
    State(state): State<AppState>,
    Extension(session): Extension<SessionContext>,
) -> Result<Response<ClearPrescriptionResponse>, ApiError> {
    state
        .service
        .clear_prescription(&session.session_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ClearPrescriptionResponse {
        message: "Prescription cleared".to_string(),
    }))
}

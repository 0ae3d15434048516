use axum::{Extension, extract::State};
use medivoice_core::domain::{medicine::entities::Prescription, scan::ports::PrescriptionService};
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
pub struct GetPrescriptionResponse {
    pub data: Prescription,
}

#[utoipa::path(
    get,
    path = "/current",
    tag = "prescription",
    summary = "Get the active prescription",
    responses(
        (status = 200, body = GetPrescriptionResponse),
        (status = 404, description = "No prescription on file")
    ),
    params(
        ("x-session-id" = Option<String>, Header, description = "Session identifier"),
    ),
)]
pub async fn get_prescription(
    State(state): State<AppState>,
    Extension(session): Extension<SessionContext>,
) -> Result<Response<GetPrescriptionResponse>, ApiError> {
    let prescription = state
        .service
        .get_prescription(&session.session_id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound("No prescription on file".to_string()))?;

    Ok(Response::OK(GetPrescriptionResponse { data: prescription }))
}

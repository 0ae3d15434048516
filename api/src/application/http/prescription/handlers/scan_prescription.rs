use axum::{
    Extension,
    extract::{Multipart, State},
};
use medivoice_core::domain::scan::{ports::PrescriptionService, value_objects::PrescriptionScan};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    http::{
        image_upload::read_image,
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
    },
    session_middleware::SessionContext,
};

pub const NOTHING_FOUND_MESSAGE: &str = "Sorry, we couldn't find any medicine information in the image. Please try again with a clearer picture.";

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ScanPrescriptionResponse {
    pub data: PrescriptionScan,
    pub message: Option<String>,
}

#[utoipa::path(
    post,
    path = "/scan",
    tag = "prescription",
    summary = "Scan a prescription",
    description = "Extracts the medicines from a prescription photo (multipart field `image`) and makes them the session's active prescription.",
    responses(
        (status = 201, body = ScanPrescriptionResponse, description = "Prescription captured"),
        (status = 200, body = ScanPrescriptionResponse, description = "No medicine found in the image"),
        (status = 400, description = "Missing or oversized image"),
        (status = 502, description = "Image recognition failed")
    ),
    params(
        ("x-session-id" = Option<String>, Header, description = "Session identifier"),
    ),
)]
pub async fn scan_prescription(
    State(state): State<AppState>,
    Extension(session): Extension<SessionContext>,
    multipart: Multipart,
) -> Result<Response<ScanPrescriptionResponse>, ApiError> {
    let image = read_image(multipart).await?;

    let outcome = state
        .service
        .scan_prescription(&session.session_id, image)
        .await
        .map_err(ApiError::from)?;

    Ok(match outcome {
        PrescriptionScan::Captured { .. } => Response::Created(ScanPrescriptionResponse {
            data: outcome,
            message: None,
        }),
        PrescriptionScan::NothingFound => Response::OK(ScanPrescriptionResponse {
            data: outcome,
            message: Some(NOTHING_FOUND_MESSAGE.to_string()),
        }),
    })
}

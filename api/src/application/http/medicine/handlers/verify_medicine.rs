use axum::{
    Extension,
    extract::{Multipart, State},
};
use medivoice_core::domain::scan::{ports::MedicineService, value_objects::MedicineVerification};
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

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct VerifyMedicineResponse {
    pub data: MedicineVerification,
    pub message: String,
}

impl From<MedicineVerification> for VerifyMedicineResponse {
    fn from(verification: MedicineVerification) -> Self {
        let message = match &verification {
            MedicineVerification::NotIdentified => {
                "Sorry, we couldn't identify this medicine. Please try again with a clearer picture."
                    .to_string()
            }
            MedicineVerification::Verified {
                scanned,
                on_prescription: true,
                ..
            } => format!("{} is on your prescription.", scanned.name),
            MedicineVerification::Verified { scanned, .. } => {
                format!("{} is not on your prescription.", scanned.name)
            }
        };

        Self {
            data: verification,
            message,
        }
    }
}

#[utoipa::path(
    post,
    path = "/verify",
    tag = "medicine",
    summary = "Verify a medicine photo",
    description = "Identifies a medicine from a photo (multipart field `image`) and checks it against the active prescription. Dosage is not compared.",
    responses(
        (status = 200, body = VerifyMedicineResponse),
        (status = 400, description = "Missing or oversized image"),
        (status = 409, description = "No prescription on file"),
        (status = 502, description = "Image recognition failed")
    ),
    params(
        ("x-session-id" = Option<String>, Header, description = "Session identifier"),
    ),
)]
pub async fn verify_medicine(
    State(state): State<AppState>,
    Extension(session): Extension<SessionContext>,
    multipart: Multipart,
) -> Result<Response<VerifyMedicineResponse>, ApiError> {
    let image = read_image(multipart).await?;

    let verification = state
        .service
        .verify_medicine(&session.session_id, image)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(VerifyMedicineResponse::from(verification)))
}

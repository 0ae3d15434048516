use axum::{Extension, extract::State};
use medivoice_core::domain::{medicine::entities::ScannedMedicine, scan::ports::MedicineService};

use crate::application::{
    http::{
        medicine::{
            handlers::verify_medicine::VerifyMedicineResponse,
            validators::VerifyMedicineByNameRequest,
        },
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
    post,
    path = "/verify-name",
    tag = "medicine",
    summary = "Verify a medicine by name",
    description = "Checks a typed-in medicine against the active prescription.",
    request_body = VerifyMedicineByNameRequest,
    responses(
        (status = 200, body = VerifyMedicineResponse),
        (status = 400, description = "Invalid medicine name"),
        (status = 409, description = "No prescription on file")
    ),
    params(
        ("x-session-id" = Option<String>, Header, description = "Session identifier"),
    ),
)]
pub async fn verify_medicine_by_name(
    State(state): State<AppState>,
    Extension(session): Extension<SessionContext>,
    ValidateJson(payload): ValidateJson<VerifyMedicineByNameRequest>,
) -> Result<Response<VerifyMedicineResponse>, ApiError> {
    let verification = state
        .service
        .verify_medicine_by_name(
            &session.session_id,
            ScannedMedicine {
                name: payload.name.trim().to_string(),
                dosage: payload.dosage.trim().to_string(),
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(VerifyMedicineResponse::from(verification)))
}

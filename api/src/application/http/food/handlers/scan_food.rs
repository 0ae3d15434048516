use axum::{
    Extension,
    extract::{Multipart, State},
};
use medivoice_core::domain::scan::{ports::FoodService, value_objects::FoodScan};
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
pub struct FoodScanResponse {
    pub data: FoodScan,
    pub message: Option<String>,
}

impl From<FoodScan> for FoodScanResponse {
    fn from(scan: FoodScan) -> Self {
        let message = match &scan {
            FoodScan::NotIdentified => Some(
                "Sorry, we couldn't identify this food. Please try again with a clearer picture."
                    .to_string(),
            ),
            FoodScan::UnknownFood { food_name } => Some(format!(
                "Sorry, we don't have nutrition information for {}.",
                food_name
            )),
            FoodScan::Evaluated { .. } => None,
        };

        Self {
            data: scan,
            message,
        }
    }
}

#[utoipa::path(
    post,
    path = "/scan",
    tag = "food",
    summary = "Scan a food",
    description = "Identifies a food from a photo (multipart field `image`) and judges it against the session's health condition.",
    responses(
        (status = 200, body = FoodScanResponse),
        (status = 400, description = "Missing or oversized image"),
        (status = 502, description = "Image recognition failed")
    ),
    params(
        ("x-session-id" = Option<String>, Header, description = "Session identifier"),
    ),
)]
pub async fn scan_food(
    State(state): State<AppState>,
    Extension(session): Extension<SessionContext>,
    multipart: Multipart,
) -> Result<Response<FoodScanResponse>, ApiError> {
    let image = read_image(multipart).await?;

    let scan = state
        .service
        .scan_food(&session.session_id, image)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(FoodScanResponse::from(scan)))
}

use axum::{
    Extension,
    extract::{Path, State},
};
use medivoice_core::domain::scan::ports::{ConditionService, FoodService};

use crate::application::{
    http::{
        food::{handlers::scan_food::FoodScanResponse, validators::AssessFoodParams},
        server::{
            api_entities::{
                api_error::{ApiError, ValidateQuery},
                response::Response,
            },
            app_state::AppState,
        },
    },
    session_middleware::SessionContext,
};

#[utoipa::path(
    get,
    path = "/{food_name}/assessment",
    tag = "food",
    summary = "Assess a known food",
    description = "Judges a food by name against a health condition without a photo.",
    responses(
        (status = 200, body = FoodScanResponse),
        (status = 400, description = "Unknown condition")
    ),
    params(
        ("food_name" = String, Path, description = "Food name"),
        ("x-session-id" = Option<String>, Header, description = "Session identifier"),
        AssessFoodParams
    ),
)]
pub async fn assess_food(
    Path(food_name): Path<String>,
    ValidateQuery(params): ValidateQuery<AssessFoodParams>,
    State(state): State<AppState>,
    Extension(session): Extension<SessionContext>,
) -> Result<Response<FoodScanResponse>, ApiError> {
    let condition = match params.condition {
        Some(condition) => condition,
        None => state
            .service
            .get_condition(&session.session_id)
            .await
            .map_err(ApiError::from)?,
    };

    let scan = state.service.assess_food(&food_name, condition);

    Ok(Response::OK(FoodScanResponse::from(scan)))
}

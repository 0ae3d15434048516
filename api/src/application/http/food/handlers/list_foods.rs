use axum::extract::State;
use medivoice_core::domain::nutrition::ports::NutritionCatalog;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ListFoodsResponse {
    pub data: Vec<String>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "food",
    summary = "List known foods",
    description = "Names the food scanner can recognize and look up.",
    responses(
        (status = 200, body = ListFoodsResponse)
    ),
)]
pub async fn list_foods(
    State(state): State<AppState>,
) -> Result<Response<ListFoodsResponse>, ApiError> {
    let data = state.service.nutrition_catalog().food_names();

    Ok(Response::OK(ListFoodsResponse { data }))
}

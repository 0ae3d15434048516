use axum::extract::{Path, State};
use medivoice_core::domain::nutrition::{
    entities::{NutritionProfile, canonical_food_name},
    ports::NutritionCatalog,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetFoodResponse {
    pub food_name: String,
    pub nutrition: NutritionProfile,
}

#[utoipa::path(
    get,
    path = "/{food_name}",
    tag = "food",
    summary = "Look up nutrition",
    description = "Nutrition per reference serving for a known food. Serving sizes differ between foods.",
    responses(
        (status = 200, body = GetFoodResponse),
        (status = 404, description = "Unknown food")
    ),
    params(
        ("food_name" = String, Path, description = "Food name"),
    ),
)]
pub async fn get_food(
    Path(food_name): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<GetFoodResponse>, ApiError> {
    let food_name = canonical_food_name(&food_name);

    let nutrition = state
        .service
        .nutrition_catalog()
        .lookup(&food_name)
        .ok_or_else(|| ApiError::NotFound(format!("Unknown food '{}'", food_name)))?;

    Ok(Response::OK(GetFoodResponse {
        food_name,
        nutrition,
    }))
}

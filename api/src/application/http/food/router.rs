use super::handlers::{
    assess_food::{__path_assess_food, assess_food},
    get_food::{__path_get_food, get_food},
    list_foods::{__path_list_foods, list_foods},
    scan_food::{__path_scan_food, scan_food},
};
use crate::application::{
    http::server::app_state::AppState, session_middleware::session_middleware,
};
use axum::{
    Router, middleware,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(list_foods, get_food, assess_food, scan_food))]
pub struct FoodApiDoc;

pub fn food_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{}/foods", root_path), get(list_foods))
        .route(&format!("{}/foods/scan", root_path), post(scan_food))
        .route(&format!("{}/foods/{{food_name}}", root_path), get(get_food))
        .route(
            &format!("{}/foods/{{food_name}}/assessment", root_path),
            get(assess_food),
        )
        .layer(middleware::from_fn(session_middleware))
}

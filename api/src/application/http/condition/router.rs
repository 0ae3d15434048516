use super::handlers::{
    get_condition::{__path_get_condition, get_condition},
    list_conditions::{__path_list_conditions, list_conditions},
    set_condition::{__path_set_condition, set_condition},
};
use crate::application::{
    http::server::app_state::AppState, session_middleware::session_middleware,
};
use axum::{Router, middleware, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(list_conditions))]
pub struct ConditionApiDoc;

#[derive(OpenApi)]
#[openapi(paths(get_condition, set_condition))]
pub struct SessionConditionApiDoc;

pub fn condition_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{}/conditions", root_path), get(list_conditions))
        .route(
            &format!("{}/session/condition", root_path),
            get(get_condition).put(set_condition),
        )
        .layer(middleware::from_fn(session_middleware))
}

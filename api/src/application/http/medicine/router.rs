use super::handlers::{
    verify_medicine::{__path_verify_medicine, verify_medicine},
    verify_medicine_by_name::{__path_verify_medicine_by_name, verify_medicine_by_name},
};
use crate::application::{
    http::server::app_state::AppState, session_middleware::session_middleware,
};
use axum::{Router, middleware, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(verify_medicine, verify_medicine_by_name))]
pub struct MedicineApiDoc;

pub fn medicine_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{}/medicines/verify", root_path),
            post(verify_medicine),
        )
        .route(
            &format!("{}/medicines/verify-name", root_path),
            post(verify_medicine_by_name),
        )
        .layer(middleware::from_fn(session_middleware))
}

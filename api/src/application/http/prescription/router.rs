use super::handlers::{
    clear_prescription::{__path_clear_prescription, clear_prescription},
    get_prescription::{__path_get_prescription, get_prescription},
    scan_prescription::{__path_scan_prescription, scan_prescription},
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
#[openapi(paths(scan_prescription, get_prescription, clear_prescription))]
pub struct PrescriptionApiDoc;

pub fn prescription_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{}/prescriptions/scan", root_path),
            post(scan_prescription),
        )
        .route(
            &format!("{}/prescriptions/current", root_path),
            get(get_prescription).delete(clear_prescription),
        )
        .layer(middleware::from_fn(session_middleware))
}

use axum::{extract::Request, middleware::Next, response::Response};

use crate::application::http::server::api_entities::api_error::ApiError;

pub const SESSION_HEADER: &str = "x-session-id";
pub const DEFAULT_SESSION_ID: &str = "default";
const MAX_SESSION_ID_LEN: usize = 128;

/// Session context stored in request extensions
#[derive(Clone, Debug)]
pub struct SessionContext {
    pub session_id: String,
}

/// Reads the X-Session-Id header into a [`SessionContext`].
/// Requests without the header share the default session.
pub async fn session_middleware(mut req: Request, next: Next) -> Result<Response, ApiError> {
    let session_id = match req.headers().get(SESSION_HEADER) {
        Some(value) => parse_session_id(value.to_str().ok()).ok_or_else(|| {
            ApiError::BadRequest(format!(
                "{} must be 1 to {} visible characters",
                SESSION_HEADER, MAX_SESSION_ID_LEN
            ))
        })?,
        None => DEFAULT_SESSION_ID.to_string(),
    };

    req.extensions_mut().insert(SessionContext { session_id });

    Ok(next.run(req).await)
}

fn parse_session_id(raw: Option<&str>) -> Option<String> {
    let session_id = raw?.trim();
    if session_id.is_empty() || session_id.len() > MAX_SESSION_ID_LEN {
        return None;
    }
    Some(session_id.to_string())
}

use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Query, Request},
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use medivoice_core::domain::common::entities::app_errors::CoreError;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use utoipa::ToSchema;
use validator::Validate;

pub const NO_PRESCRIPTION_MESSAGE: &str = "Please scan your prescription first.";
pub const TRY_AGAIN_MESSAGE: &str =
    "We could not analyze the image right now. Please try again.";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    BadGateway(String),
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ApiErrorResponse {
    pub code: String,
    pub status: u16,
    pub message: String,
}

impl ApiError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "E_BAD_REQUEST"),
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "E_NOT_FOUND"),
            ApiError::Conflict(_) => (StatusCode::CONFLICT, "E_NO_PRESCRIPTION"),
            ApiError::BadGateway(_) => (StatusCode::BAD_GATEWAY, "E_RECOGNITION_FAILED"),
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::NoPrescriptionOnFile => ApiError::Conflict(NO_PRESCRIPTION_MESSAGE.to_string()),
            CoreError::Invalid(message) => ApiError::BadRequest(message),
            CoreError::ExternalServiceError(message) => {
                tracing::error!("Image recognition failed: {}", message);
                ApiError::BadGateway(TRY_AGAIN_MESSAGE.to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        let body = ApiErrorResponse {
            code: code.to_string(),
            status: status.as_u16(),
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// JSON extractor that also runs the payload's `validator` rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

        value
            .validate()
            .map_err(|e| ApiError::BadRequest(e.to_string()))?;

        Ok(ValidateJson(value))
    }
}

/// Query string extractor that reports bad parameters as [`ApiError::BadRequest`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidateQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

        value
            .validate()
            .map_err(|e| ApiError::BadRequest(e.to_string()))?;

        Ok(ValidateQuery(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_prescription_maps_to_conflict_with_guidance() {
        let error = ApiError::from(CoreError::NoPrescriptionOnFile);

        assert_eq!(error.status_and_code().0, StatusCode::CONFLICT);
        assert_eq!(error.to_string(), NO_PRESCRIPTION_MESSAGE);
    }

    #[test]
    fn recognition_failures_hide_details() {
        let error = ApiError::from(CoreError::ExternalServiceError(
            "LLM API returned error: 500".to_string(),
        ));

        assert_eq!(error.status_and_code().0, StatusCode::BAD_GATEWAY);
        assert_eq!(error.to_string(), TRY_AGAIN_MESSAGE);
    }

    #[test]
    fn invalid_input_maps_to_bad_request() {
        let error = ApiError::from(CoreError::Invalid("medicine name must not be empty".to_string()));

        assert_eq!(error.status_and_code(), (StatusCode::BAD_REQUEST, "E_BAD_REQUEST"));
        assert_eq!(error.to_string(), "medicine name must not be empty");
    }
}

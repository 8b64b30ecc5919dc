//! Error handling - maps failures onto HTTP responses.

use std::collections::BTreeMap;
use std::fmt;

use actix_web::{HttpRequest, HttpResponse, ResponseError, error, http::StatusCode};
use validator::ValidationErrors;

use quill_core::DomainError;
use quill_shared::ErrorResponse;

/// Application-level error type.
///
/// `NotFound` and `BadRequest` render as RFC 7807 bodies; `Validation`
/// renders as a map from field name to message.
#[derive(Debug)]
pub enum AppError {
    NotFound,
    /// Rejected request; `instance` is the request path.
    BadRequest { detail: String, instance: String },
    Validation(BTreeMap<String, String>),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound => write!(f, "Not found"),
            AppError::BadRequest { detail, .. } => write!(f, "Bad request: {}", detail),
            AppError::Validation(errors) => write!(f, "Validation errors: {:?}", errors),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::BadRequest { .. } | AppError::Validation(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut response = HttpResponse::build(self.status_code());
        match self {
            AppError::NotFound => response.json(ErrorResponse::not_found()),
            AppError::BadRequest { detail, instance } => {
                response.json(ErrorResponse::bad_request(detail).with_instance(instance))
            }
            AppError::Validation(errors) => response.json(errors),
        }
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound { entity_type, id } => {
                tracing::debug!(entity_type, id, "Entity not found");
                AppError::NotFound
            }
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let fields = errors
            .field_errors()
            .into_iter()
            .map(|(field, errors)| {
                let message = errors
                    .first()
                    .map(|e| match &e.message {
                        Some(message) => message.to_string(),
                        None => e.code.to_string(),
                    })
                    .unwrap_or_default();
                (field.to_string(), message)
            })
            .collect();
        AppError::Validation(fields)
    }
}

/// Malformed or missing JSON body.
pub fn json_error_handler(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::debug!(path = req.path(), error = %err, "Rejected JSON body");
    AppError::BadRequest {
        detail: err.to_string(),
        instance: req.path().to_string(),
    }
    .into()
}

/// Malformed query string.
pub fn query_error_handler(err: error::QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::debug!(path = req.path(), error = %err, "Rejected query string");
    AppError::BadRequest {
        detail: err.to_string(),
        instance: req.path().to_string(),
    }
    .into()
}

/// A path segment that does not parse as an id cannot name a post.
pub fn path_error_handler(err: error::PathError, req: &HttpRequest) -> actix_web::Error {
    tracing::debug!(path = req.path(), error = %err, "Unroutable path parameter");
    AppError::NotFound.into()
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use actix_web::body::to_bytes;
    use validator::ValidationError;

    use super::*;

    #[test]
    fn test_domain_not_found_maps_to_404() {
        let err: AppError = DomainError::post_not_found(3).into();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_validation_body_is_keyed_by_field() {
        let mut error = ValidationError::new("length");
        error.message = Some("too long".into());
        let mut errors = ValidationErrors::new();
        errors.add("content", error);

        let err = AppError::from(errors);
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

        let body = to_bytes(err.error_response().into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json, serde_json::json!({ "content": "too long" }));
    }

    #[test]
    fn test_validation_falls_back_to_code() {
        let mut errors = ValidationErrors::new();
        errors.add("content", ValidationError::new("required"));

        match AppError::from(errors) {
            AppError::Validation(fields) => assert_eq!(fields["content"], "required"),
            other => panic!("unexpected error: {other}"),
        }
    }
}

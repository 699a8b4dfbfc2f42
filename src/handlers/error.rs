//! Mapping from failures to HTTP responses.

use actix_web::error::{JsonPayloadError, PathError};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;
use validator::ValidationErrors;

use crate::services::ServiceError;

#[derive(Debug, Clone, Serialize, PartialEq, Eq, ToSchema)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Body of every non-2xx response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(value_type = String)]
    code: &'static str,
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<Vec<FieldError>>,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("validation failed")]
    Validation(Vec<FieldError>),

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error(transparent)]
    Service(#[from] ServiceError),
}

impl ApiError {
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "VALIDATION_ERROR",
            ApiError::BadRequest(_) => "BAD_REQUEST",
            ApiError::Service(ServiceError::NotFound { .. }) => "NOT_FOUND",
            ApiError::Service(ServiceError::Consistency { .. }) => "HOTEL_ROOM_MISMATCH",
            ApiError::Service(ServiceError::Storage(_)) => "INTERNAL_ERROR",
            ApiError::Service(ServiceError::Timeout(_)) => "TIMEOUT",
        }
    }

    /// Reports validation failures under the names the client used.
    pub fn with_wire_names(self, names: &[(&str, &str)]) -> Self {
        match self {
            ApiError::Validation(mut details) => {
                for detail in &mut details {
                    if let Some((_, wire)) = names.iter().find(|(field, _)| *field == detail.field) {
                        detail.field = wire.to_string();
                    }
                }
                details.sort_by(|a, b| a.field.cmp(&b.field));
                ApiError::Validation(details)
            }
            other => other,
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        let mut details: Vec<FieldError> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |error| FieldError {
                    field: field.to_string(),
                    message: error
                        .message
                        .as_ref()
                        .map(|message| message.to_string())
                        .unwrap_or_else(|| error.code.to_string()),
                })
            })
            .collect();
        details.sort_by(|a, b| a.field.cmp(&b.field));
        ApiError::Validation(details)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Service(ServiceError::NotFound { .. }) => StatusCode::NOT_FOUND,
            ApiError::Service(ServiceError::Consistency { .. }) => StatusCode::CONFLICT,
            ApiError::Service(ServiceError::Storage(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Service(ServiceError::Timeout(_)) => StatusCode::GATEWAY_TIMEOUT,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let (error, details) = match self {
            ApiError::Validation(details) => (self.to_string(), Some(details.clone())),
            // Storage details stay in the logs.
            ApiError::Service(ServiceError::Storage(_)) => {
                ("An internal error occurred".to_string(), None)
            }
            other => (other.to_string(), None),
        };

        HttpResponse::build(self.status_code()).json(ErrorResponse {
            code: self.code(),
            error,
            details,
        })
    }
}

/// Error handler for `web::JsonConfig`.
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    log::debug!("Rejected body of {} {}: {err}", req.method(), req.path());
    ApiError::BadRequest(err.to_string()).into()
}

/// Error handler for `web::PathConfig`.
pub fn path_error_handler(err: PathError, req: &HttpRequest) -> actix_web::Error {
    log::debug!("Rejected path {}: {err}", req.path());
    ApiError::BadRequest(err.to_string()).into()
}

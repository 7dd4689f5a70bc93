use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::employee::errors::AuthError;
use crate::employee::errors::ValidationErrors;

pub mod login;

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<T>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(data))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

/// Errors surfaced to HTTP callers.
///
/// Bodies are fixed per kind so internal detail never reaches a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    BadRequest(Vec<ValidationErrorData>),
    Unauthorized,
    InternalServerError,
}

impl ApiError {
    pub const INVALID_CREDENTIALS: &'static str = "Invalid credentials";
    pub const LOGIN_FAILED: &'static str = "Login failed";
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(errors) => (
                StatusCode::BAD_REQUEST,
                Json(ValidationErrorBody { errors }),
            )
                .into_response(),
            ApiError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                Json(MessageBody {
                    message: Self::INVALID_CREDENTIALS.to_string(),
                }),
            )
                .into_response(),
            ApiError::InternalServerError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(FailureBody {
                    error: Self::LOGIN_FAILED.to_string(),
                }),
            )
                .into_response(),
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        ApiError::BadRequest(
            errors
                .violations()
                .iter()
                .map(|violation| ValidationErrorData::new(violation.field.as_str(), &violation.message))
                .collect(),
        )
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Validation(errors) => ApiError::from(errors),
            AuthError::InvalidCredentials => ApiError::Unauthorized,
            AuthError::Failure(_) => ApiError::InternalServerError,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationErrorBody {
    pub errors: Vec<ValidationErrorData>,
}

/// One violated input rule. Names the field, never echoes its value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationErrorData {
    pub field: String,
    pub location: &'static str,
    pub message: String,
}

impl ValidationErrorData {
    pub fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            location: "body",
            message: message.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageBody {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailureBody {
    pub error: String,
}

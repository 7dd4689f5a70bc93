use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use secrecy::SecretString;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use super::ValidationErrorData;
use crate::domain::employee::models::AuthenticateCommand;
use crate::domain::employee::ports::AuthenticationServicePort;
use crate::inbound::http::router::AppState;

const MALFORMED_BODY_MESSAGE: &str =
    "Request body must be a JSON object with string fields employeeId and password.";

pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequestBody>, JsonRejection>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    let Json(body) = payload.map_err(|rejection| {
        // The rejection text can quote the submitted body, so only its status is logged.
        tracing::debug!(
            status = rejection.status().as_u16(),
            "Login request body rejected"
        );
        ApiError::BadRequest(vec![ValidationErrorData::new(
            "body",
            MALFORMED_BODY_MESSAGE,
        )])
    })?;

    state
        .authentication_service
        .authenticate(body.into_command())
        .await
        .map_err(ApiError::from)
        .map(|token| {
            ApiSuccess::new(
                StatusCode::OK,
                LoginResponseData {
                    token: token.into_inner(),
                },
            )
        })
}

/// HTTP request body for a login attempt (raw JSON)
///
/// Absent or null fields become empty strings and fail validation like any
/// other malformed value.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequestBody {
    #[serde(default)]
    employee_id: Option<String>,
    #[serde(default)]
    password: Option<SecretString>,
}

impl LoginRequestBody {
    fn into_command(self) -> AuthenticateCommand {
        AuthenticateCommand::new(
            self.employee_id.unwrap_or_default(),
            self.password.unwrap_or_else(|| SecretString::from("")),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub token: String,
}

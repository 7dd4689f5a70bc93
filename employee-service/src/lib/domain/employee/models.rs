use std::fmt;

use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use once_cell::sync::Lazy;
use regex::Regex;
use secrecy::SecretString;
use uuid::Uuid;

use crate::employee::errors::EmployeeIdError;
use crate::employee::errors::RecordIdError;

static EMPLOYEE_ID_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9]{8}$").expect("employee ID pattern is valid"));

/// Employee record as held by the employee store.
///
/// Read-only from this service's point of view.
#[derive(Debug, Clone)]
pub struct Employee {
    pub id: RecordId,
    pub employee_id: EmployeeId,
    pub password_hash: String,
}

/// Opaque identifier of an employee record; becomes the token subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecordId(pub Uuid);

impl RecordId {
    /// Generate a new random record ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a record ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, RecordIdError> {
        Uuid::parse_str(s)
            .map(RecordId)
            .map_err(|e| RecordIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Employee login identifier.
///
/// Exactly 8 ASCII letters or digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmployeeId(String);

impl EmployeeId {
    /// Create a validated employee ID.
    ///
    /// # Errors
    /// * `InvalidFormat` - Not exactly 8 ASCII alphanumeric characters
    pub fn new(employee_id: String) -> Result<Self, EmployeeIdError> {
        if EMPLOYEE_ID_REGEX.is_match(&employee_id) {
            Ok(Self(employee_id))
        } else {
            Err(EmployeeIdError::InvalidFormat)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Unvalidated login input as received at the boundary.
#[derive(Debug, Clone)]
pub struct AuthenticateCommand {
    pub employee_id: String,
    pub password: SecretString,
}

impl AuthenticateCommand {
    pub fn new(employee_id: String, password: SecretString) -> Self {
        Self {
            employee_id,
            password,
        }
    }
}

/// Login input that passed every format rule.
///
/// Only produced by [`validate_credentials`](crate::employee::validation::validate_credentials).
#[derive(Debug, Clone)]
pub struct Credentials {
    pub employee_id: EmployeeId,
    pub password: SecretString,
}

/// Claims requested from the token issuer for an authenticated employee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenClaims {
    pub subject: RecordId,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl TokenClaims {
    pub fn new(subject: RecordId, issued_at: DateTime<Utc>, lifetime: Duration) -> Self {
        Self {
            subject,
            issued_at,
            expires_at: issued_at + lifetime,
        }
    }
}

/// Signed, self-contained access token.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken {
    signed_payload: String,
}

impl AccessToken {
    pub fn new(signed_payload: String) -> Self {
        Self { signed_payload }
    }

    pub fn as_str(&self) -> &str {
        &self.signed_payload
    }

    pub fn into_inner(self) -> String {
        self.signed_payload
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken([REDACTED])")
    }
}

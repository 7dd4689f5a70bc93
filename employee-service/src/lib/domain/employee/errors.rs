use std::fmt;

use thiserror::Error;

/// Error for EmployeeId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmployeeIdError {
    #[error("Employee ID must be exactly 8 characters long and alphanumeric.")]
    InvalidFormat,
}

/// Error for RecordId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RecordIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Request field a validation rule applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialField {
    EmployeeId,
    Password,
}

impl CredentialField {
    /// Field name as it appears in the request body.
    pub fn as_str(&self) -> &'static str {
        match self {
            CredentialField::EmployeeId => "employeeId",
            CredentialField::Password => "password",
        }
    }
}

/// A single violated input rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: CredentialField,
    pub message: String,
}

/// Every rule a login request violated, in evaluation order.
///
/// Never carries the offending values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors {
    violations: Vec<FieldViolation>,
}

impl ValidationErrors {
    pub fn new(violations: Vec<FieldViolation>) -> Self {
        Self { violations }
    }

    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self
            .violations
            .iter()
            .map(|violation| violation.message.as_str())
            .collect();
        write!(f, "{}", messages.join(" "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Error for employee store operations
#[derive(Debug, Clone, Error)]
pub enum EmployeeStoreError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Stored employee record {record_id} is corrupt: {reason}")]
    CorruptRecord { record_id: String, reason: String },
}

/// Error for password verification
#[derive(Debug, Clone, Error)]
pub enum PasswordError {
    #[error("Malformed password hash: {0}")]
    MalformedHash(String),

    #[error("Password verification failed: {0}")]
    VerificationFailed(String),
}

/// Error for access token issuance
#[derive(Debug, Clone, Error)]
pub enum TokenError {
    #[error("Token signing failed: {0}")]
    SigningFailed(String),
}

/// Top-level error for an authentication attempt
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    #[error("Invalid login request: {0}")]
    Validation(#[from] ValidationErrors),

    /// Unknown employee ID or wrong password; the two are indistinguishable.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Infrastructure fault. The detail is for logs only.
    #[error("Authentication failed: {0}")]
    Failure(String),
}

impl From<EmployeeStoreError> for AuthError {
    fn from(err: EmployeeStoreError) -> Self {
        AuthError::Failure(err.to_string())
    }
}

impl From<PasswordError> for AuthError {
    fn from(err: PasswordError) -> Self {
        AuthError::Failure(err.to_string())
    }
}

impl From<TokenError> for AuthError {
    fn from(err: TokenError) -> Self {
        AuthError::Failure(err.to_string())
    }
}

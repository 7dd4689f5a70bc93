//! Format rules a login request must satisfy before any lookup or hashing.

use secrecy::ExposeSecret;

use crate::employee::errors::CredentialField;
use crate::employee::errors::FieldViolation;
use crate::employee::errors::ValidationErrors;
use crate::employee::models::AuthenticateCommand;
use crate::employee::models::Credentials;
use crate::employee::models::EmployeeId;

/// Individual password requirements, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordRule {
    MinLength,
    Uppercase,
    Lowercase,
    Digit,
    Special,
}

impl PasswordRule {
    pub const MIN_LENGTH: usize = 7;

    const ALL: [PasswordRule; 5] = [
        PasswordRule::MinLength,
        PasswordRule::Uppercase,
        PasswordRule::Lowercase,
        PasswordRule::Digit,
        PasswordRule::Special,
    ];

    pub fn message(&self) -> &'static str {
        match self {
            PasswordRule::MinLength => "Password must be at least 7 characters long.",
            PasswordRule::Uppercase => "Password must contain at least one uppercase letter.",
            PasswordRule::Lowercase => "Password must contain at least one lowercase letter.",
            PasswordRule::Digit => "Password must contain at least one number.",
            PasswordRule::Special => "Password must contain at least one special character.",
        }
    }

    fn is_satisfied_by(&self, password: &str) -> bool {
        match self {
            PasswordRule::MinLength => password.chars().count() >= Self::MIN_LENGTH,
            PasswordRule::Uppercase => password.chars().any(|c| c.is_ascii_uppercase()),
            PasswordRule::Lowercase => password.chars().any(|c| c.is_ascii_lowercase()),
            PasswordRule::Digit => password.chars().any(|c| c.is_ascii_digit()),
            // Anything that is not an ASCII letter or digit counts, including `_`.
            PasswordRule::Special => password.chars().any(|c| !c.is_ascii_alphanumeric()),
        }
    }
}

/// Password rules the given password breaks.
pub fn password_violations(password: &str) -> Vec<PasswordRule> {
    PasswordRule::ALL
        .into_iter()
        .filter(|rule| !rule.is_satisfied_by(password))
        .collect()
}

/// Validate raw login input into [`Credentials`].
///
/// Both fields are checked independently so a single response can report
/// every broken rule.
///
/// # Errors
/// * `ValidationErrors` - One entry per violated rule, employee ID first
pub fn validate_credentials(command: AuthenticateCommand) -> Result<Credentials, ValidationErrors> {
    let mut violations = Vec::new();

    let employee_id = match EmployeeId::new(command.employee_id) {
        Ok(employee_id) => Some(employee_id),
        Err(e) => {
            violations.push(FieldViolation {
                field: CredentialField::EmployeeId,
                message: e.to_string(),
            });
            None
        }
    };

    violations.extend(
        password_violations(command.password.expose_secret())
            .into_iter()
            .map(|rule| FieldViolation {
                field: CredentialField::Password,
                message: rule.message().to_string(),
            }),
    );

    match employee_id {
        Some(employee_id) if violations.is_empty() => Ok(Credentials {
            employee_id,
            password: command.password,
        }),
        _ => Err(ValidationErrors::new(violations)),
    }
}

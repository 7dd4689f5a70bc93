use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;

use crate::employee::errors::AuthError;
use crate::employee::models::AccessToken;
use crate::employee::models::AuthenticateCommand;
use crate::employee::models::Credentials;
use crate::employee::models::TokenClaims;
use crate::employee::ports::AuthenticationServicePort;
use crate::employee::ports::EmployeeRepository;
use crate::employee::ports::PasswordHasher;
use crate::employee::ports::TokenIssuer;
use crate::employee::validation::validate_credentials;

/// Domain service implementation for employee login.
///
/// Validates input, looks the employee up, verifies the password and signs a
/// one hour access token. Holds no mutable state; concurrent attempts are
/// independent.
pub struct AuthenticationService<ER, PH, TI>
where
    ER: EmployeeRepository,
    PH: PasswordHasher,
    TI: TokenIssuer,
{
    repository: Arc<ER>,
    password_hasher: Arc<PH>,
    token_issuer: Arc<TI>,
    attempt_timeout: Duration,
}

impl<ER, PH, TI> AuthenticationService<ER, PH, TI>
where
    ER: EmployeeRepository,
    PH: PasswordHasher,
    TI: TokenIssuer,
{
    pub const TOKEN_LIFETIME_HOURS: i64 = 1;

    /// Create a new authentication service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Employee record lookup
    /// * `password_hasher` - Password hash verification
    /// * `token_issuer` - Access token signing
    /// * `attempt_timeout` - Upper bound on lookup plus verification per attempt
    pub fn new(
        repository: Arc<ER>,
        password_hasher: Arc<PH>,
        token_issuer: Arc<TI>,
        attempt_timeout: Duration,
    ) -> Self {
        Self {
            repository,
            password_hasher,
            token_issuer,
            attempt_timeout,
        }
    }

    async fn verify_and_issue(&self, credentials: &Credentials) -> Result<AccessToken, AuthError> {
        let employee = match self
            .repository
            .find_by_employee_id(&credentials.employee_id)
            .await?
        {
            Some(employee) => employee,
            None => {
                if let Err(e) = self
                    .password_hasher
                    .verify_decoy(&credentials.password)
                    .await
                {
                    tracing::error!(error = %e, "Decoy password verification failed");
                }
                tracing::warn!(reason = "unknown_employee", "Login rejected");
                return Err(AuthError::InvalidCredentials);
            }
        };

        let is_valid = self
            .password_hasher
            .verify(&credentials.password, &employee.password_hash)
            .await?;

        if !is_valid {
            tracing::warn!(
                reason = "password_mismatch",
                record_id = %employee.id,
                "Login rejected"
            );
            return Err(AuthError::InvalidCredentials);
        }

        let claims = TokenClaims::new(
            employee.id,
            Utc::now(),
            chrono::Duration::hours(Self::TOKEN_LIFETIME_HOURS),
        );
        let token = self.token_issuer.issue(&claims)?;

        tracing::info!(record_id = %employee.id, expires_at = %claims.expires_at, "Login succeeded");

        Ok(token)
    }
}

#[async_trait]
impl<ER, PH, TI> AuthenticationServicePort for AuthenticationService<ER, PH, TI>
where
    ER: EmployeeRepository,
    PH: PasswordHasher,
    TI: TokenIssuer,
{
    async fn authenticate(&self, command: AuthenticateCommand) -> Result<AccessToken, AuthError> {
        let credentials = validate_credentials(command).map_err(|e| {
            tracing::debug!(violations = e.len(), "Login request failed validation");
            AuthError::from(e)
        })?;

        let result = match tokio::time::timeout(
            self.attempt_timeout,
            self.verify_and_issue(&credentials),
        )
        .await
        {
            Ok(result) => result,
            Err(_) => Err(AuthError::Failure(format!(
                "attempt exceeded {}ms",
                self.attempt_timeout.as_millis()
            ))),
        };

        if let Err(AuthError::Failure(detail)) = &result {
            tracing::error!(error = %detail, "Login failed");
        }

        result
    }
}

use async_trait::async_trait;
use secrecy::SecretString;

use crate::employee::errors::AuthError;
use crate::employee::errors::EmployeeStoreError;
use crate::employee::errors::PasswordError;
use crate::employee::errors::TokenError;
use crate::employee::models::AccessToken;
use crate::employee::models::AuthenticateCommand;
use crate::employee::models::Employee;
use crate::employee::models::EmployeeId;
use crate::employee::models::TokenClaims;

/// Port for the employee login use case.
#[async_trait]
pub trait AuthenticationServicePort: Send + Sync + 'static {
    /// Authenticate an employee and issue an access token.
    ///
    /// # Arguments
    /// * `command` - Raw employee ID and password from the caller
    ///
    /// # Returns
    /// Signed access token for the employee record
    ///
    /// # Errors
    /// * `Validation` - Input violates one or more format rules
    /// * `InvalidCredentials` - Unknown employee ID or wrong password
    /// * `Failure` - Store, hasher or signer fault, or the attempt timed out
    async fn authenticate(&self, command: AuthenticateCommand) -> Result<AccessToken, AuthError>;
}

/// Read access to employee records.
#[async_trait]
pub trait EmployeeRepository: Send + Sync + 'static {
    /// Retrieve an employee by login identifier.
    ///
    /// # Returns
    /// Optional employee record (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Store could not be queried
    /// * `CorruptRecord` - Stored row cannot be represented as an employee
    async fn find_by_employee_id(
        &self,
        employee_id: &EmployeeId,
    ) -> Result<Option<Employee>, EmployeeStoreError>;
}

/// Verification against salted adaptive password hashes.
#[async_trait]
pub trait PasswordHasher: Send + Sync + 'static {
    /// Check a password against a stored hash.
    ///
    /// # Returns
    /// `true` on match, `false` on mismatch
    ///
    /// # Errors
    /// * `MalformedHash` - Stored hash cannot be parsed
    /// * `VerificationFailed` - Hash could not be checked
    async fn verify(
        &self,
        password: &SecretString,
        password_hash: &str,
    ) -> Result<bool, PasswordError>;

    /// Spend the same effort as [`verify`](Self::verify) without a stored hash.
    ///
    /// Used when no record exists so timing does not reveal that fact.
    async fn verify_decoy(&self, password: &SecretString) -> Result<(), PasswordError>;
}

/// Signing of access tokens.
pub trait TokenIssuer: Send + Sync + 'static {
    /// Sign the given claims.
    ///
    /// # Errors
    /// * `SigningFailed` - Claims could not be encoded or signed
    fn issue(&self, claims: &TokenClaims) -> Result<AccessToken, TokenError>;
}

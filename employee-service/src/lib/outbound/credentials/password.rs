use async_trait::async_trait;
use secrecy::ExposeSecret;
use secrecy::SecretString;
use uuid::Uuid;

use crate::employee::errors::PasswordError;
use crate::employee::ports::PasswordHasher;

/// Argon2id verification off the async executor.
///
/// Hash checks are CPU-bound by design and run on tokio's blocking pool.
/// A decoy hash of the configured cost is created once at start-up and
/// verified whenever no stored hash exists for a login attempt.
pub struct Argon2PasswordHasher {
    hasher: auth::PasswordHasher,
    decoy_hash: String,
}

impl Argon2PasswordHasher {
    /// Create the adapter and its decoy hash.
    ///
    /// # Arguments
    /// * `hasher` - Hasher configured with the cost used for stored hashes
    ///
    /// # Errors
    /// * `VerificationFailed` - Decoy hash could not be created
    pub fn new(hasher: auth::PasswordHasher) -> Result<Self, PasswordError> {
        let decoy_hash = hasher
            .hash(&Uuid::new_v4().to_string())
            .map_err(|e| PasswordError::VerificationFailed(e.to_string()))?;

        Ok(Self { hasher, decoy_hash })
    }

    async fn run_verification(
        &self,
        password: &SecretString,
        password_hash: &str,
    ) -> Result<bool, PasswordError> {
        let hasher = self.hasher.clone();
        let password = password.clone();
        let password_hash = password_hash.to_owned();

        tokio::task::spawn_blocking(move || hasher.verify(password.expose_secret(), &password_hash))
            .await
            .map_err(|e| PasswordError::VerificationFailed(format!("hashing task failed: {}", e)))?
            .map_err(|e| match e {
                auth::PasswordError::MalformedHash(reason) => PasswordError::MalformedHash(reason),
                other => PasswordError::VerificationFailed(other.to_string()),
            })
    }
}

#[async_trait]
impl PasswordHasher for Argon2PasswordHasher {
    async fn verify(
        &self,
        password: &SecretString,
        password_hash: &str,
    ) -> Result<bool, PasswordError> {
        self.run_verification(password, password_hash).await
    }

    async fn verify_decoy(&self, password: &SecretString) -> Result<(), PasswordError> {
        self.run_verification(password, &self.decoy_hash)
            .await
            .map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cheap_hasher() -> auth::PasswordHasher {
        auth::PasswordHasher::with_cost(1024, 1, 1).expect("Failed to build hasher")
    }

    #[tokio::test]
    async fn test_verify_match_and_mismatch() {
        let hash = cheap_hasher()
            .hash("Secur3!ty")
            .expect("Failed to hash password");
        let adapter = Argon2PasswordHasher::new(cheap_hasher()).expect("Failed to build adapter");

        assert!(adapter
            .verify(&SecretString::from("Secur3!ty"), &hash)
            .await
            .expect("Failed to verify password"));
        assert!(!adapter
            .verify(&SecretString::from("Secur3!tY"), &hash)
            .await
            .expect("Failed to verify password"));
    }

    #[tokio::test]
    async fn test_malformed_hash_is_an_error() {
        let adapter = Argon2PasswordHasher::new(cheap_hasher()).expect("Failed to build adapter");

        let result = adapter
            .verify(&SecretString::from("Secur3!ty"), "5f4dcc3b5aa765d61d8327deb882cf99")
            .await;

        assert!(matches!(result, Err(PasswordError::MalformedHash(_))));
    }

    #[tokio::test]
    async fn test_decoy_verification_succeeds() {
        let adapter = Argon2PasswordHasher::new(cheap_hasher()).expect("Failed to build adapter");

        assert!(adapter
            .verify_decoy(&SecretString::from("Secur3!ty"))
            .await
            .is_ok());
    }
}

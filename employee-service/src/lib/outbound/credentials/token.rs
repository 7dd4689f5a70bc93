use auth::Claims;
use auth::JwtHandler;
use secrecy::ExposeSecret;
use secrecy::SecretString;

use crate::employee::errors::TokenError;
use crate::employee::models::AccessToken;
use crate::employee::models::TokenClaims;
use crate::employee::ports::TokenIssuer;

/// HS256 JWT issuer keyed by the configured signing secret.
///
/// Tokens carry `sub` (employee record id), `iat` and `exp`; any holder of the
/// same secret can verify them with [`auth::JwtHandler::decode`].
pub struct JwtTokenIssuer {
    handler: JwtHandler,
}

impl JwtTokenIssuer {
    pub fn new(secret: &SecretString) -> Self {
        Self {
            handler: JwtHandler::new(secret.expose_secret().as_bytes()),
        }
    }
}

impl TokenIssuer for JwtTokenIssuer {
    fn issue(&self, claims: &TokenClaims) -> Result<AccessToken, TokenError> {
        let claims = Claims::new(claims.subject, claims.issued_at, claims.expires_at);

        self.handler
            .encode(&claims)
            .map(AccessToken::new)
            .map_err(|e| TokenError::SigningFailed(e.to_string()))
    }
}

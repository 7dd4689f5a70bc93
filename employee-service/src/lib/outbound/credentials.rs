//! Adapters binding the `auth` library to the domain's credential ports.

pub mod password;
pub mod token;

pub use password::Argon2PasswordHasher;
pub use token::JwtTokenIssuer;

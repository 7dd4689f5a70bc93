//! Credential and token primitives shared by services.
//!
//! Provides the building blocks a login flow is assembled from:
//! - Password hashing and verification (Argon2id, PHC strings, random salt per hash)
//! - Signed access tokens (HS256 JWT) with registered claims
//!
//! Services define their own ports and adapt these implementations behind them,
//! so no domain logic is shared across service boundaries.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("Secur3!ty").unwrap();
//! assert!(hasher.verify("Secur3!ty", &hash).unwrap());
//! assert!(!hasher.verify("secur3ty", &hash).unwrap());
//! ```
//!
//! ## Access Tokens
//! ```
//! use auth::{Claims, JwtHandler};
//! use chrono::{Duration, Utc};
//!
//! let handler = JwtHandler::new(b"secret_key_at_least_32_bytes_long!");
//! let now = Utc::now();
//! let claims = Claims::new("3f2b8c1e-5d7a-4e90-b1c2-9a8d7e6f5a4b", now, now + Duration::hours(1));
//! let token = handler.encode(&claims).unwrap();
//! let decoded: Claims = handler.decode(&token).unwrap();
//! assert_eq!(decoded.sub, claims.sub);
//! ```

pub mod jwt;
pub mod password;

pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::PasswordError;
pub use password::PasswordHasher;

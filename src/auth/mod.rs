//! Authentication module
//!
//! Provides email/password authentication:
//! - bcrypt credential hashing (plaintext is never stored or compared)
//! - JWT token generation and validation
//! - Session management with refresh tokens

mod jwt;
mod password;
mod service;

pub use jwt::{
    generate_access_token, generate_refresh_token, get_user_id_from_claims, verify_token, Claims,
};
pub use password::{hash_password, verify_password};
pub use service::{AuthError, AuthService, SessionContext};

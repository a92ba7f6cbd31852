//! Authentication service
//!
//! Core business logic for email/password authentication.

use chrono::{Duration, Utc};
use sha2::{Digest, Sha256};
use sqlx::PgPool;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{AuthSession, AuthTokensResponse, User, UserRole};

use super::jwt::{generate_access_token, generate_refresh_token, verify_token, JwtError};
use super::password::{hash_password, verify_password, PasswordError};

/// Auth service errors
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("An account with this email already exists")]
    EmailAlreadyRegistered,

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Your account has been suspended. Please contact support.")]
    AccountSuspended,

    #[error("User not found")]
    UserNotFound,

    #[error("Session not found or revoked")]
    SessionNotFound,

    #[error("Token error: {0}")]
    TokenError(String),

    #[error("Invalid refresh token")]
    InvalidRefreshToken,

    #[error("Password error: {0}")]
    PasswordError(String),
}

impl From<sqlx::Error> for AuthError {
    fn from(e: sqlx::Error) -> Self {
        AuthError::DatabaseError(e.to_string())
    }
}

impl From<JwtError> for AuthError {
    fn from(e: JwtError) -> Self {
        AuthError::TokenError(e.to_string())
    }
}

impl From<PasswordError> for AuthError {
    fn from(e: PasswordError) -> Self {
        AuthError::PasswordError(e.to_string())
    }
}

impl From<AuthError> for crate::error::ApiError {
    fn from(e: AuthError) -> Self {
        use crate::error::ApiError;
        match e {
            AuthError::EmailAlreadyRegistered => ApiError::Conflict(e.to_string()),
            AuthError::InvalidCredentials => ApiError::Unauthorized(e.to_string()),
            AuthError::AccountSuspended => ApiError::Forbidden(e.to_string()),
            AuthError::UserNotFound => ApiError::NotFound(e.to_string()),
            AuthError::SessionNotFound | AuthError::InvalidRefreshToken | AuthError::TokenError(_) => {
                ApiError::Unauthorized(e.to_string())
            }
            AuthError::DatabaseError(_) | AuthError::PasswordError(_) => {
                ApiError::InternalError(e.to_string())
            }
        }
    }
}

/// Session metadata captured at login time
#[derive(Debug, Default, Clone)]
pub struct SessionContext {
    pub device_info: Option<String>,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}

/// Authentication service
#[derive(Clone)]
pub struct AuthService {
    db_pool: PgPool,
    jwt_secret: String,
    access_token_ttl_seconds: i64,
    refresh_token_ttl_days: i64,
    bcrypt_cost: u32,
}

impl AuthService {
    /// Create a new AuthService
    pub fn new(
        db_pool: PgPool,
        jwt_secret: String,
        access_token_ttl_seconds: i64,
        refresh_token_ttl_days: i64,
        bcrypt_cost: u32,
    ) -> Self {
        Self {
            db_pool,
            jwt_secret,
            access_token_ttl_seconds,
            refresh_token_ttl_days,
            bcrypt_cost,
        }
    }

    /// Register a new customer account
    ///
    /// New users start with a zero wallet balance and an active account.
    pub async fn register(
        &self,
        full_name: &str,
        email: &str,
        mobile_number: &str,
        password: &str,
        ctx: SessionContext,
    ) -> Result<AuthTokensResponse, AuthError> {
        let existing: Option<(Uuid,)> = sqlx::query_as(
            r#"
            SELECT id FROM users WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.db_pool)
        .await?;

        if existing.is_some() {
            return Err(AuthError::EmailAlreadyRegistered);
        }

        let password_hash = hash_password(password, self.bcrypt_cost)?;
        let user_id = Uuid::new_v4();
        let now = Utc::now();

        let user: User = sqlx::query_as(
            r#"
            INSERT INTO users (id, email, full_name, mobile_number, password_hash, role, wallet_balance, is_active, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, 0, TRUE, $7, $7)
            RETURNING id, email, full_name, mobile_number, password_hash, role, wallet_balance, is_active, created_at, updated_at
            "#,
        )
        .bind(user_id)
        .bind(email)
        .bind(full_name)
        .bind(mobile_number)
        .bind(&password_hash)
        .bind(UserRole::Customer)
        .bind(now)
        .fetch_one(&self.db_pool)
        .await
        .map_err(|e| match &e {
            // Lost a race with a concurrent registration of the same email
            sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some("23505") => {
                AuthError::EmailAlreadyRegistered
            }
            _ => AuthError::from(e),
        })?;

        tracing::info!(user_id = %user.id, "New user registered");

        self.issue_tokens(user, ctx).await
    }

    /// Authenticate with email and password
    pub async fn login(
        &self,
        email: &str,
        password: &str,
        ctx: SessionContext,
    ) -> Result<AuthTokensResponse, AuthError> {
        let user: User = sqlx::query_as(
            r#"
            SELECT id, email, full_name, mobile_number, password_hash, role, wallet_balance, is_active, created_at, updated_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.db_pool)
        .await?
        .ok_or(AuthError::InvalidCredentials)?;

        if !verify_password(password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials);
        }

        // Banned accounts fail after the credential check so the message
        // stays accurate without leaking which emails exist
        if !user.is_active {
            return Err(AuthError::AccountSuspended);
        }

        self.issue_tokens(user, ctx).await
    }

    /// Issue access/refresh tokens and persist a session row
    async fn issue_tokens(
        &self,
        user: User,
        ctx: SessionContext,
    ) -> Result<AuthTokensResponse, AuthError> {
        let jti = Uuid::new_v4().to_string();
        let access_token =
            generate_access_token(&user, &jti, &self.jwt_secret, self.access_token_ttl_seconds)?;

        let refresh_jti = Uuid::new_v4().to_string();
        let refresh_token = generate_refresh_token(
            &user,
            &refresh_jti,
            &self.jwt_secret,
            self.refresh_token_ttl_days,
        )?;

        // Hash refresh token for storage
        let refresh_token_hash = hash_token(&refresh_token);
        let session_expires_at = Utc::now() + Duration::days(self.refresh_token_ttl_days);

        sqlx::query(
            r#"
            INSERT INTO auth_sessions (id, user_id, jti, refresh_token_hash, device_info, ip_address, user_agent, expires_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user.id)
        .bind(&jti)
        .bind(&refresh_token_hash)
        .bind(&ctx.device_info)
        .bind(&ctx.ip_address)
        .bind(&ctx.user_agent)
        .bind(session_expires_at)
        .execute(&self.db_pool)
        .await?;

        Ok(AuthTokensResponse {
            access_token,
            refresh_token,
            token_type: "Bearer".to_string(),
            expires_in: self.access_token_ttl_seconds,
            user: user.into(),
        })
    }

    /// Refresh tokens using a valid refresh token
    pub async fn refresh_tokens(
        &self,
        refresh_token: &str,
    ) -> Result<AuthTokensResponse, AuthError> {
        let claims = verify_token(refresh_token, &self.jwt_secret)?;

        if claims.token_type != "refresh" {
            return Err(AuthError::InvalidRefreshToken);
        }

        // Hash the refresh token to find the session
        let refresh_token_hash = hash_token(refresh_token);

        let session: AuthSession = sqlx::query_as(
            r#"
            SELECT id, user_id, jti, refresh_token_hash, device_info, ip_address, user_agent, expires_at, revoked, revoked_at, created_at, updated_at
            FROM auth_sessions
            WHERE refresh_token_hash = $1 AND revoked = FALSE AND expires_at > NOW()
            "#,
        )
        .bind(&refresh_token_hash)
        .fetch_optional(&self.db_pool)
        .await?
        .ok_or(AuthError::SessionNotFound)?;

        let user = self.get_user_by_id(session.user_id).await?;

        if !user.is_active {
            return Err(AuthError::AccountSuspended);
        }

        let jti = Uuid::new_v4().to_string();
        let access_token =
            generate_access_token(&user, &jti, &self.jwt_secret, self.access_token_ttl_seconds)?;

        let refresh_jti = Uuid::new_v4().to_string();
        let new_refresh_token = generate_refresh_token(
            &user,
            &refresh_jti,
            &self.jwt_secret,
            self.refresh_token_ttl_days,
        )?;

        let new_refresh_token_hash = hash_token(&new_refresh_token);
        let session_expires_at = Utc::now() + Duration::days(self.refresh_token_ttl_days);

        // Rotate the session in place
        sqlx::query(
            r#"
            UPDATE auth_sessions
            SET jti = $1, refresh_token_hash = $2, expires_at = $3, updated_at = NOW()
            WHERE id = $4
            "#,
        )
        .bind(&jti)
        .bind(&new_refresh_token_hash)
        .bind(session_expires_at)
        .bind(session.id)
        .execute(&self.db_pool)
        .await?;

        Ok(AuthTokensResponse {
            access_token,
            refresh_token: new_refresh_token,
            token_type: "Bearer".to_string(),
            expires_in: self.access_token_ttl_seconds,
            user: user.into(),
        })
    }

    /// Revoke a session (logout)
    pub async fn revoke_session(&self, jti: &str) -> Result<(), AuthError> {
        let rows_affected = sqlx::query(
            r#"
            UPDATE auth_sessions
            SET revoked = TRUE, revoked_at = NOW()
            WHERE jti = $1 AND revoked = FALSE
            "#,
        )
        .bind(jti)
        .execute(&self.db_pool)
        .await?
        .rows_affected();

        if rows_affected == 0 {
            return Err(AuthError::SessionNotFound);
        }

        Ok(())
    }

    /// Revoke all sessions for a user
    pub async fn revoke_all_sessions(&self, user_id: Uuid) -> Result<u64, AuthError> {
        let rows_affected = sqlx::query(
            r#"
            UPDATE auth_sessions
            SET revoked = TRUE, revoked_at = NOW()
            WHERE user_id = $1 AND revoked = FALSE
            "#,
        )
        .bind(user_id)
        .execute(&self.db_pool)
        .await?
        .rows_affected();

        Ok(rows_affected)
    }

    /// Get a user by ID
    pub async fn get_user_by_id(&self, user_id: Uuid) -> Result<User, AuthError> {
        sqlx::query_as(
            r#"
            SELECT id, email, full_name, mobile_number, password_hash, role, wallet_balance, is_active, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.db_pool)
        .await?
        .ok_or(AuthError::UserNotFound)
    }

    /// Verify a session is valid (not revoked)
    pub async fn verify_session(&self, jti: &str) -> Result<AuthSession, AuthError> {
        sqlx::query_as(
            r#"
            SELECT id, user_id, jti, refresh_token_hash, device_info, ip_address, user_agent, expires_at, revoked, revoked_at, created_at, updated_at
            FROM auth_sessions
            WHERE jti = $1 AND revoked = FALSE AND expires_at > NOW()
            "#,
        )
        .bind(jti)
        .fetch_optional(&self.db_pool)
        .await?
        .ok_or(AuthError::SessionNotFound)
    }

    /// Get JWT secret (for middleware access)
    pub fn jwt_secret(&self) -> &str {
        &self.jwt_secret
    }
}

/// Hash a token for storage
fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    hex_encode(hasher.finalize())
}

fn hex_encode(bytes: impl AsRef<[u8]>) -> String {
    bytes
        .as_ref()
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_token_is_stable_hex() {
        let a = hash_token("some-refresh-token");
        let b = hash_token("some-refresh-token");
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));

        let c = hash_token("another-token");
        assert_ne!(a, c);
    }
}

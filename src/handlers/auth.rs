//! Authentication HTTP handlers

use axum::{
    extract::{ConnectInfo, State},
    http::{header, HeaderMap, StatusCode},
    Json,
};
use std::net::SocketAddr;
use validator::Validate;

use super::AuthenticatedUser;
use crate::auth::SessionContext;
use crate::error::ApiError;
use crate::models::{
    AuthTokensResponse, LoginRequest, RefreshTokenRequest, RegisterRequest, UserResponse,
};
use crate::state::AppState;

fn session_context(addr: &SocketAddr, headers: &HeaderMap) -> SessionContext {
    SessionContext {
        device_info: None,
        ip_address: Some(addr.ip().to_string()),
        user_agent: headers
            .get(header::USER_AGENT)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string()),
    }
}

/// POST /auth/register - Create a new customer account
pub async fn register(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<AuthTokensResponse>, ApiError> {
    req.validate()?;

    let tokens = state
        .auth_service
        .register(
            &req.full_name,
            &req.email,
            &req.mobile_number,
            &req.password,
            session_context(&addr, &headers),
        )
        .await?;

    Ok(Json(tokens))
}

/// POST /auth/login - Authenticate and issue tokens
pub async fn login(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    Json(req): Json<LoginRequest>,
) -> Result<Json<AuthTokensResponse>, ApiError> {
    req.validate()?;

    let tokens = state
        .auth_service
        .login(&req.email, &req.password, session_context(&addr, &headers))
        .await?;

    Ok(Json(tokens))
}

/// POST /auth/refresh - Refresh access token using refresh token
pub async fn refresh_token(
    State(state): State<AppState>,
    Json(req): Json<RefreshTokenRequest>,
) -> Result<Json<AuthTokensResponse>, ApiError> {
    let tokens = state.auth_service.refresh_tokens(&req.refresh_token).await?;

    Ok(Json(tokens))
}

/// POST /auth/logout - Revoke current session
pub async fn logout(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<StatusCode, ApiError> {
    state.auth_service.revoke_session(&user.jti).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /auth/me - Get current authenticated user
pub async fn get_current_user(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<Json<UserResponse>, ApiError> {
    let user = state.auth_service.get_user_by_id(user.user_id).await?;

    Ok(Json(user.into()))
}

/// POST /auth/logout-all - Revoke all sessions for current user
pub async fn logout_all(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<Json<LogoutAllResponse>, ApiError> {
    let revoked_count = state.auth_service.revoke_all_sessions(user.user_id).await?;

    Ok(Json(LogoutAllResponse {
        revoked_sessions: revoked_count,
    }))
}

#[derive(Debug, serde::Serialize)]
pub struct LogoutAllResponse {
    pub revoked_sessions: u64,
}

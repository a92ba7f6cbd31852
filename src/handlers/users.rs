//! Admin user management handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};
use uuid::Uuid;

use super::AdminUser;
use crate::error::ApiError;
use crate::models::{ApiResponse, PaginatedResponse, PaginationParams, UserResponse};
use crate::state::AppState;
use crate::users::UserDeleteResult;

/// GET /admin/users
pub async fn list_users(
    _admin: AdminUser,
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PaginatedResponse<UserResponse>>>, ApiError> {
    let users = state.users_service.list_users(&params).await?;
    Ok(Json(ApiResponse::ok(users)))
}

/// GET /admin/users/:id
pub async fn get_user(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let user = state.users_service.get_user(id).await?;
    Ok(Json(ApiResponse::ok(user)))
}

#[derive(Debug, serde::Deserialize)]
pub struct SetActiveRequest {
    pub is_active: bool,
}

/// PATCH /admin/users/:id/active - Ban or unban an account
pub async fn set_user_active(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<SetActiveRequest>,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let user = state.users_service.set_active(id, req.is_active).await?;
    Ok(Json(ApiResponse::ok(user)))
}

/// DELETE /admin/users/:id - Delete an account and all of its records
pub async fn delete_user(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<UserDeleteResult>>, ApiError> {
    let result = state.users_service.delete_user(id).await?;
    Ok(Json(ApiResponse::ok(result)))
}

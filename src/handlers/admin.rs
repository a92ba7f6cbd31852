//! Dashboard and site settings handlers

use axum::{extract::State, Json};
use validator::Validate;

use super::AdminUser;
use crate::admin::{DashboardStats, UpdateSettingsRequest};
use crate::error::ApiError;
use crate::models::{ApiResponse, SiteSettings};
use crate::state::AppState;

/// GET /settings - Public site settings (store name, currency, notice)
pub async fn get_settings(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<SiteSettings>>, ApiError> {
    let settings = state.admin_service.get_settings().await?;
    Ok(Json(ApiResponse::ok(settings)))
}

/// GET /admin/stats - Dashboard counters
pub async fn get_stats(
    _admin: AdminUser,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<DashboardStats>>, ApiError> {
    let stats = state.admin_service.stats().await?;
    Ok(Json(ApiResponse::ok(stats)))
}

/// PATCH /admin/settings
pub async fn update_settings(
    _admin: AdminUser,
    State(state): State<AppState>,
    Json(req): Json<UpdateSettingsRequest>,
) -> Result<Json<ApiResponse<SiteSettings>>, ApiError> {
    req.validate()?;
    let settings = state.admin_service.update_settings(req).await?;
    Ok(Json(ApiResponse::ok(settings)))
}

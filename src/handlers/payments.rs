//! Payment method HTTP handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use super::AdminUser;
use crate::error::ApiError;
use crate::models::ApiResponse;
use crate::payments::{CreatePaymentMethodRequest, PaymentMethod, UpdatePaymentMethodRequest};
use crate::state::AppState;

/// GET /payment-methods - Active methods for checkout and recharge forms
pub async fn list_payment_methods(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<PaymentMethod>>>, ApiError> {
    let methods = state.payments_service.list_active().await?;
    Ok(Json(ApiResponse::ok(methods)))
}

// ---------------------------------------------------------------------------
// Admin
// ---------------------------------------------------------------------------

/// GET /admin/payment-methods
pub async fn admin_list_payment_methods(
    _admin: AdminUser,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<PaymentMethod>>>, ApiError> {
    let methods = state.payments_service.list_all().await?;
    Ok(Json(ApiResponse::ok(methods)))
}

/// POST /admin/payment-methods
pub async fn create_payment_method(
    _admin: AdminUser,
    State(state): State<AppState>,
    Json(req): Json<CreatePaymentMethodRequest>,
) -> Result<Json<ApiResponse<PaymentMethod>>, ApiError> {
    req.validate()?;
    let method = state.payments_service.create(req).await?;
    Ok(Json(ApiResponse::ok(method)))
}

/// PATCH /admin/payment-methods/:id
pub async fn update_payment_method(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdatePaymentMethodRequest>,
) -> Result<Json<ApiResponse<PaymentMethod>>, ApiError> {
    req.validate()?;
    let method = state.payments_service.update(id, req).await?;
    Ok(Json(ApiResponse::ok(method)))
}

/// DELETE /admin/payment-methods/:id
pub async fn delete_payment_method(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.payments_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

//! Order HTTP handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use super::{AdminUser, AuthenticatedUser};
use crate::error::ApiError;
use crate::models::{ApiResponse, PaginatedResponse, PaginationParams};
use crate::orders::{
    Order, OrderCleanupResult, OrderFilter, OrderWithDetails, PlaceOrderRequest,
    UpdateOrderStatusRequest,
};
use crate::state::AppState;

/// POST /orders - Place an order (wallet or manual payment)
pub async fn place_order(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Json(req): Json<PlaceOrderRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Order>>), ApiError> {
    let order = state.orders_service.place_order(user.user_id, req).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(order))))
}

/// GET /orders - Current user's orders
pub async fn list_my_orders(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PaginatedResponse<OrderWithDetails>>>, ApiError> {
    let orders = state
        .orders_service
        .list_user_orders(user.user_id, &params)
        .await?;
    Ok(Json(ApiResponse::ok(orders)))
}

// ---------------------------------------------------------------------------
// Admin
// ---------------------------------------------------------------------------

/// GET /admin/orders - All orders with product and buyer details
pub async fn admin_list_orders(
    _admin: AdminUser,
    State(state): State<AppState>,
    Query(filter): Query<OrderFilter>,
) -> Result<Json<ApiResponse<PaginatedResponse<OrderWithDetails>>>, ApiError> {
    let orders = state.orders_service.list_orders(filter).await?;
    Ok(Json(ApiResponse::ok(orders)))
}

/// PATCH /admin/orders/:id/status - Complete or cancel a pending order
pub async fn update_order_status(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateOrderStatusRequest>,
) -> Result<Json<ApiResponse<Order>>, ApiError> {
    let order = state.orders_service.update_status(id, req.status).await?;
    Ok(Json(ApiResponse::ok(order)))
}

/// DELETE /admin/orders/:id - Hard delete, any status
pub async fn delete_order(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.orders_service.delete_order(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /admin/orders/clean-completed - Bulk delete completed orders
pub async fn clean_completed_orders(
    _admin: AdminUser,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<OrderCleanupResult>>, ApiError> {
    let result = state.orders_service.clean_completed().await?;
    Ok(Json(ApiResponse::ok(result)))
}

//! Wallet HTTP handlers: balance, ledger, recharge flow

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use super::{AdminUser, AuthenticatedUser};
use crate::error::ApiError;
use crate::models::{ApiResponse, PaginatedResponse, PaginationParams};
use crate::state::AppState;
use crate::wallet::{
    BalanceResponse, RechargeFilter, RechargeRequest, RechargeRequestWithUser,
    ReviewRechargeRequest, SubmitRechargeRequest, WalletTransaction,
};

/// GET /wallet/balance
pub async fn get_balance(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<Json<ApiResponse<BalanceResponse>>, ApiError> {
    let wallet_balance = state.wallet_service.balance(user.user_id).await?;
    Ok(Json(ApiResponse::ok(BalanceResponse { wallet_balance })))
}

/// GET /wallet/transactions - Current user's ledger, newest first
pub async fn list_transactions(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PaginatedResponse<WalletTransaction>>>, ApiError> {
    let transactions = state
        .wallet_service
        .list_transactions(user.user_id, &params)
        .await?;
    Ok(Json(ApiResponse::ok(transactions)))
}

/// POST /wallet/recharges - Submit a recharge request
pub async fn submit_recharge(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Json(req): Json<SubmitRechargeRequest>,
) -> Result<(StatusCode, Json<ApiResponse<RechargeRequest>>), ApiError> {
    let request = state
        .wallet_service
        .submit_recharge(user.user_id, req)
        .await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(request))))
}

/// GET /wallet/recharges - Current user's recharge requests
pub async fn list_my_recharges(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PaginatedResponse<RechargeRequest>>>, ApiError> {
    let requests = state
        .wallet_service
        .list_user_recharges(user.user_id, &params)
        .await?;
    Ok(Json(ApiResponse::ok(requests)))
}

// ---------------------------------------------------------------------------
// Admin
// ---------------------------------------------------------------------------

/// GET /admin/recharges - Review queue with submitter details
pub async fn admin_list_recharges(
    _admin: AdminUser,
    State(state): State<AppState>,
    Query(filter): Query<RechargeFilter>,
) -> Result<Json<ApiResponse<PaginatedResponse<RechargeRequestWithUser>>>, ApiError> {
    let requests = state.wallet_service.list_recharges(filter).await?;
    Ok(Json(ApiResponse::ok(requests)))
}

/// POST /admin/recharges/:id/approve - Approve and credit the wallet
pub async fn approve_recharge(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<ReviewRechargeRequest>,
) -> Result<Json<ApiResponse<RechargeRequest>>, ApiError> {
    let request = state
        .wallet_service
        .approve_recharge(id, req.admin_notes)
        .await?;
    Ok(Json(ApiResponse::ok(request)))
}

/// POST /admin/recharges/:id/reject - Reject with a reason
pub async fn reject_recharge(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<ReviewRechargeRequest>,
) -> Result<Json<ApiResponse<RechargeRequest>>, ApiError> {
    let request = state
        .wallet_service
        .reject_recharge(id, req.admin_notes)
        .await?;
    Ok(Json(ApiResponse::ok(request)))
}

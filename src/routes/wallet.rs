//! Wallet and recharge routes

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::wallet;
use crate::state::AppState;

/// Create wallet routes
pub fn wallet_routes() -> Router<AppState> {
    Router::new()
        .route("/wallet/balance", get(wallet::get_balance))
        .route("/wallet/transactions", get(wallet::list_transactions))
        .route("/wallet/recharges", post(wallet::submit_recharge))
        .route("/wallet/recharges", get(wallet::list_my_recharges))
        .route("/admin/recharges", get(wallet::admin_list_recharges))
        .route("/admin/recharges/:id/approve", post(wallet::approve_recharge))
        .route("/admin/recharges/:id/reject", post(wallet::reject_recharge))
}

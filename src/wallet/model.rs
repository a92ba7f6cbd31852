//! Wallet models: ledger entries and recharge requests

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::types::chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::models::{RechargeStatus, WalletTxType};

/// Append-only wallet ledger entry
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, Clone)]
pub struct WalletTransaction {
    pub id: Uuid,
    pub user_id: Uuid,
    /// Signed amount: positive for topups, negative for purchases
    pub amount: Decimal,
    pub tx_type: WalletTxType,
    pub status: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

/// User-submitted claim of an external payment, awaiting admin review
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, Clone)]
pub struct RechargeRequest {
    pub id: Uuid,
    pub user_id: Uuid,
    pub payment_method_id: Uuid,
    pub amount: Decimal,
    pub transaction_id: String,
    pub status: RechargeStatus,
    pub admin_notes: Option<String>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Recharge request with submitter details (admin review queue)
#[derive(Debug, Serialize, sqlx::FromRow, Clone)]
pub struct RechargeRequestWithUser {
    pub id: Uuid,
    pub user_id: Uuid,
    pub user_email: String,
    pub user_full_name: String,
    pub payment_method_id: Uuid,
    pub payment_method_name: String,
    pub amount: Decimal,
    pub transaction_id: String,
    pub status: RechargeStatus,
    pub admin_notes: Option<String>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Recharge submission
#[derive(Debug, Deserialize)]
pub struct SubmitRechargeRequest {
    pub amount: Decimal,
    pub payment_method_id: Uuid,
    pub transaction_id: String,
}

/// Admin review actions
#[derive(Debug, Deserialize, Default)]
pub struct ReviewRechargeRequest {
    pub admin_notes: Option<String>,
}

/// Admin recharge queue filter
#[derive(Debug, Deserialize, Default)]
pub struct RechargeFilter {
    pub status: Option<RechargeStatus>,
    pub page: Option<i32>,
    pub limit: Option<i32>,
}

/// Current balance response
#[derive(Debug, Serialize)]
pub struct BalanceResponse {
    pub wallet_balance: Decimal,
}

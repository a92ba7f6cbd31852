//! Wallet service
//!
//! Recharge request submission and review, plus the ledger and balance
//! reads. Approval is the sensitive path: the status flip, the balance
//! credit, and the topup ledger row share one transaction, and the flip is
//! a guarded update so a request can only ever be approved once.

use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};
use crate::models::{PaginatedResponse, PaginationParams, RechargeStatus, WalletTxType};

use super::model::{
    RechargeFilter, RechargeRequest, RechargeRequestWithUser, SubmitRechargeRequest,
    WalletTransaction,
};

const RECHARGE_COLUMNS: &str = "id, user_id, payment_method_id, amount, transaction_id, \
                                status, admin_notes, reviewed_at, created_at";

/// Wallet service
#[derive(Clone)]
pub struct WalletService {
    db_pool: PgPool,
}

impl WalletService {
    pub fn new(db_pool: PgPool) -> Self {
        Self { db_pool }
    }

    /// Current balance for a user
    pub async fn balance(&self, user_id: Uuid) -> ApiResult<Decimal> {
        sqlx::query_scalar(
            r#"
            SELECT wallet_balance FROM users WHERE id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.db_pool)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))
    }

    /// Ledger entries for a user, newest first
    pub async fn list_transactions(
        &self,
        user_id: Uuid,
        params: &PaginationParams,
    ) -> ApiResult<PaginatedResponse<WalletTransaction>> {
        let (page, limit) = params.normalize();

        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM wallet_transactions WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_one(&self.db_pool)
        .await?;

        let data = sqlx::query_as(
            r#"
            SELECT id, user_id, amount, tx_type, status, description, created_at
            FROM wallet_transactions
            WHERE user_id = $1
            ORDER BY created_at DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(user_id)
        .bind(limit as i64)
        .bind(params.offset())
        .fetch_all(&self.db_pool)
        .await?;

        Ok(PaginatedResponse {
            data,
            total,
            page,
            limit,
        })
    }

    /// Submit a recharge request. No balance change happens here; funds are
    /// credited only at admin approval.
    pub async fn submit_recharge(
        &self,
        user_id: Uuid,
        req: SubmitRechargeRequest,
    ) -> ApiResult<RechargeRequest> {
        if req.amount <= Decimal::ZERO {
            return Err(ApiError::ValidationError(
                "Recharge amount must be greater than zero".to_string(),
            ));
        }

        let transaction_id = req.transaction_id.trim();
        if transaction_id.is_empty() {
            return Err(ApiError::ValidationError(
                "Transaction ID is required".to_string(),
            ));
        }

        let method_active: Option<(Uuid,)> = sqlx::query_as(
            r#"
            SELECT id FROM payment_methods WHERE id = $1 AND is_active = TRUE
            "#,
        )
        .bind(req.payment_method_id)
        .fetch_optional(&self.db_pool)
        .await?;

        if method_active.is_none() {
            return Err(ApiError::NotFound(
                "Payment method not found or inactive".to_string(),
            ));
        }

        let request: RechargeRequest = sqlx::query_as(&format!(
            r#"
            INSERT INTO wallet_recharge_requests (id, user_id, payment_method_id, amount, transaction_id, status)
            VALUES ($1, $2, $3, $4, $5, 'pending')
            RETURNING {}
            "#,
            RECHARGE_COLUMNS
        ))
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(req.payment_method_id)
        .bind(req.amount)
        .bind(transaction_id)
        .fetch_one(&self.db_pool)
        .await?;

        tracing::info!(
            request_id = %request.id,
            user_id = %user_id,
            amount = %request.amount,
            "Recharge request submitted"
        );

        Ok(request)
    }

    /// Recharge requests for one user, newest first
    pub async fn list_user_recharges(
        &self,
        user_id: Uuid,
        params: &PaginationParams,
    ) -> ApiResult<PaginatedResponse<RechargeRequest>> {
        let (page, limit) = params.normalize();

        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM wallet_recharge_requests WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_one(&self.db_pool)
        .await?;

        let data = sqlx::query_as(&format!(
            r#"
            SELECT {} FROM wallet_recharge_requests
            WHERE user_id = $1
            ORDER BY created_at DESC
            LIMIT $2 OFFSET $3
            "#,
            RECHARGE_COLUMNS
        ))
        .bind(user_id)
        .bind(limit as i64)
        .bind(params.offset())
        .fetch_all(&self.db_pool)
        .await?;

        Ok(PaginatedResponse {
            data,
            total,
            page,
            limit,
        })
    }

    /// Admin review queue with submitter details, filterable by status
    pub async fn list_recharges(
        &self,
        filter: RechargeFilter,
    ) -> ApiResult<PaginatedResponse<RechargeRequestWithUser>> {
        let params = PaginationParams {
            page: filter.page,
            limit: filter.limit,
        };
        let (page, limit) = params.normalize();

        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM wallet_recharge_requests
            WHERE ($1::recharge_status IS NULL OR status = $1)
            "#,
        )
        .bind(filter.status)
        .fetch_one(&self.db_pool)
        .await?;

        let data = sqlx::query_as(
            r#"
            SELECT r.id, r.user_id,
                   u.email AS user_email, u.full_name AS user_full_name,
                   r.payment_method_id, m.name AS payment_method_name,
                   r.amount, r.transaction_id, r.status, r.admin_notes,
                   r.reviewed_at, r.created_at
            FROM wallet_recharge_requests r
            JOIN users u ON u.id = r.user_id
            JOIN payment_methods m ON m.id = r.payment_method_id
            WHERE ($1::recharge_status IS NULL OR r.status = $1)
            ORDER BY r.created_at DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(filter.status)
        .bind(limit as i64)
        .bind(params.offset())
        .fetch_all(&self.db_pool)
        .await?;

        Ok(PaginatedResponse {
            data,
            total,
            page,
            limit,
        })
    }

    /// Approve a pending request: flip the status, credit the wallet, and
    /// append the topup ledger row, all atomically.
    pub async fn approve_recharge(
        &self,
        request_id: Uuid,
        admin_notes: Option<String>,
    ) -> ApiResult<RechargeRequest> {
        let mut tx = self.db_pool.begin().await?;

        // Guarded flip: zero rows means the request was already reviewed
        let request: Option<RechargeRequest> = sqlx::query_as(&format!(
            r#"
            UPDATE wallet_recharge_requests
            SET status = 'approved', admin_notes = $2, reviewed_at = NOW()
            WHERE id = $1 AND status = 'pending'
            RETURNING {}
            "#,
            RECHARGE_COLUMNS
        ))
        .bind(request_id)
        .bind(&admin_notes)
        .fetch_optional(&mut *tx)
        .await?;

        let request = match request {
            Some(r) => r,
            None => {
                tx.rollback().await?;
                return Err(self.review_conflict(request_id).await?);
            }
        };

        // Lock the user row before crediting
        let _balance: Decimal = sqlx::query_scalar(
            r#"
            SELECT wallet_balance FROM users WHERE id = $1 FOR UPDATE
            "#,
        )
        .bind(request.user_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

        sqlx::query(
            r#"
            UPDATE users
            SET wallet_balance = wallet_balance + $1, updated_at = NOW()
            WHERE id = $2
            "#,
        )
        .bind(request.amount)
        .bind(request.user_id)
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            r#"
            INSERT INTO wallet_transactions (id, user_id, amount, tx_type, status, description)
            VALUES ($1, $2, $3, $4, 'completed', $5)
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(request.user_id)
        .bind(request.amount)
        .bind(WalletTxType::Topup)
        .bind(format!("Wallet recharge approved (ref {})", request.transaction_id))
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::info!(
            request_id = %request_id,
            user_id = %request.user_id,
            amount = %request.amount,
            "Recharge request approved and wallet credited"
        );

        Ok(request)
    }

    /// Reject a pending request with a reason. No balance effect.
    pub async fn reject_recharge(
        &self,
        request_id: Uuid,
        admin_notes: Option<String>,
    ) -> ApiResult<RechargeRequest> {
        let request: Option<RechargeRequest> = sqlx::query_as(&format!(
            r#"
            UPDATE wallet_recharge_requests
            SET status = 'rejected', admin_notes = $2, reviewed_at = NOW()
            WHERE id = $1 AND status = 'pending'
            RETURNING {}
            "#,
            RECHARGE_COLUMNS
        ))
        .bind(request_id)
        .bind(&admin_notes)
        .fetch_optional(&self.db_pool)
        .await?;

        match request {
            Some(r) => {
                tracing::info!(request_id = %request_id, "Recharge request rejected");
                Ok(r)
            }
            None => Err(self.review_conflict(request_id).await?),
        }
    }

    /// Distinguish "already reviewed" from "no such request"
    async fn review_conflict(&self, request_id: Uuid) -> Result<ApiError, ApiError> {
        let status: Option<RechargeStatus> = sqlx::query_scalar(
            r#"
            SELECT status FROM wallet_recharge_requests WHERE id = $1
            "#,
        )
        .bind(request_id)
        .fetch_optional(&self.db_pool)
        .await?;

        Ok(match status {
            Some(_) => ApiError::Conflict("Recharge request was already reviewed".to_string()),
            None => ApiError::NotFound(format!("Recharge request {} not found", request_id)),
        })
    }
}

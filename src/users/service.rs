//! Admin user management
//!
//! Listing, ban/unban, and the cascading user delete. The delete removes
//! every row referencing the user (orders, recharge requests, ledger
//! entries, sessions) and then the user itself in one transaction.

use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};
use crate::models::{PaginatedResponse, PaginationParams, User, UserResponse};

/// Result of a cascading user delete
#[derive(Debug, Serialize)]
pub struct UserDeleteResult {
    pub orders_deleted: u64,
    pub recharge_requests_deleted: u64,
    pub wallet_transactions_deleted: u64,
}

/// Admin user management service
#[derive(Clone)]
pub struct UsersService {
    db_pool: PgPool,
}

impl UsersService {
    pub fn new(db_pool: PgPool) -> Self {
        Self { db_pool }
    }

    /// All users, newest first, paginated
    pub async fn list_users(
        &self,
        params: &PaginationParams,
    ) -> ApiResult<PaginatedResponse<UserResponse>> {
        let (page, limit) = params.normalize();

        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM users
            "#,
        )
        .fetch_one(&self.db_pool)
        .await?;

        let users: Vec<User> = sqlx::query_as(
            r#"
            SELECT id, email, full_name, mobile_number, password_hash, role, wallet_balance, is_active, created_at, updated_at
            FROM users
            ORDER BY created_at DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit as i64)
        .bind(params.offset())
        .fetch_all(&self.db_pool)
        .await?;

        Ok(PaginatedResponse {
            data: users.into_iter().map(UserResponse::from).collect(),
            total,
            page,
            limit,
        })
    }

    pub async fn get_user(&self, id: Uuid) -> ApiResult<UserResponse> {
        let user: User = sqlx::query_as(
            r#"
            SELECT id, email, full_name, mobile_number, password_hash, role, wallet_balance, is_active, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db_pool)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("User {} not found", id)))?;

        Ok(user.into())
    }

    /// Ban or unban an account. Banned users fail login and session refresh.
    pub async fn set_active(&self, id: Uuid, is_active: bool) -> ApiResult<UserResponse> {
        let user: User = sqlx::query_as(
            r#"
            UPDATE users
            SET is_active = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING id, email, full_name, mobile_number, password_hash, role, wallet_balance, is_active, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(is_active)
        .fetch_optional(&self.db_pool)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("User {} not found", id)))?;

        tracing::info!(user_id = %id, is_active, "User active flag changed");

        Ok(user.into())
    }

    /// Delete a user and everything referencing it, atomically.
    pub async fn delete_user(&self, id: Uuid) -> ApiResult<UserDeleteResult> {
        let mut tx = self.db_pool.begin().await?;

        let orders_deleted = sqlx::query(
            r#"
            DELETE FROM orders WHERE user_id = $1
            "#,
        )
        .bind(id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        let recharge_requests_deleted = sqlx::query(
            r#"
            DELETE FROM wallet_recharge_requests WHERE user_id = $1
            "#,
        )
        .bind(id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        let wallet_transactions_deleted = sqlx::query(
            r#"
            DELETE FROM wallet_transactions WHERE user_id = $1
            "#,
        )
        .bind(id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        sqlx::query(
            r#"
            DELETE FROM auth_sessions WHERE user_id = $1
            "#,
        )
        .bind(id)
        .execute(&mut *tx)
        .await?;

        let rows = sqlx::query(
            r#"
            DELETE FROM users WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        if rows == 0 {
            tx.rollback().await?;
            return Err(ApiError::NotFound(format!("User {} not found", id)));
        }

        tx.commit().await?;

        tracing::info!(
            user_id = %id,
            orders_deleted,
            "User deleted with referencing rows"
        );

        Ok(UserDeleteResult {
            orders_deleted,
            recharge_requests_deleted,
            wallet_transactions_deleted,
        })
    }
}

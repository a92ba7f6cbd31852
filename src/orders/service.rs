//! Order service
//!
//! Order placement (wallet or manual payment), status transitions, and the
//! admin bulk actions. The wallet purchase path runs as one transaction:
//! the buyer row is locked, the balance re-checked, and the deduction,
//! ledger append, and order insert either all land or none do.

use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};
use crate::models::{OrderStatus, PaginatedResponse, PaginationParams, WalletTxType};
use crate::payments::PaymentMethod;

use super::model::{
    Order, OrderCleanupResult, OrderFilter, OrderWithDetails, PaymentSelector, PlaceOrderRequest,
    WALLET_METHOD_NAME,
};

const ORDER_COLUMNS: &str = "id, user_id, product_id, payment_method, payment_number, \
                             transaction_id, game_id, status, created_at, updated_at";

/// Order service
#[derive(Clone)]
pub struct OrdersService {
    db_pool: PgPool,
}

/// Product fields needed at checkout
#[derive(Debug, sqlx::FromRow)]
struct CheckoutProduct {
    id: Uuid,
    name: String,
    diamonds_count: i32,
    price: Decimal,
}

impl OrdersService {
    pub fn new(db_pool: PgPool) -> Self {
        Self { db_pool }
    }

    /// Place an order for the given user.
    ///
    /// Orders are always created `pending`. Wallet payments deduct exactly
    /// the product price and record a `purchase` ledger entry with a negative
    /// amount; manual payments leave the balance untouched and store the
    /// submitted payment number and transaction id verbatim.
    pub async fn place_order(&self, user_id: Uuid, req: PlaceOrderRequest) -> ApiResult<Order> {
        let game_id = req.game_id.trim();
        if game_id.is_empty() {
            return Err(ApiError::ValidationError(
                "Game ID is required".to_string(),
            ));
        }

        match req.payment {
            PaymentSelector::Wallet => self.place_wallet_order(user_id, req.product_id, game_id).await,
            PaymentSelector::External { method_id } => {
                let payment_number = req
                    .payment_number
                    .as_deref()
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .ok_or_else(|| {
                        ApiError::ValidationError("Payment number is required".to_string())
                    })?;
                let transaction_id = req
                    .transaction_id
                    .as_deref()
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .ok_or_else(|| {
                        ApiError::ValidationError("Transaction ID is required".to_string())
                    })?;

                self.place_external_order(
                    user_id,
                    req.product_id,
                    method_id,
                    payment_number,
                    transaction_id,
                    game_id,
                )
                .await
            }
        }
    }

    /// Wallet path: lock, check, deduct, log, insert, all in one transaction.
    async fn place_wallet_order(
        &self,
        user_id: Uuid,
        product_id: Uuid,
        game_id: &str,
    ) -> ApiResult<Order> {
        let mut tx = self.db_pool.begin().await?;

        let product: CheckoutProduct = sqlx::query_as(
            r#"
            SELECT id, name, diamonds_count, price
            FROM products
            WHERE id = $1 AND is_active = TRUE
            "#,
        )
        .bind(product_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| ApiError::NotFound("Product not found or inactive".to_string()))?;

        // Row lock serializes concurrent purchases by the same user
        let balance: Decimal = sqlx::query_scalar(
            r#"
            SELECT wallet_balance FROM users WHERE id = $1 FOR UPDATE
            "#,
        )
        .bind(user_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

        if balance < product.price {
            return Err(ApiError::InsufficientBalance);
        }

        sqlx::query(
            r#"
            UPDATE users
            SET wallet_balance = wallet_balance - $1, updated_at = NOW()
            WHERE id = $2
            "#,
        )
        .bind(product.price)
        .bind(user_id)
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            r#"
            INSERT INTO wallet_transactions (id, user_id, amount, tx_type, status, description)
            VALUES ($1, $2, $3, $4, 'completed', $5)
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(-product.price)
        .bind(WalletTxType::Purchase)
        .bind(format!(
            "Purchase: {} ({} diamonds)",
            product.name, product.diamonds_count
        ))
        .execute(&mut *tx)
        .await?;

        let order: Order = sqlx::query_as(&format!(
            r#"
            INSERT INTO orders (id, user_id, product_id, payment_method, payment_number, transaction_id, game_id, status)
            VALUES ($1, $2, $3, $4, '', '', $5, 'pending')
            RETURNING {}
            "#,
            ORDER_COLUMNS
        ))
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(product.id)
        .bind(WALLET_METHOD_NAME)
        .bind(game_id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::info!(
            order_id = %order.id,
            user_id = %user_id,
            price = %product.price,
            "Wallet order placed"
        );

        Ok(order)
    }

    /// Manual path: balance untouched, submitted references stored verbatim.
    async fn place_external_order(
        &self,
        user_id: Uuid,
        product_id: Uuid,
        method_id: Uuid,
        payment_number: &str,
        transaction_id: &str,
        game_id: &str,
    ) -> ApiResult<Order> {
        let method: PaymentMethod = sqlx::query_as(
            r#"
            SELECT id, name, account_number, instructions, is_active, created_at, updated_at
            FROM payment_methods
            WHERE id = $1 AND is_active = TRUE
            "#,
        )
        .bind(method_id)
        .fetch_optional(&self.db_pool)
        .await?
        .ok_or_else(|| ApiError::NotFound("Payment method not found or inactive".to_string()))?;

        let product_exists: Option<(Uuid,)> = sqlx::query_as(
            r#"
            SELECT id FROM products WHERE id = $1 AND is_active = TRUE
            "#,
        )
        .bind(product_id)
        .fetch_optional(&self.db_pool)
        .await?;

        if product_exists.is_none() {
            return Err(ApiError::NotFound(
                "Product not found or inactive".to_string(),
            ));
        }

        let order: Order = sqlx::query_as(&format!(
            r#"
            INSERT INTO orders (id, user_id, product_id, payment_method, payment_number, transaction_id, game_id, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7, 'pending')
            RETURNING {}
            "#,
            ORDER_COLUMNS
        ))
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(product_id)
        .bind(&method.name)
        .bind(payment_number)
        .bind(transaction_id)
        .bind(game_id)
        .fetch_one(&self.db_pool)
        .await?;

        tracing::info!(
            order_id = %order.id,
            user_id = %user_id,
            method = %method.name,
            "Manual-payment order placed"
        );

        Ok(order)
    }

    /// Orders for one user, newest first
    pub async fn list_user_orders(
        &self,
        user_id: Uuid,
        params: &PaginationParams,
    ) -> ApiResult<PaginatedResponse<OrderWithDetails>> {
        let (page, limit) = params.normalize();

        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM orders WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_one(&self.db_pool)
        .await?;

        let data = sqlx::query_as(
            r#"
            SELECT o.id, o.user_id, o.product_id,
                   p.name AS product_name, p.price AS product_price,
                   u.email AS user_email, u.full_name AS user_full_name,
                   o.payment_method, o.payment_number, o.transaction_id,
                   o.game_id, o.status, o.created_at
            FROM orders o
            JOIN products p ON p.id = o.product_id
            JOIN users u ON u.id = o.user_id
            WHERE o.user_id = $1
            ORDER BY o.created_at DESC
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

    /// Admin listing with product and buyer details, filterable by status
    pub async fn list_orders(
        &self,
        filter: OrderFilter,
    ) -> ApiResult<PaginatedResponse<OrderWithDetails>> {
        let params = PaginationParams {
            page: filter.page,
            limit: filter.limit,
        };
        let (page, limit) = params.normalize();

        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM orders
            WHERE ($1::order_status IS NULL OR status = $1)
              AND ($2::uuid IS NULL OR user_id = $2)
            "#,
        )
        .bind(filter.status)
        .bind(filter.user_id)
        .fetch_one(&self.db_pool)
        .await?;

        let data = sqlx::query_as(
            r#"
            SELECT o.id, o.user_id, o.product_id,
                   p.name AS product_name, p.price AS product_price,
                   u.email AS user_email, u.full_name AS user_full_name,
                   o.payment_method, o.payment_number, o.transaction_id,
                   o.game_id, o.status, o.created_at
            FROM orders o
            JOIN products p ON p.id = o.product_id
            JOIN users u ON u.id = o.user_id
            WHERE ($1::order_status IS NULL OR o.status = $1)
              AND ($2::uuid IS NULL OR o.user_id = $2)
            ORDER BY o.created_at DESC
            LIMIT $3 OFFSET $4
            "#,
        )
        .bind(filter.status)
        .bind(filter.user_id)
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

    pub async fn get_order(&self, id: Uuid) -> ApiResult<Order> {
        sqlx::query_as(&format!(
            r#"
            SELECT {} FROM orders WHERE id = $1
            "#,
            ORDER_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.db_pool)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Order {} not found", id)))
    }

    /// Move an order along its lifecycle.
    ///
    /// Only `pending -> completed` and `pending -> cancelled` are legal;
    /// completed and cancelled are terminal.
    pub async fn update_status(&self, id: Uuid, new_status: OrderStatus) -> ApiResult<Order> {
        let order = self.get_order(id).await?;

        if !order.status.can_transition_to(new_status) {
            return Err(ApiError::Conflict(format!(
                "Cannot change order status from {} to {}",
                order.status.as_str(),
                new_status.as_str()
            )));
        }

        // Guarded update: losing a race to another admin means no-op here
        let updated: Order = sqlx::query_as(&format!(
            r#"
            UPDATE orders
            SET status = $2, updated_at = NOW()
            WHERE id = $1 AND status = 'pending'
            RETURNING {}
            "#,
            ORDER_COLUMNS
        ))
        .bind(id)
        .bind(new_status)
        .fetch_optional(&self.db_pool)
        .await?
        .ok_or_else(|| ApiError::Conflict("Order was already reviewed".to_string()))?;

        tracing::info!(order_id = %id, status = updated.status.as_str(), "Order status updated");

        Ok(updated)
    }

    /// Hard delete; allowed from any status (admin action)
    pub async fn delete_order(&self, id: Uuid) -> ApiResult<()> {
        let rows = sqlx::query(
            r#"
            DELETE FROM orders WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.db_pool)
        .await?
        .rows_affected();

        if rows == 0 {
            return Err(ApiError::NotFound(format!("Order {} not found", id)));
        }

        Ok(())
    }

    /// Bulk delete completed orders
    pub async fn clean_completed(&self) -> ApiResult<OrderCleanupResult> {
        let orders_deleted = sqlx::query(
            r#"
            DELETE FROM orders WHERE status = 'completed'
            "#,
        )
        .execute(&self.db_pool)
        .await?
        .rows_affected();

        tracing::info!(orders_deleted, "Cleaned completed orders");

        Ok(OrderCleanupResult { orders_deleted })
    }
}

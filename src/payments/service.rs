//! Payment method service
//!
//! Admin CRUD over manual payment channels plus the public listing used by
//! the checkout and recharge forms.

use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};

use super::model::{CreatePaymentMethodRequest, PaymentMethod, UpdatePaymentMethodRequest};

const METHOD_COLUMNS: &str =
    "id, name, account_number, instructions, is_active, created_at, updated_at";

/// Payment method service
#[derive(Clone)]
pub struct PaymentsService {
    db_pool: PgPool,
}

impl PaymentsService {
    pub fn new(db_pool: PgPool) -> Self {
        Self { db_pool }
    }

    /// Active methods for the public checkout/recharge forms
    pub async fn list_active(&self) -> ApiResult<Vec<PaymentMethod>> {
        let methods = sqlx::query_as(&format!(
            r#"
            SELECT {} FROM payment_methods
            WHERE is_active = TRUE
            ORDER BY name ASC
            "#,
            METHOD_COLUMNS
        ))
        .fetch_all(&self.db_pool)
        .await?;

        Ok(methods)
    }

    /// All methods, newest first (admin table)
    pub async fn list_all(&self) -> ApiResult<Vec<PaymentMethod>> {
        let methods = sqlx::query_as(&format!(
            r#"
            SELECT {} FROM payment_methods
            ORDER BY created_at DESC
            "#,
            METHOD_COLUMNS
        ))
        .fetch_all(&self.db_pool)
        .await?;

        Ok(methods)
    }

    pub async fn create(&self, req: CreatePaymentMethodRequest) -> ApiResult<PaymentMethod> {
        let method = sqlx::query_as(&format!(
            r#"
            INSERT INTO payment_methods (id, name, account_number, instructions, is_active)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {}
            "#,
            METHOD_COLUMNS
        ))
        .bind(Uuid::new_v4())
        .bind(&req.name)
        .bind(&req.account_number)
        .bind(&req.instructions)
        .bind(req.is_active)
        .fetch_one(&self.db_pool)
        .await?;

        Ok(method)
    }

    pub async fn update(
        &self,
        id: Uuid,
        req: UpdatePaymentMethodRequest,
    ) -> ApiResult<PaymentMethod> {
        let method = sqlx::query_as(&format!(
            r#"
            UPDATE payment_methods
            SET name = COALESCE($2, name),
                account_number = COALESCE($3, account_number),
                instructions = COALESCE($4, instructions),
                is_active = COALESCE($5, is_active),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {}
            "#,
            METHOD_COLUMNS
        ))
        .bind(id)
        .bind(&req.name)
        .bind(&req.account_number)
        .bind(&req.instructions)
        .bind(req.is_active)
        .fetch_optional(&self.db_pool)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Payment method {} not found", id)))?;

        Ok(method)
    }

    /// Delete a method. Fails with a conflict while recharge requests still
    /// reference it; deactivate instead in that case.
    pub async fn delete(&self, id: Uuid) -> ApiResult<()> {
        let rows = sqlx::query(
            r#"
            DELETE FROM payment_methods WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.db_pool)
        .await?
        .rows_affected();

        if rows == 0 {
            return Err(ApiError::NotFound(format!(
                "Payment method {} not found",
                id
            )));
        }

        Ok(())
    }
}

//! Admin dashboard service
//!
//! Aggregate counters for the back-office landing page and the single-row
//! site settings.

use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::error::ApiResult;
use crate::models::SiteSettings;

/// Dashboard counters
#[derive(Debug, Serialize)]
pub struct DashboardStats {
    pub total_orders: i64,
    pub pending_orders: i64,
    pub active_products: i64,
    pub total_users: i64,
    pub pending_recharges: i64,
}

/// Site settings update (admin)
#[derive(Debug, Deserialize, validator::Validate)]
pub struct UpdateSettingsRequest {
    #[validate(length(min = 1, max = 120))]
    pub store_name: Option<String>,
    #[validate(length(min = 1, max = 8))]
    pub currency: Option<String>,
    pub support_contact: Option<String>,
    pub announcement: Option<String>,
    pub maintenance_mode: Option<bool>,
}

/// Admin service
#[derive(Clone)]
pub struct AdminService {
    db_pool: PgPool,
}

impl AdminService {
    pub fn new(db_pool: PgPool) -> Self {
        Self { db_pool }
    }

    /// Counters shown on the admin dashboard
    pub async fn stats(&self) -> ApiResult<DashboardStats> {
        let total_orders: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM orders")
            .fetch_one(&self.db_pool)
            .await?;

        let pending_orders: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM orders WHERE status = 'pending'")
                .fetch_one(&self.db_pool)
                .await?;

        let active_products: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM products WHERE is_active = TRUE")
                .fetch_one(&self.db_pool)
                .await?;

        let total_users: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.db_pool)
            .await?;

        let pending_recharges: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM wallet_recharge_requests WHERE status = 'pending'",
        )
        .fetch_one(&self.db_pool)
        .await?;

        Ok(DashboardStats {
            total_orders,
            pending_orders,
            active_products,
            total_users,
            pending_recharges,
        })
    }

    /// Current site settings (seeded row, always present)
    pub async fn get_settings(&self) -> ApiResult<SiteSettings> {
        let settings = sqlx::query_as(
            r#"
            SELECT store_name, currency, support_contact, announcement, maintenance_mode, updated_at
            FROM site_settings
            LIMIT 1
            "#,
        )
        .fetch_one(&self.db_pool)
        .await?;

        Ok(settings)
    }

    pub async fn update_settings(&self, req: UpdateSettingsRequest) -> ApiResult<SiteSettings> {
        let settings = sqlx::query_as(
            r#"
            UPDATE site_settings
            SET store_name = COALESCE($1, store_name),
                currency = COALESCE($2, currency),
                support_contact = COALESCE($3, support_contact),
                announcement = COALESCE($4, announcement),
                maintenance_mode = COALESCE($5, maintenance_mode),
                updated_at = NOW()
            RETURNING store_name, currency, support_contact, announcement, maintenance_mode, updated_at
            "#,
        )
        .bind(&req.store_name)
        .bind(&req.currency)
        .bind(&req.support_contact)
        .bind(&req.announcement)
        .bind(req.maintenance_mode)
        .fetch_one(&self.db_pool)
        .await?;

        tracing::info!("Site settings updated");

        Ok(settings)
    }
}

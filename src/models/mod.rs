//! Data models for the top-up store backend

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::types::chrono::{DateTime, Utc};
use uuid::Uuid;

pub mod auth;
pub use auth::*;

/// User model
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, Clone)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub full_name: String,
    pub mobile_number: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: UserRole,
    pub wallet_balance: Decimal,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            full_name: user.full_name,
            mobile_number: user.mobile_number,
            role: user.role,
            wallet_balance: user.wallet_balance,
            is_active: user.is_active,
            created_at: user.created_at,
        }
    }
}

/// User roles
#[derive(Debug, Serialize, Deserialize, sqlx::Type, Clone, Copy, PartialEq, Eq)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Customer,
    Admin,
}

/// Order lifecycle status
#[derive(Debug, Serialize, Deserialize, sqlx::Type, Clone, Copy, PartialEq, Eq)]
#[sqlx(type_name = "order_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Completed,
    Cancelled,
}

impl OrderStatus {
    /// Completed and cancelled are terminal; there is no way back to pending.
    pub fn can_transition_to(self, next: OrderStatus) -> bool {
        matches!(
            (self, next),
            (OrderStatus::Pending, OrderStatus::Completed)
                | (OrderStatus::Pending, OrderStatus::Cancelled)
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

/// Recharge request lifecycle status
#[derive(Debug, Serialize, Deserialize, sqlx::Type, Clone, Copy, PartialEq, Eq)]
#[sqlx(type_name = "recharge_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum RechargeStatus {
    Pending,
    Approved,
    Rejected,
}

impl RechargeStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, RechargeStatus::Pending)
    }
}

/// Wallet ledger entry type
#[derive(Debug, Serialize, Deserialize, sqlx::Type, Clone, Copy, PartialEq, Eq)]
#[sqlx(type_name = "wallet_tx_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum WalletTxType {
    Topup,
    Purchase,
}

/// Site-wide settings (single row)
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, Clone)]
pub struct SiteSettings {
    pub store_name: String,
    pub currency: String,
    pub support_contact: String,
    pub announcement: Option<String>,
    pub maintenance_mode: bool,
    pub updated_at: DateTime<Utc>,
}

/// API response wrapper
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

/// Pagination parameters
#[derive(Debug, Deserialize, Default)]
pub struct PaginationParams {
    pub page: Option<i32>,
    pub limit: Option<i32>,
}

impl PaginationParams {
    /// Clamp to sane bounds: page >= 1, 1 <= limit <= 100.
    pub fn normalize(&self) -> (i32, i32) {
        let page = self.page.unwrap_or(1).max(1);
        let limit = self.limit.unwrap_or(20).clamp(1, 100);
        (page, limit)
    }

    pub fn offset(&self) -> i64 {
        let (page, limit) = self.normalize();
        // Widen before multiplying; page comes straight from the query string
        (page as i64 - 1) * limit as i64
    }
}

/// Paginated response
#[derive(Debug, Serialize)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub total: i64,
    pub page: i32,
    pub limit: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_status_transitions() {
        assert!(OrderStatus::Pending.can_transition_to(OrderStatus::Completed));
        assert!(OrderStatus::Pending.can_transition_to(OrderStatus::Cancelled));

        // Terminal states never transition
        assert!(!OrderStatus::Completed.can_transition_to(OrderStatus::Pending));
        assert!(!OrderStatus::Completed.can_transition_to(OrderStatus::Cancelled));
        assert!(!OrderStatus::Cancelled.can_transition_to(OrderStatus::Pending));
        assert!(!OrderStatus::Cancelled.can_transition_to(OrderStatus::Completed));

        // No self transitions
        assert!(!OrderStatus::Pending.can_transition_to(OrderStatus::Pending));
    }

    #[test]
    fn test_recharge_status_terminal() {
        assert!(!RechargeStatus::Pending.is_terminal());
        assert!(RechargeStatus::Approved.is_terminal());
        assert!(RechargeStatus::Rejected.is_terminal());
    }

    #[test]
    fn test_pagination_normalize() {
        let params = PaginationParams {
            page: None,
            limit: None,
        };
        assert_eq!(params.normalize(), (1, 20));
        assert_eq!(params.offset(), 0);

        let params = PaginationParams {
            page: Some(3),
            limit: Some(10),
        };
        assert_eq!(params.normalize(), (3, 10));
        assert_eq!(params.offset(), 20);

        let params = PaginationParams {
            page: Some(-1),
            limit: Some(1000),
        };
        assert_eq!(params.normalize(), (1, 100));

        // Huge page numbers must not overflow the offset arithmetic
        let params = PaginationParams {
            page: Some(i32::MAX),
            limit: Some(100),
        };
        assert_eq!(params.offset(), (i32::MAX as i64 - 1) * 100);
    }
}

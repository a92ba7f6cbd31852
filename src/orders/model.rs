//! Order models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::types::chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::models::OrderStatus;

/// Display name stored on orders paid from the wallet
pub const WALLET_METHOD_NAME: &str = "Wallet";

/// Order row
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, Clone)]
pub struct Order {
    pub id: Uuid,
    pub user_id: Uuid,
    pub product_id: Uuid,
    /// Denormalized method display name; `"Wallet"` for wallet payments
    pub payment_method: String,
    pub payment_number: String,
    pub transaction_id: String,
    pub game_id: String,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Order row with product and buyer details embedded (admin listing)
#[derive(Debug, Serialize, sqlx::FromRow, Clone)]
pub struct OrderWithDetails {
    pub id: Uuid,
    pub user_id: Uuid,
    pub product_id: Uuid,
    pub product_name: String,
    pub product_price: Decimal,
    pub user_email: String,
    pub user_full_name: String,
    pub payment_method: String,
    pub payment_number: String,
    pub transaction_id: String,
    pub game_id: String,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

/// How the buyer pays for an order.
///
/// Tagged so a method UUID and the wallet case can never be confused in
/// one stringly-typed field.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PaymentSelector {
    Wallet,
    External { method_id: Uuid },
}

/// Checkout request
#[derive(Debug, Deserialize)]
pub struct PlaceOrderRequest {
    pub product_id: Uuid,
    pub payment: PaymentSelector,
    /// Payer account number; required for external methods
    pub payment_number: Option<String>,
    /// External transaction reference; required for external methods
    pub transaction_id: Option<String>,
    pub game_id: String,
}

/// Admin status change request
#[derive(Debug, Deserialize)]
pub struct UpdateOrderStatusRequest {
    pub status: OrderStatus,
}

/// Admin order listing filter
#[derive(Debug, Deserialize, Default)]
pub struct OrderFilter {
    pub status: Option<OrderStatus>,
    pub user_id: Option<Uuid>,
    pub page: Option<i32>,
    pub limit: Option<i32>,
}

/// Result of the clean-completed bulk action
#[derive(Debug, Serialize)]
pub struct OrderCleanupResult {
    pub orders_deleted: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_selector_wallet_roundtrip() {
        let json = r#"{"type":"wallet"}"#;
        let selector: PaymentSelector = serde_json::from_str(json).unwrap();
        assert_eq!(selector, PaymentSelector::Wallet);

        let back = serde_json::to_string(&selector).unwrap();
        assert!(back.contains("wallet"));
    }

    #[test]
    fn test_payment_selector_external() {
        let id = Uuid::new_v4();
        let json = format!(r#"{{"type":"external","method_id":"{}"}}"#, id);
        let selector: PaymentSelector = serde_json::from_str(&json).unwrap();
        assert_eq!(selector, PaymentSelector::External { method_id: id });
    }

    #[test]
    fn test_payment_selector_rejects_bare_string() {
        // The old sentinel form must not parse
        assert!(serde_json::from_str::<PaymentSelector>(r#""wallet""#).is_err());
    }
}

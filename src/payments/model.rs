//! Payment method models

use serde::{Deserialize, Serialize};
use sqlx::types::chrono::{DateTime, Utc};
use uuid::Uuid;

/// Manual payment channel (mobile banking account, etc.)
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, Clone)]
pub struct PaymentMethod {
    pub id: Uuid,
    pub name: String,
    pub account_number: String,
    pub instructions: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, validator::Validate)]
pub struct CreatePaymentMethodRequest {
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    #[validate(length(min = 1, max = 64))]
    pub account_number: String,
    pub instructions: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Debug, Deserialize, validator::Validate)]
pub struct UpdatePaymentMethodRequest {
    #[validate(length(min = 1, max = 120))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 64))]
    pub account_number: Option<String>,
    pub instructions: Option<String>,
    pub is_active: Option<bool>,
}

fn default_true() -> bool {
    true
}

//! Catalog models: categories and products

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::types::chrono::{DateTime, Utc};
use uuid::Uuid;

/// Product category
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, Clone)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Diamond package product
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, Clone)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub category_id: Option<Uuid>,
    pub description: Option<String>,
    pub diamonds_count: i32,
    pub price: Decimal,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Product row with its category name embedded (storefront listing)
#[derive(Debug, Serialize, sqlx::FromRow, Clone)]
pub struct ProductWithCategory {
    pub id: Uuid,
    pub name: String,
    pub category_id: Option<Uuid>,
    pub category_name: Option<String>,
    pub description: Option<String>,
    pub diamonds_count: i32,
    pub price: Decimal,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, validator::Validate)]
pub struct CreateCategoryRequest {
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    pub description: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Debug, Deserialize, validator::Validate)]
pub struct UpdateCategoryRequest {
    #[validate(length(min = 1, max = 120))]
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Deserialize, validator::Validate)]
pub struct CreateProductRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    pub category_id: Option<Uuid>,
    pub description: Option<String>,
    #[validate(range(min = 0))]
    pub diamonds_count: i32,
    pub price: Decimal,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Debug, Deserialize, validator::Validate)]
pub struct UpdateProductRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    pub category_id: Option<Uuid>,
    pub description: Option<String>,
    pub diamonds_count: Option<i32>,
    pub price: Option<Decimal>,
    pub is_active: Option<bool>,
}

/// Storefront product listing filter
#[derive(Debug, Deserialize, Default)]
pub struct StorefrontFilter {
    pub category_id: Option<Uuid>,
}

/// Result of a cascading category delete
#[derive(Debug, Serialize)]
pub struct CategoryDeleteResult {
    pub products_deleted: u64,
}

/// Result of the clean-inactive bulk action
#[derive(Debug, Serialize)]
pub struct CleanInactiveResult {
    pub products_deleted: u64,
    pub categories_deleted: u64,
}

fn default_true() -> bool {
    true
}

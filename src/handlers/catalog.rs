//! Catalog HTTP handlers (storefront reads + admin CRUD)

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use super::AdminUser;
use crate::catalog::{
    Category, CategoryDeleteResult, CleanInactiveResult, CreateCategoryRequest,
    CreateProductRequest, Product, ProductWithCategory, StorefrontFilter, UpdateCategoryRequest,
    UpdateProductRequest,
};
use crate::error::ApiError;
use crate::models::ApiResponse;
use crate::state::AppState;

/// GET /categories - Active categories for the storefront
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Category>>>, ApiError> {
    let categories = state.catalog_service.list_active_categories().await?;
    Ok(Json(ApiResponse::ok(categories)))
}

/// GET /products - Active products, optionally filtered by category
pub async fn list_products(
    State(state): State<AppState>,
    Query(filter): Query<StorefrontFilter>,
) -> Result<Json<ApiResponse<Vec<ProductWithCategory>>>, ApiError> {
    let products = state.catalog_service.list_storefront_products(filter).await?;
    Ok(Json(ApiResponse::ok(products)))
}

// ---------------------------------------------------------------------------
// Admin
// ---------------------------------------------------------------------------

/// GET /admin/categories
pub async fn admin_list_categories(
    _admin: AdminUser,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Category>>>, ApiError> {
    let categories = state.catalog_service.list_all_categories().await?;
    Ok(Json(ApiResponse::ok(categories)))
}

/// POST /admin/categories
pub async fn create_category(
    _admin: AdminUser,
    State(state): State<AppState>,
    Json(req): Json<CreateCategoryRequest>,
) -> Result<Json<ApiResponse<Category>>, ApiError> {
    req.validate()?;
    let category = state.catalog_service.create_category(req).await?;
    Ok(Json(ApiResponse::ok(category)))
}

/// PATCH /admin/categories/:id
pub async fn update_category(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateCategoryRequest>,
) -> Result<Json<ApiResponse<Category>>, ApiError> {
    req.validate()?;
    let category = state.catalog_service.update_category(id, req).await?;
    Ok(Json(ApiResponse::ok(category)))
}

/// DELETE /admin/categories/:id - Cascading delete (products first)
pub async fn delete_category(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<CategoryDeleteResult>>, ApiError> {
    let result = state.catalog_service.delete_category(id).await?;
    Ok(Json(ApiResponse::ok(result)))
}

/// GET /admin/products
pub async fn admin_list_products(
    _admin: AdminUser,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<ProductWithCategory>>>, ApiError> {
    let products = state.catalog_service.list_all_products().await?;
    Ok(Json(ApiResponse::ok(products)))
}

/// POST /admin/products
pub async fn create_product(
    _admin: AdminUser,
    State(state): State<AppState>,
    Json(req): Json<CreateProductRequest>,
) -> Result<Json<ApiResponse<Product>>, ApiError> {
    req.validate()?;
    let product = state.catalog_service.create_product(req).await?;
    Ok(Json(ApiResponse::ok(product)))
}

/// PATCH /admin/products/:id
pub async fn update_product(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateProductRequest>,
) -> Result<Json<ApiResponse<Product>>, ApiError> {
    req.validate()?;
    let product = state.catalog_service.update_product(id, req).await?;
    Ok(Json(ApiResponse::ok(product)))
}

/// DELETE /admin/products/:id
pub async fn delete_product(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.catalog_service.delete_product(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /admin/catalog/clean-inactive - Bulk delete inactive rows
pub async fn clean_inactive(
    _admin: AdminUser,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<CleanInactiveResult>>, ApiError> {
    let result = state.catalog_service.clean_inactive().await?;
    Ok(Json(ApiResponse::ok(result)))
}

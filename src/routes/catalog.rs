//! Catalog routes (storefront reads + admin CRUD)

use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use crate::handlers::catalog;
use crate::state::AppState;

/// Create catalog routes
pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/categories", get(catalog::list_categories))
        .route("/products", get(catalog::list_products))
        .route("/admin/categories", get(catalog::admin_list_categories))
        .route("/admin/categories", post(catalog::create_category))
        .route("/admin/categories/:id", patch(catalog::update_category))
        .route("/admin/categories/:id", delete(catalog::delete_category))
        .route("/admin/products", get(catalog::admin_list_products))
        .route("/admin/products", post(catalog::create_product))
        .route("/admin/products/:id", patch(catalog::update_product))
        .route("/admin/products/:id", delete(catalog::delete_product))
        .route("/admin/catalog/clean-inactive", post(catalog::clean_inactive))
}

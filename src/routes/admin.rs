//! Dashboard and site settings routes

use axum::{
    routing::{get, patch},
    Router,
};

use crate::handlers::admin;
use crate::state::AppState;

/// Create dashboard and settings routes
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/settings", get(admin::get_settings))
        .route("/admin/stats", get(admin::get_stats))
        .route("/admin/settings", patch(admin::update_settings))
}

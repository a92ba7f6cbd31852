//! Order routes

use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use crate::handlers::orders;
use crate::state::AppState;

/// Create order routes
pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/orders", post(orders::place_order))
        .route("/orders", get(orders::list_my_orders))
        .route("/admin/orders", get(orders::admin_list_orders))
        .route("/admin/orders/:id/status", patch(orders::update_order_status))
        .route("/admin/orders/:id", delete(orders::delete_order))
        .route(
            "/admin/orders/clean-completed",
            post(orders::clean_completed_orders),
        )
}

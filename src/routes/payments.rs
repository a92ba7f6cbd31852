//! Payment method routes

use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use crate::handlers::payments;
use crate::state::AppState;

/// Create payment method routes
pub fn payment_routes() -> Router<AppState> {
    Router::new()
        .route("/payment-methods", get(payments::list_payment_methods))
        .route(
            "/admin/payment-methods",
            get(payments::admin_list_payment_methods),
        )
        .route(
            "/admin/payment-methods",
            post(payments::create_payment_method),
        )
        .route(
            "/admin/payment-methods/:id",
            patch(payments::update_payment_method),
        )
        .route(
            "/admin/payment-methods/:id",
            delete(payments::delete_payment_method),
        )
}

//! Admin user management routes

use axum::{
    routing::{delete, get, patch},
    Router,
};

use crate::handlers::users;
use crate::state::AppState;

/// Create user management routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/users", get(users::list_users))
        .route("/admin/users/:id", get(users::get_user))
        .route("/admin/users/:id/active", patch(users::set_user_active))
        .route("/admin/users/:id", delete(users::delete_user))
}

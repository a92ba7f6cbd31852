//! Route definitions for the top-up store API

mod admin;
mod auth;
mod catalog;
mod orders;
mod payments;
mod users;
mod wallet;

pub use admin::admin_routes;
pub use auth::auth_routes;
pub use catalog::catalog_routes;
pub use orders::order_routes;
pub use payments::payment_routes;
pub use users::user_routes;
pub use wallet::wallet_routes;

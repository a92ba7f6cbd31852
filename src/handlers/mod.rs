//! API handlers for the top-up store backend

pub mod admin;
pub mod auth;
pub mod catalog;
pub mod orders;
pub mod payments;
pub mod users;
pub mod wallet;

// Re-export extractors from middleware for handler use
pub use crate::middleware::auth::{AdminUser, AuthenticatedUser};

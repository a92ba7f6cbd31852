//! Top-Up Store Backend Library
//!
//! This library exports the core modules for the diamond top-up
//! storefront backend server.

pub mod admin;
pub mod auth;
pub mod catalog;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod orders;
pub mod payments;
pub mod routes;
pub mod state;
pub mod users;
pub mod wallet;

//! Application state shared across handlers

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::PgPool;

use crate::admin::AdminService;
use crate::auth::AuthService;
use crate::catalog::CatalogService;
use crate::orders::OrdersService;
use crate::payments::PaymentsService;
use crate::users::UsersService;
use crate::wallet::WalletService;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub auth_service: Arc<AuthService>,
    pub catalog_service: Arc<CatalogService>,
    pub orders_service: Arc<OrdersService>,
    pub wallet_service: Arc<WalletService>,
    pub payments_service: Arc<PaymentsService>,
    pub users_service: Arc<UsersService>,
    pub admin_service: Arc<AdminService>,
}

impl AppState {
    pub fn new(db_pool: PgPool, auth_service: Arc<AuthService>) -> Self {
        Self {
            auth_service,
            catalog_service: Arc::new(CatalogService::new(db_pool.clone())),
            orders_service: Arc::new(OrdersService::new(db_pool.clone())),
            wallet_service: Arc::new(WalletService::new(db_pool.clone())),
            payments_service: Arc::new(PaymentsService::new(db_pool.clone())),
            users_service: Arc::new(UsersService::new(db_pool.clone())),
            admin_service: Arc::new(AdminService::new(db_pool.clone())),
            db_pool,
        }
    }
}

// Needed by the auth extractors
impl FromRef<AppState> for Arc<AuthService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.auth_service.clone()
    }
}

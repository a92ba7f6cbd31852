//! Registration and login flow tests

#[cfg(test)]
mod tests {
    use sqlx::PgPool;
    use uuid::Uuid;

    use topup_store_server::auth::{AuthError, AuthService, SessionContext};

    /// Helper to create a test database pool
    async fn setup_test_db() -> PgPool {
        let database_url = std::env::var("TEST_DATABASE_URL")
            .unwrap_or_else(|_| "postgresql://localhost/topup_store_test".to_string());

        sqlx::postgres::PgPoolOptions::new()
            .max_connections(1)
            .connect(&database_url)
            .await
            .expect("Failed to connect to test database")
    }

    fn auth_service(pool: PgPool) -> AuthService {
        // Minimum bcrypt cost keeps the tests fast
        AuthService::new(pool, "test-secret".to_string(), 900, 7, 4)
    }

    #[tokio::test]
    #[ignore] // Requires database setup
    async fn test_duplicate_email_is_rejected_not_a_server_error() {
        let pool = setup_test_db().await;
        let auth = auth_service(pool);

        let email = format!("dup-{}@example.com", Uuid::new_v4());

        auth.register(
            "First User",
            &email,
            "01700000000",
            "password123",
            SessionContext::default(),
        )
        .await
        .expect("First registration should succeed");

        let second = auth
            .register(
                "Second User",
                &email,
                "01700000001",
                "password456",
                SessionContext::default(),
            )
            .await;

        assert!(matches!(second, Err(AuthError::EmailAlreadyRegistered)));
    }

    #[tokio::test]
    #[ignore] // Requires database setup
    async fn test_suspended_account_cannot_login() {
        let pool = setup_test_db().await;
        let auth = auth_service(pool.clone());

        let email = format!("banned-{}@example.com", Uuid::new_v4());
        auth.register(
            "Banned User",
            &email,
            "01700000002",
            "password123",
            SessionContext::default(),
        )
        .await
        .unwrap();

        sqlx::query("UPDATE users SET is_active = FALSE WHERE email = $1")
            .bind(&email)
            .execute(&pool)
            .await
            .unwrap();

        let result = auth
            .login(&email, "password123", SessionContext::default())
            .await;
        assert!(matches!(result, Err(AuthError::AccountSuspended)));
    }
}

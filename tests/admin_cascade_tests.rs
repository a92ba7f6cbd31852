//! Cascading delete and bulk cleanup tests

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use sqlx::PgPool;
    use uuid::Uuid;

    use topup_store_server::catalog::{
        CatalogService, CreateCategoryRequest, CreateProductRequest,
    };
    use topup_store_server::error::ApiError;
    use topup_store_server::users::UsersService;
    use topup_store_server::wallet::{SubmitRechargeRequest, WalletService};

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

    fn category_request(name: &str, is_active: bool) -> CreateCategoryRequest {
        CreateCategoryRequest {
            name: name.to_string(),
            description: None,
            is_active,
        }
    }

    fn product_request(category_id: Option<Uuid>, is_active: bool) -> CreateProductRequest {
        CreateProductRequest {
            name: "50 Diamonds".to_string(),
            category_id,
            description: None,
            diamonds_count: 50,
            price: Decimal::new(25000, 2),
            is_active,
        }
    }

    #[tokio::test]
    #[ignore] // Requires database setup
    async fn test_category_delete_removes_its_products() {
        let pool = setup_test_db().await;
        let catalog = CatalogService::new(pool.clone());

        let category = catalog
            .create_category(category_request("Mobile Legends", true))
            .await
            .unwrap();
        let product = catalog
            .create_product(product_request(Some(category.id), true))
            .await
            .unwrap();

        let result = catalog.delete_category(category.id).await.unwrap();
        assert_eq!(result.products_deleted, 1);

        // Both rows are gone
        let lookup = catalog.get_product(product.id).await;
        assert!(matches!(lookup, Err(ApiError::NotFound(_))));
    }

    #[tokio::test]
    #[ignore] // Requires database setup
    async fn test_clean_inactive_sweeps_products_of_inactive_categories() {
        let pool = setup_test_db().await;
        let catalog = CatalogService::new(pool.clone());

        // An inactive category still holding an active product
        let dormant = catalog
            .create_category(category_request("Retired Games", false))
            .await
            .unwrap();
        let stranded = catalog
            .create_product(product_request(Some(dormant.id), true))
            .await
            .unwrap();

        // A plain inactive product outside any category
        let hidden = catalog
            .create_product(product_request(None, false))
            .await
            .unwrap();

        let result = catalog.clean_inactive().await.unwrap();
        assert!(result.products_deleted >= 2);
        assert!(result.categories_deleted >= 1);

        assert!(matches!(
            catalog.get_product(stranded.id).await,
            Err(ApiError::NotFound(_))
        ));
        assert!(matches!(
            catalog.get_product(hidden.id).await,
            Err(ApiError::NotFound(_))
        ));
    }

    #[tokio::test]
    #[ignore] // Requires database setup
    async fn test_user_delete_removes_referencing_rows() {
        let pool = setup_test_db().await;
        let users = UsersService::new(pool.clone());
        let wallet = WalletService::new(pool.clone());

        let user_id = Uuid::new_v4();
        sqlx::query(
            "INSERT INTO users (id, email, full_name, password_hash) \
             VALUES ($1, $2, 'Doomed User', 'x')",
        )
        .bind(user_id)
        .bind(format!("doomed-{}@example.com", user_id))
        .execute(&pool)
        .await
        .unwrap();

        let method_id = Uuid::new_v4();
        sqlx::query(
            "INSERT INTO payment_methods (id, name, account_number) \
             VALUES ($1, 'Rocket', '01600000000')",
        )
        .bind(method_id)
        .execute(&pool)
        .await
        .unwrap();

        let request = wallet
            .submit_recharge(
                user_id,
                SubmitRechargeRequest {
                    amount: Decimal::new(10000, 2),
                    payment_method_id: method_id,
                    transaction_id: "RCH-DEL".to_string(),
                },
            )
            .await
            .unwrap();
        wallet.approve_recharge(request.id, None).await.unwrap();

        let result = users.delete_user(user_id).await.unwrap();
        assert_eq!(result.recharge_requests_deleted, 1);
        assert_eq!(result.wallet_transactions_deleted, 1);

        assert!(matches!(
            users.get_user(user_id).await,
            Err(ApiError::NotFound(_))
        ));
        assert!(matches!(
            wallet.balance(user_id).await,
            Err(ApiError::NotFound(_))
        ));
    }

    #[tokio::test]
    #[ignore] // Requires database setup
    async fn test_delete_unknown_user_is_not_found() {
        let pool = setup_test_db().await;
        let users = UsersService::new(pool);

        let result = users.delete_user(Uuid::new_v4()).await;
        assert!(matches!(result, Err(ApiError::NotFound(_))));
    }
}

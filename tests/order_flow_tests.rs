//! Order placement and lifecycle tests

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use sqlx::PgPool;
    use uuid::Uuid;

    use topup_store_server::error::ApiError;
    use topup_store_server::models::OrderStatus;
    use topup_store_server::orders::{
        OrdersService, PaymentSelector, PlaceOrderRequest, WALLET_METHOD_NAME,
    };
    use topup_store_server::wallet::WalletService;

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

    /// Insert a customer with the given balance, returning its id
    async fn seed_user(pool: &PgPool, balance: Decimal) -> Uuid {
        let id = Uuid::new_v4();
        sqlx::query(
            "INSERT INTO users (id, email, full_name, password_hash, wallet_balance) \
             VALUES ($1, $2, 'Test Buyer', 'x', $3)",
        )
        .bind(id)
        .bind(format!("buyer-{}@example.com", id))
        .bind(balance)
        .execute(pool)
        .await
        .expect("Failed to seed user");
        id
    }

    /// Insert an active product, returning its id
    async fn seed_product(pool: &PgPool, price: Decimal) -> Uuid {
        let id = Uuid::new_v4();
        sqlx::query(
            "INSERT INTO products (id, name, diamonds_count, price) \
             VALUES ($1, '100 Diamonds', 100, $2)",
        )
        .bind(id)
        .bind(price)
        .execute(pool)
        .await
        .expect("Failed to seed product");
        id
    }

    /// Insert an active payment method, returning its id
    async fn seed_payment_method(pool: &PgPool) -> Uuid {
        let id = Uuid::new_v4();
        sqlx::query(
            "INSERT INTO payment_methods (id, name, account_number) \
             VALUES ($1, 'bKash', '01700000000')",
        )
        .bind(id)
        .execute(pool)
        .await
        .expect("Failed to seed payment method");
        id
    }

    fn wallet_request(product_id: Uuid) -> PlaceOrderRequest {
        PlaceOrderRequest {
            product_id,
            payment: PaymentSelector::Wallet,
            payment_number: None,
            transaction_id: None,
            game_id: "player-42".to_string(),
        }
    }

    #[tokio::test]
    #[ignore] // Requires database setup
    async fn test_wallet_order_deducts_balance_and_writes_ledger() {
        let pool = setup_test_db().await;
        let orders = OrdersService::new(pool.clone());
        let wallet = WalletService::new(pool.clone());

        let price = Decimal::new(50000, 2); // 500.00
        let user_id = seed_user(&pool, Decimal::new(80000, 2)).await;
        let product_id = seed_product(&pool, price).await;

        let order = orders
            .place_order(user_id, wallet_request(product_id))
            .await
            .expect("Wallet order should succeed");

        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.payment_method, WALLET_METHOD_NAME);
        assert_eq!(order.payment_number, "");
        assert_eq!(order.transaction_id, "");

        // Exactly the price was deducted
        let balance = wallet.balance(user_id).await.unwrap();
        assert_eq!(balance, Decimal::new(30000, 2));

        // One negative purchase entry in the ledger
        let txs = wallet
            .list_transactions(user_id, &Default::default())
            .await
            .unwrap();
        assert_eq!(txs.total, 1);
        assert_eq!(txs.data[0].amount, -price);
    }

    #[tokio::test]
    #[ignore] // Requires database setup
    async fn test_wallet_order_insufficient_balance_changes_nothing() {
        let pool = setup_test_db().await;
        let orders = OrdersService::new(pool.clone());
        let wallet = WalletService::new(pool.clone());

        let user_id = seed_user(&pool, Decimal::new(10000, 2)).await; // 100.00
        let product_id = seed_product(&pool, Decimal::new(50000, 2)).await; // 500.00

        let result = orders.place_order(user_id, wallet_request(product_id)).await;
        assert!(matches!(result, Err(ApiError::InsufficientBalance)));

        // Balance untouched, no ledger entry, no order
        assert_eq!(
            wallet.balance(user_id).await.unwrap(),
            Decimal::new(10000, 2)
        );
        let txs = wallet
            .list_transactions(user_id, &Default::default())
            .await
            .unwrap();
        assert_eq!(txs.total, 0);
        let user_orders = orders
            .list_user_orders(user_id, &Default::default())
            .await
            .unwrap();
        assert_eq!(user_orders.total, 0);
    }

    #[tokio::test]
    #[ignore] // Requires database setup
    async fn test_external_order_leaves_balance_untouched() {
        let pool = setup_test_db().await;
        let orders = OrdersService::new(pool.clone());
        let wallet = WalletService::new(pool.clone());

        let user_id = seed_user(&pool, Decimal::new(10000, 2)).await;
        let product_id = seed_product(&pool, Decimal::new(50000, 2)).await;
        let method_id = seed_payment_method(&pool).await;

        let order = orders
            .place_order(
                user_id,
                PlaceOrderRequest {
                    product_id,
                    payment: PaymentSelector::External { method_id },
                    payment_number: Some("01811111111".to_string()),
                    transaction_id: Some("TXN-777".to_string()),
                    game_id: "player-42".to_string(),
                },
            )
            .await
            .expect("External order should succeed");

        // References stored verbatim, method name denormalized
        assert_eq!(order.payment_method, "bKash");
        assert_eq!(order.payment_number, "01811111111");
        assert_eq!(order.transaction_id, "TXN-777");
        assert_eq!(order.status, OrderStatus::Pending);

        // External payment never touches the wallet
        assert_eq!(
            wallet.balance(user_id).await.unwrap(),
            Decimal::new(10000, 2)
        );
    }

    #[tokio::test]
    #[ignore] // Requires database setup
    async fn test_external_order_requires_payment_references() {
        let pool = setup_test_db().await;
        let orders = OrdersService::new(pool.clone());

        let user_id = seed_user(&pool, Decimal::ZERO).await;
        let product_id = seed_product(&pool, Decimal::new(50000, 2)).await;
        let method_id = seed_payment_method(&pool).await;

        let result = orders
            .place_order(
                user_id,
                PlaceOrderRequest {
                    product_id,
                    payment: PaymentSelector::External { method_id },
                    payment_number: None,
                    transaction_id: Some("TXN-777".to_string()),
                    game_id: "player-42".to_string(),
                },
            )
            .await;

        assert!(matches!(result, Err(ApiError::ValidationError(_))));
    }

    #[tokio::test]
    #[ignore] // Requires database setup
    async fn test_completed_order_is_terminal() {
        let pool = setup_test_db().await;
        let orders = OrdersService::new(pool.clone());

        let user_id = seed_user(&pool, Decimal::new(100000, 2)).await;
        let product_id = seed_product(&pool, Decimal::new(50000, 2)).await;

        let order = orders
            .place_order(user_id, wallet_request(product_id))
            .await
            .unwrap();

        let completed = orders
            .update_status(order.id, OrderStatus::Completed)
            .await
            .expect("pending -> completed should succeed");
        assert_eq!(completed.status, OrderStatus::Completed);

        // Terminal: no further transitions
        let result = orders.update_status(order.id, OrderStatus::Cancelled).await;
        assert!(matches!(result, Err(ApiError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_place_order_rejects_blank_game_id() {
        // The game id check runs before any database access, so a lazily
        // connected pool never dials out here.
        let pool = sqlx::postgres::PgPoolOptions::new()
            .connect_lazy("postgresql://localhost/unused")
            .expect("lazy pool");
        let orders = OrdersService::new(pool);

        let result = orders
            .place_order(
                Uuid::new_v4(),
                PlaceOrderRequest {
                    product_id: Uuid::new_v4(),
                    payment: PaymentSelector::Wallet,
                    payment_number: None,
                    transaction_id: None,
                    game_id: "   ".to_string(),
                },
            )
            .await;

        assert!(matches!(result, Err(ApiError::ValidationError(_))));
    }
}

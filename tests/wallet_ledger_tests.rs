//! Recharge review and wallet ledger tests

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use sqlx::PgPool;
    use uuid::Uuid;

    use topup_store_server::error::ApiError;
    use topup_store_server::models::{RechargeStatus, WalletTxType};
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

    async fn seed_user(pool: &PgPool, balance: Decimal) -> Uuid {
        let id = Uuid::new_v4();
        sqlx::query(
            "INSERT INTO users (id, email, full_name, password_hash, wallet_balance) \
             VALUES ($1, $2, 'Test User', 'x', $3)",
        )
        .bind(id)
        .bind(format!("user-{}@example.com", id))
        .bind(balance)
        .execute(pool)
        .await
        .expect("Failed to seed user");
        id
    }

    async fn seed_payment_method(pool: &PgPool) -> Uuid {
        let id = Uuid::new_v4();
        sqlx::query(
            "INSERT INTO payment_methods (id, name, account_number) \
             VALUES ($1, 'Nagad', '01900000000')",
        )
        .bind(id)
        .execute(pool)
        .await
        .expect("Failed to seed payment method");
        id
    }

    fn recharge(method_id: Uuid, amount: Decimal) -> SubmitRechargeRequest {
        SubmitRechargeRequest {
            amount,
            payment_method_id: method_id,
            transaction_id: "RCH-123".to_string(),
        }
    }

    #[tokio::test]
    #[ignore] // Requires database setup
    async fn test_submission_does_not_touch_balance() {
        let pool = setup_test_db().await;
        let wallet = WalletService::new(pool.clone());

        let user_id = seed_user(&pool, Decimal::ZERO).await;
        let method_id = seed_payment_method(&pool).await;

        let request = wallet
            .submit_recharge(user_id, recharge(method_id, Decimal::new(20000, 2)))
            .await
            .expect("Submission should succeed");

        assert_eq!(request.status, RechargeStatus::Pending);
        assert!(request.reviewed_at.is_none());

        // Funds arrive only at approval
        assert_eq!(wallet.balance(user_id).await.unwrap(), Decimal::ZERO);
        let txs = wallet
            .list_transactions(user_id, &Default::default())
            .await
            .unwrap();
        assert_eq!(txs.total, 0);
    }

    #[tokio::test]
    #[ignore] // Requires database setup
    async fn test_approval_credits_balance_once() {
        let pool = setup_test_db().await;
        let wallet = WalletService::new(pool.clone());

        let amount = Decimal::new(20000, 2); // 200.00
        let user_id = seed_user(&pool, Decimal::ZERO).await;
        let method_id = seed_payment_method(&pool).await;

        let request = wallet
            .submit_recharge(user_id, recharge(method_id, amount))
            .await
            .unwrap();

        let approved = wallet
            .approve_recharge(request.id, Some("Verified".to_string()))
            .await
            .expect("Approval should succeed");

        assert_eq!(approved.status, RechargeStatus::Approved);
        assert!(approved.reviewed_at.is_some());
        assert_eq!(wallet.balance(user_id).await.unwrap(), amount);

        // Exactly one positive topup ledger entry
        let txs = wallet
            .list_transactions(user_id, &Default::default())
            .await
            .unwrap();
        assert_eq!(txs.total, 1);
        assert_eq!(txs.data[0].amount, amount);
        assert_eq!(txs.data[0].tx_type, WalletTxType::Topup);

        // Second approval is a conflict and credits nothing
        let result = wallet.approve_recharge(request.id, None).await;
        assert!(matches!(result, Err(ApiError::Conflict(_))));
        assert_eq!(wallet.balance(user_id).await.unwrap(), amount);
    }

    #[tokio::test]
    #[ignore] // Requires database setup
    async fn test_rejection_has_no_balance_effect() {
        let pool = setup_test_db().await;
        let wallet = WalletService::new(pool.clone());

        let user_id = seed_user(&pool, Decimal::new(5000, 2)).await;
        let method_id = seed_payment_method(&pool).await;

        let request = wallet
            .submit_recharge(user_id, recharge(method_id, Decimal::new(20000, 2)))
            .await
            .unwrap();

        let rejected = wallet
            .reject_recharge(request.id, Some("Reference not found".to_string()))
            .await
            .expect("Rejection should succeed");

        assert_eq!(rejected.status, RechargeStatus::Rejected);
        assert_eq!(rejected.admin_notes.as_deref(), Some("Reference not found"));
        assert_eq!(
            wallet.balance(user_id).await.unwrap(),
            Decimal::new(5000, 2)
        );

        // A rejected request cannot later be approved
        let result = wallet.approve_recharge(request.id, None).await;
        assert!(matches!(result, Err(ApiError::Conflict(_))));
    }

    #[tokio::test]
    #[ignore] // Requires database setup
    async fn test_review_of_unknown_request_is_not_found() {
        let pool = setup_test_db().await;
        let wallet = WalletService::new(pool.clone());

        let result = wallet.approve_recharge(Uuid::new_v4(), None).await;
        assert!(matches!(result, Err(ApiError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_submission_rejects_non_positive_amount() {
        // Amount is validated before any database access
        let pool = sqlx::postgres::PgPoolOptions::new()
            .connect_lazy("postgresql://localhost/unused")
            .expect("lazy pool");
        let wallet = WalletService::new(pool);

        let result = wallet
            .submit_recharge(
                Uuid::new_v4(),
                SubmitRechargeRequest {
                    amount: Decimal::ZERO,
                    payment_method_id: Uuid::new_v4(),
                    transaction_id: "RCH-123".to_string(),
                },
            )
            .await;

        assert!(matches!(result, Err(ApiError::ValidationError(_))));
    }
}

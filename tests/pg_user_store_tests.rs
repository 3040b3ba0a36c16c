//! PostgreSQL store tests

#[cfg(test)]
mod tests {
    use sqlx::PgPool;

    use users_api::db;
    use users_api::models::UserPayload;
    use users_api::store::{PgUserStore, StoreError, UserStore};

    /// Helper to create a migrated test database pool
    async fn setup_test_db() -> PgPool {
        let database_url = std::env::var("TEST_DATABASE_URL")
            .unwrap_or_else(|_| "postgresql://localhost/users_api_test".to_string());

        let pool = sqlx::postgres::PgPoolOptions::new()
            .max_connections(1)
            .connect(&database_url)
            .await
            .expect("Failed to connect to test database");

        db::run_migrations(&pool)
            .await
            .expect("Failed to run migrations");
        sqlx::query("TRUNCATE users RESTART IDENTITY")
            .execute(&pool)
            .await
            .expect("Failed to reset users table");

        pool
    }

    #[tokio::test]
    #[ignore] // Requires database setup
    async fn test_crud_lifecycle() {
        let store = PgUserStore::new(setup_test_db().await);

        assert!(store.list_all().await.unwrap().is_empty());

        let user = store
            .save(UserPayload::new("Ada", "ada@example.com", "555-0100"))
            .await
            .unwrap();
        assert!(user.id > 0);
        assert_eq!(store.find_by_id(user.id).await.unwrap(), Some(user.clone()));

        let updated = store
            .update(user.id, UserPayload::new("Ada King", "ada@example.com", "555-0199"))
            .await
            .unwrap();
        assert_eq!(updated.id, user.id);
        assert_eq!(updated.full_name, "Ada King");

        store.delete(user.id).await.unwrap();
        assert_eq!(store.find_by_id(user.id).await.unwrap(), None);
    }

    #[tokio::test]
    #[ignore] // Requires database setup
    async fn test_missing_rows_are_not_found() {
        let store = PgUserStore::new(setup_test_db().await);

        assert_eq!(
            store
                .update(999, UserPayload::new("Ada", "ada@example.com", "555-0100"))
                .await,
            Err(StoreError::NotFound(999))
        );
        assert_eq!(store.delete(999).await, Err(StoreError::NotFound(999)));
    }

    #[tokio::test]
    #[ignore] // Requires database setup
    async fn test_duplicate_email_is_conflict() {
        let store = PgUserStore::new(setup_test_db().await);

        store
            .save(UserPayload::new("Ada", "ada@example.com", "555-0100"))
            .await
            .unwrap();
        let err = store
            .save(UserPayload::new("Ada Again", "ADA@example.com", "555-0101"))
            .await
            .unwrap_err();

        assert!(matches!(err, StoreError::Conflict(_)));
    }

    #[tokio::test]
    #[ignore] // Requires database setup
    async fn test_ping() {
        let store = PgUserStore::new(setup_test_db().await);
        assert!(store.ping().await.is_ok());
        assert_eq!(store.backend_name(), "postgres");
    }
}

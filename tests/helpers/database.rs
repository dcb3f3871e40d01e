use sqlx::SqlitePool;

/// Create an in-memory SQLite database for testing
///
/// Each call creates a completely isolated database with the items
/// migration applied.
pub async fn setup_test_db() -> SqlitePool {
    todolist::adapters::sqlite::create_migrated_test_pool()
        .await
        .expect("failed to create test database")
}

/// Close the connection pool, dropping the in-memory database.
pub async fn teardown_test_db(pool: SqlitePool) {
    pool.close().await;
}

//! Database test fixtures
//!
//! Connects to the database named by `TEST_DATABASE_URL` (falling back to
//! `DATABASE_URL`) and brings its schema up to date. Tests share the
//! database, so every test works with unique emails and handles rather
//! than truncating tables out from under its neighbors.

use sqlx::PgPool;

/// Test database fixture
pub struct TestDatabase {
    pool: PgPool,
}

impl TestDatabase {
    /// Connect and migrate; `None` when no test database is configured,
    /// which the caller treats as "skip this test".
    pub async fn try_new() -> Option<Self> {
        let url = std::env::var("TEST_DATABASE_URL")
            .or_else(|_| std::env::var("DATABASE_URL"))
            .ok()?;

        let pool = PgPool::connect(&url)
            .await
            .expect("failed to connect to the test database");

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("failed to run migrations");

        Some(Self { pool })
    }

    /// Get the database pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

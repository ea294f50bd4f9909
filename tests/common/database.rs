use grocery_api::{DbPool, config::DatabaseConfig, database};
use sqlx::Sqlite;
use sqlx::pool::PoolConnection;
use std::path::PathBuf;

/// Test database wrapper for better test isolation
///
/// Each test gets its own throwaway SQLite file under the system temp
/// directory, so tests can run in parallel without sharing state. The file
/// (plus SQLite's WAL sidecar files) is removed on drop.
pub struct TestDb {
    pub pool: DbPool,
    path: PathBuf,
}

impl TestDb {
    /// Creates an isolated test database with the schema applied.
    ///
    /// # Arguments
    /// * `test_name` - The name of the test function, kept in the filename
    ///   so stray databases can be traced back to a specific test.
    pub async fn new(test_name: &str) -> Self {
        let path = std::env::temp_dir().join(format!(
            "grocery_{}_{}.db",
            test_name,
            nanoid::nanoid!(8)
        ));

        let config = DatabaseConfig {
            path: path.to_string_lossy().into_owned(),
        };

        let pool = database::connect(&config)
            .await
            .expect("Failed to create test database");
        database::ensure_schema(&pool)
            .await
            .expect("Failed to apply schema");

        Self { pool, path }
    }

    /// Acquires a connection from the test pool.
    pub async fn get_connection(&self) -> PoolConnection<Sqlite> {
        self.pool
            .acquire()
            .await
            .expect("Failed to acquire test connection")
    }

    /// Counts rows in the users table.
    pub async fn count_users(&self) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await
            .expect("Failed to count users")
    }

    /// Fetches the raw stored password hash for an email, if present.
    pub async fn stored_hash(&self, email: &str) -> Option<String> {
        sqlx::query_scalar("SELECT hashed_password FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .expect("Failed to fetch stored hash")
    }
}

impl Drop for TestDb {
    fn drop(&mut self) {
        for suffix in ["", "-wal", "-shm"] {
            let mut file = self.path.clone().into_os_string();
            file.push(suffix);
            let _ = std::fs::remove_file(file);
        }
    }
}

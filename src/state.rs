use crate::database::DbPool;

/// Application state shared across all HTTP handlers
///
/// Holds the resources every request needs, currently just the database
/// connection pool. Cloning is cheap (the pool is internally referenced).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing the database
    pub pool: DbPool,
}

impl AppState {
    /// Create a new AppState instance
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

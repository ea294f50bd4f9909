use grocery_api::{AppState, build_router};
use reqwest::{Client, redirect::Policy};
use tokio::net::TcpListener;

use crate::common::database::TestDb;

/// HTTP test application wrapper
///
/// Runs the real router on a random port against an isolated test database.
/// Each test gets its own server instance to allow parallel test execution.
pub struct TestApp {
    /// Server base URL (e.g., "http://127.0.0.1:54321")
    pub address: String,
    /// HTTP client for making requests
    pub client: Client,
    /// The isolated database backing this instance
    pub db: TestDb,
}

impl TestApp {
    /// Create a new HTTP test app with server on random port
    ///
    /// Binds to port 0 (OS assigns an available port), spawns the server in
    /// a background task and returns once it is reachable.
    pub async fn new(test_name: &str) -> Self {
        let db = TestDb::new(test_name).await;

        let app_state = AppState::new(db.pool.clone());
        let app = build_router(app_state);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{port}");

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        // Give server time to start
        tokio::time::sleep(std::time::Duration::from_millis(100)).await;

        let client = Client::builder()
            .redirect(Policy::none())
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            address,
            client,
            db,
        }
    }

    /// Get the full URL for an API endpoint
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }
}

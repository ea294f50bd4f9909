//! Shared test helper functions

use std::time::{SystemTime, UNIX_EPOCH};

/// Generates a unique test email using nanosecond timestamp
///
/// # Returns
/// A unique email address in the format `test_{timestamp}_{random}@example.com`
pub fn generate_test_email() -> String {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let random: u32 = rand::random();
    format!("test_{}_{}@example.com", timestamp, random)
}

/// Builds a registration request body for the given email.
pub fn registration_body(name: &str, email: &str, password: &str) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "email": email,
        "password": password,
    })
}

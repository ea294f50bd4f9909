//! Grocery inventory data contracts.
//!
//! The inventory schema and DTOs are defined here but no routes are wired
//! up yet; the HTTP surface currently covers user registration only.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A row in the `groceries` table.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Grocery {
    pub id: i64,
    pub name: String,
    pub quantity: i64,
    pub price: f64,
    pub category: String,
    pub created_at: DateTime<Utc>,
}

/// Request body for creating a grocery item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateGrocery {
    pub name: String,
    pub quantity: i64,
    pub price: f64,
    pub category: String,
}

/// Request body for a partial update of a grocery item.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateGrocery {
    pub name: Option<String>,
    pub quantity: Option<i64>,
    pub price: Option<f64>,
    pub category: Option<String>,
}

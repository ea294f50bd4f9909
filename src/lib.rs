pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod models;
pub mod queries;
pub mod routes;
pub mod services;
pub mod state;
pub mod validation;

pub use config::Config;
pub use database::{DbConn, DbPool};
pub use error::{Error, Result};
pub use routes::build_router;
pub use state::AppState;

/// Load configuration from environment variables
pub fn load_config() -> Result<Config> {
    Ok(Config::load()?)
}

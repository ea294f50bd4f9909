use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{handlers, state::AppState};

/// Builds the application router.
///
/// Shared by the binary and the integration tests so both exercise the
/// same routing table.
pub fn build_router(state: AppState) -> Router {
    let user_routes = Router::new().route("/create-user", post(handlers::users::create_user));

    Router::new()
        .route("/", get(handlers::health::read_root))
        .route("/health", get(handlers::health::health_check))
        .nest("/user", user_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

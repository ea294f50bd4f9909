use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;

use crate::{
    error::Result,
    models::users::{CreateUser, RegistrationOutcome},
    services::users,
    state::AppState,
    validation,
};

/// Response body for the registration endpoint.
///
/// Carries only the user's public fields; the password hash is never
/// serialized into any response.
#[derive(Debug, Serialize)]
pub struct CreateUserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub message: String,
}

/// POST /user/create-user
///
/// Registers a new user with name, email and password.
///
/// # Request Body
/// - `name`: User's display name
/// - `email`: User's email address (must be a valid email, unique)
/// - `password`: User's password (hashed before storage, never persisted in plaintext)
///
/// # HTTP Status Codes
/// - `201 CREATED`: User created, body message "User created successfully"
/// - `200 OK`: Email already registered, body message "User Already Exist"
/// - `422 UNPROCESSABLE_ENTITY`: Schema or email validation failure
/// - `500 INTERNAL_SERVER_ERROR`: Database error (generic body, no detail)
pub async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUser>,
) -> Result<Response> {
    // Boundary validation: reject malformed emails before the service runs.
    validation::validate_email(&request.email)?;

    // Acquire database connection from pool
    let mut conn = state.pool.acquire().await.map_err(|e| {
        crate::error::Error::Internal(format!("Failed to acquire database connection: {}", e))
    })?;

    // Call service layer to register user
    let outcome = users::register_user(&mut conn, request).await?;

    let (status, message) = match &outcome {
        RegistrationOutcome::Created(user) => {
            tracing::info!(user_id = user.id, "user created");
            (StatusCode::CREATED, "User created successfully")
        }
        RegistrationOutcome::AlreadyExists(user) => {
            tracing::info!(user_id = user.id, "registration replay for existing user");
            (StatusCode::OK, "User Already Exist")
        }
    };

    let user = outcome.user();
    let body = CreateUserResponse {
        id: user.id,
        name: user.name.clone(),
        email: user.email.clone(),
        message: message.to_string(),
    };

    Ok((status, Json(body)).into_response())
}

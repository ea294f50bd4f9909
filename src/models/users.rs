use serde::{Deserialize, Serialize};

/// A row in the `users` table. The password hash never leaves this type
/// through any API response.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub hashed_password: String,
}

/// Registration request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// A user's public fields, safe to return to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPublic {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl From<User> for UserPublic {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

/// Outcome of a registration attempt.
///
/// `AlreadyExists` is a normal result, not an error: repeated registration
/// with the same email is idempotent and returns the existing user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationOutcome {
    Created(UserPublic),
    AlreadyExists(UserPublic),
}

impl RegistrationOutcome {
    pub fn user(&self) -> &UserPublic {
        match self {
            RegistrationOutcome::Created(user) => user,
            RegistrationOutcome::AlreadyExists(user) => user,
        }
    }
}

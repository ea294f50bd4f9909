use crate::DbConn;
use crate::{
    error::{Error, Result},
    models::users::{CreateUser, RegistrationOutcome},
    queries::users,
    validation::{normalize_email, validate_password},
};
use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use sqlx::Connection;

/// Registers a new user, or returns the existing one for a known email.
///
/// Emails are matched on their normalized (trimmed, lowercased) form. The
/// operation is idempotent: repeated calls with the same email never create
/// duplicates and never error. The insert runs inside a transaction, so a
/// persistence failure leaves no partial row.
pub async fn register_user(
    conn: &mut DbConn,
    request: CreateUser,
) -> Result<RegistrationOutcome> {
    // Email format is checked at the HTTP boundary; re-check only the
    // password guard here so the service never hashes an empty credential.
    validate_password(&request.password)?;

    let email = normalize_email(&request.email);

    if let Some(existing) = users::get_user_by_email(conn, &email).await? {
        return Ok(RegistrationOutcome::AlreadyExists(existing.into()));
    }

    // Hash before opening the transaction; Argon2 takes ~100ms and must not
    // hold a write transaction open for that long.
    let hashed_password = hash_password(&request.password)?;

    let mut tx = conn.begin().await?;

    match users::insert_user(&mut tx, &request.name, &email, &hashed_password).await {
        Ok(user) => {
            tx.commit().await?;
            Ok(RegistrationOutcome::Created(user.into()))
        }
        // A concurrent registration for the same email won the race between
        // our lookup and the insert. The winner's row is authoritative.
        Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
            tx.rollback().await?;

            let existing = users::get_user_by_email(conn, &email).await?.ok_or_else(|| {
                Error::Internal(format!(
                    "unique violation for email but no matching row found: {}",
                    email
                ))
            })?;

            Ok(RegistrationOutcome::AlreadyExists(existing.into()))
        }
        Err(e) => Err(Error::Sqlx(e)),
    }
}

/// Hashes a password with Argon2 and a fresh random salt.
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    let hashed = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| Error::Internal(format!("Failed to hash password: {}", e)))?
        .to_string();

    Ok(hashed)
}

/// Verifies a password against a stored Argon2 hash.
pub fn verify_password(password: &str, hash: &str) -> Result<bool> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| Error::Internal(format!("Invalid password hash: {}", e)))?;

    let argon2 = Argon2::default();

    match argon2.verify_password(password.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(Error::Internal(format!(
            "Password verification failed: {}",
            e
        ))),
    }
}

//! Input validation utilities for the service boundary.
//!
//! Requests are validated here before any DTO reaches the service layer,
//! so invalid data is never representable downstream.

use crate::error::{Error, Result};

/// Validates email format using basic structural checks
///
/// # Arguments
/// * `email` - The email address to validate
///
/// # Returns
/// * `Ok(())` if the email is valid
/// * `Err(Error)` with descriptive message if invalid
pub fn validate_email(email: &str) -> Result<()> {
    let email = email.trim();

    if email.is_empty() {
        return Err(Error::Validation("Email cannot be empty".to_string()));
    }

    // Length validation (RFC 5321 limits)
    if email.len() > 254 {
        return Err(Error::Validation(
            "Email address is too long (max 254 characters)".to_string(),
        ));
    }

    // Split into local and domain parts
    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 {
        return Err(Error::Validation(
            "Invalid email format: must contain exactly one @ symbol".to_string(),
        ));
    }

    let (local_part, domain) = (parts[0], parts[1]);

    if local_part.is_empty() || local_part.len() > 64 {
        return Err(Error::Validation(
            "Invalid email format: local part must be 1-64 characters".to_string(),
        ));
    }

    if domain.is_empty() || domain.len() > 253 {
        return Err(Error::Validation(
            "Invalid email format: domain part must be 1-253 characters".to_string(),
        ));
    }

    // Domain needs at least one dot, not at the edges
    if !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
        return Err(Error::Validation(
            "Invalid email format: domain must contain a dot".to_string(),
        ));
    }

    if email.chars().any(char::is_whitespace) {
        return Err(Error::Validation(
            "Invalid email format: must not contain whitespace".to_string(),
        ));
    }

    Ok(())
}

/// Normalizes an email address for storage and lookup.
///
/// Emails are matched case-insensitively throughout: both the uniqueness
/// check and the stored value use the trimmed, lowercased form.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Validates that a password is non-empty.
///
/// Password policy beyond non-emptiness is out of scope; this guard only
/// prevents hashing and storing an empty credential.
pub fn validate_password(password: &str) -> Result<()> {
    if password.is_empty() {
        return Err(Error::Validation("Password cannot be empty".to_string()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_address() {
        validate_email("user@example.com").unwrap();
    }

    #[test]
    fn accepts_subdomain_and_plus_tag() {
        validate_email("first.last+tag@mail.example.co.uk").unwrap();
    }

    #[test]
    fn rejects_missing_at() {
        assert!(validate_email("not-an-email").is_err());
    }

    #[test]
    fn rejects_multiple_at() {
        assert!(validate_email("a@b@example.com").is_err());
    }

    #[test]
    fn rejects_empty_local_part() {
        assert!(validate_email("@example.com").is_err());
    }

    #[test]
    fn rejects_dotless_domain() {
        assert!(validate_email("user@localhost").is_err());
    }

    #[test]
    fn rejects_empty() {
        assert!(validate_email("").is_err());
        assert!(validate_email("   ").is_err());
    }

    #[test]
    fn normalization_lowercases_and_trims() {
        assert_eq!(normalize_email("  Ann@Example.COM "), "ann@example.com");
    }

    #[test]
    fn empty_password_rejected() {
        assert!(validate_password("").is_err());
        assert!(validate_password("secret123").is_ok());
    }
}

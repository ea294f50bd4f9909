use crate::{
    error::{Error, Result},
    models::users::User,
};

use crate::DbConn;

/// Inserts a new user row and returns it with the store-assigned id.
///
/// The UNIQUE constraint on `email` may reject the insert when a concurrent
/// registration wins the race; callers are expected to treat that violation
/// as the "already exists" outcome, so the raw sqlx error is passed through
/// unmapped here.
pub async fn insert_user(
    conn: &mut DbConn,
    name: &str,
    email: &str,
    hashed_password: &str,
) -> std::result::Result<User, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (name, email, hashed_password)
        VALUES ($1, $2, $3)
        RETURNING id, name, email, hashed_password
        "#,
    )
    .bind(name)
    .bind(email)
    .bind(hashed_password)
    .fetch_one(conn)
    .await
}

/// Gets a single user by their email address. The user may not exist.
pub async fn get_user_by_email(conn: &mut DbConn, email: &str) -> Result<Option<User>> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, name, email, hashed_password
        FROM users
        WHERE email = $1
        "#,
    )
    .bind(email)
    .fetch_optional(conn)
    .await
    .map_err(Error::Sqlx)?;

    Ok(user)
}

/// Gets a single user by their ID. The user may not exist.
pub async fn get_user_by_id(conn: &mut DbConn, id: i64) -> Result<Option<User>> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, name, email, hashed_password
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(conn)
    .await
    .map_err(Error::Sqlx)?;

    Ok(user)
}

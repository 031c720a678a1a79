use sqlx::SqlitePool;
use crate::{
    error::Result,
    models::user::User,
};

/// Creates a new user in the database.
///
/// Fails with a database error if the email is already taken.
pub async fn create_user(pool: &SqlitePool, email: &str, password_hash: &str) -> Result<User> {
    let mut conn = pool.acquire().await?;
    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (email, password)
        VALUES (?1, ?2)
        RETURNING email, password
        "#,
    )
    .bind(email)
    .bind(password_hash)
    .fetch_one(&mut *conn)
    .await?;
    Ok(user)
}

/// Finds a user by their email address (exact match).
///
/// The connection is held only for this lookup and returns to the pool
/// when dropped, whether or not the query succeeded.
pub async fn find_by_email(pool: &SqlitePool, email: &str) -> Result<Option<User>> {
    let mut conn = pool.acquire().await?;
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT email, password
        FROM users
        WHERE email = ?1
        "#,
    )
    .bind(email)
    .fetch_optional(&mut *conn)
    .await?;
    Ok(user)
}

/**
 * User Model and Database Operations
 *
 * This module handles user records and their database operations.
 */

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

/// User struct representing a user in the database
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Email address (unique)
    pub email: String,
    /// Gravatar URL derived from the email at registration
    pub avatar: String,
    /// Hashed password (bcrypt); never serialized into responses
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Registration timestamp
    pub date: DateTime<Utc>,
}

/// Create a new user
pub async fn create_user(
    pool: &PgPool,
    name: &str,
    email: &str,
    avatar: &str,
    password_hash: &str,
) -> Result<User, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (id, name, email, avatar, password_hash, date)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, name, email, avatar, password_hash, date
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(email)
    .bind(avatar)
    .bind(password_hash)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(user)
}

/// Get user by email
pub async fn get_user_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, name, email, avatar, password_hash, date
        FROM users
        WHERE email = $1
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Get user by ID
pub async fn get_user_by_id(pool: &PgPool, id: Uuid) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, name, email, avatar, password_hash, date
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Delete a user record
///
/// Called after the user's profile has been removed; the account's posts are
/// deliberately left in place.
pub async fn delete_user(pool: &PgPool, id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(())
}

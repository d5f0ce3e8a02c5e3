use log::debug;
use sqlx::SqliteConnection;

use crate::{
    db_types::{NewUser, User},
    traits::UserApiError,
};

/// Inserts a new user. A duplicate email surfaces as [`UserApiError::EmailTaken`].
pub async fn insert_user(user: NewUser, conn: &mut SqliteConnection) -> Result<User, UserApiError> {
    let user: User = sqlx::query_as(
        r#"
            INSERT INTO users (name, email, password, role, is_active)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *;
        "#,
    )
    .bind(user.name)
    .bind(user.email)
    .bind(user.password)
    .bind(user.role)
    .bind(user.is_active)
    .fetch_one(conn)
    .await?;
    debug!("📝️ User #{} inserted", user.id);
    Ok(user)
}

pub async fn fetch_user_by_email(email: &str, conn: &mut SqliteConnection) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as("SELECT * FROM users WHERE email = $1").bind(email).fetch_optional(conn).await?;
    Ok(user)
}

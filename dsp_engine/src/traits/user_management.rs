use thiserror::Error;

use crate::db_types::{NewUser, User};

#[derive(Debug, Clone, Error)]
pub enum UserApiError {
    #[error("Database error: {0}")]
    DatabaseError(String),
    #[error("A user with this email address already exists")]
    EmailTaken,
}

impl From<sqlx::Error> for UserApiError {
    fn from(e: sqlx::Error) -> Self {
        match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => UserApiError::EmailTaken,
            _ => UserApiError::DatabaseError(e.to_string()),
        }
    }
}

/// The identity store. Roles are looked up here when a user logs in; privilege is never inferred from the shape of
/// an email address.
#[allow(async_fn_in_trait)]
pub trait UserManagement {
    async fn insert_user(&self, user: NewUser) -> Result<User, UserApiError>;

    async fn fetch_user_by_email(&self, email: &str) -> Result<Option<User>, UserApiError>;
}

use thiserror::Error;

use crate::db_types::{LogEntry, NewLogEntry};

#[derive(Debug, Clone, Error)]
pub enum AuditLogError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<sqlx::Error> for AuditLogError {
    fn from(e: sqlx::Error) -> Self {
        AuditLogError::DatabaseError(e.to_string())
    }
}

/// Best-effort audit trail. Call sites log and swallow failures from this trait; an unavailable audit log must
/// never fail a checkout or a withdrawal.
#[allow(async_fn_in_trait)]
pub trait AuditLog {
    async fn create_log_entry(&self, entry: NewLogEntry) -> Result<LogEntry, AuditLogError>;

    /// Fetches the most recent entries, newest first.
    async fn fetch_log_entries(&self, limit: i64) -> Result<Vec<LogEntry>, AuditLogError>;
}

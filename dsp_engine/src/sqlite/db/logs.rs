use sqlx::SqliteConnection;

use crate::{
    db_types::{LogEntry, NewLogEntry},
    traits::AuditLogError,
};

pub async fn insert_log_entry(entry: NewLogEntry, conn: &mut SqliteConnection) -> Result<LogEntry, AuditLogError> {
    let entry = sqlx::query_as(
        r#"
            INSERT INTO logs (category, actor, description, related_id)
            VALUES ($1, $2, $3, $4)
            RETURNING *;
        "#,
    )
    .bind(entry.category)
    .bind(entry.actor)
    .bind(entry.description)
    .bind(entry.related_id)
    .fetch_one(conn)
    .await?;
    Ok(entry)
}

/// The most recent entries, newest first.
pub async fn fetch_log_entries(limit: i64, conn: &mut SqliteConnection) -> Result<Vec<LogEntry>, sqlx::Error> {
    let entries = sqlx::query_as("SELECT * FROM logs ORDER BY created_at DESC, id DESC LIMIT $1")
        .bind(limit)
        .fetch_all(conn)
        .await?;
    Ok(entries)
}

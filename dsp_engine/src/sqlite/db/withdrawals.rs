use log::debug;
use sqlx::SqliteConnection;

use crate::{
    db_types::{NewWithdrawal, Withdrawal},
    policy::Disposition,
    traits::WithdrawalApiError,
};

/// Inserts a withdrawal request together with the disposition the payout policy assigned to it. The record is
/// written exactly once; there is no update path.
pub async fn insert_withdrawal(
    withdrawal: NewWithdrawal,
    disposition: Disposition,
    conn: &mut SqliteConnection,
) -> Result<Withdrawal, WithdrawalApiError> {
    let withdrawal: Withdrawal = sqlx::query_as(
        r#"
            INSERT INTO withdrawals (
                actor_email,
                amount,
                role,
                status,
                note,
                scheduled_date
            ) VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *;
        "#,
    )
    .bind(withdrawal.actor_email)
    .bind(withdrawal.amount)
    .bind(withdrawal.role)
    .bind(disposition.status)
    .bind(disposition.note)
    .bind(disposition.scheduled_date)
    .fetch_one(conn)
    .await?;
    debug!("📝️ Withdrawal #{} inserted as '{}'", withdrawal.id, withdrawal.status);
    Ok(withdrawal)
}

/// Withdrawals requested by the given email, ordered by `created_at` ascending.
pub async fn fetch_withdrawals_for_email(
    email: &str,
    conn: &mut SqliteConnection,
) -> Result<Vec<Withdrawal>, sqlx::Error> {
    let withdrawals = sqlx::query_as("SELECT * FROM withdrawals WHERE actor_email = $1 ORDER BY created_at ASC")
        .bind(email)
        .fetch_all(conn)
        .await?;
    Ok(withdrawals)
}

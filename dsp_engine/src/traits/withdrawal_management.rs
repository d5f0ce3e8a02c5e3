use thiserror::Error;

use crate::{
    db_types::{NewWithdrawal, Withdrawal},
    policy::Disposition,
};

#[derive(Debug, Clone, Error)]
pub enum WithdrawalApiError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<sqlx::Error> for WithdrawalApiError {
    fn from(e: sqlx::Error) -> Self {
        WithdrawalApiError::DatabaseError(e.to_string())
    }
}

/// Withdrawal persistence. A withdrawal is written once, carrying the disposition the payout policy computed for
/// it, and is never mutated by the core afterwards. Unlike checkout, a storage failure here is surfaced to the
/// caller rather than papered over.
#[allow(async_fn_in_trait)]
pub trait WithdrawalManagement {
    /// Persists the request together with its policy disposition and returns the stored record.
    async fn insert_withdrawal(
        &self,
        withdrawal: NewWithdrawal,
        disposition: Disposition,
    ) -> Result<Withdrawal, WithdrawalApiError>;

    /// Fetches all withdrawals requested by the given email, oldest first.
    async fn fetch_withdrawals_for_email(&self, email: &str) -> Result<Vec<Withdrawal>, WithdrawalApiError>;
}

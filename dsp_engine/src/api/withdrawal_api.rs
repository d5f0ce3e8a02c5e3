use std::fmt::Debug;

use chrono::{DateTime, Utc};
use log::*;

use crate::{
    db_types::{LogCategory, NewLogEntry, NewWithdrawal, Withdrawal},
    policy::dispose_withdrawal,
    traits::{AuditLog, WithdrawalApiError, WithdrawalManagement},
};

/// `WithdrawalApi` runs the payout policy over a withdrawal request and persists the outcome.
pub struct WithdrawalApi<B> {
    db: B,
}

impl<B> Debug for WithdrawalApi<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "WithdrawalApi")
    }
}

impl<B> WithdrawalApi<B> {
    pub fn new(db: B) -> Self {
        Self { db }
    }
}

impl<B> WithdrawalApi<B>
where B: WithdrawalManagement + AuditLog
{
    /// Disposes the request according to the payout policy and persists it.
    ///
    /// `now` is threaded through to [`dispose_withdrawal`] untouched, so identical inputs always produce identical
    /// records. Storage failure is returned to the caller (withdrawals fail closed, unlike checkout). The audit
    /// entry is best-effort.
    pub async fn request_withdrawal(
        &self,
        request: NewWithdrawal,
        now: DateTime<Utc>,
    ) -> Result<Withdrawal, WithdrawalApiError> {
        let disposition = dispose_withdrawal(request.role, request.amount, now);
        let withdrawal = self.db.insert_withdrawal(request, disposition).await?;
        debug!(
            "🏧️ Withdrawal #{} of {} by {} disposed as '{}'",
            withdrawal.id, withdrawal.amount, withdrawal.actor_email, withdrawal.status
        );
        let entry = NewLogEntry {
            category: LogCategory::Withdrawal,
            actor: Some(withdrawal.actor_email.clone()),
            description: format!("Withdrawal of {} {}", withdrawal.amount, withdrawal.status),
            related_id: Some(withdrawal.id.to_string()),
        };
        if let Err(e) = self.db.create_log_entry(entry).await {
            warn!("🏧️ Could not write the audit entry for withdrawal #{}. {e}", withdrawal.id);
        }
        Ok(withdrawal)
    }

    pub async fn withdrawals_for_email(&self, email: &str) -> Result<Vec<Withdrawal>, WithdrawalApiError> {
        self.db.fetch_withdrawals_for_email(email).await
    }
}

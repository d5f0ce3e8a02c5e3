//! Withdrawal payout policy.
//!
//! The policy is a fixed business rule, expressed as an ordered match: the first row that fits the requesting role
//! wins. Changing the table means changing this code; there is no runtime configuration for it. The decision itself
//! is a pure mapping from `(role, amount, now)` to a [`Disposition`]; persisting the withdrawal and writing the
//! audit entry are the caller's business (see [`crate::WithdrawalApi`]).

use chrono::{DateTime, Duration, Utc};
use dsp_common::Money;
use log::trace;

use crate::db_types::{Role, WithdrawalStatus};

/// Resellers are paid out T+5: five days after the request timestamp.
pub const RESELLER_PAYOUT_DELAY_DAYS: i64 = 5;

/// The outcome the payout policy assigns to a withdrawal request.
///
/// `scheduled_date` is present exactly when `status` is [`WithdrawalStatus::Scheduled`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Disposition {
    pub status: WithdrawalStatus,
    pub note: Option<String>,
    pub scheduled_date: Option<DateTime<Utc>>,
}

/// Applies the payout policy table to a withdrawal request.
///
/// | role        | status    | scheduled_date |
/// |-------------|-----------|----------------|
/// | reseller    | scheduled | now + 5 days   |
/// | high_admin  | paid      | -              |
/// | anyone else | approved  | -              |
///
/// There is no error branch. Unrecognised role tags never reach this function as such, because [`Role`] conversion
/// already failed open to `buyer`, which lands in the default row. `now` is an explicit input so that the decision
/// is deterministic and testable; callers must not substitute their own clock reads further down the line.
pub fn dispose_withdrawal(role: Role, amount: Money, now: DateTime<Utc>) -> Disposition {
    let disposition = match role {
        Role::Reseller => Disposition {
            status: WithdrawalStatus::Scheduled,
            note: Some("Reseller T+5 payout scheduled".to_string()),
            scheduled_date: Some(now + Duration::days(RESELLER_PAYOUT_DELAY_DAYS)),
        },
        Role::HighAdmin => Disposition {
            status: WithdrawalStatus::Paid,
            note: Some("High admin instant payout".to_string()),
            scheduled_date: None,
        },
        _ => Disposition {
            status: WithdrawalStatus::Approved,
            note: Some("Approved by policy".to_string()),
            scheduled_date: None,
        },
    };
    trace!("⚖️ Withdrawal of {amount} by a {role} disposed as '{}'", disposition.status);
    disposition
}

use std::fmt::Debug;

use log::*;

use crate::{
    db_types::{LogCategory, NewLogEntry, NewOrder, Order},
    traits::{AuditLog, OrderApiError, OrderManagement},
};

/// `OrderFlowApi` handles the order side of checkout: persisting the priced order and leaving an audit trail.
///
/// Pricing itself lives in [`crate::pricing`] and runs before this API is involved; the preview endpoint never
/// touches storage at all.
pub struct OrderFlowApi<B> {
    db: B,
}

impl<B> Debug for OrderFlowApi<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "OrderFlowApi")
    }
}

impl<B> OrderFlowApi<B> {
    pub fn new(db: B) -> Self {
        Self { db }
    }
}

impl<B> OrderFlowApi<B>
where B: OrderManagement + AuditLog
{
    /// Persists a new order in `pending` status.
    ///
    /// The audit entry is best-effort: if the log write fails the order still stands, and we only warn. A failure
    /// to write the order itself is returned to the caller, who decides how to degrade (the checkout endpoint
    /// falls back to a placeholder id rather than failing the request).
    pub async fn place_order(&self, order: NewOrder) -> Result<Order, OrderApiError> {
        let order = self.db.insert_order(order).await?;
        debug!("🛒️ Order #{} for {} saved with total {}", order.id, order.user_email, order.total);
        let entry = NewLogEntry {
            category: LogCategory::Order,
            actor: Some(order.user_email.clone()),
            description: format!("Order #{} created with total {}", order.id, order.total),
            related_id: Some(order.id.to_string()),
        };
        if let Err(e) = self.db.create_log_entry(entry).await {
            warn!("🛒️ Could not write the audit entry for order #{}. {e}", order.id);
        }
        Ok(order)
    }

    pub async fn fetch_order(&self, id: i64) -> Result<Option<Order>, OrderApiError> {
        self.db.fetch_order_by_id(id).await
    }

    pub async fn orders_for_email(&self, email: &str) -> Result<Vec<Order>, OrderApiError> {
        self.db.fetch_orders_for_email(email).await
    }
}

use thiserror::Error;

use crate::db_types::{NewOrder, Order};

#[derive(Debug, Clone, Error)]
pub enum OrderApiError {
    #[error("Database error: {0}")]
    DatabaseError(String),
    #[error("Could not encode order items: {0}")]
    InvalidOrderItems(String),
}

impl From<sqlx::Error> for OrderApiError {
    fn from(e: sqlx::Error) -> Self {
        OrderApiError::DatabaseError(e.to_string())
    }
}

/// Order persistence. Orders enter the system exactly once, at checkout, in `pending` status; payment confirmation
/// is a stub and no status transition is performed by the core.
#[allow(async_fn_in_trait)]
pub trait OrderManagement {
    /// Persists a freshly priced order and returns the stored record, including its assigned id.
    async fn insert_order(&self, order: NewOrder) -> Result<Order, OrderApiError>;

    /// Fetches a single order by its id. Returns `None` if no such order exists.
    async fn fetch_order_by_id(&self, id: i64) -> Result<Option<Order>, OrderApiError>;

    /// Fetches all orders placed under the given email, oldest first.
    async fn fetch_orders_for_email(&self, email: &str) -> Result<Vec<Order>, OrderApiError>;
}

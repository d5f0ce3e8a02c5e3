use log::debug;
use sqlx::{types::Json, SqliteConnection};

use crate::{
    db_types::{NewOrder, Order, OrderStatusType},
    traits::OrderApiError,
};

/// Inserts a new order using the given connection. Orders always enter the table in `pending` status; the totals
/// have already been computed and rounded by the pricing engine.
pub async fn insert_order(order: NewOrder, conn: &mut SqliteConnection) -> Result<Order, OrderApiError> {
    let order: Order = sqlx::query_as(
        r#"
            INSERT INTO orders (
                user_email,
                items,
                subtotal,
                discount,
                tax,
                total,
                status,
                payment_method
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *;
        "#,
    )
    .bind(order.user_email)
    .bind(Json(order.items))
    .bind(order.subtotal)
    .bind(order.discount)
    .bind(order.tax)
    .bind(order.total)
    .bind(OrderStatusType::Pending)
    .bind(order.payment_method)
    .fetch_one(conn)
    .await?;
    debug!("📝️ Order #{} inserted for {}", order.id, order.user_email);
    Ok(order)
}

pub async fn fetch_order_by_id(id: i64, conn: &mut SqliteConnection) -> Result<Option<Order>, sqlx::Error> {
    let order = sqlx::query_as("SELECT * FROM orders WHERE id = $1").bind(id).fetch_optional(conn).await?;
    Ok(order)
}

/// Orders placed under the given email, ordered by `created_at` ascending.
pub async fn fetch_orders_for_email(email: &str, conn: &mut SqliteConnection) -> Result<Vec<Order>, sqlx::Error> {
    let orders = sqlx::query_as("SELECT * FROM orders WHERE user_email = $1 ORDER BY created_at ASC")
        .bind(email)
        .fetch_all(conn)
        .await?;
    Ok(orders)
}

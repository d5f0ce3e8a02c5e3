use std::fmt::Display;

use chrono::{DateTime, Utc};
use dsp_engine::db_types::{
    LineItem,
    NewProduct,
    PaymentMethod,
    Product,
    Role,
    WithdrawalStatus,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

fn default_tax_rate() -> Decimal {
    // 10%
    Decimal::new(1, 1)
}

/// The cart as submitted to `/api/orders/preview`. `discount` defaults to zero and `tax_rate` to 10% when omitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartPayload {
    pub items: Vec<LineItem>,
    #[serde(default)]
    pub discount: Decimal,
    #[serde(default = "default_tax_rate")]
    pub tax_rate: Decimal,
}

/// `/api/checkout` takes the same cart, plus the buyer's identity and payment method. Both are optional; anonymous
/// checkouts are recorded against the guest address.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutPayload {
    #[serde(flatten)]
    pub cart: CartPayload,
    pub user_email: Option<String>,
    pub payment_method: Option<PaymentMethod>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WithdrawalPayload {
    pub actor_email: String,
    pub amount: Decimal,
    /// Free-form role tag. Unknown tags are treated as the lowest-privilege role rather than rejected.
    pub role: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthPayload {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentPayload {
    pub order_id: String,
    pub method: String,
}

//--------------------------------------      Responses       --------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewResponse {
    pub ok: bool,
    pub subtotal: Decimal,
    pub discount: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutResponse {
    pub ok: bool,
    pub order_id: String,
    pub client_secret: String,
}

impl CheckoutResponse {
    pub fn for_order_id<S: Display>(order_id: S) -> Self {
        Self { ok: true, order_id: order_id.to_string(), client_secret: format!("demo_{order_id}") }
    }

    /// The placeholder returned when the order could not be persisted. Checkout degrades rather than fails.
    pub fn placeholder() -> Self {
        Self::for_order_id("demo123")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WithdrawalResponse {
    pub ok: bool,
    pub id: i64,
    pub status: WithdrawalStatus,
    pub scheduled_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub ok: bool,
    pub id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub ok: bool,
    pub role: Role,
    pub token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductsResponse {
    pub ok: bool,
    pub items: Vec<ProductItem>,
}

/// A catalogue entry as it appears on the wire, with the price as a plain decimal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductItem {
    pub sku: String,
    pub title: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub category: String,
    pub stock: i64,
}

impl From<Product> for ProductItem {
    fn from(p: Product) -> Self {
        Self {
            sku: p.sku,
            title: p.title,
            description: p.description,
            price: p.price.to_decimal(),
            category: p.category.to_string(),
            stock: p.stock,
        }
    }
}

impl From<NewProduct> for ProductItem {
    fn from(p: NewProduct) -> Self {
        Self {
            sku: p.sku,
            title: p.title,
            description: p.description,
            price: p.price.to_decimal(),
            category: p.category.to_string(),
            stock: p.stock,
        }
    }
}

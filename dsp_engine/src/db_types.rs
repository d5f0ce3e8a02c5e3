use std::{fmt::Display, str::FromStr};

use chrono::{DateTime, Utc};
use dsp_common::{Money, MoneyConversionError};
use log::warn;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
pub use sqlx::types::Json;
use sqlx::{FromRow, Type};
use thiserror::Error;

use crate::pricing::CartTotals;

#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct ConversionError(String);

//--------------------------------------        Role          --------------------------------------------------------
/// The privilege tiers recognised by the platform, in ascending order of trust.
///
/// Roles only influence the withdrawal payout policy (see [`crate::policy`]); they do not gate any endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum Role {
    Buyer,
    Reseller,
    Admin,
    Investor,
    Engineer,
    HighAdmin,
    Owner,
}

impl Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Buyer => write!(f, "buyer"),
            Role::Reseller => write!(f, "reseller"),
            Role::Admin => write!(f, "admin"),
            Role::Investor => write!(f, "investor"),
            Role::Engineer => write!(f, "engineer"),
            Role::HighAdmin => write!(f, "high_admin"),
            Role::Owner => write!(f, "owner"),
        }
    }
}

impl FromStr for Role {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "buyer" => Ok(Self::Buyer),
            "reseller" => Ok(Self::Reseller),
            "admin" => Ok(Self::Admin),
            "investor" => Ok(Self::Investor),
            "engineer" => Ok(Self::Engineer),
            "high_admin" => Ok(Self::HighAdmin),
            "owner" => Ok(Self::Owner),
            s => Err(ConversionError(format!("Unknown role: {s}"))),
        }
    }
}

impl From<String> for Role {
    /// Unrecognised role tags fail open to the lowest-privilege role rather than erroring, so that a withdrawal
    /// request is never dropped on the floor because of a bad tag.
    fn from(value: String) -> Self {
        value.parse().unwrap_or_else(|_| {
            warn!("Unknown role tag: {value}. Falling back to 'buyer'.");
            Role::Buyer
        })
    }
}

impl Default for Role {
    fn default() -> Self {
        Self::Buyer
    }
}

//--------------------------------------      LineItem        --------------------------------------------------------
/// One product entry in a cart or order. Line items are immutable once submitted and are embedded in the order
/// record as a JSON column; they are never persisted independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub sku: String,
    pub title: String,
    pub qty: u32,
    pub unit_price: Decimal,
}

//--------------------------------------   OrderStatusType    --------------------------------------------------------
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum OrderStatusType {
    /// The order has been created at checkout and no payment has been confirmed.
    Pending,
    /// The order has been paid in full.
    Paid,
    /// Payment for the order failed.
    Failed,
    /// The order was refunded after payment.
    Refunded,
}

impl Display for OrderStatusType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStatusType::Pending => write!(f, "pending"),
            OrderStatusType::Paid => write!(f, "paid"),
            OrderStatusType::Failed => write!(f, "failed"),
            OrderStatusType::Refunded => write!(f, "refunded"),
        }
    }
}

impl FromStr for OrderStatusType {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "paid" => Ok(Self::Paid),
            "failed" => Ok(Self::Failed),
            "refunded" => Ok(Self::Refunded),
            s => Err(ConversionError(format!("Invalid order status: {s}"))),
        }
    }
}

//--------------------------------------    PaymentMethod     --------------------------------------------------------
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum PaymentMethod {
    Paypal,
    Robux,
    Manual,
}

impl Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentMethod::Paypal => write!(f, "paypal"),
            PaymentMethod::Robux => write!(f, "robux"),
            PaymentMethod::Manual => write!(f, "manual"),
        }
    }
}

//--------------------------------------       NewOrder       --------------------------------------------------------
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub user_email: String,
    pub items: Vec<LineItem>,
    pub subtotal: Money,
    pub discount: Money,
    pub tax: Money,
    pub total: Money,
    pub payment_method: Option<PaymentMethod>,
}

impl NewOrder {
    /// Builds the record that checkout persists, from the cart and the totals the pricing engine computed for it.
    pub fn from_totals(
        user_email: String,
        items: Vec<LineItem>,
        totals: &CartTotals,
        payment_method: Option<PaymentMethod>,
    ) -> Result<Self, MoneyConversionError> {
        Ok(Self {
            user_email,
            items,
            subtotal: Money::try_from(totals.subtotal)?,
            discount: Money::try_from(totals.discount)?,
            tax: Money::try_from(totals.tax)?,
            total: Money::try_from(totals.total)?,
            payment_method,
        })
    }
}

//--------------------------------------        Order         --------------------------------------------------------
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Order {
    pub id: i64,
    pub user_email: String,
    pub items: Json<Vec<LineItem>>,
    pub subtotal: Money,
    pub discount: Money,
    pub tax: Money,
    pub total: Money,
    pub status: OrderStatusType,
    pub payment_method: Option<PaymentMethod>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

//--------------------------------------  WithdrawalStatus    --------------------------------------------------------
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum WithdrawalStatus {
    /// The request has been received but no disposition has been assigned yet.
    Requested,
    /// A payout date has been set; `scheduled_date` carries it.
    Scheduled,
    /// Cleared by policy for manual payout.
    Approved,
    /// Paid out immediately.
    Paid,
    /// Declined.
    Rejected,
}

impl Display for WithdrawalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WithdrawalStatus::Requested => write!(f, "requested"),
            WithdrawalStatus::Scheduled => write!(f, "scheduled"),
            WithdrawalStatus::Approved => write!(f, "approved"),
            WithdrawalStatus::Paid => write!(f, "paid"),
            WithdrawalStatus::Rejected => write!(f, "rejected"),
        }
    }
}

//--------------------------------------    NewWithdrawal     --------------------------------------------------------
#[derive(Debug, Clone)]
pub struct NewWithdrawal {
    pub actor_email: String,
    pub amount: Money,
    pub role: Role,
}

impl NewWithdrawal {
    pub fn new<S: Into<String>>(actor_email: S, amount: Money, role: Role) -> Self {
        Self { actor_email: actor_email.into(), amount, role }
    }
}

//--------------------------------------      Withdrawal      --------------------------------------------------------
/// A withdrawal request together with the disposition the payout policy assigned to it. Written once; the core
/// never mutates it afterwards.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Withdrawal {
    pub id: i64,
    pub actor_email: String,
    pub amount: Money,
    pub role: Role,
    pub status: WithdrawalStatus,
    pub note: Option<String>,
    pub scheduled_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

//--------------------------------------   ProductCategory    --------------------------------------------------------
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum ProductCategory {
    Vps,
    Domain,
    Panel,
    Addon,
}

impl Display for ProductCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProductCategory::Vps => write!(f, "vps"),
            ProductCategory::Domain => write!(f, "domain"),
            ProductCategory::Panel => write!(f, "panel"),
            ProductCategory::Addon => write!(f, "addon"),
        }
    }
}

//--------------------------------------      NewProduct      --------------------------------------------------------
#[derive(Debug, Clone, Serialize)]
pub struct NewProduct {
    pub sku: String,
    pub title: String,
    pub description: Option<String>,
    pub price: Money,
    pub category: ProductCategory,
    pub stock: i64,
}

//--------------------------------------       Product        --------------------------------------------------------
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Product {
    pub id: i64,
    pub sku: String,
    pub title: String,
    pub description: Option<String>,
    pub price: Money,
    pub category: ProductCategory,
    pub stock: i64,
}

//--------------------------------------        NewUser       --------------------------------------------------------
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    /// Demo secret. This is a demo credential store; nothing is hashed and login does not verify it.
    pub password: String,
    pub role: Role,
    pub is_active: bool,
}

//--------------------------------------         User         --------------------------------------------------------
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

//--------------------------------------     LogCategory      --------------------------------------------------------
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum LogCategory {
    Order,
    Payment,
    Auth,
    Withdrawal,
    System,
    Sale,
}

impl Display for LogCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogCategory::Order => write!(f, "order"),
            LogCategory::Payment => write!(f, "payment"),
            LogCategory::Auth => write!(f, "auth"),
            LogCategory::Withdrawal => write!(f, "withdrawal"),
            LogCategory::System => write!(f, "system"),
            LogCategory::Sale => write!(f, "sale"),
        }
    }
}

//--------------------------------------     NewLogEntry      --------------------------------------------------------
#[derive(Debug, Clone)]
pub struct NewLogEntry {
    pub category: LogCategory,
    pub actor: Option<String>,
    pub description: String,
    pub related_id: Option<String>,
}

//--------------------------------------       LogEntry       --------------------------------------------------------
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LogEntry {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub category: LogCategory,
    pub actor: Option<String>,
    pub description: String,
    pub related_id: Option<String>,
}

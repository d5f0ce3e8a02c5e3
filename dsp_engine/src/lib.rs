//! Digital Services Platform engine
//!
//! This library contains the core logic for the storefront backend. It is divided into three main sections:
//! 1. The deterministic business rules: cart pricing ([`mod@pricing`]) and the withdrawal payout policy
//!    ([`mod@policy`]). Both are pure functions with no I/O; the current time is always an explicit parameter.
//! 2. The storage contracts ([`mod@traits`]) that database backends must implement, and the public API structs
//!    ([`OrderFlowApi`], [`WithdrawalApi`], [`CatalogApi`], [`AuthApi`]) that are generic over those contracts.
//! 3. The SQLite backend ([`SqliteDatabase`]), the only backend currently shipped. You should never need to touch
//!    the database directly; go through the API structs instead. The record types it stores live in `db_types` and
//!    are public.
mod api;

pub mod db_types;
pub mod policy;
pub mod pricing;
pub mod traits;

#[cfg(feature = "sqlite")]
mod sqlite;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteDatabase;

pub use api::{preset_products, AuthApi, CatalogApi, OrderFlowApi, WithdrawalApi};

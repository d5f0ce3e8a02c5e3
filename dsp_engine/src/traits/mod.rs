//! Storage contracts for the platform database backends.
//!
//! Each trait covers one concern and comes with its own error type. Backends (currently only
//! [`crate::SqliteDatabase`]) implement all of them; the public API structs in [`crate`] are generic over these
//! traits so that the server's endpoint tests can substitute mocks.
//!
//! * [`OrderManagement`] persists and fetches orders created at checkout.
//! * [`WithdrawalManagement`] persists withdrawal requests together with their policy disposition.
//! * [`CatalogManagement`] maintains the product catalogue.
//! * [`UserManagement`] is the (demo-grade) identity store behind register/login.
//! * [`AuditLog`] is the best-effort audit trail; callers must never let its failure sink a primary operation.
mod audit_log;
mod catalog_management;
mod order_management;
mod user_management;
mod withdrawal_management;

pub use audit_log::{AuditLog, AuditLogError};
pub use catalog_management::{CatalogApiError, CatalogManagement};
pub use order_management::{OrderApiError, OrderManagement};
pub use user_management::{UserApiError, UserManagement};
pub use withdrawal_management::{WithdrawalApiError, WithdrawalManagement};

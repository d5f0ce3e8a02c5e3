mod auth_api;
mod catalog_api;
mod order_flow_api;
mod withdrawal_api;

pub use auth_api::AuthApi;
pub use catalog_api::{preset_products, CatalogApi};
pub use order_flow_api::OrderFlowApi;
pub use withdrawal_api::WithdrawalApi;

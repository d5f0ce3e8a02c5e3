use thiserror::Error;

use crate::db_types::{NewProduct, Product};

#[derive(Debug, Clone, Error)]
pub enum CatalogApiError {
    #[error("Database error: {0}")]
    DatabaseError(String),
    #[error("A product with sku {0} already exists")]
    DuplicateSku(String),
}

impl From<sqlx::Error> for CatalogApiError {
    fn from(e: sqlx::Error) -> Self {
        CatalogApiError::DatabaseError(e.to_string())
    }
}

/// Product catalogue maintenance.
#[allow(async_fn_in_trait)]
pub trait CatalogManagement {
    async fn insert_product(&self, product: NewProduct) -> Result<Product, CatalogApiError>;

    /// Fetches the full catalogue, in insertion order.
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogApiError>;

    async fn product_count(&self) -> Result<i64, CatalogApiError>;
}

//! `SqliteDatabase` is the concrete storage backend for the platform.
//!
//! Unsurprisingly, it uses SQLite under the hood and implements all the traits defined in the [`crate::traits`]
//! module. The schema is created idempotently when the pool is opened, so a fresh database file (or an in-memory
//! store in tests) is immediately usable.
use std::fmt::Debug;

use sqlx::SqlitePool;

use super::db::{self, logs, orders, products, users, withdrawals};
use crate::{
    db_types::{
        LogEntry,
        NewLogEntry,
        NewOrder,
        NewProduct,
        NewUser,
        NewWithdrawal,
        Order,
        Product,
        User,
        Withdrawal,
    },
    policy::Disposition,
    traits::{
        AuditLog,
        AuditLogError,
        CatalogApiError,
        CatalogManagement,
        OrderApiError,
        OrderManagement,
        UserApiError,
        UserManagement,
        WithdrawalApiError,
        WithdrawalManagement,
    },
};

#[derive(Clone)]
pub struct SqliteDatabase {
    url: String,
    pool: SqlitePool,
}

impl Debug for SqliteDatabase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "SqliteDatabase ({:?})", self.pool)
    }
}

impl SqliteDatabase {
    /// Connects to the database at `DSP_DATABASE_URL` (or the default on-disk store).
    pub async fn new(max_connections: u32) -> Result<Self, sqlx::Error> {
        let url = db::db_url();
        Self::new_with_url(&url, max_connections).await
    }

    pub async fn new_with_url(url: &str, max_connections: u32) -> Result<Self, sqlx::Error> {
        let pool = db::new_pool(url, max_connections).await?;
        let mut conn = pool.acquire().await?;
        db::create_schema(&mut conn).await?;
        Ok(Self { url: url.to_string(), pool })
    }

    pub fn url(&self) -> &str {
        self.url.as_str()
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

impl OrderManagement for SqliteDatabase {
    async fn insert_order(&self, order: NewOrder) -> Result<Order, OrderApiError> {
        let mut conn = self.pool.acquire().await?;
        orders::insert_order(order, &mut conn).await
    }

    async fn fetch_order_by_id(&self, id: i64) -> Result<Option<Order>, OrderApiError> {
        let mut conn = self.pool.acquire().await?;
        let order = orders::fetch_order_by_id(id, &mut conn).await?;
        Ok(order)
    }

    async fn fetch_orders_for_email(&self, email: &str) -> Result<Vec<Order>, OrderApiError> {
        let mut conn = self.pool.acquire().await?;
        let orders = orders::fetch_orders_for_email(email, &mut conn).await?;
        Ok(orders)
    }
}

impl WithdrawalManagement for SqliteDatabase {
    async fn insert_withdrawal(
        &self,
        withdrawal: NewWithdrawal,
        disposition: Disposition,
    ) -> Result<Withdrawal, WithdrawalApiError> {
        let mut conn = self.pool.acquire().await?;
        withdrawals::insert_withdrawal(withdrawal, disposition, &mut conn).await
    }

    async fn fetch_withdrawals_for_email(&self, email: &str) -> Result<Vec<Withdrawal>, WithdrawalApiError> {
        let mut conn = self.pool.acquire().await?;
        let withdrawals = withdrawals::fetch_withdrawals_for_email(email, &mut conn).await?;
        Ok(withdrawals)
    }
}

impl CatalogManagement for SqliteDatabase {
    async fn insert_product(&self, product: NewProduct) -> Result<Product, CatalogApiError> {
        let mut conn = self.pool.acquire().await?;
        products::insert_product(product, &mut conn).await
    }

    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogApiError> {
        let mut conn = self.pool.acquire().await?;
        let products = products::fetch_products(&mut conn).await?;
        Ok(products)
    }

    async fn product_count(&self) -> Result<i64, CatalogApiError> {
        let mut conn = self.pool.acquire().await?;
        let count = products::product_count(&mut conn).await?;
        Ok(count)
    }
}

impl UserManagement for SqliteDatabase {
    async fn insert_user(&self, user: NewUser) -> Result<User, UserApiError> {
        let mut conn = self.pool.acquire().await?;
        users::insert_user(user, &mut conn).await
    }

    async fn fetch_user_by_email(&self, email: &str) -> Result<Option<User>, UserApiError> {
        let mut conn = self.pool.acquire().await?;
        let user = users::fetch_user_by_email(email, &mut conn).await?;
        Ok(user)
    }
}

impl AuditLog for SqliteDatabase {
    async fn create_log_entry(&self, entry: NewLogEntry) -> Result<LogEntry, AuditLogError> {
        let mut conn = self.pool.acquire().await?;
        logs::insert_log_entry(entry, &mut conn).await
    }

    async fn fetch_log_entries(&self, limit: i64) -> Result<Vec<LogEntry>, AuditLogError> {
        let mut conn = self.pool.acquire().await?;
        let entries = logs::fetch_log_entries(limit, &mut conn).await?;
        Ok(entries)
    }
}

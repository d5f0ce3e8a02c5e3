use dsp_engine::{
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
use mockall::mock;

mock! {
    pub OrderDb {}
    impl OrderManagement for OrderDb {
        async fn insert_order(&self, order: NewOrder) -> Result<Order, OrderApiError>;
        async fn fetch_order_by_id(&self, id: i64) -> Result<Option<Order>, OrderApiError>;
        async fn fetch_orders_for_email(&self, email: &str) -> Result<Vec<Order>, OrderApiError>;
    }
    impl AuditLog for OrderDb {
        async fn create_log_entry(&self, entry: NewLogEntry) -> Result<LogEntry, AuditLogError>;
        async fn fetch_log_entries(&self, limit: i64) -> Result<Vec<LogEntry>, AuditLogError>;
    }
}

mock! {
    pub WithdrawalDb {}
    impl WithdrawalManagement for WithdrawalDb {
        async fn insert_withdrawal(&self, withdrawal: NewWithdrawal, disposition: Disposition) -> Result<Withdrawal, WithdrawalApiError>;
        async fn fetch_withdrawals_for_email(&self, email: &str) -> Result<Vec<Withdrawal>, WithdrawalApiError>;
    }
    impl AuditLog for WithdrawalDb {
        async fn create_log_entry(&self, entry: NewLogEntry) -> Result<LogEntry, AuditLogError>;
        async fn fetch_log_entries(&self, limit: i64) -> Result<Vec<LogEntry>, AuditLogError>;
    }
}

mock! {
    pub CatalogDb {}
    impl CatalogManagement for CatalogDb {
        async fn insert_product(&self, product: NewProduct) -> Result<Product, CatalogApiError>;
        async fn fetch_products(&self) -> Result<Vec<Product>, CatalogApiError>;
        async fn product_count(&self) -> Result<i64, CatalogApiError>;
    }
}

mock! {
    pub UserDb {}
    impl UserManagement for UserDb {
        async fn insert_user(&self, user: NewUser) -> Result<User, UserApiError>;
        async fn fetch_user_by_email(&self, email: &str) -> Result<Option<User>, UserApiError>;
    }
    impl AuditLog for UserDb {
        async fn create_log_entry(&self, entry: NewLogEntry) -> Result<LogEntry, AuditLogError>;
        async fn fetch_log_entries(&self, limit: i64) -> Result<Vec<LogEntry>, AuditLogError>;
    }
}

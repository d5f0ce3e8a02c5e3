use sqlx::SqliteConnection;

use crate::{
    db_types::{NewProduct, Product},
    traits::CatalogApiError,
};

pub async fn insert_product(product: NewProduct, conn: &mut SqliteConnection) -> Result<Product, CatalogApiError> {
    let sku = product.sku.clone();
    let product = sqlx::query_as(
        r#"
            INSERT INTO products (sku, title, description, price, category, stock)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *;
        "#,
    )
    .bind(product.sku)
    .bind(product.title)
    .bind(product.description)
    .bind(product.price)
    .bind(product.category)
    .bind(product.stock)
    .fetch_one(conn)
    .await
    .map_err(|e| match &e {
        sqlx::Error::Database(db) if db.is_unique_violation() => CatalogApiError::DuplicateSku(sku),
        _ => CatalogApiError::from(e),
    })?;
    Ok(product)
}

pub async fn fetch_products(conn: &mut SqliteConnection) -> Result<Vec<Product>, sqlx::Error> {
    let products = sqlx::query_as("SELECT * FROM products ORDER BY id ASC").fetch_all(conn).await?;
    Ok(products)
}

pub async fn product_count(conn: &mut SqliteConnection) -> Result<i64, sqlx::Error> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products").fetch_one(conn).await?;
    Ok(count)
}

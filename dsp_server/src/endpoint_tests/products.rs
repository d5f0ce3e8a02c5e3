use actix_web::{http::StatusCode, web, web::ServiceConfig};
use dsp_common::Money;
use dsp_engine::{
    db_types::{Product, ProductCategory},
    CatalogApi,
};
use serde_json::json;

use super::{
    helpers::{as_json, get_request},
    mocks::MockCatalogDb,
};
use crate::routes::products;

fn configure(cfg: &mut ServiceConfig) {
    let mut db = MockCatalogDb::new();
    db.expect_fetch_products().returning(|| {
        Ok(vec![Product {
            id: 1,
            sku: "VPS-1".to_string(),
            title: "VPS Nano".to_string(),
            description: Some("1 vCPU • 1GB RAM • 20GB SSD".to_string()),
            price: Money::from_cents(399),
            category: ProductCategory::Vps,
            stock: 200,
        }])
    });
    cfg.route("/api/products", web::get().to(products::<MockCatalogDb>))
        .app_data(web::Data::new(CatalogApi::new(db)));
}

#[actix_web::test]
async fn products_lists_the_catalogue() {
    let _ = env_logger::try_init().ok();
    let (status, body) = get_request("/api/products", configure).await.expect("Request failed");
    assert_eq!(status, StatusCode::OK);
    assert_eq!(as_json(&body), json!({
        "ok": true,
        "items": [{
            "sku": "VPS-1",
            "title": "VPS Nano",
            "description": "1 vCPU • 1GB RAM • 20GB SSD",
            "price": 3.99,
            "category": "vps",
            "stock": 200
        }]
    }));
}

fn configure_down(cfg: &mut ServiceConfig) {
    let mut db = MockCatalogDb::new();
    db.expect_fetch_products()
        .returning(|| Err(dsp_engine::traits::CatalogApiError::DatabaseError("storage offline".to_string())));
    cfg.route("/api/products", web::get().to(products::<MockCatalogDb>))
        .app_data(web::Data::new(CatalogApi::new(db)));
}

#[actix_web::test]
async fn products_falls_back_to_the_presets_when_storage_fails() {
    let _ = env_logger::try_init().ok();
    let (status, body) = get_request("/api/products", configure_down).await.expect("Request failed");
    assert_eq!(status, StatusCode::OK);
    let body = as_json(&body);
    assert_eq!(body["ok"], json!(true));
    let items = body["items"].as_array().expect("items is not an array");
    assert_eq!(items.len(), 4);
    assert_eq!(items[0]["sku"], json!("VPS-1"));
    assert_eq!(items[0]["price"], json!(3.99));
    assert_eq!(items[2]["category"], json!("domain"));
}

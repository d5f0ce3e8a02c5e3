use actix_web::{http::StatusCode, web::ServiceConfig};
use serde_json::json;

use super::helpers::{as_json, get_request};
use crate::routes::{health, index, logs, metrics, sales, schema};

fn configure(cfg: &mut ServiceConfig) {
    cfg.service(health).service(index).service(schema).service(metrics).service(sales).service(logs);
}

#[actix_web::test]
async fn health_check() {
    let _ = env_logger::try_init().ok();
    let (status, body) = get_request("/health", configure).await.expect("Request failed");
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "👍️\n");
}

#[actix_web::test]
async fn index_greets() {
    let _ = env_logger::try_init().ok();
    let (status, body) = get_request("/", configure).await.expect("Request failed");
    assert_eq!(status, StatusCode::OK);
    assert_eq!(as_json(&body), json!({"message": "DSP API running"}));
}

#[actix_web::test]
async fn schema_lists_the_collections() {
    let _ = env_logger::try_init().ok();
    let (status, body) = get_request("/schema", configure).await.expect("Request failed");
    assert_eq!(status, StatusCode::OK);
    assert_eq!(as_json(&body), json!({
        "collections": ["user", "product", "order", "payment", "withdrawal", "log"]
    }));
}

#[actix_web::test]
async fn metrics_serves_six_cards() {
    let _ = env_logger::try_init().ok();
    let (status, body) = get_request("/api/metrics", configure).await.expect("Request failed");
    assert_eq!(status, StatusCode::OK);
    let body = as_json(&body);
    assert_eq!(body["ok"], json!(true));
    assert_eq!(body["cards"].as_array().map(|c| c.len()), Some(6));
}

#[actix_web::test]
async fn sales_serves_a_thirty_day_series() {
    let _ = env_logger::try_init().ok();
    let (status, body) = get_request("/api/sales", configure).await.expect("Request failed");
    assert_eq!(status, StatusCode::OK);
    let body = as_json(&body);
    assert_eq!(body["ok"], json!(true));
    let series = body["series"].as_array().expect("series is not an array");
    assert_eq!(series.len(), 30);
    assert!(series[0]["date"].is_string());
    assert!(series[0]["units"].is_number());
}

#[actix_web::test]
async fn logs_serves_the_synthetic_rows() {
    let _ = env_logger::try_init().ok();
    let (status, body) = get_request("/api/logs", configure).await.expect("Request failed");
    assert_eq!(status, StatusCode::OK);
    let body = as_json(&body);
    assert_eq!(body["ok"], json!(true));
    let items = body["items"].as_array().expect("items is not an array");
    assert_eq!(items.len(), 25);
    assert_eq!(items[0]["category"], json!("order"));
    assert_eq!(items[24]["related_id"], json!("RID0024"));
}

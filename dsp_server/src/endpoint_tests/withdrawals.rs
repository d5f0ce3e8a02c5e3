use actix_web::{http::StatusCode, web, web::ServiceConfig};
use chrono::Utc;
use dsp_engine::{
    db_types::{LogEntry, NewLogEntry, NewWithdrawal, Withdrawal},
    policy::Disposition,
    WithdrawalApi,
};
use serde_json::json;

use super::{
    helpers::{as_json, post_request},
    mocks::MockWithdrawalDb,
};
use crate::routes::new_withdrawal;

fn stored_withdrawal(request: NewWithdrawal, disposition: Disposition) -> Withdrawal {
    Withdrawal {
        id: 31,
        actor_email: request.actor_email,
        amount: request.amount,
        role: request.role,
        status: disposition.status,
        note: disposition.note,
        scheduled_date: disposition.scheduled_date,
        created_at: Utc::now(),
    }
}

fn stored_log_entry(entry: NewLogEntry) -> LogEntry {
    LogEntry {
        id: 1,
        created_at: Utc::now(),
        category: entry.category,
        actor: entry.actor,
        description: entry.description,
        related_id: entry.related_id,
    }
}

fn configure(cfg: &mut ServiceConfig) {
    let mut db = MockWithdrawalDb::new();
    db.expect_insert_withdrawal().returning(|request, disposition| Ok(stored_withdrawal(request, disposition)));
    db.expect_create_log_entry().returning(|entry| Ok(stored_log_entry(entry)));
    cfg.route("/api/withdrawals", web::post().to(new_withdrawal::<MockWithdrawalDb>))
        .app_data(web::Data::new(WithdrawalApi::new(db)));
}

#[actix_web::test]
async fn reseller_withdrawals_are_scheduled() {
    let _ = env_logger::try_init().ok();
    let payload = json!({"actor_email": "reseller@site.com", "amount": 50.0, "role": "reseller"});
    let (status, body) = post_request("/api/withdrawals", payload, configure).await.expect("Request failed");
    assert_eq!(status, StatusCode::OK);
    let body = as_json(&body);
    assert_eq!(body["ok"], json!(true));
    assert_eq!(body["id"], json!(31));
    assert_eq!(body["status"], json!("scheduled"));
    assert!(body["scheduled_date"].is_string());
}

#[actix_web::test]
async fn high_admin_withdrawals_are_paid_instantly() {
    let _ = env_logger::try_init().ok();
    let payload = json!({"actor_email": "hq@site.com", "amount": 120.0, "role": "high_admin"});
    let (status, body) = post_request("/api/withdrawals", payload, configure).await.expect("Request failed");
    assert_eq!(status, StatusCode::OK);
    let body = as_json(&body);
    assert_eq!(body["status"], json!("paid"));
    assert_eq!(body["scheduled_date"], json!(null));
}

#[actix_web::test]
async fn unknown_role_tags_fail_open_to_the_default_row() {
    let _ = env_logger::try_init().ok();
    let payload = json!({"actor_email": "who@site.com", "amount": 10.0, "role": "grand_vizier"});
    let (status, body) = post_request("/api/withdrawals", payload, configure).await.expect("Request failed");
    assert_eq!(status, StatusCode::OK);
    let body = as_json(&body);
    assert_eq!(body["status"], json!("approved"));
    assert_eq!(body["scheduled_date"], json!(null));
}

#[actix_web::test]
async fn non_positive_amounts_are_rejected() {
    let _ = env_logger::try_init().ok();
    let payload = json!({"actor_email": "reseller@site.com", "amount": 0.0, "role": "reseller"});
    let err = post_request("/api/withdrawals", payload, configure).await.expect_err("Expected error");
    assert_eq!(err, "Could not read request body: Withdrawal amount must be positive");
}

fn configure_down(cfg: &mut ServiceConfig) {
    let mut db = MockWithdrawalDb::new();
    db.expect_insert_withdrawal().returning(|_, _| {
        Err(dsp_engine::traits::WithdrawalApiError::DatabaseError("storage offline".to_string()))
    });
    cfg.route("/api/withdrawals", web::post().to(new_withdrawal::<MockWithdrawalDb>))
        .app_data(web::Data::new(WithdrawalApi::new(db)));
}

#[actix_web::test]
async fn withdrawals_fail_closed_when_storage_fails() {
    let _ = env_logger::try_init().ok();
    let payload = json!({"actor_email": "reseller@site.com", "amount": 50.0, "role": "reseller"});
    // Unlike checkout, there is no placeholder response here
    let err = post_request("/api/withdrawals", payload, configure_down).await.expect_err("Expected error");
    assert_eq!(err, "An error occurred on the backend of the server. Database error: storage offline");
}

use actix_web::{http::StatusCode, web, web::ServiceConfig};
use chrono::Utc;
use dsp_engine::{
    db_types::{LogEntry, NewLogEntry, Role, User},
    AuthApi,
};
use serde_json::json;

use super::{
    helpers::{as_json, post_request},
    mocks::MockUserDb,
};
use crate::routes::{login, register};

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

fn configure_register(cfg: &mut ServiceConfig) {
    let mut db = MockUserDb::new();
    db.expect_insert_user()
        .withf(|user| user.role == Role::Buyer && user.name == "alice" && user.is_active)
        .returning(|user| {
            Ok(User {
                id: 42,
                name: user.name,
                email: user.email,
                password: user.password,
                role: user.role,
                is_active: user.is_active,
                created_at: Utc::now(),
            })
        });
    db.expect_create_log_entry().returning(|entry| Ok(stored_log_entry(entry)));
    cfg.route("/api/register", web::post().to(register::<MockUserDb>)).app_data(web::Data::new(AuthApi::new(db)));
}

#[actix_web::test]
async fn registration_creates_a_buyer_account() {
    let _ = env_logger::try_init().ok();
    let payload = json!({"email": "alice@example.com", "password": "hunter2"});
    let (status, body) = post_request("/api/register", payload, configure_register).await.expect("Request failed");
    assert_eq!(status, StatusCode::OK);
    assert_eq!(as_json(&body), json!({"ok": true, "id": 42}));
}

fn configure_register_taken(cfg: &mut ServiceConfig) {
    let mut db = MockUserDb::new();
    db.expect_insert_user().returning(|_| Err(dsp_engine::traits::UserApiError::EmailTaken));
    cfg.route("/api/register", web::post().to(register::<MockUserDb>)).app_data(web::Data::new(AuthApi::new(db)));
}

#[actix_web::test]
async fn duplicate_registrations_are_rejected() {
    let _ = env_logger::try_init().ok();
    let payload = json!({"email": "alice@example.com", "password": "hunter2"});
    let err = post_request("/api/register", payload, configure_register_taken).await.expect_err("Expected error");
    assert_eq!(err, "Could not read request body: A user with this email address already exists");
}

fn configure_login(cfg: &mut ServiceConfig) {
    let mut db = MockUserDb::new();
    db.expect_fetch_user_by_email().returning(|email| {
        // Only the registered admin account exists in the store
        if email == "boss@site.com" {
            Ok(Some(User {
                id: 1,
                name: "boss".to_string(),
                email: email.to_string(),
                password: "secret".to_string(),
                role: Role::Admin,
                is_active: true,
                created_at: Utc::now(),
            }))
        } else {
            Ok(None)
        }
    });
    cfg.route("/api/login", web::post().to(login::<MockUserDb>)).app_data(web::Data::new(AuthApi::new(db)));
}

#[actix_web::test]
async fn login_role_comes_from_the_identity_store() {
    let _ = env_logger::try_init().ok();
    let payload = json!({"email": "boss@site.com", "password": "whatever"});
    let (status, body) = post_request("/api/login", payload, configure_login).await.expect("Request failed");
    assert_eq!(status, StatusCode::OK);
    assert_eq!(as_json(&body), json!({"ok": true, "role": "admin", "token": "demo-token"}));
}

#[actix_web::test]
async fn an_admin_looking_email_grants_nothing_by_itself() {
    let _ = env_logger::try_init().ok();
    // Not in the store, so the prefix is irrelevant and the caller is a buyer
    let payload = json!({"email": "admin@elsewhere.com", "password": "whatever"});
    let (status, body) = post_request("/api/login", payload, configure_login).await.expect("Request failed");
    assert_eq!(status, StatusCode::OK);
    assert_eq!(as_json(&body), json!({"ok": true, "role": "buyer", "token": "demo-token"}));
}

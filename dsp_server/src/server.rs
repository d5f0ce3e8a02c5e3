use std::time::Duration;

use actix_web::{dev::Server, http::KeepAlive, middleware::Logger, web, App, HttpServer};
use dsp_engine::{AuthApi, CatalogApi, OrderFlowApi, SqliteDatabase, WithdrawalApi};
use log::*;

use crate::{
    config::ServerConfig,
    errors::ServerError,
    routes::{checkout, health, index, login, logs, metrics, new_withdrawal, order_preview, payment, products, register, sales, schema},
};

pub async fn run_server(config: ServerConfig) -> Result<(), ServerError> {
    let db = SqliteDatabase::new_with_url(&config.database_url, 25)
        .await
        .map_err(|e| ServerError::InitializeError(e.to_string()))?;
    if config.seed_products {
        // Best-effort: the products endpoint falls back to the presets anyway
        match CatalogApi::new(db.clone()).seed_presets_if_empty().await {
            Ok(0) => {},
            Ok(n) => info!("🏪️ Seeded {n} products at startup"),
            Err(e) => warn!("🏪️ Could not seed the product catalogue. {e}"),
        }
    }
    let srv = create_server_instance(config, db)?;
    srv.await.map_err(|e| ServerError::Unspecified(e.to_string()))
}

pub fn create_server_instance(config: ServerConfig, db: SqliteDatabase) -> Result<Server, ServerError> {
    let srv = HttpServer::new(move || {
        let orders_api = OrderFlowApi::new(db.clone());
        let withdrawals_api = WithdrawalApi::new(db.clone());
        let catalog_api = CatalogApi::new(db.clone());
        let auth_api = AuthApi::new(db.clone());
        App::new()
            .wrap(Logger::new("%t (%D ms) %s %a %{Host}i %U").log_target("dsp::access_log"))
            .app_data(web::Data::new(orders_api))
            .app_data(web::Data::new(withdrawals_api))
            .app_data(web::Data::new(catalog_api))
            .app_data(web::Data::new(auth_api))
            .service(health)
            .service(index)
            .service(schema)
            .service(metrics)
            .service(sales)
            .service(logs)
            .route("/api/orders/preview", web::post().to(order_preview))
            .route("/api/checkout", web::post().to(checkout::<SqliteDatabase>))
            .route("/api/payment", web::post().to(payment))
            .route("/api/withdrawals", web::post().to(new_withdrawal::<SqliteDatabase>))
            .route("/api/register", web::post().to(register::<SqliteDatabase>))
            .route("/api/login", web::post().to(login::<SqliteDatabase>))
            .route("/api/products", web::get().to(products::<SqliteDatabase>))
    })
    .keep_alive(KeepAlive::Timeout(Duration::from_secs(600)))
    .bind((config.host.as_str(), config.port))?
    .run();
    Ok(srv)
}

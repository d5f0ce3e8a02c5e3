//! Request handler definitions
//!
//! Define each route and its handler here.
//! Handlers that are more than a line or two MUST go into a separate module. Keep this module neat and tidy 🙏
//!
//! Handlers that need storage are generic over the storage traits and receive the concrete API through
//! `web::Data`, so the endpoint tests can run them against mocks. Pure handlers (preview, the dashboard data) have
//! no generics and are registered with their attribute macros.
use actix_web::{get, web, HttpResponse, Responder};
use chrono::Utc;
use dsp_common::Money;
use dsp_engine::{
    db_types::{NewOrder, NewWithdrawal, PaymentMethod, Role},
    pricing::compute_totals,
    preset_products,
    traits::{AuditLog, CatalogManagement, OrderManagement, UserManagement, WithdrawalManagement},
    AuthApi,
    CatalogApi,
    OrderFlowApi,
    WithdrawalApi,
};
use log::*;
use serde_json::json;

use crate::{
    data_objects::{
        AuthPayload,
        CartPayload,
        CheckoutPayload,
        CheckoutResponse,
        LoginResponse,
        PaymentPayload,
        PreviewResponse,
        ProductItem,
        ProductsResponse,
        RegisterResponse,
        WithdrawalPayload,
        WithdrawalResponse,
    },
    errors::ServerError,
    report,
};

/// The default identity for anonymous checkouts.
pub const GUEST_EMAIL: &str = "guest@example.com";

// ----------------------------------------------   Health  ----------------------------------------------------
#[get("/health")]
pub async fn health() -> impl Responder {
    trace!("💻️ Received health check request");
    HttpResponse::Ok().body("👍️\n")
}

#[get("/")]
pub async fn index() -> impl Responder {
    HttpResponse::Ok().json(json!({ "message": "DSP API running" }))
}

#[get("/schema")]
pub async fn schema() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "collections": ["user", "product", "order", "payment", "withdrawal", "log"]
    }))
}

// ----------------------------------------------   Orders  ----------------------------------------------------

/// Rejects carts the pricing engine should never see. The engine itself assumes sane line items.
fn validate_cart(cart: &CartPayload) -> Result<(), ServerError> {
    for item in &cart.items {
        if item.qty < 1 {
            return Err(ServerError::InvalidRequestBody(format!("Line item {} has a quantity of zero", item.sku)));
        }
        if item.unit_price.is_sign_negative() {
            return Err(ServerError::InvalidRequestBody(format!("Line item {} has a negative unit price", item.sku)));
        }
    }
    Ok(())
}

/// Prices a cart without creating anything. Storage is never touched.
pub async fn order_preview(body: web::Json<CartPayload>) -> Result<HttpResponse, ServerError> {
    let cart = body.into_inner();
    validate_cart(&cart)?;
    let totals = compute_totals(&cart.items, cart.discount, cart.tax_rate);
    trace!("💻️ Previewed cart of {} items at {}", cart.items.len(), totals.total);
    Ok(HttpResponse::Ok().json(PreviewResponse {
        ok: true,
        subtotal: totals.subtotal,
        discount: totals.discount,
        tax: totals.tax,
        total: totals.total,
    }))
}

/// Prices the cart and persists a `pending` order.
///
/// If the order cannot be persisted, the response is still success-shaped with the placeholder id, so the demo
/// storefront keeps working without a database. Contrast with [`new_withdrawal`], which fails closed.
pub async fn checkout<B: OrderManagement + AuditLog>(
    body: web::Json<CheckoutPayload>,
    api: web::Data<OrderFlowApi<B>>,
) -> Result<HttpResponse, ServerError> {
    let payload = body.into_inner();
    validate_cart(&payload.cart)?;
    let totals = compute_totals(&payload.cart.items, payload.cart.discount, payload.cart.tax_rate);
    let email = payload.user_email.unwrap_or_else(|| GUEST_EMAIL.to_string());
    let method = payload.payment_method.unwrap_or(PaymentMethod::Manual);
    let response = match NewOrder::from_totals(email, payload.cart.items, &totals, Some(method)) {
        Ok(order) => match api.place_order(order).await {
            Ok(order) => CheckoutResponse::for_order_id(order.id),
            Err(e) => {
                warn!("💻️ Could not persist the order, degrading to the placeholder. {e}");
                CheckoutResponse::placeholder()
            },
        },
        Err(e) => {
            warn!("💻️ Cart totals do not fit a money value, degrading to the placeholder. {e}");
            CheckoutResponse::placeholder()
        },
    };
    Ok(HttpResponse::Ok().json(response))
}

/// Payment confirmation stub. Nothing is verified and no order status changes.
pub async fn payment(body: web::Json<PaymentPayload>) -> Result<HttpResponse, ServerError> {
    let payload = body.into_inner();
    debug!("💻️ Payment stub called for order {} via {}", payload.order_id, payload.method);
    Ok(HttpResponse::Ok().json(json!({ "ok": true, "status": "success", "order_id": payload.order_id })))
}

// ----------------------------------------------   Withdrawals  ----------------------------------------------------

/// Runs the payout policy over a withdrawal request.
///
/// The role tag is taken at face value and unknown tags fail open to `buyer`; a storage failure, on the other
/// hand, is a real error response.
pub async fn new_withdrawal<B: WithdrawalManagement + AuditLog>(
    body: web::Json<WithdrawalPayload>,
    api: web::Data<WithdrawalApi<B>>,
) -> Result<HttpResponse, ServerError> {
    let payload = body.into_inner();
    if payload.amount <= rust_decimal::Decimal::ZERO {
        return Err(ServerError::InvalidRequestBody("Withdrawal amount must be positive".to_string()));
    }
    let amount = Money::try_from(payload.amount).map_err(|e| ServerError::InvalidRequestBody(e.to_string()))?;
    let role = Role::from(payload.role);
    let request = NewWithdrawal::new(payload.actor_email, amount, role);
    let withdrawal = api.request_withdrawal(request, Utc::now()).await?;
    Ok(HttpResponse::Ok().json(WithdrawalResponse {
        ok: true,
        id: withdrawal.id,
        status: withdrawal.status,
        scheduled_date: withdrawal.scheduled_date,
    }))
}

// ----------------------------------------------   Auth  ----------------------------------------------------

pub async fn register<B: UserManagement + AuditLog>(
    body: web::Json<AuthPayload>,
    api: web::Data<AuthApi<B>>,
) -> Result<HttpResponse, ServerError> {
    let payload = body.into_inner();
    let user = api.register(&payload.email, &payload.password).await?;
    Ok(HttpResponse::Ok().json(RegisterResponse { ok: true, id: user.id }))
}

/// Demo login. The role comes from the identity store; the password is not checked and the token is a fixed
/// placeholder.
pub async fn login<B: UserManagement + AuditLog>(
    body: web::Json<AuthPayload>,
    api: web::Data<AuthApi<B>>,
) -> Result<HttpResponse, ServerError> {
    let payload = body.into_inner();
    let role = api.role_for_login(&payload.email).await?;
    Ok(HttpResponse::Ok().json(LoginResponse { ok: true, role, token: "demo-token".to_string() }))
}

// ----------------------------------------------   Products  ----------------------------------------------------

/// The catalogue listing. If storage is unavailable the demo presets are served instead, so the storefront always
/// has something to show.
pub async fn products<B: CatalogManagement>(api: web::Data<CatalogApi<B>>) -> Result<HttpResponse, ServerError> {
    let items = match api.fetch_products().await {
        Ok(products) => products.into_iter().map(ProductItem::from).collect::<Vec<_>>(),
        Err(e) => {
            warn!("💻️ Could not fetch the catalogue, serving the presets. {e}");
            preset_products().into_iter().map(ProductItem::from).collect()
        },
    };
    Ok(HttpResponse::Ok().json(ProductsResponse { ok: true, items }))
}

// ----------------------------------------------   Dashboard  ----------------------------------------------------

#[get("/api/metrics")]
pub async fn metrics() -> impl Responder {
    HttpResponse::Ok().json(json!({ "ok": true, "cards": report::metric_cards() }))
}

#[get("/api/sales")]
pub async fn sales() -> impl Responder {
    HttpResponse::Ok().json(json!({ "ok": true, "series": report::sales_series() }))
}

#[get("/api/logs")]
pub async fn logs() -> impl Responder {
    HttpResponse::Ok().json(json!({ "ok": true, "items": report::demo_logs() }))
}

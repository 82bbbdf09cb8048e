//! HTTP route handlers for the storefront API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /api/ping                     - Liveness ping
//!
//! # Auth
//! POST /api/auth/signup              - Create account
//! POST /api/auth/login               - Login
//! GET  /api/auth/user?userId=        - Profile lookup
//! POST /api/auth/forgot-password     - Issue reset code
//! POST /api/auth/verify-otp          - Exchange code for reset token
//! POST /api/auth/reset-password      - Set new password
//!
//! # Products
//! GET    /api/products               - Full catalog
//! POST   /api/products               - Create product (admin)
//! GET    /api/products/{id}          - Single product
//! PUT    /api/products/{id}          - Partial update (admin)
//! DELETE /api/products/{id}          - Delete (admin)
//! PUT    /api/products/{id}/stock    - Stock-only update (admin)
//!
//! # Cart
//! POST /api/cart/add                 - Add item (merge-on-add)
//! GET  /api/cart?userId=             - List items
//! POST /api/cart/remove              - Remove item
//! PUT  /api/cart/update              - Set quantity (0 removes)
//! POST /api/cart/clear               - Empty the cart
//!
//! # Orders
//! POST /api/checkout                 - Place order from cart snapshot
//! POST /api/orders                   - Low-level order create
//! GET  /api/orders?userId=           - User's orders
//! GET  /api/admin/orders             - All orders (admin)
//! PUT  /api/admin/orders/{id}        - Status/delivery update (admin)
//! ```

pub mod auth;
pub mod cart;
pub mod orders;
pub mod products;

use axum::{
    Json, Router,
    extract::State,
    routing::{get, post, put},
};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(auth::sign_up))
        .route("/login", post(auth::login))
        .route("/user", get(auth::user_info))
        .route("/forgot-password", post(auth::forgot_password))
        .route("/verify-otp", post(auth::verify_otp))
        .route("/reset-password", post(auth::reset_password))
}

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::list).post(products::create))
        .route(
            "/{id}",
            get(products::show)
                .put(products::update)
                .delete(products::remove),
        )
        .route("/{id}/stock", put(products::update_stock))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/remove", post(cart::remove))
        .route("/update", put(cart::update_quantity))
        .route("/clear", post(cart::clear))
}

/// Create the order routes router.
pub fn order_routes() -> Router<AppState> {
    Router::new().route("/", get(orders::list_user_orders).post(orders::create))
}

/// Create the admin routes router.
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/orders", get(orders::list_all_orders))
        .route("/orders/{id}", put(orders::update))
}

/// Create all API routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/ping", get(ping))
        .nest("/api/auth", auth_routes())
        .nest("/api/products", product_routes())
        .nest("/api/cart", cart_routes())
        .nest("/api/orders", order_routes())
        .route("/api/checkout", post(orders::checkout))
        .nest("/api/admin", admin_routes())
}

/// Liveness ping with a configurable message.
#[derive(Debug, Serialize)]
pub struct PingResponse {
    pub message: String,
}

async fn ping(State(state): State<AppState>) -> Json<PingResponse> {
    Json(PingResponse {
        message: state.config().ping_message.clone(),
    })
}

// =============================================================================
// Shared request helpers
// =============================================================================

/// Treat absent and blank strings the same way the form clients do.
pub(crate) fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Numeric field that may arrive as a JSON number or a numeric string.
///
/// The admin forms submit numbers as strings; both shapes coerce.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum Numberish {
    Number(f64),
    Text(String),
}

impl Numberish {
    pub(crate) fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => s.trim().parse().ok(),
        }
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub(crate) fn as_u32(&self) -> Option<u32> {
        match self {
            Self::Number(n) => {
                (n.fract() == 0.0 && *n >= 0.0 && *n <= f64::from(u32::MAX)).then(|| *n as u32)
            }
            Self::Text(s) => s.trim().parse().ok(),
        }
    }
}

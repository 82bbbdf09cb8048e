//! Checkout and order handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use dresshaus_core::{Order, OrderId, OrderItem, OrderStatus, UserId};

use crate::error::{AppError, Result};
use crate::routes::{Numberish, present};
use crate::services::{CheckoutRequest, CreateOrderRequest, OrderPatch, OrderService};
use crate::state::AppState;

// =============================================================================
// Request / Response types
// =============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutBody {
    pub user_id: Option<String>,
    pub customer_name: Option<String>,
    pub customer_email: Option<String>,
    pub items: Option<Vec<OrderItem>>,
    pub total: Option<Numberish>,
    pub idempotency_key: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderBody {
    pub user_id: Option<String>,
    pub customer_name: Option<String>,
    pub customer_email: Option<String>,
    pub items: Option<Vec<OrderItem>>,
    pub total: Option<Numberish>,
    pub estimated_delivery: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrdersQuery {
    pub user_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderUpdateBody {
    pub status: Option<String>,
    pub estimated_delivery: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutResponse {
    pub success: bool,
    pub order_id: OrderId,
    pub order: Order,
}

#[derive(Debug, Serialize)]
pub struct OrderResponse {
    pub success: bool,
    pub order: Order,
}

#[derive(Debug, Serialize)]
pub struct OrderListResponse {
    pub success: bool,
    pub orders: Vec<Order>,
}

fn parse_total(raw: &Numberish) -> Result<f64> {
    raw.as_f64()
        .ok_or_else(|| AppError::Validation("Invalid total".to_owned()))
}

fn parse_date(raw: &str) -> Result<NaiveDate> {
    raw.parse()
        .map_err(|_| AppError::Validation(format!("Invalid date: {raw}")))
}

fn parse_status(raw: &str) -> Result<OrderStatus> {
    raw.parse()
        .map_err(|_| AppError::Validation(format!("Invalid status: {raw}")))
}

// =============================================================================
// Handlers
// =============================================================================

/// POST /api/checkout
pub async fn checkout(
    State(state): State<AppState>,
    Json(body): Json<CheckoutBody>,
) -> Result<Json<CheckoutResponse>> {
    let (Some(user_id), Some(customer_name), Some(customer_email), Some(items), Some(total)) = (
        present(body.user_id),
        present(body.customer_name),
        present(body.customer_email),
        body.items,
        body.total,
    ) else {
        return Err(AppError::Validation(
            "Missing required fields: userId, customerName, customerEmail, items, total".to_owned(),
        ));
    };

    if items.is_empty() {
        return Err(AppError::Validation("Cart is empty".to_owned()));
    }

    let orders = OrderService::new(state.store());
    let order = orders.checkout(CheckoutRequest {
        user_id: UserId::new(user_id),
        customer_name,
        customer_email,
        items,
        total: parse_total(&total)?,
        idempotency_key: present(body.idempotency_key),
    })?;

    Ok(Json(CheckoutResponse {
        success: true,
        order_id: order.id.clone(),
        order,
    }))
}

/// POST /api/orders
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<CreateOrderBody>,
) -> Result<Json<OrderResponse>> {
    let (
        Some(user_id),
        Some(customer_name),
        Some(customer_email),
        Some(items),
        Some(total),
        Some(estimated_delivery),
    ) = (
        present(body.user_id),
        present(body.customer_name),
        present(body.customer_email),
        body.items,
        body.total,
        present(body.estimated_delivery),
    )
    else {
        return Err(AppError::Validation(
            "Missing required fields: userId, customerName, customerEmail, items, total, estimatedDelivery"
                .to_owned(),
        ));
    };

    let orders = OrderService::new(state.store());
    let order = orders.create(CreateOrderRequest {
        user_id: UserId::new(user_id),
        customer_name,
        customer_email,
        items,
        total: parse_total(&total)?,
        estimated_delivery: parse_date(&estimated_delivery)?,
    })?;

    Ok(Json(OrderResponse {
        success: true,
        order,
    }))
}

/// GET /api/orders?userId=
pub async fn list_user_orders(
    State(state): State<AppState>,
    Query(query): Query<OrdersQuery>,
) -> Result<Json<OrderListResponse>> {
    let Some(user_id) = present(query.user_id) else {
        return Err(AppError::Validation("userId is required".to_owned()));
    };

    let orders = OrderService::new(state.store());
    Ok(Json(OrderListResponse {
        success: true,
        orders: orders.list_for_user(&UserId::new(user_id)),
    }))
}

/// GET /api/admin/orders
pub async fn list_all_orders(State(state): State<AppState>) -> Json<OrderListResponse> {
    let orders = OrderService::new(state.store());
    Json(OrderListResponse {
        success: true,
        orders: orders.list_all(),
    })
}

/// PUT /api/admin/orders/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<OrderUpdateBody>,
) -> Result<Json<OrderResponse>> {
    let patch = OrderPatch {
        status: present(body.status)
            .map(|raw| parse_status(&raw))
            .transpose()?,
        estimated_delivery: present(body.estimated_delivery)
            .map(|raw| parse_date(&raw))
            .transpose()?,
    };

    let orders = OrderService::new(state.store());
    let order = orders.update(&OrderId::new(id), patch)?;

    Ok(Json(OrderResponse {
        success: true,
        order,
    }))
}

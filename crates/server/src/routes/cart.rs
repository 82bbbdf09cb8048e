//! Shopping cart handlers.

use axum::{
    Json,
    extract::{Query, State},
};
use serde::{Deserialize, Serialize};

use dresshaus_core::{CartItem, CartItemId, ProductId, UserId};

use crate::error::{AppError, Result};
use crate::routes::{Numberish, present};
use crate::services::{AddItem, CartService};
use crate::state::AppState;

// =============================================================================
// Request / Response types
// =============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddBody {
    pub user_id: Option<String>,
    pub dress_id: Option<String>,
    pub name: Option<String>,
    pub price: Option<Numberish>,
    pub image: Option<String>,
    pub size: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartQuery {
    pub user_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveBody {
    pub user_id: Option<String>,
    pub item_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateQuantityBody {
    pub user_id: Option<String>,
    pub item_id: Option<String>,
    pub quantity: Option<i64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClearBody {
    pub user_id: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddResponse {
    pub success: bool,
    pub message: String,
    pub cart_item: CartItem,
}

#[derive(Debug, Serialize)]
pub struct ItemsResponse {
    pub success: bool,
    pub items: Vec<CartItem>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

// =============================================================================
// Handlers
// =============================================================================

/// POST /api/cart/add
pub async fn add(
    State(state): State<AppState>,
    Json(body): Json<AddBody>,
) -> Result<Json<AddResponse>> {
    let (Some(user_id), Some(dress_id), Some(name), Some(price), Some(size)) = (
        present(body.user_id),
        present(body.dress_id),
        present(body.name),
        body.price,
        present(body.size),
    ) else {
        return Err(AppError::Validation(
            "Missing required fields: userId, dressId, name, price, size".to_owned(),
        ));
    };

    let price = price
        .as_f64()
        .ok_or_else(|| AppError::Validation("Invalid price".to_owned()))?;

    let cart = CartService::new(state.store());
    let cart_item = cart.add_item(AddItem {
        user_id: UserId::new(user_id),
        dress_id: ProductId::new(dress_id),
        name,
        price,
        image: body.image.unwrap_or_default(),
        size,
    })?;

    Ok(Json(AddResponse {
        success: true,
        message: "Item added to cart".to_owned(),
        cart_item,
    }))
}

/// GET /api/cart?userId=
pub async fn show(
    State(state): State<AppState>,
    Query(query): Query<CartQuery>,
) -> Result<Json<ItemsResponse>> {
    let Some(user_id) = present(query.user_id) else {
        return Err(AppError::Validation("userId is required".to_owned()));
    };

    let cart = CartService::new(state.store());
    Ok(Json(ItemsResponse {
        success: true,
        items: cart.items(&UserId::new(user_id)),
    }))
}

/// POST /api/cart/remove
pub async fn remove(
    State(state): State<AppState>,
    Json(body): Json<RemoveBody>,
) -> Result<Json<MessageResponse>> {
    let (Some(user_id), Some(item_id)) = (present(body.user_id), present(body.item_id)) else {
        return Err(AppError::Validation(
            "userId and itemId are required".to_owned(),
        ));
    };

    let cart = CartService::new(state.store());
    cart.remove_item(&UserId::new(user_id), &CartItemId::new(item_id))?;

    Ok(Json(MessageResponse {
        success: true,
        message: "Item removed from cart".to_owned(),
    }))
}

/// PUT /api/cart/update
pub async fn update_quantity(
    State(state): State<AppState>,
    Json(body): Json<UpdateQuantityBody>,
) -> Result<Json<MessageResponse>> {
    let (Some(user_id), Some(item_id), Some(quantity)) = (
        present(body.user_id),
        present(body.item_id),
        body.quantity,
    ) else {
        return Err(AppError::Validation(
            "userId, itemId, and quantity are required".to_owned(),
        ));
    };

    let quantity = u32::try_from(quantity)
        .map_err(|_| AppError::Validation("Quantity must be non-negative".to_owned()))?;

    let cart = CartService::new(state.store());
    cart.update_quantity(&UserId::new(user_id), &CartItemId::new(item_id), quantity)?;

    Ok(Json(MessageResponse {
        success: true,
        message: "Cart updated".to_owned(),
    }))
}

/// POST /api/cart/clear
pub async fn clear(
    State(state): State<AppState>,
    Json(body): Json<ClearBody>,
) -> Result<Json<MessageResponse>> {
    let Some(user_id) = present(body.user_id) else {
        return Err(AppError::Validation("userId is required".to_owned()));
    };

    let cart = CartService::new(state.store());
    cart.clear(&UserId::new(user_id))?;

    Ok(Json(MessageResponse {
        success: true,
        message: "Cart cleared".to_owned(),
    }))
}

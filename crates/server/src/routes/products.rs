//! Product catalog handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};

use dresshaus_core::{Category, Product, ProductId};

use crate::error::{AppError, Result};
use crate::routes::{Numberish, present};
use crate::services::{CatalogService, NewProduct, ProductPatch};
use crate::state::AppState;

// =============================================================================
// Request / Response types
// =============================================================================

/// Size list that may arrive as a single string or an array of strings.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SizeField {
    One(String),
    Many(Vec<String>),
}

impl From<SizeField> for Vec<String> {
    fn from(field: SizeField) -> Self {
        match field {
            SizeField::One(size) => vec![size],
            SizeField::Many(sizes) => sizes,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ProductBody {
    pub name: Option<String>,
    pub category: Option<String>,
    pub price: Option<Numberish>,
    pub description: Option<String>,
    pub color: Option<String>,
    pub size: Option<SizeField>,
    pub image: Option<String>,
    pub stock: Option<Numberish>,
}

#[derive(Debug, Deserialize)]
pub struct StockBody {
    pub stock: Option<Numberish>,
}

#[derive(Debug, Serialize)]
pub struct ProductListResponse {
    pub success: bool,
    pub products: Vec<Product>,
}

#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub success: bool,
    pub product: Product,
}

#[derive(Debug, Serialize)]
pub struct ProductMessageResponse {
    pub success: bool,
    pub message: String,
    pub product: Product,
}

fn parse_category(raw: &str) -> Result<Category> {
    raw.parse()
        .map_err(|_| AppError::Validation(format!("Invalid category: {raw}")))
}

fn parse_price(raw: &Numberish) -> Result<f64> {
    raw.as_f64()
        .ok_or_else(|| AppError::Validation("Invalid price".to_owned()))
}

fn parse_stock(raw: &Numberish) -> Result<u32> {
    raw.as_u32()
        .ok_or_else(|| AppError::Validation("Invalid stock".to_owned()))
}

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/products
pub async fn list(State(state): State<AppState>) -> Json<ProductListResponse> {
    let catalog = CatalogService::new(state.store());
    Json(ProductListResponse {
        success: true,
        products: catalog.list(),
    })
}

/// GET /api/products/{id}
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ProductResponse>> {
    let catalog = CatalogService::new(state.store());
    let product = catalog.get(&ProductId::new(id))?;

    Ok(Json(ProductResponse {
        success: true,
        product,
    }))
}

/// POST /api/products
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<ProductBody>,
) -> Result<Json<ProductMessageResponse>> {
    let (
        Some(name),
        Some(category),
        Some(price),
        Some(description),
        Some(color),
        Some(size),
        Some(image),
        Some(stock),
    ) = (
        present(body.name),
        present(body.category),
        body.price,
        present(body.description),
        present(body.color),
        body.size,
        present(body.image),
        body.stock,
    )
    else {
        return Err(AppError::Validation(
            "Missing required fields: name, category, price, description, color, size, image, stock"
                .to_owned(),
        ));
    };

    let catalog = CatalogService::new(state.store());
    let product = catalog.create(NewProduct {
        name,
        category: parse_category(&category)?,
        price: parse_price(&price)?,
        description,
        color,
        size: size.into(),
        image,
        stock: parse_stock(&stock)?,
    })?;

    Ok(Json(ProductMessageResponse {
        success: true,
        message: "Product created successfully".to_owned(),
        product,
    }))
}

/// PUT /api/products/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<ProductBody>,
) -> Result<Json<ProductMessageResponse>> {
    let patch = ProductPatch {
        name: present(body.name),
        category: present(body.category)
            .map(|raw| parse_category(&raw))
            .transpose()?,
        price: body.price.map(|raw| parse_price(&raw)).transpose()?,
        description: present(body.description),
        color: present(body.color),
        size: body.size.map(Vec::from),
        image: present(body.image),
        stock: body.stock.map(|raw| parse_stock(&raw)).transpose()?,
    };

    let catalog = CatalogService::new(state.store());
    let product = catalog.update(&ProductId::new(id), patch)?;

    Ok(Json(ProductMessageResponse {
        success: true,
        message: "Product updated successfully".to_owned(),
        product,
    }))
}

/// DELETE /api/products/{id}
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ProductMessageResponse>> {
    let catalog = CatalogService::new(state.store());
    let product = catalog.delete(&ProductId::new(id))?;

    Ok(Json(ProductMessageResponse {
        success: true,
        message: "Product deleted successfully".to_owned(),
        product,
    }))
}

/// PUT /api/products/{id}/stock
pub async fn update_stock(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<StockBody>,
) -> Result<Json<ProductMessageResponse>> {
    let Some(stock) = body.stock else {
        return Err(AppError::Validation("stock is required".to_owned()));
    };

    let catalog = CatalogService::new(state.store());
    let product = catalog.set_stock(&ProductId::new(id), parse_stock(&stock)?)?;

    Ok(Json(ProductMessageResponse {
        success: true,
        message: "Stock updated successfully".to_owned(),
        product,
    }))
}

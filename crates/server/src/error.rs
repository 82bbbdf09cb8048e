//! Unified error handling.
//!
//! Provides a unified `AppError` type mapping the service error taxonomy to
//! HTTP statuses and `{"error": "..."}` JSON bodies. All route handlers
//! return `Result<T, AppError>`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::services::{AuthError, CartError, CatalogError, OrderError};
use crate::store::StoreError;

/// Application-level error type for the API.
#[derive(Debug, Error)]
pub enum AppError {
    /// Missing or malformed input.
    #[error("{0}")]
    Validation(String),

    /// Authentication operation failed.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Catalog operation failed.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Cart operation failed.
    #[error("Cart error: {0}")]
    Cart(#[from] CartError),

    /// Order operation failed.
    #[error("Order error: {0}")]
    Order(#[from] OrderError),

    /// Persistence failed outside a service.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Auth(err) => match err {
                AuthError::UserAlreadyExists => StatusCode::CONFLICT,
                AuthError::InvalidCredentials
                | AuthError::InvalidOtp
                | AuthError::OtpExpired
                | AuthError::InvalidToken => StatusCode::UNAUTHORIZED,
                AuthError::UserNotFound | AuthError::EmailNotFound => StatusCode::NOT_FOUND,
                AuthError::WeakPassword => StatusCode::BAD_REQUEST,
                AuthError::PasswordHash | AuthError::Store(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
            Self::Catalog(CatalogError::NotFound)
            | Self::Cart(CartError::CartNotFound | CartError::ItemNotFound)
            | Self::Order(OrderError::NotFound) => StatusCode::NOT_FOUND,
            Self::Catalog(CatalogError::Store(_))
            | Self::Cart(CartError::Store(_))
            | Self::Order(OrderError::Store(_))
            | Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing message. Internal details are not exposed.
    fn message(&self) -> String {
        match self {
            Self::Validation(msg) => msg.clone(),
            Self::Auth(err) => match err {
                AuthError::PasswordHash | AuthError::Store(_) => {
                    "Server error. Please try again.".to_owned()
                }
                other => other.to_string(),
            },
            Self::Catalog(CatalogError::NotFound) => CatalogError::NotFound.to_string(),
            Self::Cart(err @ (CartError::CartNotFound | CartError::ItemNotFound)) => {
                err.to_string()
            }
            Self::Order(OrderError::NotFound) => OrderError::NotFound.to_string(),
            Self::Catalog(CatalogError::Store(_))
            | Self::Cart(CartError::Store(_))
            | Self::Order(OrderError::Store(_))
            | Self::Store(_) => "Server error. Please try again.".to_owned(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request error");
        }

        (status, Json(json!({ "error": self.message() }))).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

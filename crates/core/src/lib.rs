//! Dresshaus Core - Shared types library.
//!
//! This crate provides common types used across all Dresshaus components:
//! - `server` - Storefront and admin HTTP API
//! - `cli` - Command-line tools for seeding the catalog
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no file access, no HTTP.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe ids and status enums
//! - [`models`] - Persisted entity models (users, products, carts, orders)

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod models;
pub mod types;

pub use models::*;
pub use types::*;

//! Type-safe wrappers shared across the workspace.

pub mod id;
pub mod status;

pub use id::{CartItemId, OrderId, ProductId, UserId};
pub use status::{Category, OrderStatus};

//! Business services, one per collection.
//!
//! Every service borrows the [`crate::store::JsonStore`] and implements its
//! operations as load -> mutate -> save pipelines. Services never hold
//! in-memory state between calls; the collection files are the only
//! persistent state.

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod orders;

pub use auth::{AuthError, AuthService, SignUp};
pub use cart::{AddItem, CartError, CartService};
pub use catalog::{CatalogError, CatalogService, NewProduct, ProductPatch};
pub use orders::{CheckoutRequest, CreateOrderRequest, OrderError, OrderPatch, OrderService};

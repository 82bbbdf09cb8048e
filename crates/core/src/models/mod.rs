//! Persisted entity models.
//!
//! Every model serializes to the camelCase JSON shape stored in the
//! collection files and returned over the HTTP API.

pub mod cart;
pub mod order;
pub mod otp;
pub mod product;
pub mod user;

pub use cart::{CartItem, UserCart};
pub use order::{Order, OrderItem};
pub use otp::OtpRecord;
pub use product::Product;
pub use user::{User, UserProfile, UserSummary};

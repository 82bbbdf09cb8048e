//! Shopping cart models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{CartItemId, ProductId, UserId};

/// A single line in a user's cart.
///
/// Quantity is always at least 1 while the item exists; setting it to zero
/// removes the line instead of persisting a zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: CartItemId,
    pub dress_id: ProductId,
    pub name: String,
    pub price: f64,
    pub image: String,
    pub quantity: u32,
    pub size: String,
    pub added_at: DateTime<Utc>,
}

/// One user's cart, as persisted in the `carts` collection.
///
/// Created lazily on the first add; the record itself persists even after
/// the item list is cleared.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserCart {
    pub user_id: UserId,
    pub items: Vec<CartItem>,
}

impl UserCart {
    /// Empty cart for a user.
    #[must_use]
    pub fn empty(user_id: UserId) -> Self {
        Self {
            user_id,
            items: Vec::new(),
        }
    }

    /// Find a line matching a (product, size) pair, for merge-on-add.
    #[must_use]
    pub fn find_line_mut(&mut self, dress_id: &ProductId, size: &str) -> Option<&mut CartItem> {
        self.items
            .iter_mut()
            .find(|item| &item.dress_id == dress_id && item.size == size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_line_matches_product_and_size() {
        let mut cart = UserCart::empty(UserId::new("user-1"));
        cart.items.push(CartItem {
            id: CartItemId::new("cart-a"),
            dress_id: ProductId::new("p1"),
            name: "Frock".to_owned(),
            price: 20.0,
            image: String::new(),
            quantity: 1,
            size: "M".to_owned(),
            added_at: Utc::now(),
        });

        assert!(cart.find_line_mut(&ProductId::new("p1"), "M").is_some());
        assert!(cart.find_line_mut(&ProductId::new("p1"), "L").is_none());
        assert!(cart.find_line_mut(&ProductId::new("p2"), "M").is_none());
    }
}

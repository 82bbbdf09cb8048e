//! Shopping cart service.
//!
//! One cart record per user, created lazily on the first add. Adding an
//! already-present (product, size) pair increments that line's quantity
//! instead of creating a duplicate (merge-on-add); the supplied name and
//! price are ignored on merge in favor of the existing line.

use chrono::Utc;
use thiserror::Error;
use uuid::Uuid;

use dresshaus_core::{CartItem, CartItemId, ProductId, UserCart, UserId};

use crate::store::{JsonStore, StoreError};

/// Errors from cart operations.
#[derive(Debug, Error)]
pub enum CartError {
    /// The user has no cart record.
    #[error("Cart not found")]
    CartNotFound,

    /// The cart exists but the item does not.
    #[error("Item not found in cart")]
    ItemNotFound,

    /// Persistence failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Fields for adding an item to a cart.
#[derive(Debug, Clone)]
pub struct AddItem {
    pub user_id: UserId,
    pub dress_id: ProductId,
    pub name: String,
    pub price: f64,
    pub image: String,
    pub size: String,
}

/// Service for per-user cart operations.
pub struct CartService<'a> {
    store: &'a JsonStore,
}

impl<'a> CartService<'a> {
    /// Create a new cart service.
    #[must_use]
    pub const fn new(store: &'a JsonStore) -> Self {
        Self { store }
    }

    /// Add an item, merging into an existing (product, size) line if one
    /// exists. Returns the affected line.
    ///
    /// # Errors
    ///
    /// Returns `CartError::Store` if the collection cannot be saved.
    pub fn add_item(&self, request: AddItem) -> Result<CartItem, CartError> {
        let mut carts: Vec<UserCart> = self.store.load();

        let cart = match carts.iter_mut().find(|c| c.user_id == request.user_id) {
            Some(cart) => cart,
            None => {
                carts.push(UserCart::empty(request.user_id.clone()));
                // Just pushed, so the vec is non-empty
                #[allow(clippy::unwrap_used)]
                carts.last_mut().unwrap()
            }
        };

        let item = if let Some(line) = cart.find_line_mut(&request.dress_id, &request.size) {
            line.quantity += 1;
            line.clone()
        } else {
            let item = CartItem {
                id: CartItemId::new(format!("cart-{}", Uuid::new_v4())),
                dress_id: request.dress_id,
                name: request.name,
                price: request.price,
                image: request.image,
                quantity: 1,
                size: request.size,
                added_at: Utc::now(),
            };
            cart.items.push(item.clone());
            item
        };

        self.store.save(&carts)?;
        Ok(item)
    }

    /// Items in the user's cart; empty if no cart record exists.
    #[must_use]
    pub fn items(&self, user_id: &UserId) -> Vec<CartItem> {
        let carts: Vec<UserCart> = self.store.load();
        carts
            .into_iter()
            .find(|c| &c.user_id == user_id)
            .map(|c| c.items)
            .unwrap_or_default()
    }

    /// Remove an item from the cart. Removing an id that is not present is
    /// a no-op (idempotent); a missing cart record is an error.
    ///
    /// # Errors
    ///
    /// Returns `CartError::CartNotFound` if the user has no cart record.
    pub fn remove_item(&self, user_id: &UserId, item_id: &CartItemId) -> Result<(), CartError> {
        let mut carts: Vec<UserCart> = self.store.load();
        let cart = carts
            .iter_mut()
            .find(|c| &c.user_id == user_id)
            .ok_or(CartError::CartNotFound)?;

        cart.items.retain(|item| &item.id != item_id);
        self.store.save(&carts)?;

        Ok(())
    }

    /// Set a line's quantity directly. Zero removes the line; the quantity
    /// is never persisted as zero.
    ///
    /// # Errors
    ///
    /// Returns `CartError::CartNotFound` if the user has no cart record, or
    /// `CartError::ItemNotFound` if the line does not exist.
    pub fn update_quantity(
        &self,
        user_id: &UserId,
        item_id: &CartItemId,
        quantity: u32,
    ) -> Result<(), CartError> {
        let mut carts: Vec<UserCart> = self.store.load();
        let cart = carts
            .iter_mut()
            .find(|c| &c.user_id == user_id)
            .ok_or(CartError::CartNotFound)?;

        let index = cart
            .items
            .iter()
            .position(|item| &item.id == item_id)
            .ok_or(CartError::ItemNotFound)?;

        if quantity == 0 {
            cart.items.remove(index);
        } else if let Some(item) = cart.items.get_mut(index) {
            item.quantity = quantity;
        }

        self.store.save(&carts)?;
        Ok(())
    }

    /// Empty the cart's item list. The cart record itself persists.
    ///
    /// # Errors
    ///
    /// Returns `CartError::CartNotFound` if the user has no cart record.
    pub fn clear(&self, user_id: &UserId) -> Result<(), CartError> {
        let mut carts: Vec<UserCart> = self.store.load();
        let cart = carts
            .iter_mut()
            .find(|c| &c.user_id == user_id)
            .ok_or(CartError::CartNotFound)?;

        cart.items.clear();
        self.store.save(&carts)?;

        Ok(())
    }
}

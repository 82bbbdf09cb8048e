//! Product catalog model.

use serde::{Deserialize, Serialize};

use crate::types::{Category, ProductId};

/// A catalog product, as persisted in the `products` collection.
///
/// Ids follow the `p<N>` scheme where `N` is the highest existing numeric
/// suffix plus one. Deleting a product does not cascade to cart or order
/// items that reference it (soft references only).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub category: Category,
    pub name: String,
    pub price: f64,
    pub image: String,
    pub description: String,
    pub color: String,
    pub size: Vec<String>,
    pub stock: u32,
}

impl Product {
    /// Numeric suffix of the product id, if any (`p12` -> `12`).
    ///
    /// Used for assigning the next sequential id.
    #[must_use]
    pub fn id_number(&self) -> Option<u64> {
        let digits: String = self
            .id
            .as_str()
            .chars()
            .skip_while(|c| !c.is_ascii_digit())
            .take_while(char::is_ascii_digit)
            .collect();
        digits.parse().ok()
    }
}

//! Order models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::{OrderId, OrderStatus, ProductId, UserId};

/// A line item snapshotted into an order at checkout.
///
/// Copied by value from the cart item; later product edits or deletes never
/// change it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: String,
    pub dress_id: ProductId,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
    pub size: String,
    pub image: String,
}

/// A placed order, as persisted in the `orders` collection.
///
/// Orders are created at checkout and never deleted. `item_count` is only
/// present on orders created through the checkout path; the lower-level
/// create path omits it. `idempotency_key` is present when the checkout
/// caller supplied one to guard against duplicate submissions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    pub customer_name: String,
    pub customer_email: String,
    pub date: NaiveDate,
    pub status: OrderStatus,
    pub items: Vec<OrderItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_count: Option<usize>,
    pub total: f64,
    pub estimated_delivery: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub idempotency_key: Option<String>,
}

impl Order {
    /// Numeric suffix of the order id, if any (`ORD-007` -> `7`).
    #[must_use]
    pub fn id_number(&self) -> Option<u64> {
        self.id.as_str().strip_prefix("ORD-")?.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_number() {
        let order = sample_order("ORD-007");
        assert_eq!(order.id_number(), Some(7));

        let order = sample_order("legacy-1");
        assert_eq!(order.id_number(), None);
    }

    #[test]
    fn test_optional_fields_skipped_when_absent() {
        let mut order = sample_order("ORD-001");
        order.item_count = None;
        order.idempotency_key = None;

        let json = serde_json::to_value(&order).unwrap();
        assert!(json.get("itemCount").is_none());
        assert!(json.get("idempotencyKey").is_none());
        assert_eq!(json["estimatedDelivery"], "2025-03-07");
    }

    fn sample_order(id: &str) -> Order {
        Order {
            id: OrderId::new(id),
            user_id: UserId::new("user-1"),
            customer_name: "Asha".to_owned(),
            customer_email: "asha@example.com".to_owned(),
            date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            status: OrderStatus::Pending,
            items: vec![],
            item_count: Some(0),
            total: 0.0,
            estimated_delivery: NaiveDate::from_ymd_opt(2025, 3, 7).unwrap(),
            idempotency_key: None,
        }
    }
}

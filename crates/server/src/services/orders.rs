//! Order and checkout service.
//!
//! Checkout converts a cart snapshot into an immutable order record. The
//! cart is NOT cleared here: the caller invokes the cart-clear operation
//! after the order persists, so a failure between the two calls leaves both
//! records (at-least-once, not transactional). Callers that may retry can
//! supply an idempotency key; checkout returns the already-created order
//! instead of a duplicate when the key matches.

use chrono::{Duration, NaiveDate, Utc};
use thiserror::Error;

use dresshaus_core::{Order, OrderId, OrderItem, OrderStatus, UserId};

use crate::store::{JsonStore, StoreError};

/// Days from checkout to the estimated delivery date.
const DELIVERY_WINDOW_DAYS: i64 = 6;

/// Errors from order operations.
#[derive(Debug, Error)]
pub enum OrderError {
    /// No order with the requested id.
    #[error("Order not found")]
    NotFound,

    /// Persistence failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Fields for the checkout path.
#[derive(Debug, Clone)]
pub struct CheckoutRequest {
    pub user_id: UserId,
    pub customer_name: String,
    pub customer_email: String,
    pub items: Vec<OrderItem>,
    pub total: f64,
    pub idempotency_key: Option<String>,
}

/// Fields for the lower-level create path. The caller supplies the
/// estimated delivery date and no item count is recorded.
#[derive(Debug, Clone)]
pub struct CreateOrderRequest {
    pub user_id: UserId,
    pub customer_name: String,
    pub customer_email: String,
    pub items: Vec<OrderItem>,
    pub total: f64,
    pub estimated_delivery: NaiveDate,
}

/// Partial admin update; either field may be supplied independently.
#[derive(Debug, Clone, Default)]
pub struct OrderPatch {
    pub status: Option<OrderStatus>,
    pub estimated_delivery: Option<NaiveDate>,
}

/// Service for order operations.
pub struct OrderService<'a> {
    store: &'a JsonStore,
}

impl<'a> OrderService<'a> {
    /// Create a new order service.
    #[must_use]
    pub const fn new(store: &'a JsonStore) -> Self {
        Self { store }
    }

    /// Place an order from a cart snapshot.
    ///
    /// The items are embedded by value and frozen; later product edits or
    /// deletes do not change them. Estimated delivery is six days out.
    ///
    /// # Errors
    ///
    /// Returns `OrderError::Store` if the collection cannot be saved.
    pub fn checkout(&self, request: CheckoutRequest) -> Result<Order, OrderError> {
        let mut orders: Vec<Order> = self.store.load();

        if let Some(key) = &request.idempotency_key
            && let Some(existing) = orders
                .iter()
                .find(|o| o.idempotency_key.as_deref() == Some(key.as_str()))
        {
            tracing::info!(order_id = %existing.id, "checkout replay matched idempotency key");
            return Ok(existing.clone());
        }

        let today = Utc::now().date_naive();
        let order = Order {
            id: next_order_id(&orders),
            user_id: request.user_id,
            customer_name: request.customer_name,
            customer_email: request.customer_email,
            date: today,
            status: OrderStatus::Pending,
            item_count: Some(request.items.len()),
            items: request.items,
            total: request.total,
            estimated_delivery: today + Duration::days(DELIVERY_WINDOW_DAYS),
            idempotency_key: request.idempotency_key,
        };

        orders.push(order.clone());
        self.store.save(&orders)?;

        tracing::info!(order_id = %order.id, user_id = %order.user_id, "order placed");
        Ok(order)
    }

    /// Create an order directly (secondary creation path).
    ///
    /// # Errors
    ///
    /// Returns `OrderError::Store` if the collection cannot be saved.
    pub fn create(&self, request: CreateOrderRequest) -> Result<Order, OrderError> {
        let mut orders: Vec<Order> = self.store.load();

        let order = Order {
            id: next_order_id(&orders),
            user_id: request.user_id,
            customer_name: request.customer_name,
            customer_email: request.customer_email,
            date: Utc::now().date_naive(),
            status: OrderStatus::Pending,
            items: request.items,
            item_count: None,
            total: request.total,
            estimated_delivery: request.estimated_delivery,
            idempotency_key: None,
        };

        orders.push(order.clone());
        self.store.save(&orders)?;

        Ok(order)
    }

    /// Orders placed by one user.
    #[must_use]
    pub fn list_for_user(&self, user_id: &UserId) -> Vec<Order> {
        let orders: Vec<Order> = self.store.load();
        orders.into_iter().filter(|o| &o.user_id == user_id).collect()
    }

    /// All orders, unscoped (admin).
    #[must_use]
    pub fn list_all(&self) -> Vec<Order> {
        self.store.load()
    }

    /// Apply a partial admin update.
    ///
    /// Status transitions are deliberately unenforced: the admin may set
    /// any status, including moving backward.
    ///
    /// # Errors
    ///
    /// Returns `OrderError::NotFound` if no order has the id.
    pub fn update(&self, id: &OrderId, patch: OrderPatch) -> Result<Order, OrderError> {
        let mut orders: Vec<Order> = self.store.load();
        let order = orders
            .iter_mut()
            .find(|o| &o.id == id)
            .ok_or(OrderError::NotFound)?;

        if let Some(status) = patch.status {
            order.status = status;
        }
        if let Some(estimated_delivery) = patch.estimated_delivery {
            order.estimated_delivery = estimated_delivery;
        }

        let updated = order.clone();
        self.store.save(&orders)?;

        Ok(updated)
    }
}

/// Next sequential order id, zero-padded to at least three digits.
///
/// Derived from the highest existing numeric suffix rather than the
/// collection length, so the sequence stays monotonic even if records were
/// ever removed. Still racy under concurrent writers; the store is
/// deliberately last-writer-wins, acceptable at this system's write volume.
fn next_order_id(orders: &[Order]) -> OrderId {
    let max = orders.iter().filter_map(Order::id_number).max().unwrap_or(0);
    OrderId::new(format!("ORD-{:03}", max + 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use dresshaus_core::ProductId;

    fn order_item(id: &str) -> OrderItem {
        OrderItem {
            id: id.to_owned(),
            dress_id: ProductId::new("p1"),
            name: "Frock".to_owned(),
            price: 20.0,
            quantity: 2,
            size: "M".to_owned(),
            image: "/images/p1.jpg".to_owned(),
        }
    }

    fn checkout_request(items: Vec<OrderItem>) -> CheckoutRequest {
        CheckoutRequest {
            user_id: UserId::new("user-1"),
            customer_name: "Asha".to_owned(),
            customer_email: "asha@example.com".to_owned(),
            items,
            total: 40.0,
            idempotency_key: None,
        }
    }

    #[test]
    fn test_checkout_snapshots_items_and_assigns_id() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path());
        let orders = OrderService::new(&store);

        let items = vec![order_item("cart-a"), order_item("cart-b")];
        let order = orders.checkout(checkout_request(items.clone())).unwrap();

        assert_eq!(order.id.as_str(), "ORD-001");
        assert_eq!(order.items, items);
        assert_eq!(order.item_count, Some(2));
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(
            order.estimated_delivery - order.date,
            Duration::days(DELIVERY_WINDOW_DAYS)
        );
    }

    #[test]
    fn test_order_ids_increment() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path());
        let orders = OrderService::new(&store);

        orders.checkout(checkout_request(vec![order_item("a")])).unwrap();
        let second = orders.checkout(checkout_request(vec![order_item("b")])).unwrap();

        assert_eq!(second.id.as_str(), "ORD-002");
    }

    #[test]
    fn test_checkout_with_same_idempotency_key_returns_existing() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path());
        let orders = OrderService::new(&store);

        let mut request = checkout_request(vec![order_item("a")]);
        request.idempotency_key = Some("attempt-1".to_owned());

        let first = orders.checkout(request.clone()).unwrap();
        let replay = orders.checkout(request).unwrap();

        assert_eq!(replay.id, first.id);
        assert_eq!(orders.list_all().len(), 1);
    }

    #[test]
    fn test_create_omits_item_count() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path());
        let orders = OrderService::new(&store);

        let order = orders
            .create(CreateOrderRequest {
                user_id: UserId::new("user-1"),
                customer_name: "Asha".to_owned(),
                customer_email: "asha@example.com".to_owned(),
                items: vec![order_item("a")],
                total: 20.0,
                estimated_delivery: NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
            })
            .unwrap();

        assert_eq!(order.item_count, None);
        assert_eq!(order.id.as_str(), "ORD-001");
    }

    #[test]
    fn test_list_for_user_filters() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path());
        let orders = OrderService::new(&store);

        orders.checkout(checkout_request(vec![order_item("a")])).unwrap();
        let mut other = checkout_request(vec![order_item("b")]);
        other.user_id = UserId::new("user-2");
        orders.checkout(other).unwrap();

        assert_eq!(orders.list_for_user(&UserId::new("user-1")).len(), 1);
        assert_eq!(orders.list_all().len(), 2);
    }

    #[test]
    fn test_update_allows_backward_status_transition() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path());
        let orders = OrderService::new(&store);

        let order = orders.checkout(checkout_request(vec![order_item("a")])).unwrap();

        let shipped = orders
            .update(
                &order.id,
                OrderPatch {
                    status: Some(OrderStatus::Shipped),
                    ..OrderPatch::default()
                },
            )
            .unwrap();
        assert_eq!(shipped.status, OrderStatus::Shipped);

        let reverted = orders
            .update(
                &order.id,
                OrderPatch {
                    status: Some(OrderStatus::Pending),
                    ..OrderPatch::default()
                },
            )
            .unwrap();
        assert_eq!(reverted.status, OrderStatus::Pending);
    }

    #[test]
    fn test_update_either_field_independently() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path());
        let orders = OrderService::new(&store);

        let order = orders.checkout(checkout_request(vec![order_item("a")])).unwrap();
        let new_date = NaiveDate::from_ymd_opt(2025, 5, 1).unwrap();

        let updated = orders
            .update(
                &order.id,
                OrderPatch {
                    estimated_delivery: Some(new_date),
                    ..OrderPatch::default()
                },
            )
            .unwrap();

        assert_eq!(updated.estimated_delivery, new_date);
        assert_eq!(updated.status, OrderStatus::Pending);
    }

    #[test]
    fn test_update_unknown_order_fails() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path());
        let orders = OrderService::new(&store);

        let result = orders.update(&OrderId::new("ORD-999"), OrderPatch::default());
        assert!(matches!(result, Err(OrderError::NotFound)));
    }
}

//! Order records and status transitions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Order lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,
    Delivering,
    Completed,
}

impl OrderStatus {
    /// Display label for tab headers and row annotations.
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Processing",
            OrderStatus::Delivering => "Delivering",
            OrderStatus::Completed => "Completed",
        }
    }

    /// All statuses in tab order.
    pub const ALL: [OrderStatus; 3] = [OrderStatus::Pending, OrderStatus::Delivering, OrderStatus::Completed];
}

/// One line item of an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    pub quantity: i32,
}

/// Order as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub order_id: i64,
    pub total: f64,
    pub status: OrderStatus,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    pub created_time: DateTime<Utc>,
    #[serde(default)]
    pub is_delivered: bool,
}

impl Order {
    /// Sum of item quantities.
    pub fn total_quantity(&self) -> i32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Delivery can be confirmed only for completed, not-yet-delivered
    /// orders; the flag never reverts.
    pub fn can_confirm_delivery(&self) -> bool {
        self.status == OrderStatus::Completed && !self.is_delivered
    }
}

/// Orders matching the given status tab. Pure recomputation over the
/// fetched list; switching tabs never refetches.
pub fn filter_by_status(orders: &[Order], status: OrderStatus) -> Vec<&Order> {
    orders.iter().filter(|o| o.status == status).collect()
}

/// Flip `is_delivered` for exactly the order with the given id, leaving
/// every other order untouched. Returns whether a matching order was found.
pub fn mark_delivered(orders: &mut [Order], order_id: i64) -> bool {
    match orders.iter_mut().find(|o| o.order_id == order_id) {
        Some(order) => {
            order.is_delivered = true;
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(order_id: i64, status: OrderStatus, is_delivered: bool) -> Order {
        Order {
            order_id,
            total: 125_000.0,
            status,
            items: vec![OrderItem { quantity: 2 }, OrderItem { quantity: 3 }],
            created_time: Utc::now(),
            is_delivered,
        }
    }

    #[test]
    fn test_filter_by_status_partitions() {
        let orders = vec![
            sample(1, OrderStatus::Pending, false),
            sample(2, OrderStatus::Completed, false),
            sample(3, OrderStatus::Pending, false),
            sample(4, OrderStatus::Delivering, false),
        ];

        assert_eq!(filter_by_status(&orders, OrderStatus::Pending).len(), 2);
        assert_eq!(filter_by_status(&orders, OrderStatus::Delivering).len(), 1);
        assert_eq!(filter_by_status(&orders, OrderStatus::Completed).len(), 1);
    }

    #[test]
    fn test_can_confirm_delivery_only_when_completed() {
        assert!(sample(1, OrderStatus::Completed, false).can_confirm_delivery());
        assert!(!sample(2, OrderStatus::Completed, true).can_confirm_delivery());
        assert!(!sample(3, OrderStatus::Pending, false).can_confirm_delivery());
        assert!(!sample(4, OrderStatus::Delivering, false).can_confirm_delivery());
    }

    #[test]
    fn test_mark_delivered_touches_only_target() {
        let mut orders = vec![
            sample(1, OrderStatus::Completed, false),
            sample(2, OrderStatus::Completed, false),
        ];

        assert!(mark_delivered(&mut orders, 1));
        assert!(orders[0].is_delivered);
        assert!(!orders[1].is_delivered);
    }

    #[test]
    fn test_mark_delivered_unknown_id() {
        let mut orders = vec![sample(1, OrderStatus::Completed, false)];
        assert!(!mark_delivered(&mut orders, 99));
        assert!(!orders[0].is_delivered);
    }

    #[test]
    fn test_total_quantity() {
        assert_eq!(sample(1, OrderStatus::Pending, false).total_quantity(), 5);
    }

    #[test]
    fn test_deserialize_order() {
        let json = r#"{
            "orderId": 42,
            "total": 99000.5,
            "status": "Delivering",
            "items": [{"quantity": 1}],
            "createdTime": "2025-08-01T10:30:00Z"
        }"#;

        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.order_id, 42);
        assert_eq!(order.status, OrderStatus::Delivering);
        assert!(!order.is_delivered);
        assert_eq!(order.total_quantity(), 1);
    }
}

use serde::{Deserialize, Serialize};

use crate::domain::identifiers::{CustomerId, OrderId, RestaurantId, TrackingId};
use crate::domain::money::Money;
use crate::domain::restaurant::Product;

use super::errors::OrderDomainError;
use super::item::OrderItem;
use super::value_objects::{OrderStatus, StreetAddress};

// ============================================================================
// Order Aggregate - State Machine & Validation Rules
// ============================================================================
//
// Invariants enforced here:
// 1. Sum of item sub-totals equals the order total.
// 2. Every item's sub-total equals unit price x quantity.
// 3. Status moves only along the state machine; no transition is skipped.
// 4. Failure messages are non-empty only while CANCELLING or CANCELLED.
//
// An order arrives from intake in the Uninitiated state and is mutated
// exclusively through the transition methods below. Every guard violation
// is a typed error; nothing is mutated on the failure path.
//
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    customer_id: CustomerId,
    restaurant_id: RestaurantId,
    delivery_address: StreetAddress,
    price: Money,
    items: Vec<OrderItem>,
    status: OrderStatus,
    tracking_id: Option<TrackingId>,
    failure_messages: Vec<String>,
}

impl Order {
    /// Build an order as the intake process hands it over: not yet validated,
    /// no tracking identifier, no failures recorded.
    pub fn new(
        id: OrderId,
        customer_id: CustomerId,
        restaurant_id: RestaurantId,
        delivery_address: StreetAddress,
        price: Money,
        items: Vec<OrderItem>,
    ) -> Self {
        Self {
            id,
            customer_id,
            restaurant_id,
            delivery_address,
            price,
            items,
            status: OrderStatus::Uninitiated,
            tracking_id: None,
            failure_messages: Vec::new(),
        }
    }

    pub fn id(&self) -> OrderId {
        self.id
    }

    pub fn customer_id(&self) -> CustomerId {
        self.customer_id
    }

    pub fn restaurant_id(&self) -> RestaurantId {
        self.restaurant_id
    }

    pub fn delivery_address(&self) -> &StreetAddress {
        &self.delivery_address
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn tracking_id(&self) -> Option<TrackingId> {
        self.tracking_id
    }

    pub fn failure_messages(&self) -> &[String] {
        &self.failure_messages
    }

    // ------------------------------------------------------------------
    // Validation (read-only; runs before any mutation)
    // ------------------------------------------------------------------

    /// Check the internal consistency rules that gate initiation: the order
    /// must still be Uninitiated, carry at least one item with a positive
    /// quantity, every sub-total must equal unit price x quantity, the total
    /// must be positive and equal the sum of sub-totals.
    pub fn validate(&self) -> Result<(), OrderDomainError> {
        if self.status != OrderStatus::Uninitiated || self.tracking_id.is_some() {
            return Err(self.invalid_transition("initiate"));
        }
        if self.items.is_empty() {
            return Err(OrderDomainError::EmptyItems);
        }

        let mut items_total = Money::ZERO;
        for item in &self.items {
            if item.quantity() == 0 {
                return Err(OrderDomainError::InvalidQuantity {
                    product_id: item.product().id(),
                    quantity: item.quantity(),
                });
            }
            if !item.price_is_valid() {
                return Err(OrderDomainError::ItemSubTotalMismatch {
                    product_id: item.product().id(),
                    price: item.product().price(),
                    quantity: item.quantity(),
                    sub_total: item.sub_total(),
                });
            }
            items_total = items_total.add(&item.sub_total());
        }

        if !self.price.is_greater_than_zero() {
            return Err(OrderDomainError::NonPositiveTotal);
        }
        if items_total != self.price {
            return Err(OrderDomainError::TotalPriceMismatch {
                order_total: self.price,
                items_total,
            });
        }

        Ok(())
    }

    // ------------------------------------------------------------------
    // State machine transitions
    // ------------------------------------------------------------------

    /// Uninitiated -> Pending, assigning the tracking identifier.
    pub fn initialize(&mut self, tracking_id: TrackingId) -> Result<(), OrderDomainError> {
        if self.status != OrderStatus::Uninitiated {
            return Err(self.invalid_transition("initiate"));
        }
        self.status = OrderStatus::Pending;
        self.tracking_id = Some(tracking_id);
        Ok(())
    }

    /// Pending -> Paid.
    pub fn pay(&mut self) -> Result<(), OrderDomainError> {
        if self.status != OrderStatus::Pending {
            return Err(self.invalid_transition("pay"));
        }
        self.status = OrderStatus::Paid;
        Ok(())
    }

    /// Paid -> Approved.
    pub fn approve(&mut self) -> Result<(), OrderDomainError> {
        if self.status != OrderStatus::Paid {
            return Err(self.invalid_transition("approve"));
        }
        self.status = OrderStatus::Approved;
        Ok(())
    }

    /// Paid -> Cancelling, recording why the payment stage failed.
    pub fn init_cancel(
        &mut self,
        failure_messages: Vec<String>,
    ) -> Result<(), OrderDomainError> {
        if self.status != OrderStatus::Paid {
            return Err(self.invalid_transition("cancel payment"));
        }
        self.status = OrderStatus::Cancelling;
        self.update_failure_messages(failure_messages);
        Ok(())
    }

    /// Pending | Cancelling -> Cancelled, appending failure messages.
    pub fn cancel(&mut self, failure_messages: Vec<String>) -> Result<(), OrderDomainError> {
        if !matches!(self.status, OrderStatus::Pending | OrderStatus::Cancelling) {
            return Err(self.invalid_transition("cancel"));
        }
        self.status = OrderStatus::Cancelled;
        self.update_failure_messages(failure_messages);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Internal helpers
    // ------------------------------------------------------------------

    /// Replace the product snapshot on every item referencing the confirmed
    /// product. Runs after all validation has passed.
    pub(crate) fn apply_confirmed_product(&mut self, confirmed: &Product) {
        for item in &mut self.items {
            item.apply_confirmed_product(confirmed);
        }
    }

    fn update_failure_messages(&mut self, failure_messages: Vec<String>) {
        self.failure_messages.extend(
            failure_messages
                .into_iter()
                .filter(|message| !message.trim().is_empty()),
        );
    }

    fn invalid_transition(&self, action: &'static str) -> OrderDomainError {
        OrderDomainError::InvalidStateTransition {
            current: self.status,
            action,
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::identifiers::ProductId;
    use rust_decimal_macros::dec;

    fn burger() -> Product {
        Product::new(ProductId::new(), "Burger", Money::new(dec!(10.00)), true)
    }

    fn valid_order() -> Order {
        let order_id = OrderId::new();
        let items = vec![OrderItem::new(order_id, burger(), 2, Money::new(dec!(20.00)))];
        Order::new(
            order_id,
            CustomerId::new(),
            RestaurantId::new(),
            StreetAddress::new("1 Main St", "94000", "Springfield"),
            Money::new(dec!(20.00)),
            items,
        )
    }

    fn pending_order() -> Order {
        let mut order = valid_order();
        order.initialize(TrackingId::new()).unwrap();
        order
    }

    fn paid_order() -> Order {
        let mut order = pending_order();
        order.pay().unwrap();
        order
    }

    #[test]
    fn test_new_order_starts_uninitiated() {
        let order = valid_order();
        assert_eq!(order.status(), OrderStatus::Uninitiated);
        assert!(order.tracking_id().is_none());
        assert!(order.failure_messages().is_empty());
    }

    #[test]
    fn test_validate_passes_for_consistent_order() {
        assert!(valid_order().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_already_initiated_order() {
        let order = pending_order();
        let err = order.validate().unwrap_err();
        assert!(matches!(
            err,
            OrderDomainError::InvalidStateTransition {
                current: OrderStatus::Pending,
                action: "initiate",
            }
        ));
    }

    #[test]
    fn test_validate_rejects_empty_items() {
        let order = Order::new(
            OrderId::new(),
            CustomerId::new(),
            RestaurantId::new(),
            StreetAddress::new("1 Main St", "94000", "Springfield"),
            Money::new(dec!(20.00)),
            vec![],
        );
        assert!(matches!(
            order.validate().unwrap_err(),
            OrderDomainError::EmptyItems
        ));
    }

    #[test]
    fn test_validate_rejects_zero_quantity() {
        let order_id = OrderId::new();
        let items = vec![OrderItem::new(order_id, burger(), 0, Money::ZERO)];
        let order = Order::new(
            order_id,
            CustomerId::new(),
            RestaurantId::new(),
            StreetAddress::new("1 Main St", "94000", "Springfield"),
            Money::new(dec!(20.00)),
            items,
        );
        assert!(matches!(
            order.validate().unwrap_err(),
            OrderDomainError::InvalidQuantity { quantity: 0, .. }
        ));
    }

    #[test]
    fn test_validate_rejects_bad_sub_total() {
        let order_id = OrderId::new();
        // 2 x 10.00 declared as 19.00
        let items = vec![OrderItem::new(order_id, burger(), 2, Money::new(dec!(19.00)))];
        let order = Order::new(
            order_id,
            CustomerId::new(),
            RestaurantId::new(),
            StreetAddress::new("1 Main St", "94000", "Springfield"),
            Money::new(dec!(19.00)),
            items,
        );
        assert!(matches!(
            order.validate().unwrap_err(),
            OrderDomainError::ItemSubTotalMismatch { .. }
        ));
    }

    #[test]
    fn test_validate_rejects_total_mismatch() {
        let order_id = OrderId::new();
        let items = vec![OrderItem::new(order_id, burger(), 2, Money::new(dec!(20.00)))];
        let order = Order::new(
            order_id,
            CustomerId::new(),
            RestaurantId::new(),
            StreetAddress::new("1 Main St", "94000", "Springfield"),
            Money::new(dec!(25.00)),
            items,
        );
        let err = order.validate().unwrap_err();
        match err {
            OrderDomainError::TotalPriceMismatch {
                order_total,
                items_total,
            } => {
                assert_eq!(order_total, Money::new(dec!(25.00)));
                assert_eq!(items_total, Money::new(dec!(20.00)));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_initialize_moves_to_pending_and_assigns_tracking() {
        let mut order = valid_order();
        let tracking = TrackingId::new();
        order.initialize(tracking).unwrap();

        assert_eq!(order.status(), OrderStatus::Pending);
        assert_eq!(order.tracking_id(), Some(tracking));
    }

    #[test]
    fn test_initialize_twice_fails() {
        let mut order = pending_order();
        let err = order.initialize(TrackingId::new()).unwrap_err();
        assert!(matches!(
            err,
            OrderDomainError::InvalidStateTransition { .. }
        ));
        assert_eq!(order.status(), OrderStatus::Pending);
    }

    #[test]
    fn test_pay_only_from_pending() {
        let mut order = pending_order();
        order.pay().unwrap();
        assert_eq!(order.status(), OrderStatus::Paid);

        let err = order.pay().unwrap_err();
        assert!(matches!(
            err,
            OrderDomainError::InvalidStateTransition {
                current: OrderStatus::Paid,
                action: "pay",
            }
        ));
        assert_eq!(order.status(), OrderStatus::Paid);
    }

    #[test]
    fn test_approve_only_from_paid() {
        let mut order = paid_order();
        order.approve().unwrap();
        assert_eq!(order.status(), OrderStatus::Approved);

        let mut pending = pending_order();
        assert!(pending.approve().is_err());
        assert_eq!(pending.status(), OrderStatus::Pending);
    }

    #[test]
    fn test_init_cancel_only_from_paid() {
        let mut order = paid_order();
        order
            .init_cancel(vec!["payment declined".to_string()])
            .unwrap();
        assert_eq!(order.status(), OrderStatus::Cancelling);
        assert_eq!(order.failure_messages(), ["payment declined"]);

        let mut pending = pending_order();
        assert!(pending.init_cancel(vec![]).is_err());
        assert_eq!(pending.status(), OrderStatus::Pending);
    }

    #[test]
    fn test_cancel_from_pending() {
        let mut order = pending_order();
        order.cancel(vec!["restaurant closed".to_string()]).unwrap();
        assert_eq!(order.status(), OrderStatus::Cancelled);
        assert_eq!(order.failure_messages(), ["restaurant closed"]);
    }

    #[test]
    fn test_cancel_from_cancelling_appends_messages() {
        let mut order = paid_order();
        order
            .init_cancel(vec!["payment declined".to_string()])
            .unwrap();
        order
            .cancel(vec!["refund issued".to_string()])
            .unwrap();

        assert_eq!(order.status(), OrderStatus::Cancelled);
        assert_eq!(
            order.failure_messages(),
            ["payment declined", "refund issued"]
        );
    }

    #[test]
    fn test_cancel_from_paid_fails() {
        let mut order = paid_order();
        let err = order.cancel(vec![]).unwrap_err();
        assert!(matches!(
            err,
            OrderDomainError::InvalidStateTransition {
                current: OrderStatus::Paid,
                action: "cancel",
            }
        ));
        assert_eq!(order.status(), OrderStatus::Paid);
    }

    #[test]
    fn test_cancel_from_approved_fails() {
        let mut order = paid_order();
        order.approve().unwrap();
        assert!(order.cancel(vec![]).is_err());
        assert_eq!(order.status(), OrderStatus::Approved);
    }

    #[test]
    fn test_blank_failure_messages_are_dropped() {
        let mut order = paid_order();
        order
            .init_cancel(vec![
                "payment declined".to_string(),
                "".to_string(),
                "   ".to_string(),
            ])
            .unwrap();
        assert_eq!(order.failure_messages(), ["payment declined"]);
    }

    #[test]
    fn test_apply_confirmed_product_updates_matching_items_only() {
        let mut order = valid_order();
        let snapshot = order.items()[0].product().clone();
        let confirmed = snapshot.confirmed("Smash Burger", snapshot.price());

        order.apply_confirmed_product(&confirmed);
        assert_eq!(order.items()[0].product().name(), "Smash Burger");

        let unrelated = Product::new(ProductId::new(), "Pizza", Money::new(dec!(12.00)), true);
        order.apply_confirmed_product(&unrelated);
        assert_eq!(order.items()[0].product().name(), "Smash Burger");
    }

    #[test]
    fn test_order_serialization_round_trip() {
        let order = paid_order();
        let json = serde_json::to_string(&order).unwrap();
        let deserialized: Order = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.id(), order.id());
        assert_eq!(deserialized.status(), OrderStatus::Paid);
        assert_eq!(deserialized.items().len(), 1);
    }
}

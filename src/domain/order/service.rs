use crate::domain::event::{Clock, SystemClock};
use crate::domain::identifiers::TrackingId;
use crate::domain::restaurant::{Product, Restaurant};

use super::aggregate::Order;
use super::errors::OrderDomainError;
use super::events::{OrderCancelledEvent, OrderCreatedEvent, OrderPaidEvent};

// ============================================================================
// Order Domain Service
// ============================================================================
//
// Orchestration facade over the order state machine. Each public operation
// sequences one transition: validate the guards, mutate the order, log, and
// return the event for the caller to publish. Validation always completes
// before the first mutation, so a failed call leaves the order untouched.
//
// The clock is injected so event timestamps are deterministic under test
// and always UTC in production.
//
// ============================================================================

pub struct OrderDomainService<C: Clock = SystemClock> {
    clock: C,
}

impl OrderDomainService<SystemClock> {
    pub fn new() -> Self {
        Self { clock: SystemClock }
    }
}

impl Default for OrderDomainService<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> OrderDomainService<C> {
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    /// Validate the order against the restaurant, reconcile the ordered
    /// products with the catalog, and move the order to Pending with a fresh
    /// tracking identifier. Returns the Created event to publish.
    pub fn validate_and_initiate_order(
        &self,
        order: &mut Order,
        restaurant: &Restaurant,
    ) -> Result<OrderCreatedEvent, OrderDomainError> {
        Self::validate_restaurant(restaurant)?;
        let confirmed = Self::confirm_order_products(order, restaurant)?;
        order.validate()?;

        for product in &confirmed {
            order.apply_confirmed_product(product);
        }
        order.initialize(TrackingId::new())?;

        tracing::info!(order_id = %order.id(), "Order initiated");
        Ok(OrderCreatedEvent::new(order.clone(), self.clock.now()))
    }

    /// Record a successful payment. Returns the Paid event to publish.
    pub fn pay_order(&self, order: &mut Order) -> Result<OrderPaidEvent, OrderDomainError> {
        order.pay()?;
        tracing::info!(order_id = %order.id(), "Order paid");
        Ok(OrderPaidEvent::new(order.clone(), self.clock.now()))
    }

    /// Record the restaurant's approval. No event is emitted for this
    /// transition; the approval saga ends here.
    pub fn approve_order(&self, order: &mut Order) -> Result<(), OrderDomainError> {
        order.approve()?;
        tracing::info!(order_id = %order.id(), "Order approved");
        Ok(())
    }

    /// Record a payment-stage failure: the order moves to Cancelling and the
    /// Cancelled event is emitted to signal that cancellation has started.
    pub fn cancel_order_payment(
        &self,
        order: &mut Order,
        failure_messages: Vec<String>,
    ) -> Result<OrderCancelledEvent, OrderDomainError> {
        order.init_cancel(failure_messages)?;
        tracing::info!(order_id = %order.id(), "Order payment is cancelling");
        Ok(OrderCancelledEvent::new(order.clone(), self.clock.now()))
    }

    /// Complete a cancellation. No event is emitted for this transition.
    pub fn cancel_order(
        &self,
        order: &mut Order,
        failure_messages: Vec<String>,
    ) -> Result<(), OrderDomainError> {
        order.cancel(failure_messages)?;
        tracing::info!(order_id = %order.id(), "Order cancelled");
        Ok(())
    }

    fn validate_restaurant(restaurant: &Restaurant) -> Result<(), OrderDomainError> {
        if !restaurant.is_active() {
            return Err(OrderDomainError::RestaurantInactive(restaurant.id()));
        }
        Ok(())
    }

    /// Reconcile the intersection of ordered and catalog products: confirm
    /// each catalog product's current name and price, and require every
    /// order item in the intersection to carry the confirmed price. Ordered
    /// products absent from the catalog are skipped entirely; they are
    /// neither reconciled nor treated as a mismatch.
    fn confirm_order_products(
        order: &Order,
        restaurant: &Restaurant,
    ) -> Result<Vec<Product>, OrderDomainError> {
        let catalog = restaurant.catalog();
        let mut confirmed = Vec::new();

        for item in order.items() {
            let Some(catalog_product) = catalog.get(&item.product().id()) else {
                continue;
            };

            let locked =
                catalog_product.confirmed(catalog_product.name().to_string(), catalog_product.price());
            if item.product().price() != locked.price() {
                return Err(OrderDomainError::ProductPriceMismatch {
                    product_id: item.product().id(),
                    order_price: item.product().price(),
                    catalog_price: locked.price(),
                });
            }
            confirmed.push(locked);
        }

        Ok(confirmed)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

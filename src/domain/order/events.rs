use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::event::DomainEvent;

use super::aggregate::Order;

// ============================================================================
// Order Events - Domain Events for the Order Aggregate
// ============================================================================
//
// Each event is an immutable snapshot of the order at emission time plus a
// UTC timestamp. Only three transitions emit events: initiation, payment
// and the start of payment cancellation. Approval and final cancellation
// are silent by design of the surrounding sagas.
//
// ============================================================================

/// Order Event - union type for all order events
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum OrderEvent {
    Created(OrderCreatedEvent),
    Paid(OrderPaidEvent),
    Cancelled(OrderCancelledEvent),
}

impl DomainEvent for OrderEvent {
    fn event_type(&self) -> &'static str {
        match self {
            OrderEvent::Created(e) => e.event_type(),
            OrderEvent::Paid(e) => e.event_type(),
            OrderEvent::Cancelled(e) => e.event_type(),
        }
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            OrderEvent::Created(e) => e.occurred_at(),
            OrderEvent::Paid(e) => e.occurred_at(),
            OrderEvent::Cancelled(e) => e.occurred_at(),
        }
    }
}

/// Order validated and initiated; the order is now Pending.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreatedEvent {
    order: Order,
    created_at: DateTime<Utc>,
}

impl OrderCreatedEvent {
    pub fn new(order: Order, created_at: DateTime<Utc>) -> Self {
        Self { order, created_at }
    }

    pub fn order(&self) -> &Order {
        &self.order
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl DomainEvent for OrderCreatedEvent {
    fn event_type(&self) -> &'static str {
        "OrderCreated"
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Payment recorded; the order is now Paid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderPaidEvent {
    order: Order,
    paid_at: DateTime<Utc>,
}

impl OrderPaidEvent {
    pub fn new(order: Order, paid_at: DateTime<Utc>) -> Self {
        Self { order, paid_at }
    }

    pub fn order(&self) -> &Order {
        &self.order
    }

    pub fn paid_at(&self) -> DateTime<Utc> {
        self.paid_at
    }
}

impl DomainEvent for OrderPaidEvent {
    fn event_type(&self) -> &'static str {
        "OrderPaid"
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        self.paid_at
    }
}

/// Cancellation started. Emitted while the order is still Cancelling; the
/// event signals "cancellation has begun", not that it has completed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCancelledEvent {
    order: Order,
    cancelled_at: DateTime<Utc>,
}

impl OrderCancelledEvent {
    pub fn new(order: Order, cancelled_at: DateTime<Utc>) -> Self {
        Self {
            order,
            cancelled_at,
        }
    }

    pub fn order(&self) -> &Order {
        &self.order
    }

    pub fn cancelled_at(&self) -> DateTime<Utc> {
        self.cancelled_at
    }
}

impl DomainEvent for OrderCancelledEvent {
    fn event_type(&self) -> &'static str {
        "OrderCancelled"
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        self.cancelled_at
    }
}

impl From<OrderCreatedEvent> for OrderEvent {
    fn from(event: OrderCreatedEvent) -> Self {
        OrderEvent::Created(event)
    }
}

impl From<OrderPaidEvent> for OrderEvent {
    fn from(event: OrderPaidEvent) -> Self {
        OrderEvent::Paid(event)
    }
}

impl From<OrderCancelledEvent> for OrderEvent {
    fn from(event: OrderCancelledEvent) -> Self {
        OrderEvent::Cancelled(event)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

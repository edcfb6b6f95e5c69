// ============================================================================
// Order Domain Core - Food Order Lifecycle
// ============================================================================
//
// Library crate holding the domain layer of the order-processing service:
// the Order aggregate and its state machine, the Restaurant read-side
// aggregate with its product catalog, and the OrderDomainService that
// sequences validation, catalog reconciliation and state transitions.
//
// Persistence, message transport and API adapters live in other services;
// they hand fully-populated aggregates in and take emitted events out.
//
// ============================================================================

pub mod domain;

pub use domain::event::{Clock, DomainEvent, SystemClock};
pub use domain::identifiers::{
    CustomerId, OrderId, OrderItemId, ProductId, RestaurantId, TrackingId,
};
pub use domain::money::Money;
pub use domain::order::{
    Order, OrderCancelledEvent, OrderCreatedEvent, OrderDomainError, OrderDomainService,
    OrderEvent, OrderItem, OrderPaidEvent, OrderStatus, StreetAddress,
};
pub use domain::restaurant::{Product, Restaurant};

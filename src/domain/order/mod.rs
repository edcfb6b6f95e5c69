// ============================================================================
// Order Domain - Business Logic for the Order Aggregate
// ============================================================================
//
// This module contains ALL Order-specific code:
// - Value objects (OrderStatus, StreetAddress)
// - Line items (OrderItem)
// - Events (OrderCreatedEvent, OrderPaidEvent, OrderCancelledEvent)
// - Errors (OrderDomainError enum)
// - Aggregate (Order with the state machine and validation rules)
// - Domain service (OrderDomainService sequencing the transitions)
//
// ============================================================================

pub mod aggregate;
pub mod errors;
pub mod events;
pub mod item;
pub mod service;
pub mod value_objects;

// Re-export for convenience
pub use aggregate::*;
pub use errors::*;
pub use events::*;
pub use item::*;
pub use service::*;
pub use value_objects::*;

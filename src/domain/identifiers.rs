use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

// ============================================================================
// Value Identifiers
// ============================================================================
//
// Strongly-typed identifiers for every entity in the order domain. Each one
// wraps a single Uuid and compares equal iff the wrapped values are equal,
// so they behave as proper map/set keys. Mixing up an OrderId and a
// ProductId is a compile error instead of a runtime bug.
//
// ============================================================================

macro_rules! identifier {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(Uuid);

        impl $name {
            /// Generate a fresh, unique identifier.
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Wrap an existing value, e.g. one loaded from storage.
            pub const fn from_uuid(value: Uuid) -> Self {
                Self(value)
            }

            /// The wrapped value.
            pub const fn value(&self) -> Uuid {
                self.0
            }
        }

        impl From<Uuid> for $name {
            fn from(value: Uuid) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

identifier!(
    /// Identity of an order aggregate.
    OrderId
);
identifier!(
    /// Identity of a single line item within an order.
    OrderItemId
);
identifier!(
    /// Identity of a catalog product.
    ProductId
);
identifier!(
    /// Identity of a restaurant.
    RestaurantId
);
identifier!(
    /// Identity of the ordering customer.
    CustomerId
);
identifier!(
    /// Secondary identifier assigned once an order is validated, used for
    /// external status lookups.
    TrackingId
);

// ============================================================================
// Unit Tests
// ============================================================================

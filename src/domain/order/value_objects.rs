use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Order Value Objects
// ============================================================================

/// Position of an order in its lifecycle.
///
/// The only legal moves are:
/// `Uninitiated -> Pending -> Paid -> Approved`, with the cancellation path
/// `Pending | Cancelling -> Cancelled` and `Paid -> Cancelling`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    /// Created by intake but not yet validated against the restaurant.
    Uninitiated,
    Pending,
    Paid,
    Approved,
    Cancelling,
    Cancelled,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OrderStatus::Uninitiated => "UNINITIATED",
            OrderStatus::Pending => "PENDING",
            OrderStatus::Paid => "PAID",
            OrderStatus::Approved => "APPROVED",
            OrderStatus::Cancelling => "CANCELLING",
            OrderStatus::Cancelled => "CANCELLED",
        };
        write!(f, "{name}")
    }
}

/// Delivery address captured with the order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreetAddress {
    pub street: String,
    pub postal_code: String,
    pub city: String,
}

impl StreetAddress {
    pub fn new(
        street: impl Into<String>,
        postal_code: impl Into<String>,
        city: impl Into<String>,
    ) -> Self {
        Self {
            street: street.into(),
            postal_code: postal_code.into(),
            city: city.into(),
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

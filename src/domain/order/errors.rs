use crate::domain::identifiers::{ProductId, RestaurantId};
use crate::domain::money::Money;

use super::value_objects::OrderStatus;

// ============================================================================
// Order Business Rule Errors
// ============================================================================
//
// One variant per violated invariant. All errors are raised synchronously,
// never retried here, and propagate to the caller unmodified.
//
// ============================================================================

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OrderDomainError {
    #[error("Restaurant {0} is currently not active")]
    RestaurantInactive(RestaurantId),

    #[error(
        "Product {product_id} was ordered at {order_price} but the confirmed catalog price is {catalog_price}"
    )]
    ProductPriceMismatch {
        product_id: ProductId,
        order_price: Money,
        catalog_price: Money,
    },

    #[error(
        "Sub-total {sub_total} for product {product_id} does not equal {price} x {quantity}"
    )]
    ItemSubTotalMismatch {
        product_id: ProductId,
        price: Money,
        quantity: u32,
        sub_total: Money,
    },

    #[error("Order total {order_total} does not equal the sum of item sub-totals {items_total}")]
    TotalPriceMismatch {
        order_total: Money,
        items_total: Money,
    },

    #[error("Order total must be greater than zero")]
    NonPositiveTotal,

    #[error("Order has no items")]
    EmptyItems,

    #[error("Invalid quantity {quantity} for product {product_id}")]
    InvalidQuantity {
        product_id: ProductId,
        quantity: u32,
    },

    #[error("Order is in {current} state; cannot {action}")]
    InvalidStateTransition {
        current: OrderStatus,
        action: &'static str,
    },
}

// ============================================================================
// Unit Tests
// ============================================================================

use serde::{Deserialize, Serialize};

use crate::domain::identifiers::{OrderId, OrderItemId};
use crate::domain::money::Money;
use crate::domain::restaurant::Product;

// ============================================================================
// Order Item - Line Item Entity
// ============================================================================
//
// A line item references a snapshot of the product as it looked when the
// customer placed the order. The snapshot's name and price are overwritten
// exactly once, during catalog reconciliation at initiation; everything else
// is immutable after construction.
//
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    id: OrderItemId,
    order_id: OrderId,
    product: Product,
    quantity: u32,
    sub_total: Money,
}

impl OrderItem {
    pub fn new(order_id: OrderId, product: Product, quantity: u32, sub_total: Money) -> Self {
        Self {
            id: OrderItemId::new(),
            order_id,
            product,
            quantity,
            sub_total,
        }
    }

    pub fn id(&self) -> OrderItemId {
        self.id
    }

    pub fn order_id(&self) -> OrderId {
        self.order_id
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn sub_total(&self) -> Money {
        self.sub_total
    }

    /// Invariant: sub-total equals unit price times quantity.
    pub fn price_is_valid(&self) -> bool {
        self.product.price().is_greater_than_zero()
            && self.sub_total == self.product.price().multiply(self.quantity)
    }

    /// Overwrite the product snapshot with the catalog-confirmed values.
    /// Called once per item during reconciliation; only applies when the
    /// confirmed product is the one this item references.
    pub(crate) fn apply_confirmed_product(&mut self, confirmed: &Product) {
        if self.product.id() == confirmed.id() {
            self.product = self
                .product
                .confirmed(confirmed.name().to_string(), confirmed.price());
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

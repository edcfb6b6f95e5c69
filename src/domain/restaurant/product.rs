use serde::{Deserialize, Serialize};

use crate::domain::identifiers::ProductId;
use crate::domain::money::Money;

// ============================================================================
// Product - Catalog Entity
// ============================================================================
//
// A product is owned by a restaurant. Orders carry their own copies captured
// at order time (same identity, possibly stale name/price); reconciliation
// at initiation confirms those copies against the catalog.
//
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    price: Money,
    available: bool,
}

impl Product {
    pub fn new(id: ProductId, name: impl Into<String>, price: Money, available: bool) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            available,
        }
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    /// The confirmation step of catalog reconciliation: returns this product
    /// with the confirmed name and price locked in. The receiver is left
    /// untouched, so catalog state and any captured copies never alias.
    pub fn confirmed(&self, name: impl Into<String>, price: Money) -> Product {
        Product {
            id: self.id,
            name: name.into(),
            price,
            available: self.available,
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

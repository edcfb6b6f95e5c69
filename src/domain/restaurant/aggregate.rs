use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::identifiers::{ProductId, RestaurantId};

use super::product::Product;

// ============================================================================
// Restaurant Aggregate - Read Side
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Restaurant {
    id: RestaurantId,
    active: bool,
    products: Vec<Product>,
}

impl Restaurant {
    /// Build a restaurant view. Products are unique by identity; a later
    /// entry with the same id replaces an earlier one.
    pub fn new(id: RestaurantId, active: bool, products: Vec<Product>) -> Self {
        let mut unique: Vec<Product> = Vec::with_capacity(products.len());
        for product in products {
            if let Some(existing) = unique.iter_mut().find(|p| p.id() == product.id()) {
                *existing = product;
            } else {
                unique.push(product);
            }
        }
        Self {
            id,
            active,
            products: unique,
        }
    }

    pub fn id(&self) -> RestaurantId {
        self.id
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Catalog lookup keyed by product identity.
    pub fn catalog(&self) -> HashMap<ProductId, &Product> {
        self.products.iter().map(|p| (p.id(), p)).collect()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Money Value Object
// ============================================================================
//
// All prices and totals in the order domain go through this type. Arithmetic
// results are rounded to two decimal places with banker's rounding so that
// repeated additions of item sub-totals stay comparable to a declared order
// total regardless of the scale the amounts were entered with.
//
// ============================================================================

/// A monetary amount. Equality is by numeric value, independent of scale
/// (`20` == `20.00`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }

    pub fn is_greater_than_zero(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    pub fn is_greater_than(&self, other: &Money) -> bool {
        self.0 > other.0
    }

    pub fn add(&self, other: &Money) -> Money {
        Money(Self::scaled(self.0 + other.0))
    }

    pub fn subtract(&self, other: &Money) -> Money {
        Money(Self::scaled(self.0 - other.0))
    }

    /// Price of `quantity` units at this unit price.
    pub fn multiply(&self, quantity: u32) -> Money {
        Money(Self::scaled(self.0 * Decimal::from(quantity)))
    }

    fn scaled(amount: Decimal) -> Decimal {
        amount.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

// ============================================================================
// Restaurant Domain - Read-Side Aggregate
// ============================================================================
//
// The restaurant is read-only from the order core's perspective: it supplies
// the active flag and the authoritative product catalog that orders are
// validated against at initiation time.
//
// ============================================================================

pub mod aggregate;
pub mod product;

// Re-export for convenience
pub use aggregate::*;
pub use product::*;

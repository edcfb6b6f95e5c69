// ============================================================================
// Domain Layer - Business Logic
// ============================================================================
//
// This module contains the domain aggregates and shared building blocks:
// - Value identifiers (typed Uuid wrappers)
// - Money value object
// - Domain event contract and clock capability
// - Restaurant aggregate (read side) with its product catalog
// - Order aggregate with state machine, events, errors and domain service
//
// This layer is completely separate from persistence and transport.
//
// ============================================================================

pub mod event;
pub mod identifiers;
pub mod money;
pub mod order;
pub mod restaurant;

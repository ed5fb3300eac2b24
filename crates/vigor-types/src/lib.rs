//! Shared type definitions for the Vigor resource engine.
//!
//! This crate is the single source of truth for the value types passed
//! between the game's turn controller, the decision engine in
//! `vigor-core`, and the UI layer. It holds no decision logic: the
//! classification thresholds, reserve fractions, and planning rules all
//! live in `vigor-core`, operating over the shapes defined here.
//!
//! # Modules
//!
//! - [`enums`] -- Ordered classification and priority scales
//! - [`structs`] -- The pool, cost, and operation value objects

pub mod enums;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::{
    BudgetStatus, CostPriority, HealthTier, RecommendedAction, ResourceKind, Urgency,
};
pub use structs::{ResourceCost, ResourceOperation, ResourcePool};

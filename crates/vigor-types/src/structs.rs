//! Core value structs for the Vigor resource engine.
//!
//! Covers the three data shapes from `resource-model.md` section 1: the
//! [`ResourcePool`] counter itself, the [`ResourceCost`] deduction request,
//! and the [`ResourceOperation`] prediction record. Pools are the only
//! mutable state in the engine; costs and operations are immutable value
//! objects copied freely between caller and engine.

use serde::{Deserialize, Serialize};

use crate::enums::{CostPriority, ResourceKind};

// ---------------------------------------------------------------------------
// 1.1 ResourcePool
// ---------------------------------------------------------------------------

/// One bounded counter: a current value, a maximum, and the kind tag that
/// says which counter it is.
///
/// The kind tag is set at construction and never changes; every decision
/// component filters its inputs against it, which is what lets one engine
/// serve life, creativity, and energy pools with the same code.
///
/// Invariant: `current <= max`, enforced by the constructor and every
/// mutator. A pool with `max == 0` is degenerate and always classifies
/// as dead; it never causes a division by zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourcePool {
    /// Which counter this pool represents.
    pub kind: ResourceKind,
    /// Current value, always in `[0, max]`.
    pub current: u32,
    /// Maximum value. Zero is degenerate (permanently dead).
    pub max: u32,
}

impl ResourcePool {
    /// Create a pool, clamping `current` into `[0, max]`.
    pub const fn new(kind: ResourceKind, current: u32, max: u32) -> Self {
        let current = if current > max { max } else { current };
        Self { kind, current, max }
    }

    /// Create a pool filled to its maximum.
    pub const fn full(kind: ResourceKind, max: u32) -> Self {
        Self {
            kind,
            current: max,
            max,
        }
    }

    /// Fullness as a fraction of the maximum, recomputed on every read.
    ///
    /// Returns `0.0` for a degenerate pool (`max == 0`).
    pub fn percentage(&self) -> f64 {
        if self.max == 0 {
            return 0.0;
        }
        f64::from(self.current) / f64::from(self.max)
    }

    /// Whether the pool is empty.
    pub const fn is_depleted(&self) -> bool {
        self.current == 0
    }

    /// Whether the pool is at its maximum. A degenerate pool is both
    /// depleted and full.
    pub const fn is_full(&self) -> bool {
        self.current == self.max
    }

    /// How much is missing from the maximum.
    pub const fn missing(&self) -> u32 {
        self.max.saturating_sub(self.current)
    }

    /// Add to the pool, clamped to the maximum.
    pub const fn gain(&mut self, amount: u32) {
        let raised = self.current.saturating_add(amount);
        self.current = if raised > self.max { self.max } else { raised };
    }

    /// Remove from the pool, saturating at zero.
    pub const fn deplete(&mut self, amount: u32) {
        self.current = self.current.saturating_sub(amount);
    }

    /// The owner's direct modify-by-delta call: apply a signed adjustment,
    /// clamped into `[0, max]`.
    pub fn apply_delta(&mut self, delta: i64) {
        let projected = i64::from(self.current).saturating_add(delta);
        let clamped = projected.clamp(0, i64::from(self.max));
        // Clamped into [0, max], so the conversion cannot fail.
        self.current = u32::try_from(clamped).unwrap_or(self.max);
    }

    /// Restore the pool to its maximum.
    pub const fn refill(&mut self) {
        self.current = self.max;
    }
}

// ---------------------------------------------------------------------------
// 1.2 ResourceCost
// ---------------------------------------------------------------------------

/// A named deduction request: pay `amount` from a pool of `kind`.
///
/// Immutable value object. Many costs may name the same kind; the
/// spending planner sums and partitions them per pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceCost {
    /// Which counter the cost draws from.
    pub kind: ResourceKind,
    /// How much it draws. Never negative.
    pub amount: u32,
    /// How urgently it wants to be paid.
    pub priority: CostPriority,
}

impl ResourceCost {
    /// Create a cost.
    pub const fn new(kind: ResourceKind, amount: u32, priority: CostPriority) -> Self {
        Self {
            kind,
            amount,
            priority,
        }
    }
}

// ---------------------------------------------------------------------------
// 1.3 ResourceOperation
// ---------------------------------------------------------------------------

/// A signed, possibly-probabilistic adjustment used only for prediction.
///
/// Positive amounts are gains, negative are costs. The probability is
/// advisory metadata: the outcome predictor treats every operation as
/// certain, and callers wanting expected-value semantics pre-scale with
/// [`expected`] before predicting. The engine never samples randomness.
///
/// [`expected`]: ResourceOperation::expected
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResourceOperation {
    /// Which counter the adjustment applies to.
    pub kind: ResourceKind,
    /// Signed adjustment: positive = gain, negative = cost.
    pub amount: i64,
    /// Chance the adjustment happens, clamped to `[0, 1]` at construction.
    pub probability: f64,
}

impl ResourceOperation {
    /// Create an operation, clamping `probability` into `[0, 1]`.
    /// A non-finite probability is treated as zero.
    pub fn new(kind: ResourceKind, amount: i64, probability: f64) -> Self {
        let probability = if probability.is_finite() {
            probability.clamp(0.0, 1.0)
        } else {
            0.0
        };
        Self {
            kind,
            amount,
            probability,
        }
    }

    /// An operation that always happens.
    pub const fn certain(kind: ResourceKind, amount: i64) -> Self {
        Self {
            kind,
            amount,
            probability: 1.0,
        }
    }

    /// The amount scaled by probability, truncated toward zero.
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    // Amounts in play sit far below 2^52; advisory scaling accepts float rounding.
    pub fn expected_amount(&self) -> i64 {
        (self.amount as f64 * self.probability) as i64
    }

    /// This operation rescaled to its expected value and marked certain.
    ///
    /// The pre-scaling step for callers that want expected-value
    /// prediction out of the otherwise probability-blind predictor.
    #[must_use]
    pub fn expected(self) -> Self {
        Self {
            kind: self.kind,
            amount: self.expected_amount(),
            probability: 1.0,
        }
    }
}

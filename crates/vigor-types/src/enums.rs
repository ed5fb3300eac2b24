//! Enumeration types for the Vigor resource engine.
//!
//! The classification and priority enums defined in `resource-model.md`
//! sections 2 and 3. Every enum here derives `Ord`; several of them
//! (notably [`HealthTier`] and [`CostPriority`]) are compared as ordered
//! scales throughout the engine, so the declaration order of the variants
//! is load-bearing.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// 2.1 Resource kinds
// ---------------------------------------------------------------------------

/// Which counter a value belongs to.
///
/// Kinds are an open set: adding a variant extends the engine without
/// touching any decision logic, because every component filters or groups
/// by kind rather than matching exhaustively on gameplay meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ResourceKind {
    /// The survival counter. Reaching zero ends the run.
    Life,
    /// The action counter spent to play cards and abilities.
    Creativity,
    /// The per-turn movement and activation counter.
    Energy,
}

impl ResourceKind {
    /// Whether paying a cost from this kind must never empty it.
    ///
    /// A depletion-guarded kind (currently only [`Life`]) can only reach
    /// zero through direct damage, never through cost payment: the
    /// affordability rule for such kinds requires strictly more than the
    /// cost amount to remain on hand.
    ///
    /// [`Life`]: ResourceKind::Life
    pub const fn forbids_depletion(self) -> bool {
        matches!(self, Self::Life)
    }
}

// ---------------------------------------------------------------------------
// 2.2 Cost priority
// ---------------------------------------------------------------------------

/// How urgently a cost wants to be paid.
///
/// The derived `Ord` follows declaration order: `VeryLow < Low < Medium <
/// High < Critical`. The spending planner sorts candidates by this scale
/// and treats `High` and above as must-report when unaffordable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CostPriority {
    /// Cosmetic or freely skippable.
    VeryLow,
    /// Nice to have this turn.
    Low,
    /// The default weight for ordinary actions.
    Medium,
    /// Skipping this has tactical consequences.
    High,
    /// Skipping this loses the game or the turn.
    Critical,
}

// ---------------------------------------------------------------------------
// 2.3 Health tiers
// ---------------------------------------------------------------------------

/// Discrete classification of a resource pool's fullness.
///
/// The derived `Ord` follows declaration order: `Dead < Dying < Critical <
/// Low < Moderate < Good < Excellent`. Comparisons like "at or below
/// `Critical`" appear throughout the engine and depend on this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HealthTier {
    /// Empty, or a degenerate pool with a zero maximum.
    Dead,
    /// Above zero but below 10% of maximum.
    Dying,
    /// At or above 10% of maximum.
    Critical,
    /// At or above 25% of maximum.
    Low,
    /// At or above 50% of maximum.
    Moderate,
    /// At or above 75% of maximum.
    Good,
    /// At or above 90% of maximum.
    Excellent,
}

impl HealthTier {
    /// Stable position of this tier on the ordering, 0 (`Dead`) through
    /// 6 (`Excellent`).
    ///
    /// Signed tier distances (`projected - initial`) are computed from
    /// these ordinals, so they must never be renumbered.
    pub const fn ordinal(self) -> i32 {
        match self {
            Self::Dead => 0,
            Self::Dying => 1,
            Self::Critical => 2,
            Self::Low => 3,
            Self::Moderate => 4,
            Self::Good => 5,
            Self::Excellent => 6,
        }
    }
}

// ---------------------------------------------------------------------------
// 2.4 Urgency
// ---------------------------------------------------------------------------

/// How soon a resource wants recovery attention.
///
/// Derived from [`HealthTier`] by the health classifier; consumed by AI
/// and UI layers for ordering recovery work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Urgency {
    /// No recovery needed.
    None,
    /// Recovery is worthwhile when convenient.
    Low,
    /// Recovery should be scheduled soon.
    Medium,
    /// Recovery should preempt ordinary spending.
    High,
    /// Recovery is the only sensible move.
    Immediate,
}

// ---------------------------------------------------------------------------
// 3.1 Budget verdicts
// ---------------------------------------------------------------------------

/// Verdict on a planned expenditure against available funds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BudgetStatus {
    /// The plan fits inside the funds available after reserve.
    Balanced,
    /// Reserved for future use: the budget planner never produces this
    /// verdict today (a plan that fits is simply `Balanced`), but
    /// downstream consumers already distinguish it.
    Underbudget,
    /// The plan exceeds the funds available after reserve.
    Overbudget,
}

// ---------------------------------------------------------------------------
// 3.2 Portfolio recommendations
// ---------------------------------------------------------------------------

/// Per-resource recommendation produced by the portfolio optimizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RecommendedAction {
    /// The pool is at or below `Critical`; recover before anything else.
    RecoverImmediately,
    /// The pool is `Low` and the plan would cut into its reserve.
    RecoverBeforeSpending,
    /// The plan exceeds even the reserve-free funds.
    ReduceSpending,
    /// The pool is healthy and the plan leaves more than half its funds idle.
    ConsiderIncreaseSpending,
    /// Nothing to change.
    Maintain,
}

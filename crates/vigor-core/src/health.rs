//! Health classification for resource pools.
//!
//! Maps a pool's fullness fraction to a discrete [`HealthTier`]
//! (`resource-model.md` section 2) and derives the urgency and recovery
//! scores the UI and AI layers sort by. Classification is the one
//! function every other component of the engine leans on; it is total
//! over all inputs, including `NaN` percentages and degenerate pools.

use vigor_types::{HealthTier, ResourcePool, Urgency};

use crate::config::HealthBands;

impl HealthBands {
    /// Classify a fullness fraction against these bands.
    ///
    /// Thresholds are inclusive lower bounds evaluated top-down. Zero,
    /// negative, and non-finite inputs all classify as `Dead` (a `NaN`
    /// fails every threshold comparison).
    pub fn classify(&self, percentage: f64) -> HealthTier {
        if percentage >= self.excellent {
            HealthTier::Excellent
        } else if percentage >= self.good {
            HealthTier::Good
        } else if percentage >= self.moderate {
            HealthTier::Moderate
        } else if percentage >= self.low {
            HealthTier::Low
        } else if percentage >= self.critical {
            HealthTier::Critical
        } else if percentage > 0.0 {
            HealthTier::Dying
        } else {
            HealthTier::Dead
        }
    }

    /// Classify a pool.
    ///
    /// An empty pool is `Dead` before the percentage formula is
    /// consulted, which keeps the degenerate `0 / 0` case from
    /// misclassifying as anything else.
    pub fn classify_pool(&self, pool: &ResourcePool) -> HealthTier {
        if pool.current == 0 {
            return HealthTier::Dead;
        }
        self.classify(pool.percentage())
    }
}

/// Classify a fullness fraction against the standard bands.
///
/// Convenience for UI callers that render tier coloring and never carry
/// an [`EngineConfig`](crate::EngineConfig).
pub fn classify(percentage: f64) -> HealthTier {
    HealthBands::DEFAULT.classify(percentage)
}

/// How soon a pool at this tier wants recovery attention.
pub const fn urgency(tier: HealthTier) -> Urgency {
    match tier {
        HealthTier::Dead | HealthTier::Dying => Urgency::Immediate,
        HealthTier::Critical => Urgency::High,
        HealthTier::Low => Urgency::Medium,
        HealthTier::Moderate => Urgency::Low,
        HealthTier::Good | HealthTier::Excellent => Urgency::None,
    }
}

/// Recovery score in {0, 25, 50, 75, 100}, mirroring [`urgency`].
///
/// For sorting and logging only; decision logic compares tiers and
/// urgencies directly.
pub const fn recovery_priority(tier: HealthTier) -> u32 {
    match urgency(tier) {
        Urgency::Immediate => 100,
        Urgency::High => 75,
        Urgency::Medium => 50,
        Urgency::Low => 25,
        Urgency::None => 0,
    }
}

//! Read-only what-if simulation over a sequence of signed operations.
//!
//! Callers evaluate a hypothetical turn -- "take 5 damage, heal 3, pay
//! 2" -- before committing to any real cost application
//! (`resource-model.md` section 6). Operation amounts are summed first
//! and the result clamped once, so a temporary overshoot above the
//! maximum or below zero inside the sequence does not distort the final
//! projection. Probability on the operations is advisory and ignored;
//! callers wanting expected-value semantics pre-scale with
//! [`ResourceOperation::expected`] first.

use serde::{Deserialize, Serialize};

use vigor_types::{HealthTier, ResourceOperation, ResourcePool};

use crate::config::EngineConfig;

/// The projection produced by [`predict_outcome`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[allow(clippy::struct_excessive_bools)] // the report mirrors the flags callers branch on
pub struct ResourceOutcome {
    /// The pool's value before the hypothetical operations.
    pub initial_value: u32,
    /// The pool's value after them, clamped into `[0, max]`.
    pub projected_value: u32,
    /// Projected fullness fraction (0 for a degenerate pool).
    pub projected_percentage: f64,
    /// Tier before.
    pub initial_health: HealthTier,
    /// Tier after.
    pub projected_health: HealthTier,
    /// Signed tier distance: projected ordinal minus initial ordinal.
    pub health_change: i32,
    /// The projected value is strictly above the initial value.
    pub is_improvement: bool,
    /// The projection moves two or more tiers in either direction.
    pub is_critical_change: bool,
    /// The projected tier is `Critical` or worse.
    pub is_risky: bool,
    /// The value moves by more than a quarter of the initial value.
    pub is_significant_change: bool,
}

/// Simulate a sequence of operations against a pool without mutating it.
///
/// Only operations matching the pool's kind participate; the rest belong
/// to other pools and are skipped.
pub fn predict_outcome(
    pool: &ResourcePool,
    config: &EngineConfig,
    operations: &[ResourceOperation],
) -> ResourceOutcome {
    let initial_value = pool.current;
    let initial_health = config.bands.classify_pool(pool);

    let mut projected = i64::from(initial_value);
    for operation in operations {
        if operation.kind == pool.kind {
            projected = projected.saturating_add(operation.amount);
        }
    }
    let projected = projected.clamp(0, i64::from(pool.max));
    // Clamped into [0, max], so the conversion cannot fail.
    let projected_value = u32::try_from(projected).unwrap_or(pool.max);

    let projected_pool = ResourcePool::new(pool.kind, projected_value, pool.max);
    let projected_percentage = projected_pool.percentage();
    let projected_health = config.bands.classify_pool(&projected_pool);

    let health_change = projected_health
        .ordinal()
        .saturating_sub(initial_health.ordinal());
    let delta = i64::from(projected_value).saturating_sub(i64::from(initial_value));

    ResourceOutcome {
        initial_value,
        projected_value,
        projected_percentage,
        initial_health,
        projected_health,
        health_change,
        is_improvement: projected_value > initial_value,
        is_critical_change: health_change.unsigned_abs() >= 2,
        is_risky: projected_health <= HealthTier::Critical,
        // |delta| > initial / 4, kept exact in integers.
        is_significant_change: u64::from(delta.unsigned_abs())
            .saturating_mul(4)
            > u64::from(initial_value),
    }
}

#[cfg(test)]
mod tests {
    use vigor_types::ResourceKind;

    use super::*;

    fn op(amount: i64) -> ResourceOperation {
        ResourceOperation::certain(ResourceKind::Life, amount)
    }

    #[test]
    fn gain_and_equal_loss_cancel_out() {
        let config = EngineConfig::default();
        let pool = ResourcePool::new(ResourceKind::Life, 10, 20);
        let outcome = predict_outcome(&pool, &config, &[op(5), op(-5)]);
        assert_eq!(outcome.projected_value, 10);
        assert!(!outcome.is_improvement);
        assert_eq!(outcome.health_change, 0);
    }

    #[test]
    fn projection_is_clamped_to_the_pool_bounds() {
        let config = EngineConfig::default();
        let pool = ResourcePool::new(ResourceKind::Life, 10, 20);
        let outcome = predict_outcome(&pool, &config, &[op(1_000)]);
        assert_eq!(outcome.projected_value, 20);
        let outcome = predict_outcome(&pool, &config, &[op(-1_000)]);
        assert_eq!(outcome.projected_value, 0);
        assert_eq!(outcome.projected_health, HealthTier::Dead);
    }

    #[test]
    fn sum_is_clamped_once_at_the_end() {
        // +100 then -100 nets to zero change, not to max-then-empty.
        let config = EngineConfig::default();
        let pool = ResourcePool::new(ResourceKind::Life, 10, 20);
        let outcome = predict_outcome(&pool, &config, &[op(100), op(-100)]);
        assert_eq!(outcome.projected_value, 10);
    }

    #[test]
    fn other_kinds_do_not_participate() {
        let config = EngineConfig::default();
        let pool = ResourcePool::new(ResourceKind::Life, 10, 20);
        let foreign = ResourceOperation::certain(ResourceKind::Energy, -10);
        let outcome = predict_outcome(&pool, &config, &[foreign]);
        assert_eq!(outcome.projected_value, 10);
    }

    #[test]
    fn probability_is_ignored_unless_prescaled() {
        let config = EngineConfig::default();
        let pool = ResourcePool::new(ResourceKind::Life, 10, 20);
        let coin_flip = ResourceOperation::new(ResourceKind::Life, -8, 0.5);
        let outcome = predict_outcome(&pool, &config, &[coin_flip]);
        assert_eq!(outcome.projected_value, 2);
        let outcome = predict_outcome(&pool, &config, &[coin_flip.expected()]);
        assert_eq!(outcome.projected_value, 6);
    }

    #[test]
    fn tier_distance_is_signed() {
        let config = EngineConfig::default();
        // 18/20 = Excellent; dropping to 9/20 = Low is -3 tiers.
        let pool = ResourcePool::new(ResourceKind::Life, 18, 20);
        let outcome = predict_outcome(&pool, &config, &[op(-9)]);
        assert_eq!(outcome.initial_health, HealthTier::Excellent);
        assert_eq!(outcome.projected_health, HealthTier::Low);
        assert_eq!(outcome.health_change, -3);
        assert!(outcome.is_critical_change);
        assert!(!outcome.is_improvement);
    }

    #[test]
    fn recovery_shows_a_positive_distance() {
        let config = EngineConfig::default();
        // 2/20 = Critical; healing to 16/20 = Good is +3 tiers.
        let pool = ResourcePool::new(ResourceKind::Life, 2, 20);
        let outcome = predict_outcome(&pool, &config, &[op(14)]);
        assert_eq!(outcome.health_change, 3);
        assert!(outcome.is_improvement);
        assert!(!outcome.is_risky);
    }

    #[test]
    fn projection_into_critical_is_risky() {
        let config = EngineConfig::default();
        let pool = ResourcePool::new(ResourceKind::Life, 10, 20);
        let outcome = predict_outcome(&pool, &config, &[op(-7)]);
        // 3/20 = 0.15: Critical.
        assert_eq!(outcome.projected_health, HealthTier::Critical);
        assert!(outcome.is_risky);
    }

    #[test]
    fn significance_uses_a_strict_quarter_threshold() {
        let config = EngineConfig::default();
        let pool = ResourcePool::new(ResourceKind::Life, 12, 40);
        // |delta| = 3 = exactly a quarter of 12: not significant.
        let outcome = predict_outcome(&pool, &config, &[op(-3)]);
        assert!(!outcome.is_significant_change);
        // |delta| = 4 crosses the quarter: significant.
        let outcome = predict_outcome(&pool, &config, &[op(-4)]);
        assert!(outcome.is_significant_change);
    }

    #[test]
    fn empty_operation_list_projects_no_change() {
        let config = EngineConfig::default();
        let pool = ResourcePool::new(ResourceKind::Life, 7, 20);
        let outcome = predict_outcome(&pool, &config, &[]);
        assert_eq!(outcome.projected_value, 7);
        assert_eq!(outcome.health_change, 0);
        assert!(!outcome.is_significant_change);
    }

    #[test]
    fn degenerate_pool_projects_dead_at_zero_percent() {
        let config = EngineConfig::default();
        let pool = ResourcePool::new(ResourceKind::Life, 0, 0);
        let outcome = predict_outcome(&pool, &config, &[op(10)]);
        assert_eq!(outcome.projected_value, 0);
        assert_eq!(outcome.projected_health, HealthTier::Dead);
        assert!(outcome.projected_percentage.abs() < 1e-12);
    }

    #[test]
    fn prediction_never_mutates_the_pool() {
        let config = EngineConfig::default();
        let pool = ResourcePool::new(ResourceKind::Life, 10, 20);
        let _ = predict_outcome(&pool, &config, &[op(-9)]);
        assert_eq!(pool.current, 10);
    }
}

//! Reserve policy: how much of a pool to hold back from spending.
//!
//! The recommended reserve is a fraction of the pool's maximum keyed to
//! its current health tier (`resource-model.md` section 3): the worse the
//! pool's state, the larger the fraction withheld. The planner and budget
//! components subtract this reserve before treating anything as
//! spendable; nothing else in the engine depends on it.

use vigor_types::{HealthTier, ResourcePool};

use crate::config::{EngineConfig, ReserveDivisors};

impl ReserveDivisors {
    /// The divisor in force at the given tier.
    pub const fn for_tier(&self, tier: HealthTier) -> u32 {
        match tier {
            HealthTier::Excellent => self.excellent,
            HealthTier::Good => self.good,
            HealthTier::Moderate => self.moderate,
            HealthTier::Low => self.low,
            HealthTier::Critical | HealthTier::Dying | HealthTier::Dead => self.endangered,
        }
    }
}

/// Recommended minimum reserve for the pool at its current health.
///
/// `max / divisor`, with the divisor keyed to the pool's tier. A zero
/// divisor (rejected by [`EngineConfig::validate`]) degrades to a zero
/// reserve rather than dividing by zero.
pub fn recommended_reserve(pool: &ResourcePool, config: &EngineConfig) -> u32 {
    let tier = config.bands.classify_pool(pool);
    let divisor = config.reserve.for_tier(tier);
    pool.max.checked_div(divisor).unwrap_or(0)
}

/// Funds available once a reserve is held back: `max(0, current - reserve)`.
pub const fn available(pool: &ResourcePool, reserve: u32) -> u32 {
    pool.current.saturating_sub(reserve)
}

#[cfg(test)]
mod tests {
    use vigor_types::ResourceKind;

    use super::*;

    #[test]
    fn reserve_fraction_tracks_tier() {
        let config = EngineConfig::default();
        // 40/40 = Excellent: reserve 40/10 = 4.
        let pool = ResourcePool::full(ResourceKind::Life, 40);
        assert_eq!(recommended_reserve(&pool, &config), 4);
        // 30/40 = 0.75 = Good: reserve 40/8 = 5.
        let pool = ResourcePool::new(ResourceKind::Life, 30, 40);
        assert_eq!(recommended_reserve(&pool, &config), 5);
        // 20/40 = Moderate: reserve 40/6 = 6.
        let pool = ResourcePool::new(ResourceKind::Life, 20, 40);
        assert_eq!(recommended_reserve(&pool, &config), 6);
        // 10/40 = 0.25 = Low: reserve 40/4 = 10.
        let pool = ResourcePool::new(ResourceKind::Life, 10, 40);
        assert_eq!(recommended_reserve(&pool, &config), 10);
        // 4/40 = 0.10 = Critical: reserve 40/3 = 13.
        let pool = ResourcePool::new(ResourceKind::Life, 4, 40);
        assert_eq!(recommended_reserve(&pool, &config), 13);
    }

    #[test]
    fn worse_health_never_shrinks_the_reserve() {
        let config = EngineConfig::default();
        let max = 40;
        let mut previous = 0;
        for current in (1..=max).rev() {
            let pool = ResourcePool::new(ResourceKind::Creativity, current, max);
            let reserve = recommended_reserve(&pool, &config);
            assert!(reserve >= previous);
            previous = reserve;
        }
    }

    #[test]
    fn available_saturates_at_zero() {
        let pool = ResourcePool::new(ResourceKind::Energy, 3, 20);
        assert_eq!(available(&pool, 10), 0);
        assert_eq!(available(&pool, 1), 2);
        assert_eq!(available(&pool, 0), 3);
    }

    #[test]
    fn degenerate_pool_reserves_nothing() {
        let config = EngineConfig::default();
        let pool = ResourcePool::new(ResourceKind::Life, 0, 0);
        assert_eq!(recommended_reserve(&pool, &config), 0);
        assert_eq!(available(&pool, 0), 0);
    }
}

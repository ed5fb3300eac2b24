//! Aggregation and recommendations across several resource pools.
//!
//! Two views (`resource-model.md` section 7): [`overall_health`] rolls a
//! set of pools up into one summary the UI can render, and
//! [`optimize_portfolio`] matches a planned batch of costs against every
//! pool and recommends what to do about each -- recover, cut spending,
//! or lean in. Both are pure folds over the input slice.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use vigor_types::{HealthTier, RecommendedAction, ResourceCost, ResourceKind, ResourcePool};

use crate::config::EngineConfig;
use crate::reserve::{available, recommended_reserve};

// ---------------------------------------------------------------------------
// Overall health
// ---------------------------------------------------------------------------

/// Roll-up of several pools' health.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverallResourceHealth {
    /// How many pools were considered.
    pub total_resources: usize,
    /// Pools at or below `Critical`.
    pub critical_resources: usize,
    /// Pools exactly at `Low`.
    pub low_resources: usize,
    /// Pools at or above `Good`.
    pub healthy_resources: usize,
    /// Mean fullness fraction across all pools (0 when empty).
    pub average_percentage: f64,
    /// The single worst pool. Equal tiers break by lower percentage,
    /// then first occurrence, so the pick is deterministic.
    pub worst_resource: Option<ResourcePool>,
    /// The single best pool, with the mirrored tie-break.
    pub best_resource: Option<ResourcePool>,
}

impl OverallResourceHealth {
    /// Whether any pool sits at or below `Critical`.
    pub const fn is_in_crisis(&self) -> bool {
        self.critical_resources > 0
    }

    /// Whether at least half the pools are `Low` or worse.
    pub fn needs_attention(&self) -> bool {
        if self.total_resources == 0 {
            return false;
        }
        let half = self.total_resources.checked_div(2).unwrap_or(0);
        self.critical_resources.saturating_add(self.low_resources) >= half
    }
}

/// Strictly-worse comparison for the worst/best picks.
fn ranks_below(tier: HealthTier, pct: f64, other_tier: HealthTier, other_pct: f64) -> bool {
    tier < other_tier || (tier == other_tier && pct < other_pct)
}

/// Summarize the health of several pools.
pub fn overall_health(pools: &[ResourcePool], config: &EngineConfig) -> OverallResourceHealth {
    let mut critical_resources = 0_usize;
    let mut low_resources = 0_usize;
    let mut healthy_resources = 0_usize;
    let mut percentage_sum = 0.0_f64;
    let mut worst: Option<(HealthTier, f64, ResourcePool)> = None;
    let mut best: Option<(HealthTier, f64, ResourcePool)> = None;

    for pool in pools {
        let tier = config.bands.classify_pool(pool);
        let pct = pool.percentage();
        percentage_sum += pct;

        if tier <= HealthTier::Critical {
            critical_resources = critical_resources.saturating_add(1);
        }
        if tier == HealthTier::Low {
            low_resources = low_resources.saturating_add(1);
        }
        if tier >= HealthTier::Good {
            healthy_resources = healthy_resources.saturating_add(1);
        }

        let replace_worst = worst.is_none_or(|(held_tier, held_pct, _)| {
            ranks_below(tier, pct, held_tier, held_pct)
        });
        if replace_worst {
            worst = Some((tier, pct, *pool));
        }

        let replace_best = best.is_none_or(|(held_tier, held_pct, _)| {
            ranks_below(held_tier, held_pct, tier, pct)
        });
        if replace_best {
            best = Some((tier, pct, *pool));
        }
    }

    #[allow(clippy::cast_precision_loss)] // portfolio sizes are tiny; the mean is presentational
    let average_percentage = if pools.is_empty() {
        0.0
    } else {
        percentage_sum / pools.len() as f64
    };

    OverallResourceHealth {
        total_resources: pools.len(),
        critical_resources,
        low_resources,
        healthy_resources,
        average_percentage,
        worst_resource: worst.map(|(_, _, pool)| pool),
        best_resource: best.map(|(_, _, pool)| pool),
    }
}

// ---------------------------------------------------------------------------
// Portfolio optimization
// ---------------------------------------------------------------------------

/// One pool's slice of the portfolio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioEntry {
    /// The pool as it stood when the portfolio was built.
    pub pool: ResourcePool,
    /// Its health tier at that moment.
    pub health: HealthTier,
    /// Total planned spending against this pool's kind.
    pub planned_spending: u32,
    /// What to do about it.
    pub action: RecommendedAction,
}

/// The aggregated view produced by [`optimize_portfolio`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourcePortfolio {
    /// Roll-up across all pools.
    pub overall: OverallResourceHealth,
    /// One entry per input pool, in input order.
    pub entries: Vec<PortfolioEntry>,
}

/// First-match-wins recommendation for one pool.
fn recommend_action(
    pool: &ResourcePool,
    config: &EngineConfig,
    tier: HealthTier,
    planned: u32,
) -> RecommendedAction {
    if tier <= HealthTier::Critical {
        return RecommendedAction::RecoverImmediately;
    }
    if tier == HealthTier::Low && planned > available(pool, recommended_reserve(pool, config)) {
        return RecommendedAction::RecoverBeforeSpending;
    }
    if available(pool, 0) < planned {
        return RecommendedAction::ReduceSpending;
    }
    if tier >= HealthTier::Good && available(pool, 0) > planned.saturating_mul(2) {
        return RecommendedAction::ConsiderIncreaseSpending;
    }
    RecommendedAction::Maintain
}

/// Match a planned batch of costs against every pool and recommend a
/// per-pool action.
///
/// Costs are grouped by kind and summed (saturating); a pool with no
/// matching costs is evaluated against a planned spend of zero.
pub fn optimize_portfolio(
    pools: &[ResourcePool],
    config: &EngineConfig,
    planned_costs: &[ResourceCost],
) -> ResourcePortfolio {
    let mut planned_by_kind: BTreeMap<ResourceKind, u32> = BTreeMap::new();
    for cost in planned_costs {
        let total = planned_by_kind.entry(cost.kind).or_insert(0);
        *total = total.saturating_add(cost.amount);
    }

    let entries: Vec<PortfolioEntry> = pools
        .iter()
        .map(|pool| {
            let planned = planned_by_kind.get(&pool.kind).copied().unwrap_or(0);
            let health = config.bands.classify_pool(pool);
            PortfolioEntry {
                pool: *pool,
                health,
                planned_spending: planned,
                action: recommend_action(pool, config, health, planned),
            }
        })
        .collect();

    tracing::debug!(
        pools = pools.len(),
        planned_kinds = planned_by_kind.len(),
        "portfolio assembled"
    );

    ResourcePortfolio {
        overall: overall_health(pools, config),
        entries,
    }
}

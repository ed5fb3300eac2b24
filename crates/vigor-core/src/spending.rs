//! Greedy spending plans over a set of candidate costs.
//!
//! Given a pool and the costs competing for it, the planner partitions
//! the candidates into what can be paid after the recommended reserve is
//! held back and what cannot (`resource-model.md` section 5). The walk is
//! deterministic greedy by priority -- not an optimal knapsack; a plan a
//! player can predict beats a plan that squeezes out one more point.

use serde::{Deserialize, Serialize};

use vigor_types::{CostPriority, ResourceCost, ResourcePool};

use crate::config::EngineConfig;
use crate::reserve::{available, recommended_reserve};

/// The partition produced by [`plan_spending`].
///
/// `affordable_costs` fit inside the available funds in greedy order;
/// the two unaffordable lists split the remainder by whether skipping
/// them matters (`High` priority and above) or not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpendingStrategy {
    /// Funds spendable after the recommended reserve was held back.
    pub available_funds: u32,
    /// The reserve that was held back.
    pub recommended_reserve: u32,
    /// Funds left over after the affordable costs.
    pub remaining_funds: u32,
    /// Costs the pool can pay now, in payment order.
    pub affordable_costs: Vec<ResourceCost>,
    /// Costs that cannot be paid and are `High` priority or above.
    pub unaffordable_high_priority: Vec<ResourceCost>,
    /// Costs that cannot be paid and rank below `High`.
    pub unaffordable_low_priority: Vec<ResourceCost>,
}

impl SpendingStrategy {
    /// Whether any unpayable cost is outright `Critical`.
    pub fn has_unaffordable_critical(&self) -> bool {
        self.unaffordable_high_priority
            .iter()
            .any(|cost| cost.priority == CostPriority::Critical)
    }
}

/// Partition candidate costs into a spending plan for one pool.
///
/// 1. Hold back the recommended reserve; the rest is available.
/// 2. Keep only costs of the pool's kind.
/// 3. Sort descending by priority, then ascending by amount -- the
///    cheaper of two equal-priority costs goes first, maximizing the
///    count of satisfied high-priority requests. The sort is stable, so
///    fully tied candidates keep their submission order.
/// 4. Walk the list greedily, accepting whatever still fits.
///
/// Pure: the pool is never mutated.
pub fn plan_spending(
    pool: &ResourcePool,
    config: &EngineConfig,
    candidates: &[ResourceCost],
) -> SpendingStrategy {
    let reserve = recommended_reserve(pool, config);
    let available_funds = available(pool, reserve);

    let mut matching: Vec<ResourceCost> = candidates
        .iter()
        .filter(|cost| cost.kind == pool.kind)
        .copied()
        .collect();
    matching.sort_by(|a, b| {
        b.priority
            .cmp(&a.priority)
            .then_with(|| a.amount.cmp(&b.amount))
    });

    let mut remaining_funds = available_funds;
    let mut affordable_costs = Vec::new();
    let mut unaffordable_high_priority = Vec::new();
    let mut unaffordable_low_priority = Vec::new();

    for cost in matching {
        if remaining_funds >= cost.amount {
            remaining_funds = remaining_funds.saturating_sub(cost.amount);
            affordable_costs.push(cost);
        } else if cost.priority >= CostPriority::High {
            unaffordable_high_priority.push(cost);
        } else {
            unaffordable_low_priority.push(cost);
        }
    }

    tracing::debug!(
        kind = ?pool.kind,
        available_funds,
        remaining_funds,
        accepted = affordable_costs.len(),
        deferred_high = unaffordable_high_priority.len(),
        deferred_low = unaffordable_low_priority.len(),
        "spending plan computed"
    );

    SpendingStrategy {
        available_funds,
        recommended_reserve: reserve,
        remaining_funds,
        affordable_costs,
        unaffordable_high_priority,
        unaffordable_low_priority,
    }
}

#[cfg(test)]
mod tests {
    use vigor_types::ResourceKind;

    use super::*;

    fn cost(amount: u32, priority: CostPriority) -> ResourceCost {
        ResourceCost::new(ResourceKind::Creativity, amount, priority)
    }

    #[test]
    fn greedy_walk_matches_worked_example() {
        // available 5 over [(3, High), (4, Critical), (2, Low)]:
        // sorted Critical(4), High(3), Low(2); afford 4, defer 3 and 2.
        let config = EngineConfig::default();
        let candidates = [
            cost(3, CostPriority::High),
            cost(4, CostPriority::Critical),
            cost(2, CostPriority::Low),
        ];
        // 7/12 is Moderate: reserve 2, available 5.
        let pool = ResourcePool::new(ResourceKind::Creativity, 7, 12);
        let plan = plan_spending(&pool, &config, &candidates);

        assert_eq!(plan.available_funds, 5);
        assert_eq!(plan.affordable_costs, vec![cost(4, CostPriority::Critical)]);
        assert_eq!(
            plan.unaffordable_high_priority,
            vec![cost(3, CostPriority::High)]
        );
        assert_eq!(plan.unaffordable_low_priority, vec![cost(2, CostPriority::Low)]);
        assert_eq!(plan.remaining_funds, 1);
        assert!(!plan.has_unaffordable_critical());
    }

    #[test]
    fn affordable_total_never_exceeds_available_funds() {
        let config = EngineConfig::default();
        let candidates = [
            cost(5, CostPriority::Medium),
            cost(1, CostPriority::VeryLow),
            cost(9, CostPriority::Critical),
            cost(2, CostPriority::Medium),
            cost(7, CostPriority::Low),
        ];
        for current in 0..=40 {
            let pool = ResourcePool::new(ResourceKind::Creativity, current, 40);
            let plan = plan_spending(&pool, &config, &candidates);
            let spent: u32 = plan.affordable_costs.iter().map(|c| c.amount).sum();
            assert!(spent <= plan.available_funds);
            assert_eq!(plan.remaining_funds, plan.available_funds.saturating_sub(spent));
        }
    }

    #[test]
    fn unaffordable_high_partition_only_holds_high_and_critical() {
        let config = EngineConfig::default();
        let candidates = [
            cost(50, CostPriority::Critical),
            cost(50, CostPriority::High),
            cost(50, CostPriority::Medium),
            cost(50, CostPriority::VeryLow),
        ];
        // 11/12 is Excellent: reserve 1, available 10.
        let pool = ResourcePool::new(ResourceKind::Creativity, 11, 12);
        let plan = plan_spending(&pool, &config, &candidates);
        assert!(plan
            .unaffordable_high_priority
            .iter()
            .all(|c| c.priority >= CostPriority::High));
        assert_eq!(plan.unaffordable_high_priority.len(), 2);
        assert_eq!(plan.unaffordable_low_priority.len(), 2);
        assert!(plan.has_unaffordable_critical());
    }

    #[test]
    fn equal_priority_prefers_cheaper_costs() {
        let config = EngineConfig::default();
        let candidates = [
            cost(8, CostPriority::High),
            cost(3, CostPriority::High),
            cost(5, CostPriority::High),
        ];
        // 10/12 is Good: reserve 1, available 9.
        let pool = ResourcePool::new(ResourceKind::Creativity, 10, 12);
        let plan = plan_spending(&pool, &config, &candidates);
        // 3 then 5 fit; 8 does not.
        assert_eq!(
            plan.affordable_costs,
            vec![cost(3, CostPriority::High), cost(5, CostPriority::High)]
        );
        assert_eq!(plan.remaining_funds, 1);
    }

    #[test]
    fn other_kinds_are_filtered_out() {
        let config = EngineConfig::default();
        let candidates = [
            ResourceCost::new(ResourceKind::Life, 1, CostPriority::Critical),
            cost(2, CostPriority::Low),
        ];
        let pool = ResourcePool::new(ResourceKind::Creativity, 7, 12);
        let plan = plan_spending(&pool, &config, &candidates);
        assert_eq!(plan.affordable_costs, vec![cost(2, CostPriority::Low)]);
        assert!(plan.unaffordable_high_priority.is_empty());
    }

    #[test]
    fn reserve_is_subtracted_before_planning() {
        let config = EngineConfig::default();
        // 9/12 = 0.75 = Good: reserve 12/8 = 1, available 8.
        let pool = ResourcePool::new(ResourceKind::Creativity, 9, 12);
        let plan = plan_spending(&pool, &config, &[cost(9, CostPriority::Critical)]);
        assert_eq!(plan.recommended_reserve, 1);
        assert_eq!(plan.available_funds, 8);
        assert!(plan.affordable_costs.is_empty());
        assert!(plan.has_unaffordable_critical());
    }

    #[test]
    fn empty_candidates_produce_an_empty_plan() {
        let config = EngineConfig::default();
        let pool = ResourcePool::new(ResourceKind::Creativity, 9, 12);
        let plan = plan_spending(&pool, &config, &[]);
        assert!(plan.affordable_costs.is_empty());
        assert_eq!(plan.remaining_funds, plan.available_funds);
    }

    #[test]
    fn planning_is_pure_and_idempotent() {
        let config = EngineConfig::default();
        let pool = ResourcePool::new(ResourceKind::Creativity, 9, 12);
        let candidates = [cost(4, CostPriority::High), cost(4, CostPriority::Low)];
        let first = plan_spending(&pool, &config, &candidates);
        let second = plan_spending(&pool, &config, &candidates);
        assert_eq!(first, second);
        assert_eq!(pool.current, 9);
    }
}

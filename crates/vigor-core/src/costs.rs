//! Affordability predicates and cost application.
//!
//! The cost model from `resource-model.md` section 4. The predicates are
//! query-safe: they answer `false` for anything that cannot or must not
//! be paid (wrong kind, insufficient funds) and never panic or error.
//! [`try_apply_cost`] is the single mutating operation in the whole
//! engine; everything else reads.
//!
//! Depletion-guarded kinds ([`ResourceKind::forbids_depletion`]) use a
//! strict affordability rule: paying a cost must leave the pool above
//! zero, so a death boundary is only ever crossed by direct damage.

use vigor_types::{ResourceCost, ResourcePool};

/// Whether the pool can cover a summed amount under its kind's rule.
const fn covers(pool: &ResourcePool, amount: u32) -> bool {
    if pool.kind.forbids_depletion() {
        pool.current > amount
    } else {
        pool.current >= amount
    }
}

/// Can the pool pay this cost in full?
///
/// A cost of a different kind is answered `false`: it belongs to another
/// pool and must be checked there.
pub fn can_afford(pool: &ResourcePool, cost: &ResourceCost) -> bool {
    if cost.kind != pool.kind {
        return false;
    }
    covers(pool, cost.amount)
}

/// Can the pool pay all of the listed costs together?
///
/// Sums the amounts of the costs matching the pool's kind (saturating)
/// and applies the single-cost rule to the sum. Non-matching costs are
/// ignored; they must be checked against their own pools, either by the
/// caller or by the portfolio optimizer.
pub fn can_afford_combined(pool: &ResourcePool, costs: &[ResourceCost]) -> bool {
    let mut total: u32 = 0;
    for cost in costs {
        if cost.kind == pool.kind {
            total = total.saturating_add(cost.amount);
        }
    }
    covers(pool, total)
}

/// Try to pay a cost, mutating the pool.
///
/// - Affordable: deduct the full amount, return `true`.
/// - Unaffordable with `allow_partial` and a non-empty pool: drain the
///   pool to exactly zero and return `false`. Partial payment is a
///   failure signal even though funds were consumed -- callers must
///   check the return value, not the resulting balance.
/// - Otherwise (including a kind mismatch): no mutation, `false`.
pub fn try_apply_cost(pool: &mut ResourcePool, cost: &ResourceCost, allow_partial: bool) -> bool {
    if cost.kind != pool.kind {
        return false;
    }
    if covers(pool, cost.amount) {
        pool.deplete(cost.amount);
        return true;
    }
    if allow_partial && pool.current > 0 {
        pool.deplete(pool.current);
    }
    false
}

//! Budget verdicts for a single planned expenditure.
//!
//! Where the spending planner juggles many candidate costs, the budget
//! planner answers one question: does this one planned spend fit inside
//! the funds left after an emergency reserve? (`resource-model.md`
//! section 5.3.)

use serde::{Deserialize, Serialize};

use vigor_types::{BudgetStatus, ResourcePool};

use crate::config::EngineConfig;
use crate::reserve::{available, recommended_reserve};

/// Verdict on one planned expenditure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceBudget {
    /// The expenditure under consideration.
    pub planned_spending: u32,
    /// The reserve held back before anything counts as spendable.
    pub emergency_reserve: u32,
    /// Funds available once the reserve is held back.
    pub available_for_spending: u32,
    /// `Balanced` when the plan fits, `Overbudget` when it does not.
    /// `Underbudget` is never produced here.
    pub status: BudgetStatus,
    /// How far the plan overshoots the available funds (0 when balanced).
    pub shortfall: u32,
    /// How much headroom the plan leaves (0 when overbudget).
    pub surplus: u32,
}

impl ResourceBudget {
    /// Whether the plan can be executed as budgeted.
    pub const fn can_execute_plan(&self) -> bool {
        matches!(self.status, BudgetStatus::Balanced)
    }
}

/// Budget a planned spend against the pool's recommended reserve.
pub fn create_budget(
    pool: &ResourcePool,
    config: &EngineConfig,
    planned_spending: u32,
) -> ResourceBudget {
    create_budget_with_reserve(pool, planned_spending, recommended_reserve(pool, config))
}

/// Budget a planned spend against an explicit emergency reserve.
pub const fn create_budget_with_reserve(
    pool: &ResourcePool,
    planned_spending: u32,
    emergency_reserve: u32,
) -> ResourceBudget {
    let available_for_spending = available(pool, emergency_reserve);
    let status = if planned_spending <= available_for_spending {
        BudgetStatus::Balanced
    } else {
        BudgetStatus::Overbudget
    };
    ResourceBudget {
        planned_spending,
        emergency_reserve,
        available_for_spending,
        status,
        shortfall: planned_spending.saturating_sub(available_for_spending),
        surplus: available_for_spending.saturating_sub(planned_spending),
    }
}

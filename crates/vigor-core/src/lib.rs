//! Decision engine for bounded game resources.
//!
//! Everything here is a pure computation over caller-supplied values: the
//! turn controller owns its [`ResourcePool`](vigor_types::ResourcePool)s,
//! and this crate answers three questions about them -- can a set of
//! pending costs be paid now, which of several competing costs should be
//! paid first, and what will a pool's health look like after a
//! hypothetical sequence of operations.
//!
//! # Architecture
//!
//! Leaf-first, each module one component:
//!
//! - [`config`] -- Tunable thresholds and reserve fractions with defaults.
//! - [`health`] -- Percentage to [`HealthTier`](vigor_types::HealthTier)
//!   classification and urgency.
//! - [`reserve`] -- Recommended minimum reserve by tier; available funds.
//! - [`costs`] -- Affordability predicates and the one mutating operation.
//! - [`spending`] -- Greedy priority partition of candidate costs.
//! - [`budget`] -- Balanced/overbudget verdict for one planned spend.
//! - [`outcome`] -- Read-only what-if simulation of signed operations.
//! - [`portfolio`] -- Multi-pool summary and per-pool recommendations.
//!
//! # Failure model
//!
//! The query API is total: invalid inputs are unrepresentable (unsigned
//! amounts, references instead of nulls), infeasibility comes back as data
//! (`Overbudget`, unaffordable partitions, `false`), and degenerate pools
//! (`max == 0`) classify as dead without ever dividing by zero. The only
//! fallible surface is [`EngineConfig::validate`], which rejects
//! misconfigured thresholds at construction time -- programmer misuse,
//! never a query-path error.
//!
//! # Usage
//!
//! ```
//! use vigor_core::{plan_spending, EngineConfig};
//! use vigor_types::{CostPriority, ResourceCost, ResourceKind, ResourcePool};
//!
//! let config = EngineConfig::default();
//! let pool = ResourcePool::new(ResourceKind::Creativity, 9, 12);
//! let candidates = [
//!     ResourceCost::new(ResourceKind::Creativity, 4, CostPriority::Critical),
//!     ResourceCost::new(ResourceKind::Creativity, 3, CostPriority::High),
//!     ResourceCost::new(ResourceKind::Creativity, 2, CostPriority::Low),
//! ];
//!
//! // 9/12 is Good health: reserve 1, leaving 8 to spend.
//! let plan = plan_spending(&pool, &config, &candidates);
//! assert_eq!(plan.available_funds, 8);
//! assert_eq!(plan.affordable_costs.len(), 2);
//! assert_eq!(plan.remaining_funds, 1);
//! assert!(!plan.has_unaffordable_critical());
//! ```

pub mod budget;
pub mod config;
pub mod costs;
pub mod health;
pub mod outcome;
pub mod portfolio;
pub mod reserve;
pub mod spending;

// Re-export primary types and entry points at crate root.
pub use budget::{create_budget, create_budget_with_reserve, ResourceBudget};
pub use config::{EngineConfig, HealthBands, ReserveDivisors};
pub use costs::{can_afford, can_afford_combined, try_apply_cost};
pub use health::{classify, recovery_priority, urgency};
pub use outcome::{predict_outcome, ResourceOutcome};
pub use portfolio::{
    optimize_portfolio, overall_health, OverallResourceHealth, PortfolioEntry, ResourcePortfolio,
};
pub use reserve::{available, recommended_reserve};
pub use spending::{plan_spending, SpendingStrategy};

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors raised when validating an [`EngineConfig`].
///
/// These are the only errors in the crate. They indicate a misconfigured
/// engine, not a failed query; every decision function is total.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A health band lies outside the open interval (0, 1).
    #[error("health band `{name}` must lie inside (0, 1), got {value}")]
    BandOutOfRange {
        /// The band's field name.
        name: &'static str,
        /// The offending value.
        value: f64,
    },

    /// The health bands are not strictly descending.
    #[error("health band `{upper}` ({upper_value}) must exceed `{lower}` ({lower_value})")]
    BandsNotDescending {
        /// The band expected to be larger.
        upper: &'static str,
        /// Its value.
        upper_value: f64,
        /// The band expected to be smaller.
        lower: &'static str,
        /// Its value.
        lower_value: f64,
    },

    /// A reserve divisor is zero.
    #[error("reserve divisor `{name}` must be nonzero")]
    ZeroDivisor {
        /// The divisor's field name.
        name: &'static str,
    },
}

//! Configuration for the decision engine.
//!
//! The tier thresholds and reserve fractions from `resource-model.md`
//! sections 2 and 3, bundled so that callers (turn controller, tests) can
//! override the defaults. Configuration is plain in-memory data -- the
//! engine does no file I/O; the host game constructs one [`EngineConfig`]
//! at startup and threads it into every decision call.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

// ---------------------------------------------------------------------------
// Health bands
// ---------------------------------------------------------------------------

/// Lower-bound fractions for the five non-terminal health tiers.
///
/// A percentage at or above a band classifies into that band's tier;
/// bands are evaluated top-down, so they must descend strictly. Anything
/// above zero but below `critical` is `Dying`; zero or below is `Dead`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HealthBands {
    /// Lower bound of `Excellent` (default: 0.90).
    pub excellent: f64,
    /// Lower bound of `Good` (default: 0.75).
    pub good: f64,
    /// Lower bound of `Moderate` (default: 0.50).
    pub moderate: f64,
    /// Lower bound of `Low` (default: 0.25).
    pub low: f64,
    /// Lower bound of `Critical` (default: 0.10).
    pub critical: f64,
}

impl HealthBands {
    /// The standard bands.
    pub const DEFAULT: Self = Self {
        excellent: 0.90,
        good: 0.75,
        moderate: 0.50,
        low: 0.25,
        critical: 0.10,
    };

    /// Check that every band lies inside (0, 1) and that the bands
    /// descend strictly.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let named = [
            ("excellent", self.excellent),
            ("good", self.good),
            ("moderate", self.moderate),
            ("low", self.low),
            ("critical", self.critical),
        ];
        for (name, value) in named {
            if !value.is_finite() || value <= 0.0 || value >= 1.0 {
                return Err(ConfigError::BandOutOfRange { name, value });
            }
        }
        for pair in named.windows(2) {
            if let [(upper, upper_value), (lower, lower_value)] = *pair
                && upper_value <= lower_value
            {
                return Err(ConfigError::BandsNotDescending {
                    upper,
                    upper_value,
                    lower,
                    lower_value,
                });
            }
        }
        Ok(())
    }
}

impl Default for HealthBands {
    fn default() -> Self {
        Self::DEFAULT
    }
}

// ---------------------------------------------------------------------------
// Reserve divisors
// ---------------------------------------------------------------------------

/// Per-tier divisors for the recommended reserve.
///
/// The reserve is `max / divisor`, keyed to the pool's current tier: the
/// worse the pool's state, the larger the fraction held back from any
/// spending plan. The three endangered tiers (`Critical`, `Dying`,
/// `Dead`) share one divisor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReserveDivisors {
    /// Divisor at `Excellent` (default: 10, i.e. hold back a tenth).
    pub excellent: u32,
    /// Divisor at `Good` (default: 8).
    pub good: u32,
    /// Divisor at `Moderate` (default: 6).
    pub moderate: u32,
    /// Divisor at `Low` (default: 4).
    pub low: u32,
    /// Divisor at `Critical` and below (default: 3, hold back a third).
    pub endangered: u32,
}

impl ReserveDivisors {
    /// The standard divisors.
    pub const DEFAULT: Self = Self {
        excellent: 10,
        good: 8,
        moderate: 6,
        low: 4,
        endangered: 3,
    };

    /// Check that every divisor is nonzero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let named = [
            ("excellent", self.excellent),
            ("good", self.good),
            ("moderate", self.moderate),
            ("low", self.low),
            ("endangered", self.endangered),
        ];
        for (name, value) in named {
            if value == 0 {
                return Err(ConfigError::ZeroDivisor { name });
            }
        }
        Ok(())
    }
}

impl Default for ReserveDivisors {
    fn default() -> Self {
        Self::DEFAULT
    }
}

// ---------------------------------------------------------------------------
// Engine config
// ---------------------------------------------------------------------------

/// Every tunable of the decision engine in one place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Tier classification thresholds.
    pub bands: HealthBands,
    /// Reserve fractions by tier.
    pub reserve: ReserveDivisors,
}

impl EngineConfig {
    /// Validate the whole configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.bands.validate()?;
        self.reserve.validate()
    }
}

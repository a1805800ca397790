//! Parametric duration estimation.
//!
//! # Formula
//!
//! ```text
//! days = max(1, ceil((base + per_sq_ft × square_footage) × multiplier))
//! ```
//!
//! `base` and `per_sq_ft` come from a per-task coefficient table, with a
//! default pair for untabulated tasks. The multiplier is selected by the
//! project-level complexity tier, not by the task's own complexity tag.
//!
//! `ceil` tolerates float noise: a product within `1e-9` of a whole day
//! counts as that day, so `(3.0 + 0.003 × 1000) × 1.0` gives 6 days rather
//! than 7. Anything further above the integer rounds up as usual.
//!
//! Square footage is taken as-is: zero or negative areas are the caller's
//! concern and simply hit the one-day floor.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::{Complexity, EstimationMethod};

/// Float noise tolerated before rounding up (0.003 × 1000 is not exactly 3).
const CEIL_EPSILON: f64 = 1e-9;

/// Linear duration coefficients for one task.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DurationCoefficients {
    /// Fixed days regardless of size.
    pub base: f64,
    /// Additional days per square foot.
    pub per_sq_ft: f64,
}

impl DurationCoefficients {
    /// Creates a coefficient pair.
    pub fn new(base: f64, per_sq_ft: f64) -> Self {
        Self { base, per_sq_ft }
    }

    /// Unscaled day estimate for an area.
    #[inline]
    pub fn raw_days(&self, square_footage: f64) -> f64 {
        self.base + self.per_sq_ft * square_footage
    }
}

impl Default for DurationCoefficients {
    fn default() -> Self {
        Self::new(2.0, 0.002)
    }
}

/// Duration scaling per project complexity tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComplexityMultipliers {
    /// Multiplier for [`Complexity::Low`] (default 0.8).
    pub low: f64,
    /// Multiplier for [`Complexity::Medium`] (default 1.0).
    pub medium: f64,
    /// Multiplier for [`Complexity::High`] (default 1.3).
    pub high: f64,
}

impl ComplexityMultipliers {
    /// Multiplier for a tier.
    pub fn for_tier(&self, complexity: Complexity) -> f64 {
        match complexity {
            Complexity::Low => self.low,
            Complexity::Medium => self.medium,
            Complexity::High => self.high,
        }
    }
}

impl Default for ComplexityMultipliers {
    fn default() -> Self {
        Self {
            low: 0.8,
            medium: 1.0,
            high: 1.3,
        }
    }
}

/// A duration together with how it was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationEstimate {
    /// Whole working days, at least one.
    pub days: u32,
    /// Whether tabulated or default coefficients were used.
    pub method: EstimationMethod,
}

/// Converts coefficients, area and complexity into whole days.
///
/// # Example
/// ```
/// use u_construct::estimator::{DurationCoefficients, DurationEstimator};
/// use u_construct::models::{Complexity, EstimationMethod};
///
/// let estimator = DurationEstimator::new()
///     .with_coefficients("drywall", DurationCoefficients::new(3.0, 0.005));
///
/// let est = estimator.estimate("drywall", 1000.0, Complexity::High);
/// assert_eq!(est.days, 11); // ceil((3 + 5) * 1.3)
/// assert_eq!(est.method, EstimationMethod::Parametric);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DurationEstimator {
    /// Pair used for tasks missing from `coefficients`.
    #[serde(default)]
    pub default_coefficients: DurationCoefficients,
    /// Tier multipliers.
    #[serde(default)]
    pub multipliers: ComplexityMultipliers,
    /// Per-task coefficient table.
    #[serde(default)]
    pub coefficients: BTreeMap<String, DurationCoefficients>,
}

impl DurationEstimator {
    /// Creates an estimator with default pair and multipliers, no table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a task's coefficients.
    pub fn with_coefficients(mut self, task_id: impl Into<String>, coefficients: DurationCoefficients) -> Self {
        self.coefficients.insert(task_id.into(), coefficients);
        self
    }

    /// Replaces the default pair.
    pub fn with_default_coefficients(mut self, coefficients: DurationCoefficients) -> Self {
        self.default_coefficients = coefficients;
        self
    }

    /// Replaces the tier multipliers.
    pub fn with_multipliers(mut self, multipliers: ComplexityMultipliers) -> Self {
        self.multipliers = multipliers;
        self
    }

    /// Coefficients for a task and whether they were tabulated.
    pub fn coefficients_for(&self, task_id: &str) -> (DurationCoefficients, EstimationMethod) {
        match self.coefficients.get(task_id) {
            Some(c) => (*c, EstimationMethod::Parametric),
            None => (self.default_coefficients, EstimationMethod::DefaultCoefficients),
        }
    }

    /// Estimates a task's duration in days (always >= 1).
    pub fn estimate(&self, task_id: &str, square_footage: f64, complexity: Complexity) -> DurationEstimate {
        let (coefficients, method) = self.coefficients_for(task_id);
        let scaled = coefficients.raw_days(square_footage) * self.multipliers.for_tier(complexity);
        DurationEstimate {
            days: whole_days(scaled),
            method,
        }
    }
}

/// Rounds a fractional day count up, with a floor of one day.
///
/// Values at most `1e-9` above a whole number round down to it.
///
/// Non-finite and non-positive inputs give one day; very large values
/// saturate at `u32::MAX`.
pub fn whole_days(days: f64) -> u32 {
    let rounded = (days - CEIL_EPSILON).ceil();
    if rounded.is_nan() || rounded < 1.0 {
        1
    } else {
        // `as` saturates for out-of-range floats
        rounded as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn estimator() -> DurationEstimator {
        DurationEstimator::new()
            .with_coefficients("wall-framing", DurationCoefficients::new(3.0, 0.004))
            .with_default_coefficients(DurationCoefficients::new(2.0, 0.002))
    }

    #[test]
    fn test_parametric_estimate() {
        let est = estimator().estimate("wall-framing", 1000.0, Complexity::Medium);
        assert_eq!(est.days, 7);
        assert_eq!(est.method, EstimationMethod::Parametric);
    }

    #[test]
    fn test_default_coefficients_fallback() {
        let est = estimator().estimate("railings", 500.0, Complexity::Medium);
        assert_eq!(est.days, 3);
        assert_eq!(est.method, EstimationMethod::DefaultCoefficients);
    }

    #[test]
    fn test_complexity_scaling() {
        let e = estimator();
        let low = e.estimate("wall-framing", 1000.0, Complexity::Low).days;
        let high = e.estimate("wall-framing", 1000.0, Complexity::High).days;
        // 7 * 0.8 = 5.6 → 6, 7 * 1.3 = 9.1 → 10
        assert_eq!(low, 6);
        assert_eq!(high, 10);
    }

    #[test]
    fn test_exact_products_do_not_round_up() {
        let e = DurationEstimator::new()
            .with_coefficients("t", DurationCoefficients::new(3.0, 0.003));
        assert_eq!(e.estimate("t", 1000.0, Complexity::Medium).days, 6);
    }

    #[test]
    fn test_floor_of_one_day() {
        let e = DurationEstimator::new()
            .with_coefficients("t", DurationCoefficients::new(0.0, 0.001));
        assert_eq!(e.estimate("t", 0.0, Complexity::Low).days, 1);
        assert_eq!(e.estimate("t", -5000.0, Complexity::High).days, 1);
    }

    #[test]
    fn test_whole_days_edge_values() {
        assert_eq!(whole_days(f64::NAN), 1);
        assert_eq!(whole_days(f64::NEG_INFINITY), 1);
        assert_eq!(whole_days(f64::INFINITY), u32::MAX);
        assert_eq!(whole_days(1.2), 2);
        assert_eq!(whole_days(4.0), 4);
    }

    #[test]
    fn test_whole_days_tolerance_band() {
        assert_eq!(whole_days(2.0 + 5e-10), 2);
        assert_eq!(whole_days(2.0 + 1e-6), 3);
        assert_eq!(whole_days(2.0 - 1e-12), 2);
    }

    #[test]
    fn test_multiplier_lookup() {
        let m = ComplexityMultipliers::default();
        assert_eq!(m.for_tier(Complexity::Low), 0.8);
        assert_eq!(m.for_tier(Complexity::Medium), 1.0);
        assert_eq!(m.for_tier(Complexity::High), 1.3);
    }
}

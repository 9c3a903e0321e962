//! Pilot load profiles and their (optional) validation.
//!
//! [`ScenarioLoad::new`] accepts anything; a zero component simply produces
//! zero estimates. Callers that want to reject bad input use
//! [`ScenarioLoad::try_new`] or [`LoadBounds::validate`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Synthetic traffic profile: requests per day over a number of days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScenarioLoad {
    pub requests_per_day: u64,
    pub days: u64,
}

impl ScenarioLoad {
    pub const fn new(requests_per_day: u64, days: u64) -> Self {
        Self {
            requests_per_day,
            days,
        }
    }

    /// Reject loads with a zero component.
    pub fn try_new(requests_per_day: u64, days: u64) -> Result<Self, LoadError> {
        if requests_per_day == 0 {
            return Err(LoadError::ZeroRequestsPerDay);
        }
        if days == 0 {
            return Err(LoadError::ZeroDays);
        }
        Ok(Self::new(requests_per_day, days))
    }

    /// `requests_per_day × days`, saturating at `u64::MAX`.
    pub fn total_requests(&self) -> u64 {
        self.requests_per_day.saturating_mul(self.days)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LoadError {
    #[error("requests per day must be positive")]
    ZeroRequestsPerDay,
    #[error("pilot duration must be at least one day")]
    ZeroDays,
    #[error("{field} = {value} is outside {min}..={max}")]
    OutOfRange {
        field: &'static str,
        value: u64,
        min: u64,
        max: u64,
    },
    #[error("{field} = {value} is not a multiple of {step} from the range start")]
    OffStep {
        field: &'static str,
        value: u64,
        step: u64,
    },
}

/// Inclusive range with a step and a default, as offered to a user picking
/// a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepRange {
    pub min: u64,
    pub max: u64,
    pub step: u64,
    pub default: u64,
}

impl StepRange {
    fn check(&self, field: &'static str, value: u64) -> Result<(), LoadError> {
        if value < self.min || value > self.max {
            return Err(LoadError::OutOfRange {
                field,
                value,
                min: self.min,
                max: self.max,
            });
        }
        // The default and the upper bound may sit off the grid.
        let on_grid = self.step <= 1 || (value - self.min) % self.step == 0;
        if !on_grid && value != self.default && value != self.max {
            return Err(LoadError::OffStep {
                field,
                value,
                step: self.step,
            });
        }
        Ok(())
    }
}

/// Accepted pilot load ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadBounds {
    pub requests_per_day: StepRange,
    pub days: StepRange,
}

impl Default for LoadBounds {
    fn default() -> Self {
        Self {
            requests_per_day: StepRange {
                min: 100,
                max: 10_000,
                step: 100,
                default: 1_000,
            },
            days: StepRange {
                min: 7,
                max: 90,
                step: 7,
                default: 30,
            },
        }
    }
}

impl LoadBounds {
    pub fn default_load(&self) -> ScenarioLoad {
        ScenarioLoad::new(self.requests_per_day.default, self.days.default)
    }

    pub fn validate(&self, load: &ScenarioLoad) -> Result<(), LoadError> {
        self.requests_per_day
            .check("requests_per_day", load.requests_per_day)?;
        self.days.check("days", load.days)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_requests() {
        assert_eq!(ScenarioLoad::new(100, 10).total_requests(), 1000);
        assert_eq!(ScenarioLoad::new(0, 10).total_requests(), 0);
    }

    #[test]
    fn test_total_requests_saturates() {
        assert_eq!(ScenarioLoad::new(u64::MAX, 2).total_requests(), u64::MAX);
    }

    #[test]
    fn test_try_new_rejects_zero() {
        assert_eq!(ScenarioLoad::try_new(0, 5), Err(LoadError::ZeroRequestsPerDay));
        assert_eq!(ScenarioLoad::try_new(5, 0), Err(LoadError::ZeroDays));
        assert_eq!(ScenarioLoad::try_new(5, 1), Ok(ScenarioLoad::new(5, 1)));
    }

    #[test]
    fn test_default_bounds() {
        let bounds = LoadBounds::default();
        let load = bounds.default_load();
        assert_eq!(load, ScenarioLoad::new(1000, 30));
        assert!(bounds.validate(&load).is_ok());
        assert!(bounds.validate(&ScenarioLoad::new(1000, 28)).is_ok());
        assert_eq!(
            bounds.validate(&ScenarioLoad::new(1000, 31)),
            Err(LoadError::OffStep {
                field: "days",
                value: 31,
                step: 7,
            })
        );
    }

    #[test]
    fn test_range_bounds_are_accepted() {
        let bounds = LoadBounds::default();
        // 90 days is off the 7-day grid but is the advertised maximum.
        assert!(bounds.validate(&ScenarioLoad::new(10_000, 90)).is_ok());
        assert!(bounds.validate(&ScenarioLoad::new(100, 7)).is_ok());
        assert!(matches!(
            bounds.validate(&ScenarioLoad::new(100, 89)),
            Err(LoadError::OffStep { value: 89, .. })
        ));
        assert!(matches!(
            bounds.validate(&ScenarioLoad::new(100, 91)),
            Err(LoadError::OutOfRange { value: 91, .. })
        ));
    }

    #[test]
    fn test_out_of_range() {
        let bounds = LoadBounds::default();
        let err = bounds.validate(&ScenarioLoad::new(20_000, 14)).unwrap_err();
        assert_eq!(
            err,
            LoadError::OutOfRange {
                field: "requests_per_day",
                value: 20_000,
                min: 100,
                max: 10_000,
            }
        );
        assert_eq!(
            err.to_string(),
            "requests_per_day = 20000 is outside 100..=10000"
        );
    }
}

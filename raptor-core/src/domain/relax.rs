//! Cost relaxation.
//!
//! A relax function widens a cost threshold so that results which are
//! almost as good as the best one survive a Pareto comparison.

use serde::{Deserialize, Serialize};

use super::DomainError;

/// A linear relax function: `relax(c1) = ceil(ratio * c1) + slack`.
///
/// `RelaxFunction::NORMAL` is the identity and disables relaxation.
///
/// # Examples
///
/// ```
/// use raptor_core::domain::RelaxFunction;
///
/// let f = RelaxFunction::new(1.5, 100).unwrap();
/// assert_eq!(f.relax(1000), 1600);
/// assert_eq!(RelaxFunction::NORMAL.relax(1000), 1000);
///
/// // A ratio below one would tighten the threshold
/// assert!(RelaxFunction::new(0.9, 0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RelaxFunction {
    ratio: f64,
    slack: i32,
}

impl RelaxFunction {
    /// No relaxation.
    pub const NORMAL: Self = Self {
        ratio: 1.0,
        slack: 0,
    };

    /// Relaxation for direct transit results: half again the cost, plus
    /// fifteen minutes.
    pub const DIRECT_TRANSIT: Self = Self {
        ratio: 1.5,
        slack: 90_000,
    };

    /// Create a relax function. `ratio` must be at least 1.0 and `slack`
    /// non-negative, so that `relax(c1) >= c1` for every non-negative cost.
    pub fn new(ratio: f64, slack: i32) -> Result<Self, DomainError> {
        let f = Self { ratio, slack };
        f.validate()?;
        Ok(f)
    }

    /// Check the invariants. Used after deserialization.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.ratio.is_nan() || self.ratio < 1.0 || self.slack < 0 {
            return Err(DomainError::InvalidRelaxFunction {
                ratio: self.ratio,
                slack: self.slack,
            });
        }
        Ok(())
    }

    /// Returns the relaxed cost.
    pub fn relax(&self, c1: i32) -> i32 {
        if self.is_normal() {
            return c1;
        }
        let scaled = (self.ratio * f64::from(c1)).ceil();
        // Saturate rather than wrap for absurd costs
        (scaled as i64 + i64::from(self.slack)).clamp(i64::from(i32::MIN), i64::from(i32::MAX))
            as i32
    }

    /// Returns true if this function is the identity.
    pub fn is_normal(&self) -> bool {
        self.ratio == 1.0 && self.slack == 0
    }

    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    pub fn slack(&self) -> i32 {
        self.slack
    }
}

impl Default for RelaxFunction {
    fn default() -> Self {
        Self::NORMAL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normal_is_identity() {
        assert!(RelaxFunction::NORMAL.is_normal());
        assert_eq!(RelaxFunction::NORMAL.relax(0), 0);
        assert_eq!(RelaxFunction::NORMAL.relax(12_345), 12_345);
        assert_eq!(RelaxFunction::default(), RelaxFunction::NORMAL);
    }

    #[test]
    fn ratio_rounds_up() {
        let f = RelaxFunction::new(1.25, 0).unwrap();
        assert_eq!(f.relax(10), 13);
        assert_eq!(f.relax(8), 10);
    }

    #[test]
    fn slack_only() {
        let f = RelaxFunction::new(1.0, 600).unwrap();
        assert!(!f.is_normal());
        assert_eq!(f.relax(100), 700);
    }

    #[test]
    fn rejects_tightening() {
        assert!(RelaxFunction::new(0.99, 0).is_err());
        assert!(RelaxFunction::new(1.0, -1).is_err());
        assert!(RelaxFunction::new(f64::NAN, 0).is_err());
    }

    #[test]
    fn saturates() {
        let f = RelaxFunction::new(2.0, 0).unwrap();
        assert_eq!(f.relax(i32::MAX), i32::MAX);
    }

    #[test]
    fn deserialize_then_validate() {
        let f: RelaxFunction = serde_json::from_str(r#"{"ratio": 0.5, "slack": 0}"#).unwrap();
        assert!(f.validate().is_err());

        let f: RelaxFunction = serde_json::from_str(r#"{"ratio": 1.5, "slack": 0}"#).unwrap();
        assert!(f.validate().is_ok());
    }
}

//! Access and egress legs.
//!
//! The street search computes how to walk (or cycle, or drive) between the
//! origin/destination and nearby stops. This core only sees the outcome:
//! which stop, how long it takes, and what it costs.

use serde::Serialize;

use super::{DomainError, StopIndex};

/// A street leg connecting the origin or destination to a stop.
///
/// # Invariants
///
/// - `duration >= 0`
/// - `c1 >= 0`
///
/// # Examples
///
/// ```
/// use raptor_core::domain::{AccessEgress, StopIndex};
///
/// let walk = AccessEgress::new(StopIndex(0), 300, 60_000).unwrap();
/// assert_eq!(walk.duration(), 300);
///
/// assert!(AccessEgress::new(StopIndex(0), -1, 0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccessEgress {
    stop: StopIndex,
    duration: i32,
    c1: i32,
}

/// A leg from the origin to the first boarding stop.
pub type AccessLeg = AccessEgress;

/// A leg from the last alighting stop to the destination.
pub type EgressLeg = AccessEgress;

impl AccessEgress {
    /// Construct a leg, validating duration and cost.
    pub fn new(stop: StopIndex, duration: i32, c1: i32) -> Result<Self, DomainError> {
        if duration < 0 {
            return Err(DomainError::NegativeDuration(duration));
        }
        if c1 < 0 {
            return Err(DomainError::NegativeCost(c1));
        }
        Ok(Self { stop, duration, c1 })
    }

    /// Construct a walking leg whose cost is its duration in centi-seconds,
    /// scaled by `reluctance`.
    pub fn walk(stop: StopIndex, duration: i32, reluctance: f64) -> Result<Self, DomainError> {
        let c1 = (f64::from(duration) * reluctance * 100.0).round() as i32;
        Self::new(stop, duration, c1)
    }

    /// Returns the stop this leg starts or ends at.
    pub fn stop(&self) -> StopIndex {
        self.stop
    }

    /// Returns the traversal duration in seconds.
    pub fn duration(&self) -> i32 {
        self.duration
    }

    /// Returns the generalized cost of the leg.
    pub fn c1(&self) -> i32 {
        self.c1
    }
}

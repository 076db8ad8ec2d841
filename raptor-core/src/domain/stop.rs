//! Stop and route index types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Index of a stop in the transit model.
///
/// Stop indices are dense: a model with `n` stops uses `0..n`, which lets
/// per-stop state live in pre-sized arrays.
///
/// # Examples
///
/// ```
/// use raptor_core::domain::StopIndex;
///
/// let stop = StopIndex(3);
/// assert_eq!(stop.0, 3);
/// assert_eq!(stop.to_string(), "stop#3");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct StopIndex(pub usize);

impl fmt::Display for StopIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "stop#{}", self.0)
    }
}

impl From<usize> for StopIndex {
    fn from(value: usize) -> Self {
        StopIndex(value)
    }
}

/// Index of a route (a trip pattern and its trips) in the transit model.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct RouteIndex(pub usize);

impl fmt::Display for RouteIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "route#{}", self.0)
    }
}

impl From<usize> for RouteIndex {
    fn from(value: usize) -> Self {
        RouteIndex(value)
    }
}

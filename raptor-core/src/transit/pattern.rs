//! Route patterns.

use crate::domain::{StopIndex, TransitMode};

/// The ordered stops of a route, with per-position boarding and
/// alighting permissions.
///
/// A stop may appear more than once in a pattern (loop routes).
///
/// # Examples
///
/// ```
/// use raptor_core::domain::{StopIndex, TransitMode};
/// use raptor_core::transit::RoutePattern;
///
/// let pattern = RoutePattern::new(TransitMode::Bus, vec![StopIndex(4), StopIndex(1), StopIndex(7)])
///     .with_no_boarding_at(2);
/// assert!(pattern.board_allowed(0));
/// assert!(!pattern.board_allowed(2));
/// assert_eq!(pattern.positions_of(StopIndex(1)).collect::<Vec<_>>(), vec![1]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    mode: TransitMode,
    stops: Vec<StopIndex>,
    board_allowed: Vec<bool>,
    alight_allowed: Vec<bool>,
}

impl RoutePattern {
    /// Create a pattern that allows boarding and alighting everywhere.
    pub fn new(mode: TransitMode, stops: Vec<StopIndex>) -> Self {
        let n = stops.len();
        Self {
            mode,
            stops,
            board_allowed: vec![true; n],
            alight_allowed: vec![true; n],
        }
    }

    /// Forbid boarding at position `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the pattern.
    pub fn with_no_boarding_at(mut self, pos: usize) -> Self {
        self.board_allowed[pos] = false;
        self
    }

    /// Forbid alighting at position `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the pattern.
    pub fn with_no_alighting_at(mut self, pos: usize) -> Self {
        self.alight_allowed[pos] = false;
        self
    }

    pub fn mode(&self) -> TransitMode {
        self.mode
    }

    pub fn stops(&self) -> &[StopIndex] {
        &self.stops
    }

    pub fn stop(&self, pos: usize) -> StopIndex {
        self.stops[pos]
    }

    /// Returns the number of stop positions.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    pub fn board_allowed(&self, pos: usize) -> bool {
        self.board_allowed[pos]
    }

    pub fn alight_allowed(&self, pos: usize) -> bool {
        self.alight_allowed[pos]
    }

    /// Iterate over every position where `stop` appears, in order.
    pub fn positions_of(&self, stop: StopIndex) -> impl Iterator<Item = usize> + '_ {
        self.stops
            .iter()
            .enumerate()
            .filter(move |(_, s)| **s == stop)
            .map(|(pos, _)| pos)
    }

    pub fn contains(&self, stop: StopIndex) -> bool {
        self.stops.contains(&stop)
    }
}

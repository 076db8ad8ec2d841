//! Arena of stop arrivals.
//!
//! Every accepted arrival of a search lives here until the search ends.
//! Pareto fronts only hold small [`ArrivalEntry`](super::ArrivalEntry)
//! values pointing into the arena, so an arrival evicted from its front is
//! still available to the paths built on top of it.

use crate::domain::TransitTime;

use super::{ArrivalKind, StopArrival};

/// Stable handle of an arrival in an [`ArrivalArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArrivalId(usize);

impl ArrivalId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the position of the arrival in its arena.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Append-only storage for the arrivals of one search.
#[derive(Debug, Clone)]
pub struct ArrivalArena<T> {
    arrivals: Vec<StopArrival<T>>,
}

impl<T> Default for ArrivalArena<T> {
    fn default() -> Self {
        Self {
            arrivals: Vec::new(),
        }
    }
}

impl<T> ArrivalArena<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an arrival and return its handle.
    ///
    /// # Panics
    ///
    /// Panics if the arrival refers to a previous arrival that is not in
    /// this arena.
    pub fn push(&mut self, arrival: StopArrival<T>) -> ArrivalId {
        if let Some(prev) = arrival.previous() {
            assert!(
                prev.0 < self.arrivals.len(),
                "previous arrival {prev:?} is not in the arena"
            );
        }
        let id = ArrivalId(self.arrivals.len());
        self.arrivals.push(arrival);
        id
    }

    /// Remove the most recently pushed arrival.
    ///
    /// Only the last arrival can be removed, and only while nothing refers
    /// to it; this undoes a push whose arrival was rejected.
    pub(crate) fn pop_last(&mut self, id: ArrivalId) -> StopArrival<T> {
        assert_eq!(id.0 + 1, self.arrivals.len(), "only the last arrival can be removed");
        self.arrivals
            .pop()
            .unwrap_or_else(|| unreachable!("length checked above"))
    }

    /// Returns the arrival behind `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this arena.
    pub fn get(&self, id: ArrivalId) -> &StopArrival<T> {
        &self.arrivals[id.0]
    }

    pub fn len(&self) -> usize {
        self.arrivals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arrivals.is_empty()
    }

    /// Walk from `id` back to the access arrival that started its path.
    pub fn chain(&self, id: ArrivalId) -> Chain<'_, T> {
        Chain {
            arena: self,
            next: Some(id),
        }
    }

    /// Returns the time the path ending in `id` leaves the origin.
    pub fn start_time(&self, id: ArrivalId) -> TransitTime {
        let (_, root) = self
            .chain(id)
            .last()
            .unwrap_or_else(|| unreachable!("a chain contains at least its start"));
        match root.kind() {
            ArrivalKind::Access { leg } => root.arrival_time() - leg.duration(),
            _ => unreachable!("every arrival chain starts with an access arrival"),
        }
    }
}

/// Iterator over an arrival and its predecessors, newest first.
pub struct Chain<'a, T> {
    arena: &'a ArrivalArena<T>,
    next: Option<ArrivalId>,
}

impl<'a, T> Iterator for Chain<'a, T> {
    type Item = (ArrivalId, &'a StopArrival<T>);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        let arrival = self.arena.get(id);
        self.next = arrival.previous();
        Some((id, arrival))
    }
}

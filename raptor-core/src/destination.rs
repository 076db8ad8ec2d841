//! Destination arrivals.
//!
//! When a stop arrival is accepted at a stop with egress legs, each egress
//! leg turns it into a candidate destination arrival. Candidates compete
//! in one shared Pareto set; the survivors are the search result.

use tracing::trace;

use crate::arrivals::{ArrivalArena, ArrivalId};
use crate::domain::{EgressLeg, SearchWindow, TransitTime};
use crate::pareto::{AddOutcome, ParetoComparator, ParetoSet};
use crate::path::RaptorPath;

/// A stop arrival extended to the destination by an egress leg.
#[derive(Debug, Clone, PartialEq)]
pub struct DestinationArrival {
    pub stop_arrival: ArrivalId,
    pub egress: EgressLeg,
    pub start_time: TransitTime,
    pub end_time: TransitTime,
    pub c1: i32,
    pub number_of_transfers: u32,
    /// Whether the path leaves the origin inside the search window.
    pub in_window: bool,
}

/// Dominance between destination arrivals.
///
/// Later start, earlier end, lower cost, fewer transfers and leaving inside
/// the search window are better. `right` dominates `left` when it is at
/// least as good on every criterion and strictly better on one.
#[derive(Debug, Clone, Copy, Default)]
pub struct DestinationComparator;

impl ParetoComparator<DestinationArrival> for DestinationComparator {
    fn dominates(&self, right: &DestinationArrival, left: &DestinationArrival) -> bool {
        let no_worse = right.start_time >= left.start_time
            && right.end_time <= left.end_time
            && right.c1 <= left.c1
            && right.number_of_transfers <= left.number_of_transfers
            && right.in_window >= left.in_window;
        let better = right.start_time > left.start_time
            || right.end_time < left.end_time
            || right.c1 < left.c1
            || right.number_of_transfers < left.number_of_transfers
            || right.in_window > left.in_window;
        no_worse && better
    }

    fn equivalent(&self, right: &DestinationArrival, left: &DestinationArrival) -> bool {
        right.start_time == left.start_time
            && right.end_time == left.end_time
            && right.c1 == left.c1
            && right.number_of_transfers == left.number_of_transfers
            && right.in_window == left.in_window
    }
}

/// Collects the Pareto-optimal destination arrivals of one search.
#[derive(Debug, Clone)]
pub struct DestinationCollector {
    front: ParetoSet<DestinationArrival, DestinationComparator>,
    window: Option<SearchWindow>,
    offered: usize,
}

impl DestinationCollector {
    /// Create an empty collector. Without a window every arrival counts
    /// as inside it.
    pub fn new(window: Option<SearchWindow>) -> Self {
        Self {
            front: ParetoSet::new(DestinationComparator),
            window,
            offered: 0,
        }
    }

    /// Extend arrival `id` by `egress` and offer the result.
    pub fn offer<T>(
        &mut self,
        arena: &ArrivalArena<T>,
        id: ArrivalId,
        egress: &EgressLeg,
    ) -> AddOutcome {
        let arrival = arena.get(id);
        debug_assert_eq!(arrival.stop(), egress.stop());

        let start_time = arena.start_time(id);
        let candidate = DestinationArrival {
            stop_arrival: id,
            egress: egress.clone(),
            start_time,
            end_time: arrival.arrival_time() + egress.duration(),
            c1: arrival.c1() + egress.c1(),
            number_of_transfers: arrival.number_of_transfers(),
            in_window: self.window.is_none_or(|w| w.contains(start_time)),
        };

        trace!(
            stop = %egress.stop(),
            start_time = %candidate.start_time,
            end_time = %candidate.end_time,
            c1 = candidate.c1,
            "Destination arrival offered"
        );
        self.offered += 1;
        self.front.add(candidate)
    }

    pub fn arrivals(&self) -> impl Iterator<Item = &DestinationArrival> {
        self.front.iter()
    }

    /// Number of candidates offered so far, accepted or not.
    pub fn offered(&self) -> usize {
        self.offered
    }

    pub fn len(&self) -> usize {
        self.front.len()
    }

    pub fn is_empty(&self) -> bool {
        self.front.is_empty()
    }

    /// Rebuild the paths of every collected arrival.
    pub fn paths<T: Clone>(&self, arena: &ArrivalArena<T>) -> Vec<RaptorPath<T>> {
        self.front
            .iter()
            .map(|d| RaptorPath::from_stop_arrival(arena, d.stop_arrival, &d.egress))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arrivals::StopArrival;
    use crate::domain::{AccessEgress, StopIndex};

    fn arrival(start: i32, end: i32, c1: i32, transfers: u32, in_window: bool) -> DestinationArrival {
        DestinationArrival {
            stop_arrival: ArrivalId::new(0),
            egress: AccessEgress::new(StopIndex(0), 0, 0).unwrap(),
            start_time: TransitTime::from_seconds(start),
            end_time: TransitTime::from_seconds(end),
            c1,
            number_of_transfers: transfers,
            in_window,
        }
    }

    #[test]
    fn comparator_criteria() {
        let cmp = DestinationComparator;
        let base = arrival(100, 200, 50, 1, true);
        assert!(cmp.dominates(&arrival(110, 200, 50, 1, true), &base));
        assert!(cmp.dominates(&arrival(100, 190, 50, 1, true), &base));
        assert!(cmp.dominates(&arrival(100, 200, 40, 1, true), &base));
        assert!(cmp.dominates(&arrival(100, 200, 50, 0, true), &base));
        assert!(cmp.dominates(&base, &arrival(100, 200, 50, 1, false)));
        assert!(!cmp.dominates(&base, &base));
        assert!(!cmp.dominates(&arrival(90, 150, 50, 1, true), &base));
    }

    #[test]
    fn same_criteria_offered_twice_is_rejected() {
        let mut arena: ArrivalArena<()> = ArrivalArena::new();
        let mut collector = DestinationCollector::new(None);
        let leg = AccessEgress::new(StopIndex(0), 300, 100).unwrap();
        let first = arena.push(StopArrival::access(leg.clone(), TransitTime::hms(8, 0, 0)));
        let second = arena.push(StopArrival::access(leg.clone(), TransitTime::hms(8, 0, 0)));

        assert!(collector.offer(&arena, first, &leg).is_accepted());
        assert_eq!(collector.offer(&arena, second, &leg), AddOutcome::Rejected);
        assert_eq!(collector.len(), 1);
        assert_eq!(collector.offered(), 2);
        assert_eq!(collector.arrivals().next().unwrap().stop_arrival, first);
    }

    #[test]
    fn window_membership_is_a_criterion() {
        let mut arena: ArrivalArena<()> = ArrivalArena::new();
        let window = SearchWindow::new(TransitTime::hms(8, 0, 0), 600);
        let mut collector = DestinationCollector::new(Some(window));
        let egress = AccessEgress::new(StopIndex(1), 60, 0).unwrap();

        // Leaves after the window but arrives earlier and cheaper
        let late = AccessEgress::new(StopIndex(1), 300, 10).unwrap();
        let late = arena.push(StopArrival::access(late, TransitTime::hms(8, 10, 0)));
        // Leaves inside the window
        let early = AccessEgress::new(StopIndex(1), 900, 20).unwrap();
        let early = arena.push(StopArrival::access(early, TransitTime::hms(8, 0, 0)));

        assert!(collector.offer(&arena, late, &egress).is_accepted());
        assert!(collector.offer(&arena, early, &egress).is_accepted());
        assert_eq!(collector.len(), 2);

        let inside: Vec<_> = collector.arrivals().map(|d| d.in_window).collect();
        assert_eq!(inside, vec![false, true]);
    }

    #[test]
    fn without_window_everything_is_inside() {
        let mut arena: ArrivalArena<()> = ArrivalArena::new();
        let mut collector = DestinationCollector::new(None);
        let leg = AccessEgress::new(StopIndex(0), 60, 5).unwrap();
        let a = arena.push(StopArrival::access(leg.clone(), TransitTime::hms(23, 0, 0)));

        assert!(collector.offer(&arena, a, &leg).is_accepted());
        let d = collector.arrivals().next().unwrap();
        assert!(d.in_window);
        assert_eq!(d.end_time, TransitTime::hms(23, 2, 0));
        assert_eq!(d.c1, 10);

        let paths = collector.paths(&arena);
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].c1(), 10);
    }
}

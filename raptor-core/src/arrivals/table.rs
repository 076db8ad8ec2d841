//! The per-stop arrival table.
//!
//! The table holds one Pareto front per stop, sized up front from the
//! network. A round-based driver adds arrivals during a round, then calls
//! [`StopArrivalTable::clear_touched_stops_and_set_stop_markers`] so the
//! next round only revisits stops that improved.

use tracing::trace;

use crate::destination::DestinationCollector;
use crate::domain::{EgressLeg, StopIndex, TransitTime};
use crate::pareto::{AddOutcome, ParetoSet};
use crate::path::RaptorPath;

use super::glue::GlueDispatch;
use super::{
    ArrivalArena, ArrivalEntry, ArrivalId, ChainedSeed, ComposedListener, DebugHandler,
    ListenerSetup, NoopDebugHandler, StopArrival, StopArrivalComparator, TouchedStops,
};

type StopFront = ParetoSet<ArrivalEntry, StopArrivalComparator>;

/// Pareto-optimal arrivals at every stop of one search.
pub struct StopArrivalTable<T, D = NoopDebugHandler> {
    arena: ArrivalArena<T>,
    fronts: Vec<StopFront>,
    touched: TouchedStops,
    listeners: Vec<Option<ComposedListener>>,
    seeds: Vec<ChainedSeed>,
    destination: DestinationCollector,
    debug: D,
}

impl<T> StopArrivalTable<T> {
    /// Create a table for stops `0..number_of_stops` without debug output.
    ///
    /// # Panics
    ///
    /// Panics if `setup` names a stop outside the network.
    pub fn new(number_of_stops: usize, setup: &ListenerSetup) -> Self {
        Self::with_debug_handler(number_of_stops, setup, NoopDebugHandler)
    }
}

impl<T, D: DebugHandler<T>> StopArrivalTable<T, D> {
    /// Create a table reporting events at debugged stops to `debug`.
    pub fn with_debug_handler(number_of_stops: usize, setup: &ListenerSetup, debug: D) -> Self {
        Self {
            arena: ArrivalArena::new(),
            fronts: (0..number_of_stops)
                .map(|_| ParetoSet::new(StopArrivalComparator))
                .collect(),
            touched: TouchedStops::new(number_of_stops),
            listeners: setup.build(number_of_stops),
            seeds: Vec::new(),
            destination: DestinationCollector::new(setup.window()),
            debug,
        }
    }

    pub fn number_of_stops(&self) -> usize {
        self.fronts.len()
    }

    /// Offer an arrival to its stop's front.
    ///
    /// Returns the arrival's handle if it was accepted; an accepted arrival
    /// marks its stop as touched and triggers the stop's listener.
    ///
    /// # Panics
    ///
    /// Panics if the arrival's stop is outside the table.
    pub fn add_stop_arrival(&mut self, arrival: StopArrival<T>) -> Option<ArrivalId> {
        let stop = arrival.stop();
        assert!(
            stop.0 < self.fronts.len(),
            "{stop} outside table of {} stops",
            self.fronts.len()
        );

        let id = self.arena.push(arrival);
        let entry = ArrivalEntry::new(id, self.arena.get(id));

        let outcome = match &self.listeners[stop.0] {
            Some(listener) => {
                let mut dispatch = GlueDispatch {
                    listener,
                    arena: &self.arena,
                    debug: &mut self.debug,
                    seeds: &mut self.seeds,
                    destination: &mut self.destination,
                };
                self.fronts[stop.0].add_with_listener(entry, &mut dispatch)
            }
            None => self.fronts[stop.0].add(entry),
        };

        match outcome {
            AddOutcome::Accepted => {
                self.touched.insert(stop);
                Some(id)
            }
            AddOutcome::Rejected => {
                let rejected = self.arena.pop_last(id);
                if self.is_debugged(stop) {
                    self.debug.rejected(&rejected);
                }
                None
            }
        }
    }

    /// Mark every touched front and clear the touched set.
    ///
    /// Returns the number of stops that were marked.
    pub fn clear_touched_stops_and_set_stop_markers(&mut self) -> usize {
        let mut marked = 0;
        for stop in self.touched.iter() {
            let front = &mut self.fronts[stop.0];
            front.mark();
            if self.listeners[stop.0]
                .as_ref()
                .is_some_and(ComposedListener::has_debug)
            {
                self.debug.marked(stop, front.len());
            }
            marked += 1;
        }
        self.touched.clear();
        trace!(marked, "Stop markers set");
        marked
    }

    fn is_debugged(&self, stop: StopIndex) -> bool {
        self.listeners[stop.0]
            .as_ref()
            .is_some_and(ComposedListener::has_debug)
    }

    fn front(&self, stop: StopIndex) -> &StopFront {
        &self.fronts[stop.0]
    }

    pub fn reached(&self, stop: StopIndex) -> bool {
        !self.front(stop).is_empty()
    }

    pub fn reached_by_transit(&self, stop: StopIndex) -> bool {
        self.front(stop).iter().any(|e| e.arrived_on_board)
    }

    /// Returns the earliest arrival time at `stop`.
    ///
    /// # Panics
    ///
    /// Panics if `stop` has not been reached.
    pub fn best_arrival_time(&self, stop: StopIndex) -> TransitTime {
        self.front(stop)
            .iter()
            .map(|e| e.arrival_time)
            .min()
            .unwrap_or_else(|| panic!("best_arrival_time of unreached {stop}"))
    }

    /// Returns the earliest on-board arrival time at `stop`.
    ///
    /// # Panics
    ///
    /// Panics if `stop` has not been reached by transit.
    pub fn best_transit_arrival_time(&self, stop: StopIndex) -> TransitTime {
        self.front(stop)
            .iter()
            .filter(|e| e.arrived_on_board)
            .map(|e| e.arrival_time)
            .min()
            .unwrap_or_else(|| panic!("best_transit_arrival_time of {stop} not reached by transit"))
    }

    /// Returns the fewest transfers among the arrivals at `stop`.
    ///
    /// # Panics
    ///
    /// Panics if `stop` has not been reached.
    pub fn smallest_number_of_transfers(&self, stop: StopIndex) -> u32 {
        self.front(stop)
            .iter()
            .map(|e| e.round.saturating_sub(1))
            .min()
            .unwrap_or_else(|| panic!("smallest_number_of_transfers of unreached {stop}"))
    }

    /// Iterate over the current front of `stop`.
    pub fn arrivals(&self, stop: StopIndex) -> impl Iterator<Item = (ArrivalId, &StopArrival<T>)> {
        self.front(stop)
            .iter()
            .map(|e| (e.id, self.arena.get(e.id)))
    }

    /// Iterate over the arrivals at `stop` added since its last mark.
    pub fn arrivals_after_marker(
        &self,
        stop: StopIndex,
    ) -> impl Iterator<Item = (ArrivalId, &StopArrival<T>)> {
        self.front(stop)
            .elements_after_marker()
            .map(|e| (e.id, self.arena.get(e.id)))
    }

    pub fn is_touched(&self, stop: StopIndex) -> bool {
        self.touched.contains(stop)
    }

    /// Iterate over the stops touched this round, in ascending order.
    pub fn touched_stops(&self) -> impl Iterator<Item = StopIndex> + '_ {
        self.touched.iter()
    }

    /// Returns any arrival ever accepted, including evicted ones.
    pub fn arrival(&self, id: ArrivalId) -> &StopArrival<T> {
        self.arena.get(id)
    }

    pub fn arena(&self) -> &ArrivalArena<T> {
        &self.arena
    }

    /// Hand the seeds for the next staged search to the caller.
    pub fn take_chained_seeds(&mut self) -> Vec<ChainedSeed> {
        std::mem::take(&mut self.seeds)
    }

    pub fn destination(&self) -> &DestinationCollector {
        &self.destination
    }

    pub fn debug_handler(&self) -> &D {
        &self.debug
    }
}

impl<T: Clone, D: DebugHandler<T>> StopArrivalTable<T, D> {
    /// Rebuild the path that reaches the destination from `id` via `egress`.
    pub fn path(&self, id: ArrivalId, egress: &EgressLeg) -> RaptorPath<T> {
        RaptorPath::from_stop_arrival(&self.arena, id, egress)
    }

    /// Rebuild every path on the destination front.
    pub fn destination_paths(&self) -> Vec<RaptorPath<T>> {
        self.destination.paths(&self.arena)
    }
}

//! Per-stop listener composition.
//!
//! Each stop that needs to react to accepted arrivals gets one
//! [`ComposedListener`]. Its observers always run in the same order: debug
//! first, then round chaining, then projection to the destination. Stops
//! with no observer get no listener at all.

use serde::{Deserialize, Serialize};

use crate::destination::DestinationCollector;
use crate::domain::{EgressLeg, SearchWindow, StopIndex, TransitTime};
use crate::pareto::ParetoSetEventListener;

use super::{ArrivalArena, ArrivalEntry, ArrivalId, DebugHandler};

/// A hand-over from this search to a following staged search.
///
/// An arrival accepted at `from_stop` lets the next stage start at
/// `to_stop`, no earlier than `min_wait` seconds later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainedConnection {
    pub from_stop: StopIndex,
    pub to_stop: StopIndex,
    #[serde(default)]
    pub min_wait: i32,
}

/// A starting point for the next stage, produced by a chained stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainedSeed {
    pub via: ArrivalId,
    pub from_stop: StopIndex,
    pub to_stop: StopIndex,
    pub earliest_departure: TransitTime,
    pub c1: i32,
    pub round: u32,
}

/// Which stops observe their arrivals, and how.
///
/// # Examples
///
/// ```
/// use raptor_core::arrivals::ListenerSetup;
/// use raptor_core::domain::{AccessEgress, StopIndex};
///
/// let setup = ListenerSetup::new()
///     .debug_stop(StopIndex(4))
///     .egress(AccessEgress::new(StopIndex(2), 120, 0).unwrap());
/// assert_eq!(setup.egress_legs().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ListenerSetup {
    debug_stops: Vec<StopIndex>,
    chained: Vec<ChainedConnection>,
    egress: Vec<EgressLeg>,
    search_window: Option<SearchWindow>,
}

impl ListenerSetup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report events at `stop` to the table's debug handler.
    pub fn debug_stop(mut self, stop: StopIndex) -> Self {
        self.debug_stops.push(stop);
        self
    }

    pub fn chain(mut self, connection: ChainedConnection) -> Self {
        self.chained.push(connection);
        self
    }

    /// Project arrivals at the leg's stop to the destination.
    pub fn egress(mut self, leg: EgressLeg) -> Self {
        self.egress.push(leg);
        self
    }

    pub fn egress_all(mut self, legs: impl IntoIterator<Item = EgressLeg>) -> Self {
        self.egress.extend(legs);
        self
    }

    /// Score destination arrivals by whether they leave within `window`.
    pub fn search_window(mut self, window: SearchWindow) -> Self {
        self.search_window = Some(window);
        self
    }

    pub fn egress_legs(&self) -> &[EgressLeg] {
        &self.egress
    }

    pub fn window(&self) -> Option<SearchWindow> {
        self.search_window
    }

    /// Build one optional listener per stop.
    ///
    /// # Panics
    ///
    /// Panics if any configured stop is outside `0..number_of_stops`.
    pub(crate) fn build(&self, number_of_stops: usize) -> Vec<Option<ComposedListener>> {
        let check = |stop: StopIndex| {
            assert!(
                stop.0 < number_of_stops,
                "{stop} outside network of {number_of_stops} stops"
            );
            stop.0
        };

        let mut debug = vec![false; number_of_stops];
        let mut chained: Vec<Vec<ChainedConnection>> = vec![Vec::new(); number_of_stops];
        let mut egress: Vec<Vec<EgressLeg>> = vec![Vec::new(); number_of_stops];

        for stop in &self.debug_stops {
            debug[check(*stop)] = true;
        }
        for connection in &self.chained {
            chained[check(connection.from_stop)].push(*connection);
        }
        for leg in &self.egress {
            egress[check(leg.stop())].push(leg.clone());
        }

        debug
            .into_iter()
            .zip(chained)
            .zip(egress)
            .map(|((debug, chained), egress)| ComposedListener::compose(debug, chained, egress))
            .collect()
    }
}

/// One reaction to an accepted stop arrival.
#[derive(Debug, Clone, PartialEq)]
pub enum StopObserver {
    Debug,
    RoundChain(Vec<ChainedConnection>),
    Destination(Vec<EgressLeg>),
}

/// The observers of one stop, in their fixed order.
#[derive(Debug, Clone, PartialEq)]
pub struct ComposedListener {
    observers: Vec<StopObserver>,
}

impl ComposedListener {
    /// Compose the active observers, or return `None` if there are none.
    pub fn compose(
        debug: bool,
        chained: Vec<ChainedConnection>,
        egress: Vec<EgressLeg>,
    ) -> Option<Self> {
        let mut observers = Vec::with_capacity(3);
        if debug {
            observers.push(StopObserver::Debug);
        }
        if !chained.is_empty() {
            observers.push(StopObserver::RoundChain(chained));
        }
        if !egress.is_empty() {
            observers.push(StopObserver::Destination(egress));
        }
        (!observers.is_empty()).then_some(Self { observers })
    }

    pub fn observers(&self) -> &[StopObserver] {
        &self.observers
    }

    pub fn has_debug(&self) -> bool {
        matches!(self.observers.first(), Some(StopObserver::Debug))
    }
}

/// Routes front events of one stop to the table's observers.
pub(crate) struct GlueDispatch<'a, T, D> {
    pub listener: &'a ComposedListener,
    pub arena: &'a ArrivalArena<T>,
    pub debug: &'a mut D,
    pub seeds: &'a mut Vec<ChainedSeed>,
    pub destination: &'a mut DestinationCollector,
}

impl<T, D: DebugHandler<T>> ParetoSetEventListener<ArrivalEntry> for GlueDispatch<'_, T, D> {
    fn notify_element_added(&mut self, added: &ArrivalEntry) {
        let (listener, arena) = (self.listener, self.arena);
        let arrival = arena.get(added.id);
        for observer in listener.observers() {
            match observer {
                StopObserver::Debug => self.debug.accepted(added.id, arrival),
                StopObserver::RoundChain(connections) => {
                    self.seeds.extend(connections.iter().map(|c| ChainedSeed {
                        via: added.id,
                        from_stop: c.from_stop,
                        to_stop: c.to_stop,
                        earliest_departure: arrival.arrival_time() + c.min_wait,
                        c1: arrival.c1(),
                        round: arrival.round(),
                    }));
                }
                StopObserver::Destination(legs) => {
                    for leg in legs {
                        let _ = self.destination.offer(arena, added.id, leg);
                    }
                }
            }
        }
    }

    fn notify_element_evicted(&mut self, evicted: &ArrivalEntry, by: &ArrivalEntry) {
        if self.listener.has_debug() {
            self.debug
                .evicted(self.arena.get(evicted.id), self.arena.get(by.id));
        }
    }
}

//! Stop arrivals and their per-stop Pareto fronts.
//!
//! Arrivals are stored once in an [`ArrivalArena`] and referenced by
//! [`ArrivalId`]. The [`StopArrivalTable`] keeps, for every stop, the front
//! of arrivals no other arrival at that stop dominates, tracks which stops
//! improved during the current round, and forwards accepted arrivals to
//! the observers configured in a [`ListenerSetup`].

mod arena;
mod debug;
mod entry;
mod glue;
mod stop_arrival;
mod table;
mod touched;

pub use arena::{ArrivalArena, ArrivalId, Chain};
pub use debug::{DebugHandler, NoopDebugHandler, TracingDebugHandler};
pub use entry::{ArrivalEntry, StopArrivalComparator};
pub use glue::{ChainedConnection, ChainedSeed, ComposedListener, ListenerSetup, StopObserver};
pub use stop_arrival::{ArrivalKind, ArrivalMode, StopArrival, TransitRide};
pub use table::StopArrivalTable;
pub use touched::TouchedStops;

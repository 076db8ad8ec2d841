//! Pareto sets.
//!
//! A Pareto set keeps every item that no other item dominates. The
//! dominance relation is supplied by the caller, so the same container
//! serves per-stop arrivals, destination arrivals and the relaxed
//! direct-search paths.

mod comparator;
mod set;

pub use comparator::ParetoComparator;
pub use set::{AddOutcome, NoopListener, ParetoSet, ParetoSetEventListener};

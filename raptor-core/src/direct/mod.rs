//! Relaxed direct transit search.
//!
//! Finds one-seat rides from an access stop to an egress stop without
//! running the full round-based search. Results are kept in a Pareto set
//! whose cost comparison is widened by a relax function, so rides that are
//! nearly as cheap as the best one survive alongside it.

mod comparator;
mod request;
mod search;


pub use comparator::RelaxedPathComparator;
pub use request::{DirectTransitRequest, DirectTransitRequestBuilder, RequestError};
pub use search::{DirectTransitResult, DirectTransitSearch, SearchError};

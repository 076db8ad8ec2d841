//! Multi-criteria transit search core.
//!
//! The building blocks of a Range-RAPTOR router: Pareto sets, per-stop
//! arrival tables with round markers, projection of stop arrivals to the
//! destination, and a relaxed search for one-seat rides that supplements
//! the full search.

pub mod arrivals;
pub mod config;
pub mod destination;
pub mod direct;
pub mod domain;
pub mod pareto;
pub mod path;
pub mod timetable;
pub mod transit;

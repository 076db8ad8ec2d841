//! The transit data seam.
//!
//! Searches read the timetable only through [`TransitDataProvider`]. A
//! provider is an immutable snapshot: it can be shared between any number
//! of concurrent searches without locking.

mod pattern;
mod provider;
mod slack;
mod trip;

pub use pattern::RoutePattern;
pub use provider::{TransitDataProvider, TripBoarding};
pub use slack::SlackTable;
pub use trip::TripSchedule;

//! Domain types for the transit search core.
//!
//! This module contains the small value types shared by every other
//! module: times, stop/route indices, access/egress legs and the relax
//! function. All types enforce their invariants at construction time.

mod error;
mod leg;
mod mode;
mod relax;
mod stop;
mod time;
mod window;

pub use error::DomainError;
pub use leg::{AccessEgress, AccessLeg, EgressLeg};
pub use mode::TransitMode;
pub use relax::RelaxFunction;
pub use stop::{RouteIndex, StopIndex};
pub use time::{TimeError, TransitTime};
pub use window::SearchWindow;

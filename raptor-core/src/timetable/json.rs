//! JSON timetable format.
//!
//! ```json
//! {
//!   "stops": 3,
//!   "slack": { "board": 60 },
//!   "routes": [
//!     {
//!       "mode": "bus",
//!       "stops": [0, 1, 2],
//!       "no_boarding": [2],
//!       "trips": [
//!         { "id": "t1", "times": ["08:10:00", "08:15:00", "08:20:00"] },
//!         { "id": "t2", "arrivals": [29400, 30000, 30600],
//!                       "departures": [29400, 30060, 30600] }
//!       ]
//!     }
//!   ]
//! }
//! ```
//!
//! Times are either seconds since the service-day origin or `HH:MM:SS`.

use serde::Deserialize;

use crate::domain::{RouteIndex, StopIndex, TransitMode, TransitTime};
use crate::transit::{RoutePattern, SlackTable};

use super::{TimetableBuilder, TimetableError, TripTimes};

#[derive(Debug, Deserialize)]
pub(super) struct TimetableJson {
    stops: usize,
    #[serde(default)]
    slack: SlackTable,
    routes: Vec<RouteJson>,
}

#[derive(Debug, Deserialize)]
struct RouteJson {
    mode: TransitMode,
    stops: Vec<StopIndex>,
    #[serde(default)]
    no_boarding: Vec<usize>,
    #[serde(default)]
    no_alighting: Vec<usize>,
    trips: Vec<TripJson>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TripJson {
    Uniform {
        id: String,
        times: Vec<TransitTime>,
    },
    Split {
        id: String,
        arrivals: Vec<TransitTime>,
        departures: Vec<TransitTime>,
    },
}

impl From<TripJson> for TripTimes {
    fn from(trip: TripJson) -> Self {
        match trip {
            TripJson::Uniform { id, times } => TripTimes::uniform(id, times),
            TripJson::Split {
                id,
                arrivals,
                departures,
            } => TripTimes::new(id, arrivals, departures),
        }
    }
}

impl TimetableJson {
    pub(super) fn into_builder(self) -> Result<TimetableBuilder, TimetableError> {
        let mut builder = TimetableBuilder::new(self.stops);
        builder.slack(self.slack);

        for (i, route) in self.routes.into_iter().enumerate() {
            let len = route.stops.len();
            let check = |pos: usize| {
                if pos < len {
                    Ok(pos)
                } else {
                    Err(TimetableError::RestrictionOutOfRange {
                        route: RouteIndex(i),
                        pos,
                        len,
                    })
                }
            };

            let mut pattern = RoutePattern::new(route.mode, route.stops);
            for pos in route.no_boarding {
                pattern = pattern.with_no_boarding_at(check(pos)?);
            }
            for pos in route.no_alighting {
                pattern = pattern.with_no_alighting_at(check(pos)?);
            }
            let trips = route.trips.into_iter().map(TripTimes::from).collect();
            builder.add_route(pattern, trips);
        }
        Ok(builder)
    }
}

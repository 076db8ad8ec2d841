//! Search configuration.
//!
//! Every field has a default, so a config file only needs the values it
//! changes:
//!
//! ```
//! use raptor_core::config::SearchConfig;
//!
//! let config = SearchConfig::from_json(r#"{ "search_window_secs": 1800 }"#).unwrap();
//! assert_eq!(config.search_window_secs, 1800);
//! assert_eq!(config.cost.board_cost, 60_000);
//! ```

use serde::{Deserialize, Serialize};

use crate::direct::DirectTransitRequestBuilder;
use crate::domain::{DomainError, RelaxFunction, TransitTime};
use crate::transit::SlackTable;

/// Default length of the departure window.
pub const DEFAULT_SEARCH_WINDOW_SECS: i32 = 3600;

/// Errors in a [`SearchConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("search window must not be negative: {0}s")]
    NegativeSearchWindow(i32),

    #[error("{name} must be a finite, non-negative number, got {value}")]
    InvalidReluctance { name: &'static str, value: f64 },
}

/// Generalized-cost parameters.
///
/// Costs are in centi-seconds: one second of riding at reluctance 1.0
/// costs 100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostModel {
    /// Fixed cost per boarding.
    pub board_cost: i32,

    /// Multiplier for time spent on board.
    pub transit_reluctance: f64,

    /// Multiplier for time spent waiting at a stop.
    pub wait_reluctance: f64,
}

impl Default for CostModel {
    fn default() -> Self {
        Self {
            board_cost: 60_000, // 10 minutes
            transit_reluctance: 1.0,
            wait_reluctance: 1.0,
        }
    }
}

impl CostModel {
    /// Cost of one ride: boarding, `wait` seconds at the stop, then
    /// `in_vehicle` seconds on board.
    pub fn transit_cost(&self, wait: i32, in_vehicle: i32) -> i32 {
        let weighted =
            self.wait_reluctance * f64::from(wait) + self.transit_reluctance * f64::from(in_vehicle);
        self.board_cost + (weighted * 100.0).round() as i32
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_cost < 0 {
            return Err(DomainError::NegativeCost(self.board_cost).into());
        }
        for (name, value) in [
            ("transit_reluctance", self.transit_reluctance),
            ("wait_reluctance", self.wait_reluctance),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidReluctance { name, value });
            }
        }
        Ok(())
    }
}

/// Configuration shared by the searches of one deployment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Length of the departure window (seconds).
    pub search_window_secs: i32,

    /// Tolerance applied to cost comparisons of direct transit results.
    pub relax_c1: RelaxFunction,

    pub cost: CostModel,

    /// Slack that replaces the timetable's own when loading it with
    /// [`Timetable::from_json_with_config`]. `None` keeps the timetable's.
    ///
    /// [`Timetable::from_json_with_config`]: crate::timetable::Timetable::from_json_with_config
    pub slack: Option<SlackTable>,

    /// Upper bound on routes scanned per direct search; `None` scans all.
    pub max_routes: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            search_window_secs: DEFAULT_SEARCH_WINDOW_SECS,
            relax_c1: RelaxFunction::DIRECT_TRANSIT,
            cost: CostModel::default(),
            slack: None,
            max_routes: None,
        }
    }
}

impl SearchConfig {
    /// Parse a config from JSON and validate it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SearchConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search_window_secs < 0 {
            return Err(ConfigError::NegativeSearchWindow(self.search_window_secs));
        }
        self.relax_c1.validate()?;
        self.cost.validate()?;
        if let Some(slack) = &self.slack {
            slack.validate()?;
        }
        Ok(())
    }

    /// Start a direct transit request with this config's window and
    /// relax function.
    pub fn request_builder(&self, earliest_departure_time: TransitTime) -> DirectTransitRequestBuilder {
        DirectTransitRequestBuilder::default()
            .earliest_departure_time(earliest_departure_time)
            .search_window_secs(self.search_window_secs)
            .relax_c1(self.relax_c1)
    }
}

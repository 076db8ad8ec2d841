//! Boarding, alighting and transfer slack.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, TransitMode};

/// Slack times in seconds, with optional per-mode overrides.
///
/// # Examples
///
/// ```
/// use raptor_core::domain::TransitMode;
/// use raptor_core::transit::SlackTable;
///
/// let table: SlackTable = serde_json::from_str(
///     r#"{"board": 30, "board_by_mode": {"rail": 120}}"#,
/// ).unwrap();
/// assert_eq!(table.board_slack(TransitMode::Bus), 30);
/// assert_eq!(table.board_slack(TransitMode::Rail), 120);
/// assert_eq!(table.transfer_slack(), 120);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlackTable {
    pub board: i32,
    pub alight: i32,
    pub transfer: i32,
    pub board_by_mode: HashMap<TransitMode, i32>,
    pub alight_by_mode: HashMap<TransitMode, i32>,
}

impl Default for SlackTable {
    fn default() -> Self {
        Self {
            board: 0,
            alight: 0,
            transfer: 120,
            board_by_mode: HashMap::new(),
            alight_by_mode: HashMap::new(),
        }
    }
}

impl SlackTable {
    pub fn board_slack(&self, mode: TransitMode) -> i32 {
        self.board_by_mode.get(&mode).copied().unwrap_or(self.board)
    }

    pub fn alight_slack(&self, mode: TransitMode) -> i32 {
        self.alight_by_mode.get(&mode).copied().unwrap_or(self.alight)
    }

    pub fn transfer_slack(&self) -> i32 {
        self.transfer
    }

    /// Check that every slack is non-negative.
    pub fn validate(&self) -> Result<(), DomainError> {
        let all = [self.board, self.alight, self.transfer]
            .into_iter()
            .chain(self.board_by_mode.values().copied())
            .chain(self.alight_by_mode.values().copied());
        for slack in all {
            if slack < 0 {
                return Err(DomainError::NegativeDuration(slack));
            }
        }
        Ok(())
    }
}

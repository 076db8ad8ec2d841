//! Transit modes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The vehicle type of a route, used to look up mode-specific slack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransitMode {
    Bus,
    Tram,
    Subway,
    Rail,
    Ferry,
    Other,
}

impl fmt::Display for TransitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TransitMode::Bus => "bus",
            TransitMode::Tram => "tram",
            TransitMode::Subway => "subway",
            TransitMode::Rail => "rail",
            TransitMode::Ferry => "ferry",
            TransitMode::Other => "other",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_lowercase() {
        let mode: TransitMode = serde_json::from_str(r#""rail""#).unwrap();
        assert_eq!(mode, TransitMode::Rail);
        assert_eq!(serde_json::to_string(&TransitMode::Bus).unwrap(), r#""bus""#);
        assert!(serde_json::from_str::<TransitMode>(r#""Rail""#).is_err());
    }

    #[test]
    fn display_matches_serde_name() {
        assert_eq!(TransitMode::Subway.to_string(), "subway");
    }
}

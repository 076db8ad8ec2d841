//! Direct transit requests.

use crate::config::DEFAULT_SEARCH_WINDOW_SECS;
use crate::domain::{AccessLeg, DomainError, EgressLeg, RelaxFunction, SearchWindow, TransitTime};

/// Errors from building a [`DirectTransitRequest`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RequestError {
    #[error("earliest departure time is required")]
    MissingEarliestDepartureTime,

    #[error("at least one access path required")]
    NoAccessPaths,

    #[error("at least one egress path required")]
    NoEgressPaths,

    #[error("search window must not be negative: {0}s")]
    NegativeSearchWindow(i32),

    #[error(transparent)]
    InvalidRelaxFunction(#[from] DomainError),
}

/// A validated direct transit request.
///
/// # Examples
///
/// ```
/// use raptor_core::direct::{DirectTransitRequest, RequestError};
/// use raptor_core::domain::{AccessEgress, StopIndex, TransitTime};
///
/// let err = DirectTransitRequest::builder()
///     .earliest_departure_time(TransitTime::hms(8, 0, 0))
///     .egress(AccessEgress::new(StopIndex(2), 120, 0).unwrap())
///     .build()
///     .unwrap_err();
/// assert_eq!(err, RequestError::NoAccessPaths);
/// assert_eq!(err.to_string(), "at least one access path required");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DirectTransitRequest {
    earliest_departure_time: TransitTime,
    search_window_secs: i32,
    relax_c1: RelaxFunction,
    access: Vec<AccessLeg>,
    egress: Vec<EgressLeg>,
}

impl DirectTransitRequest {
    pub fn builder() -> DirectTransitRequestBuilder {
        DirectTransitRequestBuilder::default()
    }

    pub fn earliest_departure_time(&self) -> TransitTime {
        self.earliest_departure_time
    }

    pub fn search_window_secs(&self) -> i32 {
        self.search_window_secs
    }

    /// Returns the window that path start times must fall in.
    pub fn search_window(&self) -> SearchWindow {
        SearchWindow::new(self.earliest_departure_time, self.search_window_secs)
    }

    pub fn relax_c1(&self) -> RelaxFunction {
        self.relax_c1
    }

    /// Returns the access legs; never empty.
    pub fn access(&self) -> &[AccessLeg] {
        &self.access
    }

    /// Returns the egress legs; never empty.
    pub fn egress(&self) -> &[EgressLeg] {
        &self.egress
    }
}

/// Builder for [`DirectTransitRequest`].
#[derive(Debug, Clone)]
pub struct DirectTransitRequestBuilder {
    earliest_departure_time: Option<TransitTime>,
    search_window_secs: i32,
    relax_c1: RelaxFunction,
    access: Vec<AccessLeg>,
    egress: Vec<EgressLeg>,
}

impl Default for DirectTransitRequestBuilder {
    fn default() -> Self {
        Self {
            earliest_departure_time: None,
            search_window_secs: DEFAULT_SEARCH_WINDOW_SECS,
            relax_c1: RelaxFunction::NORMAL,
            access: Vec::new(),
            egress: Vec::new(),
        }
    }
}

impl DirectTransitRequestBuilder {
    pub fn earliest_departure_time(mut self, time: TransitTime) -> Self {
        self.earliest_departure_time = Some(time);
        self
    }

    pub fn search_window_secs(mut self, secs: i32) -> Self {
        self.search_window_secs = secs;
        self
    }

    pub fn relax_c1(mut self, relax: RelaxFunction) -> Self {
        self.relax_c1 = relax;
        self
    }

    pub fn access(mut self, leg: AccessLeg) -> Self {
        self.access.push(leg);
        self
    }

    pub fn access_all(mut self, legs: impl IntoIterator<Item = AccessLeg>) -> Self {
        self.access.extend(legs);
        self
    }

    pub fn egress(mut self, leg: EgressLeg) -> Self {
        self.egress.push(leg);
        self
    }

    pub fn egress_all(mut self, legs: impl IntoIterator<Item = EgressLeg>) -> Self {
        self.egress.extend(legs);
        self
    }

    /// Validate and build the request.
    pub fn build(self) -> Result<DirectTransitRequest, RequestError> {
        let earliest_departure_time = self
            .earliest_departure_time
            .ok_or(RequestError::MissingEarliestDepartureTime)?;
        if self.search_window_secs < 0 {
            return Err(RequestError::NegativeSearchWindow(self.search_window_secs));
        }
        if self.access.is_empty() {
            return Err(RequestError::NoAccessPaths);
        }
        if self.egress.is_empty() {
            return Err(RequestError::NoEgressPaths);
        }
        self.relax_c1.validate()?;

        Ok(DirectTransitRequest {
            earliest_departure_time,
            search_window_secs: self.search_window_secs,
            relax_c1: self.relax_c1,
            access: self.access,
            egress: self.egress,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AccessEgress, StopIndex};

    fn leg(stop: usize) -> AccessEgress {
        AccessEgress::new(StopIndex(stop), 60, 0).unwrap()
    }

    fn complete() -> DirectTransitRequestBuilder {
        DirectTransitRequest::builder()
            .earliest_departure_time(TransitTime::hms(8, 0, 0))
            .access(leg(0))
            .egress(leg(2))
    }

    #[test]
    fn valid_request() {
        let request = complete()
            .search_window_secs(1800)
            .access_all([leg(1)])
            .egress_all([leg(3), leg(4)])
            .build()
            .unwrap();

        assert_eq!(request.earliest_departure_time(), TransitTime::hms(8, 0, 0));
        assert_eq!(request.access().len(), 2);
        assert_eq!(request.egress().len(), 3);
        assert_eq!(request.search_window().end(), TransitTime::hms(8, 30, 0));
        assert!(request.relax_c1().is_normal());
    }

    #[test]
    fn default_window() {
        let request = complete().build().unwrap();
        assert_eq!(request.search_window_secs(), DEFAULT_SEARCH_WINDOW_SECS);
    }

    #[test]
    fn zero_window_allowed() {
        assert!(complete().search_window_secs(0).build().is_ok());
    }

    #[test]
    fn missing_earliest_departure_time() {
        let err = DirectTransitRequest::builder()
            .access(leg(0))
            .egress(leg(1))
            .build()
            .unwrap_err();
        assert_eq!(err, RequestError::MissingEarliestDepartureTime);
    }

    #[test]
    fn missing_legs() {
        let err = DirectTransitRequest::builder()
            .earliest_departure_time(TransitTime::ORIGIN)
            .egress(leg(1))
            .build()
            .unwrap_err();
        assert_eq!(err.to_string(), "at least one access path required");

        let err = DirectTransitRequest::builder()
            .earliest_departure_time(TransitTime::ORIGIN)
            .access(leg(1))
            .build()
            .unwrap_err();
        assert_eq!(err, RequestError::NoEgressPaths);
    }

    #[test]
    fn negative_window() {
        let err = complete().search_window_secs(-1).build().unwrap_err();
        assert_eq!(err, RequestError::NegativeSearchWindow(-1));
    }

    #[test]
    fn invalid_relax_function() {
        let relax: RelaxFunction = serde_json::from_str(r#"{"ratio": 0.8, "slack": 0}"#).unwrap();
        let err = complete().relax_c1(relax).build().unwrap_err();
        assert!(matches!(
            err,
            RequestError::InvalidRelaxFunction(DomainError::InvalidRelaxFunction { .. })
        ));
    }
}

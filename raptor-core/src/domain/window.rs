//! Search windows.

use serde::Serialize;

use super::TransitTime;

/// A half-open departure window `[earliest, earliest + duration)`.
///
/// # Examples
///
/// ```
/// use raptor_core::domain::{SearchWindow, TransitTime};
///
/// let window = SearchWindow::new(TransitTime::hms(8, 0, 0), 1800);
/// assert!(window.contains(TransitTime::hms(8, 0, 0)));
/// assert!(window.contains(TransitTime::from_seconds(30_599)));
/// assert!(!window.contains(TransitTime::from_seconds(30_600)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchWindow {
    earliest: TransitTime,
    duration: i32,
}

impl SearchWindow {
    /// Create a window. A negative duration is treated as empty.
    pub fn new(earliest: TransitTime, duration: i32) -> Self {
        Self {
            earliest,
            duration: duration.max(0),
        }
    }

    pub fn earliest(&self) -> TransitTime {
        self.earliest
    }

    /// Returns the window length in seconds.
    pub fn duration(&self) -> i32 {
        self.duration
    }

    /// Returns the exclusive upper bound.
    pub fn end(&self) -> TransitTime {
        self.earliest + self.duration
    }

    /// Returns true if `time` lies in `[earliest, end)`.
    pub fn contains(&self, time: TransitTime) -> bool {
        time >= self.earliest && time < self.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_open() {
        let w = SearchWindow::new(TransitTime::from_seconds(100), 10);
        assert!(!w.contains(TransitTime::from_seconds(99)));
        assert!(w.contains(TransitTime::from_seconds(100)));
        assert!(w.contains(TransitTime::from_seconds(109)));
        assert!(!w.contains(TransitTime::from_seconds(110)));
        assert_eq!(w.end(), TransitTime::from_seconds(110));
    }

    #[test]
    fn zero_length_window_is_empty() {
        let w = SearchWindow::new(TransitTime::from_seconds(100), 0);
        assert!(!w.contains(TransitTime::from_seconds(100)));
    }

    #[test]
    fn negative_duration_clamped() {
        let w = SearchWindow::new(TransitTime::from_seconds(100), -5);
        assert_eq!(w.duration(), 0);
    }
}

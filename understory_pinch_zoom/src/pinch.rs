// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two-pointer pinch tracking for hosts without a platform scale detector.
//!
//! [`PinchTracker`] turns two pointer positions per frame into incremental
//! span ratios and a midpoint focus, the values
//! [`GestureRouter::on_scale`](crate::gesture::GestureRouter::on_scale) expects.
//!
//! ```
//! use kurbo::Point;
//! use understory_pinch_zoom::pinch::PinchTracker;
//!
//! let mut tracker = PinchTracker::default();
//! assert!(tracker.begin(Point::new(0.0, 0.0), Point::new(100.0, 0.0)));
//!
//! let step = tracker.update(Point::new(-25.0, 0.0), Point::new(125.0, 0.0)).unwrap();
//! assert_eq!(step.factor, 1.5);
//! assert_eq!(step.focus, Point::new(50.0, 0.0));
//! ```

use kurbo::Point;

/// Pointers closer than this (in pixels) do not start a pinch; the span ratio
/// would be dominated by jitter.
pub const DEFAULT_MIN_SPAN: f64 = 10.0;

/// One incremental pinch step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchStep {
    /// Current span divided by the span of the previous step.
    pub factor: f64,
    /// Midpoint between the two pointers.
    pub focus: Point,
}

/// Tracks the distance between two pointers across a pinch.
#[derive(Clone, Debug, PartialEq)]
pub struct PinchTracker {
    min_span: f64,
    last_span: Option<f64>,
}

impl Default for PinchTracker {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_SPAN)
    }
}

impl PinchTracker {
    /// Creates a tracker that ignores pinches starting closer than `min_span`.
    #[must_use]
    pub fn new(min_span: f64) -> Self {
        Self {
            min_span,
            last_span: None,
        }
    }

    /// Starts tracking. Returns `false`, and stays inactive, when the pointers
    /// are too close together.
    pub fn begin(&mut self, a: Point, b: Point) -> bool {
        let span = a.distance(b);
        if span < self.min_span {
            self.last_span = None;
            return false;
        }
        self.last_span = Some(span);
        true
    }

    /// Reports the step since the previous call, or `None` when inactive.
    ///
    /// A step that would collapse the span to zero is skipped so the next
    /// factor stays finite.
    pub fn update(&mut self, a: Point, b: Point) -> Option<PinchStep> {
        let last = self.last_span?;
        let span = a.distance(b);
        if span <= 0.0 {
            return None;
        }
        self.last_span = Some(span);
        Some(PinchStep {
            factor: span / last,
            focus: a.midpoint(b),
        })
    }

    /// Stops tracking.
    pub fn end(&mut self) {
        self.last_span = None;
    }

    /// Whether a pinch is being tracked.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.last_span.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn close_pointers_do_not_start_a_pinch() {
        let mut tracker = PinchTracker::default();
        assert!(!tracker.begin(Point::new(0.0, 0.0), Point::new(3.0, 4.0)));
        assert!(!tracker.is_active());
        assert!(tracker.update(Point::new(0.0, 0.0), Point::new(30.0, 40.0)).is_none());
    }

    #[test]
    fn factors_are_incremental() {
        let mut tracker = PinchTracker::default();
        tracker.begin(Point::new(0.0, 0.0), Point::new(0.0, 100.0));

        let first = tracker
            .update(Point::new(0.0, 0.0), Point::new(0.0, 200.0))
            .unwrap();
        let second = tracker
            .update(Point::new(0.0, 0.0), Point::new(0.0, 100.0))
            .unwrap();

        assert_eq!(first.factor, 2.0);
        assert_eq!(second.factor, 0.5);
        assert_eq!(second.focus, Point::new(0.0, 50.0));
    }

    #[test]
    fn collapsed_span_is_skipped() {
        let mut tracker = PinchTracker::default();
        tracker.begin(Point::new(0.0, 0.0), Point::new(40.0, 0.0));

        let p = Point::new(20.0, 20.0);
        assert!(tracker.update(p, p).is_none());
        assert!(tracker.is_active());

        let step = tracker
            .update(Point::new(0.0, 0.0), Point::new(80.0, 0.0))
            .unwrap();
        assert_eq!(step.factor, 2.0);
    }

    #[test]
    fn end_deactivates() {
        let mut tracker = PinchTracker::new(1.0);
        assert!(tracker.begin(Point::new(0.0, 0.0), Point::new(2.0, 0.0)));
        tracker.end();
        assert!(!tracker.is_active());
    }
}

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture router: classify pointer samples into pans, zooms, and taps.
//!
//! ## Usage
//!
//! 1) Feed every pointer sample to [`GestureRouter::on_pointer`].
//! 2) When a scale detector recognizes a pinch, call
//!    [`GestureRouter::on_scale_begin`], then [`GestureRouter::on_scale`] for
//!    each step. While a pinch owns the gesture, moves are ignored.
//! 3) Act on the returned [`GestureOutcome`]s. The router never touches a
//!    transform itself.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use understory_pinch_zoom::gesture::{GestureOutcome, GestureRouter, PointerSample};
//!
//! let mut router = GestureRouter::default();
//!
//! assert_eq!(router.on_pointer(PointerSample::down(Point::new(10.0, 10.0))), None);
//! assert_eq!(
//!     router.on_pointer(PointerSample::moved(Point::new(30.0, 15.0))),
//!     Some(GestureOutcome::Pan(Vec2::new(20.0, 5.0)))
//! );
//! // Released far from where it started: a pan, not a tap.
//! assert_eq!(router.on_pointer(PointerSample::up(Point::new(30.0, 15.0))), None);
//! ```

use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};
use tracing::trace;
use understory_image_fit::ConfigError;

/// Distance in pixels a pointer must travel, on some axis, for a gesture to
/// count as a pan rather than a tap.
pub const DEFAULT_PAN_THRESHOLD: u32 = 3;

/// Which gesture currently owns the pointer stream.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TouchMode {
    /// No gesture in progress.
    #[default]
    None,
    /// A single pointer is down and moves pan the image.
    Pan,
    /// A pinch is in progress; pointer moves are left to the scale detector.
    Zoom,
}

/// Kind of a raw pointer sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerAction {
    /// The first pointer went down.
    Down,
    /// A pointer moved.
    Move,
    /// The last pointer went up.
    Up,
    /// A pointer went up while others remain down.
    SecondaryUp,
}

/// A raw pointer sample: position in viewport coordinates plus its action.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    /// Pointer position in viewport coordinates.
    pub position: Point,
    /// What happened.
    pub action: PointerAction,
}

impl PointerSample {
    /// Creates a sample.
    #[must_use]
    pub const fn new(position: Point, action: PointerAction) -> Self {
        Self { position, action }
    }

    /// A [`PointerAction::Down`] sample.
    #[must_use]
    pub const fn down(position: Point) -> Self {
        Self::new(position, PointerAction::Down)
    }

    /// A [`PointerAction::Move`] sample.
    #[must_use]
    pub const fn moved(position: Point) -> Self {
        Self::new(position, PointerAction::Move)
    }

    /// A [`PointerAction::Up`] sample.
    #[must_use]
    pub const fn up(position: Point) -> Self {
        Self::new(position, PointerAction::Up)
    }

    /// A [`PointerAction::SecondaryUp`] sample.
    #[must_use]
    pub const fn secondary_up(position: Point) -> Self {
        Self::new(position, PointerAction::SecondaryUp)
    }
}

/// What the host should do in response to an input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureOutcome {
    /// Pan by this delta (before bounds correction).
    Pan(Vec2),
    /// Zoom by a relative factor about a focus point.
    Zoom {
        /// Relative scale factor for this step.
        factor: f64,
        /// Focal point of the pinch in viewport coordinates.
        focus: Point,
    },
    /// The gesture resolved to a tap.
    Tap,
}

/// State machine over [`TouchMode`] that turns pointer samples into
/// [`GestureOutcome`]s.
#[derive(Clone, Debug, PartialEq)]
pub struct GestureRouter {
    pan_threshold: u32,
    touch_mode: TouchMode,
    first_touch: Option<Point>,
    last_touch: Option<Point>,
}

impl Default for GestureRouter {
    fn default() -> Self {
        Self {
            pan_threshold: DEFAULT_PAN_THRESHOLD,
            touch_mode: TouchMode::None,
            first_touch: None,
            last_touch: None,
        }
    }
}

impl GestureRouter {
    /// Processes one pointer sample.
    ///
    /// - Down records the first and last touch and enters [`TouchMode::Pan`].
    /// - Move, while panning, returns the delta since the last recorded touch.
    /// - Up leaves the gesture and reports a tap if the pointer stayed within
    ///   the pan threshold of the first touch on both axes.
    /// - Secondary up only leaves the gesture.
    pub fn on_pointer(&mut self, sample: PointerSample) -> Option<GestureOutcome> {
        let pos = sample.position;
        match sample.action {
            PointerAction::Down => {
                self.first_touch = Some(pos);
                self.last_touch = Some(pos);
                self.set_touch_mode(TouchMode::Pan);
                None
            }
            PointerAction::Move => {
                if self.touch_mode != TouchMode::Pan {
                    return None;
                }
                let last = self.last_touch.replace(pos)?;
                Some(GestureOutcome::Pan(pos - last))
            }
            PointerAction::Up => {
                self.set_touch_mode(TouchMode::None);
                let first = self.first_touch?;
                let threshold = f64::from(self.pan_threshold);
                let offset = pos - first;
                (offset.x.abs() < threshold && offset.y.abs() < threshold)
                    .then_some(GestureOutcome::Tap)
            }
            PointerAction::SecondaryUp => {
                self.set_touch_mode(TouchMode::None);
                None
            }
        }
    }

    /// A scale detector recognized the start of a pinch.
    pub fn on_scale_begin(&mut self) {
        self.set_touch_mode(TouchMode::Zoom);
    }

    /// A scale detector reported a pinch step.
    pub fn on_scale(&mut self, factor: f64, focus: Point) -> GestureOutcome {
        GestureOutcome::Zoom { factor, focus }
    }

    /// Forgets the current gesture. Called whenever the source image changes.
    pub fn reset(&mut self) {
        self.first_touch = None;
        self.last_touch = None;
        self.set_touch_mode(TouchMode::None);
    }

    /// Sets the pan threshold in pixels; it must be at least `1`.
    pub fn set_pan_threshold(&mut self, pan_threshold: i32) -> Result<(), ConfigError> {
        match u32::try_from(pan_threshold) {
            Ok(threshold) if threshold >= 1 => {
                self.pan_threshold = threshold;
                Ok(())
            }
            _ => Err(ConfigError::InvalidPanThreshold(pan_threshold)),
        }
    }

    /// Current pan threshold in pixels.
    #[must_use]
    pub fn pan_threshold(&self) -> u32 {
        self.pan_threshold
    }

    /// Current touch mode.
    #[must_use]
    pub fn touch_mode(&self) -> TouchMode {
        self.touch_mode
    }

    /// Position of the pointer-down that started the current gesture.
    #[must_use]
    pub fn first_touch(&self) -> Option<Point> {
        self.first_touch
    }

    /// Most recently recorded pointer position.
    #[must_use]
    pub fn last_touch(&self) -> Option<Point> {
        self.last_touch
    }

    pub(crate) fn restore(
        &mut self,
        pan_threshold: u32,
        touch_mode: TouchMode,
        first_touch: Option<Point>,
        last_touch: Option<Point>,
    ) {
        // A zero threshold could only come from a hand-edited state.
        self.pan_threshold = pan_threshold.max(1);
        self.touch_mode = touch_mode;
        self.first_touch = first_touch;
        self.last_touch = last_touch;
    }

    fn set_touch_mode(&mut self, mode: TouchMode) {
        if self.touch_mode != mode {
            trace!(from = ?self.touch_mode, to = ?mode, "touch mode");
            self.touch_mode = mode;
        }
    }
}

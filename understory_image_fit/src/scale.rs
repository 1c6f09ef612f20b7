// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Zoom factor computation and clamping.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `round`
use kurbo::Point;
use tracing::debug;

use crate::config::{
    BitmapConstraints, DEFAULT_MAX_SCALE_FACTOR, DEFAULT_MIN_SCALE_FACTOR, resolve_bound,
};
use crate::snapshot::CalculationSnapshot;

/// Result of a zoom request: the multiplier that can actually be applied and
/// the pivot to scale about.
///
/// Apply it with [`crate::ImageTransform::post_scale`], then run a bounds
/// check, since zooming can push an edge past its allowed position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleChange {
    /// Multiplier to apply to the current transform. Equal on both axes.
    pub multiplier: f64,
    /// Pivot point in viewport coordinates.
    pub focus: Point,
}

/// Tracks the absolute zoom factor and turns relative zoom requests into
/// clamped multipliers.
#[derive(Clone, Debug, PartialEq)]
pub struct ScaleController {
    scale_factor: f64,
}

impl Default for ScaleController {
    fn default() -> Self {
        Self::new()
    }
}

impl ScaleController {
    /// Creates a controller at actual size (factor `1.0`).
    #[must_use]
    pub const fn new() -> Self {
        Self { scale_factor: 1.0 }
    }

    /// Current absolute scale factor.
    #[must_use]
    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    /// Restores a previously saved scale factor without any clamping.
    pub fn restore(&mut self, scale_factor: f64) {
        self.scale_factor = scale_factor;
    }

    /// Applies a relative zoom request.
    ///
    /// The candidate factor `current * requested` is clamped by
    /// [`verify_scale_factor`] and stored; the returned multiplier is the one
    /// that takes the old factor to the stored one, so it differs from
    /// `requested` when clamped.
    ///
    /// Once the scaled bitmap (rounded to whole pixels) no longer overflows
    /// the viewport on at least one axis, the focus is moved to the viewport
    /// center; otherwise the gesture's `focus` is kept.
    pub fn scale(
        &mut self,
        requested: f64,
        focus: Point,
        snapshot: &CalculationSnapshot,
    ) -> ScaleChange {
        let old_factor = self.scale_factor;
        let constraints = &snapshot.constraints;
        self.scale_factor = verify_scale_factor(old_factor * requested, constraints);
        let multiplier = self.scale_factor / old_factor;
        if multiplier != requested {
            debug!(
                requested,
                applied = multiplier,
                scale_factor = self.scale_factor,
                "zoom request clamped"
            );
        }

        let source = constraints.source.to_size();
        let scaled_width = (source.width * self.scale_factor).round();
        let scaled_height = (source.height * self.scale_factor).round();
        let view = snapshot.viewport.size.to_size();
        let focus = if scaled_width <= view.width || scaled_height <= view.height {
            Point::new(view.width / 2.0, view.height / 2.0)
        } else {
            focus
        };

        ScaleChange { multiplier, focus }
    }

    /// Computes the fit-inside factor for a freshly loaded bitmap.
    ///
    /// Returns `None` without touching any state unless the controller is at
    /// actual size and the source bitmap size is known. Otherwise the factor
    /// that makes the larger bitmap dimension exactly fill the (padding
    /// adjusted) viewport is clamped, stored, and returned. The caller should
    /// replace the transform's scale with it and follow up with
    /// [`crate::translation::perform_initial_translation`].
    pub fn perform_initial_scale(&mut self, snapshot: &CalculationSnapshot) -> Option<f64> {
        if !self.is_actual_size_zoom_level() || snapshot.constraints.source.is_empty() {
            return None;
        }
        let adjusted = snapshot.viewport.adjusted_size();
        let source = snapshot.constraints.source.to_size();

        let desired_x = adjusted.width / source.width;
        let desired_y = adjusted.height / source.height;
        let fitted = desired_x.min(desired_y);

        self.scale_factor = verify_scale_factor(fitted, &snapshot.constraints);
        debug!(fitted, scale_factor = self.scale_factor, "initial fit");
        Some(self.scale_factor)
    }

    /// Returns `true` while no zoom has been applied (factor exactly `1.0`).
    #[must_use]
    pub fn is_actual_size_zoom_level(&self) -> bool {
        self.scale_factor == 1.0
    }

    /// Returns to actual size.
    pub fn reset(&mut self) {
        self.scale_factor = 1.0;
    }
}

/// Clamps an absolute scale factor so the scaled bitmap stays inside its
/// minimum and maximum sizes.
///
/// Four one-sided clamps run in sequence (minimum width, maximum width,
/// minimum height, maximum height), each on the previous one's output. With
/// contradictory limits the last violated clamp wins.
#[must_use]
pub fn verify_scale_factor(factor: f64, constraints: &BitmapConstraints) -> f64 {
    let source = constraints.source;
    let factor = clamp_to_min(factor, constraints.min_size.width, source.width);
    let factor = clamp_to_max(factor, constraints.max_size.width, source.width);
    let factor = clamp_to_min(factor, constraints.min_size.height, source.height);
    clamp_to_max(factor, constraints.max_size.height, source.height)
}

fn clamp_to_min(factor: f64, min_size: u32, source: u32) -> f64 {
    let min = resolve_bound(min_size, source, DEFAULT_MIN_SCALE_FACTOR);
    let source = f64::from(source);
    if factor * source < min {
        min / source
    } else {
        factor
    }
}

fn clamp_to_max(factor: f64, max_size: u32, source: u32) -> f64 {
    let max = resolve_bound(max_size, source, DEFAULT_MAX_SCALE_FACTOR);
    let source = f64::from(source);
    if factor * source > max {
        max / source
    } else {
        factor
    }
}

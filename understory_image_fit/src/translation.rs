// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pan bounds: keeping the scaled bitmap within its allowed region of the viewport.
//!
//! Every function here is a pure function of a [`CalculationSnapshot`] (or
//! one [`AxisView`] of it). Corrections are deltas to add to the current
//! translation; a correction of zero means the translation is already valid.
//!
//! Per axis, three checks run in priority order and the first non-zero
//! correction wins:
//!
//! 1. Axis pinning: an axis on which the bitmap fits is forced to the centered
//!    position.
//! 2. First edge: the bitmap may not move further towards the start (left or
//!    top) than its overflow plus the start slack and padding.
//! 3. Second edge: the mirror image for the end (right or bottom) edge.

use kurbo::Vec2;
use tracing::trace;

use crate::snapshot::{Axis, AxisView, CalculationSnapshot};

/// Applies a pan delta and returns the delta that actually keeps the bitmap in bounds.
///
/// `delta` is added to a copy of the snapshot's translation, the copy is
/// checked, and `delta + correction` is returned. Nothing is stored; the
/// caller post-translates its transform by the result.
#[must_use]
pub fn translate(delta: Vec2, snapshot: &CalculationSnapshot) -> Vec2 {
    let provisional = snapshot.with_translation_delta(delta);
    delta + corrections_for_translation(&provisional)
}

/// Correction that brings the snapshot's current translation back in bounds.
///
/// Used after a zoom or a viewport resize, when there is no pan delta.
/// Applying the result and checking again yields zero.
#[must_use]
pub fn check_translation_bounds(snapshot: &CalculationSnapshot) -> Vec2 {
    corrections_for_translation(snapshot)
}

/// Translation that centers the scaled bitmap in the viewport.
///
/// The start padding is subtracted whether or not the viewport crops to its
/// padding: the padding offset is already applied when the host draws the
/// image, so only this path compensates for it.
#[must_use]
pub fn perform_initial_translation(snapshot: &CalculationSnapshot) -> Vec2 {
    let view = snapshot.viewport.size.to_size();
    let scaled = snapshot.scaled_bitmap_size();
    let padding = &snapshot.viewport.padding;
    Vec2::new(
        (view.width - scaled.width) / 2.0 - f64::from(padding.left),
        (view.height - scaled.height) / 2.0 - f64::from(padding.top),
    )
}

/// Per-axis corrections for the snapshot's translation.
#[must_use]
pub fn corrections_for_translation(snapshot: &CalculationSnapshot) -> Vec2 {
    let correction = Vec2::new(
        correction_for_translation(&snapshot.axis(Axis::X)),
        correction_for_translation(&snapshot.axis(Axis::Y)),
    );
    if correction != Vec2::ZERO {
        trace!(x = correction.x, y = correction.y, "translation corrected");
    }
    correction
}

/// Correction for a single axis; see the module documentation for the order of checks.
#[must_use]
pub fn correction_for_translation(axis: &AxisView) -> f64 {
    let correction = pinned_axis_correction(axis);
    if correction != 0.0 {
        return correction;
    }
    let correction = first_edge_correction(axis);
    if correction != 0.0 {
        return correction;
    }
    second_edge_correction(axis)
}

/// Correction that centers a pinned axis on which the bitmap fits, else `0.0`.
#[must_use]
pub fn pinned_axis_correction(axis: &AxisView) -> f64 {
    if !axis.pin_axes_smaller_than_view || !axis.fits() {
        return 0.0;
    }
    let centered = (axis.view_size - axis.scaled_size) / 2.0 - axis.padding_start;
    centered - axis.translation
}

/// Correction for a translation past the start (left/top) edge, else `0.0`.
#[must_use]
pub fn first_edge_correction(axis: &AxisView) -> f64 {
    let edge = first_edge(axis);
    if axis.translation < edge {
        edge - axis.translation
    } else {
        0.0
    }
}

/// Correction for a translation past the end (right/bottom) edge, else `0.0`.
#[must_use]
pub fn second_edge_correction(axis: &AxisView) -> f64 {
    let edge = second_edge(axis);
    if axis.translation > edge {
        edge - axis.translation
    } else {
        0.0
    }
}

/// Smallest allowed translation along the axis.
///
/// The start padding is subtracted regardless of `crop_to_padding`, matching
/// [`perform_initial_translation`].
#[must_use]
pub fn first_edge(axis: &AxisView) -> f64 {
    0.0 - axis.overflow() - axis.translation_extra_start - axis.padding_start
}

/// Largest allowed translation along the axis.
///
/// The end padding is subtracted only when the viewport does not already
/// crop to its padding.
#[must_use]
pub fn second_edge(axis: &AxisView) -> f64 {
    let edge = axis.adjusted_view_size() - axis.scaled_size
        + axis.overflow()
        + axis.translation_extra_end;
    if axis.crop_to_padding {
        edge
    } else {
        edge - axis.padding_end
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Vec2;

    use super::*;
    use crate::config::{BitmapConstraints, Insets, PixelSize, ViewportConfig};
    use crate::transform::ImageTransform;

    fn snapshot_with(
        view: PixelSize,
        scaled_source: PixelSize,
        translation: Vec2,
    ) -> CalculationSnapshot {
        let viewport = ViewportConfig {
            size: view,
            pin_axes_smaller_than_view: false,
            ..ViewportConfig::default()
        };
        let constraints = BitmapConstraints {
            source: scaled_source,
            ..BitmapConstraints::default()
        };
        CalculationSnapshot::new(
            &ImageTransform::new(1.0, translation),
            &viewport,
            &constraints,
        )
    }

    #[test]
    fn second_edge_correction_pulls_back_by_excess() {
        let axis = AxisView {
            view_size: 500.0,
            scaled_size: 499.0,
            translation: 2.0,
            ..AxisView::default()
        };
        assert_eq!(second_edge_correction(&axis), -1.0);
    }

    #[test]
    fn second_edge_correction_allows_slack() {
        let axis = AxisView {
            view_size: 500.0,
            scaled_size: 499.0,
            translation: 1.0,
            ..AxisView::default()
        };
        assert_eq!(second_edge_correction(&axis), 0.0);
    }

    #[test]
    fn first_edge_correction_pushes_back_to_origin() {
        let axis = AxisView {
            translation: -1.0,
            ..AxisView::default()
        };
        assert_eq!(first_edge_correction(&axis), 1.0);

        let inside = AxisView {
            translation: 1.0,
            ..AxisView::default()
        };
        assert_eq!(first_edge_correction(&inside), 0.0);
    }

    #[test]
    fn pinned_axis_is_centered_inside_padding() {
        let axis = AxisView {
            pin_axes_smaller_than_view: true,
            scaled_size: 250.0,
            view_size: 500.0,
            padding_start: 50.0,
            translation: 5.0,
            ..AxisView::default()
        };
        assert_eq!(pinned_axis_correction(&axis), 70.0);
    }

    #[test]
    fn pinning_disabled_gives_no_correction() {
        let axis = AxisView {
            pin_axes_smaller_than_view: false,
            scaled_size: 250.0,
            view_size: 500.0,
            ..AxisView::default()
        };
        assert_eq!(pinned_axis_correction(&axis), 0.0);
    }

    #[test]
    fn pinned_axis_of_exact_fit_is_already_centered() {
        let axis = AxisView {
            pin_axes_smaller_than_view: true,
            scaled_size: 250.0,
            view_size: 250.0,
            ..AxisView::default()
        };
        assert_eq!(pinned_axis_correction(&axis), 0.0);
    }

    #[test]
    fn overflowing_axis_is_not_pinned() {
        let axis = AxisView {
            pin_axes_smaller_than_view: true,
            scaled_size: 600.0,
            view_size: 500.0,
            translation: 30.0,
            ..AxisView::default()
        };
        assert_eq!(pinned_axis_correction(&axis), 0.0);
        // Falls through to the second edge: at most 0.0 for a 100px overflow.
        assert_eq!(correction_for_translation(&axis), -30.0);
    }

    #[test]
    fn first_edge_includes_slack_and_padding() {
        let axis = AxisView {
            padding_start: 50.0,
            translation_extra_start: 50.0,
            ..AxisView::default()
        };
        assert_eq!(first_edge(&axis), -100.0);
    }

    #[test]
    fn first_edge_with_crop_to_padding_counts_trimmed_view_as_overflow() {
        let axis = AxisView {
            padding_start: 50.0,
            translation_extra_start: 50.0,
            crop_to_padding: true,
            ..AxisView::default()
        };
        assert_eq!(first_edge(&axis), -150.0);
    }

    #[test]
    fn second_edge_subtracts_end_padding_unless_cropping() {
        let axis = AxisView {
            padding_end: 50.0,
            translation_extra_end: 50.0,
            scaled_size: 500.0,
            view_size: 500.0,
            ..AxisView::default()
        };
        assert_eq!(second_edge(&axis), 0.0);

        let cropped = AxisView {
            crop_to_padding: true,
            ..axis
        };
        assert_eq!(second_edge(&cropped), 50.0);
    }

    #[test]
    fn corrections_are_independent_per_axis() {
        let snap = snapshot_with(
            PixelSize::new(500, 500),
            PixelSize::new(500, 500),
            Vec2::new(1.0, -3.0),
        );
        assert_eq!(corrections_for_translation(&snap), Vec2::new(-1.0, 3.0));
    }

    #[test]
    fn translate_returns_delta_plus_correction() {
        // 1000x1000 bitmap in a 500x500 view: translation may range over [-500, 0].
        let snap = snapshot_with(
            PixelSize::new(500, 500),
            PixelSize::new(1000, 1000),
            Vec2::new(-490.0, -10.0),
        );
        assert_eq!(translate(Vec2::new(-20.0, 5.0), &snap), Vec2::new(-10.0, 5.0));
        // The snapshot itself is untouched.
        assert_eq!(snap.translation, Vec2::new(-490.0, -10.0));
    }

    #[test]
    fn bounds_check_is_idempotent() {
        let mut snap = snapshot_with(
            PixelSize::new(300, 200),
            PixelSize::new(1000, 100),
            Vec2::new(250.0, -400.0),
        );
        let first = check_translation_bounds(&snap);
        assert_ne!(first, Vec2::ZERO);
        snap.translation += first;
        assert_eq!(check_translation_bounds(&snap), Vec2::ZERO);
    }

    #[test]
    fn initial_translation_centers_and_subtracts_start_padding() {
        let viewport = ViewportConfig {
            size: PixelSize::new(200, 200),
            padding: Insets::new(30, 30, 30, 30),
            ..ViewportConfig::default()
        };
        let constraints = BitmapConstraints {
            source: PixelSize::new(100, 100),
            ..BitmapConstraints::default()
        };
        let snap = CalculationSnapshot::new(&ImageTransform::IDENTITY, &viewport, &constraints);
        assert_eq!(perform_initial_translation(&snap), Vec2::new(20.0, 20.0));

        let cropped = CalculationSnapshot {
            viewport: ViewportConfig {
                crop_to_padding: true,
                ..viewport
            },
            ..snap
        };
        assert_eq!(perform_initial_translation(&cropped), Vec2::new(20.0, 20.0));
    }

    #[test]
    fn pinning_takes_priority_over_edges() {
        let viewport = ViewportConfig {
            size: PixelSize::new(400, 400),
            pin_axes_smaller_than_view: true,
            ..ViewportConfig::default()
        };
        let constraints = BitmapConstraints {
            source: PixelSize::new(100, 800),
            ..BitmapConstraints::default()
        };
        let snap = CalculationSnapshot::new(
            &ImageTransform::new(1.0, Vec2::new(-250.0, 0.0)),
            &viewport,
            &constraints,
        );
        // X fits and is re-centered at 150; Y overflows and is already in range.
        assert_eq!(check_translation_bounds(&snap), Vec2::new(400.0, 0.0));
    }
}

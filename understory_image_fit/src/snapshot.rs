// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Size, Vec2};

use crate::config::{BitmapConstraints, ViewportConfig};
use crate::transform::ImageTransform;

/// One of the two image axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal axis: widths, left/right insets.
    X,
    /// Vertical axis: heights, top/bottom insets.
    Y,
}

/// Everything a single scale or translation calculation reads.
///
/// Build one from live state immediately before each calculation and drop it
/// afterwards; it is a plain value and never outlives the call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CalculationSnapshot {
    /// Current uniform scale of the transform.
    pub scale: f64,
    /// Current translation of the transform, possibly with a provisional delta applied.
    pub translation: Vec2,
    /// Viewport geometry and configuration.
    pub viewport: ViewportConfig,
    /// Source bitmap size and scaled size limits.
    pub constraints: BitmapConstraints,
}

impl CalculationSnapshot {
    /// Captures the inputs for one calculation.
    #[must_use]
    pub fn new(
        transform: &ImageTransform,
        viewport: &ViewportConfig,
        constraints: &BitmapConstraints,
    ) -> Self {
        Self {
            scale: transform.scale,
            translation: transform.translation,
            viewport: *viewport,
            constraints: *constraints,
        }
    }

    /// Returns a copy with `delta` added to the translation.
    #[must_use]
    pub fn with_translation_delta(mut self, delta: Vec2) -> Self {
        self.translation += delta;
        self
    }

    /// Source bitmap size multiplied by the current scale.
    #[must_use]
    pub fn scaled_bitmap_size(&self) -> Size {
        self.constraints.source.to_size() * self.scale
    }

    /// Projects the snapshot onto one axis.
    #[must_use]
    pub fn axis(&self, axis: Axis) -> AxisView {
        let scaled = self.scaled_bitmap_size();
        let viewport = &self.viewport;
        let (scaled_size, translation, view_size) = match axis {
            Axis::X => (scaled.width, self.translation.x, viewport.size.width),
            Axis::Y => (scaled.height, self.translation.y, viewport.size.height),
        };
        let (padding_start, padding_end, extra_start, extra_end) = match axis {
            Axis::X => (
                viewport.padding.left,
                viewport.padding.right,
                viewport.translation_extra.left,
                viewport.translation_extra.right,
            ),
            Axis::Y => (
                viewport.padding.top,
                viewport.padding.bottom,
                viewport.translation_extra.top,
                viewport.translation_extra.bottom,
            ),
        };
        AxisView {
            scaled_size,
            translation,
            padding_start: f64::from(padding_start),
            padding_end: f64::from(padding_end),
            translation_extra_start: f64::from(extra_start),
            translation_extra_end: f64::from(extra_end),
            view_size: f64::from(view_size),
            crop_to_padding: viewport.crop_to_padding,
            pin_axes_smaller_than_view: viewport.pin_axes_smaller_than_view,
        }
    }
}

/// A [`CalculationSnapshot`] seen along a single axis.
///
/// "Start" is left/top and "end" is right/bottom. The bounds routines in
/// [`crate::translation`] only ever look at one of these, so the same code
/// handles both axes.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AxisView {
    /// Scaled bitmap size along the axis.
    pub scaled_size: f64,
    /// Current translation along the axis.
    pub translation: f64,
    /// Padding at the start edge.
    pub padding_start: f64,
    /// Padding at the end edge.
    pub padding_end: f64,
    /// Translation slack past the start edge.
    pub translation_extra_start: f64,
    /// Translation slack past the end edge.
    pub translation_extra_end: f64,
    /// Raw viewport size along the axis.
    pub view_size: f64,
    /// Whether the padding is excluded from the effective viewport.
    pub crop_to_padding: bool,
    /// Whether a fitting axis is pinned to the center.
    pub pin_axes_smaller_than_view: bool,
}

impl AxisView {
    /// Viewport size minus both paddings when cropping to padding, else the raw size.
    #[must_use]
    pub fn adjusted_view_size(&self) -> f64 {
        if self.crop_to_padding {
            self.view_size - (self.padding_start + self.padding_end)
        } else {
            self.view_size
        }
    }

    /// How far the scaled bitmap overflows the adjusted viewport, or `0.0` if it fits.
    #[must_use]
    pub fn overflow(&self) -> f64 {
        (self.scaled_size - self.adjusted_view_size()).max(0.0)
    }

    /// Returns `true` if the scaled bitmap fits within the adjusted viewport.
    #[must_use]
    pub fn fits(&self) -> bool {
        self.scaled_size <= self.adjusted_view_size()
    }
}

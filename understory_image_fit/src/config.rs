// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;
use serde::{Deserialize, Serialize};

/// Fraction of the intrinsic bitmap size used as the minimum scaled size when
/// no explicit minimum is configured.
pub const DEFAULT_MIN_SCALE_FACTOR: f64 = 0.25;

/// Fraction of the intrinsic bitmap size used as the maximum scaled size when
/// no explicit maximum is configured.
pub const DEFAULT_MAX_SCALE_FACTOR: f64 = 2.0;

/// Integer size in device pixels, as reported by a host's layout or image loader.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PixelSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl PixelSize {
    /// A size of zero on both axes.
    pub const ZERO: Self = Self::new(0, 0);

    /// Creates a new pixel size.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns `true` if either axis is zero.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Converts into a floating point [`Size`].
    #[must_use]
    pub fn to_size(self) -> Size {
        Size::new(f64::from(self.width), f64::from(self.height))
    }
}

/// Non-negative insets on each side of a rectangle, in pixels.
///
/// Used both for viewport padding and for translation-extra slack.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Insets {
    /// Left inset.
    pub left: u32,
    /// Top inset.
    pub top: u32,
    /// Right inset.
    pub right: u32,
    /// Bottom inset.
    pub bottom: u32,
}

impl Insets {
    /// Zero insets on every side.
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    /// Creates new insets.
    #[must_use]
    pub const fn new(left: u32, top: u32, right: u32, bottom: u32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Converts signed host values, returning `None` if any side is negative.
    #[must_use]
    pub fn from_signed(left: i32, top: i32, right: i32, bottom: i32) -> Option<Self> {
        Some(Self {
            left: u32::try_from(left).ok()?,
            top: u32::try_from(top).ok()?,
            right: u32::try_from(right).ok()?,
            bottom: u32::try_from(bottom).ok()?,
        })
    }

    /// Sum of the left and right insets.
    #[must_use]
    pub fn horizontal(&self) -> f64 {
        f64::from(self.left) + f64::from(self.right)
    }

    /// Sum of the top and bottom insets.
    #[must_use]
    pub fn vertical(&self) -> f64 {
        f64::from(self.top) + f64::from(self.bottom)
    }
}

/// Viewport geometry and the knobs controlling how an image may sit inside it.
///
/// The viewport size is refreshed on every layout pass; the remaining fields
/// are host configuration and take effect on the next calculation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewportConfig {
    /// Viewport size in pixels, before any padding adjustment.
    pub size: PixelSize,
    /// Padding insets of the viewport.
    pub padding: Insets,
    /// When set, fit and bounds calculations use the viewport minus its padding.
    pub crop_to_padding: bool,
    /// Extra slack allowing the image to be panned past each viewport edge.
    pub translation_extra: Insets,
    /// When set, an axis on which the image fits is kept centered and cannot be panned.
    pub pin_axes_smaller_than_view: bool,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            size: PixelSize::ZERO,
            padding: Insets::ZERO,
            crop_to_padding: false,
            translation_extra: Insets::ZERO,
            pin_axes_smaller_than_view: true,
        }
    }
}

impl ViewportConfig {
    /// Viewport size used for fitting: trimmed by the padding when
    /// `crop_to_padding` is set, otherwise the raw viewport size.
    ///
    /// The result may be negative when the padding exceeds the viewport.
    #[must_use]
    pub fn adjusted_size(&self) -> Size {
        let size = self.size.to_size();
        if self.crop_to_padding {
            Size::new(
                size.width - self.padding.horizontal(),
                size.height - self.padding.vertical(),
            )
        } else {
            size
        }
    }
}

/// Intrinsic source bitmap size and the allowed range of its scaled size.
///
/// A zero minimum or maximum on an axis means "unset"; see
/// [`BitmapConstraints::effective_min_size`] and
/// [`BitmapConstraints::effective_max_size`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BitmapConstraints {
    /// Intrinsic size of the source bitmap.
    pub source: PixelSize,
    /// Minimum scaled size per axis, `0` for unset.
    pub min_size: PixelSize,
    /// Maximum scaled size per axis, `0` for unset.
    pub max_size: PixelSize,
}

impl BitmapConstraints {
    /// Minimum scaled size, substituting [`DEFAULT_MIN_SCALE_FACTOR`] of the
    /// intrinsic size on unset axes.
    #[must_use]
    pub fn effective_min_size(&self) -> Size {
        Size::new(
            resolve_bound(self.min_size.width, self.source.width, DEFAULT_MIN_SCALE_FACTOR),
            resolve_bound(self.min_size.height, self.source.height, DEFAULT_MIN_SCALE_FACTOR),
        )
    }

    /// Maximum scaled size, substituting [`DEFAULT_MAX_SCALE_FACTOR`] of the
    /// intrinsic size on unset axes.
    #[must_use]
    pub fn effective_max_size(&self) -> Size {
        Size::new(
            resolve_bound(self.max_size.width, self.source.width, DEFAULT_MAX_SCALE_FACTOR),
            resolve_bound(self.max_size.height, self.source.height, DEFAULT_MAX_SCALE_FACTOR),
        )
    }
}

pub(crate) fn resolve_bound(configured: u32, source: u32, default_factor: f64) -> f64 {
    if configured == 0 {
        f64::from(source) * default_factor
    } else {
        f64::from(configured)
    }
}

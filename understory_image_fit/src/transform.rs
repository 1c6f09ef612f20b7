// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Vec2};
use serde::{Deserialize, Serialize};

/// Uniform scale plus translation mapping source bitmap pixels into the viewport.
///
/// A bitmap point `p` is drawn at `translation + scale * p`. This is the
/// transform state that the controllers read from and the host applies to
/// its image; rotation and non-uniform scale are not represented.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImageTransform {
    /// Uniform scale factor on both axes.
    pub scale: f64,
    /// Translation in viewport pixels, applied after scaling.
    pub translation: Vec2,
}

impl Default for ImageTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ImageTransform {
    /// Scale of `1.0` with no translation.
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        translation: Vec2::ZERO,
    };

    /// Creates a transform from a scale factor and a translation.
    #[must_use]
    pub const fn new(scale: f64, translation: Vec2) -> Self {
        Self { scale, translation }
    }

    /// Returns `true` for a scale of exactly `1.0` and zero translation.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Returns the equivalent [`Affine`], for handing to a renderer.
    #[must_use]
    pub fn to_affine(&self) -> Affine {
        Affine::translate(self.translation) * Affine::scale(self.scale)
    }

    /// Replaces the scale and clears the translation.
    pub fn set_scale(&mut self, scale: f64) {
        self.scale = scale;
        self.translation = Vec2::ZERO;
    }

    /// Scales the current transform by `factor` about `pivot` (in viewport space).
    ///
    /// The viewport point at `pivot` stays fixed.
    pub fn post_scale(&mut self, factor: f64, pivot: Point) {
        let pivot = pivot.to_vec2();
        self.scale *= factor;
        self.translation = pivot + (self.translation - pivot) * factor;
    }

    /// Translates the current transform by `delta` (in viewport space).
    pub fn post_translate(&mut self, delta: Vec2) {
        self.translation += delta;
    }

    /// Resets to [`ImageTransform::IDENTITY`].
    pub fn reset(&mut self) {
        *self = Self::IDENTITY;
    }
}

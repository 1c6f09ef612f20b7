// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_image_fit --heading-base-level=0

//! Understory Image Fit: constrained image-in-viewport transforms.
//!
//! This crate computes the uniform scale + translation that places a source
//! bitmap inside a rectangular viewport, and keeps it there while the user
//! zooms and pans. It focuses on:
//! - Fitting a new bitmap inside the (optionally padding-trimmed) viewport.
//! - Clamping zoom so the scaled bitmap stays between a minimum and maximum size.
//! - Correcting pans so the bitmap never drifts past the viewport edges by
//!   more than a configured slack, and keeping small axes centered.
//!
//! It does **not** interpret input events or own an image. Callers are
//! expected to:
//! - Keep an [`ImageTransform`], a [`ViewportConfig`] and a [`BitmapConstraints`].
//! - Build a [`CalculationSnapshot`] right before each calculation.
//! - Apply the returned multipliers and deltas to their transform.
//!
//! `understory_pinch_zoom` wires these pieces to a gesture state machine.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use understory_image_fit::{
//!     BitmapConstraints, CalculationSnapshot, ImageTransform, PixelSize, ScaleController,
//!     ViewportConfig, translation,
//! };
//!
//! let viewport = ViewportConfig {
//!     size: PixelSize::new(800, 600),
//!     ..ViewportConfig::default()
//! };
//! let constraints = BitmapConstraints {
//!     source: PixelSize::new(1600, 600),
//!     ..BitmapConstraints::default()
//! };
//! let mut transform = ImageTransform::IDENTITY;
//! let mut scale = ScaleController::new();
//!
//! // Fit the bitmap into the viewport and center it.
//! let snapshot = CalculationSnapshot::new(&transform, &viewport, &constraints);
//! let fitted = scale.perform_initial_scale(&snapshot).unwrap();
//! assert_eq!(fitted, 0.5);
//! transform.set_scale(fitted);
//! let snapshot = CalculationSnapshot::new(&transform, &viewport, &constraints);
//! transform.post_translate(translation::perform_initial_translation(&snapshot));
//! assert_eq!(transform.translation.y, 150.0);
//!
//! // Zoom in about a touch point, then pull the edges back in bounds.
//! let snapshot = CalculationSnapshot::new(&transform, &viewport, &constraints);
//! let change = scale.scale(1.5, Point::new(600.0, 300.0), &snapshot);
//! transform.post_scale(change.multiplier, change.focus);
//! let snapshot = CalculationSnapshot::new(&transform, &viewport, &constraints);
//! transform.post_translate(translation::check_translation_bounds(&snapshot));
//! ```
//!
//! ## Design notes
//!
//! - Scale is uniform; rotation and perspective are out of scope.
//! - Every update is computed from the current state and a single delta;
//!   there is no animation.
//! - All calculations are total: zero or degenerate sizes give degenerate
//!   results rather than errors. Only configuration is validated, see
//!   [`ConfigError`].
//!
//! This crate is `no_std`.

#![no_std]

mod config;
mod error;
pub mod scale;
mod snapshot;
mod transform;
pub mod translation;

pub use config::{
    BitmapConstraints, DEFAULT_MAX_SCALE_FACTOR, DEFAULT_MIN_SCALE_FACTOR, Insets, PixelSize,
    ViewportConfig,
};
pub use error::ConfigError;
pub use scale::{ScaleChange, ScaleController, verify_scale_factor};
pub use snapshot::{Axis, AxisView, CalculationSnapshot};
pub use transform::ImageTransform;

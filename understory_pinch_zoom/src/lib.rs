// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_pinch_zoom --heading-base-level=0

//! Understory Pinch Zoom: pinch-to-zoom and pan for an image in a viewport.
//!
//! This crate wires a gesture state machine to the constrained transform
//! math in `understory_image_fit`. It provides:
//! - [`gesture::GestureRouter`]: classifies pointer samples into pans, zooms and taps.
//! - [`pinch::PinchTracker`]: turns two pointers into pinch steps, for hosts
//!   without a platform scale detector.
//! - [`PinchToZoom`]: the engine a host widget owns. It keeps the image
//!   transform, applies gestures to it, and reports [`ZoomEvent`]s.
//! - [`PinchToZoomConfig`] and [`SavedState`]: serde-backed configuration
//!   and save/restore.
//!
//! It does **not** draw, load images, or receive platform events. Hosts
//! forward sizes and pointer samples and redraw with the transform they get
//! back.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use understory_image_fit::{ImageTransform, PixelSize};
//! use understory_pinch_zoom::gesture::PointerSample;
//! use understory_pinch_zoom::{PinchToZoom, ZoomEvent};
//!
//! let mut engine = PinchToZoom::new();
//! engine.set_source_image(PixelSize::new(1600, 600));
//!
//! // The first layout fits the image inside the viewport.
//! let fitted = engine.on_layout(PixelSize::new(800, 600));
//! assert_eq!(
//!     fitted,
//!     Some(ZoomEvent::TransformChanged(ImageTransform::new(0.5, Vec2::new(0.0, 150.0))))
//! );
//!
//! // Pinch out about the center.
//! engine.on_scale_begin();
//! engine.on_scale(2.0, Point::new(400.0, 300.0));
//! assert_eq!(engine.scale_factor(), 1.0);
//!
//! // A short press and release is a tap.
//! engine.handle_pointer(PointerSample::down(Point::new(10.0, 10.0)));
//! let tap = engine.handle_pointer(PointerSample::up(Point::new(11.0, 11.0)));
//! assert_eq!(tap, Some(ZoomEvent::Tap));
//! ```
//!
//! ## Logging
//!
//! Events are emitted with `tracing`: configuration rejections, clamped zoom
//! requests, bounds corrections and restores at `debug`, gesture state
//! transitions at `trace`. Installing a subscriber is up to the host.
//!
//! Unlike `understory_image_fit`, this crate requires `std`: saved state is
//! encoded with `serde_json`.

mod config;
mod engine;
pub mod gesture;
pub mod pinch;
mod state;

pub use config::{PinchToZoomConfig, SideValues};
pub use engine::{PinchToZoom, PinchToZoomDebugInfo, ZoomEvent};
pub use state::{SAVED_STATE_KIND, SavedState, StateError};

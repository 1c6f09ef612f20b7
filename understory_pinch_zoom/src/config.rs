// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use serde::{Deserialize, Serialize};

/// Four signed side values as they arrive from a host's configuration.
///
/// Signed so that invalid input survives deserialization and is rejected by
/// the engine's validated setters with a [`ConfigError`](understory_image_fit::ConfigError).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SideValues {
    /// Left side.
    pub left: i32,
    /// Top side.
    pub top: i32,
    /// Right side.
    pub right: i32,
    /// Bottom side.
    pub bottom: i32,
}

impl SideValues {
    /// Creates side values.
    #[must_use]
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Returns `true` if every side is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.left == 0 && self.top == 0 && self.right == 0 && self.bottom == 0
    }
}

/// Declarative engine configuration, loaded from a host's layout or settings.
///
/// Field names are camelCase on the wire and every field is optional:
///
/// ```
/// use understory_pinch_zoom::PinchToZoomConfig;
///
/// let config: PinchToZoomConfig =
///     serde_json::from_str(r#"{ "maxBitmapWidth": 4000, "panThreshold": 8 }"#).unwrap();
/// assert_eq!(config.max_bitmap_width, 4000);
/// assert_eq!(config.pan_threshold, Some(8));
/// assert!(config.pin_axes_smaller_than_bounds);
/// ```
///
/// Apply it with [`PinchToZoom::from_config`](crate::PinchToZoom::from_config).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PinchToZoomConfig {
    /// Minimum scaled bitmap width; `0` leaves the default.
    pub min_bitmap_width: i32,
    /// Minimum scaled bitmap height; `0` leaves the default.
    pub min_bitmap_height: i32,
    /// Maximum scaled bitmap width; `0` leaves the default.
    pub max_bitmap_width: i32,
    /// Maximum scaled bitmap height; `0` leaves the default.
    pub max_bitmap_height: i32,
    /// Pan threshold in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pan_threshold: Option<i32>,
    /// Center axes on which the bitmap fits inside the viewport.
    pub pin_axes_smaller_than_bounds: bool,
    /// Slack allowing the bitmap past each viewport edge.
    pub translation_extra: SideValues,
    /// Viewport padding.
    pub padding: SideValues,
    /// Exclude the padding from the viewport used for fitting and bounds.
    pub crop_to_padding: bool,
}

impl Default for PinchToZoomConfig {
    fn default() -> Self {
        Self {
            min_bitmap_width: 0,
            min_bitmap_height: 0,
            max_bitmap_width: 0,
            max_bitmap_height: 0,
            pan_threshold: None,
            pin_axes_smaller_than_bounds: true,
            translation_extra: SideValues::default(),
            padding: SideValues::default(),
            crop_to_padding: false,
        }
    }
}

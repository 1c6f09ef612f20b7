// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use understory_image_fit::{ImageTransform, Insets, PixelSize};

use crate::gesture::TouchMode;

/// Discriminator stored alongside a [`SavedState`] in its JSON form.
pub const SAVED_STATE_KIND: &str = "pinch_to_zoom";

const KIND_KEY: &str = "kind";

/// A saved-state document could not be restored.
#[derive(Debug, Error)]
pub enum StateError {
    /// The document belongs to something else.
    #[error("saved state is not a pinch-to-zoom state (kind {found:?})")]
    WrongKind {
        /// The discriminator that was found, if any.
        found: Option<String>,
    },
    /// The document has the right kind but could not be decoded.
    #[error("malformed pinch-to-zoom state: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Everything needed to bring an engine back to where it was.
///
/// Produced by [`PinchToZoom::save_state`](crate::PinchToZoom::save_state)
/// and consumed by [`PinchToZoom::restore_state`](crate::PinchToZoom::restore_state).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SavedState {
    /// Pan threshold in pixels.
    pub pan_threshold: u32,
    /// Gesture state at save time.
    pub touch_mode: TouchMode,
    /// Pointer-down position of the gesture in progress.
    pub first_touch: Option<Point>,
    /// Last recorded pointer position.
    pub last_touch: Option<Point>,
    /// Crop-to-padding flag.
    pub crop_to_padding: bool,
    /// Axis pinning flag.
    pub pin_axes_smaller_than_view: bool,
    /// Viewport padding.
    pub padding: Insets,
    /// Translation slack.
    pub translation_extra: Insets,
    /// Intrinsic size of the source bitmap.
    pub source_size: PixelSize,
    /// Configured minimum scaled size.
    pub min_size: PixelSize,
    /// Configured maximum scaled size.
    pub max_size: PixelSize,
    /// Current transform.
    pub transform: ImageTransform,
    /// Absolute scale factor tracked by the scale controller.
    pub scale_factor: f64,
}

impl SavedState {
    /// Encodes the state as JSON, tagged with [`SAVED_STATE_KIND`].
    pub fn to_json(&self) -> Result<String, StateError> {
        let mut value = serde_json::to_value(self)?;
        if let Value::Object(map) = &mut value {
            map.insert(KIND_KEY.to_owned(), Value::from(SAVED_STATE_KIND));
        }
        Ok(serde_json::to_string(&value)?)
    }

    /// Decodes a state produced by [`SavedState::to_json`].
    ///
    /// The kind tag is checked before anything else is decoded.
    pub fn from_json(json: &str) -> Result<Self, StateError> {
        let value: Value = serde_json::from_str(json)?;
        let kind = value.get(KIND_KEY).and_then(Value::as_str);
        if kind != Some(SAVED_STATE_KIND) {
            return Err(StateError::WrongKind {
                found: kind.map(str::to_owned),
            });
        }
        Ok(serde_json::from_value(value)?)
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Vec2;

    use super::*;

    fn sample() -> SavedState {
        SavedState {
            pan_threshold: 5,
            touch_mode: TouchMode::Pan,
            first_touch: Some(Point::new(1.0, 2.0)),
            last_touch: Some(Point::new(3.0, 4.0)),
            crop_to_padding: true,
            pin_axes_smaller_than_view: false,
            padding: Insets::new(1, 2, 3, 4),
            translation_extra: Insets::new(10, 0, 10, 0),
            source_size: PixelSize::new(640, 480),
            min_size: PixelSize::new(100, 100),
            max_size: PixelSize::ZERO,
            transform: ImageTransform::new(1.5, Vec2::new(-20.0, 12.5)),
            scale_factor: 1.5,
        }
    }

    #[test]
    fn json_carries_kind_tag() {
        let json = sample().to_json().unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["kind"], "pinch_to_zoom");
        assert_eq!(SavedState::from_json(&json).unwrap(), sample());
    }

    #[test]
    fn foreign_document_is_wrong_kind() {
        let err = SavedState::from_json(r#"{ "kind": "scroll_view", "offset": 3 }"#).unwrap_err();
        assert!(matches!(
            err,
            StateError::WrongKind { found: Some(ref kind) } if kind == "scroll_view"
        ));

        let err = SavedState::from_json("[1, 2, 3]").unwrap_err();
        assert!(matches!(err, StateError::WrongKind { found: None }));
    }

    #[test]
    fn right_kind_with_missing_fields_is_malformed() {
        let err = SavedState::from_json(r#"{ "kind": "pinch_to_zoom" }"#).unwrap_err();
        assert!(matches!(err, StateError::Malformed(_)));
    }

    #[test]
    fn invalid_json_is_malformed() {
        assert!(matches!(
            SavedState::from_json("not json"),
            Err(StateError::Malformed(_))
        ));
    }
}

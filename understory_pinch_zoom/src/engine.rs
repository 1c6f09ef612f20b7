// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Vec2};
use tracing::debug;
use understory_image_fit::translation::{
    check_translation_bounds, perform_initial_translation, translate,
};
use understory_image_fit::{
    BitmapConstraints, CalculationSnapshot, ConfigError, ImageTransform, Insets, PixelSize,
    ScaleController, ViewportConfig,
};

use crate::config::PinchToZoomConfig;
use crate::gesture::{GestureOutcome, GestureRouter, PointerSample, TouchMode};
use crate::state::SavedState;

/// Something the host should react to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ZoomEvent {
    /// The transform changed; redraw the image with it.
    TransformChanged(ImageTransform),
    /// A gesture resolved to a tap.
    Tap,
}

/// Pinch-to-zoom and pan for one image in one viewport.
///
/// Owns the [`ImageTransform`], the viewport and bitmap configuration, a
/// [`ScaleController`] and a [`GestureRouter`]. Every input method returns
/// the [`ZoomEvent`] it produced, if any; the engine never calls back into
/// the host.
///
/// Host responsibilities:
/// - Call [`PinchToZoom::set_source_image`] when the image changes and
///   [`PinchToZoom::on_layout`] on every layout pass (including the one
///   following a new image, which performs the initial fit).
/// - Forward pointer samples to [`PinchToZoom::handle_pointer`] and scale
///   detector callbacks to [`PinchToZoom::on_scale_begin`] and
///   [`PinchToZoom::on_scale`].
#[derive(Clone, Debug)]
pub struct PinchToZoom {
    viewport: ViewportConfig,
    constraints: BitmapConstraints,
    transform: ImageTransform,
    scale: ScaleController,
    router: GestureRouter,
    requires_bounds_check: bool,
}

impl Default for PinchToZoom {
    fn default() -> Self {
        Self::new()
    }
}

impl PinchToZoom {
    /// Creates an engine with default configuration and no image.
    #[must_use]
    pub fn new() -> Self {
        Self {
            viewport: ViewportConfig::default(),
            constraints: BitmapConstraints::default(),
            transform: ImageTransform::IDENTITY,
            scale: ScaleController::new(),
            router: GestureRouter::default(),
            requires_bounds_check: false,
        }
    }

    /// Creates an engine from a declarative configuration.
    ///
    /// Minimum and maximum sizes and the translation extra are only applied
    /// when some component is non-zero; the pan threshold only when present.
    pub fn from_config(config: &PinchToZoomConfig) -> Result<Self, ConfigError> {
        let mut engine = Self::new();
        if config.min_bitmap_width != 0 || config.min_bitmap_height != 0 {
            engine.set_bitmap_minimum_size(config.min_bitmap_width, config.min_bitmap_height)?;
        }
        if config.max_bitmap_width != 0 || config.max_bitmap_height != 0 {
            engine.set_bitmap_maximum_size(config.max_bitmap_width, config.max_bitmap_height)?;
        }
        if let Some(threshold) = config.pan_threshold {
            engine.set_pan_threshold(threshold)?;
        }
        engine.set_pin_axes_smaller_than_view(config.pin_axes_smaller_than_bounds);
        let extra = config.translation_extra;
        if !extra.is_zero() {
            engine.set_translation_extra(extra.left, extra.top, extra.right, extra.bottom)?;
        }
        let padding = config.padding;
        engine.set_padding(padding.left, padding.top, padding.right, padding.bottom)?;
        engine.set_crop_to_padding(config.crop_to_padding);
        Ok(engine)
    }

    // --- Host lifecycle ---

    /// Switches to a new source image of the given intrinsic size.
    ///
    /// The transform, scale factor and gesture state are reset; the initial
    /// fit happens on the next [`PinchToZoom::on_layout`]. A zero size on
    /// either axis disables the initial fit until a real size arrives.
    pub fn set_source_image(&mut self, size: PixelSize) -> Option<ZoomEvent> {
        let before = self.transform;
        self.transform.reset();
        self.scale.reset();
        self.router.reset();
        self.constraints.source = size;
        debug!(width = size.width, height = size.height, "source image set");
        self.changed_since(before)
    }

    /// Layout pass with the measured viewport size.
    ///
    /// Runs a pending bounds check (armed by [`PinchToZoom::restore_state`])
    /// and then, while no zoom has been applied, the initial fit.
    pub fn on_layout(&mut self, size: PixelSize) -> Option<ZoomEvent> {
        let before = self.transform;
        self.viewport.size = size;
        if self.requires_bounds_check {
            self.requires_bounds_check = false;
            self.correct_translation();
        }
        if self.scale.is_actual_size_zoom_level() {
            self.perform_initial_fit();
        }
        self.changed_since(before)
    }

    // --- Input ---

    /// Processes one raw pointer sample.
    pub fn handle_pointer(&mut self, sample: PointerSample) -> Option<ZoomEvent> {
        let outcome = self.router.on_pointer(sample)?;
        self.apply(outcome)
    }

    /// A scale detector recognized the start of a pinch.
    pub fn on_scale_begin(&mut self) {
        self.router.on_scale_begin();
    }

    /// A scale detector reported a pinch step.
    pub fn on_scale(&mut self, factor: f64, focus: Point) -> Option<ZoomEvent> {
        let outcome = self.router.on_scale(factor, focus);
        self.apply(outcome)
    }

    /// Zooms by `factor` about `focus`, clamped to the allowed range, then
    /// corrects the translation.
    pub fn pinch(&mut self, factor: f64, focus: Point) -> Option<ZoomEvent> {
        let before = self.transform;
        let snapshot = self.snapshot();
        let change = self.scale.scale(factor, focus, &snapshot);
        self.transform.post_scale(change.multiplier, change.focus);
        self.correct_translation();
        self.changed_since(before)
    }

    /// Pans by `delta`, corrected so the image stays in bounds.
    pub fn pan(&mut self, delta: Vec2) -> Option<ZoomEvent> {
        let before = self.transform;
        let applied = translate(delta, &self.snapshot());
        self.transform.post_translate(applied);
        self.changed_since(before)
    }

    /// Pulls the translation back in bounds for the current configuration.
    ///
    /// Useful after configuration changes; layout passes only check bounds
    /// after a restore.
    pub fn check_translation_bounds(&mut self) -> Option<ZoomEvent> {
        let before = self.transform;
        self.correct_translation();
        self.changed_since(before)
    }

    // --- Configuration ---

    /// Sets the viewport padding. Negative values are rejected.
    pub fn set_padding(
        &mut self,
        left: i32,
        top: i32,
        right: i32,
        bottom: i32,
    ) -> Result<(), ConfigError> {
        self.viewport.padding = Insets::from_signed(left, top, right, bottom).ok_or_else(|| {
            rejected(ConfigError::NegativePadding {
                left,
                top,
                right,
                bottom,
            })
        })?;
        Ok(())
    }

    /// Excludes the padding from the viewport used for fitting and bounds.
    pub fn set_crop_to_padding(&mut self, crop_to_padding: bool) {
        self.viewport.crop_to_padding = crop_to_padding;
    }

    /// Sets how far the image may be panned past each viewport edge.
    /// Negative values are rejected.
    pub fn set_translation_extra(
        &mut self,
        left: i32,
        top: i32,
        right: i32,
        bottom: i32,
    ) -> Result<(), ConfigError> {
        self.viewport.translation_extra = Insets::from_signed(left, top, right, bottom)
            .ok_or_else(|| {
                rejected(ConfigError::NegativeTranslationExtra {
                    left,
                    top,
                    right,
                    bottom,
                })
            })?;
        Ok(())
    }

    /// Sets the minimum scaled bitmap size; both axes must be at least `1`.
    pub fn set_bitmap_minimum_size(&mut self, width: i32, height: i32) -> Result<(), ConfigError> {
        match (u32::try_from(width), u32::try_from(height)) {
            (Ok(w), Ok(h)) if w >= 1 && h >= 1 => {
                self.constraints.min_size = PixelSize::new(w, h);
                Ok(())
            }
            _ => Err(rejected(ConfigError::InvalidMinimumSize { width, height })),
        }
    }

    /// Sets the maximum scaled bitmap size; `0` on an axis restores its default.
    pub fn set_bitmap_maximum_size(&mut self, width: i32, height: i32) -> Result<(), ConfigError> {
        match (u32::try_from(width), u32::try_from(height)) {
            (Ok(w), Ok(h)) => {
                self.constraints.max_size = PixelSize::new(w, h);
                Ok(())
            }
            _ => Err(rejected(ConfigError::NegativeMaximumSize { width, height })),
        }
    }

    /// Keeps axes on which the image fits centered.
    pub fn set_pin_axes_smaller_than_view(&mut self, pin: bool) {
        self.viewport.pin_axes_smaller_than_view = pin;
    }

    /// Sets the tap/pan threshold in pixels; it must be at least `1`.
    pub fn set_pan_threshold(&mut self, pan_threshold: i32) -> Result<(), ConfigError> {
        self.router.set_pan_threshold(pan_threshold).map_err(rejected)
    }

    // --- State ---

    /// Current transform.
    #[must_use]
    pub fn transform(&self) -> ImageTransform {
        self.transform
    }

    /// Current transform as an [`Affine`] mapping bitmap space into the viewport.
    #[must_use]
    pub fn affine(&self) -> Affine {
        self.transform.to_affine()
    }

    /// Absolute scale factor.
    #[must_use]
    pub fn scale_factor(&self) -> f64 {
        self.scale.scale_factor()
    }

    /// Current gesture state.
    #[must_use]
    pub fn touch_mode(&self) -> TouchMode {
        self.router.touch_mode()
    }

    /// Current pan threshold in pixels.
    #[must_use]
    pub fn pan_threshold(&self) -> u32 {
        self.router.pan_threshold()
    }

    /// Returns `true` while no zoom has been applied.
    #[must_use]
    pub fn is_actual_size_zoom_level(&self) -> bool {
        self.scale.is_actual_size_zoom_level()
    }

    /// Returns `true` if the next layout pass will re-check the translation.
    #[must_use]
    pub fn requires_bounds_check(&self) -> bool {
        self.requires_bounds_check
    }

    /// Viewport configuration.
    #[must_use]
    pub fn viewport(&self) -> &ViewportConfig {
        &self.viewport
    }

    /// Bitmap size constraints.
    #[must_use]
    pub fn constraints(&self) -> &BitmapConstraints {
        &self.constraints
    }

    /// Captures everything needed to restore this engine later.
    #[must_use]
    pub fn save_state(&self) -> SavedState {
        SavedState {
            pan_threshold: self.router.pan_threshold(),
            touch_mode: self.router.touch_mode(),
            first_touch: self.router.first_touch(),
            last_touch: self.router.last_touch(),
            crop_to_padding: self.viewport.crop_to_padding,
            pin_axes_smaller_than_view: self.viewport.pin_axes_smaller_than_view,
            padding: self.viewport.padding,
            translation_extra: self.viewport.translation_extra,
            source_size: self.constraints.source,
            min_size: self.constraints.min_size,
            max_size: self.constraints.max_size,
            transform: self.transform,
            scale_factor: self.scale.scale_factor(),
        }
    }

    /// Restores a saved state.
    ///
    /// The viewport may have changed size in the meantime, so the next
    /// [`PinchToZoom::on_layout`] re-checks the translation.
    pub fn restore_state(&mut self, state: SavedState) {
        self.router.restore(
            state.pan_threshold,
            state.touch_mode,
            state.first_touch,
            state.last_touch,
        );
        self.viewport.crop_to_padding = state.crop_to_padding;
        self.viewport.pin_axes_smaller_than_view = state.pin_axes_smaller_than_view;
        self.viewport.padding = state.padding;
        self.viewport.translation_extra = state.translation_extra;
        self.constraints = BitmapConstraints {
            source: state.source_size,
            min_size: state.min_size,
            max_size: state.max_size,
        };
        self.transform = state.transform;
        self.scale.restore(state.scale_factor);
        self.requires_bounds_check = true;
        debug!(
            scale_factor = state.scale_factor,
            x = state.transform.translation.x,
            y = state.transform.translation.y,
            "state restored"
        );
    }

    /// Returns a snapshot of the engine for logging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> PinchToZoomDebugInfo {
        PinchToZoomDebugInfo {
            viewport: self.viewport,
            constraints: self.constraints,
            transform: self.transform,
            scale_factor: self.scale.scale_factor(),
            touch_mode: self.router.touch_mode(),
            pan_threshold: self.router.pan_threshold(),
            first_touch: self.router.first_touch(),
            last_touch: self.router.last_touch(),
            requires_bounds_check: self.requires_bounds_check,
        }
    }

    fn apply(&mut self, outcome: GestureOutcome) -> Option<ZoomEvent> {
        match outcome {
            GestureOutcome::Pan(delta) => self.pan(delta),
            GestureOutcome::Zoom { factor, focus } => self.pinch(factor, focus),
            GestureOutcome::Tap => Some(ZoomEvent::Tap),
        }
    }

    fn snapshot(&self) -> CalculationSnapshot {
        CalculationSnapshot::new(&self.transform, &self.viewport, &self.constraints)
    }

    fn perform_initial_fit(&mut self) {
        let Some(factor) = self.scale.perform_initial_scale(&self.snapshot()) else {
            return;
        };
        self.transform.set_scale(factor);
        let offset = perform_initial_translation(&self.snapshot());
        self.transform.post_translate(offset);
    }

    fn correct_translation(&mut self) {
        let correction = check_translation_bounds(&self.snapshot());
        if correction != Vec2::ZERO {
            debug!(x = correction.x, y = correction.y, "bounds correction");
            self.transform.post_translate(correction);
        }
    }

    fn changed_since(&self, before: ImageTransform) -> Option<ZoomEvent> {
        (self.transform != before).then_some(ZoomEvent::TransformChanged(self.transform))
    }
}

fn rejected(err: ConfigError) -> ConfigError {
    debug!(error = %err, "configuration rejected");
    err
}

/// Debug snapshot of a [`PinchToZoom`], see [`PinchToZoom::debug_info`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchToZoomDebugInfo {
    /// Viewport configuration, including the last measured size.
    pub viewport: ViewportConfig,
    /// Source size and scaled size limits.
    pub constraints: BitmapConstraints,
    /// Current transform.
    pub transform: ImageTransform,
    /// Absolute scale factor.
    pub scale_factor: f64,
    /// Current gesture state.
    pub touch_mode: TouchMode,
    /// Pan threshold in pixels.
    pub pan_threshold: u32,
    /// Pointer-down position of the gesture in progress.
    pub first_touch: Option<Point>,
    /// Last recorded pointer position.
    pub last_touch: Option<Point>,
    /// Whether the next layout pass re-checks the translation.
    pub requires_bounds_check: bool,
}

// Copyright 2025 the Paintroid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `floor`
use kurbo::{Affine, Point, Rect, Vec2};

use crate::canvas::CanvasTransform;
use crate::config::PerspectiveConfig;
use crate::frame::Frame;

/// Scale and translation of a drawing surface.
///
/// `Perspective` maps canvas coordinates (the painting model) onto screen
/// coordinates of a surface frame, scaling about the frame center and then
/// translating by an offset stored in canvas units:
///
/// ```text
/// screen = (canvas + translation - center) * scale + center
/// canvas = (screen - center) / scale + center - translation
/// ```
///
/// All mutators are total. Out-of-range input is clamped, never rejected.
///
/// The type holds no lock. When an input thread and a render thread share
/// one perspective, both must go through the guard that also serializes the
/// renderer's draw calls.
#[derive(Clone, Debug)]
pub struct Perspective {
    frame: Frame,
    scale: f64,
    translation: Vec2,
    config: PerspectiveConfig,
}

impl Perspective {
    /// Creates a perspective for `frame` with the default limits.
    #[must_use]
    pub fn new(frame: Rect) -> Self {
        Self::with_config(frame, PerspectiveConfig::default())
    }

    /// Creates a perspective for `frame` with explicit limits.
    #[must_use]
    pub fn with_config(frame: Rect, config: PerspectiveConfig) -> Self {
        let mut perspective = Self {
            frame: Frame::new(frame),
            scale: 1.0,
            translation: Vec2::ZERO,
            config: config.normalized(),
        };
        perspective.reset(frame);
        perspective
    }

    /// Adopts a new surface frame and returns to scale `1.0` with no translation.
    ///
    /// Must be called whenever the surface's pixel size changes. Conversions
    /// done against a stale frame use the old center and are skewed.
    pub fn reset(&mut self, frame: Rect) {
        self.frame = Frame::new(frame);
        self.translation = Vec2::ZERO;
        self.scale = 1.0;
        log::debug!(
            "perspective reset: frame={:?} center={:?}",
            self.frame.rect(),
            self.frame.center()
        );
    }

    /// Current surface frame.
    #[must_use]
    pub fn frame(&self) -> Frame {
        self.frame
    }

    /// Exact center of the current frame.
    #[must_use]
    pub fn center(&self) -> Point {
        self.frame.center()
    }

    /// Current scale factor.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Current translation in canvas units.
    #[must_use]
    pub fn translation(&self) -> Vec2 {
        self.translation
    }

    /// Active limits.
    #[must_use]
    pub fn config(&self) -> PerspectiveConfig {
        self.config
    }

    /// Replaces the limits and clamps the current scale into the new range.
    ///
    /// The translation is left alone; the next [`Self::translate`] clamps it
    /// against the new scroll border.
    pub fn set_config(&mut self, config: PerspectiveConfig) {
        self.config = config.normalized();
        self.scale = self.clamped_scale(self.scale);
        log::debug!(
            "perspective config changed: {:?}, scale now {}",
            self.config,
            self.scale
        );
    }

    /// Sets the scale.
    ///
    /// Values below the minimum (and NaN) are raised to the minimum. There is
    /// no upper clamp here, so callers can zoom past the interactive maximum
    /// programmatically; use [`Self::multiply_scale`] for gesture zoom.
    pub fn set_scale(&mut self, scale: f64) {
        if scale >= self.config.min_scale() {
            self.scale = scale;
        } else {
            log::trace!(
                "scale {scale} raised to minimum {}",
                self.config.min_scale()
            );
            self.scale = self.config.min_scale();
        }
    }

    /// Multiplies the scale by `factor` and clamps it into `[min, max]`.
    pub fn multiply_scale(&mut self, factor: f64) {
        let requested = self.scale * factor;
        self.scale = self.clamped_scale(requested);
        if self.scale != requested {
            log::trace!("scale {requested} clamped to {}", self.scale);
        }
    }

    /// Pans by a screen-space delta.
    ///
    /// The delta is converted to canvas units at the current scale and
    /// rounded to whole units before being added. The result is then clamped
    /// to [`Self::translation_bounds`].
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.translation.x += round_half_up(dx / self.scale);
        self.translation.y += round_half_up(dy / self.scale);

        let bounds = self.translation_bounds();
        let clamped = Vec2::new(
            clamp_symmetric(self.translation.x, bounds.x),
            clamp_symmetric(self.translation.y, bounds.y),
        );
        if clamped != self.translation {
            log::trace!(
                "translation {:?} clamped to {:?}",
                self.translation,
                clamped
            );
            self.translation = clamped;
        }
    }

    /// Largest allowed `|translation|` per axis at the current scale.
    ///
    /// `xmax = (right - center.x - border) / scale + center.x`, and the same
    /// for `y` with `bottom`.
    #[must_use]
    pub fn translation_bounds(&self) -> Vec2 {
        let center = self.frame.center();
        let border = self.config.scroll_border();
        Vec2::new(
            (self.frame.right() - center.x - border) / self.scale + center.x,
            (self.frame.bottom() - center.y - border) / self.scale + center.y,
        )
    }

    /// Converts a screen-space point into canvas space.
    #[must_use]
    pub fn convert_from_screen_to_canvas(&self, point: Point) -> Point {
        let center = self.frame.center();
        Point::new(
            (point.x - center.x) / self.scale + center.x - self.translation.x,
            (point.y - center.y) / self.scale + center.y - self.translation.y,
        )
    }

    /// Integer-pixel variant of [`Self::convert_from_screen_to_canvas`].
    ///
    /// The result is truncated toward zero, saturating at the `i32` range.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "truncation to whole pixels is the point of this variant"
    )]
    pub fn convert_pixel_from_screen_to_canvas(&self, x: i32, y: i32) -> (i32, i32) {
        let canvas = self.convert_from_screen_to_canvas(Point::new(f64::from(x), f64::from(y)));
        (canvas.x as i32, canvas.y as i32)
    }

    /// Converts a canvas-space point into screen space.
    #[must_use]
    pub fn convert_from_canvas_to_screen(&self, point: Point) -> Point {
        let center = self.frame.center();
        Point::new(
            (point.x + self.translation.x - center.x) * self.scale + center.x,
            (point.y + self.translation.y - center.y) * self.scale + center.y,
        )
    }

    /// The canvas-to-screen mapping as an affine transform.
    ///
    /// This is the matrix [`Self::apply_to_canvas`] concatenates.
    #[must_use]
    pub fn canvas_to_screen_transform(&self) -> Affine {
        let mut transform = Affine::IDENTITY;
        self.apply_to_canvas(&mut transform);
        transform
    }

    /// The screen-to-canvas mapping as an affine transform.
    #[must_use]
    pub fn screen_to_canvas_transform(&self) -> Affine {
        let center = self.frame.center().to_vec2();
        Affine::translate(center - self.translation)
            * Affine::scale(1.0 / self.scale)
            * Affine::translate(-center)
    }

    /// Canvas-space rectangle currently visible through the frame.
    #[must_use]
    pub fn visible_canvas_rect(&self) -> Rect {
        let rect = self.frame.rect();
        let p0 = self.convert_from_screen_to_canvas(Point::new(rect.x0, rect.y0));
        let p1 = self.convert_from_screen_to_canvas(Point::new(rect.x1, rect.y1));
        Rect::from_points(p0, p1)
    }

    /// Applies the current scale and translation to a graphics context.
    ///
    /// Issues `scale_about(scale, scale, center)` followed by
    /// `translate(translation)`. Call it under the same guard the renderer
    /// uses for drawing.
    pub fn apply_to_canvas<C: CanvasTransform + ?Sized>(&self, canvas: &mut C) {
        canvas.scale_about(self.scale, self.scale, self.frame.center());
        canvas.translate(self.translation);
    }

    /// Snapshot of the current state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> PerspectiveDebugInfo {
        PerspectiveDebugInfo {
            frame: self.frame.rect(),
            center: self.frame.center(),
            scale: self.scale,
            translation: self.translation,
            translation_bounds: self.translation_bounds(),
            visible_canvas_rect: self.visible_canvas_rect(),
            config: self.config,
        }
    }

    fn clamped_scale(&self, scale: f64) -> f64 {
        if scale > self.config.max_scale() {
            self.config.max_scale()
        } else if scale >= self.config.min_scale() {
            scale
        } else {
            // Also catches NaN.
            self.config.min_scale()
        }
    }
}

/// Debug snapshot of a [`Perspective`].
#[derive(Clone, Copy, Debug)]
pub struct PerspectiveDebugInfo {
    /// Surface frame in screen pixels.
    pub frame: Rect,
    /// Exact frame center.
    pub center: Point,
    /// Current scale factor.
    pub scale: f64,
    /// Current translation in canvas units.
    pub translation: Vec2,
    /// Translation limits at the current scale.
    pub translation_bounds: Vec2,
    /// Canvas-space rectangle visible through the frame.
    pub visible_canvas_rect: Rect,
    /// Active limits.
    pub config: PerspectiveConfig,
}

/// Rounds to the nearest integer, halves towards positive infinity. NaN becomes `0`.
fn round_half_up(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    let floor = value.floor();
    // `value - floor` is exact for the fractional part, unlike `value + 0.5`.
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

// Upper bound first, so a negative `max` yields `max` instead of panicking like `f64::clamp`.
fn clamp_symmetric(value: f64, max: f64) -> f64 {
    if value > max {
        max
    } else if value < -max {
        -max
    } else {
        value
    }
}

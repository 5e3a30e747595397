// Copyright 2025 the Paintroid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Vec2};

/// A 2D graphics context whose current transform can be scaled and translated.
///
/// Both operations follow the usual canvas convention: the new operation is
/// concatenated *before* the existing matrix, so it applies to coordinates
/// issued afterwards in local (canvas) space.
///
/// [`crate::Perspective::apply_to_canvas`] drives this trait. Renderers
/// implement it for their own surface type; [`Affine`] implements it directly,
/// which is handy for computing the matrix a renderer would end up with.
pub trait CanvasTransform {
    /// Scales by `(sx, sy)` keeping `pivot` fixed.
    fn scale_about(&mut self, sx: f64, sy: f64, pivot: Point);

    /// Translates by `offset`.
    fn translate(&mut self, offset: Vec2);
}

impl CanvasTransform for Affine {
    fn scale_about(&mut self, sx: f64, sy: f64, pivot: Point) {
        let pivot = pivot.to_vec2();
        *self = *self
            * Self::translate(pivot)
            * Self::scale_non_uniform(sx, sy)
            * Self::translate(-pivot);
    }

    fn translate(&mut self, offset: Vec2) {
        *self = *self * Self::translate(offset);
    }
}

impl<T: CanvasTransform + ?Sized> CanvasTransform for &mut T {
    fn scale_about(&mut self, sx: f64, sy: f64, pivot: Point) {
        (**self).scale_about(sx, sy, pivot);
    }

    fn translate(&mut self, offset: Vec2) {
        (**self).translate(offset);
    }
}

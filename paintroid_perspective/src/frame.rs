// Copyright 2025 the Paintroid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect};

/// Screen-space bounds of a drawing surface together with its exact center.
///
/// The center is computed once, without rounding, when the frame is created.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    rect: Rect,
    center: Point,
}

impl Frame {
    /// Creates a frame from the surface rectangle in screen pixels.
    #[must_use]
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            center: Point::new((rect.x0 + rect.x1) * 0.5, (rect.y0 + rect.y1) * 0.5),
        }
    }

    /// The surface rectangle.
    #[must_use]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// The exact center of the rectangle.
    #[must_use]
    pub fn center(&self) -> Point {
        self.center
    }

    /// Left edge.
    #[must_use]
    pub fn left(&self) -> f64 {
        self.rect.x0
    }

    /// Top edge.
    #[must_use]
    pub fn top(&self) -> f64 {
        self.rect.y0
    }

    /// Right edge.
    #[must_use]
    pub fn right(&self) -> f64 {
        self.rect.x1
    }

    /// Bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.rect.y1
    }

    /// Width of the rectangle (`right - left`).
    #[must_use]
    pub fn width(&self) -> f64 {
        self.rect.x1 - self.rect.x0
    }

    /// Height of the rectangle (`bottom - top`).
    #[must_use]
    pub fn height(&self) -> f64 {
        self.rect.y1 - self.rect.y0
    }
}

impl From<Rect> for Frame {
    fn from(rect: Rect) -> Self {
        Self::new(rect)
    }
}

// Copyright 2025 the Paintroid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Smallest scale factor reachable through [`crate::Perspective`] mutators.
pub const MIN_SCALE: f64 = 0.5;

/// Largest scale factor reachable through [`crate::Perspective::multiply_scale`].
pub const MAX_SCALE: f64 = 15.0;

/// Margin, in screen pixels, that must stay between the surface edge and the frame edge.
pub const SCROLL_BORDER: f64 = 10.0;

/// Scale and scroll limits used by a [`crate::Perspective`].
///
/// The defaults are [`MIN_SCALE`], [`MAX_SCALE`] and [`SCROLL_BORDER`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PerspectiveConfig {
    min_scale: f64,
    max_scale: f64,
    scroll_border: f64,
}

impl PerspectiveConfig {
    /// Creates a configuration with explicit limits.
    ///
    /// The scale range is normalized so that `min_scale <= max_scale`.
    #[must_use]
    pub fn new(min_scale: f64, max_scale: f64, scroll_border: f64) -> Self {
        Self::default()
            .with_scale_limits(min_scale, max_scale)
            .with_scroll_border(scroll_border)
    }

    /// Returns a copy with the given scale range, normalized so that `min <= max`.
    ///
    /// The lower bound is raised to [`f64::MIN_POSITIVE`] if it is not
    /// positive (or NaN), so a clamped scale can always be divided by.
    #[must_use]
    pub fn with_scale_limits(mut self, min_scale: f64, max_scale: f64) -> Self {
        let min_scale = if min_scale.is_nan() {
            f64::MIN_POSITIVE
        } else {
            min_scale
        };
        let max_scale = if max_scale.is_nan() {
            min_scale
        } else {
            max_scale
        };
        let (min_scale, max_scale) = if min_scale <= max_scale {
            (min_scale, max_scale)
        } else {
            (max_scale, min_scale)
        };
        let min_scale = min_scale.max(f64::MIN_POSITIVE);
        self.min_scale = min_scale;
        self.max_scale = max_scale.max(min_scale);
        self
    }

    /// Re-applies the normalization of [`Self::with_scale_limits`] and
    /// [`Self::with_scroll_border`].
    ///
    /// Useful after deserializing, which fills the fields verbatim.
    #[must_use]
    pub fn normalized(self) -> Self {
        self.with_scale_limits(self.min_scale, self.max_scale)
            .with_scroll_border(self.scroll_border)
    }

    /// Returns a copy with the given scroll border.
    ///
    /// A non-finite border falls back to [`SCROLL_BORDER`].
    #[must_use]
    pub fn with_scroll_border(mut self, scroll_border: f64) -> Self {
        self.scroll_border = if scroll_border.is_finite() {
            scroll_border
        } else {
            SCROLL_BORDER
        };
        self
    }

    /// Lower scale bound.
    #[must_use]
    pub fn min_scale(&self) -> f64 {
        self.min_scale
    }

    /// Upper scale bound, enforced by [`crate::Perspective::multiply_scale`].
    #[must_use]
    pub fn max_scale(&self) -> f64 {
        self.max_scale
    }

    /// Scroll margin in screen pixels.
    #[must_use]
    pub fn scroll_border(&self) -> f64 {
        self.scroll_border
    }
}

impl Default for PerspectiveConfig {
    fn default() -> Self {
        Self {
            min_scale: MIN_SCALE,
            max_scale: MAX_SCALE,
            scroll_border: SCROLL_BORDER,
        }
    }
}

// Copyright 2025 the Paintroid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=paintroid_perspective --heading-base-level=0

//! Paintroid Perspective: pan/zoom state of a drawing surface.
//!
//! This crate provides a small, headless model of the transform between the
//! screen-space frame of a drawing surface and the canvas space the painting
//! model works in. It focuses on:
//! - Scale and translation state with clamped mutators.
//! - Coordinate conversion from screen to canvas space (and back).
//! - Applying the transform to any graphics context via [`CanvasTransform`].
//!
//! It does **not** render, recognize gestures, or own the surface. Callers
//! are expected to:
//! - Turn drag and pinch gestures into [`Perspective::translate`] and
//!   [`Perspective::multiply_scale`] calls.
//! - Call [`Perspective::reset`] whenever the surface is attached or resized.
//! - Call [`Perspective::apply_to_canvas`] before issuing canvas-space draw
//!   commands.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Affine, Point, Rect, Vec2};
//! use paintroid_perspective::Perspective;
//!
//! let mut perspective = Perspective::new(Rect::new(0.0, 0.0, 1000.0, 800.0));
//!
//! // Pinch and drag.
//! perspective.multiply_scale(20.0);
//! assert_eq!(perspective.scale(), 15.0);
//! perspective.set_scale(1.0);
//! perspective.translate(100_000.0, 0.0);
//! assert_eq!(perspective.translation(), Vec2::new(990.0, 0.0));
//!
//! // Hit-test a tap in canvas space.
//! let canvas_pt = perspective.convert_from_screen_to_canvas(Point::new(500.0, 400.0));
//! assert_eq!(canvas_pt, Point::new(-490.0, 400.0));
//!
//! // The renderer sees the inverse mapping.
//! let mut ctx = Affine::IDENTITY;
//! perspective.apply_to_canvas(&mut ctx);
//! assert_eq!(ctx * canvas_pt, Point::new(500.0, 400.0));
//! ```
//!
//! ## Limits
//!
//! [`PerspectiveConfig`] carries the scale range and the scroll border. The
//! defaults are [`MIN_SCALE`], [`MAX_SCALE`] and [`SCROLL_BORDER`].
//! [`Perspective::set_scale`] only raises values below the minimum, while
//! [`Perspective::multiply_scale`] clamps into the full range.
//!
//! ## Threading
//!
//! [`Perspective`] holds no lock. An input thread and a render thread sharing
//! one perspective must both go through the guard that serializes the
//! renderer's draw calls, for example one `Mutex` around the perspective and
//! the surface.
//!
//! This crate is `no_std`.

#![no_std]

mod canvas;
mod config;
mod frame;
mod perspective;

pub use canvas::CanvasTransform;
pub use config::{MAX_SCALE, MIN_SCALE, PerspectiveConfig, SCROLL_BORDER};
pub use frame::Frame;
pub use perspective::{Perspective, PerspectiveDebugInfo};

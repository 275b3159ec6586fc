// Copyright 2025 the Pictura Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pictura View: viewport-fit transforms for recorded pictures.
//!
//! This crate answers one question: given a target size handed down by a
//! layout pass and the view box a picture was authored against, which scale
//! and translation place the picture inside the target while preserving its
//! aspect ratio?
//!
//! It does **not** own a canvas, a picture, or any layout state. Callers are
//! expected to:
//! - Resolve the target size elsewhere.
//! - Apply the returned [`CanvasTransform`] to their canvas as
//!   `scale(scale_x, scale_y)` followed by `translate(translate_x, translate_y)`.
//! - Reject degenerate inputs first, or use [`try_compute_transform_with`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Rect, Size};
//! use pictura_view::{CanvasTransform, compute_transform};
//!
//! // A 200x100 target and a 40x50 view box: height binds (scale 2) and X is
//! // offset by (50 - 40) / 2 view-box units.
//! let t = compute_transform(Size::new(200.0, 100.0), Rect::new(0.0, 0.0, 40.0, 50.0));
//! assert_eq!(t, CanvasTransform::new(2.0, 2.0, 5.0, 0.0));
//! ```
//!
//! ## Design notes
//!
//! - The scale is always uniform and comes from the binding axis, the one with
//!   the smaller ratio of target extent to view-box extent.
//! - The default [`FitPolicy::ViewBoxDelta`] offsets the free axis by half the
//!   view box's own aspect delta, in view-box units. That is the long-standing
//!   behavior callers depend on; [`FitPolicy::Center`] is the opt-in variant
//!   that centers against the target instead.
//!
//! This crate is `no_std`.

#![no_std]

mod fit;
mod modes;

pub use fit::{
    CanvasTransform, FitError, compute_transform, compute_transform_with,
    try_compute_transform_with,
};
pub use modes::FitPolicy;

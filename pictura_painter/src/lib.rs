// Copyright 2025 the Pictura Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pictura Painter: paint a recorded picture fitted into a target box.
//!
//! Given a [`Canvas`](pictura_imaging::Canvas), an offset, a target size and a
//! [`Picture`](pictura_imaging::Picture), [`paint`] scales the picture's view
//! box into the target preserving its aspect ratio, optionally mirrors it for
//! right-to-left layout, optionally clips to the view box, and draws it. All
//! of that happens inside a single save/restore pair, so the caller's canvas
//! state is untouched afterwards.
//!
//! Missing inputs (no picture, no size, an empty target or view box) are not
//! errors: the call returns [`PaintOutcome::Skipped`] and issues no canvas
//! calls. The only error is an invalid [`PaintConfig`].
//!
//! Hosts that keep paint inputs around between frames can use
//! [`PictureProps`], whose setters report whether a repaint is needed.
//! [`fill_available`] and [`hit_test`] describe how a picture painter takes
//! part in layout and input.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Rect, Size, Vec2};
//! use pictura_imaging::{CanvasOp, record_picture};
//! use pictura_imaging_ref::RefCanvas;
//! use pictura_painter::{PaintConfig, paint};
//!
//! let picture = record_picture(Rect::new(0.0, 0.0, 40.0, 50.0), |_| {});
//! let mut canvas = RefCanvas::new();
//! let outcome = paint(
//!     &mut canvas,
//!     Vec2::ZERO,
//!     Some(Size::new(200.0, 100.0)),
//!     Some(&picture),
//!     &PaintConfig::default(),
//! )
//! .unwrap();
//!
//! assert!(outcome.is_painted());
//! assert_eq!(canvas.ops().first(), Some(&CanvasOp::Save));
//! assert_eq!(canvas.ops().last(), Some(&CanvasOp::Restore));
//! ```
//!
//! ## Features
//!
//! - `std` (default): forwards to `kurbo` and `pictura_imaging`.
//! - `libm`: `no_std` math for `kurbo`.
//! - `tracing`: emit `debug!` events for each paint or skip and `warn!` when
//!   drawing outside the view box is enabled.
//!
//! This crate is `no_std`.

#![no_std]

mod config;
mod log;
mod paint;
mod props;
mod sizing;

pub use config::{PaintConfig, PaintError, TextDirection};
pub use paint::{PaintOutcome, Painter, SkipReason, paint};
pub use props::{PictureProps, Repaint};
pub use sizing::{BoxConstraints, fill_available, hit_test};

pub use pictura_view::{CanvasTransform, FitPolicy};

// Copyright 2025 the Pictura Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pictura Imaging: canvas IR and recorded pictures.
//!
//! This crate defines the small drawing surface that fitted picture painting
//! is expressed against, plus an immutable, replayable picture type.
//!
//! # Position in the stack
//!
//! - **Painting**: `pictura_painter` decides *where* a picture goes (fit,
//!   mirroring, clipping) and issues canvas calls.
//! - **Canvas IR (this crate)**: the [`Canvas`] trait, the [`CanvasOp`] value
//!   form of each call, and [`Picture`] recordings built from those ops.
//! - **Backends**: implementations of [`Canvas`] that rasterize
//!   (`pictura_imaging_vello_cpu`) or trace (`pictura_imaging_ref`).
//!
//! # Core concepts
//!
//! - **Canvas state** is a stack: [`Canvas::save`] pushes the current
//!   transform and clip, [`Canvas::restore`] pops them. Transforms compose in
//!   call order, so `translate` followed by `scale` maps a local point `p` to
//!   `translate + scale * p`.
//! - **Pictures** are shared, immutable op lists together with the view box
//!   they were authored against. They compare by identity, which makes them
//!   cheap to use as "did the input change" keys.
//! - **Recording**: [`PictureRecorder`] is itself a [`Canvas`]; everything
//!   drawn into it becomes a [`Picture`] via [`PictureRecorder::finish`].
//!
//! # Example
//!
//! ```rust
//! use kurbo::{Rect, Shape};
//! use peniko::{Brush, Color};
//! use pictura_imaging::{Canvas, record_picture};
//!
//! let view_box = Rect::new(0.0, 0.0, 24.0, 24.0);
//! let picture = record_picture(view_box, |c| {
//!     let dot = kurbo::Circle::new((12.0, 12.0), 8.0).to_path(0.1);
//!     c.fill(&dot, &Brush::Solid(Color::BLACK));
//! });
//! assert_eq!(picture.view_box(), view_box);
//! assert_eq!(picture.ops().len(), 1);
//! ```

#![no_std]

extern crate alloc;

use alloc::{sync::Arc, vec::Vec};
use core::fmt;

pub use kurbo::{Affine, BezPath, Rect, Size, Stroke, Vec2};
pub use peniko::Brush;

/// A single canvas call in value form.
///
/// Pictures store their contents as a sequence of these, and tracing canvases
/// log them as they are applied.
#[derive(Clone, Debug, PartialEq)]
pub enum CanvasOp {
    /// Push the current transform and clip.
    Save,
    /// Pop the most recently saved transform and clip.
    Restore,
    /// Translate the local origin.
    Translate(Vec2),
    /// Scale the local coordinate space.
    Scale {
        /// Scale factor along X.
        sx: f64,
        /// Scale factor along Y.
        sy: f64,
    },
    /// Intersect the current clip with a rectangle in local coordinates.
    ClipRect(Rect),
    /// Fill a path with a brush.
    Fill {
        /// Path geometry in local coordinates.
        path: BezPath,
        /// Brush used for the fill.
        brush: Brush,
    },
    /// Stroke a path with a stroke style and brush.
    Stroke {
        /// Path geometry in local coordinates.
        path: BezPath,
        /// Stroke width, joins, caps and dashes.
        style: Stroke,
        /// Brush used for the stroke.
        brush: Brush,
    },
    /// Replay a nested picture.
    DrawPicture(Picture),
}

/// A drawing surface with a save/restore state stack.
///
/// Implementations own their own notion of "current transform" and "current
/// clip". Callers must keep [`Canvas::save`] and [`Canvas::restore`] balanced;
/// [`CanvasExt::with_save`] does that for a closure.
pub trait Canvas {
    /// Push the current transform and clip onto the state stack.
    fn save(&mut self);

    /// Pop the state stack, restoring the transform and clip that were
    /// current at the matching [`Canvas::save`].
    fn restore(&mut self);

    /// Translate the local origin by `offset` (in local units).
    fn translate(&mut self, offset: Vec2);

    /// Scale the local coordinate space.
    ///
    /// A negative factor mirrors the corresponding axis.
    fn scale(&mut self, sx: f64, sy: f64);

    /// Intersect the current clip with `rect`, given in local coordinates.
    fn clip_rect(&mut self, rect: Rect);

    /// Fill `path` with `brush`.
    fn fill(&mut self, path: &BezPath, brush: &Brush);

    /// Stroke `path` with `style` and `brush`.
    fn stroke(&mut self, path: &BezPath, style: &Stroke, brush: &Brush);

    /// Draw a recorded picture in the current local coordinate space.
    ///
    /// The default replays the picture's ops inside a save/restore pair, so
    /// nothing the picture does to the state escapes. Backends that can cache
    /// or forward whole pictures may override this.
    fn draw_picture(&mut self, picture: &Picture) {
        self.save();
        picture.replay(self);
        self.restore();
    }

    /// Apply a [`CanvasOp`].
    fn apply(&mut self, op: &CanvasOp) {
        match op {
            CanvasOp::Save => self.save(),
            CanvasOp::Restore => self.restore(),
            CanvasOp::Translate(offset) => self.translate(*offset),
            CanvasOp::Scale { sx, sy } => self.scale(*sx, *sy),
            CanvasOp::ClipRect(rect) => self.clip_rect(*rect),
            CanvasOp::Fill { path, brush } => self.fill(path, brush),
            CanvasOp::Stroke { path, style, brush } => self.stroke(path, style, brush),
            CanvasOp::DrawPicture(picture) => self.draw_picture(picture),
        }
    }
}

/// Convenience helpers for [`Canvas`] implementations and callers.
///
/// This is separate from [`Canvas`] so that methods can accept closures and
/// return values without complicating trait object usage (`&mut dyn Canvas`).
pub trait CanvasExt: Canvas {
    /// Run `f` between a [`Canvas::save`] and a [`Canvas::restore`].
    ///
    /// Note: if `f` panics, the state will not be restored.
    #[inline]
    fn with_save<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        self.save();
        let out = f(self);
        self.restore();
        out
    }
}

impl<C: Canvas + ?Sized> CanvasExt for C {}

struct PictureData {
    view_box: Rect,
    ops: Arc<[CanvasOp]>,
}

/// An immutable, replayable drawing command list plus its view box.
///
/// Cloning is cheap (reference counted). Two pictures are equal only if they
/// are clones of the same recording; content is never compared.
#[derive(Clone)]
pub struct Picture {
    data: Arc<PictureData>,
}

impl Picture {
    /// Create a picture from ops authored against `view_box`.
    ///
    /// Save/restore pairs are balanced on the way in: a `Restore` with no open
    /// `Save` before it is dropped, and a `Restore` is appended for every
    /// `Save` still open at the end. Replaying the picture therefore leaves the
    /// canvas at the depth it started from.
    pub fn new(view_box: Rect, ops: impl Into<Arc<[CanvasOp]>>) -> Self {
        Self {
            data: Arc::new(PictureData {
                view_box,
                ops: balance_saves(ops.into()),
            }),
        }
    }

    /// The intrinsic coordinate rectangle the picture was authored against.
    #[inline]
    pub fn view_box(&self) -> Rect {
        self.data.view_box
    }

    /// The recorded ops.
    #[inline]
    pub fn ops(&self) -> &[CanvasOp] {
        &self.data.ops
    }

    /// Returns `true` if the view box has a positive width and height.
    ///
    /// Pictures with an empty view box cannot be fitted into a target.
    #[inline]
    pub fn has_drawable_view_box(&self) -> bool {
        let vb = self.data.view_box;
        vb.width() > 0.0 && vb.height() > 0.0
    }

    /// Replay the recorded ops onto `canvas` in its current state.
    pub fn replay<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        for op in self.ops() {
            canvas.apply(op);
        }
    }

    /// Returns `true` if both handles refer to the same recording.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }
}

/// Returns `ops` unchanged when its saves and restores already pair up.
fn balance_saves(ops: Arc<[CanvasOp]>) -> Arc<[CanvasOp]> {
    let mut depth = 0_usize;
    let mut stray = false;
    for op in ops.iter() {
        match op {
            CanvasOp::Save => depth += 1,
            CanvasOp::Restore if depth == 0 => stray = true,
            CanvasOp::Restore => depth -= 1,
            _ => {}
        }
    }
    if !stray && depth == 0 {
        return ops;
    }

    let mut balanced = Vec::with_capacity(ops.len() + depth);
    let mut open = 0_usize;
    for op in ops.iter() {
        match op {
            CanvasOp::Save => open += 1,
            CanvasOp::Restore if open == 0 => continue,
            CanvasOp::Restore => open -= 1,
            _ => {}
        }
        balanced.push(op.clone());
    }
    balanced.extend(core::iter::repeat_n(CanvasOp::Restore, open));
    balanced.into()
}

impl PartialEq for Picture {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for Picture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Picture")
            .field("view_box", &self.data.view_box)
            .field("ops", &self.data.ops.len())
            .finish()
    }
}

/// A [`Canvas`] that records every call into a [`Picture`].
///
/// Unmatched `restore` calls are dropped while recording, and any saves still
/// open at [`PictureRecorder::finish`] are closed by [`Picture::new`], so
/// replaying the result never disturbs the caller's state stack.
#[derive(Debug, Default)]
pub struct PictureRecorder {
    ops: Vec<CanvasOp>,
    depth: usize,
}

impl PictureRecorder {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ops recorded so far.
    pub fn ops(&self) -> &[CanvasOp] {
        &self.ops
    }

    /// Finish recording and wrap the ops into a picture with `view_box`.
    pub fn finish(self, view_box: Rect) -> Picture {
        Picture::new(view_box, self.ops)
    }
}

impl Canvas for PictureRecorder {
    fn save(&mut self) {
        self.depth += 1;
        self.ops.push(CanvasOp::Save);
    }

    fn restore(&mut self) {
        if self.depth == 0 {
            return;
        }
        self.depth -= 1;
        self.ops.push(CanvasOp::Restore);
    }

    fn translate(&mut self, offset: Vec2) {
        self.ops.push(CanvasOp::Translate(offset));
    }

    fn scale(&mut self, sx: f64, sy: f64) {
        self.ops.push(CanvasOp::Scale { sx, sy });
    }

    fn clip_rect(&mut self, rect: Rect) {
        self.ops.push(CanvasOp::ClipRect(rect));
    }

    fn fill(&mut self, path: &BezPath, brush: &Brush) {
        self.ops.push(CanvasOp::Fill {
            path: path.clone(),
            brush: brush.clone(),
        });
    }

    fn stroke(&mut self, path: &BezPath, style: &Stroke, brush: &Brush) {
        self.ops.push(CanvasOp::Stroke {
            path: path.clone(),
            style: style.clone(),
            brush: brush.clone(),
        });
    }

    fn draw_picture(&mut self, picture: &Picture) {
        self.ops.push(CanvasOp::DrawPicture(picture.clone()));
    }
}

/// Record the calls issued by `f` into a new picture authored against
/// `view_box`.
pub fn record_picture<F>(view_box: Rect, f: F) -> Picture
where
    F: FnOnce(&mut PictureRecorder),
{
    let mut recorder = PictureRecorder::new();
    f(&mut recorder);
    recorder.finish(view_box)
}

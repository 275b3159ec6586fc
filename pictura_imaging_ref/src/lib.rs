// Copyright 2025 the Pictura Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pictura Imaging Reference Canvas.
//!
//! This crate provides a small, stateful implementation of [`Canvas`] for
//! **op recording and state tracing**.
//!
//! It is intentionally *not* a renderer:
//! - It does **not** rasterize to pixels.
//! - It does **not** replay nested pictures; a picture draw is logged as a
//!   single event.
//! - It is intended primarily for tests and debugging that want to assert on
//!   emitted ops and the canvas state at the time each op is applied.
//!
//! The tracked clip is kept in device space as an axis-aligned rectangle. This
//! is exact for transforms made of translations and (possibly negative)
//! scales, which is everything fitted picture painting produces.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

use pictura_imaging::{Affine, BezPath, Brush, Canvas, CanvasOp, Picture, Rect, Stroke, Vec2};

/// Snapshot of the current canvas state.
#[derive(Clone, Debug, PartialEq)]
pub struct StateSnapshot {
    /// Current local-to-device transform.
    pub transform: Affine,
    /// Number of saves that have not been restored yet.
    pub save_depth: u32,
    /// Current clip in device space, if any clip is active.
    pub clip: Option<Rect>,
}

impl Default for StateSnapshot {
    fn default() -> Self {
        Self {
            transform: Affine::IDENTITY,
            save_depth: 0,
            clip: None,
        }
    }
}

impl StateSnapshot {
    /// Device-space bounds of a local rectangle under the current transform.
    pub fn device_rect(&self, local: Rect) -> Rect {
        self.transform.transform_rect_bbox(local)
    }
}

/// Event recorded by the reference canvas.
#[derive(Clone, Debug)]
pub enum Event {
    /// State operation and the resulting state snapshot.
    State {
        /// State operation that was applied.
        op: CanvasOp,
        /// Snapshot after applying the state operation.
        state: StateSnapshot,
    },
    /// Draw operation and the state snapshot used for drawing.
    Draw {
        /// Draw operation that was applied.
        op: CanvasOp,
        /// Snapshot at the time of drawing.
        state: StateSnapshot,
    },
}

impl Event {
    /// The operation this event was recorded for.
    pub fn op(&self) -> &CanvasOp {
        match self {
            Self::State { op, .. } | Self::Draw { op, .. } => op,
        }
    }

    /// The state snapshot attached to this event.
    pub fn state(&self) -> &StateSnapshot {
        match self {
            Self::State { state, .. } | Self::Draw { state, .. } => state,
        }
    }
}

/// Simple reference implementation of [`Canvas`].
///
/// This canvas:
/// - Tracks the current transform, save depth and device-space clip,
/// - Records [`Event`]s as state and draw operations are applied,
/// - Tolerates a `restore` with nothing saved (it is logged and ignored).
#[derive(Default, Debug)]
pub struct RefCanvas {
    /// Log of events in the order they were applied.
    events: Vec<Event>,
    /// Current canvas state.
    state: StateSnapshot,
    /// Saved `(transform, clip)` pairs.
    stack: Vec<(Affine, Option<Rect>)>,
}

impl RefCanvas {
    /// Create an empty canvas with an identity transform and no clip.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a slice of recorded events.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Returns the recorded operations without their snapshots.
    pub fn ops(&self) -> Vec<CanvasOp> {
        self.events.iter().map(|e| e.op().clone()).collect()
    }

    /// Returns the current state.
    pub fn state(&self) -> &StateSnapshot {
        &self.state
    }

    /// Number of `save` calls observed.
    pub fn saves(&self) -> usize {
        self.count(|op| matches!(op, CanvasOp::Save))
    }

    /// Number of `restore` calls observed, including unmatched ones.
    pub fn restores(&self) -> usize {
        self.count(|op| matches!(op, CanvasOp::Restore))
    }

    /// Draw events only.
    pub fn draws(&self) -> impl Iterator<Item = (&CanvasOp, &StateSnapshot)> {
        self.events.iter().filter_map(|e| match e {
            Event::Draw { op, state } => Some((op, state)),
            Event::State { .. } => None,
        })
    }

    /// Clears all recorded events but keeps the current state.
    pub fn clear_events(&mut self) {
        self.events.clear();
    }

    fn count(&self, pred: impl Fn(&CanvasOp) -> bool) -> usize {
        self.events.iter().filter(|e| pred(e.op())).count()
    }

    fn push_state(&mut self, op: CanvasOp) {
        self.events.push(Event::State {
            op,
            state: self.state.clone(),
        });
    }

    fn push_draw(&mut self, op: CanvasOp) {
        self.events.push(Event::Draw {
            op,
            state: self.state.clone(),
        });
    }

    fn sync_depth(&mut self) {
        self.state.save_depth = u32::try_from(self.stack.len())
            .expect("RefCanvas: too many save stack entries for u32");
    }
}

impl Canvas for RefCanvas {
    fn save(&mut self) {
        self.stack.push((self.state.transform, self.state.clip));
        self.sync_depth();
        self.push_state(CanvasOp::Save);
    }

    fn restore(&mut self) {
        if let Some((transform, clip)) = self.stack.pop() {
            self.state.transform = transform;
            self.state.clip = clip;
            self.sync_depth();
        }
        self.push_state(CanvasOp::Restore);
    }

    fn translate(&mut self, offset: Vec2) {
        self.state.transform *= Affine::translate(offset);
        self.push_state(CanvasOp::Translate(offset));
    }

    fn scale(&mut self, sx: f64, sy: f64) {
        self.state.transform *= Affine::scale_non_uniform(sx, sy);
        self.push_state(CanvasOp::Scale { sx, sy });
    }

    fn clip_rect(&mut self, rect: Rect) {
        let device = self.state.device_rect(rect);
        self.state.clip = Some(match self.state.clip {
            Some(current) => current.intersect(device),
            None => device,
        });
        self.push_state(CanvasOp::ClipRect(rect));
    }

    fn fill(&mut self, path: &BezPath, brush: &Brush) {
        self.push_draw(CanvasOp::Fill {
            path: path.clone(),
            brush: brush.clone(),
        });
    }

    fn stroke(&mut self, path: &BezPath, style: &Stroke, brush: &Brush) {
        self.push_draw(CanvasOp::Stroke {
            path: path.clone(),
            style: style.clone(),
            brush: brush.clone(),
        });
    }

    fn draw_picture(&mut self, picture: &Picture) {
        self.push_draw(CanvasOp::DrawPicture(picture.clone()));
    }
}

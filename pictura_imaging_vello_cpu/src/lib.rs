// Copyright 2025 the Pictura Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vello CPU–backed implementation of the Pictura [`Canvas`].
//!
//! [`VelloCpuCanvas`] borrows a sparse-strips [`vello_cpu::RenderContext`] and
//! turns canvas calls into render-context commands, so a fitted picture can be
//! rasterized on the CPU with the same code path that is traced in tests.
//!
//! Clips are implemented as clip layers. Every [`Canvas::clip_rect`] pushes one
//! layer, and [`Canvas::restore`] pops the layers pushed since the matching
//! [`Canvas::save`]. Layers still open when the canvas is dropped are popped
//! then, so the render context is always left balanced.

#![deny(unsafe_code)]
#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use kurbo::{Affine, Cap, Join, Shape};
use pictura_imaging::{BezPath, Brush, Canvas, Rect, Stroke, Vec2};
use vello_cpu::kurbo::{
    Affine as CpuAffine, Cap as CpuCap, Join as CpuJoin, Stroke as CpuStroke,
};
use vello_cpu::{Image as CpuImage, ImageSource, RenderContext};

const CLIP_TOLERANCE: f64 = 0.1;

#[derive(Copy, Clone, Debug, PartialEq)]
struct SavedState {
    transform: Affine,
    /// Clip layers open at the time of the save.
    clip_layers: u32,
}

/// CPU-backed canvas drawing into a `vello_cpu` render context.
pub struct VelloCpuCanvas<'ctx> {
    /// Underlying Vello CPU render context to draw into.
    pub ctx: &'ctx mut RenderContext,
    stack: Vec<SavedState>,
    transform: Affine,
    /// Clip layers pushed since the most recent save.
    clip_layers: u32,
}

impl fmt::Debug for VelloCpuCanvas<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VelloCpuCanvas")
            .field("transform", &self.transform)
            .field("save_depth", &self.stack.len())
            .field("clip_layers", &self.clip_layers)
            .finish_non_exhaustive()
    }
}

impl<'ctx> VelloCpuCanvas<'ctx> {
    /// Create a canvas that renders into `ctx`.
    ///
    /// The context's current transform becomes the canvas's base transform.
    pub fn new(ctx: &'ctx mut RenderContext) -> Self {
        let transform = Affine::new(ctx.transform().as_coeffs());
        Self {
            ctx,
            stack: Vec::new(),
            transform,
            clip_layers: 0,
        }
    }

    /// Current local-to-device transform.
    pub fn transform(&self) -> Affine {
        self.transform
    }

    /// Number of saves that have not been restored yet.
    pub fn save_depth(&self) -> usize {
        self.stack.len()
    }

    fn affine_to_cpu(xf: Affine) -> CpuAffine {
        CpuAffine::new(xf.as_coeffs())
    }

    fn stroke_to_cpu(style: &Stroke) -> CpuStroke {
        let mut stroke = CpuStroke::new(style.width)
            .with_dashes(style.dash_offset, style.dash_pattern.iter().copied());
        stroke.miter_limit = style.miter_limit;
        stroke.join = match style.join {
            Join::Bevel => CpuJoin::Bevel,
            Join::Miter => CpuJoin::Miter,
            Join::Round => CpuJoin::Round,
        };
        stroke.start_cap = Self::cap_to_cpu(style.start_cap);
        stroke.end_cap = Self::cap_to_cpu(style.end_cap);
        stroke
    }

    fn cap_to_cpu(cap: Cap) -> CpuCap {
        match cap {
            Cap::Butt => CpuCap::Butt,
            Cap::Round => CpuCap::Round,
            Cap::Square => CpuCap::Square,
        }
    }

    fn set_transform(&mut self, transform: Affine) {
        self.transform = transform;
        self.ctx.set_transform(Self::affine_to_cpu(transform));
    }

    fn set_brush(&mut self, brush: &Brush) {
        match brush.clone() {
            Brush::Solid(color) => self.ctx.set_paint(color),
            Brush::Gradient(gradient) => self.ctx.set_paint(gradient),
            Brush::Image(image_brush) => {
                let source = ImageSource::from_peniko_image_data(&image_brush.image);
                self.ctx.set_paint(CpuImage {
                    image: source,
                    sampler: image_brush.sampler,
                });
            }
        }
    }

    fn pop_clip_layers(&mut self, count: u32) {
        for _ in 0..count {
            self.ctx.pop_layer();
        }
    }
}

impl Canvas for VelloCpuCanvas<'_> {
    fn save(&mut self) {
        self.stack.push(SavedState {
            transform: self.transform,
            clip_layers: self.clip_layers,
        });
        self.clip_layers = 0;
    }

    fn restore(&mut self) {
        let Some(saved) = self.stack.pop() else {
            return;
        };
        self.pop_clip_layers(self.clip_layers);
        self.clip_layers = saved.clip_layers;
        self.set_transform(saved.transform);
    }

    fn translate(&mut self, offset: Vec2) {
        self.set_transform(self.transform * Affine::translate(offset));
    }

    fn scale(&mut self, sx: f64, sy: f64) {
        self.set_transform(self.transform * Affine::scale_non_uniform(sx, sy));
    }

    fn clip_rect(&mut self, rect: Rect) {
        let path = rect.to_path(CLIP_TOLERANCE);
        self.ctx.push_clip_layer(&path);
        self.clip_layers += 1;
    }

    fn fill(&mut self, path: &BezPath, brush: &Brush) {
        self.set_brush(brush);
        self.ctx.fill_path(path);
    }

    fn stroke(&mut self, path: &BezPath, style: &Stroke, brush: &Brush) {
        self.set_brush(brush);
        self.ctx.set_stroke(Self::stroke_to_cpu(style));
        self.ctx.stroke_path(path);
    }
}

impl Drop for VelloCpuCanvas<'_> {
    fn drop(&mut self) {
        let open: u32 = self.clip_layers + self.stack.iter().map(|s| s.clip_layers).sum::<u32>();
        self.pop_clip_layers(open);
    }
}

// Copyright 2025 the Pictura Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Size, Vec2};
use pictura_imaging::{Canvas, CanvasExt, Picture};
use pictura_view::{CanvasTransform, compute_transform_with};

use crate::config::{PaintConfig, PaintError};
use crate::log;

/// Why a paint call drew nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SkipReason {
    /// No picture was supplied.
    NoPicture,
    /// No target size was supplied.
    NoTargetSize,
    /// The target size has a zero (or invalid) width or height.
    EmptyTargetSize,
    /// The picture's view box has a zero (or negative) width or height.
    EmptyViewBox,
}

/// Result of a paint call that passed configuration checks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PaintOutcome {
    /// The picture was drawn with the given viewport transform.
    Painted {
        /// Transform applied after the offset and any mirroring.
        transform: CanvasTransform,
    },
    /// Nothing was drawn and no canvas call was issued.
    Skipped(SkipReason),
}

impl PaintOutcome {
    /// Returns `true` if the picture was drawn.
    #[must_use]
    pub fn is_painted(&self) -> bool {
        matches!(self, Self::Painted { .. })
    }
}

/// Paints `picture` fitted into the `target` rectangle at `offset`.
///
/// The configuration is validated before anything else, so an invalid
/// configuration is reported even when there is nothing to draw. Missing or
/// empty inputs then produce [`PaintOutcome::Skipped`] without touching the
/// canvas.
///
/// Otherwise, inside a single save/restore pair:
/// 1. translate to `offset`;
/// 2. mirror about the target's vertical center line if the configuration
///    asks for right-to-left mirroring;
/// 3. apply the viewport-fit scale, then its translation;
/// 4. clip to the view box unless drawing outside it is allowed;
/// 5. draw the picture.
pub fn paint<C: Canvas + ?Sized>(
    canvas: &mut C,
    offset: Vec2,
    target: Option<Size>,
    picture: Option<&Picture>,
    config: &PaintConfig,
) -> Result<PaintOutcome, PaintError> {
    config.validate()?;
    Ok(paint_validated(canvas, offset, target, picture, config))
}

fn paint_validated<C: Canvas + ?Sized>(
    canvas: &mut C,
    offset: Vec2,
    target: Option<Size>,
    picture: Option<&Picture>,
    config: &PaintConfig,
) -> PaintOutcome {
    let (picture, size) = match check_inputs(target, picture) {
        Ok(inputs) => inputs,
        Err(reason) => {
            log::debug!(?reason, "skipping picture paint");
            return PaintOutcome::Skipped(reason);
        }
    };

    let view_box = picture.view_box();
    let transform = compute_transform_with(config.fit_policy, size, view_box);
    log::debug!(
        scale_x = transform.scale_x,
        scale_y = transform.scale_y,
        translate_x = transform.translate_x,
        translate_y = transform.translate_y,
        mirrored = config.mirrors(),
        clipped = config.clips(),
        "painting picture"
    );

    canvas.with_save(|canvas| {
        canvas.translate(offset);
        if config.mirrors() {
            canvas.translate(Vec2::new(size.width, 0.0));
            canvas.scale(-1.0, 1.0);
        }
        canvas.scale(transform.scale_x, transform.scale_y);
        if !transform.is_scale_only() {
            canvas.translate(transform.translation());
        }
        if config.clips() {
            canvas.clip_rect(view_box);
        }
        canvas.draw_picture(picture);
    });

    PaintOutcome::Painted { transform }
}

fn check_inputs(
    target: Option<Size>,
    picture: Option<&Picture>,
) -> Result<(&Picture, Size), SkipReason> {
    let picture = picture.ok_or(SkipReason::NoPicture)?;
    let size = target.ok_or(SkipReason::NoTargetSize)?;
    // Written so that NaN components count as empty.
    if !(size.width > 0.0 && size.height > 0.0) {
        return Err(SkipReason::EmptyTargetSize);
    }
    if !picture.has_drawable_view_box() {
        return Err(SkipReason::EmptyViewBox);
    }
    Ok((picture, size))
}

/// A validated [`PaintConfig`] bundled with the paint entry point.
///
/// Construction fails on an invalid configuration, so a `Painter` can only
/// fail by skipping.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Painter {
    config: PaintConfig,
}

impl Painter {
    /// Validates `config` and wraps it.
    pub fn new(config: PaintConfig) -> Result<Self, PaintError> {
        config.validate()?;
        if config.allow_drawing_outside_view_box {
            log::warn!("painter allows drawing outside the view box; overdraw is unbounded");
        }
        Ok(Self { config })
    }

    /// The wrapped configuration.
    #[must_use]
    pub fn config(&self) -> &PaintConfig {
        &self.config
    }

    /// Paints with the wrapped configuration. See [`paint`].
    pub fn paint<C: Canvas + ?Sized>(
        &self,
        canvas: &mut C,
        offset: Vec2,
        target: Option<Size>,
        picture: Option<&Picture>,
    ) -> PaintOutcome {
        paint_validated(canvas, offset, target, picture, &self.config)
    }
}

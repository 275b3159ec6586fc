// Copyright 2025 the Pictura Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Rect, Size, Vec2};

use crate::modes::FitPolicy;

/// Scale + translation mapping view-box space into target space.
///
/// The transform is applied to a canvas as `scale(scale_x, scale_y)` followed
/// by `translate(translate_x, translate_y)`. Because canvas transforms compose
/// in call order, the translation is expressed in view-box units: a view-box
/// point `p` lands at `scale * (p + translate)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasTransform {
    /// Scale factor along X.
    pub scale_x: f64,
    /// Scale factor along Y.
    pub scale_y: f64,
    /// Translation along X, in view-box units.
    pub translate_x: f64,
    /// Translation along Y, in view-box units.
    pub translate_y: f64,
}

impl CanvasTransform {
    /// The transform that leaves view-box coordinates unchanged.
    pub const IDENTITY: Self = Self::new(1.0, 1.0, 0.0, 0.0);

    /// Creates a transform from its components.
    #[must_use]
    pub const fn new(scale_x: f64, scale_y: f64, translate_x: f64, translate_y: f64) -> Self {
        Self {
            scale_x,
            scale_y,
            translate_x,
            translate_y,
        }
    }

    /// Returns the translation as a vector.
    #[must_use]
    pub fn translation(&self) -> Vec2 {
        Vec2::new(self.translate_x, self.translate_y)
    }

    /// Returns `true` if both axes use the same scale factor.
    #[must_use]
    pub fn is_uniform(&self) -> bool {
        self.scale_x == self.scale_y
    }

    /// Returns `true` if no translation is applied after scaling.
    #[must_use]
    pub fn is_scale_only(&self) -> bool {
        self.translate_x == 0.0 && self.translate_y == 0.0
    }

    /// The equivalent affine map (scale applied after translate, matching
    /// canvas call order).
    #[must_use]
    pub fn to_affine(&self) -> Affine {
        Affine::scale_non_uniform(self.scale_x, self.scale_y)
            * Affine::translate(self.translation())
    }

    /// Maps a view-box-space rectangle into target space.
    #[must_use]
    pub fn map_rect(&self, rect: Rect) -> Rect {
        self.to_affine().transform_rect_bbox(rect)
    }
}

impl Default for CanvasTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Reasons a fit cannot be computed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FitError {
    /// The view box has a zero or negative width or height.
    #[error("view box has no area")]
    EmptyViewBox,
    /// The target size has a zero or negative width or height.
    #[error("target size has no area")]
    EmptyTarget,
    /// An input component is NaN or infinite.
    #[error("fit inputs must be finite")]
    NonFinite,
}

/// Computes the viewport-fit transform with [`FitPolicy::ViewBoxDelta`].
///
/// See [`compute_transform_with`].
#[must_use]
pub fn compute_transform(target: Size, view_box: Rect) -> CanvasTransform {
    compute_transform_with(FitPolicy::ViewBoxDelta, target, view_box)
}

/// Computes the transform that fits `view_box` into `target`.
///
/// The scale is uniform and chosen from the more constraining (binding) axis.
/// When both axes produce exactly the same scale the result is a pure scale
/// for [`FitPolicy::ViewBoxDelta`]; near-equal scales fall through to one of
/// the binding branches. The free axis is then offset according to `policy`.
///
/// Inputs are not checked. A view box with zero width or height yields an
/// infinite scale on that axis, and an empty target yields zero scale; the
/// result may then hold infinite or NaN factors but the call never panics.
/// Use [`try_compute_transform_with`] when inputs are not already validated.
#[must_use]
pub fn compute_transform_with(policy: FitPolicy, target: Size, view_box: Rect) -> CanvasTransform {
    let vb_w = view_box.width();
    let vb_h = view_box.height();
    let xscale = target.width / vb_w;
    let yscale = target.height / vb_h;

    match policy {
        FitPolicy::ViewBoxDelta => {
            if xscale == yscale {
                CanvasTransform::new(xscale, yscale, 0.0, 0.0)
            } else if xscale < yscale {
                CanvasTransform::new(xscale, xscale, 0.0, (vb_w - vb_h) / 2.0)
            } else {
                CanvasTransform::new(yscale, yscale, (vb_h - vb_w) / 2.0, 0.0)
            }
        }
        FitPolicy::Center => {
            let scale = xscale.min(yscale);
            CanvasTransform::new(
                scale,
                scale,
                (target.width / scale - vb_w) / 2.0 - view_box.min_x(),
                (target.height / scale - vb_h) / 2.0 - view_box.min_y(),
            )
        }
    }
}

/// Checked form of [`compute_transform_with`].
///
/// Rejects non-finite inputs, an empty target and an empty view box instead of
/// producing infinite or NaN scale factors.
pub fn try_compute_transform_with(
    policy: FitPolicy,
    target: Size,
    view_box: Rect,
) -> Result<CanvasTransform, FitError> {
    let finite = target.width.is_finite()
        && target.height.is_finite()
        && view_box.x0.is_finite()
        && view_box.y0.is_finite()
        && view_box.x1.is_finite()
        && view_box.y1.is_finite();
    if !finite {
        return Err(FitError::NonFinite);
    }
    if target.width <= 0.0 || target.height <= 0.0 {
        return Err(FitError::EmptyTarget);
    }
    if view_box.width() <= 0.0 || view_box.height() <= 0.0 {
        return Err(FitError::EmptyViewBox);
    }
    Ok(compute_transform_with(policy, target, view_box))
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect, Size};

    use super::*;

    #[test]
    fn equal_scales_are_pure_scale() {
        let t = compute_transform(Size::new(100.0, 100.0), Rect::new(0.0, 0.0, 50.0, 50.0));
        assert_eq!(t, CanvasTransform::new(2.0, 2.0, 0.0, 0.0));
        assert!(t.is_uniform());
        assert!(t.is_scale_only());
    }

    #[test]
    fn equal_aspect_ratios_fit_without_translation() {
        for (target, view_box) in [
            (Size::new(300.0, 150.0), Rect::new(0.0, 0.0, 40.0, 20.0)),
            (Size::new(64.0, 256.0), Rect::new(0.0, 0.0, 8.0, 32.0)),
            (Size::new(10.0, 10.0), Rect::new(0.0, 0.0, 1.0, 1.0)),
        ] {
            let t = compute_transform(target, view_box);
            assert!(t.is_uniform(), "{target:?} / {view_box:?}");
            assert!(t.is_scale_only(), "{target:?} / {view_box:?}");
        }
    }

    #[test]
    fn wide_target_binds_on_height() {
        // xscale = 5, yscale = 2; offset is (50 - 40) / 2 in view-box units.
        let t = compute_transform(Size::new(200.0, 100.0), Rect::new(0.0, 0.0, 40.0, 50.0));
        assert_eq!(t, CanvasTransform::new(2.0, 2.0, 5.0, 0.0));
        assert_eq!(t.map_rect(Rect::new(0.0, 0.0, 40.0, 50.0)), Rect::new(10.0, 0.0, 90.0, 100.0));
    }

    #[test]
    fn wide_target_with_square_view_box_has_no_offset() {
        // xscale = 4, yscale = 2; the view-box delta is zero.
        let t = compute_transform(Size::new(200.0, 100.0), Rect::new(0.0, 0.0, 50.0, 50.0));
        assert_eq!(t, CanvasTransform::new(2.0, 2.0, 0.0, 0.0));
    }

    #[test]
    fn tall_target_binds_on_width() {
        // xscale = 2, yscale = 5.
        let t = compute_transform(Size::new(100.0, 200.0), Rect::new(0.0, 0.0, 50.0, 40.0));
        assert_eq!(t, CanvasTransform::new(2.0, 2.0, 0.0, 5.0));
    }

    #[test]
    fn binding_scale_keeps_content_inside_target() {
        let target = Size::new(123.0, 77.0);
        let view_box = Rect::new(0.0, 0.0, 30.0, 45.0);
        let t = compute_transform_with(FitPolicy::Center, target, view_box);
        let mapped = t.map_rect(view_box);

        assert!(mapped.width() <= target.width + 1e-9);
        assert!(mapped.height() <= target.height + 1e-9);
        assert!((mapped.height() - target.height).abs() < 1e-9);
    }

    #[test]
    fn center_policy_centers_free_axis_in_target() {
        let target = Size::new(200.0, 100.0);
        let view_box = Rect::new(0.0, 0.0, 40.0, 50.0);
        let t = compute_transform_with(FitPolicy::Center, target, view_box);

        assert_eq!(t, CanvasTransform::new(2.0, 2.0, 30.0, 0.0));
        assert_eq!(t.map_rect(view_box), Rect::new(60.0, 0.0, 140.0, 100.0));
    }

    #[test]
    fn center_policy_compensates_view_box_origin() {
        let target = Size::new(100.0, 100.0);
        let view_box = Rect::new(10.0, 20.0, 60.0, 70.0);
        let t = compute_transform_with(FitPolicy::Center, target, view_box);

        assert_eq!(t.map_rect(view_box), Rect::new(0.0, 0.0, 100.0, 100.0));
    }

    #[test]
    fn affine_matches_scale_then_translate() {
        let t = CanvasTransform::new(2.0, 3.0, -5.0, 1.0);
        let p = t.to_affine() * Point::new(10.0, 10.0);
        assert_eq!(p, Point::new(10.0, 33.0));
    }

    #[test]
    fn checked_fit_rejects_degenerate_inputs() {
        let vb = Rect::new(0.0, 0.0, 10.0, 10.0);
        let flat_vb = Rect::new(0.0, 0.0, 0.0, 5.0);
        let policy = FitPolicy::default();

        assert_eq!(
            try_compute_transform_with(policy, Size::new(0.0, 10.0), vb),
            Err(FitError::EmptyTarget)
        );
        assert_eq!(
            try_compute_transform_with(policy, Size::new(10.0, 10.0), flat_vb),
            Err(FitError::EmptyViewBox)
        );
        assert_eq!(
            try_compute_transform_with(policy, Size::new(f64::NAN, 10.0), vb),
            Err(FitError::NonFinite)
        );
        assert_eq!(
            try_compute_transform_with(policy, Size::new(20.0, 20.0), vb),
            Ok(CanvasTransform::new(2.0, 2.0, 0.0, 0.0))
        );
    }

    #[test]
    fn unchecked_fit_tolerates_zero_width_view_box() {
        let flat_vb = Rect::new(0.0, 0.0, 0.0, 10.0);
        let target = Size::new(10.0, 10.0);

        // xscale is infinite, so height binds with a finite result.
        assert_eq!(
            compute_transform(target, flat_vb),
            CanvasTransform::new(1.0, 1.0, 5.0, 0.0)
        );
        assert_eq!(
            compute_transform_with(FitPolicy::Center, target, flat_vb),
            CanvasTransform::new(1.0, 1.0, 5.0, 0.0)
        );

        let point = compute_transform(target, Rect::ZERO);
        assert!(point.scale_x.is_infinite() && point.scale_y.is_infinite());

        let nothing = compute_transform(Size::ZERO, Rect::ZERO);
        assert!(nothing.scale_x.is_nan());
    }
}

// Copyright 2025 the Pictura Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// How the free (non-binding) axis is centered when fitting a view box.
///
/// This is consulted by [`crate::compute_transform_with`] and
/// [`crate::try_compute_transform_with`]. Both policies pick the same uniform
/// scale; they only differ in the translation applied after it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum FitPolicy {
    /// Offset the free axis by half the view box's own aspect delta.
    ///
    /// When width binds, the translation is `(vb.width - vb.height) / 2`
    /// along Y; when height binds, `(vb.height - vb.width) / 2` along X. The
    /// offset is in view-box units and ignores the target's extent, so it
    /// only centers exactly when the target was sized from the view box's
    /// aspect ratio upstream. The view box origin is not compensated.
    ///
    /// This is the compatible behavior and the default.
    #[default]
    ViewBoxDelta,
    /// Center the view box inside the target along the free axis.
    ///
    /// The translation is `(target_extent / scale - vb_extent) / 2 - vb_min`
    /// on each axis, so the mapped view box is always centered in the target
    /// and its origin lands where the fit puts it, regardless of the aspect
    /// ratios involved.
    Center,
}

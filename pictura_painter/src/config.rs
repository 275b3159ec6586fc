// Copyright 2025 the Pictura Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use pictura_view::FitPolicy;

/// Horizontal layout direction supplied by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextDirection {
    /// Left to right.
    Ltr,
    /// Right to left.
    Rtl,
}

/// Configuration errors caught before anything is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PaintError {
    /// Mirroring was requested but no text direction was supplied.
    ///
    /// Painting without mirroring here would look correct while ignoring the
    /// caller's explicit request, so it is rejected instead.
    #[error("match_text_direction is set but no text direction was provided")]
    MissingTextDirection,
}

/// Per-paint options for fitting a picture into its target.
///
/// The default paints left-to-right, clips to the view box and uses
/// [`FitPolicy::ViewBoxDelta`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PaintConfig {
    /// Mirror horizontally when the text direction is right-to-left.
    pub match_text_direction: bool,
    /// Layout direction; required when `match_text_direction` is set.
    pub text_direction: Option<TextDirection>,
    /// Skip the view-box clip and let the picture draw past its bounds.
    ///
    /// Pictures that draw far outside their view box cost overdraw with this
    /// set; nothing caps how far they may reach.
    pub allow_drawing_outside_view_box: bool,
    /// How the free axis is positioned after scaling.
    pub fit_policy: FitPolicy,
}

impl PaintConfig {
    /// Returns the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets [`PaintConfig::match_text_direction`].
    #[must_use]
    pub fn with_match_text_direction(mut self, match_text_direction: bool) -> Self {
        self.match_text_direction = match_text_direction;
        self
    }

    /// Sets [`PaintConfig::text_direction`].
    #[must_use]
    pub fn with_text_direction(mut self, text_direction: Option<TextDirection>) -> Self {
        self.text_direction = text_direction;
        self
    }

    /// Sets [`PaintConfig::allow_drawing_outside_view_box`].
    #[must_use]
    pub fn with_allow_drawing_outside_view_box(mut self, allow: bool) -> Self {
        self.allow_drawing_outside_view_box = allow;
        self
    }

    /// Sets [`PaintConfig::fit_policy`].
    #[must_use]
    pub fn with_fit_policy(mut self, fit_policy: FitPolicy) -> Self {
        self.fit_policy = fit_policy;
        self
    }

    /// Checks the configuration invariants.
    pub fn validate(&self) -> Result<(), PaintError> {
        if self.match_text_direction && self.text_direction.is_none() {
            return Err(PaintError::MissingTextDirection);
        }
        Ok(())
    }

    /// Returns `true` if painting should mirror horizontally.
    ///
    /// This assumes the configuration is valid.
    #[must_use]
    pub fn mirrors(&self) -> bool {
        self.match_text_direction && self.text_direction == Some(TextDirection::Rtl)
    }

    /// Returns `true` if painting clips to the view box.
    #[must_use]
    pub fn clips(&self) -> bool {
        !self.allow_drawing_outside_view_box
    }
}

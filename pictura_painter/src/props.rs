// Copyright 2025 the Pictura Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Retained paint inputs with change detection.

use kurbo::{Size, Vec2};
use pictura_imaging::{Canvas, Picture};
use pictura_view::FitPolicy;

use crate::config::{PaintConfig, PaintError, TextDirection};
use crate::log;
use crate::paint::{PaintOutcome, paint};

/// Whether a property change requires a repaint.
#[must_use]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Repaint {
    /// The new value equals the stored one.
    Unchanged,
    /// The stored value changed; schedule a repaint.
    Needed,
}

impl Repaint {
    /// Returns `true` for [`Repaint::Needed`].
    pub fn is_needed(self) -> bool {
        self == Self::Needed
    }

    fn from_changed(changed: bool) -> Self {
        if changed { Self::Needed } else { Self::Unchanged }
    }
}

/// Last-applied inputs for painting one picture.
///
/// Every setter compares against the stored value and reports a single
/// [`Repaint::Needed`] when it changed. Coalescing several `Needed` results
/// into one repaint is left to the host.
///
/// The text-direction pair is not validated on set, so the two fields may be
/// updated in either order. [`PictureProps::paint`] validates.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PictureProps {
    picture: Option<Picture>,
    config: PaintConfig,
    size: Option<Size>,
}

impl PictureProps {
    /// Creates props with no picture, no size and the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current picture.
    #[must_use]
    pub fn picture(&self) -> Option<&Picture> {
        self.picture.as_ref()
    }

    /// The current configuration.
    #[must_use]
    pub fn config(&self) -> &PaintConfig {
        &self.config
    }

    /// The current target size.
    #[must_use]
    pub fn size(&self) -> Option<Size> {
        self.size
    }

    /// Replaces the picture. Pictures compare by identity.
    pub fn set_picture(&mut self, picture: Option<Picture>) -> Repaint {
        Self::update(&mut self.picture, picture)
    }

    /// Sets whether to mirror for right-to-left layout.
    pub fn set_match_text_direction(&mut self, match_text_direction: bool) -> Repaint {
        Self::update(&mut self.config.match_text_direction, match_text_direction)
    }

    /// Sets the layout direction.
    pub fn set_text_direction(&mut self, text_direction: Option<TextDirection>) -> Repaint {
        Self::update(&mut self.config.text_direction, text_direction)
    }

    /// Sets whether the picture may draw outside its view box.
    pub fn set_allow_drawing_outside_view_box(&mut self, allow: bool) -> Repaint {
        let repaint = Self::update(&mut self.config.allow_drawing_outside_view_box, allow);
        if allow && repaint.is_needed() {
            log::warn!("drawing outside the view box enabled; overdraw is unbounded");
        }
        repaint
    }

    /// Sets the free-axis placement policy.
    pub fn set_fit_policy(&mut self, fit_policy: FitPolicy) -> Repaint {
        Self::update(&mut self.config.fit_policy, fit_policy)
    }

    /// Sets the target size.
    pub fn set_size(&mut self, size: Option<Size>) -> Repaint {
        Self::update(&mut self.size, size)
    }

    /// Replaces the whole configuration at once.
    ///
    /// Returns a single [`Repaint::Needed`] if any field changed.
    pub fn set_config(&mut self, config: PaintConfig) -> Repaint {
        let switched_on = config.allow_drawing_outside_view_box
            && !self.config.allow_drawing_outside_view_box;
        let repaint = Self::update(&mut self.config, config);
        if switched_on {
            log::warn!("drawing outside the view box enabled; overdraw is unbounded");
        }
        repaint
    }

    /// Paints the current picture at `offset` with the current values.
    pub fn paint<C: Canvas + ?Sized>(
        &self,
        canvas: &mut C,
        offset: Vec2,
    ) -> Result<PaintOutcome, PaintError> {
        paint(canvas, offset, self.size, self.picture.as_ref(), &self.config)
    }

    fn update<T: PartialEq>(slot: &mut T, value: T) -> Repaint {
        let changed = *slot != value;
        if changed {
            *slot = value;
        }
        Repaint::from_changed(changed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Rect;
    use pictura_imaging::record_picture;
    use pictura_imaging_ref::RefCanvas;

    #[test]
    fn each_change_reports_one_repaint() {
        let mut props = PictureProps::new();

        assert_eq!(props.set_match_text_direction(true), Repaint::Needed);
        assert_eq!(props.set_match_text_direction(true), Repaint::Unchanged);

        assert_eq!(props.set_text_direction(Some(TextDirection::Rtl)), Repaint::Needed);
        assert_eq!(props.set_text_direction(Some(TextDirection::Rtl)), Repaint::Unchanged);
        assert_eq!(props.set_text_direction(Some(TextDirection::Ltr)), Repaint::Needed);

        assert_eq!(props.set_fit_policy(FitPolicy::Center), Repaint::Needed);
        assert_eq!(props.set_fit_policy(FitPolicy::Center), Repaint::Unchanged);

        assert_eq!(props.set_allow_drawing_outside_view_box(true), Repaint::Needed);
        assert_eq!(props.set_allow_drawing_outside_view_box(true), Repaint::Unchanged);

        assert_eq!(props.set_size(Some(Size::new(4.0, 4.0))), Repaint::Needed);
        assert_eq!(props.set_size(Some(Size::new(4.0, 4.0))), Repaint::Unchanged);
        assert_eq!(props.set_size(None), Repaint::Needed);
    }

    #[test]
    fn pictures_compare_by_identity() {
        let view_box = Rect::new(0.0, 0.0, 8.0, 8.0);
        let a = record_picture(view_box, |_| {});
        let b = record_picture(view_box, |_| {});
        let mut props = PictureProps::new();

        assert_eq!(props.set_picture(Some(a.clone())), Repaint::Needed);
        assert_eq!(props.set_picture(Some(a.clone())), Repaint::Unchanged);
        assert_eq!(props.set_picture(Some(b)), Repaint::Needed);
        assert_eq!(props.set_picture(None), Repaint::Needed);
        assert_eq!(props.set_picture(None), Repaint::Unchanged);
    }

    #[test]
    fn set_config_coalesces_field_changes() {
        let mut props = PictureProps::new();
        let config = PaintConfig::new()
            .with_match_text_direction(true)
            .with_text_direction(Some(TextDirection::Rtl))
            .with_fit_policy(FitPolicy::Center);

        assert_eq!(props.set_config(config), Repaint::Needed);
        assert_eq!(props.set_config(config), Repaint::Unchanged);
        assert_eq!(props.config(), &config);
    }

    #[test]
    fn direction_pair_may_be_set_in_either_order() {
        let mut props = PictureProps::new();
        let picture = record_picture(Rect::new(0.0, 0.0, 5.0, 5.0), |_| {});
        let _ = props.set_size(Some(Size::new(10.0, 10.0)));
        let _ = props.set_picture(Some(picture));

        // Intermediate state is invalid and is only reported by paint.
        let _ = props.set_match_text_direction(true);
        let mut canvas = RefCanvas::new();
        assert_eq!(
            props.paint(&mut canvas, Vec2::ZERO),
            Err(PaintError::MissingTextDirection)
        );
        assert!(canvas.events().is_empty());

        let _ = props.set_text_direction(Some(TextDirection::Ltr));
        let outcome = props.paint(&mut canvas, Vec2::ZERO).expect("valid config");
        assert!(outcome.is_painted());
    }
}

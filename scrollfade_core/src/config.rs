// Copyright 2026 the Scrollfade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Controller configuration.
//!
//! [`FadeConfig`] holds the numeric parameters of the scroll mapping and is
//! validated once, when a controller is attached. [`Appearance`] carries the
//! static presentation settings written at attach time (transitions, origin,
//! overlay background).

use core::fmt;

use crate::css::{CssTransition, TimingFunction, TransitionProperty};

/// Upper bound of the overlay opacity at full effect, independent of
/// [`FadeConfig::min_opacity`].
pub const OVERLAY_MAX_OPACITY: f64 = 0.7;

/// Rotation at full effect, in degrees.
pub const MAX_ROTATION_DEG: f64 = 1.5;

/// Eased progress above which desaturation kicks in.
pub const DESATURATION_THRESHOLD: f64 = 0.6;

/// Slope mapping `eased - DESATURATION_THRESHOLD` onto `[0, 1]`.
pub const DESATURATION_GAIN: f64 = 2.5;

/// Saturation lost at full desaturation.
pub const SATURATION_LOSS: f64 = 0.3;

/// Numeric parameters of the scroll-to-presentation mapping.
///
/// All offsets are in CSS pixels of vertical scroll; `translate_y` is in CSS
/// pixels of element movement (negative moves up).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FadeConfig {
    /// Scroll offset at which the effect begins.
    pub start_offset: f64,
    /// Scroll offset at which the effect is complete. Must exceed
    /// `start_offset`.
    pub full_effect_offset: f64,
    /// Target opacity at full effect (0–1).
    pub min_opacity: f64,
    /// Fraction of the original size removed at full effect (0–1).
    pub scale_reduction: f64,
    /// Blur radius at full effect, in pixels.
    pub blur_max: f64,
    /// Vertical translation at full effect, in pixels.
    pub translate_y: f64,
}

impl FadeConfig {
    /// The site-logo preset: starts immediately, completes after 200px.
    pub const LOGO: Self = Self {
        start_offset: 0.0,
        full_effect_offset: 200.0,
        min_opacity: 0.15,
        scale_reduction: 0.08,
        blur_max: 1.5,
        translate_y: -8.0,
    };

    /// Length of the scroll range over which the effect plays.
    #[inline]
    #[must_use]
    pub fn span(&self) -> f64 {
        self.full_effect_offset - self.start_offset
    }

    /// Checks that every field is finite and within its documented range.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("start_offset", self.start_offset),
            ("full_effect_offset", self.full_effect_offset),
            ("min_opacity", self.min_opacity),
            ("scale_reduction", self.scale_reduction),
            ("blur_max", self.blur_max),
            ("translate_y", self.translate_y),
        ];
        if let Some(&(name, _)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ConfigError::NonFinite(name));
        }
        if self.full_effect_offset <= self.start_offset {
            return Err(ConfigError::EmptyRange {
                start: self.start_offset,
                full: self.full_effect_offset,
            });
        }
        if !(0.0..=1.0).contains(&self.min_opacity) {
            return Err(ConfigError::OpacityOutOfRange(self.min_opacity));
        }
        if !(0.0..=1.0).contains(&self.scale_reduction) {
            return Err(ConfigError::ScaleReductionOutOfRange(
                self.scale_reduction,
            ));
        }
        if self.blur_max < 0.0 {
            return Err(ConfigError::NegativeBlur(self.blur_max));
        }
        Ok(())
    }
}

impl Default for FadeConfig {
    fn default() -> Self {
        Self::LOGO
    }
}

/// Reasons a [`FadeConfig`] is rejected.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    /// `full_effect_offset` does not exceed `start_offset`.
    EmptyRange {
        /// The configured start offset.
        start: f64,
        /// The configured full-effect offset.
        full: f64,
    },
    /// `min_opacity` is outside `[0, 1]`.
    OpacityOutOfRange(f64),
    /// `scale_reduction` is outside `[0, 1]`.
    ScaleReductionOutOfRange(f64),
    /// `blur_max` is negative.
    NegativeBlur(f64),
    /// The named field is NaN or infinite.
    NonFinite(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyRange { start, full } => write!(
                f,
                "full_effect_offset ({full}) must be greater than start_offset ({start})"
            ),
            Self::OpacityOutOfRange(v) => write!(f, "min_opacity {v} is outside [0, 1]"),
            Self::ScaleReductionOutOfRange(v) => {
                write!(f, "scale_reduction {v} is outside [0, 1]")
            }
            Self::NegativeBlur(v) => write!(f, "blur_max {v} is negative"),
            Self::NonFinite(name) => write!(f, "{name} is not a finite number"),
        }
    }
}

impl core::error::Error for ConfigError {}

/// Static presentation settings applied once at attach time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Appearance {
    /// Transition used while full motion is allowed.
    pub transition: CssTransition,
    /// Transition used when the platform asks for reduced motion.
    pub reduced_transition: CssTransition,
    /// Overlay opacity transition.
    pub overlay_transition: CssTransition,
    /// `transform-origin` of the target.
    pub transform_origin: &'static str,
    /// `will-change` hint for the target.
    pub will_change: &'static str,
    /// `background` of the overlay.
    pub overlay_background: &'static str,
    /// `z-index` of the overlay.
    pub overlay_z_index: i32,
}

impl Appearance {
    /// Bottom-up white dissolve with a soft deceleration curve.
    pub const BOTTOM_UP_DISSOLVE: Self = Self {
        transition: CssTransition {
            property: TransitionProperty::All,
            duration_ms: 800,
            timing: TimingFunction::SOFT_DECELERATE,
        },
        reduced_transition: CssTransition {
            property: TransitionProperty::Opacity,
            duration_ms: 800,
            timing: TimingFunction::Linear,
        },
        overlay_transition: CssTransition {
            property: TransitionProperty::Opacity,
            duration_ms: 800,
            timing: TimingFunction::SOFT_DECELERATE,
        },
        transform_origin: "center bottom",
        will_change: "opacity, transform, filter",
        overlay_background: "linear-gradient(to top, rgba(255,255,255,1) 0%, \
            rgba(255,255,255,0.8) 30%, rgba(255,255,255,0.4) 60%, rgba(255,255,255,0) 100%)",
        overlay_z_index: 10,
    };
}

impl Default for Appearance {
    fn default() -> Self {
        Self::BOTTOM_UP_DISSOLVE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logo_preset_is_default_and_valid() {
        let config = FadeConfig::default();
        assert_eq!(config, FadeConfig::LOGO);
        assert_eq!(config.span(), 200.0);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn empty_range_rejected() {
        let config = FadeConfig {
            start_offset: 50.0,
            full_effect_offset: 50.0,
            ..FadeConfig::LOGO
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::EmptyRange {
                start: 50.0,
                full: 50.0
            })
        );
    }

    #[test]
    fn out_of_range_fields_rejected() {
        let opacity = FadeConfig {
            min_opacity: 1.5,
            ..FadeConfig::LOGO
        };
        assert_eq!(
            opacity.validate(),
            Err(ConfigError::OpacityOutOfRange(1.5))
        );

        let scale = FadeConfig {
            scale_reduction: -0.1,
            ..FadeConfig::LOGO
        };
        assert_eq!(
            scale.validate(),
            Err(ConfigError::ScaleReductionOutOfRange(-0.1))
        );

        let blur = FadeConfig {
            blur_max: -1.0,
            ..FadeConfig::LOGO
        };
        assert_eq!(blur.validate(), Err(ConfigError::NegativeBlur(-1.0)));
    }

    #[test]
    fn non_finite_field_named() {
        let config = FadeConfig {
            translate_y: f64::NAN,
            ..FadeConfig::LOGO
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonFinite("translate_y"))
        );
    }

    #[test]
    fn reduced_transition_is_linear_opacity_only() {
        let appearance = Appearance::default();
        assert_eq!(
            appearance.reduced_transition.property,
            TransitionProperty::Opacity
        );
        assert_eq!(appearance.reduced_transition.timing, TimingFunction::Linear);
    }
}

// Copyright 2026 the Scrollfade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Derived presentation values for one scroll offset.
//!
//! [`RenderState::compute`] is a pure function of the scroll offset and the
//! [`FadeConfig`]; nothing carries over between updates. [`RenderState::frame`]
//! then lowers the state to the [`StyleFrame`] a surface writes, honoring the
//! platform's [`MotionPreference`].

use crate::config::{
    Appearance, DESATURATION_GAIN, DESATURATION_THRESHOLD, FadeConfig, MAX_ROTATION_DEG,
    OVERLAY_MAX_OPACITY, SATURATION_LOSS,
};
use crate::css::{CssFilter, CssTransform, StyleFrame};
use crate::easing::{progress, smoothstep};

/// Whether the platform allows animated motion.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MotionPreference {
    /// Scale, translate, rotate, blur and saturation all animate.
    #[default]
    Full,
    /// Only opacity changes, linearly with scroll; transform and filter stay
    /// neutral.
    Reduced,
}

impl MotionPreference {
    /// Maps a `prefers-reduced-motion: reduce` match onto a preference.
    #[inline]
    #[must_use]
    pub const fn from_reduce_query(matches: bool) -> Self {
        if matches { Self::Reduced } else { Self::Full }
    }
}

/// All values derived from one scroll offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderState {
    /// Linear progress through the scroll range, `[0, 1]`.
    pub progress: f64,
    /// Smoothstep of `progress`, `[0, 1]`.
    pub eased: f64,
    /// Target opacity.
    pub opacity: f64,
    /// Target scale factor.
    pub scale: f64,
    /// Target vertical offset in pixels.
    pub y_offset: f64,
    /// Target blur radius in pixels.
    pub blur: f64,
    /// Target rotation in degrees.
    pub rotation: f64,
    /// Overlay opacity.
    pub overlay_opacity: f64,
    /// Saturation multiplier; `Some` only once `eased` passes
    /// [`DESATURATION_THRESHOLD`].
    pub saturation: Option<f64>,
}

impl RenderState {
    /// Values at rest (no scroll past the start offset).
    pub const RESTING: Self = Self {
        progress: 0.0,
        eased: 0.0,
        opacity: 1.0,
        scale: 1.0,
        y_offset: 0.0,
        blur: 0.0,
        rotation: 0.0,
        overlay_opacity: 0.0,
        saturation: None,
    };

    /// Computes every presentation value for `scroll`.
    #[must_use]
    pub fn compute(scroll: f64, config: &FadeConfig) -> Self {
        let progress = progress(scroll, config);
        let eased = smoothstep(progress);
        let saturation =
            (eased > DESATURATION_THRESHOLD).then(|| 1.0 - desaturation(eased) * SATURATION_LOSS);

        Self {
            progress,
            eased,
            opacity: 1.0 - eased * (1.0 - config.min_opacity),
            scale: 1.0 - eased * config.scale_reduction,
            y_offset: eased * config.translate_y,
            blur: eased * config.blur_max,
            rotation: eased * MAX_ROTATION_DEG,
            overlay_opacity: eased * OVERLAY_MAX_OPACITY,
            saturation,
        }
    }

    /// Lowers this state to the styles a surface writes.
    ///
    /// Under [`MotionPreference::Reduced`] the frame carries no transform or
    /// filter, both opacities follow the raw linear `progress`, and both
    /// elements get the linear reduced transition.
    #[must_use]
    pub fn frame(
        &self,
        motion: MotionPreference,
        config: &FadeConfig,
        appearance: &Appearance,
    ) -> StyleFrame {
        match motion {
            MotionPreference::Full => StyleFrame {
                opacity: self.opacity,
                transform: Some(CssTransform {
                    scale: self.scale,
                    translate_y: self.y_offset,
                    rotate_deg: self.rotation,
                }),
                filter: Some(CssFilter {
                    blur: self.blur,
                    saturate: self.saturation,
                }),
                transition: appearance.transition,
                overlay_opacity: self.overlay_opacity,
                overlay_transition: appearance.overlay_transition,
            },
            MotionPreference::Reduced => StyleFrame {
                opacity: 1.0 - self.progress * (1.0 - config.min_opacity),
                transform: None,
                filter: None,
                transition: appearance.reduced_transition,
                overlay_opacity: self.progress * OVERLAY_MAX_OPACITY,
                overlay_transition: appearance.reduced_transition,
            },
        }
    }
}

/// How far past [`DESATURATION_THRESHOLD`] `eased` is, rescaled to `[0, 1]`.
///
/// Zero at or below the threshold.
#[inline]
#[must_use]
pub fn desaturation(eased: f64) -> f64 {
    ((eased - DESATURATION_THRESHOLD) * DESATURATION_GAIN).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    fn assert_close(actual: f64, expected: f64, what: &str) {
        assert!(
            (actual - expected).abs() < EPS,
            "{what}: expected {expected}, got {actual}"
        );
    }

    #[test]
    fn at_or_before_start_is_resting() {
        let config = FadeConfig {
            start_offset: 30.0,
            ..FadeConfig::LOGO
        };
        for s in [-50.0, 0.0, 29.9, 30.0] {
            assert_eq!(RenderState::compute(s, &config), RenderState::RESTING);
        }
    }

    #[test]
    fn at_or_after_full_is_fully_eased() {
        let config = FadeConfig::LOGO;
        for s in [200.0, 201.0, 5000.0] {
            let state = RenderState::compute(s, &config);
            assert_close(state.opacity, config.min_opacity, "opacity");
            assert_close(state.scale, 1.0 - config.scale_reduction, "scale");
            assert_close(state.y_offset, config.translate_y, "y_offset");
            assert_close(state.blur, config.blur_max, "blur");
            assert_close(state.rotation, 1.5, "rotation");
            assert_close(state.overlay_opacity, 0.7, "overlay_opacity");
        }
    }

    #[test]
    fn halfway_scenario() {
        let state = RenderState::compute(100.0, &FadeConfig::LOGO);
        assert_close(state.progress, 0.5, "progress");
        assert_close(state.eased, 0.5, "eased");
        assert_close(state.opacity, 0.575, "opacity");
        assert_close(state.scale, 0.96, "scale");
        assert_close(state.y_offset, -4.0, "y_offset");
        assert_close(state.blur, 0.75, "blur");
        assert_close(state.rotation, 0.75, "rotation");
        assert_close(state.overlay_opacity, 0.35, "overlay_opacity");
        assert_eq!(state.saturation, None);
    }

    #[test]
    fn opacity_and_scale_are_monotonic() {
        let config = FadeConfig::LOGO;
        let mut prev = RenderState::compute(0.0, &config);
        for s in 1..=200 {
            let next = RenderState::compute(f64::from(s), &config);
            assert!(next.opacity <= prev.opacity, "opacity rose at {s}");
            assert!(next.scale <= prev.scale, "scale rose at {s}");
            assert!(next.blur >= prev.blur, "blur fell at {s}");
            prev = next;
        }
    }

    #[test]
    fn desaturation_bounds() {
        assert_eq!(desaturation(0.0), 0.0);
        assert_eq!(desaturation(0.6), 0.0);
        assert_close(desaturation(1.0), 1.0, "desaturation at 1");
        assert_close(desaturation(0.8), 0.5, "desaturation at 0.8");
    }

    #[test]
    fn saturation_only_in_tail() {
        let config = FadeConfig::LOGO;
        // eased(0.5) = 0.5, below the threshold.
        assert_eq!(RenderState::compute(100.0, &config).saturation, None);

        let full = RenderState::compute(200.0, &config);
        let saturation = full.saturation.expect("saturation at full effect");
        assert_close(saturation, 0.7, "saturation at full effect");
    }

    #[test]
    fn full_motion_frame_carries_transform_and_filter() {
        let config = FadeConfig::LOGO;
        let appearance = Appearance::default();
        let frame = RenderState::compute(100.0, &config).frame(
            MotionPreference::Full,
            &config,
            &appearance,
        );
        assert!(frame.transform.is_some(), "transform missing");
        assert!(frame.filter.is_some(), "filter missing");
        assert_eq!(frame.transition, appearance.transition);
        assert_eq!(frame.overlay_transition, appearance.overlay_transition);
    }

    #[test]
    fn reduced_motion_overlay_fades_linearly() {
        let config = FadeConfig::LOGO;
        let appearance = Appearance::default();
        let frame = RenderState::compute(120.0, &config).frame(
            MotionPreference::Reduced,
            &config,
            &appearance,
        );
        assert_eq!(frame.overlay_transition_value(), "opacity 800ms linear");
        assert_eq!(frame.transition_value(), frame.overlay_transition_value());
    }

    #[test]
    fn reduced_motion_frame_is_opacity_only() {
        let config = FadeConfig::LOGO;
        let appearance = Appearance::default();
        for s in [0.0, 50.0, 100.0, 150.0, 200.0, 400.0] {
            let state = RenderState::compute(s, &config);
            let frame = state.frame(MotionPreference::Reduced, &config, &appearance);
            assert_eq!(frame.transform_value(), "none");
            assert_eq!(frame.filter_value(), "none");
            assert_eq!(frame.transition, appearance.reduced_transition);
            assert_close(
                frame.opacity,
                1.0 - state.progress * (1.0 - config.min_opacity),
                "linear opacity",
            );
        }
    }

    #[test]
    fn reduce_query_maps_to_preference() {
        assert_eq!(
            MotionPreference::from_reduce_query(true),
            MotionPreference::Reduced
        );
        assert_eq!(
            MotionPreference::from_reduce_query(false),
            MotionPreference::Full
        );
    }
}

// Copyright 2026 the Scrollfade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typed CSS values written by the controller.
//!
//! Transform and filter are recomputed whole on every update and rendered
//! through [`Display`](core::fmt::Display), so a surface never patches a
//! previously written string.

use alloc::string::{String, ToString as _};
use core::fmt;

/// Which properties a transition animates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TransitionProperty {
    /// `all`
    All,
    /// `opacity`
    Opacity,
}

/// A CSS easing function.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TimingFunction {
    /// `linear`
    Linear,
    /// `cubic-bezier(x1, y1, x2, y2)`
    CubicBezier(f64, f64, f64, f64),
}

impl TimingFunction {
    /// Fast start, long gentle settle.
    pub const SOFT_DECELERATE: Self = Self::CubicBezier(0.23, 1.0, 0.32, 1.0);
}

impl fmt::Display for TimingFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => f.write_str("linear"),
            Self::CubicBezier(x1, y1, x2, y2) => {
                write!(f, "cubic-bezier({x1}, {y1}, {x2}, {y2})")
            }
        }
    }
}

/// A single-entry CSS `transition` value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CssTransition {
    /// Animated property.
    pub property: TransitionProperty,
    /// Duration in milliseconds.
    pub duration_ms: u32,
    /// Easing.
    pub timing: TimingFunction,
}

impl fmt::Display for CssTransition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let property = match self.property {
            TransitionProperty::All => "all",
            TransitionProperty::Opacity => "opacity",
        };
        write!(f, "{property} {}ms {}", self.duration_ms, self.timing)
    }
}

/// `transform: scale(..) translateY(..px) rotate(..deg)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CssTransform {
    /// Uniform scale factor.
    pub scale: f64,
    /// Vertical translation in pixels.
    pub translate_y: f64,
    /// Rotation in degrees.
    pub rotate_deg: f64,
}

impl fmt::Display for CssTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "scale({}) translateY({}px) rotate({}deg)",
            css_number(self.scale),
            css_number(self.translate_y),
            css_number(self.rotate_deg),
        )
    }
}

/// `filter: blur(..px) [saturate(..)]`, or `none`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CssFilter {
    /// Blur radius in pixels.
    pub blur: f64,
    /// Saturation multiplier, present only in the desaturating tail.
    pub saturate: Option<f64>,
}

impl fmt::Display for CssFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.saturate {
            Some(s) => write!(
                f,
                "blur({}px) saturate({})",
                css_number(self.blur),
                css_number(s)
            ),
            None if self.blur > 0.0 => write!(f, "blur({}px)", css_number(self.blur)),
            None => f.write_str("none"),
        }
    }
}

/// Everything written to the target and overlay for one update.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StyleFrame {
    /// Target opacity.
    pub opacity: f64,
    /// Target transform; `None` renders as `none`.
    pub transform: Option<CssTransform>,
    /// Target filter; `None` renders as `none`.
    pub filter: Option<CssFilter>,
    /// Target transition.
    pub transition: CssTransition,
    /// Overlay opacity.
    pub overlay_opacity: f64,
    /// Overlay transition.
    pub overlay_transition: CssTransition,
}

impl StyleFrame {
    /// The `opacity` value for the target.
    #[must_use]
    pub fn opacity_value(&self) -> String {
        css_number(self.opacity).to_string()
    }

    /// The `transform` value for the target.
    #[must_use]
    pub fn transform_value(&self) -> String {
        self.transform
            .map_or_else(|| "none".to_string(), |t| t.to_string())
    }

    /// The `filter` value for the target.
    #[must_use]
    pub fn filter_value(&self) -> String {
        self.filter
            .map_or_else(|| "none".to_string(), |fl| fl.to_string())
    }

    /// The `transition` value for the target.
    #[must_use]
    pub fn transition_value(&self) -> String {
        self.transition.to_string()
    }

    /// The `opacity` value for the overlay.
    #[must_use]
    pub fn overlay_opacity_value(&self) -> String {
        css_number(self.overlay_opacity).to_string()
    }

    /// The `transition` value for the overlay.
    #[must_use]
    pub fn overlay_transition_value(&self) -> String {
        self.overlay_transition.to_string()
    }
}

/// Folds `-0.0` into `0.0` so resting values never print as `-0`.
#[inline]
fn css_number(v: f64) -> f64 {
    v + 0.0
}

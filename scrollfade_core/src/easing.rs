// Copyright 2026 the Scrollfade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll progress and easing.

use crate::config::FadeConfig;

/// Linear progress of `scroll` through the configured range, in `[0, 1]`.
///
/// Exactly `0.0` at or before `start_offset`, and for NaN.
#[must_use]
#[expect(
    clippy::neg_cmp_op_on_partial_ord,
    reason = "NaN must compare as not-past-start"
)]
pub fn progress(scroll: f64, config: &FadeConfig) -> f64 {
    if !(scroll > config.start_offset) {
        return 0.0;
    }
    ((scroll - config.start_offset) / config.span()).clamp(0.0, 1.0)
}

/// Cubic smoothstep, `t² (3 − 2t)`, on `t` clamped to `[0, 1]`.
///
/// Zero slope at both ends, so the effect neither starts nor stops abruptly.
#[inline]
#[must_use]
pub fn smoothstep(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smoothstep_fixed_points() {
        assert_eq!(smoothstep(0.0), 0.0);
        assert_eq!(smoothstep(0.5), 0.5);
        assert_eq!(smoothstep(1.0), 1.0);
    }

    #[test]
    fn smoothstep_is_monotonic() {
        let mut prev = smoothstep(0.0);
        for i in 1..=1000 {
            let next = smoothstep(f64::from(i) / 1000.0);
            assert!(next >= prev, "smoothstep decreased at step {i}");
            prev = next;
        }
    }

    #[test]
    fn smoothstep_clamps_outside_unit_interval() {
        assert_eq!(smoothstep(-2.0), 0.0);
        assert_eq!(smoothstep(3.0), 1.0);
    }

    #[test]
    fn progress_rests_before_start() {
        let config = FadeConfig {
            start_offset: 40.0,
            ..FadeConfig::LOGO
        };
        assert_eq!(progress(0.0, &config), 0.0);
        assert_eq!(progress(40.0, &config), 0.0);
        assert_eq!(progress(-100.0, &config), 0.0);
        assert_eq!(progress(f64::NAN, &config), 0.0);
    }

    #[test]
    fn progress_is_linear_then_saturates() {
        let config = FadeConfig::LOGO;
        assert_eq!(progress(50.0, &config), 0.25);
        assert_eq!(progress(100.0, &config), 0.5);
        assert_eq!(progress(200.0, &config), 1.0);
        assert_eq!(progress(10_000.0, &config), 1.0);
        assert_eq!(progress(f64::INFINITY, &config), 1.0);
    }
}

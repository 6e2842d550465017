// Copyright 2026 the Scrollfade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The page-wide rule set that accompanies attached controllers.
//!
//! The rules are scoped to [`ACTIVE_CLASS`] on the document body and
//! [`TARGET_CLASS`] / [`OVERLAY_CLASS`] on each element pair, and are installed at most once per page
//! under the element id [`STYLE_ELEMENT_ID`]. The reduced-motion block is the
//! static counterpart of [`MotionPreference::Reduced`]: it holds even before
//! the controller has observed the preference.
//!
//! [`MotionPreference::Reduced`]: crate::render::MotionPreference::Reduced

use alloc::format;
use alloc::string::String;

use crate::config::Appearance;
use crate::css::{CssTransition, TransitionProperty};

/// Class added to the document body while any controller is attached.
pub const ACTIVE_CLASS: &str = "scrollfade-active";

/// Class added to every target element.
pub const TARGET_CLASS: &str = "scrollfade-target";

/// Class added to every overlay element.
pub const OVERLAY_CLASS: &str = "scrollfade-overlay";

/// Id of the `<style>` element carrying [`stylesheet`].
pub const STYLE_ELEMENT_ID: &str = "scrollfade-styles";

/// Attribute marking a target that has a live controller.
pub const ATTACHED_ATTRIBUTE: &str = "data-scrollfade";

/// Hover transition duration.
const HOVER_DURATION_MS: u32 = 300;

/// Renders the rule set for `appearance`.
#[must_use]
pub fn stylesheet(appearance: &Appearance) -> String {
    let target = format!(".{ACTIVE_CLASS} .{TARGET_CLASS}");
    let overlay = format!(".{ACTIVE_CLASS} .{OVERLAY_CLASS}");
    let hover = CssTransition {
        property: TransitionProperty::All,
        duration_ms: HOVER_DURATION_MS,
        timing: appearance.transition.timing,
    };
    let reduced = appearance.reduced_transition;
    format!(
        "{target} {{\n  filter: drop-shadow(0 2px 8px rgba(0,0,0,0.1));\n}}\n\
         {target}:hover {{\n  transform: scale(1.02) !important;\n  transition: {hover} !important;\n}}\n\
         @media (prefers-reduced-motion: reduce) {{\n  {target}, {target}:hover {{\n    \
         transition: {reduced} !important;\n    transform: none !important;\n    \
         filter: none !important;\n  }}\n  {overlay} {{\n    \
         transition: {reduced} !important;\n  }}\n}}\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rules_are_class_scoped() {
        let css = stylesheet(&Appearance::default());
        assert!(
            css.starts_with(".scrollfade-active .scrollfade-target {"),
            "unexpected prefix: {css}"
        );
        assert!(
            css.contains(".scrollfade-active .scrollfade-target:hover {"),
            "hover rule missing: {css}"
        );
    }

    #[test]
    fn reduced_motion_block_neutralizes_transform_and_filter() {
        let css = stylesheet(&Appearance::default());
        let block = css
            .split("@media (prefers-reduced-motion: reduce)")
            .nth(1)
            .expect("media block present");
        assert!(
            block.contains("transition: opacity 800ms linear !important;"),
            "linear opacity transition missing: {block}"
        );
        assert!(block.contains("transform: none !important;"), "{block}");
        assert!(block.contains("filter: none !important;"), "{block}");
        assert!(
            block.contains(".scrollfade-target:hover"),
            "hover must be covered too: {block}"
        );
    }

    #[test]
    fn reduced_motion_block_covers_overlay() {
        let css = stylesheet(&Appearance::default());
        let block = css
            .split("@media (prefers-reduced-motion: reduce)")
            .nth(1)
            .expect("media block present");
        assert!(
            block.contains(
                ".scrollfade-active .scrollfade-overlay {\n    \
                 transition: opacity 800ms linear !important;\n  }"
            ),
            "overlay transition not overridden: {block}"
        );
    }

    #[test]
    fn hover_reuses_configured_curve() {
        let css = stylesheet(&Appearance::default());
        assert!(
            css.contains("transition: all 300ms cubic-bezier(0.23, 1, 0.32, 1) !important;"),
            "{css}"
        );
    }
}

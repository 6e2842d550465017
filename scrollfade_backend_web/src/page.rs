// Copyright 2026 the Scrollfade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Page-wide state shared by every controller: the stylesheet, the body
//! class, and the reduced-motion media query.

use scrollfade_core::config::Appearance;
use scrollfade_core::error::FadeError;
use scrollfade_core::render::MotionPreference;
use scrollfade_core::stylesheet::{
    ACTIVE_CLASS, ATTACHED_ATTRIBUTE, STYLE_ELEMENT_ID, stylesheet,
};
use web_sys::{Document, MediaQueryList, Window};

/// Media query matching a reduced-motion preference.
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Installs the scrollfade `<style>` element unless the page already has it.
///
/// Returns `true` if the element was created by this call.
///
/// # Errors
///
/// [`FadeError::Unavailable`] if the document has no `<head>` or the element
/// cannot be created.
pub fn install_stylesheet(document: &Document, appearance: &Appearance) -> Result<bool, FadeError> {
    if document.get_element_by_id(STYLE_ELEMENT_ID).is_some() {
        return Ok(false);
    }
    let head = document.head().ok_or(FadeError::Unavailable("document.head"))?;
    let style = document
        .create_element("style")
        .map_err(|_| FadeError::Unavailable("style element"))?;
    style.set_id(STYLE_ELEMENT_ID);
    style.set_text_content(Some(&stylesheet(appearance)));
    head.append_child(&style)
        .map_err(|_| FadeError::Unavailable("document.head"))?;
    Ok(true)
}

/// Adds the active class to `<body>`.
///
/// # Errors
///
/// [`FadeError::Unavailable`] if the document has no body.
pub fn activate_body(document: &Document) -> Result<(), FadeError> {
    let body = document.body().ok_or(FadeError::Unavailable("document.body"))?;
    let _ = body.class_list().add_1(ACTIVE_CLASS);
    Ok(())
}

/// Removes the active class from `<body>` once no target on the page is
/// attached any more.
pub fn deactivate_body_if_idle(document: &Document) {
    let selector = attached_selector();
    let still_attached = matches!(document.query_selector(&selector), Ok(Some(_)));
    if !still_attached && let Some(body) = document.body() {
        let _ = body.class_list().remove_1(ACTIVE_CLASS);
    }
}

/// Returns the reduced-motion media query, if the browser supports
/// `matchMedia`.
#[must_use]
pub fn reduced_motion_query(window: &Window) -> Option<MediaQueryList> {
    window.match_media(REDUCED_MOTION_QUERY).ok().flatten()
}

/// Reads the current preference from `query`; no query means full motion.
#[must_use]
pub fn motion_preference(query: Option<&MediaQueryList>) -> MotionPreference {
    MotionPreference::from_reduce_query(query.is_some_and(MediaQueryList::matches))
}

fn attached_selector() -> alloc::string::String {
    alloc::format!("[{ATTACHED_ATTRIBUTE}]")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_matches_marker_attribute() {
        assert_eq!(attached_selector(), "[data-scrollfade]");
    }
}

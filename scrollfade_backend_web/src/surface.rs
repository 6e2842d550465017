// Copyright 2026 the Scrollfade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM element management.
//!
//! [`DomSurface`] writes [`StyleFrame`]s to a target `HtmlElement` and to an
//! overlay `<div>` it inserts into the target's parent element.

use alloc::string::{String, ToString as _};

use scrollfade_core::config::Appearance;
use scrollfade_core::css::StyleFrame;
use scrollfade_core::error::FadeError;
use scrollfade_core::stylesheet::{ATTACHED_ATTRIBUTE, OVERLAY_CLASS, TARGET_CLASS};
use scrollfade_core::surface::FadeSurface;
use wasm_bindgen::JsCast as _;
use web_sys::{Document, HtmlElement};

/// Target properties written on every frame and cleared on detach.
const FRAME_PROPERTIES: [&str; 4] = ["opacity", "transform", "filter", "transition"];

/// Target properties written once at attach and cleared on detach.
const STATIC_PROPERTIES: [&str; 2] = ["will-change", "transform-origin"];

/// A target element, its container, and the overlay once attached.
pub struct DomSurface {
    document: Document,
    target: HtmlElement,
    container: HtmlElement,
    overlay: Option<HtmlElement>,
    /// Container `position` and `overflow` as found, restored on detach.
    saved_container: Option<(String, String)>,
}

impl core::fmt::Debug for DomSurface {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DomSurface")
            .field("target", &self.target.id())
            .field("container", &"HtmlElement")
            .field("overlay", &self.overlay.is_some())
            .finish_non_exhaustive()
    }
}

impl DomSurface {
    /// Looks up the target by element id; its parent element becomes the
    /// container.
    ///
    /// # Errors
    ///
    /// - [`FadeError::MissingTarget`] if no HTML element has that id.
    /// - [`FadeError::MissingContainer`] if the target has no parent element.
    pub fn find(document: &Document, id: &str) -> Result<Self, FadeError> {
        let missing = || FadeError::MissingTarget { id: id.to_string() };
        let target: HtmlElement = document
            .get_element_by_id(id)
            .ok_or_else(missing)?
            .dyn_into()
            .map_err(|_| missing())?;
        Self::new(document.clone(), target)
    }

    /// Wraps an already resolved target.
    ///
    /// # Errors
    ///
    /// [`FadeError::MissingContainer`] if the target has no parent element.
    pub fn new(document: Document, target: HtmlElement) -> Result<Self, FadeError> {
        let container: HtmlElement = target
            .parent_element()
            .ok_or(FadeError::MissingContainer)?
            .dyn_into()
            .map_err(|_| FadeError::MissingContainer)?;
        Ok(Self {
            document,
            target,
            container,
            overlay: None,
            saved_container: None,
        })
    }

    /// Returns the target element.
    #[must_use]
    pub fn target(&self) -> &HtmlElement {
        &self.target
    }

    /// Returns the overlay element, if attached.
    #[must_use]
    pub fn overlay(&self) -> Option<&HtmlElement> {
        self.overlay.as_ref()
    }

    fn create_overlay(&self, appearance: &Appearance) -> Option<HtmlElement> {
        let el: HtmlElement = self.document.create_element("div").ok()?.unchecked_into();
        let s = el.style();
        let _ = s.set_property("position", "absolute");
        let _ = s.set_property("top", "0");
        let _ = s.set_property("left", "0");
        let _ = s.set_property("width", "100%");
        let _ = s.set_property("height", "100%");
        let _ = s.set_property("pointer-events", "none");
        let _ = s.set_property("opacity", "0");
        let _ = s.set_property("background", appearance.overlay_background);
        let _ = s.set_property(
            "transition",
            &appearance.overlay_transition.to_string(),
        );
        let _ = s.set_property("z-index", &appearance.overlay_z_index.to_string());
        let _ = s.set_property("border-radius", "inherit");
        let _ = el.class_list().add_1(OVERLAY_CLASS);
        let _ = el.set_attribute("aria-hidden", "true");
        let _ = self.container.append_child(&el);
        Some(el)
    }
}

impl FadeSurface for DomSurface {
    fn is_attached(&self) -> bool {
        self.target.has_attribute(ATTACHED_ATTRIBUTE)
    }

    fn attach(&mut self, appearance: &Appearance) {
        let c = self.container.style();
        self.saved_container = Some((
            c.get_property_value("position").unwrap_or_default(),
            c.get_property_value("overflow").unwrap_or_default(),
        ));
        let _ = c.set_property("position", "relative");
        let _ = c.set_property("overflow", "hidden");

        let s = self.target.style();
        let _ = s.set_property("transition", &appearance.transition.to_string());
        let _ = s.set_property("will-change", appearance.will_change);
        let _ = s.set_property("transform-origin", appearance.transform_origin);
        let _ = self.target.class_list().add_1(TARGET_CLASS);
        let _ = self.target.set_attribute(ATTACHED_ATTRIBUTE, "");

        self.overlay = self.create_overlay(appearance);
    }

    fn apply(&mut self, frame: &StyleFrame) {
        let s = self.target.style();
        let _ = s.set_property("opacity", &frame.opacity_value());
        let _ = s.set_property("transform", &frame.transform_value());
        let _ = s.set_property("filter", &frame.filter_value());
        let _ = s.set_property("transition", &frame.transition_value());

        if let Some(overlay) = &self.overlay {
            let o = overlay.style();
            let _ = o.set_property("opacity", &frame.overlay_opacity_value());
            let _ = o.set_property("transition", &frame.overlay_transition_value());
        }
    }

    fn detach(&mut self) {
        if let Some(overlay) = self.overlay.take() {
            overlay.remove();
        }

        let s = self.target.style();
        for property in FRAME_PROPERTIES.iter().chain(&STATIC_PROPERTIES) {
            let _ = s.remove_property(property);
        }
        let _ = self.target.class_list().remove_1(TARGET_CLASS);
        let _ = self.target.remove_attribute(ATTACHED_ATTRIBUTE);

        if let Some((position, overflow)) = self.saved_container.take() {
            let c = self.container.style();
            restore_property(&c, "position", &position);
            restore_property(&c, "overflow", &overflow);
        }
    }
}

/// Puts back an inline property as it was before attach.
fn restore_property(style: &web_sys::CssStyleDeclaration, name: &str, value: &str) {
    if value.is_empty() {
        let _ = style.remove_property(name);
    } else {
        let _ = style.set_property(name, value);
    }
}

// Copyright 2026 the Scrollfade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web demo: a site logo that fades as the page scrolls.
//!
//! Attaches a [`ScrollFade`] to `#site-logo` once the document is parsed,
//! using the [`FadeConfig::LOGO`] preset and logging to the console.
//!
//! Build with: `wasm-pack build --target web demos/web_logo_fade`
//!
//! Then serve `demos/web_logo_fade/` and open `index.html` in a browser.
//!
//! [`ScrollFade`]: scrollfade_backend_web::ScrollFade
//! [`FadeConfig::LOGO`]: scrollfade_core::config::FadeConfig::LOGO

// This crate only runs in the browser; suppress dead-code warnings when
// cargo-checking on a native host target.
#![no_std]
#![cfg_attr(
    not(target_arch = "wasm32"),
    allow(dead_code, reason = "this crate only runs in the browser")
)]

extern crate alloc;

use alloc::boxed::Box;

use scrollfade_backend_web::{ConsoleSink, ScrollFade};
use scrollfade_core::config::FadeConfig;
use scrollfade_core::controller::FadeOptions;
use wasm_bindgen::JsCast as _;
use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, Event};

/// Id of the element the demo page marks as its logo.
const LOGO_ID: &str = "site-logo";

/// Entry point, called automatically by `wasm_bindgen(start)`.
#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or("no global window")?;
    let document = window.document().ok_or("no document")?;

    if document.ready_state() != "loading" {
        attach_logo_fade();
        return Ok(());
    }

    let on_ready = Closure::wrap(Box::new(|_: Event| attach_logo_fade()) as Box<dyn FnMut(_)>);
    let once = AddEventListenerOptions::new();
    once.set_once(true);
    document.add_event_listener_with_callback_and_add_event_listener_options(
        "DOMContentLoaded",
        on_ready.as_ref().unchecked_ref(),
        &once,
    )?;
    on_ready.forget();
    Ok(())
}

fn attach_logo_fade() {
    let sink = Box::new(ConsoleSink::new());
    // A missing logo is already reported to the console by the sink.
    if let Ok(fade) = ScrollFade::attach(LOGO_ID, FadeOptions::new(FadeConfig::LOGO), sink) {
        // Keep the fade alive; there is no graceful shutdown on the web.
        core::mem::forget(fade);
    }
}

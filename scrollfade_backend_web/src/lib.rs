// Copyright 2026 the Scrollfade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web backend for scrollfade.
//!
//! This crate provides integration with browser APIs:
//!
//! - [`ScrollFade`]: attaches a controller to a page element and wires the
//!   passive `scroll` listener, `requestAnimationFrame` and the
//!   reduced-motion media query
//! - [`DomSurface`]: DOM element management (target styles, overlay)
//! - [`ConsoleSink`]: trace output to the developer console
//! - [`page`]: the shared stylesheet and body class

#![no_std]

extern crate alloc;

mod console;
pub mod page;
mod raf;
mod scroll_fade;
mod surface;

pub use console::ConsoleSink;
pub use scroll_fade::ScrollFade;
pub use surface::DomSurface;
pub use scrollfade_core::surface::FadeSurface;

use scrollfade_core::time::HostTime;

/// Returns the current host time from `performance.now()`.
#[must_use]
pub fn now() -> HostTime {
    HostTime::from_millis_f64(raf::performance_now())
}

// Copyright 2026 the Scrollfade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser timing primitives.
//!
//! [`FrameSlot`] holds the one `requestAnimationFrame` request and
//! [`TimerSlot`] the one `setTimeout` a [`ScrollFade`](crate::ScrollFade) may
//! have outstanding. Each slot owns its JS closure for the lifetime of the
//! handle and remembers the id of the live request so it can be cancelled.

use alloc::boxed::Box;
use core::cell::{Cell, RefCell};

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

use scrollfade_core::time::Duration;

// Direct global bindings instead of `web_sys::Window` methods, so no
// Window or Performance lookup happens on every event.
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = performance, js_name = "now")]
    pub(crate) fn performance_now() -> f64;

    #[wasm_bindgen(js_name = "requestAnimationFrame")]
    fn request_animation_frame(callback: &JsValue) -> i32;

    #[wasm_bindgen(js_name = "cancelAnimationFrame")]
    fn cancel_animation_frame(id: i32);

    #[wasm_bindgen(js_name = "setTimeout")]
    fn set_timeout(callback: &JsValue, delay_ms: i32) -> i32;

    #[wasm_bindgen(js_name = "clearTimeout")]
    fn clear_timeout(id: i32);
}

type FrameClosure = Closure<dyn FnMut(f64)>;
type TimerClosure = Closure<dyn FnMut()>;

/// Single outstanding `requestAnimationFrame` request.
pub(crate) struct FrameSlot {
    closure: RefCell<Option<FrameClosure>>,
    id: Cell<Option<i32>>,
}

impl FrameSlot {
    pub(crate) fn new() -> Self {
        Self {
            closure: RefCell::new(None),
            id: Cell::new(None),
        }
    }

    /// Installs the callback. The callback receives the frame timestamp in
    /// milliseconds.
    pub(crate) fn set_callback(&self, callback: impl FnMut(f64) + 'static) {
        *self.closure.borrow_mut() = Some(Closure::wrap(Box::new(callback) as Box<dyn FnMut(f64)>));
    }

    /// Requests a frame unless one is already outstanding.
    pub(crate) fn request(&self) {
        if self.id.get().is_some() {
            return;
        }
        if let Some(ref closure) = *self.closure.borrow() {
            self.id
                .set(Some(request_animation_frame(closure.as_ref().unchecked_ref())));
        }
    }

    /// Marks the outstanding request as delivered. Call first thing in the
    /// callback.
    pub(crate) fn fired(&self) {
        self.id.set(None);
    }

    /// Cancels any outstanding request and drops the callback.
    pub(crate) fn clear(&self) {
        if let Some(id) = self.id.take() {
            cancel_animation_frame(id);
        }
        self.closure.borrow_mut().take();
    }
}

/// Single outstanding `setTimeout` timer.
pub(crate) struct TimerSlot {
    closure: RefCell<Option<TimerClosure>>,
    id: Cell<Option<i32>>,
}

impl TimerSlot {
    pub(crate) fn new() -> Self {
        Self {
            closure: RefCell::new(None),
            id: Cell::new(None),
        }
    }

    /// Installs the callback.
    pub(crate) fn set_callback(&self, callback: impl FnMut() + 'static) {
        *self.closure.borrow_mut() = Some(Closure::wrap(Box::new(callback) as Box<dyn FnMut()>));
    }

    /// Arms the timer for `wait` unless it is already armed.
    pub(crate) fn arm(&self, wait: Duration) {
        if self.id.get().is_some() {
            return;
        }
        if let Some(ref closure) = *self.closure.borrow() {
            let id = set_timeout(closure.as_ref().unchecked_ref(), timeout_millis(wait));
            self.id.set(Some(id));
        }
    }

    /// Marks the timer as delivered. Call first thing in the callback.
    pub(crate) fn fired(&self) {
        self.id.set(None);
    }

    /// Cancels the timer if armed and drops the callback.
    pub(crate) fn clear(&self) {
        if let Some(id) = self.id.take() {
            clear_timeout(id);
        }
        self.closure.borrow_mut().take();
    }
}

/// Converts a wait into a `setTimeout` delay, rounding up so the timer never
/// fires inside the window it is waiting out.
pub(crate) fn timeout_millis(wait: Duration) -> i32 {
    i32::try_from(wait.as_millis_ceil()).unwrap_or(i32::MAX)
}

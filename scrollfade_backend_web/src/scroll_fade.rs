// Copyright 2026 the Scrollfade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The browser-side handle that wires a controller to page events.
//!
//! [`ScrollFade::attach`] resolves the target, installs the page stylesheet,
//! attaches a [`FadeController`] over a [`DomSurface`] and registers a passive
//! `scroll` listener plus a `change` listener on the reduced-motion query.
//! Scroll events go through the controller's frame gate; at most one
//! animation frame and one guard timer are outstanding at any time.
//!
//! The listeners live until [`ScrollFade::dispose`] is called or the handle
//! is dropped.

use alloc::boxed::Box;
use alloc::rc::Rc;
use core::cell::RefCell;

use js_sys::Function;
use scrollfade_core::controller::{FadeController, FadeOptions};
use scrollfade_core::error::FadeError;
use scrollfade_core::gate::GateDecision;
use scrollfade_core::time::HostTime;
use scrollfade_core::trace::{AttachFailedEvent, TraceSink, Tracer};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast as _;
use web_sys::{AddEventListenerOptions, Document, Event, MediaQueryList, Window};

use crate::console;
use crate::now;
use crate::page;
use crate::raf::{FrameSlot, TimerSlot};
use crate::surface::DomSurface;

type EventClosure = Closure<dyn FnMut(Event)>;

/// A live scroll fade on one target element.
pub struct ScrollFade {
    inner: Rc<Inner>,
}

struct Inner {
    window: Window,
    document: Document,
    controller: RefCell<Option<FadeController<DomSurface>>>,
    sink: RefCell<Box<dyn TraceSink>>,
    frame: FrameSlot,
    guard: TimerSlot,
    scroll_listener: RefCell<Option<EventClosure>>,
    motion_query: Option<MediaQueryList>,
    motion_listener: RefCell<Option<EventClosure>>,
}

impl Inner {
    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn on_scroll(&self) {
        let now = now();
        let decision = {
            let mut sink = self.sink.borrow_mut();
            let mut tracer = Tracer::new(&mut **sink);
            let mut controller = self.controller.borrow_mut();
            let Some(controller) = controller.as_mut() else {
                return;
            };
            controller.request_update(now, &mut tracer)
        };
        match decision {
            GateDecision::RequestFrame => self.frame.request(),
            GateDecision::Deferred { wait } => self.guard.arm(wait),
            GateDecision::Coalesced => {}
        }
    }

    fn on_frame(&self, timestamp_ms: f64) {
        self.frame.fired();
        let scroll = self.scroll_y();
        let mut sink = self.sink.borrow_mut();
        let mut tracer = Tracer::new(&mut **sink);
        if let Some(controller) = self.controller.borrow_mut().as_mut() {
            controller.on_frame(scroll, HostTime::from_millis_f64(timestamp_ms), &mut tracer);
        }
    }

    fn on_guard(&self) {
        self.guard.fired();
        let release = {
            let mut sink = self.sink.borrow_mut();
            let mut tracer = Tracer::new(&mut **sink);
            self.controller
                .borrow_mut()
                .as_mut()
                .is_some_and(|c| c.guard_elapsed(now(), &mut tracer))
        };
        if release {
            self.frame.request();
        }
    }

    fn on_motion_change(&self) {
        let motion = page::motion_preference(self.motion_query.as_ref());
        let scroll = self.scroll_y();
        let mut sink = self.sink.borrow_mut();
        let mut tracer = Tracer::new(&mut **sink);
        if let Some(controller) = self.controller.borrow_mut().as_mut() {
            controller.set_motion(motion, scroll, now(), &mut tracer);
        }
    }
}

impl ScrollFade {
    /// Attaches a scroll fade to the element with id `target_id`.
    ///
    /// The reduced-motion query overrides `options.motion`. Failures are
    /// reported to `sink` before being returned, and nothing is created on
    /// the page when attaching fails. Without the `trace` feature the sink
    /// receives no events, so failures are written to the console's `error`
    /// level directly instead.
    ///
    /// # Errors
    ///
    /// - [`FadeError::Unavailable`] outside a browser document.
    /// - [`FadeError::MissingTarget`] if no element has id `target_id`.
    /// - [`FadeError::MissingContainer`] if the target has no parent.
    /// - [`FadeError::AlreadyAttached`] if the target already has a live
    ///   scroll fade; no second overlay or listener is created.
    /// - [`FadeError::InvalidConfig`] if `options.config` is rejected.
    pub fn attach(
        target_id: &str,
        options: FadeOptions,
        sink: Box<dyn TraceSink>,
    ) -> Result<Self, FadeError> {
        Self::attach_with_sink(target_id, options, sink).inspect_err(console::report_failure)
    }

    fn attach_with_sink(
        target_id: &str,
        options: FadeOptions,
        mut sink: Box<dyn TraceSink>,
    ) -> Result<Self, FadeError> {
        let resolved = resolve(target_id);
        let (window, document, surface) = match resolved {
            Ok(parts) => parts,
            Err(e) => {
                Tracer::new(&mut *sink).attach_failed(&AttachFailedEvent {
                    now: now(),
                    error: &e,
                });
                return Err(e);
            }
        };

        let motion_query = page::reduced_motion_query(&window);
        let options = FadeOptions {
            motion: page::motion_preference(motion_query.as_ref()),
            ..options
        };
        let scroll = window.scroll_y().unwrap_or(0.0);
        let controller = {
            let mut tracer = Tracer::new(&mut *sink);
            FadeController::attach(surface, options, scroll, now(), &mut tracer)?
        };

        let inner = Rc::new(Inner {
            window,
            document,
            controller: RefCell::new(Some(controller)),
            sink: RefCell::new(sink),
            frame: FrameSlot::new(),
            guard: TimerSlot::new(),
            scroll_listener: RefCell::new(None),
            motion_query,
            motion_listener: RefCell::new(None),
        });
        // The page-wide pieces are best effort; the fade itself already works.
        let _ = page::install_stylesheet(&inner.document, &options.appearance);
        let _ = page::activate_body(&inner.document);

        let handle = Self { inner };
        handle.register_listeners();
        Ok(handle)
    }

    fn register_listeners(&self) {
        let inner = Rc::clone(&self.inner);
        self.inner
            .frame
            .set_callback(move |timestamp_ms| inner.on_frame(timestamp_ms));

        let inner = Rc::clone(&self.inner);
        self.inner.guard.set_callback(move || inner.on_guard());

        let inner = Rc::clone(&self.inner);
        let scroll = Closure::wrap(Box::new(move |_: Event| inner.on_scroll()) as Box<dyn FnMut(Event)>);
        let passive = AddEventListenerOptions::new();
        passive.set_passive(true);
        let _ = self
            .inner
            .window
            .add_event_listener_with_callback_and_add_event_listener_options(
                "scroll",
                scroll.as_ref().unchecked_ref(),
                &passive,
            );
        *self.inner.scroll_listener.borrow_mut() = Some(scroll);

        if let Some(query) = &self.inner.motion_query {
            let inner = Rc::clone(&self.inner);
            let change =
                Closure::wrap(Box::new(move |_: Event| inner.on_motion_change()) as Box<dyn FnMut(Event)>);
            let _ = query.add_event_listener_with_callback("change", change.as_ref().unchecked_ref());
            *self.inner.motion_listener.borrow_mut() = Some(change);
        }
    }

    /// Returns `true` until [`dispose`](Self::dispose) has run.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.inner.controller.borrow().is_some()
    }

    /// Removes the listeners, cancels any pending frame or timer, removes the
    /// overlay and clears the styles written to the target.
    ///
    /// Calling it twice is a no-op.
    pub fn dispose(&self) {
        let Some(controller) = self.inner.controller.borrow_mut().take() else {
            return;
        };

        if let Some(scroll) = self.inner.scroll_listener.borrow_mut().take() {
            let callback: &Function = scroll.as_ref().unchecked_ref();
            let _ = self
                .inner
                .window
                .remove_event_listener_with_callback("scroll", callback);
        }
        if let (Some(query), Some(change)) = (
            &self.inner.motion_query,
            self.inner.motion_listener.borrow_mut().take(),
        ) {
            let _ = query.remove_event_listener_with_callback("change", change.as_ref().unchecked_ref());
        }
        // Dropping the slot closures also breaks the `Rc<Inner>` cycles.
        self.inner.frame.clear();
        self.inner.guard.clear();

        {
            let mut sink = self.inner.sink.borrow_mut();
            let mut tracer = Tracer::new(&mut **sink);
            drop(controller.detach(now(), &mut tracer));
        }
        page::deactivate_body_if_idle(&self.inner.document);
    }
}

impl Drop for ScrollFade {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl core::fmt::Debug for ScrollFade {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let controller = self.inner.controller.borrow();
        f.debug_struct("ScrollFade")
            .field("attached", &controller.is_some())
            .field("updates", &controller.as_ref().map(FadeController::updates))
            .finish_non_exhaustive()
    }
}

fn resolve(target_id: &str) -> Result<(Window, Document, DomSurface), FadeError> {
    let window = web_sys::window().ok_or(FadeError::Unavailable("window"))?;
    let document = window
        .document()
        .ok_or(FadeError::Unavailable("document"))?;
    let surface = DomSurface::find(&document, target_id)?;
    Ok((window, document, surface))
}

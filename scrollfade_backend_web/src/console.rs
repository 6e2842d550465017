// Copyright 2026 the Scrollfade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser console trace output.
//!
//! [`ConsoleSink`] implements [`TraceSink`] and writes lifecycle events to the
//! developer console: attach and detach at `log`, failures at `error`. Per
//! frame updates go to `debug` only when [`ConsoleSink::verbose`] is set.

use alloc::format;
use alloc::string::String;

use scrollfade_core::error::FadeError;
use scrollfade_core::render::MotionPreference;
use scrollfade_core::trace::{
    AttachEvent, AttachFailedEvent, DetachEvent, MotionChangeEvent, TraceSink, UpdateEvent,
};
use wasm_bindgen::JsValue;
use web_sys::console;

const PREFIX: &str = "[scrollfade]";

/// Writes trace events to the browser console.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleSink {
    verbose: bool,
}

impl ConsoleSink {
    /// Creates a sink that logs lifecycle events only.
    #[must_use]
    pub const fn new() -> Self {
        Self { verbose: false }
    }

    /// Creates a sink that also logs every frame update.
    #[must_use]
    pub const fn verbose() -> Self {
        Self { verbose: true }
    }
}

fn motion_name(motion: MotionPreference) -> &'static str {
    match motion {
        MotionPreference::Full => "full",
        MotionPreference::Reduced => "reduced",
    }
}

fn attach_line(e: &AttachEvent) -> String {
    format!(
        "{PREFIX} attached at scroll={} motion={}",
        e.scroll,
        motion_name(e.motion)
    )
}

fn failure_line(error: &FadeError) -> String {
    format!("{PREFIX} {error}")
}

/// Writes an attach failure at `error` level when no sink can see it.
///
/// With the `trace` feature on, sinks receive the failure and this does
/// nothing.
pub(crate) fn report_failure(error: &FadeError) {
    #[cfg(not(feature = "trace"))]
    console::error_1(&JsValue::from_str(&failure_line(error)));
    #[cfg(feature = "trace")]
    {
        _ = error;
    }
}

fn update_line(e: &UpdateEvent) -> String {
    format!(
        "{PREFIX} update #{} scroll={} progress={:.3} eased={:.3} opacity={:.3}",
        e.update_index, e.scroll, e.state.progress, e.state.eased, e.state.opacity,
    )
}

impl TraceSink for ConsoleSink {
    fn on_attach(&mut self, e: &AttachEvent) {
        console::log_1(&JsValue::from_str(&attach_line(e)));
    }

    fn on_attach_failed(&mut self, e: &AttachFailedEvent<'_>) {
        console::error_1(&JsValue::from_str(&failure_line(e.error)));
    }

    fn on_update(&mut self, e: &UpdateEvent) {
        if self.verbose {
            console::debug_1(&JsValue::from_str(&update_line(e)));
        }
    }

    fn on_motion_change(&mut self, e: &MotionChangeEvent) {
        console::log_1(&JsValue::from_str(&format!(
            "{PREFIX} motion preference now {}",
            motion_name(e.motion)
        )));
    }

    fn on_detach(&mut self, e: &DetachEvent) {
        console::log_1(&JsValue::from_str(&format!(
            "{PREFIX} detached after {} updates",
            e.updates
        )));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrollfade_core::config::FadeConfig;
    use scrollfade_core::render::RenderState;
    use scrollfade_core::time::HostTime;

    #[test]
    fn attach_line_names_motion() {
        let line = attach_line(&AttachEvent {
            now: HostTime(0),
            scroll: 12.0,
            motion: MotionPreference::Reduced,
        });
        assert_eq!(line, "[scrollfade] attached at scroll=12 motion=reduced");
    }

    #[test]
    fn failure_line_names_missing_target() {
        let line = failure_line(&FadeError::MissingTarget {
            id: "site-logo".into(),
        });
        assert_eq!(
            line,
            "[scrollfade] target element with id \"site-logo\" not found"
        );
    }

    #[test]
    fn update_line_rounds_values() {
        let line = update_line(&UpdateEvent {
            update_index: 3,
            now: HostTime(0),
            scroll: 100.0,
            state: RenderState::compute(100.0, &FadeConfig::LOGO),
            motion: MotionPreference::Full,
        });
        assert_eq!(
            line,
            "[scrollfade] update #3 scroll=100 progress=0.500 eased=0.500 opacity=0.575"
        );
    }
}

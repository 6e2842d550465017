// Copyright 2026 the Scrollfade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chrome Trace Event Format exporter.
//!
//! [`ChromeTraceSink`] collects events as they happen and [`write_to`]
//! serializes them as [Chrome Trace Event Format][format] JSON.
//!
//! [`write_to`]: ChromeTraceSink::write_to
//! [format]: https://docs.google.com/document/d/1CvAClvFfyA5R-PhYUmn5OOQtYMH4h6I0nSsKchNAySU

use std::io::{self, Write};

use serde_json::{Value, json};

use scrollfade_core::gate::GateDecision;
use scrollfade_core::trace::{
    AttachEvent, AttachFailedEvent, DetachEvent, MotionChangeEvent, ScheduleEvent, TraceSink,
    UpdateEvent,
};

/// Collects trace events for export as Chrome Trace Event Format JSON.
///
/// The output is a complete JSON array of trace event objects, suitable for
/// loading into `chrome://tracing` or [Perfetto](https://ui.perfetto.dev/).
/// Timestamps are host microseconds.
#[derive(Debug, Default)]
pub struct ChromeTraceSink {
    events: Vec<Value>,
}

impl ChromeTraceSink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the events collected so far.
    #[must_use]
    pub fn events(&self) -> &[Value] {
        &self.events
    }

    /// Writes the collected events as a JSON array.
    pub fn write_to(&self, writer: &mut dyn Write) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut *writer, &self.events)?;
        writeln!(writer)?;
        Ok(())
    }

    fn instant(&mut self, name: &str, cat: &str, ts: u64, args: Value) {
        self.events.push(json!({
            "ph": "i",
            "name": name,
            "cat": cat,
            "ts": ts,
            "pid": 0,
            "tid": 0,
            "s": "t",
            "args": args,
        }));
    }
}

impl TraceSink for ChromeTraceSink {
    fn on_attach(&mut self, e: &AttachEvent) {
        self.instant(
            "Attach",
            "Lifecycle",
            e.now.micros(),
            json!({
                "scroll": e.scroll,
                "motion": format!("{:?}", e.motion),
            }),
        );
    }

    fn on_attach_failed(&mut self, e: &AttachFailedEvent<'_>) {
        self.instant(
            "AttachFailed",
            "Lifecycle",
            e.now.micros(),
            json!({ "error": e.error.to_string() }),
        );
    }

    fn on_schedule(&mut self, e: &ScheduleEvent) {
        let args = match e.decision {
            GateDecision::RequestFrame => json!({ "decision": "RequestFrame" }),
            GateDecision::Coalesced => json!({ "decision": "Coalesced" }),
            GateDecision::Deferred { wait } => json!({
                "decision": "Deferred",
                "wait_us": wait.micros(),
            }),
        };
        self.instant("Schedule", "Gate", e.now.micros(), args);
    }

    fn on_update(&mut self, e: &UpdateEvent) {
        let ts = e.now.micros();
        self.instant(
            "Update",
            "Frame",
            ts,
            json!({
                "update_index": e.update_index,
                "scroll": e.scroll,
                "progress": e.state.progress,
                "eased": e.state.eased,
                "motion": format!("{:?}", e.motion),
            }),
        );
        self.events.push(json!({
            "ph": "C",
            "name": "Effect",
            "ts": ts,
            "pid": 0,
            "tid": 0,
            "args": {
                "opacity": e.state.opacity,
                "overlay_opacity": e.state.overlay_opacity,
                "blur": e.state.blur,
            }
        }));
    }

    fn on_motion_change(&mut self, e: &MotionChangeEvent) {
        self.instant(
            "MotionChange",
            "Lifecycle",
            e.now.micros(),
            json!({ "motion": format!("{:?}", e.motion) }),
        );
    }

    fn on_detach(&mut self, e: &DetachEvent) {
        self.instant(
            "Detach",
            "Lifecycle",
            e.now.micros(),
            json!({ "updates": e.updates }),
        );
    }
}

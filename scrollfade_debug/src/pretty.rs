// Copyright 2026 the Scrollfade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr). Timestamps
//! are printed in milliseconds.

use std::io::Write;

use scrollfade_core::gate::GateDecision;
use scrollfade_core::render::MotionPreference;
use scrollfade_core::time::HostTime;
use scrollfade_core::trace::{
    AttachEvent, AttachFailedEvent, DetachEvent, MotionChangeEvent, ScheduleEvent, TraceSink,
    UpdateEvent,
};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the sink and returns the writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

fn ms(t: HostTime) -> f64 {
    t.micros() as f64 / 1000.0
}

fn motion_name(motion: MotionPreference) -> &'static str {
    match motion {
        MotionPreference::Full => "full",
        MotionPreference::Reduced => "reduced",
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_attach(&mut self, e: &AttachEvent) {
        let _ = writeln!(
            self.writer,
            "[attach] at {:.3}ms scroll={} motion={}",
            ms(e.now),
            e.scroll,
            motion_name(e.motion),
        );
    }

    fn on_attach_failed(&mut self, e: &AttachFailedEvent<'_>) {
        let _ = writeln!(
            self.writer,
            "[attach:failed] at {:.3}ms {}",
            ms(e.now),
            e.error,
        );
    }

    fn on_schedule(&mut self, e: &ScheduleEvent) {
        let decision = match e.decision {
            GateDecision::RequestFrame => "frame".to_owned(),
            GateDecision::Coalesced => "coalesced".to_owned(),
            GateDecision::Deferred { wait } => format!("deferred {:.3}ms", wait.micros() as f64 / 1000.0),
        };
        let _ = writeln!(self.writer, "[schedule] at {:.3}ms {decision}", ms(e.now));
    }

    fn on_update(&mut self, e: &UpdateEvent) {
        let _ = writeln!(
            self.writer,
            "[update] #{} at {:.3}ms scroll={} progress={:.3} eased={:.3} \
             opacity={:.3} scale={:.3} blur={:.3}px",
            e.update_index,
            ms(e.now),
            e.scroll,
            e.state.progress,
            e.state.eased,
            e.state.opacity,
            e.state.scale,
            e.state.blur,
        );
    }

    fn on_motion_change(&mut self, e: &MotionChangeEvent) {
        let _ = writeln!(
            self.writer,
            "[motion] at {:.3}ms {}",
            ms(e.now),
            motion_name(e.motion),
        );
    }

    fn on_detach(&mut self, e: &DetachEvent) {
        let _ = writeln!(
            self.writer,
            "[detach] at {:.3}ms updates={}",
            ms(e.now),
            e.updates,
        );
    }
}

// Copyright 2026 the Scrollfade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for the controller.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that the
//! [`FadeController`](crate::controller::FadeController) calls at each step of
//! its lifecycle. All method bodies default to no-ops, so implementing only
//! the events you care about is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace` feature
//! is **off**, every `Tracer` method compiles to nothing (zero overhead). When
//! **on**, each method performs a single `Option` branch before dispatching.
//!
//! # Crate features
//!
//! - `trace`: enables the `Tracer` method bodies (one branch per call).

use crate::error::FadeError;
use crate::gate::GateDecision;
use crate::render::{MotionPreference, RenderState};
use crate::time::HostTime;

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted once a controller is attached and its first frame is written.
#[derive(Clone, Copy, Debug)]
pub struct AttachEvent {
    /// Host time of the attach.
    pub now: HostTime,
    /// Scroll offset used for the initial frame.
    pub scroll: f64,
    /// Motion preference in effect.
    pub motion: MotionPreference,
}

/// Emitted when attaching fails. Nothing has been created on the surface.
#[derive(Clone, Copy, Debug)]
pub struct AttachFailedEvent<'a> {
    /// Host time of the attempt.
    pub now: HostTime,
    /// Why the attach was refused.
    pub error: &'a FadeError,
}

/// Emitted for every update request, with the gate's answer.
#[derive(Clone, Copy, Debug)]
pub struct ScheduleEvent {
    /// Host time of the request.
    pub now: HostTime,
    /// What the gate decided.
    pub decision: GateDecision,
}

/// Emitted after a frame is written to the surface.
#[derive(Clone, Copy, Debug)]
pub struct UpdateEvent {
    /// Monotonic update counter (0 is the attach-time frame).
    pub update_index: u64,
    /// Host time of the update.
    pub now: HostTime,
    /// Scroll offset read for this update.
    pub scroll: f64,
    /// Values derived from `scroll`.
    pub state: RenderState,
    /// Motion preference in effect.
    pub motion: MotionPreference,
}

/// Emitted when the platform's motion preference changes.
#[derive(Clone, Copy, Debug)]
pub struct MotionChangeEvent {
    /// Host time of the change.
    pub now: HostTime,
    /// The new preference.
    pub motion: MotionPreference,
}

/// Emitted when a controller is detached.
#[derive(Clone, Copy, Debug)]
pub struct DetachEvent {
    /// Host time of the detach.
    pub now: HostTime,
    /// Total updates written while attached.
    pub updates: u64,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from a controller.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called after a successful attach.
    fn on_attach(&mut self, e: &AttachEvent) {
        _ = e;
    }

    /// Called when attaching fails.
    fn on_attach_failed(&mut self, e: &AttachFailedEvent<'_>) {
        _ = e;
    }

    /// Called for every update request.
    fn on_schedule(&mut self, e: &ScheduleEvent) {
        _ = e;
    }

    /// Called after each frame is written.
    fn on_update(&mut self, e: &UpdateEvent) {
        _ = e;
    }

    /// Called when the motion preference changes.
    fn on_motion_change(&mut self, e: &MotionChangeEvent) {
        _ = e;
    }

    /// Called after detach.
    fn on_detach(&mut self, e: &DetachEvent) {
        _ = e;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing. When
/// **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits an [`AttachEvent`].
    #[inline]
    pub fn attach(&mut self, e: &AttachEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_attach(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits an [`AttachFailedEvent`].
    #[inline]
    pub fn attach_failed(&mut self, e: &AttachFailedEvent<'_>) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_attach_failed(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`ScheduleEvent`].
    #[inline]
    pub fn schedule(&mut self, e: &ScheduleEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_schedule(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits an [`UpdateEvent`].
    #[inline]
    pub fn update(&mut self, e: &UpdateEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_update(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`MotionChangeEvent`].
    #[inline]
    pub fn motion_change(&mut self, e: &MotionChangeEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_motion_change(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`DetachEvent`].
    #[inline]
    pub fn detach(&mut self, e: &DetachEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_detach(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }
}

#[cfg(all(test, feature = "trace"))]
mod tests {
    use super::*;

    #[derive(Default)]
    struct CountingSink {
        attaches: u32,
        updates: u32,
        failed_at: Option<HostTime>,
    }

    impl TraceSink for CountingSink {
        fn on_attach(&mut self, _: &AttachEvent) {
            self.attaches += 1;
        }

        fn on_attach_failed(&mut self, e: &AttachFailedEvent<'_>) {
            self.failed_at = Some(e.now);
        }

        fn on_update(&mut self, _: &UpdateEvent) {
            self.updates += 1;
        }
    }

    #[test]
    fn tracer_dispatches_to_sink() {
        let mut sink = CountingSink::default();
        {
            let mut tracer = Tracer::new(&mut sink);
            tracer.attach(&AttachEvent {
                now: HostTime(0),
                scroll: 0.0,
                motion: MotionPreference::Full,
            });
            tracer.update(&UpdateEvent {
                update_index: 0,
                now: HostTime(0),
                scroll: 0.0,
                state: RenderState::RESTING,
                motion: MotionPreference::Full,
            });
            // Unimplemented events fall through to the no-op defaults.
            tracer.detach(&DetachEvent {
                now: HostTime(0),
                updates: 1,
            });
        }
        assert_eq!(sink.attaches, 1);
        assert_eq!(sink.updates, 1);
    }

    #[test]
    fn attach_failure_carries_time() {
        let mut sink = CountingSink::default();
        Tracer::new(&mut sink).attach_failed(&AttachFailedEvent {
            now: HostTime(42_000),
            error: &FadeError::MissingContainer,
        });
        assert_eq!(sink.failed_at, Some(HostTime(42_000)));
    }

    #[test]
    fn none_tracer_is_silent() {
        let mut tracer = Tracer::none();
        tracer.attach_failed(&AttachFailedEvent {
            now: HostTime(0),
            error: &FadeError::MissingContainer,
        });
    }
}

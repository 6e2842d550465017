// Copyright 2026 the Scrollfade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Coalescing of update requests to at most one per frame.
//!
//! [`FrameGate`] is a single-slot token. A scroll event asks for an update
//! with [`request`](FrameGate::request); the gate answers whether the caller
//! must schedule an animation frame, may drop the request because a frame is
//! already pending, or must arm a timer because the guard window after the
//! last request has not yet elapsed.
//!
//! ```text
//!   Idle ──request──► Pending ──frame_fired──► Cooling ──guard_elapsed──► Idle
//!                        ▲                        │
//!                        └────────────────────────┘
//!             request after the window, or guard_elapsed with a deferral
//! ```
//!
//! The pending frame reads the scroll position when it runs, so dropping a
//! request while one is pending never loses the latest position. A request
//! inside the guard window is remembered as `deferred` and released by
//! [`guard_elapsed`](FrameGate::guard_elapsed).

use crate::time::{Duration, HostTime};

/// Where the gate is in its cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateState {
    /// No frame requested.
    Idle,
    /// A frame has been requested and has not run yet.
    Pending {
        /// When the frame was requested; the guard window starts here.
        requested_at: HostTime,
    },
    /// The frame ran but the guard window is still open.
    Cooling {
        /// End of the guard window.
        until: HostTime,
        /// A request arrived during the window and is waiting for it to end.
        deferred: bool,
    },
}

/// What the caller must do after [`FrameGate::request`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateDecision {
    /// Schedule one animation frame.
    RequestFrame,
    /// Nothing; an outstanding frame or timer already covers this request.
    Coalesced,
    /// Arm a timer for `wait`, then call [`FrameGate::guard_elapsed`].
    Deferred {
        /// Time left in the guard window.
        wait: Duration,
    },
}

/// Single-slot pending-update token with a trailing guard window.
#[derive(Clone, Copy, Debug)]
pub struct FrameGate {
    state: GateState,
    guard: Duration,
}

impl FrameGate {
    /// One frame at 60 Hz.
    pub const DEFAULT_GUARD: Duration = Duration::from_millis(16);

    /// Creates an idle gate with the given guard window.
    #[must_use]
    pub const fn new(guard: Duration) -> Self {
        Self {
            state: GateState::Idle,
            guard,
        }
    }

    /// Returns the current state.
    #[must_use]
    pub const fn state(&self) -> GateState {
        self.state
    }

    /// Returns the guard window length.
    #[must_use]
    pub const fn guard(&self) -> Duration {
        self.guard
    }

    /// Returns `true` while a requested frame has not yet run.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self.state, GateState::Pending { .. })
    }

    /// Asks for an update at `now`.
    pub fn request(&mut self, now: HostTime) -> GateDecision {
        match self.state {
            GateState::Idle => {
                self.state = GateState::Pending { requested_at: now };
                GateDecision::RequestFrame
            }
            GateState::Pending { .. } => GateDecision::Coalesced,
            GateState::Cooling { until, .. } if now >= until => {
                self.state = GateState::Pending { requested_at: now };
                GateDecision::RequestFrame
            }
            GateState::Cooling {
                deferred: true, ..
            } => GateDecision::Coalesced,
            GateState::Cooling {
                until,
                deferred: false,
            } => {
                self.state = GateState::Cooling {
                    until,
                    deferred: true,
                };
                GateDecision::Deferred {
                    wait: until.saturating_duration_since(now),
                }
            }
        }
    }

    /// Records that the requested frame is running at `now`.
    ///
    /// Returns `false` if no frame was pending (a stale callback), in which
    /// case the caller should not render.
    pub fn frame_fired(&mut self, now: HostTime) -> bool {
        let GateState::Pending { requested_at } = self.state else {
            return false;
        };
        let until = requested_at + self.guard;
        self.state = if now >= until {
            GateState::Idle
        } else {
            GateState::Cooling {
                until,
                deferred: false,
            }
        };
        true
    }

    /// Records that the guard timer armed for a [`GateDecision::Deferred`]
    /// has fired.
    ///
    /// Returns `true` if a deferred request is now released and the caller
    /// must schedule an animation frame.
    pub fn guard_elapsed(&mut self, now: HostTime) -> bool {
        match self.state {
            GateState::Cooling { deferred: true, .. } => {
                self.state = GateState::Pending { requested_at: now };
                true
            }
            GateState::Cooling {
                deferred: false, ..
            } => {
                self.state = GateState::Idle;
                false
            }
            GateState::Idle | GateState::Pending { .. } => false,
        }
    }

    /// Drops any outstanding token.
    pub fn reset(&mut self) {
        self.state = GateState::Idle;
    }
}

impl Default for FrameGate {
    fn default() -> Self {
        Self::new(Self::DEFAULT_GUARD)
    }
}

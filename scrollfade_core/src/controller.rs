// Copyright 2026 the Scrollfade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The scroll fade controller.
//!
//! [`FadeController`] owns a [`FadeSurface`] and drives it from scroll
//! offsets supplied by the host. It does not read the scroll position or
//! schedule frames itself; the host forwards scroll events to
//! [`request_update`](FadeController::request_update), acts on the returned
//! [`GateDecision`], and calls [`on_frame`](FadeController::on_frame) with a
//! freshly read offset when the frame runs.
//!
//! # Host loop pseudocode
//!
//! ```rust,ignore
//! let mut controller = FadeController::attach(surface, options, scroll_y(), now(), tracer)?;
//!
//! on_scroll(|| match controller.request_update(now(), tracer) {
//!     GateDecision::RequestFrame => request_animation_frame(on_frame),
//!     GateDecision::Deferred { wait } => set_timeout(on_guard, wait),
//!     GateDecision::Coalesced => {}
//! });
//!
//! fn on_frame(t) { controller.on_frame(scroll_y(), t, tracer); }
//! fn on_guard() {
//!     if controller.guard_elapsed(now(), tracer) {
//!         request_animation_frame(on_frame);
//!     }
//! }
//! ```

use crate::config::{Appearance, FadeConfig};
use crate::css::StyleFrame;
use crate::error::FadeError;
use crate::gate::{FrameGate, GateDecision};
use crate::render::{MotionPreference, RenderState};
use crate::surface::FadeSurface;
use crate::time::{Duration, HostTime};
use crate::trace::{
    AttachEvent, AttachFailedEvent, DetachEvent, MotionChangeEvent, ScheduleEvent, Tracer,
    UpdateEvent,
};

/// Everything a controller is attached with.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FadeOptions {
    /// Numeric parameters of the effect.
    pub config: FadeConfig,
    /// Static presentation settings.
    pub appearance: Appearance,
    /// Motion preference at attach time.
    pub motion: MotionPreference,
    /// Guard window of the frame gate.
    pub guard: Duration,
}

impl FadeOptions {
    /// Options for `config` with default appearance, full motion and the
    /// default guard window.
    #[must_use]
    pub fn new(config: FadeConfig) -> Self {
        Self {
            config,
            appearance: Appearance::default(),
            motion: MotionPreference::Full,
            guard: FrameGate::DEFAULT_GUARD,
        }
    }
}

impl Default for FadeOptions {
    fn default() -> Self {
        Self::new(FadeConfig::LOGO)
    }
}

/// Projects scroll offsets onto a [`FadeSurface`].
pub struct FadeController<S: FadeSurface> {
    surface: S,
    config: FadeConfig,
    appearance: Appearance,
    motion: MotionPreference,
    gate: FrameGate,
    updates: u64,
    last_state: RenderState,
}

impl<S: FadeSurface + core::fmt::Debug> core::fmt::Debug for FadeController<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FadeController")
            .field("surface", &self.surface)
            .field("config", &self.config)
            .field("motion", &self.motion)
            .field("gate", &self.gate)
            .field("updates", &self.updates)
            .finish_non_exhaustive()
    }
}

impl<S: FadeSurface> FadeController<S> {
    /// Attaches a controller to `surface` and writes the frame for `scroll`
    /// immediately, so the target is correct before any scroll event.
    ///
    /// # Errors
    ///
    /// - [`FadeError::InvalidConfig`] if `options.config` fails validation.
    /// - [`FadeError::AlreadyAttached`] if the surface's target already has a
    ///   controller; the existing overlay is left untouched.
    ///
    /// On error the surface is dropped without having been modified and the
    /// failure is reported through `tracer`.
    pub fn attach(
        mut surface: S,
        options: FadeOptions,
        scroll: f64,
        now: HostTime,
        tracer: &mut Tracer<'_>,
    ) -> Result<Self, FadeError> {
        let checked = match options.config.validate() {
            Err(e) => Err(FadeError::from(e)),
            Ok(()) if surface.is_attached() => Err(FadeError::AlreadyAttached),
            Ok(()) => Ok(()),
        };
        if let Err(e) = checked {
            tracer.attach_failed(&AttachFailedEvent { now, error: &e });
            return Err(e);
        }

        surface.attach(&options.appearance);
        let mut controller = Self {
            surface,
            config: options.config,
            appearance: options.appearance,
            motion: options.motion,
            gate: FrameGate::new(options.guard),
            updates: 0,
            last_state: RenderState::RESTING,
        };
        tracer.attach(&AttachEvent {
            now,
            scroll,
            motion: controller.motion,
        });
        controller.update_now(scroll, now, tracer);
        Ok(controller)
    }

    /// Asks for an update in response to a scroll event.
    pub fn request_update(&mut self, now: HostTime, tracer: &mut Tracer<'_>) -> GateDecision {
        let decision = self.gate.request(now);
        tracer.schedule(&ScheduleEvent { now, decision });
        decision
    }

    /// Runs a requested frame with a freshly read `scroll` offset.
    ///
    /// Returns `false` without touching the surface if no frame was pending.
    pub fn on_frame(&mut self, scroll: f64, now: HostTime, tracer: &mut Tracer<'_>) -> bool {
        if !self.gate.frame_fired(now) {
            return false;
        }
        self.update_now(scroll, now, tracer);
        true
    }

    /// Reports that the guard timer armed for a [`GateDecision::Deferred`]
    /// fired. Returns `true` if the host must request an animation frame.
    pub fn guard_elapsed(&mut self, now: HostTime, tracer: &mut Tracer<'_>) -> bool {
        let release = self.gate.guard_elapsed(now);
        if release {
            tracer.schedule(&ScheduleEvent {
                now,
                decision: GateDecision::RequestFrame,
            });
        }
        release
    }

    /// Computes and writes the frame for `scroll`, bypassing the gate.
    pub fn update_now(&mut self, scroll: f64, now: HostTime, tracer: &mut Tracer<'_>) {
        let state = RenderState::compute(scroll, &self.config);
        let frame = state.frame(self.motion, &self.config, &self.appearance);
        self.surface.apply(&frame);
        tracer.update(&UpdateEvent {
            update_index: self.updates,
            now,
            scroll,
            state,
            motion: self.motion,
        });
        self.updates += 1;
        self.last_state = state;
    }

    /// Switches the motion preference and, if it changed, rewrites the frame
    /// for `scroll` right away.
    pub fn set_motion(
        &mut self,
        motion: MotionPreference,
        scroll: f64,
        now: HostTime,
        tracer: &mut Tracer<'_>,
    ) {
        if motion == self.motion {
            return;
        }
        self.motion = motion;
        tracer.motion_change(&MotionChangeEvent { now, motion });
        self.update_now(scroll, now, tracer);
    }

    /// Detaches from the surface and hands it back.
    ///
    /// The overlay is removed, written styles are cleared and any pending
    /// frame token is dropped, so late frame callbacks become no-ops.
    pub fn detach(mut self, now: HostTime, tracer: &mut Tracer<'_>) -> S {
        self.gate.reset();
        self.surface.detach();
        tracer.detach(&DetachEvent {
            now,
            updates: self.updates,
        });
        self.surface
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &FadeConfig {
        &self.config
    }

    /// Returns the current motion preference.
    #[must_use]
    pub fn motion(&self) -> MotionPreference {
        self.motion
    }

    /// Returns the frame gate.
    #[must_use]
    pub fn gate(&self) -> &FrameGate {
        &self.gate
    }

    /// Returns how many frames have been written, including the attach frame.
    #[must_use]
    pub fn updates(&self) -> u64 {
        self.updates
    }

    /// Returns the most recently written render state.
    #[must_use]
    pub fn last_state(&self) -> &RenderState {
        &self.last_state
    }

    /// Returns the frame the controller would write for `scroll` now.
    #[must_use]
    pub fn preview(&self, scroll: f64) -> StyleFrame {
        RenderState::compute(scroll, &self.config).frame(
            self.motion,
            &self.config,
            &self.appearance,
        )
    }

    /// Returns the surface.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;
    use crate::gate::GateState;
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    /// The state of one "element pair", shared by every surface built on it.
    #[derive(Debug, Default)]
    struct Target {
        attached: bool,
        overlays: u32,
        frames: Vec<StyleFrame>,
    }

    #[derive(Debug, Clone, Default)]
    struct RecordingSurface(Rc<RefCell<Target>>);

    impl FadeSurface for RecordingSurface {
        fn is_attached(&self) -> bool {
            self.0.borrow().attached
        }

        fn attach(&mut self, _: &Appearance) {
            let mut t = self.0.borrow_mut();
            t.attached = true;
            t.overlays += 1;
        }

        fn apply(&mut self, frame: &StyleFrame) {
            self.0.borrow_mut().frames.push(*frame);
        }

        fn detach(&mut self) {
            let mut t = self.0.borrow_mut();
            t.attached = false;
            t.overlays -= 1;
        }
    }

    fn ms(v: u64) -> HostTime {
        HostTime(v * 1000)
    }

    fn attach(surface: &RecordingSurface, scroll: f64) -> FadeController<RecordingSurface> {
        FadeController::attach(
            surface.clone(),
            FadeOptions::default(),
            scroll,
            ms(0),
            &mut Tracer::none(),
        )
        .expect("attach should succeed")
    }

    #[test]
    fn attach_writes_initial_frame() {
        let surface = RecordingSurface::default();
        let controller = attach(&surface, 100.0);

        let target = surface.0.borrow();
        assert!(target.attached, "target should be marked");
        assert_eq!(target.overlays, 1);
        assert_eq!(target.frames.len(), 1, "one synchronous update");
        assert_eq!(target.frames[0], controller.preview(100.0));
        assert_eq!(controller.updates(), 1);
        assert_eq!(controller.last_state().eased, 0.5);
    }

    #[test]
    fn second_attach_is_refused_without_side_effects() {
        let surface = RecordingSurface::default();
        let _first = attach(&surface, 0.0);

        let second = FadeController::attach(
            surface.clone(),
            FadeOptions::default(),
            0.0,
            ms(1),
            &mut Tracer::none(),
        );
        assert_eq!(second.err(), Some(FadeError::AlreadyAttached));

        let target = surface.0.borrow();
        assert_eq!(target.overlays, 1, "no second overlay");
        assert_eq!(target.frames.len(), 1, "no second initial frame");
    }

    #[test]
    fn invalid_config_leaves_surface_untouched() {
        let surface = RecordingSurface::default();
        let options = FadeOptions::new(FadeConfig {
            full_effect_offset: -1.0,
            ..FadeConfig::LOGO
        });
        let result =
            FadeController::attach(surface.clone(), options, 0.0, ms(0), &mut Tracer::none());
        assert_eq!(
            result.err(),
            Some(FadeError::InvalidConfig(ConfigError::EmptyRange {
                start: 0.0,
                full: -1.0
            }))
        );
        let target = surface.0.borrow();
        assert!(!target.attached, "target must not be marked");
        assert!(target.frames.is_empty(), "nothing written");
    }

    #[test]
    fn scroll_burst_renders_once_per_frame() {
        let surface = RecordingSurface::default();
        let mut controller = attach(&surface, 0.0);
        let mut tracer = Tracer::none();

        assert_eq!(
            controller.request_update(ms(1), &mut tracer),
            GateDecision::RequestFrame
        );
        for t in 2..8 {
            assert_eq!(
                controller.request_update(ms(t), &mut tracer),
                GateDecision::Coalesced
            );
        }
        assert!(controller.on_frame(150.0, ms(9), &mut tracer), "frame should run");
        assert!(!controller.on_frame(160.0, ms(10), &mut tracer), "no second frame");

        let target = surface.0.borrow();
        assert_eq!(target.frames.len(), 2, "attach frame plus one scroll frame");
        assert_eq!(target.frames[1], controller.preview(150.0));
    }

    #[test]
    fn deferred_request_catches_final_position() {
        let surface = RecordingSurface::default();
        let mut controller = attach(&surface, 0.0);
        let mut tracer = Tracer::none();

        controller.request_update(ms(0), &mut tracer);
        controller.on_frame(50.0, ms(4), &mut tracer);
        assert!(matches!(
            controller.request_update(ms(6), &mut tracer),
            GateDecision::Deferred { .. }
        ));
        assert!(controller.guard_elapsed(ms(16), &mut tracer), "deferred released");
        assert!(controller.on_frame(200.0, ms(20), &mut tracer), "released frame runs");

        assert_eq!(controller.last_state().progress, 1.0);
        assert_eq!(surface.0.borrow().frames.len(), 3);
    }

    #[test]
    fn scrolling_back_up_restores_resting_frame() {
        let surface = RecordingSurface::default();
        let mut controller = attach(&surface, 200.0);
        let mut tracer = Tracer::none();

        controller.request_update(ms(100), &mut tracer);
        controller.on_frame(0.0, ms(101), &mut tracer);

        assert_eq!(*controller.last_state(), RenderState::RESTING);
        let target = surface.0.borrow();
        let last = target.frames.last().expect("frames recorded");
        assert_eq!(last.opacity_value(), "1");
        assert_eq!(last.transform_value(), "scale(1) translateY(0px) rotate(0deg)");
        assert_eq!(last.filter_value(), "none");
        assert_eq!(last.overlay_opacity_value(), "0");
    }

    #[test]
    fn motion_change_rerenders_once() {
        let surface = RecordingSurface::default();
        let mut controller = attach(&surface, 120.0);
        let mut tracer = Tracer::none();

        controller.set_motion(MotionPreference::Reduced, 120.0, ms(5), &mut tracer);
        controller.set_motion(MotionPreference::Reduced, 120.0, ms(6), &mut tracer);

        assert_eq!(controller.motion(), MotionPreference::Reduced);
        let target = surface.0.borrow();
        assert_eq!(target.frames.len(), 2, "only the actual change rerenders");
        let last = target.frames[1];
        assert_eq!(last.transform, None);
        assert_eq!(last.filter, None);
        assert_eq!(last.overlay_transition_value(), "opacity 800ms linear");
    }

    #[test]
    fn reduced_motion_never_writes_transform_or_filter() {
        let surface = RecordingSurface::default();
        let options = FadeOptions {
            motion: MotionPreference::Reduced,
            ..FadeOptions::default()
        };
        let mut controller =
            FadeController::attach(surface.clone(), options, 0.0, ms(0), &mut Tracer::none())
                .expect("attach should succeed");
        let mut tracer = Tracer::none();

        for (i, s) in [25.0, 90.0, 180.0, 260.0].into_iter().enumerate() {
            let t = ms(100 * (i as u64 + 1));
            controller.request_update(t, &mut tracer);
            controller.on_frame(s, t, &mut tracer);
        }

        let target = surface.0.borrow();
        assert_eq!(target.frames.len(), 5);
        let mut prev_opacity = f64::INFINITY;
        for frame in &target.frames {
            assert_eq!(frame.transform_value(), "none");
            assert_eq!(frame.filter_value(), "none");
            assert!(frame.opacity <= prev_opacity, "opacity should only fall");
            prev_opacity = frame.opacity;
        }
    }

    #[test]
    fn detach_releases_target_for_reattach() {
        let surface = RecordingSurface::default();
        let mut controller = attach(&surface, 0.0);
        let mut tracer = Tracer::none();
        controller.request_update(ms(1), &mut tracer);

        let returned = controller.detach(ms(2), &mut tracer);
        assert!(!returned.is_attached(), "marker cleared");
        assert_eq!(surface.0.borrow().overlays, 0, "overlay removed");

        let again = attach(&surface, 0.0);
        assert_eq!(again.gate().state(), GateState::Idle);
        assert_eq!(surface.0.borrow().overlays, 1);
    }
}

// Copyright 2026 the Scrollfade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core model for a scroll-driven fade effect.
//!
//! `scrollfade_core` turns a scroll offset into the presentation of a target
//! element (opacity, scale, vertical offset, rotation, blur, saturation) and
//! of an auxiliary overlay painted above it. It is `no_std` compatible (with
//! `alloc`) and knows nothing about the DOM; platform backends implement
//! [`FadeSurface`](surface::FadeSurface) and drive the controller from their
//! own event sources.
//!
//! # Architecture
//!
//! ```text
//!   scroll event ──► FadeController::request_update() ──► GateDecision
//!                                                            │
//!                 ┌──────────────────────────────────────────┘
//!                 ▼
//!   animation frame ──► FadeController::on_frame(scroll)
//!                           │
//!                           ▼
//!   RenderState::compute() ──► StyleFrame ──► FadeSurface::apply()
//! ```
//!
//! **[`config`]** — [`FadeConfig`](config::FadeConfig) and
//! [`Appearance`](config::Appearance), immutable once a controller exists.
//!
//! **[`easing`]** — Scroll progress and the smoothstep curve.
//!
//! **[`render`]** — [`RenderState`](render::RenderState): every derived
//! presentation value for one scroll offset.
//!
//! **[`css`]** — Typed CSS values (`transform`, `filter`, `transition`) and
//! the [`StyleFrame`](css::StyleFrame) written to a surface per update.
//!
//! **[`gate`]** — [`FrameGate`](gate::FrameGate), the single-slot token that
//! coalesces scroll events to at most one update per frame.
//!
//! **[`controller`]** — [`FadeController`](controller::FadeController):
//! attach, update, motion-preference changes and detach.
//!
//! **[`stylesheet`]** — The class-scoped rule set installed once per page.
//!
//! **[`trace`]** — [`TraceSink`](trace::TraceSink) and the zero-overhead
//! [`Tracer`](trace::Tracer) wrapper.
//!
//! # Crate features
//!
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod config;
pub mod controller;
pub mod css;
pub mod easing;
pub mod error;
pub mod gate;
pub mod render;
pub mod stylesheet;
pub mod surface;
pub mod time;
pub mod trace;

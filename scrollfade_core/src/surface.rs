// Copyright 2026 the Scrollfade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The presentation seam between the controller and a platform.
//!
//! A surface is the pair of elements a controller writes to: the target and
//! the overlay it creates above the target inside the target's container.
//! Backends implement [`FadeSurface`] over their native tree (DOM elements on
//! the web); tests implement it over plain structs.

use crate::config::Appearance;
use crate::css::StyleFrame;

/// Receives the styles produced by a
/// [`FadeController`](crate::controller::FadeController).
///
/// # Lifecycle
///
/// ```rust,ignore
/// // attach: refuse twice-attached targets, build the overlay, mark the target
/// if surface.is_attached() { return Err(FadeError::AlreadyAttached); }
/// surface.attach(&appearance);
///
/// // every update: overwrite all properties, never patch
/// surface.apply(&frame);
///
/// // detach: remove the overlay, clear written styles and the marker
/// surface.detach();
/// ```
pub trait FadeSurface {
    /// Returns `true` if the target already carries a live controller,
    /// including one attached through a different surface value.
    fn is_attached(&self) -> bool;

    /// Creates the overlay, applies static styles from `appearance` and marks
    /// the target as attached.
    fn attach(&mut self, appearance: &Appearance);

    /// Writes one frame to the target and overlay.
    fn apply(&mut self, frame: &StyleFrame);

    /// Removes the overlay, clears every style written since
    /// [`attach`](Self::attach) and unmarks the target.
    fn detach(&mut self);
}

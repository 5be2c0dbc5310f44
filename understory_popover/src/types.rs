// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for the popover: subscriptions, events, and overlay styling.
//!
//! ## Overview
//!
//! Every transition of a [`Popover`](crate::popover::Popover) returns a list of
//! [`PopoverEvent`]s. The host applies them in order: mount or unmount the
//! overlay in the portal, attach or detach listeners, and redraw.

use understory_placement::{Placement, Resolved};

bitflags::bitflags! {
    /// Listener and observer resources the host keeps attached for a popover.
    ///
    /// A popover only ever holds resources it has announced through
    /// [`PopoverEvent::Subscribe`], and releases them through
    /// [`PopoverEvent::Unsubscribe`].
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Subscriptions: u8 {
        /// Document-level pointer-move listener (hover intent and continued hover).
        const POINTER_MOVE = 0b0000_0001;
        /// Document-level pointer-down listener (click-outside dismissal).
        const POINTER_DOWN = 0b0000_0010;
        /// Resize observation of the anchor element.
        const RESIZE_ANCHOR = 0b0000_0100;
        /// Resize observation of the overlay element.
        const RESIZE_OVERLAY = 0b0000_1000;
    }
}

/// Background variant of the overlay.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Background {
    /// The regular popover surface.
    #[default]
    Primary,
    /// The secondary surface.
    Secondary,
}

/// Styling inputs for the overlay renderer.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct OverlayStyle {
    /// Cap on the overlay's width.
    pub max_width: Option<f64>,
    /// Background variant.
    pub background: Background,
}

/// Where to draw the connecting indicator (arrow).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Indicator {
    /// Edge of the overlay facing the anchor.
    pub side: Placement,
    /// Offset along that edge, from the overlay's near corner.
    pub offset: f64,
}

impl Indicator {
    /// The indicator for a resolved placement.
    pub fn from_resolved(resolved: &Resolved) -> Self {
        Self {
            side: resolved.placement.opposite(),
            offset: resolved.indicator_offset,
        }
    }
}

/// Work the host performs after a popover transition.
#[derive(Clone, Debug, PartialEq)]
pub enum PopoverEvent {
    /// Mount the overlay into the portal root `root`.
    Mount {
        /// Element id of the portal root.
        root: &'static str,
        /// Styling to apply to the overlay.
        style: OverlayStyle,
    },
    /// Remove the overlay from the portal.
    Unmount,
    /// Attach these listeners/observers.
    Subscribe(Subscriptions),
    /// Detach these listeners/observers.
    Unsubscribe(Subscriptions),
    /// The popover became visible.
    Shown,
    /// The popover became hidden.
    Hidden,
    /// The overlay was placed.
    Repositioned(Resolved),
}

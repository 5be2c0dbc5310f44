// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_popover --heading-base-level=0

//! Understory Popover: a headless, `no_std` state machine for anchored overlays.
//!
//! ## Overview
//!
//! This crate decides *when* a popover is shown and *where* it goes.
//! It does not render, own a window, or install listeners.
//! Instead, the toolkit feeds it pointer events, timestamps, and measurements through
//! [`PopoverHost`](crate::host::PopoverHost), and applies the
//! [`PopoverEvent`](crate::types::PopoverEvent)s each call returns.
//!
//! ## Anchoring
//!
//! A popover anchors either to an element the caller already has, or to a wrapper
//! container around its children ([`AnchorSource`](crate::anchor::AnchorSource)).
//! [`Popover::new`](crate::popover::Popover::new) picks between the two.
//! A wrapped popover is inert until the host reports the mounted container.
//!
//! ## Triggers
//!
//! - [`Trigger::Click`](crate::config::Trigger::Click): pointer-down on the anchor shows the overlay;
//!   a later pointer-down outside the overlay hides it. The opening pointer-down never closes it.
//! - [`Trigger::Hover`](crate::config::Trigger::Hover): the pointer must stay over the anchor for the
//!   configured delay. Leaving the anchor hides the overlay, optionally keeping it open while the
//!   pointer travels onto the overlay.
//!
//! ## Resources
//!
//! Every listener or observer the host must keep attached is tracked as
//! [`Subscriptions`](crate::types::Subscriptions) and announced through
//! `Subscribe`/`Unsubscribe` events, so repeated show/hide cycles never leak listeners.
//! Hiding always unmounts the overlay from the portal ([`PORTAL_ROOT_ID`](crate::host::PORTAL_ROOT_ID)).
//!
//! ## Placement
//!
//! Positions come from [`understory_placement`]: the popover measures the anchor and overlay,
//! runs the first pass, lets the host apply the position, re-measures, and runs the second pass.
//!
//! ## Time
//!
//! Timestamps are monotonic milliseconds chosen by the host.
//! Call [`Popover::tick`](crate::popover::Popover::tick) at or after
//! [`Popover::next_deadline`](crate::popover::Popover::next_deadline).
//!
//! ## Logging
//!
//! Transitions and placements are reported through the [`log`] facade at `debug` level;
//! throttled samples at `trace` level.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod anchor;
pub mod config;
pub mod host;
pub mod popover;
pub mod throttle;
pub mod types;

pub use anchor::AnchorSource;
pub use config::{ConfigError, PopoverConfig, Trigger};
pub use host::{PORTAL_ROOT_ID, PopoverHost};
pub use popover::Popover;
pub use types::{Background, Indicator, OverlayStyle, PopoverEvent, Subscriptions};
pub use understory_placement::Placement;

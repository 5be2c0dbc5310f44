// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_placement --heading-base-level=0

//! Understory Placement: Kurbo-native placement of an overlay next to an anchor.
//!
//! Understory Placement is the geometry half of popovers and tooltips.
//!
//! - Positions an overlay on one of four sides of an anchor rectangle, centered on the anchor.
//! - Clamps the result into the viewport and reports which edge it was pinned against.
//! - Derives the offset of the connecting indicator (arrow) from the re-measured overlay.
//! - Describes the pointer region that keeps a hovered overlay open.
//!
//! ## Not a layout engine
//!
//! This crate does not measure anything and does not flip, shift, or avoid collisions.
//! It hard-codes four placements and viewport-edge clamping.
//! The caller supplies rectangles in viewport coordinates and applies the resulting position.
//!
//! ## Two passes
//!
//! Applying a position can change the overlay's layout (for example, text reflows against
//! a max width once the overlay is clamped), so placement is split into two explicit steps:
//!
//! - [`first_pass`]: estimate and clamp the overlay origin from the anchor and the overlay's size.
//! - [`second_pass`]: after the caller has applied the origin and re-measured the overlay,
//!   compute the indicator offset from the measured rectangle.
//!
//! [`compute`] runs both passes when the overlay's size does not depend on its position.
//!
//! # Example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size};
//! use understory_placement::{Placement, PlacementRequest, compute};
//!
//! let anchor = Rect::from_origin_size((100.0, 100.0), (200.0, 40.0));
//! let req = PlacementRequest::new(anchor, Size::new(150.0, 60.0), Placement::Top, Size::new(1024.0, 768.0));
//!
//! let placed = compute(&req);
//! assert_eq!(placed.origin, Point::new(125.0, 32.0));
//! // Unclamped overlays carry the indicator at their own midpoint.
//! assert_eq!(placed.indicator_offset, 75.0);
//! ```
//!
//! This crate is `no_std` and does not allocate.

#![no_std]

pub mod compute;
pub mod region;
pub mod types;

pub use compute::{compute, first_pass, second_pass};
pub use region::{contains_inclusive, retention_contains, within_padded};
pub use types::{
    Axis, DEFAULT_GAP, Estimate, PIN_EPSILON, ParsePlacementError, Pin, Placement,
    PlacementRequest, Resolved,
};

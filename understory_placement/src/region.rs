// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer inclusion regions around an anchor and its overlay.
//!
//! ## Retention
//!
//! When an overlay may be hovered, the pointer has to cross the gap between the
//! anchor and the overlay without the overlay disappearing. [`retention_contains`]
//! describes the region in which a hover-driven overlay stays visible even
//! though the pointer has left the anchor.
//!
//! The region depends on the placement and is asymmetric:
//!
//! - `Top`/`Bottom`: the cross axis (x) is checked strictly against the overlay's
//!   span. The main axis runs from the overlay's far edge all the way to the
//!   anchor's facing edge, which covers the gap loosely.
//! - `Left`/`Right`: the main axis (x) runs from the overlay's far edge to the
//!   anchor's facing edge. The cross axis (y) is the overlay's span widened by the
//!   gap on both sides, so the pointer may graze the indicator of a pinned overlay.

use kurbo::{Point, Rect};

use crate::types::Placement;

/// Whether `pt` lies inside `rect`, edges included.
///
/// Unlike [`Rect::contains`], the far edges count as inside.
#[inline]
pub fn contains_inclusive(rect: Rect, pt: Point) -> bool {
    let r = rect.abs();
    r.x0 <= pt.x && pt.x <= r.x1 && r.y0 <= pt.y && pt.y <= r.y1
}

/// Whether `pt` lies inside `anchor` widened by `padding` on every side.
///
/// Used for the hover-intent check when the show delay elapses.
#[inline]
pub fn within_padded(anchor: Rect, padding: f64, pt: Point) -> bool {
    contains_inclusive(anchor.inflate(padding, padding), pt)
}

/// Whether `pt` lies in the region that keeps a hovered overlay visible.
///
/// `overlay` is the overlay's current bounding box, `gap` the distance between
/// anchor and overlay. See the [module docs](self) for the shape of the region.
///
/// ```
/// use kurbo::{Point, Rect};
/// use understory_placement::{Placement, retention_contains};
///
/// let anchor = Rect::new(100.0, 100.0, 300.0, 140.0);
/// let overlay = Rect::new(125.0, 32.0, 275.0, 92.0);
/// // In the gap, straight above the anchor.
/// assert!(retention_contains(Placement::Top, anchor, overlay, 8.0, Point::new(200.0, 96.0)));
/// // Beside the overlay.
/// assert!(!retention_contains(Placement::Top, anchor, overlay, 8.0, Point::new(320.0, 60.0)));
/// ```
pub fn retention_contains(
    placement: Placement,
    anchor: Rect,
    overlay: Rect,
    gap: f64,
    pt: Point,
) -> bool {
    let anchor = anchor.abs();
    let overlay = overlay.abs();
    match placement {
        Placement::Top => {
            pt.y <= anchor.y0 && pt.y >= overlay.y0 && pt.x >= overlay.x0 && pt.x <= overlay.x1
        }
        Placement::Bottom => {
            pt.y >= anchor.y1 && pt.y <= overlay.y1 && pt.x >= overlay.x0 && pt.x <= overlay.x1
        }
        Placement::Left => {
            pt.x <= anchor.x0
                && pt.x >= overlay.x0
                && pt.y >= overlay.y0 - gap
                && pt.y <= overlay.y1 + gap
        }
        Placement::Right => {
            pt.x >= anchor.x1
                && pt.x <= overlay.x1
                && pt.y >= overlay.y0 - gap
                && pt.y <= overlay.y1 + gap
        }
    }
}

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The seam between a popover and the toolkit that renders it.

use kurbo::{Point, Rect, Size};

/// Element id of the top-level portal the overlay is mounted into.
///
/// Overlays live outside the regular layout tree so ancestor clipping and
/// stacking contexts never cut them off.
pub const PORTAL_ROOT_ID: &str = "popover-root";

/// Measurement and layout services provided by the toolkit.
///
/// All rectangles are in viewport coordinates. Measurements are read fresh on
/// every call; returning `None` means the element is not mounted, and the
/// popover treats that as a transient condition.
pub trait PopoverHost<K> {
    /// Bounding box of the element `id`, if mounted.
    fn element_rect(&self, id: &K) -> Option<Rect>;

    /// Bounding box of the overlay, if mounted.
    fn overlay_rect(&self) -> Option<Rect>;

    /// Size of the viewport. The viewport origin is `(0, 0)`.
    fn viewport(&self) -> Size;

    /// Cap the overlay's width, or lift the cap with `None`.
    ///
    /// Called before the overlay is measured for placement, so the measurement
    /// reflects any reflow the cap causes.
    fn set_overlay_max_width(&mut self, max_width: Option<f64>);

    /// Move the overlay's top-left to `origin`.
    ///
    /// The host should lay the overlay out synchronously so that the next
    /// [`overlay_rect`](Self::overlay_rect) reflects the new position and size.
    fn place_overlay(&mut self, origin: Point);
}

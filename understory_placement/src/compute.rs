// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two-pass placement computation.
//!
//! ## Overview
//!
//! Placing an overlay is a two-step fixed point:
//!
//! 1) [`first_pass`] estimates the overlay's top-left from the anchor rectangle and
//!    the overlay's current size, then clamps it into the viewport.
//! 2) The host applies that position (and any max width), lays the overlay out
//!    again, and measures it. Clamping can change the overlay's size, for example
//!    when text reflows against a max width.
//! 3) [`second_pass`] takes the re-measured rectangle and derives values that
//!    depend on the final layout, namely the indicator offset.
//!
//! [`compute`] runs both passes for overlays whose size does not depend on their
//! position.
//!
//! ## Clamping
//!
//! Both coordinates are clamped to be non-negative. Along the cross axis (x for
//! top/bottom, y for left/right) the far edge is then pinned flush to the
//! viewport extent if it would overflow. The far-edge pin is applied last, so an
//! overlay larger than the viewport keeps its far edge visible and gets a
//! negative origin.

use kurbo::{Point, Rect};

use crate::types::{Estimate, Pin, PIN_EPSILON, Placement, PlacementRequest, Resolved};

/// Estimate and clamp the overlay position.
///
/// ```
/// use kurbo::{Rect, Size};
/// use understory_placement::{Placement, PlacementRequest, Pin, first_pass};
///
/// let req = PlacementRequest::new(
///     Rect::new(100.0, 100.0, 300.0, 140.0),
///     Size::new(150.0, 60.0),
///     Placement::Top,
///     Size::new(1024.0, 768.0),
/// );
/// let est = first_pass(&req);
/// assert_eq!((est.origin.x, est.origin.y), (125.0, 32.0));
/// assert_eq!(est.pin, Pin::None);
/// ```
pub fn first_pass(req: &PlacementRequest) -> Estimate {
    let PlacementRequest {
        anchor,
        overlay,
        placement,
        viewport,
        gap,
    } = *req;
    let center = anchor.center();

    let (x, y) = match placement {
        Placement::Top => (
            center.x - overlay.width / 2.0,
            anchor.y0 - (overlay.height + gap),
        ),
        Placement::Bottom => (center.x - overlay.width / 2.0, anchor.y1 + gap),
        Placement::Left => (
            anchor.x0 - (overlay.width + gap),
            center.y - overlay.height / 2.0,
        ),
        Placement::Right => (anchor.x1 + gap, center.y - overlay.height / 2.0),
    };

    let cross = placement.cross_axis();
    let raw_cross = cross.coord(Point::new(x, y));
    let mut origin = Point::new(x.max(0.0), y.max(0.0));
    let mut pin = if raw_cross < 0.0 { Pin::Start } else { Pin::None };

    let extent = cross.extent(overlay);
    let limit = cross.extent(viewport);
    match placement {
        Placement::Top | Placement::Bottom => {
            if origin.x + extent > limit {
                origin.x = limit - extent;
                pin = Pin::End;
            }
        }
        Placement::Left | Placement::Right => {
            if origin.y + extent > limit {
                origin.y = limit - extent;
                pin = Pin::End;
            }
        }
    }

    Estimate { origin, pin }
}

/// Derive the final placement from the re-measured overlay rectangle.
///
/// `measured` is the overlay's bounding box after the host applied
/// `estimate.origin`. Pins are detected from the measurement, not from the
/// estimate, so host-side rounding and reflow are taken into account.
pub fn second_pass(
    estimate: &Estimate,
    anchor: Rect,
    measured: Rect,
    placement: Placement,
    viewport: kurbo::Size,
) -> Resolved {
    let axis = placement.cross_axis();
    let (start, end) = axis.span(measured);
    let extent = end - start;
    let limit = axis.extent(viewport);
    let anchor_mid = axis.coord(anchor.center());

    let indicator_offset = match measured_pin(start, end, limit) {
        // Distance from the viewport edge to the anchor's centerline.
        Pin::Start => anchor_mid,
        Pin::End => extent - (limit - anchor_mid),
        Pin::None => extent / 2.0,
    };

    Resolved {
        origin: estimate.origin,
        indicator_offset,
        placement,
    }
}

/// Run both passes, assuming the overlay keeps its size once positioned.
///
/// ```
/// use kurbo::{Rect, Size};
/// use understory_placement::{Placement, PlacementRequest, compute};
///
/// let req = PlacementRequest::new(
///     Rect::new(100.0, 100.0, 300.0, 140.0),
///     Size::new(2000.0, 60.0),
///     Placement::Top,
///     Size::new(1024.0, 768.0),
/// );
/// let r = compute(&req);
/// assert_eq!(r.origin.x, 1024.0 - 2000.0);
/// ```
pub fn compute(req: &PlacementRequest) -> Resolved {
    let estimate = first_pass(req);
    let measured = Rect::from_origin_size(estimate.origin, req.overlay);
    second_pass(&estimate, req.anchor, measured, req.placement, req.viewport)
}

fn measured_pin(start: f64, end: f64, limit: f64) -> Pin {
    if approx_eq(start, 0.0) {
        Pin::Start
    } else if approx_eq(end, limit) {
        Pin::End
    } else {
        Pin::None
    }
}

#[inline]
fn approx_eq(a: f64, b: f64) -> bool {
    a - b <= PIN_EPSILON && b - a <= PIN_EPSILON
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Size;

    const VIEWPORT: Size = Size::new(1024.0, 768.0);

    fn anchor() -> Rect {
        Rect::from_origin_size((100.0, 100.0), (200.0, 40.0))
    }

    #[test]
    fn top_centers_over_anchor() {
        let req = PlacementRequest::new(anchor(), Size::new(150.0, 60.0), Placement::Top, VIEWPORT);
        let r = compute(&req);
        assert_eq!(r.origin, Point::new(125.0, 32.0));
        assert_eq!(r.origin.x + 75.0, anchor().center().x);
        assert_eq!(r.indicator_offset, 75.0);
    }

    #[test]
    fn bottom_sits_below_gap() {
        let req = PlacementRequest::new(
            anchor(),
            Size::new(150.0, 60.0),
            Placement::Bottom,
            VIEWPORT,
        );
        let r = compute(&req);
        assert_eq!(r.origin, Point::new(125.0, 148.0));
    }

    #[test]
    fn left_and_right_center_vertically() {
        let overlay = Size::new(80.0, 20.0);
        let left = compute(&PlacementRequest::new(
            anchor(),
            overlay,
            Placement::Left,
            VIEWPORT,
        ));
        assert_eq!(left.origin, Point::new(100.0 - 88.0, 110.0));
        assert_eq!(left.indicator_offset, 10.0);

        let right = compute(&PlacementRequest::new(
            anchor(),
            overlay,
            Placement::Right,
            VIEWPORT,
        ));
        assert_eq!(right.origin, Point::new(308.0, 110.0));
        assert_eq!(right.origin.y + 10.0, anchor().center().y);
    }

    #[test]
    fn custom_gap_is_honored() {
        let req = PlacementRequest::new(anchor(), Size::new(150.0, 60.0), Placement::Top, VIEWPORT)
            .with_gap(12.0);
        assert_eq!(compute(&req).origin.y, 100.0 - 72.0);
    }

    #[test]
    fn wide_overlay_pins_far_edge() {
        let req = PlacementRequest::new(
            anchor(),
            Size::new(2000.0, 60.0),
            Placement::Top,
            VIEWPORT,
        );
        let est = first_pass(&req);
        assert_eq!(est.origin.x, -976.0);
        assert_eq!(est.pin, Pin::End);
        assert_eq!(est.origin.x + 2000.0, VIEWPORT.width);

        let r = compute(&req);
        // Anchor centerline at x = 200, overlay starts at -976.
        assert_eq!(r.indicator_offset, 1176.0);
    }

    #[test]
    fn near_edge_pin_uses_anchor_centerline() {
        let a = Rect::from_origin_size((10.0, 300.0), (20.0, 20.0));
        let req = PlacementRequest::new(a, Size::new(200.0, 50.0), Placement::Bottom, VIEWPORT);
        let est = first_pass(&req);
        assert_eq!(est.origin.x, 0.0);
        assert_eq!(est.pin, Pin::Start);
        let r = compute(&req);
        assert_eq!(r.indicator_offset, 20.0);
    }

    #[test]
    fn far_edge_pin_is_symmetric() {
        let a = Rect::from_origin_size((994.0, 300.0), (20.0, 20.0));
        let req = PlacementRequest::new(a, Size::new(200.0, 50.0), Placement::Top, VIEWPORT);
        let r = compute(&req);
        assert_eq!(r.origin.x, 824.0);
        // Anchor centerline 1004 sits 20 from the viewport's far edge.
        assert_eq!(r.indicator_offset, 180.0);
        assert_eq!(r.origin.x + r.indicator_offset, 1004.0);
    }

    #[test]
    fn vertical_clamp_for_side_placements() {
        let a = Rect::from_origin_size((400.0, 740.0), (40.0, 20.0));
        let req = PlacementRequest::new(a, Size::new(100.0, 120.0), Placement::Right, VIEWPORT);
        let est = first_pass(&req);
        assert_eq!(est.origin.y, 768.0 - 120.0);
        assert_eq!(est.pin, Pin::End);

        let a = Rect::from_origin_size((400.0, 5.0), (40.0, 20.0));
        let req = PlacementRequest::new(a, Size::new(100.0, 120.0), Placement::Left, VIEWPORT);
        let r = compute(&req);
        assert_eq!(r.origin.y, 0.0);
        assert_eq!(r.indicator_offset, 15.0);
    }

    #[test]
    fn main_axis_is_clamped_non_negative() {
        let a = Rect::from_origin_size((300.0, 10.0), (40.0, 20.0));
        let req = PlacementRequest::new(a, Size::new(100.0, 60.0), Placement::Top, VIEWPORT);
        assert_eq!(first_pass(&req).origin.y, 0.0);

        let a = Rect::from_origin_size((10.0, 300.0), (40.0, 20.0));
        let req = PlacementRequest::new(a, Size::new(100.0, 60.0), Placement::Left, VIEWPORT);
        assert_eq!(first_pass(&req).origin.x, 0.0);
    }

    #[test]
    fn fitting_overlays_never_go_negative_or_overflow() {
        let overlay = Size::new(180.0, 90.0);
        let mut x = -50.0;
        while x < 1100.0 {
            let mut y = -50.0;
            while y < 820.0 {
                let a = Rect::from_origin_size((x, y), (30.0, 30.0));
                for p in Placement::ALL {
                    let r = compute(&PlacementRequest::new(a, overlay, p, VIEWPORT));
                    assert!(r.origin.x >= 0.0 && r.origin.y >= 0.0, "{p} at ({x}, {y})");
                    let cross = p.cross_axis();
                    let far = cross.coord(r.origin) + cross.extent(overlay);
                    assert!(far <= cross.extent(VIEWPORT), "{p} at ({x}, {y})");
                }
                y += 37.0;
            }
            x += 41.0;
        }
    }

    #[test]
    fn second_pass_reads_reflowed_measurement() {
        let a = Rect::from_origin_size((400.0, 100.0), (200.0, 40.0));
        let req = PlacementRequest::new(a, Size::new(400.0, 20.0), Placement::Top, VIEWPORT);
        let est = first_pass(&req);
        assert_eq!(est.origin.x, 300.0);
        // Host reflowed the overlay to a narrower, taller box at the same origin.
        let measured = Rect::from_origin_size(est.origin, (240.0, 40.0));
        let r = second_pass(&est, req.anchor, measured, req.placement, VIEWPORT);
        assert_eq!(r.origin, est.origin);
        assert_eq!(r.indicator_offset, 120.0);
    }

    #[test]
    fn pin_detection_tolerates_subpixel_rounding() {
        let a = Rect::from_origin_size((10.0, 300.0), (20.0, 20.0));
        let req = PlacementRequest::new(a, Size::new(200.0, 50.0), Placement::Bottom, VIEWPORT);
        let est = first_pass(&req);
        let measured = Rect::from_origin_size((0.25, est.origin.y), (200.0, 50.0));
        let r = second_pass(&est, a, measured, req.placement, VIEWPORT);
        assert_eq!(r.indicator_offset, 20.0);
    }
}

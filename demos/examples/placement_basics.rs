// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placement basics: two-pass positioning against a viewport.
//!
//! This example places the same overlay on each side of an anchor, then shows
//! what happens near the viewport edges: the overlay is pinned and the
//! indicator slides to keep pointing at the anchor.
//!
//! Run:
//! - `cargo run -p understory_demos --example placement_basics`

use kurbo::{Rect, Size};
use understory_placement::{Placement, PlacementRequest, compute, first_pass};

fn main() {
    let viewport = Size::new(1024.0, 768.0);
    let overlay = Size::new(200.0, 60.0);

    // An anchor in the middle of the screen.
    let anchor = Rect::from_origin_size((450.0, 350.0), (120.0, 32.0));
    for placement in Placement::ALL {
        let r = compute(&PlacementRequest::new(anchor, overlay, placement, viewport));
        println!(
            "{placement:>6}: origin=({:.1}, {:.1}) indicator={:.1}",
            r.origin.x, r.origin.y, r.indicator_offset
        );
    }

    // Near the left edge the overlay is clamped to x = 0 and the indicator
    // moves left to stay under the anchor's center.
    let left = Rect::from_origin_size((10.0, 350.0), (40.0, 32.0));
    let req = PlacementRequest::new(left, overlay, Placement::Top, viewport);
    let est = first_pass(&req);
    let r = compute(&req);
    println!(
        "left edge: pin={:?} origin.x={:.1} indicator={:.1}",
        est.pin, r.origin.x, r.indicator_offset
    );
    assert_eq!(r.origin.x, 0.0);
    assert_eq!(r.indicator_offset, 30.0);

    // Near the right edge the far edge is pinned to the viewport.
    let right = Rect::from_origin_size((980.0, 350.0), (40.0, 32.0));
    let r = compute(&PlacementRequest::new(right, overlay, Placement::Bottom, viewport));
    println!("right edge: origin.x={:.1} indicator={:.1}", r.origin.x, r.indicator_offset);
    assert_eq!(r.origin.x + overlay.width, viewport.width);

    // A custom gap.
    let req = PlacementRequest::new(anchor, overlay, Placement::Right, viewport).with_gap(2.0);
    let r = compute(&req);
    println!("gap 2: origin=({:.1}, {:.1})", r.origin.x, r.origin.y);
    assert_eq!(r.origin.x, anchor.x1 + 2.0);
}

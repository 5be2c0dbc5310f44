// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Click-triggered popover driven by a tiny in-memory host.
//!
//! The host keeps one anchor element and an overlay whose size is fixed once
//! mounted. Each call's events are applied in order, the way a toolkit would.
//!
//! Run:
//! - `cargo run -p understory_demos --example popover_click`

use kurbo::{Point, Rect, Size};
use understory_popover::{Placement, Popover, PopoverConfig, PopoverEvent, PopoverHost};

const BUTTON: u32 = 1;

struct Host {
    button: Rect,
    overlay: Option<Rect>,
}

impl PopoverHost<u32> for Host {
    fn element_rect(&self, id: &u32) -> Option<Rect> {
        (*id == BUTTON).then_some(self.button)
    }
    fn overlay_rect(&self) -> Option<Rect> {
        self.overlay
    }
    fn viewport(&self) -> Size {
        Size::new(800.0, 600.0)
    }
    fn set_overlay_max_width(&mut self, _max_width: Option<f64>) {}
    fn place_overlay(&mut self, origin: Point) {
        if let Some(r) = self.overlay.as_mut() {
            *r = Rect::from_origin_size(origin, r.size());
        }
    }
}

impl Host {
    fn apply(&mut self, events: &[PopoverEvent]) {
        for e in events {
            println!("  {e:?}");
            match e {
                PopoverEvent::Mount { .. } => {
                    self.overlay = Some(Rect::from_origin_size((0.0, 0.0), (180.0, 64.0)));
                }
                PopoverEvent::Unmount => self.overlay = None,
                _ => {}
            }
        }
    }
}

fn main() {
    let mut host = Host {
        button: Rect::from_origin_size((300.0, 200.0), (100.0, 30.0)),
        overlay: None,
    };
    let config = PopoverConfig::default().with_placement(Placement::Bottom);
    let mut popover = Popover::anchored_to(BUTTON, config)
        .expect("default config is valid")
        .with_content("Settings");

    println!("click the button:");
    let ev = popover.pointer_down(Point::new(350.0, 215.0), &mut host);
    host.apply(&ev);
    // The host mounted the overlay; place it.
    let ev = popover.overlay_mounted(&mut host);
    host.apply(&ev);
    assert!(popover.is_visible());
    let origin = popover.position().expect("placed");
    println!("'{}' at ({:.1}, {:.1})", popover.content(), origin.x, origin.y);
    assert_eq!(origin, Point::new(260.0, 238.0));

    println!("click inside the overlay:");
    let ev = popover.pointer_down(Point::new(300.0, 260.0), &mut host);
    host.apply(&ev);
    assert!(popover.is_visible());

    println!("click elsewhere:");
    let ev = popover.pointer_down(Point::new(20.0, 500.0), &mut host);
    host.apply(&ev);
    assert!(!popover.is_visible());
    assert!(popover.subscriptions().is_empty());
}

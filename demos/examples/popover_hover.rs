// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover-triggered popover with a show delay and continued hover.
//!
//! The pointer rests on the anchor until the delay elapses, travels up onto
//! the overlay (which keeps it open), then moves away.
//!
//! Run:
//! - `cargo run -p understory_demos --example popover_hover`

use kurbo::{Point, Rect, Size};
use understory_popover::{Popover, PopoverConfig, PopoverEvent, PopoverHost};

struct Host {
    anchor: Rect,
    overlay: Option<Rect>,
}

impl PopoverHost<&'static str> for Host {
    fn element_rect(&self, _id: &&'static str) -> Option<Rect> {
        Some(self.anchor)
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
    /// Apply events; returns `true` when the overlay was just mounted.
    fn apply(&mut self, events: &[PopoverEvent]) -> bool {
        let mut mounted = false;
        for e in events {
            println!("  {e:?}");
            match e {
                PopoverEvent::Mount { .. } => {
                    self.overlay = Some(Rect::from_origin_size((0.0, 0.0), (160.0, 48.0)));
                    mounted = true;
                }
                PopoverEvent::Unmount => self.overlay = None,
                _ => {}
            }
        }
        mounted
    }
}

fn main() {
    let mut host = Host {
        anchor: Rect::from_origin_size((320.0, 300.0), (80.0, 24.0)),
        overlay: None,
    };
    let config = PopoverConfig::hover().with_continue_on_overlay_hover(true);
    let mut popover = Popover::anchored_to("help-icon", config).expect("valid config");

    println!("t=0 enter anchor:");
    let ev = popover.pointer_enter(0, Point::new(330.0, 310.0));
    host.apply(&ev);
    println!("next deadline: {:?}", popover.next_deadline());

    // Small jitter inside the anchor while waiting.
    for t in (20..500).step_by(20) {
        let ev = popover.pointer_move(t, Point::new(330.0 + (t % 3) as f64, 310.0), &mut host);
        host.apply(&ev);
    }

    println!("t=500 delay elapsed:");
    let ev = popover.tick(500, &mut host);
    if host.apply(&ev) {
        let ev = popover.overlay_mounted(&mut host);
        host.apply(&ev);
    }
    assert!(popover.is_visible());
    let overlay = host.overlay.expect("mounted");
    println!("overlay at {overlay:?}");

    println!("move through the gap onto the overlay:");
    let mut t = 520;
    for y in [298.0, 292.0, 285.0] {
        let ev = popover.pointer_move(t, Point::new(360.0, y), &mut host);
        host.apply(&ev);
        t += 20;
    }
    assert!(popover.is_visible());

    println!("move away:");
    let ev = popover.pointer_move(t, Point::new(700.0, 100.0), &mut host);
    host.apply(&ev);
    assert!(!popover.is_visible());
}

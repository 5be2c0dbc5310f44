// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect, Size};
use understory_popover::{Popover, PopoverConfig, PopoverEvent, PopoverHost};

struct Host {
    anchor: Rect,
    overlay: Option<Rect>,
}

impl PopoverHost<u32> for Host {
    fn element_rect(&self, _id: &u32) -> Option<Rect> {
        Some(self.anchor)
    }
    fn overlay_rect(&self) -> Option<Rect> {
        self.overlay
    }
    fn viewport(&self) -> Size {
        Size::new(1920.0, 1080.0)
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
            match e {
                PopoverEvent::Mount { .. } => {
                    self.overlay = Some(Rect::from_origin_size((0.0, 0.0), (280.0, 90.0)));
                }
                PopoverEvent::Unmount => self.overlay = None,
                _ => {}
            }
        }
    }
}

/// One pointer sample every 4ms, wandering over the anchor, up into the
/// overlay, and away again.
fn pointer_path() -> Vec<(u64, Point)> {
    let mut out = Vec::new();
    let mut t = 0;
    for i in 0..200 {
        out.push((t, Point::new(820.0 + (i % 40) as f64, 512.0)));
        t += 4;
    }
    for i in 0..100 {
        out.push((t, Point::new(860.0, 512.0 - i as f64)));
        t += 4;
    }
    for i in 0..100 {
        out.push((t, Point::new(860.0 + i as f64 * 8.0, 300.0)));
        t += 4;
    }
    out
}

fn bench_hover_session(c: &mut Criterion) {
    let path = pointer_path();
    let config = PopoverConfig::hover().with_continue_on_overlay_hover(true);
    c.bench_function("hover_session", |b| {
        b.iter_batched(
            || {
                let host = Host {
                    anchor: Rect::from_origin_size((800.0, 500.0), (120.0, 32.0)),
                    overlay: None,
                };
                let popover = Popover::anchored_to(1_u32, config.clone()).unwrap();
                (host, popover)
            },
            |(mut host, mut popover)| {
                let (t0, p0) = path[0];
                let ev = popover.pointer_enter(t0, p0);
                host.apply(&ev);
                for &(t, p) in &path {
                    let mut ev = popover.pointer_move(t, p, &mut host);
                    ev.extend(popover.tick(t, &mut host));
                    let mounted = ev.iter().any(|e| matches!(e, PopoverEvent::Mount { .. }));
                    host.apply(&ev);
                    if mounted {
                        let ev = popover.overlay_mounted(&mut host);
                        host.apply(&ev);
                    }
                }
                black_box(popover.is_visible())
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_click_cycles(c: &mut Criterion) {
    c.bench_function("click_cycles_64", |b| {
        b.iter_batched(
            || {
                let host = Host {
                    anchor: Rect::from_origin_size((800.0, 500.0), (120.0, 32.0)),
                    overlay: None,
                };
                let popover = Popover::anchored_to(1_u32, PopoverConfig::default()).unwrap();
                (host, popover)
            },
            |(mut host, mut popover)| {
                for _ in 0..64 {
                    let ev = popover.pointer_down(Point::new(850.0, 510.0), &mut host);
                    host.apply(&ev);
                    let ev = popover.overlay_mounted(&mut host);
                    host.apply(&ev);
                    let ev = popover.pointer_down(Point::new(10.0, 10.0), &mut host);
                    host.apply(&ev);
                }
                black_box(popover.subscriptions())
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_hover_session, bench_click_cycles);
criterion_main!(benches);

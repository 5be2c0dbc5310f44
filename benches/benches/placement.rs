// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect, Size};
use understory_placement::{
    Placement, PlacementRequest, compute, first_pass, retention_contains, second_pass,
};

const VIEWPORT: Size = Size::new(1920.0, 1080.0);

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

/// Anchors scattered over (and slightly past) the viewport, so a share of the
/// requests hit each clamp.
fn gen_requests(count: usize, overlay: Size) -> Vec<PlacementRequest> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    (0..count)
        .map(|i| {
            let x = rng.next_f64() * (VIEWPORT.width + 200.0) - 100.0;
            let y = rng.next_f64() * (VIEWPORT.height + 200.0) - 100.0;
            let anchor = Rect::from_origin_size((x, y), (24.0 + (i % 7) as f64 * 16.0, 24.0));
            PlacementRequest::new(anchor, overlay, Placement::ALL[i % 4], VIEWPORT)
        })
        .collect()
}

fn bench_compute(c: &mut Criterion) {
    let mut group = c.benchmark_group("placement");
    for &(w, h) in &[(160.0, 48.0), (640.0, 320.0), (2400.0, 80.0)] {
        let reqs = gen_requests(4096, Size::new(w, h));
        group.throughput(Throughput::Elements(reqs.len() as u64));
        group.bench_function(format!("compute_{w}x{h}"), |b| {
            b.iter(|| {
                let mut acc = 0.0;
                for r in &reqs {
                    let placed = compute(black_box(r));
                    acc += placed.origin.x + placed.indicator_offset;
                }
                black_box(acc)
            });
        });
    }
    let reqs = gen_requests(4096, Size::new(320.0, 120.0));
    group.bench_function("two_pass_reflow", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for r in &reqs {
                let est = first_pass(black_box(r));
                // Simulate a host that narrows the overlay once placed.
                let measured = Rect::from_origin_size(est.origin, (240.0, 160.0));
                acc += second_pass(&est, r.anchor, measured, r.placement, r.viewport)
                    .indicator_offset;
            }
            black_box(acc)
        });
    });
    group.finish();
}

fn bench_retention(c: &mut Criterion) {
    let mut group = c.benchmark_group("retention");
    let anchor = Rect::from_origin_size((800.0, 500.0), (120.0, 32.0));
    let mut rng = Rng::new(0xBADC_F00D_1234_5678);
    let points: Vec<Point> = (0..4096)
        .map(|_| Point::new(rng.next_f64() * 1200.0 + 360.0, rng.next_f64() * 600.0 + 240.0))
        .collect();
    for p in Placement::ALL {
        let placed = compute(&PlacementRequest::new(
            anchor,
            Size::new(300.0, 140.0),
            p,
            VIEWPORT,
        ));
        let overlay = Rect::from_origin_size(placed.origin, (300.0, 140.0));
        group.throughput(Throughput::Elements(points.len() as u64));
        group.bench_function(format!("contains_{p}"), |b| {
            b.iter(|| {
                points
                    .iter()
                    .filter(|pt| retention_contains(p, anchor, overlay, 8.0, **pt))
                    .count()
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_compute, bench_retention);
criterion_main!(benches);

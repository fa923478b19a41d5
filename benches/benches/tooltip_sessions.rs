// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::rc::Rc;
use std::time::Duration;

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Point;
use understory_tooltip::config::TooltipConfig;
use understory_tooltip::content::{
    ContentRoot, ContentTemplate, ContextChain, NoDiscovery, TooltipContent,
};
use understory_tooltip::controller::TooltipController;
use understory_tooltip::debounce::Debounce;
use understory_tooltip::popover::{Anchor, PointerEvents, Popover};
use understory_tooltip::transitions::HoverTracker;

#[derive(Default)]
struct NullPopover {
    visible: bool,
}

impl Popover<u32> for NullPopover {
    fn show(&mut self, anchor: Anchor<u32>) {
        black_box(anchor);
        self.visible = true;
    }
    fn hide(&mut self) {
        self.visible = false;
    }
    fn re_fit(&mut self, point: Point) {
        black_box(point);
    }
    fn is_visible(&self) -> bool {
        self.visible
    }
    fn set_top_layer(&mut self, _: bool) {}
    fn set_pointer_events(&mut self, _: PointerEvents) {}
}

#[derive(Default)]
struct CountingRoot(usize);

impl ContentRoot for CountingRoot {
    type Template = ();
    type Context = u32;
    type Instance = ();

    fn attach(&mut self, _: &TooltipContent<()>, chain: &ContextChain<u32>) {
        self.0 += chain.len();
    }
    fn refresh(&mut self, _: &mut (), chain: &ContextChain<u32>) {
        self.0 += chain.len();
    }
    fn detach(&mut self, _: ()) {}
    fn clear(&mut self) {}
}

type Tip = TooltipController<u32, NullPopover, CountingRoot>;

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
}

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

fn gen_move_gaps(count: usize) -> Vec<u64> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    (0..count).map(|_| rng.next_u64() % 120).collect()
}

fn bench_debounce(c: &mut Criterion) {
    let gaps = gen_move_gaps(10_000);
    let mut group = c.benchmark_group("debounce");
    group.throughput(Throughput::Elements(gaps.len() as u64));
    group.bench_function("schedule_poll_10k", |b| {
        b.iter(|| {
            let mut d = Debounce::new(ms(500));
            let mut now = 0;
            let mut fired = 0_usize;
            for (i, gap) in gaps.iter().enumerate() {
                now += gap;
                if d.poll(ms(now)).is_some() {
                    fired += 1;
                }
                d.schedule(ms(now), i);
            }
            black_box(fired);
        });
    });
    group.finish();
}

fn bench_hover_cycles(c: &mut Criterion) {
    let gaps = gen_move_gaps(64);
    let mut group = c.benchmark_group("controller");
    group.throughput(Throughput::Elements(1_000));
    group.bench_function("enter_move_reveal_leave_1k", |b| {
        b.iter_batched(
            || {
                let mut tip = Tip::new(
                    TooltipConfig::default().follow_cursor(true),
                    NullPopover::default(),
                    CountingRoot::default(),
                );
                let _ = tip.attach(Some(1), &NoDiscovery);
                tip
            },
            |mut tip| {
                let mut now = 0;
                for _ in 0..1_000 {
                    let _ = tip.pointer_enter(1, ms(now));
                    for gap in &gaps {
                        now += gap;
                        let _ = tip.pointer_move(1, Point::new(now as f64, 4.0), ms(now));
                    }
                    now += 500;
                    black_box(tip.poll(ms(now)));
                    let _ = tip.pointer_leave(1, Some(2));
                }
                black_box(tip.content().0);
            },
            BatchSize::SmallInput,
        );
    });
    group.bench_function("shared_tooltip_rebind_1k", |b| {
        let rows: Vec<Rc<[u32]>> = (0..8).map(|i| Rc::from(vec![i])).collect();
        b.iter_batched(
            || {
                Tip::with_template(
                    TooltipConfig::default().with_text("row"),
                    NullPopover::default(),
                    CountingRoot::default(),
                    ContentTemplate::text(),
                )
            },
            |mut tip| {
                let mut now = 0;
                for i in 0..1_000_u32 {
                    let row = rows[(i % 8) as usize].clone();
                    let _ = tip.hover_enter(i, Some(row), ms(now));
                    now += 500;
                    for pending in tip.take_due(ms(now)) {
                        black_box(tip.reveal(pending.target, pending.caller.as_ref(), None));
                    }
                    let _ = tip.pointer_leave(i, None);
                }
                black_box(tip.content().0);
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

fn bench_tracker(c: &mut Criterion) {
    let paths: Vec<Vec<u32>> = (0..256_u32)
        .map(|i| (0..(i % 12)).map(|d| d * 16 + i % 16).collect())
        .collect();
    let mut group = c.benchmark_group("tracker");
    group.throughput(Throughput::Elements(paths.len() as u64));
    group.bench_function("update_path_256", |b| {
        b.iter(|| {
            let mut tracker = HoverTracker::new();
            let mut n = 0;
            for path in &paths {
                n += tracker.update_path(path).len();
            }
            black_box(n);
        });
    });
    group.finish();
}

criterion_group!(benches, bench_debounce, bench_hover_cycles, bench_tracker);
criterion_main!(benches);

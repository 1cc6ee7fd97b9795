use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ringlist::prelude::*;
use std::collections::VecDeque;

fn bench_deque(c: &mut Criterion) {
    let n = 16;
    {
        let mut group = c.benchmark_group("VecDeque vs AnchoredDeque (PushBack 16)");
        group.bench_function("std::collections::VecDeque", |b| {
            b.iter(|| {
                let mut d = VecDeque::with_capacity(n);
                for i in 0..n {
                    d.push_back(black_box(i as i32));
                }
                d
            })
        });

        group.bench_function("AnchoredDeque<i32>", |b| {
            b.iter(|| {
                let mut d = AnchoredDeque::new();
                for i in 0..n {
                    d.push_back(black_box(i as i32));
                }
                d
            })
        });
        group.finish();
    }

    {
        let mut group = c.benchmark_group("VecDeque vs AnchoredDeque (Get 16)");
        let mut d_std = VecDeque::new();
        let mut d_anchored = AnchoredDeque::new();
        for i in 0..n {
            d_std.push_back(i as i32);
            d_anchored.push_back(i as i32);
        }

        group.bench_function("std::collections::VecDeque", |b| {
            b.iter(|| {
                for i in 0..n {
                    black_box(d_std.get(black_box(i)));
                }
            })
        });

        group.bench_function("AnchoredDeque<i32>", |b| {
            b.iter(|| {
                for i in 0..n {
                    black_box(d_anchored.get(black_box(i as isize)).ok());
                }
            })
        });
        group.finish();
    }
}

criterion_group!(benches, bench_deque);
criterion_main!(benches);

// Copyright 2025 the Kinesis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kinesis_stream::{Broadcast, Observable, Operation};

const PUSHES: u64 = 1_024;

fn bench_push_through_depth(c: &mut Criterion) {
    let mut group = c.benchmark_group("stream/push_through_depth");
    group.throughput(Throughput::Elements(PUSHES));

    // Hypothesis: per-push cost grows linearly with composition depth, and
    // pre-fusing with `then` saves the per-stage emitter hop.
    for depth in [1_usize, 4, 16, 64] {
        group.bench_with_input(BenchmarkId::new("compose", depth), &depth, |b, &depth| {
            let source = Broadcast::new();
            let chain = (0..depth).fold(source.observable(), |stream: Observable<u64>, _| {
                stream.compose(Operation::map("inc", |v: u64| v.wrapping_add(1)))
            });
            let _sub = chain.subscribe_fn(|v| {
                black_box(v);
            });
            b.iter(|| {
                for v in 0..PUSHES {
                    source.push(v);
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("then", depth), &depth, |b, &depth| {
            let source = Broadcast::new();
            let fused = (1..depth).fold(
                Operation::map("inc", |v: u64| v.wrapping_add(1)),
                |op, _| op.then(Operation::map("inc", |v: u64| v.wrapping_add(1))),
            );
            let _sub = source.observable().compose(fused).subscribe_fn(|v| {
                black_box(v);
            });
            b.iter(|| {
                for v in 0..PUSHES {
                    source.push(v);
                }
            });
        });
    }

    group.finish();
}

fn bench_fan_out(c: &mut Criterion) {
    let mut group = c.benchmark_group("stream/fan_out");
    group.throughput(Throughput::Elements(PUSHES));

    for subscribers in [1_usize, 8, 64] {
        group.bench_with_input(
            BenchmarkId::new("broadcast", subscribers),
            &subscribers,
            |b, &subscribers| {
                let source = Broadcast::new();
                let _subs: Vec<_> = (0..subscribers)
                    .map(|_| {
                        source.observable().subscribe_fn(|v: u64| {
                            black_box(v);
                        })
                    })
                    .collect();
                b.iter(|| {
                    for v in 0..PUSHES {
                        source.push(v);
                    }
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_push_through_depth, bench_fan_out);
criterion_main!(benches);

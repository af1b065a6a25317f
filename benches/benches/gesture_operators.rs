// Copyright 2025 the Kinesis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::rc::Rc;

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kinesis_gestures::operators::{centroid, lock_to_y_axis, on_recognition_state};
use kinesis_gestures::{GestureSource, Interaction, RecognitionState, SimulatedGestureRecognizer};
use kurbo::Point;

const EVENTS: u64 = 256;

fn bench_centroid_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("gestures/centroid_pipeline");
    group.throughput(Throughput::Elements(EVENTS));

    // Pointer counts beyond the inline capacity of `Pointers` spill to the heap.
    for pointers in [1_usize, 4, 10] {
        let frames: Vec<Vec<Point>> = (0..EVENTS)
            .map(|frame| {
                (0..pointers)
                    .map(|i| Point::new((frame + i as u64) as f64, i as f64))
                    .collect()
            })
            .collect();

        group.bench_with_input(
            BenchmarkId::new("filter_centroid_lock", pointers),
            &frames,
            |b, frames| {
                let gesture = Rc::new(SimulatedGestureRecognizer::new());
                let interaction: Interaction<_, ()> = Interaction::new(Rc::clone(&gesture));
                gesture.set_state(RecognitionState::Changed);
                let filter = on_recognition_state(RecognitionState::Began | RecognitionState::Changed)
                    .expect("non-empty state set");
                let _sub = GestureSource::from(&interaction)
                    .compose(filter)
                    .compose(centroid())
                    .compose(lock_to_y_axis(0.0))
                    .subscribe_fn(|p| {
                        black_box(p);
                    });
                b.iter(|| {
                    for frame in frames {
                        gesture.set_pointers(frame.iter().copied());
                    }
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_centroid_pipeline);
criterion_main!(benches);

// Copyright 2025 the Kinesis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `kinesis_stream` crate.
//!
//! These exercise composition depth, ordering, and how termination and
//! disposal travel through longer chains.

use std::cell::Cell;
use std::rc::Rc;

use kinesis_stream::testing::TrackingObserver;
use kinesis_stream::{Broadcast, Observable, Operation, ReactiveCell, StreamError};

fn add(n: i64) -> Operation<i64, i64> {
    Operation::map("add", move |v: i64| v + n)
}

#[test]
fn deep_chain_preserves_order() {
    let source = Broadcast::new();
    let tracker = TrackingObserver::new();
    let chain = (0..32).fold(source.observable(), |stream: Observable<i64>, _| {
        stream.compose(add(1))
    });
    let _sub = chain.subscribe(tracker.clone());

    for v in [5, -3, 100, 0] {
        source.push(v);
    }
    assert_eq!(tracker.values(), vec![37, 29, 132, 32]);
}

#[test]
fn grouping_does_not_change_output() {
    let f = add(2);
    let g = Operation::filter("even", |v: &i64| v % 2 == 0);
    let h = Operation::map("square", |v: i64| v * v);

    let source = Broadcast::new();
    let left = TrackingObserver::new();
    let right = TrackingObserver::new();
    let _l = source
        .observable()
        .compose(f.clone().then(g.clone()))
        .compose(h.clone())
        .subscribe(left.clone());
    let _r = source
        .observable()
        .compose(f)
        .compose(g.then(h))
        .subscribe(right.clone());

    for v in -4..5 {
        source.push(v);
    }
    assert_eq!(left.values(), right.values());
    assert_eq!(left.values(), vec![4, 0, 4, 16, 36]);
}

#[test]
fn error_reaches_end_of_chain_once_and_stops_it() {
    let source = Broadcast::new();
    let tracker = TrackingObserver::new();
    let calls = Rc::new(Cell::new(0));
    let counted = {
        let calls = Rc::clone(&calls);
        Operation::map("count", move |v: i64| {
            calls.set(calls.get() + 1);
            v
        })
    };
    let fail_on_zero = Operation::try_map("fail_on_zero", |v: i64| {
        if v == 0 {
            Err(StreamError::new("fail_on_zero", "zero"))
        } else {
            Ok(v)
        }
    });

    let _sub = source
        .observable()
        .compose(counted)
        .compose(fail_on_zero)
        .compose(add(10))
        .subscribe(tracker.clone());

    source.push(1);
    source.push(0);
    source.push(2);
    source.push(3);

    assert_eq!(tracker.values(), vec![11]);
    assert_eq!(tracker.errors(), vec![StreamError::new("fail_on_zero", "zero")]);
    // Nothing upstream of the failure runs for later pushes either.
    assert_eq!(calls.get(), 2);
    assert_eq!(source.subscriber_count(), 0);
}

#[test]
fn resubscribing_after_error_starts_a_fresh_chain() {
    let source = Broadcast::new();
    let once = Operation::new("fail_after_first", || {
        let mut seen = false;
        move |v: i64| {
            if seen {
                return Err(StreamError::new("fail_after_first", "second value"));
            }
            seen = true;
            Ok(Some(v))
        }
    });
    let stream = source.observable().compose(once);

    let first = TrackingObserver::new();
    let _a = stream.subscribe(first.clone());
    source.push(1);
    source.push(2);

    let second = TrackingObserver::new();
    let _b = stream.subscribe(second.clone());
    source.push(3);

    assert_eq!(first.values(), vec![1]);
    assert_eq!(first.errors().len(), 1);
    assert_eq!(second.values(), vec![3]);
    assert!(second.errors().is_empty());
}

#[test]
fn cell_reader_sees_owner_writes() {
    let cell = ReactiveCell::new("idle");
    let reader = cell.reader();
    let tracker = TrackingObserver::new();
    let sub = reader.changes().subscribe(tracker.clone());

    cell.write("busy");
    cell.write("busy");
    cell.write("idle");
    sub.unsubscribe();
    cell.write("busy");

    assert_eq!(reader.read(), "busy");
    assert_eq!(tracker.values(), vec!["busy", "idle"]);
}

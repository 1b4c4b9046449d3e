#![allow(clippy::unwrap_used)]
//! Benchmarks for the newest-first event log

#![allow(missing_docs)]

use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use gesturelog::controller::EventLog;
use std::hint::black_box;

fn create_log(entries: usize) -> EventLog {
    let mut log = EventLog::new();
    for i in 0..entries {
        log.append(&format!("onScroll velocity = ({i}.000000, -{i}.000000)"));
    }
    log
}

fn bench_append_to_large_log(c: &mut Criterion) {
    c.bench_function("event_log_append_1000", |b| {
        b.iter_batched(
            || create_log(1000),
            |mut log| {
                log.append(black_box("in onTouch"));
                black_box(log);
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let log = create_log(1000);

    c.bench_function("event_log_snapshot_1000", |b| {
        b.iter(|| {
            black_box(log.snapshot());
        });
    });
}

criterion_group!(benches, bench_append_to_large_log, bench_snapshot);
criterion_main!(benches);

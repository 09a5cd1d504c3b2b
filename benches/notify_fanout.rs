//! Benchmarks for listener registration and fan-out.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use listener_registry::prelude::*;
use std::cell::Cell;
use std::rc::Rc;

struct Counter(Cell<u64>);

impl Listener for Counter {
    fn on_notify(&self, _source: &Notifier) {
        self.0.set(self.0.get() + 1);
    }
}

fn counters(count: usize) -> Vec<Rc<Counter>> {
    (0..count).map(|_| Rc::new(Counter(Cell::new(0)))).collect()
}

/// Benchmark fan-out cost as the number of listeners grows
fn benchmark_notify(c: &mut Criterion) {
    let mut group = c.benchmark_group("notify");

    for size in [1usize, 8, 64, 256] {
        let notifier = Notifier::new();
        let listeners = counters(size);
        for listener in &listeners {
            notifier.add_listener(listener);
        }

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| black_box(notifier.notify()));
        });
    }
    group.finish();
}

/// Benchmark duplicate detection on add
fn benchmark_add_duplicate(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_duplicate");

    for size in [8usize, 64, 256] {
        let notifier = Notifier::new();
        let listeners = counters(size);
        for listener in &listeners {
            notifier.add_listener(listener);
        }
        let last = Rc::clone(&listeners[size - 1]);

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| black_box(notifier.add_listener(&last)));
        });
    }
    group.finish();
}

/// Benchmark subscribe/release round trips
fn benchmark_subscribe_release(c: &mut Criterion) {
    let notifier = Notifier::new();
    let listener = Rc::new(Counter(Cell::new(0)));

    c.bench_function("subscribe_release", |b| {
        b.iter(|| {
            let registration = notifier.subscribe(&listener);
            registration.release();
        });
    });
}

criterion_group!(
    benches,
    benchmark_notify,
    benchmark_add_duplicate,
    benchmark_subscribe_release
);
criterion_main!(benches);

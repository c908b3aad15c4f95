//! Benchmarks for linked-list CRUD against a `VecDeque` baseline.
//!
//! Run with: cargo bench
//!
//! Both containers are pre-allocated so the comparison measures the
//! operations, not allocator behavior.

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use linkbench_list::LinkedList;
use std::collections::VecDeque;

const N: usize = 10_000;

// ============================================================================
// Append
// ============================================================================

fn bench_push_back(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_back");
    group.throughput(Throughput::Elements(N as u64));

    let mut list: LinkedList<u64> = LinkedList::with_capacity(N);
    let mut deque: VecDeque<u64> = VecDeque::with_capacity(N);

    group.bench_function("linked-list", |b| {
        b.iter(|| {
            for i in 0..N as u64 {
                black_box(list.push_back(i));
            }
            list.clear();
        });
    });

    group.bench_function("vecdeque", |b| {
        b.iter(|| {
            for i in 0..N as u64 {
                black_box(deque.push_back(i));
            }
            deque.clear();
        });
    });

    group.finish();
}

// ============================================================================
// Positional insert (middle of the sequence)
// ============================================================================

fn bench_insert_middle(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_middle");
    group.throughput(Throughput::Elements(1));

    let mut list: LinkedList<u64> = (0..N as u64).collect();
    let mut deque: VecDeque<u64> = (0..N as u64).collect();

    group.bench_function("linked-list", |b| {
        b.iter(|| {
            list.insert(N / 2, 42).unwrap();
            black_box(list.remove_at(N / 2));
        });
    });

    group.bench_function("vecdeque", |b| {
        b.iter(|| {
            deque.insert(N / 2, 42);
            black_box(deque.remove(N / 2));
        });
    });

    group.finish();
}

// ============================================================================
// Positional read
// ============================================================================

fn bench_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("get");
    group.throughput(Throughput::Elements(N as u64));

    let list: LinkedList<u64> = (0..N as u64).collect();
    let deque: VecDeque<u64> = (0..N as u64).collect();

    group.bench_function("linked-list", |b| {
        b.iter(|| {
            for i in 0..N {
                black_box(list.get(i));
            }
        });
    });

    group.bench_function("vecdeque", |b| {
        b.iter(|| {
            for i in 0..N {
                black_box(deque.get(i));
            }
        });
    });

    group.finish();
}

// ============================================================================
// Full traversal
// ============================================================================

fn bench_iterate(c: &mut Criterion) {
    let mut group = c.benchmark_group("iterate");
    group.throughput(Throughput::Elements(N as u64));

    let list: LinkedList<u64> = (0..N as u64).collect();
    let deque: VecDeque<u64> = (0..N as u64).collect();

    group.bench_function("linked-list", |b| {
        b.iter(|| black_box(list.iter().sum::<u64>()));
    });

    group.bench_function("linked-list/rev", |b| {
        b.iter(|| black_box(list.iter().rev().sum::<u64>()));
    });

    group.bench_function("vecdeque", |b| {
        b.iter(|| black_box(deque.iter().sum::<u64>()));
    });

    group.finish();
}

// ============================================================================
// Value search
// ============================================================================

fn bench_find(c: &mut Criterion) {
    let mut group = c.benchmark_group("position_of");
    group.throughput(Throughput::Elements(1));

    let list: LinkedList<u64> = (0..N as u64).collect();
    let deque: VecDeque<u64> = (0..N as u64).collect();
    let needle = (N - 1) as u64;

    group.bench_function("linked-list", |b| {
        b.iter(|| black_box(list.position_of(&needle)));
    });

    group.bench_function("vecdeque", |b| {
        b.iter(|| black_box(deque.iter().position(|&v| v == needle)));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_push_back,
    bench_insert_middle,
    bench_get,
    bench_iterate,
    bench_find
);
criterion_main!(benches);

//! `bench <n>`: latency percentile report over timed list operations.
//!
//! Runs `n` pushes, `n` positional reads, and a full teardown through
//! `remove_at` on a scratch list (the interactive list is left untouched),
//! recording per-operation wall time into HDR histograms and printing a
//! min/p50/p99/p999/max/avg table per operation.

use std::hint::black_box;
use std::io::{self, Write};
use std::time::Instant;

use hdrhistogram::Histogram;
use linkbench_list::LinkedList;
use rand::Rng;
use rand::rngs::StdRng;

/// Runs the benchmark and writes the report to `out`.
pub fn run<W: Write>(rng: &mut StdRng, ops: usize, out: &mut W) -> io::Result<()> {
    if ops == 0 {
        return writeln!(out, "bench needs at least one operation");
    }

    let mut list: LinkedList<i64> = LinkedList::with_capacity(ops);

    // Histograms record nanoseconds at 3 significant figures
    let mut push = Histogram::<u64>::new(3).expect("sigfigs in range");
    let mut get = Histogram::<u64>::new(3).expect("sigfigs in range");
    let mut remove = Histogram::<u64>::new(3).expect("sigfigs in range");

    for _ in 0..ops {
        let value = rng.random_range(0..100);
        let start = Instant::now();
        black_box(list.push_back(value));
        record(&mut push, start);
    }

    for _ in 0..ops {
        let pos = rng.random_range(0..list.len());
        let start = Instant::now();
        black_box(list.get(pos));
        record(&mut get, start);
    }

    while !list.is_empty() {
        let pos = rng.random_range(0..list.len());
        let start = Instant::now();
        black_box(list.remove_at(pos));
        record(&mut remove, start);
    }

    writeln!(out, "latency per operation ({ops} samples each)")?;
    print_stats(out, "push_back:", &push)?;
    print_stats(out, "get:", &get)?;
    print_stats(out, "remove_at:", &remove)
}

#[inline]
fn record(hist: &mut Histogram<u64>, start: Instant) {
    let _ = hist.record(start.elapsed().as_nanos() as u64);
}

fn print_stats<W: Write>(out: &mut W, name: &str, hist: &Histogram<u64>) -> io::Result<()> {
    writeln!(out, "{name}")?;
    writeln!(out, "  min:  {:>8} ns", hist.min())?;
    writeln!(out, "  p50:  {:>8} ns", hist.value_at_quantile(0.50))?;
    writeln!(out, "  p99:  {:>8} ns", hist.value_at_quantile(0.99))?;
    writeln!(out, "  p999: {:>8} ns", hist.value_at_quantile(0.999))?;
    writeln!(out, "  max:  {:>8} ns", hist.max())?;
    writeln!(out, "  avg:  {:>8.0} ns", hist.mean())
}

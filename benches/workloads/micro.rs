use criterion::{black_box, Criterion};
use segheap::Allocator;

pub fn run(c: &mut Criterion) {
    bench_alloc_small(c);
    bench_alloc_medium(c);
    bench_alloc_large(c);
    bench_alloc_free_batch(c);
}

fn bench_alloc_small(c: &mut Criterion) {
    let mut group = c.benchmark_group("micro_small");
    group.warm_up_time(std::time::Duration::from_millis(500));
    group.measurement_time(std::time::Duration::from_secs(1));
    group.sample_size(10);

    let mut alloc = Allocator::new();
    group.bench_function("alloc_free_16b", |b| {
        b.iter(|| {
            let bp = alloc.allocate(black_box(16)).unwrap();
            unsafe { alloc.release(bp) };
        })
    });

    group.finish();
}

fn bench_alloc_medium(c: &mut Criterion) {
    let mut group = c.benchmark_group("micro_medium");

    let mut alloc = Allocator::new();
    group.bench_function("alloc_free_1kb", |b| {
        b.iter(|| {
            let bp = alloc.allocate(black_box(1024)).unwrap();
            unsafe { alloc.release(bp) };
        })
    });

    group.finish();
}

fn bench_alloc_large(c: &mut Criterion) {
    let mut group = c.benchmark_group("micro_large");

    let mut alloc = Allocator::new();
    group.bench_function("alloc_free_1mb", |b| {
        b.iter(|| {
            let bp = alloc.allocate(black_box(1024 * 1024)).unwrap();
            unsafe { alloc.release(bp) };
        })
    });

    group.finish();
}

fn bench_alloc_free_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("micro_batch");

    let mut alloc = Allocator::new();
    group.bench_function("alloc_1000_then_free_1000", |b| {
        b.iter(|| {
            let mut live = Vec::with_capacity(1000);
            for i in 0..1000 {
                live.push(alloc.allocate(black_box(16 + (i % 64))).unwrap());
            }
            for bp in live {
                unsafe { alloc.release(bp) };
            }
        })
    });

    group.finish();
}

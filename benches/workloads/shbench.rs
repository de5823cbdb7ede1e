use criterion::{black_box, Criterion};
use segheap::Allocator;

struct XorShift64 {
    a: u64,
}

impl XorShift64 {
    fn new(seed: u64) -> Self {
        Self { a: if seed == 0 { 1 } else { seed } }
    }

    fn next(&mut self) -> u64 {
        let mut x = self.a;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.a = x;
        x
    }

    fn gen_range(&mut self, min: usize, max: usize) -> usize {
        (self.next() as usize % (max - min)) + min
    }
}

const LIVE_BYTES: usize = 1024 * 1024 * 4; // 4MB live set
const OPS: usize = 10_000;

pub fn run(c: &mut Criterion) {
    let mut group = c.benchmark_group("shbench");
    group.sample_size(10);

    group.bench_function("fragmentation_churn", |b| {
        b.iter(|| {
            let mut alloc = Allocator::new();
            let mut rng = XorShift64::new(0x1234_5678);
            let mut live_data = Vec::new();
            let mut current_bytes = 0;

            // Phase 1: build the live set.
            while current_bytes < LIVE_BYTES {
                let size = rng.gen_range(16, 8192);
                let bp = alloc.allocate(size).unwrap();
                current_bytes += size;
                live_data.push((bp, size));
            }

            // Phase 2: random churn, replacing one live block at a time.
            for _ in 0..OPS {
                let idx = rng.gen_range(0, live_data.len());
                let (old_bp, old_size) = live_data[idx];

                let new_size = rng.gen_range(16, 8192);
                let new_bp = alloc.allocate(new_size).unwrap();

                unsafe { alloc.release(old_bp) };
                live_data[idx] = (new_bp, new_size);

                current_bytes = current_bytes + new_size - old_size;
                black_box(&live_data[idx]);
            }

            for (bp, _) in live_data.drain(..) {
                unsafe { alloc.release(bp) };
            }
        })
    });

    group.finish();
}

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

const NUM_WORKERS: usize = 4;
const REPEATS: u32 = 100;

fn thread_basic(values: &mut [f64], repeats: u32) {
    incrementer::thread::thread_basic(values, NUM_WORKERS, |share| {
        incrementer::basic(share, repeats)
    })
    .unwrap()
}

fn thread_rayon(values: &mut [f64], repeats: u32) {
    incrementer::thread::thread_rayon(values, NUM_WORKERS, |share| {
        incrementer::basic(share, repeats)
    })
    .unwrap()
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let benchmarks: &[(&str, fn(&mut [f64], u32))] = &[
        ("basic", incrementer::basic),
        ("ilp2", incrementer::ilp::<2>),
        ("ilp4", incrementer::ilp::<4>),
        ("ilp8", incrementer::ilp::<8>),
        ("ilp16", incrementer::ilp::<16>),
        ("thread_basic", thread_basic),
        ("thread_rayon", thread_rayon),
    ];
    for (group, incrementer) in benchmarks {
        // Sizes stay multiples of NUM_WORKERS so the threaded variants accept them
        for size_pow2 in [2, 4, 6, 8, 10, 12, 14, 16, 18, 20] {
            let size = 1usize << size_pow2;
            let mut group = c.benchmark_group(*group);
            group.throughput(Throughput::Elements(size as u64 * u64::from(REPEATS)));
            let mut values = vec![0.0; size];
            group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _size| {
                b.iter(|| incrementer(&mut values, pessimize::hide(REPEATS)));
            });
        }
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

//! # Bloom Filter Benchmarks
//!
//! | Group | Measures |
//! |-------|----------|
//! | sizing | parameter derivation |
//! | add | insert throughput per variant |
//! | exists | lookup throughput per variant, hit and miss |
//! | contended | add throughput with several threads on one filter |

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use bloom_filters::{
    build_filter, calculate_optimal_parameters, FilterConfig, FilterKind, InMemoryBackend,
    MembershipFilter, RemoteFilter,
};
use bloom_tests::support::generate_instance_id;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

const CAPACITY: usize = 100_000;
const RATE: f64 = 0.001;

fn variants() -> Vec<(&'static str, Box<dyn MembershipFilter>)> {
    let config = FilterConfig::new(CAPACITY, RATE).expect("valid config");
    let remote: Box<dyn MembershipFilter> = Box::new(
        RemoteFilter::new(InMemoryBackend::new(), "bench", &config).expect("remote filter"),
    );
    vec![
        ("bits", build_filter(FilterKind::Bits, &config).expect("bits filter")),
        ("hash_set", build_filter(FilterKind::HashSet, &config).expect("hash-set filter")),
        ("remote_in_memory", remote),
    ]
}

fn ids(count: usize) -> Vec<String> {
    (0..count).map(|_| generate_instance_id(16)).collect()
}

fn bench_sizing(c: &mut Criterion) {
    c.bench_function("sizing/calculate_optimal_parameters", |b| {
        b.iter(|| black_box(calculate_optimal_parameters(black_box(CAPACITY), black_box(RATE))))
    });
}

fn bench_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("add");
    let batch = ids(10_000);
    group.throughput(Throughput::Elements(batch.len() as u64));

    for (name, filter) in variants() {
        group.bench_with_input(BenchmarkId::from_parameter(name), &batch, |b, batch| {
            b.iter(|| {
                for id in batch {
                    black_box(filter.add_str(id).ok());
                }
            })
        });
    }
    group.finish();
}

fn bench_exists(c: &mut Criterion) {
    let mut group = c.benchmark_group("exists");
    let present = ids(10_000);
    let absent = ids(10_000);
    group.throughput(Throughput::Elements(present.len() as u64));

    for (name, filter) in variants() {
        for id in &present {
            filter.add_str(id).ok();
        }
        group.bench_with_input(BenchmarkId::new(name, "hit"), &present, |b, batch| {
            b.iter(|| {
                for id in batch {
                    black_box(filter.exists_str(id).ok());
                }
            })
        });
        group.bench_with_input(BenchmarkId::new(name, "miss"), &absent, |b, batch| {
            b.iter(|| {
                for id in batch {
                    black_box(filter.exists_str(id).ok());
                }
            })
        });
    }
    group.finish();
}

fn bench_contended(c: &mut Criterion) {
    let mut group = c.benchmark_group("contended");
    group.measurement_time(Duration::from_secs(10));

    for threads in [1usize, 2, 4, 8] {
        let per_thread: Vec<Vec<String>> = (0..threads).map(|_| ids(2_000)).collect();
        group.throughput(Throughput::Elements((threads * 2_000) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(threads), &per_thread, |b, batches| {
            b.iter(|| {
                let config = FilterConfig::new(CAPACITY, RATE).expect("valid config");
                let filter: Arc<dyn MembershipFilter> =
                    Arc::from(build_filter(FilterKind::Bits, &config).expect("bits filter"));
                let handles: Vec<_> = batches
                    .iter()
                    .cloned()
                    .map(|batch| {
                        let filter = Arc::clone(&filter);
                        thread::spawn(move || {
                            for id in &batch {
                                black_box(filter.add_str(id).ok());
                            }
                        })
                    })
                    .collect();
                for h in handles {
                    h.join().ok();
                }
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sizing, bench_add, bench_exists, bench_contended);
criterion_main!(benches);

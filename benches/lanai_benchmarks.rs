//! Lanai Benchmarks
//!
//! Criterion benchmarks for trie insertion, lookup and enumeration.
//!
//! To run the benchmarks:
//! ```bash
//! cargo bench --features benchmarking
//! ```

use criterion::{
    black_box, criterion_group, criterion_main, measurement::WallTime, BenchmarkId, Criterion,
    SamplingMode, Throughput,
};
use lanai_lib::data_structures::lanai_trie::LanaiTrie;
use std::time::Duration;

/// Keys shaped like hierarchical identifiers so that prefixes are shared.
fn generate_keys(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| format!("prefix_{}_key_{}", i % 100, i))
        .collect()
}

/// Benchmark the Lanai Trie
fn bench_lanai_trie(c: &mut Criterion) {
    let mut group = c.benchmark_group("lanai_trie");
    group.sampling_mode(SamplingMode::Flat);
    group.measurement_time(Duration::from_secs(2));
    group.warm_up_time(Duration::from_secs(1));

    // Bulk insertion with different key counts
    for size in [100, 1000, 10_000].iter() {
        let keys = generate_keys(*size);
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("insert", size), &keys, |b, keys| {
            b.iter(|| {
                let mut trie = LanaiTrie::new();
                for key in keys {
                    trie.add(black_box(key));
                }
                trie
            });
        });
    }

    // Lookup of every inserted key
    let keys = generate_keys(10_000);
    let trie: LanaiTrie = keys.iter().collect();
    group.bench_function("search", |b| {
        let mut index = 0;
        b.iter(|| {
            let key = &keys[index % keys.len()];
            index += 1;
            black_box(trie.search(key).is_ok());
        });
    });

    // Enumeration below a shared prefix
    group.bench_function("completions", |b| {
        let mut prefix_index = 0;
        b.iter(|| {
            let prefix = format!("prefix_{}_", prefix_index % 100);
            prefix_index += 1;
            black_box(trie.completions(&prefix).map(|keys| keys.len()).unwrap_or(0));
        });
    });

    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .with_measurement(WallTime)
        .significance_level(0.01)
        .noise_threshold(0.02)
        .confidence_level(0.99);
    targets = bench_lanai_trie
}

criterion_main!(benches);

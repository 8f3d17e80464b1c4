//! Benchmarks for per-chunk feature extraction.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use feature_engine::{chunks, rms, rms_unrolled, ChunkFeatures, ChunkProcessor};

fn sine_with_ripple(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| 5.0 * (i as f64 * 0.01).sin() + 0.3 * (i as f64 * 1.7).cos())
        .collect()
}

fn benchmark_extraction(c: &mut Criterion) {
    let chunk = sine_with_ripple(500);

    c.bench_function("chunk_features_500", |b| {
        b.iter(|| ChunkFeatures::compute(black_box(&chunk)))
    });
}

fn benchmark_rms(c: &mut Criterion) {
    let data = sine_with_ripple(100_000);

    c.bench_function("rms_iterator_100k", |b| b.iter(|| rms(black_box(&data))));

    c.bench_function("rms_unrolled_100k", |b| {
        b.iter(|| rms_unrolled(black_box(&data)))
    });
}

fn benchmark_processor(c: &mut Criterion) {
    let signal = sine_with_ripple(20_000);

    c.bench_function("process_20k_chunk500_window10", |b| {
        b.iter(|| {
            let mut processor = ChunkProcessor::new(10).unwrap();
            for chunk in chunks(black_box(&signal), 500).unwrap() {
                let _ = processor.process(chunk);
            }
        })
    });
}

criterion_group!(benches, benchmark_extraction, benchmark_rms, benchmark_processor);
criterion_main!(benches);

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use framewise::analyzers::{Autocorrelation, Energy, ZeroCrossing};
use framewise::{DftMagnitude, FramingConfig, ShortTimeProcessor};

fn test_signal() -> Vec<f64> {
    // One second of a 440 Hz tone at 16 kHz
    (0..16000)
        .map(|n| (2.0 * std::f64::consts::PI * 440.0 * n as f64 / 16000.0).sin())
        .collect()
}

fn bench_scalar(c: &mut Criterion) {
    let processor = ShortTimeProcessor::new(FramingConfig::default()).unwrap();
    let signal = test_signal();

    c.bench_function("energy_1s", |b| {
        b.iter(|| processor.process(black_box(&signal), &Energy).unwrap())
    });
    c.bench_function("zero_crossing_1s", |b| {
        b.iter(|| processor.process(black_box(&signal), &ZeroCrossing).unwrap())
    });
}

fn bench_vector(c: &mut Criterion) {
    let processor = ShortTimeProcessor::new(FramingConfig::default()).unwrap();
    let signal = test_signal();
    let lags = Autocorrelation::new(64).unwrap();
    let dft = DftMagnitude::new(256).unwrap();

    c.bench_function("autocorrelation_64_1s", |b| {
        b.iter(|| processor.process(black_box(&signal), &lags).unwrap())
    });
    c.bench_function("dft_256_1s", |b| {
        b.iter(|| processor.process(black_box(&signal), &dft).unwrap())
    });
}

criterion_group!(benches, bench_scalar, bench_vector);
criterion_main!(benches);

use criterion::{Criterion, criterion_group, criterion_main};

use fips203::KG;
use fips203::traits::{Decaps, Encaps, KeyGen};

#[allow(clippy::redundant_closure)]
pub fn criterion_benchmark(c: &mut Criterion) {
    let (ek, dk) = KG::try_keygen().unwrap();
    let (_, ct) = ek.try_encaps().unwrap();

    c.bench_function("ml_kem_1024 KeyGen", |b| b.iter(|| KG::try_keygen()));
    c.bench_function("ml_kem_1024 Encaps", |b| b.iter(|| ek.try_encaps()));
    c.bench_function("ml_kem_1024 Decaps", |b| b.iter(|| dk.try_decaps(&ct)));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

/*

$ cargo bench
Intel® Core™ i7-7700K CPU @ 4.20GHz × 8

ml_kem_1024 KeyGen      time:   [100.13 µs 100.80 µs 101.55 µs]
ml_kem_1024 Encaps      time:   [102.59 µs 102.95 µs 103.34 µs]
ml_kem_1024 Decaps      time:   [121.48 µs 122.99 µs 125.10 µs]

 */

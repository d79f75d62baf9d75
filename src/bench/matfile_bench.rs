use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use matfile::{Matrix, encode, generate, parse};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn random_matrix(rows: usize, cols: usize) -> Matrix {
    let mut rng = StdRng::seed_from_u64(0);
    generate(rows, cols, 0..=20, &mut rng).unwrap()
}

fn bench_transpose(c: &mut Criterion) {
    let mut group = c.benchmark_group("transpose");
    for &(rows, cols) in &[(16, 16), (256, 256), (256, 512), (1024, 1024)] {
        let m = random_matrix(rows, cols);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", rows, cols)),
            &m,
            |b, m| b.iter(|| black_box(m).transpose()),
        );
    }
    group.finish();
}

fn bench_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");
    for &size in &[16, 256, 1024] {
        let m = random_matrix(size, size);
        let text = encode(&m).unwrap();

        group.bench_with_input(BenchmarkId::new("encode", size), &m, |b, m| {
            b.iter(|| encode(black_box(m)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("parse", size), &text, |b, text| {
            b.iter(|| parse(black_box(text)).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_transpose, bench_codec);
criterion_main!(benches);

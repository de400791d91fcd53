use criterion::{
    black_box, criterion_group, criterion_main, BenchmarkId, Criterion,
};
use math::prelude::{decode_base, interpolate_constant, IntegerPolynomial};
use num_bigint::BigInt;

fn polynomial(degree: usize) -> IntegerPolynomial {
    // Fixed coefficients keep runs comparable.
    let coefficients = (0..=degree)
        .map(|i| (BigInt::from(0x9e37_79b9_7f4a_7c15u64) << (8 * i)) + i)
        .collect::<Vec<_>>();
    IntegerPolynomial::from(coefficients)
}

fn bench_interpolate(c: &mut Criterion) {
    let mut group = c.benchmark_group("interpolate_constant");
    for k in [3usize, 10, 30] {
        let points = polynomial(k - 1).sample(1..=k as u64);
        group.bench_with_input(BenchmarkId::from_parameter(k), &k, |b, &k| {
            b.iter(|| {
                let secret = interpolate_constant(black_box(&points), k)
                    .expect("points lie on the polynomial");
                black_box(secret);
            });
        });
    }
    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let digits = "0123456789abcdef".repeat(64);
    c.bench_function("decode_base_1024_hex_digits", move |b| {
        b.iter(|| {
            let value =
                decode_base(black_box(&digits), 16).expect("valid digits");
            black_box(value);
        });
    });
}

criterion_group!(benches, bench_interpolate, bench_decode);
criterion_main!(benches);

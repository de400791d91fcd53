use math::prelude::IntegerPolynomial;
use num_bigint::BigInt;
use polysecret_core::{SecretRecovery, ShareRecord};

const BASES: [u32; 5] = [2, 7, 10, 13, 16];

/// Sample shares of a known cubic, write each one in a different base, and
/// recover the constant term from the first four of them.
fn main() {
    let poly = IntegerPolynomial::from(vec![
        BigInt::from(1_000_000_007u64),
        BigInt::from(12_345),
        BigInt::from(678),
        BigInt::from(9),
    ]);
    let threshold = poly.coefficients().len();

    let records: Vec<ShareRecord> = poly
        .sample(1..=BASES.len() as u64)
        .into_iter()
        .zip(BASES)
        .map(|(point, base)| {
            let digits = point
                .y()
                .to_biguint()
                .expect("shares of a positive polynomial are positive")
                .to_str_radix(base);
            ShareRecord::new(point.x(), base, digits)
                .expect("sample indices start at 1")
        })
        .collect();

    for record in &records {
        println!(
            "share {}: base {:>2} value {}",
            record.index, record.base, record.value
        );
    }

    let recovery = SecretRecovery::new(threshold, records.len())
        .expect("threshold fits share count");
    let secret = recovery
        .recover(&records)
        .expect("shares lie on the polynomial");

    assert_eq!(&secret, poly.constant_term());
    println!("The secret constant C is: {secret}");
}

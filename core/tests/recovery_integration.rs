use std::path::PathBuf;
use std::process::Command;

use math::prelude::IntegerPolynomial;
use math::{DecodeError, InterpolationError};
use num_bigint::BigInt;
use polysecret_core::{
    DocumentError, RecoveryError, SecretRecovery, ShareDocument, ShareRecord,
};

const LARGE_SECRET: u64 = 79_836_264_049_851;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn recover_fixture(name: &str) -> Result<BigInt, RecoveryError> {
    ShareDocument::from_path(fixture(name))?.recover()
}

fn combinations<T: Clone>(items: &[T], k: usize) -> Vec<Vec<T>> {
    fn helper<T: Clone>(
        items: &[T],
        k: usize,
        start: usize,
        current: &mut Vec<T>,
        result: &mut Vec<Vec<T>>,
    ) {
        if current.len() == k {
            result.push(current.clone());
            return;
        }
        for idx in start..items.len() {
            current.push(items[idx].clone());
            helper(items, k, idx + 1, current, result);
            current.pop();
        }
    }

    let mut result = Vec::new();
    let mut current = Vec::new();
    helper(items, k, 0, &mut current, &mut result);
    result
}

#[test]
fn sample_document_recovers_three() {
    assert_eq!(recover_fixture("sample.json").unwrap(), BigInt::from(3));
}

#[test]
fn large_document_recovers_secret() {
    assert_eq!(
        recover_fixture("large.json").unwrap(),
        BigInt::from(LARGE_SECRET)
    );
}

#[test]
fn every_threshold_subset_of_large_document_agrees() {
    let document = ShareDocument::from_path(fixture("large.json")).unwrap();
    let threshold = document.threshold();
    let recovery = SecretRecovery::from_threshold(threshold);
    let in_range: Vec<ShareRecord> = document
        .records()
        .into_iter()
        .filter(|r| r.index <= threshold.total() as u64)
        .collect();

    for subset in combinations(&in_range, threshold.required()) {
        assert_eq!(
            recovery.recover(&subset).unwrap(),
            BigInt::from(LARGE_SECRET)
        );
    }
}

#[test]
fn points_off_integer_polynomial_are_reported() {
    assert!(matches!(
        recover_fixture("off_polynomial.json"),
        Err(RecoveryError::Interpolation(
            InterpolationError::NonIntegral { .. }
        ))
    ));
}

#[test]
fn insufficient_document_is_reported() {
    let err = recover_fixture("insufficient.json").unwrap_err();
    assert!(matches!(
        err,
        RecoveryError::InsufficientPoints {
            required: 3,
            available: 2,
        }
    ));
    assert_eq!(err.to_string(), "Need 3 points but found 2");
}

#[test]
fn invalid_digit_is_reported() {
    assert!(matches!(
        recover_fixture("invalid_digit.json"),
        Err(RecoveryError::Decode {
            index: 2,
            source: DecodeError::InvalidDigit { digit: 'a', .. },
        })
    ));
}

#[test]
fn invalid_base_is_reported() {
    assert!(matches!(
        recover_fixture("invalid_base.json"),
        Err(RecoveryError::Decode {
            index: 1,
            source: DecodeError::InvalidBase(17),
        })
    ));
}

#[test]
fn missing_document_is_reported() {
    assert!(matches!(
        recover_fixture("does_not_exist.json"),
        Err(RecoveryError::Document(DocumentError::Io(_)))
    ));
}

#[test]
fn generated_shares_round_trip_through_json() {
    let poly = IntegerPolynomial::from(vec![42, 17, 0, 9, 1]);
    let threshold = poly.coefficients().len();
    let mut json = serde_json::Map::new();
    json.insert(
        "keys".into(),
        serde_json::json!({ "n": threshold + 2, "k": threshold }),
    );
    for (i, point) in poly.sample(1..=(threshold as u64 + 2)).iter().enumerate()
    {
        let base = 2 + (i as u32 % 15);
        let digits = point.y().to_biguint().unwrap().to_str_radix(base);
        json.insert(
            point.x().to_string(),
            serde_json::json!({ "base": base.to_string(), "value": digits }),
        );
    }

    let document =
        ShareDocument::from_json_str(&serde_json::Value::from(json).to_string())
            .unwrap();
    assert_eq!(document.recover().unwrap(), BigInt::from(42));
}

#[test]
fn binary_prints_recovered_constant() {
    let output = Command::new(env!("CARGO_BIN_EXE_recover-secret"))
        .arg(fixture("sample.json"))
        .env("RUST_LOG", "off")
        .output()
        .expect("binary runs");
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        "The secret constant C is: 3"
    );
}

#[test]
fn binary_fails_on_bad_input() {
    let output = Command::new(env!("CARGO_BIN_EXE_recover-secret"))
        .arg(fixture("insufficient.json"))
        .env("RUST_LOG", "off")
        .output()
        .expect("binary runs");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr)
        .contains("Need 3 points but found 2"));
}

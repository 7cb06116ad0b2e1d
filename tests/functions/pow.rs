use std::sync::Arc;

use torcharrow_udf::Error;
use torcharrow_udf::arrow::array::{ArrayRef, Float32Array, Float64Array, Int32Array, Int64Array};

use crate::test_helpers::*;

const POW: &str = "torcharrow_pow(c0, c1)";

const BASES: [f64; 14] = [
    0.0,
    0.0,
    0.0,
    -1.0,
    -1.0,
    -1.0,
    -9.0,
    9.1,
    10.1,
    11.1,
    -11.1,
    0.0,
    f64::INFINITY,
    f64::INFINITY,
];
const EXPONENTS: [f64; 14] = [
    0.0,
    1.0,
    -1.0,
    0.0,
    1.0,
    -1.0,
    -3.3,
    123456.432,
    -99.9,
    0.0,
    100000.0,
    f64::INFINITY,
    0.0,
    f64::INFINITY,
];

#[tokio::test(flavor = "current_thread")]
async fn test_pow_float32_matches_powf() {
    let session = create_session();
    let bases: Vec<f32> = BASES.iter().map(|v| *v as f32).collect();
    let exponents: Vec<f32> = EXPONENTS.iter().map(|v| *v as f32).collect();
    let expected: Vec<f32> = bases
        .iter()
        .zip(exponents.iter())
        .map(|(b, e)| b.powf(*e))
        .collect();
    assert_expression_bits(
        &session,
        POW,
        vec![
            Arc::new(Float32Array::from(bases)),
            Arc::new(Float32Array::from(exponents)),
        ],
        Arc::new(Float32Array::from(expected)),
    )
    .await;
}

#[tokio::test(flavor = "current_thread")]
async fn test_pow_float64_matches_powf() {
    let session = create_session();
    let expected: Vec<f64> = BASES
        .iter()
        .zip(EXPONENTS.iter())
        .map(|(b, e)| b.powf(*e))
        .collect();
    assert_expression_bits(
        &session,
        POW,
        vec![
            Arc::new(Float64Array::from(BASES.to_vec())),
            Arc::new(Float64Array::from(EXPONENTS.to_vec())),
        ],
        Arc::new(Float64Array::from(expected)),
    )
    .await;
}

#[tokio::test(flavor = "current_thread")]
async fn test_pow_tiny_float_result_is_not_zero() {
    let session = create_session();
    let expected = 10.1_f64.powf(-99.9);
    assert!(expected > 0.0);
    assert_expression_bits(
        &session,
        POW,
        vec![
            Arc::new(Float64Array::from(vec![10.1, 9.1])),
            Arc::new(Float64Array::from(vec![-99.9, 3.3])),
        ],
        Arc::new(Float64Array::from(vec![expected, 9.1_f64.powf(3.3)])),
    )
    .await;
}

#[test]
fn test_float_bits_distinguishes_adjacent_values() {
    let value = 9.1_f64.powf(3.3);
    let next = f64::from_bits(value.to_bits() + 1);
    let left: ArrayRef = Arc::new(Float64Array::from(vec![value]));
    let right: ArrayRef = Arc::new(Float64Array::from(vec![next]));
    assert_ne!(float_bits(&left), float_bits(&right));

    let zero: ArrayRef = Arc::new(Float64Array::from(vec![0.0]));
    let tiny: ArrayRef = Arc::new(Float64Array::from(vec![10.1_f64.powf(-99.9)]));
    assert_ne!(float_bits(&zero), float_bits(&tiny));
}

#[tokio::test(flavor = "current_thread")]
async fn test_pow_float_special_values() {
    let session = create_session();
    assert_expression(
        &session,
        POW,
        vec![
            Arc::new(Float64Array::from(vec![f64::NAN, 1.0, 0.0, -8.0])),
            Arc::new(Float64Array::from(vec![0.0, f64::NAN, -1.0, 1.0 / 3.0])),
        ],
        Arc::new(Float64Array::from(vec![1.0, 1.0, f64::INFINITY, f64::NAN])),
    )
    .await;
}

#[tokio::test(flavor = "current_thread")]
async fn test_pow_int64() {
    let session = create_session();
    assert_expression(
        &session,
        POW,
        vec![
            Arc::new(Int64Array::from(vec![9, -9, 9, -9, 0])),
            Arc::new(Int64Array::from(vec![3, 3, 0, 0, 0])),
        ],
        Arc::new(Int64Array::from(vec![729, -729, 1, 1, 1])),
    )
    .await;
}

#[tokio::test(flavor = "current_thread")]
async fn test_pow_int32() {
    let session = create_session();
    assert_expression(
        &session,
        POW,
        vec![
            Arc::new(Int32Array::from(vec![2, -3, 0, 7])),
            Arc::new(Int32Array::from(vec![10, 3, 0, 1])),
        ],
        Arc::new(Int32Array::from(vec![1024, -27, 1, 7])),
    )
    .await;
}

#[tokio::test(flavor = "current_thread")]
async fn test_pow_negative_exponent() {
    let session = create_session();
    let err = assert_error(
        &session,
        POW,
        vec![
            Arc::new(Int32Array::from(vec![2])),
            Arc::new(Int32Array::from(vec![-2])),
        ],
        "Integers to negative integer powers are not allowed",
    )
    .await;
    assert!(matches!(err, Error::Domain(_)));
}

#[tokio::test(flavor = "current_thread")]
async fn test_pow_negative_base_and_exponent() {
    let session = create_session();
    let err = assert_error(
        &session,
        POW,
        vec![
            Arc::new(Int64Array::from(vec![-3])),
            Arc::new(Int64Array::from(vec![-1])),
        ],
        "Integers to negative integer powers are not allowed",
    )
    .await;
    assert!(matches!(err, Error::Domain(_)));
}

#[tokio::test(flavor = "current_thread")]
async fn test_pow_int64_overflow() {
    let session = create_session();
    let err = assert_error(
        &session,
        POW,
        vec![
            Arc::new(Int64Array::from(vec![9])),
            Arc::new(Int64Array::from(vec![123456])),
        ],
        "Inf is outside the range of representable values of type int64",
    )
    .await;
    assert!(matches!(err, Error::Range(_)));
}

#[tokio::test(flavor = "current_thread")]
async fn test_pow_int32_overflow() {
    let session = create_session();
    assert_error(
        &session,
        POW,
        vec![
            Arc::new(Int32Array::from(vec![2])),
            Arc::new(Int32Array::from(vec![31])),
        ],
        "2147483648 is outside the range of representable values of type int32",
    )
    .await;
}

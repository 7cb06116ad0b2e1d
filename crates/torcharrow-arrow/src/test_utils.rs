use datafusion::arrow::array::*;
use datafusion::arrow::datatypes::*;
use datafusion::arrow::record_batch::RecordBatch;

/// A single cell of a result batch, widened to the largest type of its kind.
#[derive(Debug, Clone, PartialEq)]
pub enum TestValue {
    Null,
    Int64(i64),
    Float64(f64),
    Unsupported(String),
}

impl From<i64> for TestValue {
    fn from(v: i64) -> Self {
        TestValue::Int64(v)
    }
}

impl From<i32> for TestValue {
    fn from(v: i32) -> Self {
        TestValue::Int64(v as i64)
    }
}

impl From<f64> for TestValue {
    fn from(v: f64) -> Self {
        TestValue::Float64(v)
    }
}

impl From<f32> for TestValue {
    fn from(v: f32) -> Self {
        TestValue::Float64(v as f64)
    }
}

impl<T: Into<TestValue>> From<Option<T>> for TestValue {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(val) => val.into(),
            None => TestValue::Null,
        }
    }
}

pub const NULL: TestValue = TestValue::Null;

pub trait IntoTestValue {
    fn into_test_value(self) -> TestValue;
}

impl IntoTestValue for TestValue {
    fn into_test_value(self) -> TestValue {
        self
    }
}

impl IntoTestValue for &TestValue {
    fn into_test_value(self) -> TestValue {
        self.clone()
    }
}

impl IntoTestValue for i64 {
    fn into_test_value(self) -> TestValue {
        TestValue::Int64(self)
    }
}

impl IntoTestValue for i32 {
    fn into_test_value(self) -> TestValue {
        TestValue::Int64(self as i64)
    }
}

impl IntoTestValue for f64 {
    fn into_test_value(self) -> TestValue {
        TestValue::Float64(self)
    }
}

impl IntoTestValue for f32 {
    fn into_test_value(self) -> TestValue {
        TestValue::Float64(self as f64)
    }
}

pub fn convert_to_test_value<T: IntoTestValue>(val: T) -> TestValue {
    val.into_test_value()
}

pub fn extract_value(array: &ArrayRef, row: usize) -> TestValue {
    if array.is_null(row) || matches!(array.data_type(), DataType::Null) {
        return TestValue::Null;
    }

    match array.data_type() {
        DataType::Int32 => TestValue::Int64(array.as_primitive::<Int32Type>().value(row) as i64),
        DataType::Int64 => TestValue::Int64(array.as_primitive::<Int64Type>().value(row)),
        DataType::Float32 => {
            TestValue::Float64(array.as_primitive::<Float32Type>().value(row) as f64)
        }
        DataType::Float64 => TestValue::Float64(array.as_primitive::<Float64Type>().value(row)),
        other => TestValue::Unsupported(format!("<unsupported: {:?}>", other)),
    }
}

pub fn batch_to_rows(batches: &[RecordBatch]) -> Vec<Vec<TestValue>> {
    let mut rows = Vec::new();
    for batch in batches {
        for row_idx in 0..batch.num_rows() {
            let row = batch
                .columns()
                .iter()
                .map(|array| extract_value(array, row_idx))
                .collect();
            rows.push(row);
        }
    }
    rows
}

/// Floats match when both are NaN, when they are equal (including matching
/// infinities), or when they agree to a relative 1e-10.
pub fn compare_values(actual: &TestValue, expected: &TestValue) -> bool {
    match (actual, expected) {
        (TestValue::Null, TestValue::Null) => true,
        (TestValue::Int64(a), TestValue::Int64(e)) => a == e,
        (TestValue::Float64(a), TestValue::Float64(e)) => {
            if a.is_nan() && e.is_nan() {
                return true;
            }
            if a == e {
                return true;
            }
            if a.is_infinite() || e.is_infinite() {
                return false;
            }
            (a - e).abs() < 1e-10 || (a - e).abs() / e.abs().max(1.0) < 1e-10
        }
        _ => false,
    }
}

pub fn compare_rows(actual: &[Vec<TestValue>], expected: &[Vec<TestValue>]) -> bool {
    if actual.len() != expected.len() {
        return false;
    }
    actual.iter().zip(expected.iter()).all(|(actual_row, expected_row)| {
        actual_row.len() == expected_row.len()
            && actual_row
                .iter()
                .zip(expected_row.iter())
                .all(|(a, e)| compare_values(a, e))
    })
}

#[macro_export]
macro_rules! assert_batch_records_eq {
    ($batches:expr, [$([$($val:expr),* $(,)?]),* $(,)?]) => {{
        let actual = $crate::batch_to_rows(&$batches);
        let expected: Vec<Vec<$crate::TestValue>> = vec![
            $(vec![$($crate::convert_to_test_value($val)),*]),*
        ];
        assert!(
            $crate::compare_rows(&actual, &expected),
            "Batch records mismatch.\nExpected: {:?}\nActual: {:?}",
            expected,
            actual
        );
    }};
}

#![doc = include_str!("../README.md")]

mod test_utils;

pub use datafusion::arrow::record_batch::RecordBatch;
pub use test_utils::{
    IntoTestValue, NULL, TestValue, batch_to_rows, compare_rows, compare_values,
    convert_to_test_value, extract_value,
};

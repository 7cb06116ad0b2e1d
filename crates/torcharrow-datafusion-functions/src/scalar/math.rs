use std::sync::Arc;

use datafusion::arrow::array::{Array, ArrayRef, AsArray};
use datafusion::arrow::datatypes::{DataType, Float32Type, Float64Type, Int32Type, Int64Type};
use datafusion::common::{exec_err, plan_err};
use datafusion::error::Result as DFResult;
use datafusion::logical_expr::{
    ColumnarValue, ScalarUDFImpl, Signature, TypeSignature, Volatility,
};
use datafusion::scalar::ScalarValue;
use torcharrow_common::{Error, NumericType, Result};
use torcharrow_functions::BinaryOp;
use tracing::debug;

use super::{arrow_type, into_datafusion_error, numeric_type};

/// One of the binary arithmetic functions, bound to its registered name.
///
/// Accepts two arguments of the same numeric type (int32, int64, float32 or
/// float64) and returns that type. Nulls propagate elementwise.
#[derive(Debug)]
pub struct ArithmeticUdf {
    name: String,
    op: BinaryOp,
    signature: Signature,
}

impl ArithmeticUdf {
    pub fn new(op: BinaryOp, name: impl Into<String>) -> Self {
        let variants = NumericType::ALL
            .iter()
            .map(|numeric| {
                let data_type = arrow_type(*numeric);
                TypeSignature::Exact(vec![data_type.clone(), data_type])
            })
            .collect();
        Self {
            name: name.into(),
            op,
            signature: Signature::one_of(variants, Volatility::Immutable),
        }
    }
}

impl ScalarUDFImpl for ArithmeticUdf {
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn signature(&self) -> &Signature {
        &self.signature
    }

    fn return_type(&self, args: &[DataType]) -> DFResult<DataType> {
        match args {
            [left, right] if left == right && numeric_type(left).is_some() => Ok(left.clone()),
            [left, right] => plan_err!(
                "{} does not support arguments of type ({}, {})",
                self.name,
                left,
                right
            ),
            _ => plan_err!("{} requires 2 arguments, got {}", self.name, args.len()),
        }
    }

    fn invoke_batch(&self, args: &[ColumnarValue], num_rows: usize) -> DFResult<ColumnarValue> {
        if args.len() != 2 {
            return exec_err!("{} requires 2 arguments, got {}", self.name, args.len());
        }
        debug!(function = %self.name, rows = num_rows, "Evaluating arithmetic function");

        let all_scalar = args
            .iter()
            .all(|arg| matches!(arg, ColumnarValue::Scalar(_)));
        let arrays = ColumnarValue::values_to_arrays(args)?;
        let result = evaluate_arrays(self.op, &arrays[0], &arrays[1])
            .map_err(into_datafusion_error)?;

        if all_scalar {
            Ok(ColumnarValue::Scalar(ScalarValue::try_from_array(
                &result, 0,
            )?))
        } else {
            Ok(ColumnarValue::Array(result))
        }
    }
}

/// Dispatches `op` on the element type shared by `left` and `right`.
pub fn evaluate_arrays(op: BinaryOp, left: &ArrayRef, right: &ArrayRef) -> Result<ArrayRef> {
    if left.data_type() != right.data_type() {
        return Err(Error::invalid_argument(format!(
            "{} requires arguments of the same type, got ({}, {})",
            op.name(),
            left.data_type(),
            right.data_type()
        )));
    }

    let result: ArrayRef = match left.data_type() {
        DataType::Int32 => Arc::new(op.apply(
            left.as_primitive::<Int32Type>(),
            right.as_primitive::<Int32Type>(),
        )?),
        DataType::Int64 => Arc::new(op.apply(
            left.as_primitive::<Int64Type>(),
            right.as_primitive::<Int64Type>(),
        )?),
        DataType::Float32 => Arc::new(op.apply(
            left.as_primitive::<Float32Type>(),
            right.as_primitive::<Float32Type>(),
        )?),
        DataType::Float64 => Arc::new(op.apply(
            left.as_primitive::<Float64Type>(),
            right.as_primitive::<Float64Type>(),
        )?),
        other => {
            return Err(Error::invalid_argument(format!(
                "{} does not support arguments of type {}",
                op.name(),
                other
            )));
        }
    };
    Ok(result)
}

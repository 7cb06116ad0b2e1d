mod math;

use datafusion::arrow::datatypes::DataType;
use datafusion::error::DataFusionError;
use datafusion::logical_expr::ScalarUDF;
use datafusion::prelude::SessionContext;
use torcharrow_common::{Error, NumericType, RegistrySettings};
use torcharrow_functions::BinaryOp;
use tracing::debug;

pub use math::{ArithmeticUdf, evaluate_arrays};

pub fn register_all(ctx: &SessionContext, settings: &RegistrySettings) -> Vec<String> {
    udfs(settings)
        .into_iter()
        .map(|udf| {
            let name = udf.name().to_string();
            ctx.register_udf(udf);
            debug!(function = %name, "Registered scalar function");
            name
        })
        .collect()
}

pub fn udfs(settings: &RegistrySettings) -> Vec<ScalarUDF> {
    BinaryOp::ALL
        .iter()
        .filter(|op| settings.is_enabled(op.name()))
        .map(|op| {
            ScalarUDF::new_from_impl(ArithmeticUdf::new(
                *op,
                settings.function_name(op.name()),
            ))
        })
        .collect()
}

pub fn arrow_type(numeric: NumericType) -> DataType {
    match numeric {
        NumericType::Int32 => DataType::Int32,
        NumericType::Int64 => DataType::Int64,
        NumericType::Float32 => DataType::Float32,
        NumericType::Float64 => DataType::Float64,
    }
}

pub fn numeric_type(data_type: &DataType) -> Option<NumericType> {
    match data_type {
        DataType::Int32 => Some(NumericType::Int32),
        DataType::Int64 => Some(NumericType::Int64),
        DataType::Float32 => Some(NumericType::Float32),
        DataType::Float64 => Some(NumericType::Float64),
        _ => None,
    }
}

pub fn into_datafusion_error(err: Error) -> DataFusionError {
    DataFusionError::External(Box::new(err))
}

/// Recovers the typed error raised by one of the functions, looking through
/// whatever context the engine wrapped around it.
pub fn arithmetic_error(err: &DataFusionError) -> Option<&Error> {
    match err.find_root() {
        DataFusionError::External(inner) => inner.downcast_ref::<Error>(),
        _ => None,
    }
}

//! TorchArrow arithmetic functions for DataFusion.
//!
//! Registers `torcharrow_floordiv`, `torcharrow_floormod` and `torcharrow_pow`
//! as vectorized scalar functions over int32, int64, float32 and float64
//! columns. Integer division by zero, negative integer exponents and
//! out-of-range integer powers surface as typed [`Error`]s.
//!
//! # Example
//!
//! ```rust,ignore
//! use torcharrow_udf::TorchArrowSession;
//!
//! #[tokio::main]
//! async fn main() {
//!     let session = TorchArrowSession::new();
//!
//!     let result = session
//!         .execute_sql("SELECT torcharrow_floormod(13, -3)")
//!         .await
//!         .unwrap();
//!
//!     // Errors keep their class across the engine boundary.
//!     let err = session
//!         .execute_sql("SELECT torcharrow_floordiv(10, 0)")
//!         .await
//!         .unwrap_err();
//!     assert!(matches!(err, torcharrow_udf::Error::DivisionByZero(_)));
//! }
//! ```

use std::sync::atomic::{AtomicU64, Ordering};

use arrow::array::{Array, ArrayRef, new_empty_array};
use datafusion::error::DataFusionError;
use datafusion::prelude::SessionContext;
use tracing::{debug, instrument};

pub use torcharrow_arrow::RecordBatch;
pub use {arrow, datafusion};
pub use torcharrow_common::{Error, NumericType, RegistrySettings, Result};
pub use torcharrow_datafusion_functions::{
    ArithmeticUdf, TorchArrowFunctionRegistry, arithmetic_error,
};
pub use torcharrow_functions::{BinaryOp, kernels};

/// A DataFusion session with the arithmetic functions registered.
///
/// Sessions are `Send + Sync` and may be shared across tasks; every
/// [`evaluate`](Self::evaluate) call works on its own temporary table.
pub struct TorchArrowSession {
    ctx: SessionContext,
    next_table: AtomicU64,
}

impl TorchArrowSession {
    /// Creates a session with the default function names.
    pub fn new() -> Self {
        let ctx = SessionContext::new();
        TorchArrowFunctionRegistry::register_all(&ctx);
        Self::from_context(ctx)
    }

    /// Creates a session registering only what `settings` enables.
    pub fn with_settings(settings: RegistrySettings) -> Result<Self> {
        let ctx = SessionContext::new();
        TorchArrowFunctionRegistry::register_with_settings(&ctx, &settings)?;
        Ok(Self::from_context(ctx))
    }

    fn from_context(ctx: SessionContext) -> Self {
        Self {
            ctx,
            next_table: AtomicU64::new(0),
        }
    }

    pub fn context(&self) -> &SessionContext {
        &self.ctx
    }

    pub fn register_batch(&self, name: &str, batch: RecordBatch) -> Result<()> {
        self.ctx
            .register_batch(name, batch)
            .map_err(from_datafusion_error)?;
        Ok(())
    }

    /// Plans and runs `sql`, collecting every result batch.
    #[instrument(skip(self, sql), fields(sql_len = sql.len()))]
    pub async fn execute_sql(&self, sql: &str) -> Result<Vec<RecordBatch>> {
        let df = self.ctx.sql(sql).await.map_err(from_datafusion_error)?;
        let batches = df.collect().await.map_err(from_datafusion_error)?;
        debug!(batches = batches.len(), "Query complete");
        Ok(batches)
    }

    /// Evaluates `expression` once per row of `batch`.
    ///
    /// The expression refers to the batch's columns by name (`c0`, `c1`, ...)
    /// and the result holds exactly one value per input row.
    #[instrument(
        skip(self, expression, batch),
        fields(expr_len = expression.len(), rows = batch.num_rows())
    )]
    pub async fn evaluate(&self, expression: &str, batch: RecordBatch) -> Result<ArrayRef> {
        let table = self.temporary_table_name()?;
        self.register_batch(&table, batch)?;
        let result = self.evaluate_table(expression, &table).await;
        self.ctx
            .deregister_table(table.as_str())
            .map_err(from_datafusion_error)?;
        result
    }

    /// Next `__torcharrow_eval_<n>` name not already taken in the catalog.
    fn temporary_table_name(&self) -> Result<String> {
        loop {
            let name = format!(
                "__torcharrow_eval_{}",
                self.next_table.fetch_add(1, Ordering::Relaxed)
            );
            let taken = self
                .ctx
                .table_exist(name.as_str())
                .map_err(from_datafusion_error)?;
            if !taken {
                return Ok(name);
            }
        }
    }

    async fn evaluate_table(&self, expression: &str, table: &str) -> Result<ArrayRef> {
        let df = self
            .ctx
            .sql(&format!("SELECT {} FROM {}", expression, table))
            .await
            .map_err(from_datafusion_error)?;
        let fields = df.schema().fields();
        if fields.len() != 1 {
            return Err(Error::invalid_argument(format!(
                "Expression must produce exactly one column, got {}",
                fields.len()
            )));
        }
        let data_type = fields[0].data_type().clone();

        let batches = df.collect().await.map_err(from_datafusion_error)?;
        let columns: Vec<&dyn Array> = batches
            .iter()
            .map(|batch| batch.column(0).as_ref())
            .collect();
        if columns.is_empty() {
            return Ok(new_empty_array(&data_type));
        }
        arrow::compute::concat(&columns).map_err(|e| Error::internal(e.to_string()))
    }
}

impl Default for TorchArrowSession {
    fn default() -> Self {
        Self::new()
    }
}

fn from_datafusion_error(err: DataFusionError) -> Error {
    match arithmetic_error(&err) {
        Some(inner) => inner.clone(),
        None => Error::execution(err.message()),
    }
}

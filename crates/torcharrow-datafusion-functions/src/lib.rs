//! `torcharrow_floordiv`, `torcharrow_floormod` and `torcharrow_pow` as
//! DataFusion scalar functions.
//!
//! ```rust,ignore
//! use datafusion::prelude::SessionContext;
//! use torcharrow_datafusion_functions::TorchArrowFunctionRegistry;
//!
//! let ctx = SessionContext::new();
//! TorchArrowFunctionRegistry::register_all(&ctx);
//! let df = ctx.sql("SELECT torcharrow_floordiv(-34, 10)").await?;
//! ```

pub mod scalar;

use datafusion::prelude::SessionContext;
use torcharrow_common::{RegistrySettings, Result};
use tracing::info;

pub use scalar::{ArithmeticUdf, arithmetic_error, into_datafusion_error};

pub struct TorchArrowFunctionRegistry;

impl TorchArrowFunctionRegistry {
    pub fn register_all(ctx: &SessionContext) {
        let names = scalar::register_all(ctx, &RegistrySettings::default());
        info!(count = names.len(), "Registered TorchArrow functions");
    }

    /// Registers the functions enabled in `settings`, returning their names.
    pub fn register_with_settings(
        ctx: &SessionContext,
        settings: &RegistrySettings,
    ) -> Result<Vec<String>> {
        settings.validate()?;
        let names = scalar::register_all(ctx, settings);
        info!(
            count = names.len(),
            prefix = %settings.prefix,
            "Registered TorchArrow functions"
        );
        Ok(names)
    }
}

//! Common types, error handling and registry settings shared by the
//! TorchArrow arithmetic functions.

#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod error;
pub mod types;

pub use config::RegistrySettings;
pub use error::{Error, Result};
pub use types::NumericType;

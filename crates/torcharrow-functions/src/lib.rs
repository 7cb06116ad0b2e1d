//! Numeric kernels behind the `floordiv`, `floormod` and `pow` functions.
//!
//! [`arithmetic`] holds the scalar semantics for each supported element
//! type; [`kernels`] lifts them over arrow primitive arrays, propagating
//! nulls and aborting on the first arithmetic error.

pub mod arithmetic;
pub mod kernels;

pub use arithmetic::{Arithmetic, FloorDiv, FloorMod, Power};
pub use kernels::BinaryOp;

use arrow::array::PrimitiveArray;
use arrow::datatypes::ArrowPrimitiveType;
use torcharrow_common::{Error, Result};

use crate::arithmetic::Arithmetic;

/// The binary functions exposed to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    FloorDiv,
    FloorMod,
    Pow,
}

impl BinaryOp {
    pub const ALL: [BinaryOp; 3] = [BinaryOp::FloorDiv, BinaryOp::FloorMod, BinaryOp::Pow];

    pub fn name(&self) -> &'static str {
        match self {
            BinaryOp::FloorDiv => "floordiv",
            BinaryOp::FloorMod => "floormod",
            BinaryOp::Pow => "pow",
        }
    }

    pub fn apply_scalar<N: Arithmetic>(&self, left: N, right: N) -> Result<N> {
        match self {
            BinaryOp::FloorDiv => left.floor_div(right),
            BinaryOp::FloorMod => left.floor_mod(right),
            BinaryOp::Pow => left.power(right),
        }
    }

    pub fn apply<T>(
        &self,
        left: &PrimitiveArray<T>,
        right: &PrimitiveArray<T>,
    ) -> Result<PrimitiveArray<T>>
    where
        T: ArrowPrimitiveType,
        T::Native: Arithmetic,
    {
        binary(left, right, |l, r| self.apply_scalar(l, r))
    }
}

/// Applies `op` to every position where both inputs are valid.
///
/// A null on either side yields a null without calling `op`, so an invalid
/// slot never raises. The first error returned by `op` aborts the whole
/// evaluation.
pub fn binary<T, F>(
    left: &PrimitiveArray<T>,
    right: &PrimitiveArray<T>,
    op: F,
) -> Result<PrimitiveArray<T>>
where
    T: ArrowPrimitiveType,
    F: Fn(T::Native, T::Native) -> Result<T::Native>,
{
    if left.len() != right.len() {
        return Err(Error::invalid_argument(format!(
            "Cannot perform arithmetic on arrays of different length: {} and {}",
            left.len(),
            right.len()
        )));
    }

    left.iter()
        .zip(right.iter())
        .map(|pair| match pair {
            (Some(l), Some(r)) => op(l, r).map(Some),
            _ => Ok(None),
        })
        .collect()
}

pub fn floordiv<T>(
    left: &PrimitiveArray<T>,
    right: &PrimitiveArray<T>,
) -> Result<PrimitiveArray<T>>
where
    T: ArrowPrimitiveType,
    T::Native: Arithmetic,
{
    BinaryOp::FloorDiv.apply(left, right)
}

pub fn floormod<T>(
    left: &PrimitiveArray<T>,
    right: &PrimitiveArray<T>,
) -> Result<PrimitiveArray<T>>
where
    T: ArrowPrimitiveType,
    T::Native: Arithmetic,
{
    BinaryOp::FloorMod.apply(left, right)
}

pub fn pow<T>(
    left: &PrimitiveArray<T>,
    right: &PrimitiveArray<T>,
) -> Result<PrimitiveArray<T>>
where
    T: ArrowPrimitiveType,
    T::Native: Arithmetic,
{
    BinaryOp::Pow.apply(left, right)
}

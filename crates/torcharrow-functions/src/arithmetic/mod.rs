mod floordiv;
mod floormod;
mod pow;

use torcharrow_common::{NumericType, Result};

/// Division rounding toward negative infinity.
pub trait FloorDiv: Sized {
    fn floor_div(self, rhs: Self) -> Result<Self>;
}

/// Remainder whose sign follows the divisor.
pub trait FloorMod: Sized {
    fn floor_mod(self, rhs: Self) -> Result<Self>;
}

/// Exponentiation. Integers are exact and checked, floats follow `powf`.
pub trait Power: Sized {
    fn power(self, exponent: Self) -> Result<Self>;
}

pub trait Arithmetic: FloorDiv + FloorMod + Power + Copy {
    const TYPE: NumericType;
}

macro_rules! impl_arithmetic {
    ($($t:ty => $numeric:expr),* $(,)?) => {
        $(
            impl Arithmetic for $t {
                const TYPE: NumericType = $numeric;
            }
        )*
    };
}

impl_arithmetic!(
    i32 => NumericType::Int32,
    i64 => NumericType::Int64,
    f32 => NumericType::Float32,
    f64 => NumericType::Float64,
);

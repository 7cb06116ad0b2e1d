use torcharrow_common::{Error, Result};

use super::{Arithmetic, FloorDiv};

macro_rules! impl_integer_floor_div {
    ($($t:ty),*) => {
        $(
            impl FloorDiv for $t {
                fn floor_div(self, rhs: Self) -> Result<Self> {
                    if rhs == 0 {
                        return Err(Error::floordiv_by_zero());
                    }
                    // Only MIN / -1 overflows.
                    let quotient = self
                        .checked_div(rhs)
                        .ok_or_else(|| Error::out_of_range(-(self as i128), <$t>::TYPE))?;
                    if self % rhs != 0 && ((self < 0) != (rhs < 0)) {
                        Ok(quotient - 1)
                    } else {
                        Ok(quotient)
                    }
                }
            }
        )*
    };
}

macro_rules! impl_float_floor_div {
    ($($t:ty),*) => {
        $(
            impl FloorDiv for $t {
                fn floor_div(self, rhs: Self) -> Result<Self> {
                    Ok((self / rhs).floor())
                }
            }
        )*
    };
}

impl_integer_floor_div!(i32, i64);
impl_float_floor_div!(f32, f64);

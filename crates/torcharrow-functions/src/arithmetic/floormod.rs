use torcharrow_common::{Error, Result};

use super::FloorMod;

macro_rules! impl_integer_floor_mod {
    ($($t:ty),*) => {
        $(
            impl FloorMod for $t {
                fn floor_mod(self, rhs: Self) -> Result<Self> {
                    if rhs == 0 {
                        return Err(Error::floormod_by_zero());
                    }
                    // MIN % -1 is 0, wrapping_rem avoids the overflow trap.
                    let rem = self.wrapping_rem(rhs);
                    if rem != 0 && ((rem < 0) != (rhs < 0)) {
                        Ok(rem + rhs)
                    } else {
                        Ok(rem)
                    }
                }
            }
        )*
    };
}

macro_rules! impl_float_floor_mod {
    ($($t:ty),*) => {
        $(
            impl FloorMod for $t {
                fn floor_mod(self, rhs: Self) -> Result<Self> {
                    let rem = self % rhs;
                    if rem == 0.0 {
                        return Ok(<$t>::copysign(0.0, rhs));
                    }
                    if (rem < 0.0) != (rhs < 0.0) {
                        Ok(rem + rhs)
                    } else {
                        Ok(rem)
                    }
                }
            }
        )*
    };
}

impl_integer_floor_mod!(i32, i64);
impl_float_floor_mod!(f32, f64);

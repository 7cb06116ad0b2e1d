use torcharrow_common::{Error, Result};

use super::{Arithmetic, Power};

/// Renders the real-valued power for range errors, spelling infinities the
/// way the error contract expects (`Inf`, `-Inf`).
fn approximate_power(base: f64, exponent: f64) -> String {
    let value = base.powf(exponent);
    if value == f64::INFINITY {
        "Inf".to_string()
    } else if value == f64::NEG_INFINITY {
        "-Inf".to_string()
    } else {
        value.to_string()
    }
}

macro_rules! impl_integer_power {
    ($($t:ty),*) => {
        $(
            impl Power for $t {
                fn power(self, exponent: Self) -> Result<Self> {
                    if exponent < 0 {
                        return Err(Error::negative_integer_power());
                    }
                    let result = match u32::try_from(exponent) {
                        Ok(exp) => self.checked_pow(exp),
                        Err(_) => match self {
                            0 | 1 => Some(self),
                            -1 if exponent % 2 == 0 => Some(1),
                            -1 => Some(-1),
                            _ => None,
                        },
                    };
                    result.ok_or_else(|| {
                        Error::out_of_range(
                            approximate_power(self as f64, exponent as f64),
                            <$t>::TYPE,
                        )
                    })
                }
            }
        )*
    };
}

macro_rules! impl_float_power {
    ($($t:ty),*) => {
        $(
            impl Power for $t {
                fn power(self, exponent: Self) -> Result<Self> {
                    Ok(self.powf(exponent))
                }
            }
        )*
    };
}

impl_integer_power!(i32, i64);
impl_float_power!(f32, f64);

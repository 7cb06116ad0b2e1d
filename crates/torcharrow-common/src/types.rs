use std::fmt;

/// Element types the arithmetic functions are defined for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericType {
    Int32,
    Int64,
    Float32,
    Float64,
}

impl NumericType {
    pub const ALL: [NumericType; 4] = [
        NumericType::Int32,
        NumericType::Int64,
        NumericType::Float32,
        NumericType::Float64,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            NumericType::Int32 => "int32",
            NumericType::Int64 => "int64",
            NumericType::Float32 => "float32",
            NumericType::Float64 => "float64",
        }
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, NumericType::Int32 | NumericType::Int64)
    }

    pub fn is_floating(&self) -> bool {
        !self.is_integer()
    }
}

impl fmt::Display for NumericType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

//! Floating-point formats a test file can target.
//!
//! Each variant carries its field widths as constants, so looking up the
//! parameters of a format is a plain `match` rather than a table lookup.

use core::fmt;
use core::str::FromStr;

use thiserror::Error;

/// A floating-point representation supported by the converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FloatFormat {
    /// IEEE 754 binary16.
    F16,
    /// IEEE 754 binary32.
    F32,
    /// IEEE 754 binary64.
    F64,
    /// IEEE 754 binary128.
    F128,
    /// The platform's C `long double` (x87 80-bit extended).
    CLongDouble,
}

impl FloatFormat {
    /// Every supported format, narrowest first.
    pub const ALL: [FloatFormat; 5] = [
        FloatFormat::F16,
        FloatFormat::F32,
        FloatFormat::F64,
        FloatFormat::CLongDouble,
        FloatFormat::F128,
    ];

    /// Total storage width in bits.
    pub const fn bits(self) -> u16 {
        match self {
            FloatFormat::F16 => 16,
            FloatFormat::F32 => 32,
            FloatFormat::F64 => 64,
            FloatFormat::F128 => 128,
            FloatFormat::CLongDouble => 80,
        }
    }

    /// Width of the biased exponent field.
    pub const fn exponent_bits(self) -> u16 {
        match self {
            FloatFormat::F16 => 5,
            FloatFormat::F32 => 8,
            FloatFormat::F64 => 11,
            FloatFormat::F128 => 15,
            FloatFormat::CLongDouble => 16,
        }
    }

    /// Width of the stored mantissa (fraction) field.
    pub const fn mantissa_bits(self) -> u16 {
        match self {
            FloatFormat::F16 => 10,
            FloatFormat::F32 => 23,
            FloatFormat::F64 => 52,
            FloatFormat::F128 => 112,
            FloatFormat::CLongDouble => 63,
        }
    }

    /// Number of hex digits after the point in a canonical literal.
    pub const fn hex_digits(self) -> usize {
        self.mantissa_bits().div_ceil(4) as usize
    }

    /// Name of the matching Zig type.
    pub const fn zig_name(self) -> &'static str {
        match self {
            FloatFormat::F16 => "f16",
            FloatFormat::F32 => "f32",
            FloatFormat::F64 => "f64",
            FloatFormat::F128 => "f128",
            FloatFormat::CLongDouble => "c_longdouble",
        }
    }

    /// Looks a format up by its total width.
    pub fn from_bits(bits: u16) -> Option<Self> {
        Self::ALL.into_iter().find(|format| format.bits() == bits)
    }
}

impl fmt::Display for FloatFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.zig_name())
    }
}

/// Returned when a format name is not one of the supported types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown float type '{0}' (expected one of f16, f32, f64, f128, c_longdouble)")]
pub struct UnknownFloatFormat(pub String);

impl FromStr for FloatFormat {
    type Err = UnknownFloatFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.zig_name() == s)
            .ok_or_else(|| UnknownFloatFormat(s.to_string()))
    }
}

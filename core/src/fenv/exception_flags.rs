//! Floating-point exception flags a test case expects to be raised.
//!
//! | Bit | Flag      | Zig constant |
//! |-----|-----------|--------------|
//! |  0  | INVALID   | 0x01         |
//! |  1  | INEXACT   | 0x02         |
//! |  2  | DIVBYZERO | 0x04         |
//! |  3  | OVERFLOW  | 0x08         |
//! |  4  | UNDERFLOW | 0x10         |
//!
//! Serialization always lists members in the table order above, whatever
//! order they were written in.

use core::fmt;
use core::ops::BitOr;
use core::str::FromStr;

/// A combinable set of exception flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ExceptionFlags(u8);

impl ExceptionFlags {
    /// No exceptions raised.
    pub const NONE: Self = Self(0);
    /// Invalid operation.
    pub const INVALID: Self = Self(1 << 0);
    /// Inexact result.
    pub const INEXACT: Self = Self(1 << 1);
    /// Division by zero.
    pub const DIVBYZERO: Self = Self(1 << 2);
    /// Overflow.
    pub const OVERFLOW: Self = Self(1 << 3);
    /// Underflow.
    pub const UNDERFLOW: Self = Self(1 << 4);

    /// Named members in declaration order.
    pub const MEMBERS: [(&'static str, Self); 5] = [
        ("INVALID", Self::INVALID),
        ("INEXACT", Self::INEXACT),
        ("DIVBYZERO", Self::DIVBYZERO),
        ("OVERFLOW", Self::OVERFLOW),
        ("UNDERFLOW", Self::UNDERFLOW),
    ];

    /// Raw bit value, as emitted in the generated constants.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Returns true if no flags are set.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns true if every flag in `other` is set.
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Looks up a single flag by name. `NONE` is accepted and is empty.
    fn from_name(name: &str) -> Option<Self> {
        if name == "NONE" {
            return Some(Self::NONE);
        }
        Self::MEMBERS
            .into_iter()
            .find_map(|(member, flag)| (member == name).then_some(flag))
    }
}

impl BitOr for ExceptionFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl fmt::Display for ExceptionFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("NONE");
        }
        let mut first = true;
        for (name, flag) in Self::MEMBERS {
            if self.contains(flag) {
                if !first {
                    f.write_str("|")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        Ok(())
    }
}

/// Returned by [`ExceptionFlags::from_str`] with the first unknown name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFlag(pub String);

impl FromStr for ExceptionFlags {
    type Err = UnknownFlag;

    /// Parses `0` or a `|`-separated list of flag names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim() == "0" {
            return Ok(Self::NONE);
        }
        s.split('|')
            .map(str::trim)
            .try_fold(Self::NONE, |acc, name| {
                Self::from_name(name)
                    .map(|flag| acc | flag)
                    .ok_or_else(|| UnknownFlag(name.to_string()))
            })
    }
}

//! Rounding modes a test case can be computed under.
//!
//! | Token | Mode                       | Zig constant |
//! |-------|----------------------------|--------------|
//! | RN    | Round to nearest (even)    | 0x0          |
//! | RD    | Round down (towards -inf)  | 0x1          |
//! | RU    | Round up (towards +inf)    | 0x2          |
//! | RZ    | Round towards zero         | 0x3          |

use core::fmt;
use core::ops::BitOr;
use core::str::FromStr;

/// A single, concrete rounding mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum RoundingMode {
    /// Round to nearest, ties to even.
    Rn = 0x0,
    /// Round down (towards negative infinity).
    Rd = 0x1,
    /// Round up (towards positive infinity).
    Ru = 0x2,
    /// Round towards zero.
    Rz = 0x3,
}

impl RoundingMode {
    /// All modes, in the order their constants are emitted.
    pub const ALL: [RoundingMode; 4] = [
        RoundingMode::Rn,
        RoundingMode::Rd,
        RoundingMode::Ru,
        RoundingMode::Rz,
    ];

    /// The token used for this mode in test files.
    pub const fn name(self) -> &'static str {
        match self {
            RoundingMode::Rn => "RN",
            RoundingMode::Rd => "RD",
            RoundingMode::Ru => "RU",
            RoundingMode::Rz => "RZ",
        }
    }

    /// Value of the generated integer constant.
    pub const fn value(self) -> u8 {
        self as u8
    }

    const fn mask(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RoundingMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|mode| mode.name() == s).ok_or(())
    }
}

/// A set of rounding modes, used to select which test cases to keep.
///
/// Records never carry a set, only a single [`RoundingMode`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundingModeSet(u8);

impl RoundingModeSet {
    /// No modes.
    pub const EMPTY: Self = Self(0);
    /// Every mode.
    pub const ALL: Self = Self(0b1111);

    /// A set holding just `mode`.
    pub const fn only(mode: RoundingMode) -> Self {
        Self(mode.mask())
    }

    /// Returns true if `mode` is in the set.
    pub const fn contains(self, mode: RoundingMode) -> bool {
        self.0 & mode.mask() != 0
    }
}

impl Default for RoundingModeSet {
    fn default() -> Self {
        Self::only(RoundingMode::Rn)
    }
}

impl From<RoundingMode> for RoundingModeSet {
    fn from(mode: RoundingMode) -> Self {
        Self::only(mode)
    }
}

impl BitOr<RoundingMode> for RoundingModeSet {
    type Output = Self;

    fn bitor(self, rhs: RoundingMode) -> Self {
        Self(self.0 | rhs.mask())
    }
}

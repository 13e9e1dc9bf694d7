//! Floating-point environment model: rounding modes and exception flags.
//!
//! - [`rounding_modes`]: the exclusive mode choice and the filter set.
//! - [`exception_flags`]: the combinable flag set and its canonical spelling.

/// Rounding mode definitions.
pub mod rounding_modes;

/// Exception flag set.
pub mod exception_flags;

pub use exception_flags::{ExceptionFlags, UnknownFlag};
pub use rounding_modes::{RoundingMode, RoundingModeSet};

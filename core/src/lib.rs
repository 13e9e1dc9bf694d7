//! Conversion of libc-test math test cases into Zig test tables.
//!
//! The pipeline, leaf first:
//!
//! - [`format`]: the floating-point formats and their field widths.
//! - [`fenv`]: rounding modes and exception flags.
//! - [`literal`]: canonical spelling of hex-float literals.
//! - [`infer`]: guessing a file's format from its literals.
//! - [`parser`]: classifying lines against the test-case grammar.
//! - [`render`]: aligned table rows.
//! - [`emit`]: structure-preserving re-emission of the whole file.
//! - [`api`]: the [`Converter`](api::Converter) tying it together.

pub mod api;
pub mod emit;
pub mod fenv;
pub mod format;
pub mod infer;
pub mod literal;
pub mod parser;
pub mod render;

pub use api::{Conversion, ConvertError, ConvertOptions, Converter};
pub use fenv::{ExceptionFlags, RoundingMode, RoundingModeSet};
pub use format::FloatFormat;

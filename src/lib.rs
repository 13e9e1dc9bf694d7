//! fptab - convert libc-test math test cases into Zig test tables
//!
//! # Overview
//!
//! The libc-test suite describes the expected behavior of math functions as
//! one `T(...)` line per case:
//!
//! ```text
//! T(RN, 0x1.2p+3, 0x1.23p+4, 0x1p-10, INEXACT|OVERFLOW)
//! ```
//!
//! fptab rewrites such a file into a Zig source listing with a single
//! `testcases` aggregate. Literals are canonicalized for the float format the
//! file targets, rows are column-aligned, and every comment or unrecognized
//! line stays where it was.
//!
//! # Quick Start
//!
//! ```
//! use fptab::{ConvertOptions, Converter};
//!
//! let source = "T(RN, 0x1.2p+3, 0x1.23p+4, 0x1p-10, INEXACT|OVERFLOW)\n";
//! let conversion = Converter::new(ConvertOptions::default()).convert(source).unwrap();
//!
//! assert!(conversion.output.starts_with("// This file has been automatically generated"));
//! assert!(conversion.output.ends_with("};\n"));
//! ```
//!
//! # Errors
//!
//! A line that matches the test-case grammar but names an unknown rounding
//! mode or flag, or carries a malformed literal, aborts the conversion with a
//! [`ConvertError`]. Use [`render_error`] to print it with the offending
//! token highlighted.

pub mod error_renderer;

// Re-export public API from fptab_core
pub use fptab_core::api::{Conversion, ConvertError, ConvertOptions, Converter};

// Re-export the domain types
pub use fptab_core::fenv::{ExceptionFlags, RoundingMode, RoundingModeSet};
pub use fptab_core::format::{FloatFormat, UnknownFloatFormat};
pub use fptab_core::parser::{ParseError, ParseErrorKind, Testcase};

pub use error_renderer::{
    render_error, render_error_to, render_error_to_string, render_error_to_string_no_color,
};

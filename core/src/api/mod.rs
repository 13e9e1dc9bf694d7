//! Public API for converting test files.
//!
//! # Example
//!
//! ```
//! use fptab_core::api::{ConvertOptions, Converter};
//! use fptab_core::{FloatFormat, RoundingModeSet};
//!
//! let options = ConvertOptions {
//!     float_format: Some(FloatFormat::F64),
//!     rounding_modes: RoundingModeSet::ALL,
//!     generator: "example".to_string(),
//! };
//!
//! let conversion = Converter::new(options)
//!     .convert("T(RU, -0x1p+0, nan, -0x0p+0, 0)")
//!     .unwrap();
//! assert_eq!(conversion.testcases.len(), 1);
//! ```

pub mod converter;
pub mod error;
pub mod options;

pub use converter::{Conversion, Converter};
pub use error::ConvertError;
pub use options::ConvertOptions;

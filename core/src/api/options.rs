//! Configuration options for a conversion run.

use crate::fenv::RoundingModeSet;
use crate::format::FloatFormat;

/// Configuration options for [`Converter`](crate::api::Converter).
///
/// # Example
///
/// ```
/// use fptab_core::api::ConvertOptions;
/// use fptab_core::{FloatFormat, RoundingModeSet};
///
/// let options = ConvertOptions {
///     float_format: Some(FloatFormat::F64),
///     rounding_modes: RoundingModeSet::ALL,
///     ..ConvertOptions::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Format of the file's literals.
    ///
    /// Default: None (inferred from the literals themselves)
    pub float_format: Option<FloatFormat>,

    /// Rounding modes whose test cases are kept. Others are dropped.
    ///
    /// Default: round-to-nearest only
    pub rounding_modes: RoundingModeSet,

    /// Tool name quoted in the generated header.
    ///
    /// Default: "fptab"
    pub generator: String,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            float_format: None,
            rounding_modes: RoundingModeSet::default(),
            generator: "fptab".to_string(),
        }
    }
}

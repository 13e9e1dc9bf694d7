//! Public error type for conversions.

use thiserror::Error;

use crate::parser::ParseError;

/// A fatal error that aborted a conversion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {error}")]
pub struct ConvertError {
    /// 1-based number of the offending line.
    pub line: usize,
    #[source]
    pub error: ParseError,
}

impl ConvertError {
    /// The trimmed text of the offending line.
    pub fn text(&self) -> &str {
        &self.error.text
    }
}

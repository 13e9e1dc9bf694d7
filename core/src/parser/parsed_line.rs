use crate::fenv::{ExceptionFlags, RoundingMode};

/// One test case, with its literals already canonicalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Testcase {
    pub rounding_mode: RoundingMode,
    pub input: String,
    pub output: String,
    /// Error bound, always canonicalized as `f32`.
    pub err: String,
    pub exc_flags: ExceptionFlags,
    pub comment: Option<String>,
}

/// How a single source line was classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedLine {
    /// Empty or whitespace-only.
    Blank,
    /// A `//` comment line.
    Comment,
    /// A test case selected by the rounding-mode filter.
    Testcase(Testcase),
    /// A well-formed test case whose mode was filtered out.
    Filtered(RoundingMode),
    /// Anything the grammar does not recognize.
    Unrecognized,
}

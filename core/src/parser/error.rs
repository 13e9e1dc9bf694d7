use thiserror::Error;

use crate::parser::Span;

/// A fatal problem with a line that matched the test-case grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    /// The trimmed line the error was found in.
    pub text: String,
    /// Location of the offending token within `text`.
    pub span: Span,
}

/// Specific kinds of parse errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// A literal that is not one of the accepted hex-float shapes.
    #[error("malformed literal '{literal}'")]
    MalformedLiteral { literal: String },
    /// A rounding mode token that names no concrete mode.
    #[error("unknown rounding mode '{token}'")]
    UnknownRoundingMode { token: String },
    /// An exception flag name outside the flag domain.
    #[error("unknown exception flag '{token}'")]
    UnknownExceptionFlag { token: String },
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, text: &str, span: Span) -> Self {
        Self {
            kind,
            text: text.to_string(),
            span,
        }
    }

    /// Stable error code, for documentation lookup.
    pub fn code(&self) -> &'static str {
        match self.kind {
            ParseErrorKind::MalformedLiteral { .. } => "C001",
            ParseErrorKind::UnknownRoundingMode { .. } => "C002",
            ParseErrorKind::UnknownExceptionFlag { .. } => "C003",
        }
    }

    /// Suggestion shown under the rendered diagnostic.
    pub fn help(&self) -> &'static str {
        match self.kind {
            ParseErrorKind::MalformedLiteral { .. } => {
                "Literals must be inf, -inf, nan, -0x0p+0, 0x<digit>p+0, 0x1p<exp> or 0x1.<hex>p<exp>"
            }
            ParseErrorKind::UnknownRoundingMode { .. } => "Use one of RN, RU, RD, RZ",
            ParseErrorKind::UnknownExceptionFlag { .. } => {
                "Use 0 or a |-separated list of INVALID, INEXACT, DIVBYZERO, OVERFLOW, UNDERFLOW"
            }
        }
    }

    /// The offending token.
    pub fn snippet(&self) -> &str {
        self.span.str_of(&self.text)
    }
}

//! Error rendering using ariadne
//!
//! Conversion errors carry the offending line and the byte span of the bad
//! token, which is enough to draw a snippet with the token underlined.

use crate::ConvertError;
use ariadne::{Color, Config, IndexType, Label, Report, ReportKind, Source};
use std::io::Write;

/// Render an error to stderr
///
/// `name` identifies the input in the report header, usually its path.
///
/// # Example
/// ```no_run
/// use fptab::{Converter, render_error};
///
/// let source = "T(XX, 0x1p+0, 0x1p+0, 0x1p+0, 0)";
/// if let Err(e) = Converter::default().convert(source) {
///     render_error(&e, "exp.h");
/// }
/// ```
pub fn render_error(error: &ConvertError, name: &str) {
    render_error_to_writer(error, name, &mut std::io::stderr(), true).ok();
}

/// Render an error to a specific writer
pub fn render_error_to(
    error: &ConvertError,
    name: &str,
    writer: &mut dyn Write,
) -> std::io::Result<()> {
    render_error_to_writer(error, name, writer, true)
}

/// Render an error to a String
pub fn render_error_to_string(error: &ConvertError, name: &str) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(error, name, &mut buf, true).ok();
    String::from_utf8_lossy(&buf).to_string()
}

/// Render an error to a String without color codes (useful for tests)
pub fn render_error_to_string_no_color(error: &ConvertError, name: &str) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(error, name, &mut buf, false).ok();
    String::from_utf8_lossy(&buf).to_string()
}

fn render_error_to_writer(
    error: &ConvertError,
    name: &str,
    writer: &mut dyn Write,
    use_color: bool,
) -> std::io::Result<()> {
    let parse_error = &error.error;
    let message = parse_error.kind.to_string();
    let span = parse_error.span.0.clone();

    let report = Report::build(ReportKind::Error, (name, span.clone()))
        .with_code(parse_error.code())
        .with_message(&message)
        .with_config(
            Config::default()
                .with_color(use_color)
                .with_index_type(IndexType::Byte),
        )
        .with_label(
            Label::new((name, span))
                .with_message(&message)
                .with_color(Color::Red),
        )
        .with_help(parse_error.help());

    // Only the offending line is kept, so shift the gutter to its real number.
    let source = Source::from(error.text()).with_display_line_offset(error.line - 1);
    report.finish().write((name, source), &mut *writer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Converter;

    fn error_for(source: &str) -> ConvertError {
        Converter::default()
            .convert(source)
            .expect_err("conversion should fail")
    }

    #[test]
    fn test_render_unknown_mode() {
        let error = error_for("// header\nT(XX, 0x1p+0, 0x1p+0, 0x1p+0, 0)\n");
        let output = render_error_to_string_no_color(&error, "test.h");

        assert!(output.contains("[C002] Error: unknown rounding mode 'XX'"));
        assert!(output.contains("T(XX, 0x1p+0, 0x1p+0, 0x1p+0, 0)"));
        assert!(output.contains("test.h"));
        assert!(output.contains("Use one of RN, RU, RD, RZ"));
    }

    #[test]
    fn test_render_malformed_literal() {
        let error = error_for("T(RN, 0x1p+0, 0x3.8p+0, 0x1p+0, 0)");
        let output = render_error_to_string_no_color(&error, "test.h");

        assert!(output.contains("[C001]"));
        assert!(output.contains("malformed literal '0x3.8p+0'"));
    }

    #[test]
    fn test_render_to_string_captures_output() {
        let error = error_for("T(RN, 0x1p+0, 0x1p+0, 0x1p+0, INEXACT|NOPE)");
        let output = render_error_to_string_no_color(&error, "test.h");

        assert!(!output.is_empty());
        assert!(output.lines().count() > 1);
        assert!(output.contains("unknown exception flag 'NOPE'"));
    }

    #[test]
    fn test_render_to_writer_matches_string() {
        let error = error_for("T(RN, 0x1p+0, 0x1p+0, 0x1p+0, BAD)");
        let mut buf = Vec::new();
        render_error_to(&error, "test.h", &mut buf).unwrap();

        assert_eq!(
            String::from_utf8_lossy(&buf),
            render_error_to_string(&error, "test.h")
        );
    }
}

use pest::Parser;
use pest::iterators::Pair;
use pest_derive::Parser;

use crate::fenv::{ExceptionFlags, RoundingMode, RoundingModeSet, UnknownFlag};
use crate::format::FloatFormat;
use crate::literal::canonicalize;
use crate::parser::{ParseError, ParseErrorKind, ParsedLine, Testcase};

#[derive(Parser)]
#[grammar = "parser/testcase.pest"]
pub struct TestcaseParser;

/// Classifies one line of a test file.
///
/// Literals are canonicalized against `format`, except the error bound which
/// is always canonicalized as `f32`. Cases whose rounding mode is not in
/// `modes` come back as [`ParsedLine::Filtered`] once they have been fully
/// validated.
///
/// Lines that do not match the grammar are not errors; they are returned as
/// [`ParsedLine::Unrecognized`] and the caller decides how to report them.
pub fn parse_line(
    line: &str,
    format: FloatFormat,
    modes: RoundingModeSet,
) -> Result<ParsedLine, ParseError> {
    let text = line.trim();
    if text.is_empty() {
        return Ok(ParsedLine::Blank);
    }
    if text.starts_with("//") {
        return Ok(ParsedLine::Comment);
    }

    let statement = match TestcaseParser::parse(Rule::testcase, text) {
        Ok(mut pairs) => match pairs.next() {
            Some(pair) => pair,
            None => return Ok(ParsedLine::Unrecognized),
        },
        Err(err) => {
            tracing::trace!("no test-case match: {}", err);
            return Ok(ParsedLine::Unrecognized);
        }
    };

    let mut mode = None;
    let mut input = None;
    let mut output = None;
    let mut err = None;
    let mut exc_flags = None;
    let mut comment = None;

    for field in statement.into_inner() {
        match field.as_rule() {
            Rule::mode => mode = Some(parse_mode(&field, text)?),
            Rule::input => input = Some(parse_literal(&field, format, text)?),
            Rule::output => output = Some(parse_literal(&field, format, text)?),
            Rule::error_bound => err = Some(parse_literal(&field, FloatFormat::F32, text)?),
            Rule::flags => exc_flags = Some(parse_flags(field, text)?),
            Rule::comment => comment = Some(field.as_str().trim_end().to_string()),
            _ => {}
        }
    }

    let (Some(rounding_mode), Some(input), Some(output), Some(err), Some(exc_flags)) =
        (mode, input, output, err, exc_flags)
    else {
        return Ok(ParsedLine::Unrecognized);
    };

    if !modes.contains(rounding_mode) {
        tracing::debug!("Skipping testcase with rounding mode {}", rounding_mode);
        return Ok(ParsedLine::Filtered(rounding_mode));
    }

    Ok(ParsedLine::Testcase(Testcase {
        rounding_mode,
        input,
        output,
        err,
        exc_flags,
        comment: comment.filter(|c| !c.is_empty()),
    }))
}

fn parse_mode(pair: &Pair<Rule>, text: &str) -> Result<RoundingMode, ParseError> {
    pair.as_str().parse::<RoundingMode>().map_err(|()| {
        ParseError::new(
            ParseErrorKind::UnknownRoundingMode {
                token: pair.as_str().to_string(),
            },
            text,
            pair.as_span().into(),
        )
    })
}

fn parse_literal(pair: &Pair<Rule>, format: FloatFormat, text: &str) -> Result<String, ParseError> {
    canonicalize(pair.as_str(), format).map_err(|_| {
        ParseError::new(
            ParseErrorKind::MalformedLiteral {
                literal: pair.as_str().to_string(),
            },
            text,
            pair.as_span().into(),
        )
    })
}

fn parse_flags(pair: Pair<Rule>, text: &str) -> Result<ExceptionFlags, ParseError> {
    pair.as_str().parse().map_err(|UnknownFlag(token)| {
        // Point at the offending name rather than the whole list.
        let span = pair
            .clone()
            .into_inner()
            .find(|flag| flag.as_str() == token)
            .map_or_else(|| pair.as_span(), |flag| flag.as_span());
        ParseError::new(
            ParseErrorKind::UnknownExceptionFlag { token },
            text,
            span.into(),
        )
    })
}

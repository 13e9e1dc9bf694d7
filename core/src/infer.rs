//! Guessing the float format of a test file from its literals.
//!
//! Test files carry no format declaration, so the widest evidence found in
//! any test-case line wins. Every hex literal counts, with or without a
//! fraction (`0x1.8p+0`, `0x1p-1022`, `0x3p+0L`, `-0x0p+0Q`):
//!
//! 1. a `Q`-suffixed literal means `f128`,
//! 2. an `L`-suffixed literal means `f64`,
//! 3. a fraction longer than 6 hex digits or an exponent beyond ±127 means
//!    `f64`,
//! 4. otherwise `f32`.

use logos::Logos;

use crate::format::FloatFormat;

/// Largest fraction (in hex digits) an `f32` literal can carry.
const F32_FRACTION_DIGITS: usize = 6;
/// Largest exponent magnitude of a normal `f32`.
const F32_MAX_EXPONENT: u32 = 127;

#[derive(Logos, Debug, PartialEq)]
#[logos(skip r"[ \t\r\n\f]+")]
enum Token {
    #[regex(r"-?0x[0-9](\.[0-9a-f]+)?p[+-]?[0-9]+[LQ]?")]
    HexFloat,
}

/// The parts of a literal that matter for inference.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Shape<'a> {
    fraction: &'a str,
    exponent: u32,
    suffix: Option<char>,
}

impl<'a> Shape<'a> {
    fn of(literal: &'a str) -> Option<Self> {
        let body = literal.trim_start_matches('-').strip_prefix("0x")?;
        let (mantissa, rest) = body.split_once('p')?;
        let fraction = mantissa.split_once('.').map_or("", |(_, fraction)| fraction);
        let (digits, suffix) = match rest.strip_suffix(['L', 'Q']) {
            Some(digits) => (digits, rest.chars().last()),
            None => (rest, None),
        };
        // Anything too large for u32 is certainly out of f32 range.
        let exponent = digits
            .trim_start_matches(['+', '-'])
            .parse()
            .unwrap_or(u32::MAX);
        Some(Self {
            fraction,
            exponent,
            suffix,
        })
    }

    fn exceeds_f32(&self) -> bool {
        self.fraction.len() > F32_FRACTION_DIGITS || self.exponent > F32_MAX_EXPONENT
    }
}

/// Collects the hex-float literals following the first `T(` on a line.
fn shapes_in(line: &str) -> Vec<Shape<'_>> {
    let Some(start) = line.find("T(") else {
        return Vec::new();
    };
    let mut lexer = Token::lexer(&line[start + 2..]);
    let mut shapes = Vec::new();
    while let Some(token) = lexer.next() {
        if token == Ok(Token::HexFloat) {
            shapes.extend(Shape::of(lexer.slice()));
        }
    }
    shapes
}

/// Infers the float format of a whole test file.
pub fn infer_format<I, S>(lines: I) -> FloatFormat
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let lines: Vec<S> = lines.into_iter().collect();
    let shapes: Vec<Shape<'_>> = lines
        .iter()
        .flat_map(|line| shapes_in(line.as_ref()))
        .collect();

    if shapes.iter().any(|s| s.suffix == Some('Q')) {
        FloatFormat::F128
    } else if shapes.iter().any(|s| s.suffix == Some('L')) {
        FloatFormat::F64
    } else if shapes.iter().any(Shape::exceeds_f32) {
        FloatFormat::F64
    } else {
        FloatFormat::F32
    }
}

use tracing::{debug, warn};

use crate::api::{ConvertError, ConvertOptions};
use crate::emit::{Header, Slot, emit};
use crate::format::FloatFormat;
use crate::infer::infer_format;
use crate::parser::{ParsedLine, Testcase, parse_line};
use crate::render::render;

/// Converts libc-test math test files into Zig test tables.
///
/// # Example
///
/// ```
/// use fptab_core::api::{ConvertOptions, Converter};
///
/// let converter = Converter::new(ConvertOptions::default());
/// let conversion = converter
///     .convert("T(RN, 0x1.2p+3, 0x1.23p+4, 0x1p-10, INEXACT|OVERFLOW)\n")
///     .unwrap();
///
/// assert!(conversion.output.contains(
///     ".{ RN,  0x1.200000p+3,  0x1.230000p+4,  0x1p-10, INEXACT|OVERFLOW },"
/// ));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Converter {
    options: ConvertOptions,
}

/// The result of converting one file.
#[derive(Debug, Clone)]
pub struct Conversion {
    /// The format literals were canonicalized against.
    pub format: FloatFormat,
    /// Test cases kept, in file order.
    pub testcases: Vec<Testcase>,
    /// 1-based numbers of lines that matched no known shape.
    pub unrecognized: Vec<usize>,
    /// Number of test cases dropped by the rounding-mode filter.
    pub filtered: usize,
    /// The generated Zig source.
    pub output: String,
}

impl Converter {
    pub fn new(options: ConvertOptions) -> Self {
        Self { options }
    }

    /// Converts a whole file, given as its text.
    pub fn convert(&self, source: &str) -> Result<Conversion, ConvertError> {
        let lines: Vec<&str> = source.lines().collect();

        let format = match self.options.float_format {
            Some(format) => format,
            None => {
                let format = infer_format(&lines);
                debug!("Inferred float type {}", format);
                format
            }
        };

        let mut testcases = Vec::new();
        let mut unrecognized = Vec::new();
        let mut filtered = 0;
        let mut slots = Vec::with_capacity(lines.len());

        for (index, line) in lines.iter().enumerate() {
            let parsed = parse_line(line, format, self.options.rounding_modes).map_err(|error| {
                ConvertError {
                    line: index + 1,
                    error,
                }
            })?;

            let slot = match parsed {
                ParsedLine::Testcase(testcase) => {
                    testcases.push(testcase);
                    Slot::Row(testcases.len() - 1)
                }
                ParsedLine::Filtered(_) => {
                    filtered += 1;
                    Slot::Drop
                }
                ParsedLine::Unrecognized => {
                    warn!("Unrecognised line {}: {}", index + 1, line.trim());
                    unrecognized.push(index + 1);
                    Slot::Pass
                }
                ParsedLine::Blank | ParsedLine::Comment => Slot::Pass,
            };
            slots.push(slot);
        }

        debug!(
            "{} test cases kept, {} filtered, {} unrecognised lines",
            testcases.len(),
            filtered,
            unrecognized.len()
        );

        let rows = render(&testcases);
        let header = Header {
            generator: &self.options.generator,
            format,
        };
        let output = emit(&header, &lines, &slots, &rows);

        Ok(Conversion {
            format,
            testcases,
            unrecognized,
            filtered,
            output,
        })
    }
}

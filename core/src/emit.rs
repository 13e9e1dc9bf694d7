//! Re-emission of a test file as a Zig source listing.
//!
//! The output keeps the input's line order. Each input line is either
//! replaced by a rendered row, dropped (filtered test cases), or passed
//! through. Lines before the first row are copied as-is ahead of the
//! `testcases` aggregate; lines after it are re-indented into the aggregate.

use indoc::formatdoc;

use crate::fenv::{ExceptionFlags, RoundingMode};
use crate::format::FloatFormat;

const INDENT: &str = "    ";

/// What to do with one input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// Replace with the rendered row at this index.
    Row(usize),
    /// Emit nothing.
    Drop,
    /// Emit the original text.
    Pass,
}

/// The generated boilerplate placed before any file content.
#[derive(Debug, Clone)]
pub struct Header<'a> {
    /// Name of the generating tool, quoted in the attribution comment.
    pub generator: &'a str,
    pub format: FloatFormat,
}

impl Header<'_> {
    pub fn render(&self) -> String {
        let zig = self.format.zig_name();
        let mut header = formatdoc! {"
            // This file has been automatically generated from the libc-test suite by
            // the {generator} script. Comments in the original file (including
            // copyright) have all been kept intact.

            const math = @import(\"../../math.zig\");
            const inf = math.inf({zig});
            const nan = math.nan({zig});

            // zig fmt: off

            ",
            generator = self.generator,
            zig = zig,
        };

        for mode in RoundingMode::ALL {
            header.push_str(&format!("const {} = {:#x};\n", mode, mode.value()));
        }
        header.push('\n');

        let flags = [("NONE", ExceptionFlags::NONE)]
            .into_iter()
            .chain(ExceptionFlags::MEMBERS);
        let width = flags.clone().map(|(name, _)| name.len()).max().unwrap_or(0);
        for (name, flag) in flags {
            header.push_str(&format!("const {name:<width$} = {:#04x};\n", flag.bits()));
        }
        header.push('\n');
        header
    }
}

/// Writes the full listing for `lines`, one [`Slot`] per line.
///
/// `rows` holds the rendered test-case rows that [`Slot::Row`] indices
/// point into.
pub fn emit<S: AsRef<str>>(header: &Header<'_>, lines: &[S], slots: &[Slot], rows: &[String]) -> String {
    let mut out = header.render();

    let first_row = slots
        .iter()
        .position(|slot| matches!(slot, Slot::Row(_)))
        .unwrap_or(slots.len());

    let mut preamble = 0;
    for (line, slot) in lines.iter().zip(slots).take(first_row) {
        if *slot != Slot::Drop {
            out.push_str(line.as_ref());
            out.push('\n');
            preamble += 1;
        }
    }
    if preamble > 0 {
        out.push('\n');
    }

    out.push_str("const testcases = .{\n");
    for (line, slot) in lines.iter().zip(slots).skip(first_row) {
        match slot {
            Slot::Row(index) => {
                if let Some(row) = rows.get(*index) {
                    out.push_str(INDENT);
                    out.push_str(row);
                    out.push('\n');
                }
            }
            Slot::Drop => {}
            Slot::Pass => {
                let text = line.as_ref().trim();
                if !text.is_empty() {
                    out.push_str(INDENT);
                    out.push_str(text);
                }
                out.push('\n');
            }
        }
    }
    out.push_str("};\n");
    out
}

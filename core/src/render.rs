//! Column-aligned rendering of test cases as Zig tuple rows.
//!
//! A row looks like
//!
//! ```text
//! .{ RN,  0x1.200000p+3,  0x1.230000p+4,  0x1p-10, INEXACT|OVERFLOW }, // comment
//! ```
//!
//! Literal cells without a leading `-` get a space instead, so signs line up.
//! Every cell is padded to the widest cell of its column across the whole
//! table and cells are separated by a single space. Runs of spaces inside a
//! trailing comment are squeezed to one.

use crate::parser::Testcase;

const COLUMNS: usize = 8;

fn signed(literal: &str) -> String {
    if literal.starts_with('-') {
        format!("{literal},")
    } else {
        format!(" {literal},")
    }
}

/// Squeezes every run of spaces down to one.
fn collapse_spaces(text: &str) -> String {
    text.split(' ')
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn to_row(testcase: &Testcase) -> [String; COLUMNS] {
    [
        ".{".to_string(),
        format!("{},", testcase.rounding_mode),
        signed(&testcase.input),
        signed(&testcase.output),
        signed(&testcase.err),
        testcase.exc_flags.to_string(),
        "},".to_string(),
        testcase
            .comment
            .as_ref()
            .map(|comment| format!("// {}", collapse_spaces(comment)))
            .unwrap_or_default(),
    ]
}

/// Renders one aligned line per test case, in order.
pub fn render(testcases: &[Testcase]) -> Vec<String> {
    let rows: Vec<_> = testcases.iter().map(to_row).collect();

    let mut widths = [0usize; COLUMNS];
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    rows.iter()
        .map(|row| {
            let line = row
                .iter()
                .zip(widths)
                .map(|(cell, width)| format!("{cell:<width$}"))
                .collect::<Vec<_>>()
                .join(" ");
            line.trim_end().to_string()
        })
        .collect()
}

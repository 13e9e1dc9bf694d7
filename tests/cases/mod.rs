#![allow(dead_code)]

use fptab::{Conversion, ConvertError};

/// Declares a conversion test.
///
/// `rows` lists the expected table rows without their indentation; `error`
/// is the expected message of a fatal conversion error.
#[macro_export]
macro_rules! test_case {
    (
        name: $name:ident,
        input: $input:expr,
        $(modes: $modes:expr,)?
        $(format: $format:expr,)?
        $(rows: $rows:expr,)?
        $(error: $error:expr,)?
    ) => {
        #[test]
        fn $name() {
            #[allow(unused_mut)]
            let mut options = fptab::ConvertOptions::default();
            $( options.rounding_modes = $modes; )?
            $( options.float_format = Some($format); )?
            let result = fptab::Converter::new(options).convert($input);
            $( $crate::cases::check_rows(&result, $rows); )?
            $( $crate::cases::check_error(&result, $error); )?
        }
    };
}

/// The rows of the `testcases` aggregate, with indentation removed.
pub fn rows_of(conversion: &Conversion) -> Vec<&str> {
    conversion
        .output
        .lines()
        .skip_while(|line| !line.starts_with("const testcases"))
        .filter_map(|line| line.strip_prefix("    "))
        .filter(|line| line.starts_with(".{"))
        .collect()
}

pub fn check_rows(result: &Result<Conversion, ConvertError>, expected: &[&str]) {
    match result {
        Ok(conversion) => pretty_assertions::assert_eq!(rows_of(conversion), expected),
        Err(e) => panic!("Conversion failed: {}", e),
    }
}

pub fn check_error(result: &Result<Conversion, ConvertError>, expected: &str) {
    match result {
        Ok(conversion) => panic!("Expected an error, got:\n{}", conversion.output),
        Err(e) => pretty_assertions::assert_eq!(e.to_string(), expected),
    }
}

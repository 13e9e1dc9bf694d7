mod parsed_line;
pub mod parser;
mod syntax;
pub mod error;

// Re-export the parser and rule enum for external use
pub use parser::Rule;
pub use parser::TestcaseParser;
pub use parser::parse_line;

pub use error::{ParseError, ParseErrorKind};
pub use parsed_line::{ParsedLine, Testcase};
pub use syntax::Span;

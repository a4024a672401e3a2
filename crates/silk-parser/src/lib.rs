#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Regex front end: a source-location-aware lexer and recursive-descent
//! parser for patterns from the PCRE, ICU, Oniguruma, Perl/.NET and Python
//! dialect families.
//!
//! - `parse` - pattern text to a [`silk_ast::Ast`], or the first error
//! - `parse_with_delimiters` / `delimiters::lex_regex` - regex-literal
//!   delimiter handling for embedded patterns
//! - `tokens` - a lightweight logos-based token lexer for tooling
//! - `diagnostics` - structured error kinds with source ranges
//!
//! Parsing is sequential and allocation-bounded: one cursor, one thread, no
//! shared state. Independent parses may run in parallel freely.

pub mod cursor;
pub mod delimiters;
pub mod diagnostics;
pub mod options;
pub mod parser;
pub mod tokens;

pub use delimiters::{Delimiter, DelimiterError, LexedRegex, lex_regex, parse_with_delimiters};
pub use diagnostics::{ParseError, ParseErrorKind};
pub use options::SyntaxOptions;
pub use parser::Parser;

use silk_ast::Ast;

/// Parse a bare pattern under the given dialect. Returns the first error;
/// there is no recovery.
pub fn parse(input: &str, options: SyntaxOptions) -> Result<Ast, ParseError> {
    let ast = Parser::new(input, options).parse()?;
    #[cfg(debug_assertions)]
    parser::validate(&ast, input.len());
    Ok(ast)
}

//! Parser tests, one file per grammar area.

mod class_tests;
mod error_tests;
mod escape_tests;
mod property_tests;
mod reference_tests;
mod trivia_tests;

use silk_ast::Ast;

use crate::diagnostics::ParseError;
use crate::options::SyntaxOptions;

pub(crate) fn ast(pattern: &str) -> Ast {
    ast_with(pattern, SyntaxOptions::TRADITIONAL)
}

pub(crate) fn ast_with(pattern: &str, options: SyntaxOptions) -> Ast {
    match crate::parse(pattern, options) {
        Ok(ast) => ast,
        Err(err) => panic!("pattern {pattern:?} should parse: {err}"),
    }
}

pub(crate) fn dump(pattern: &str) -> String {
    ast(pattern).dump()
}

pub(crate) fn dump_with(pattern: &str, options: SyntaxOptions) -> String {
    ast_with(pattern, options).dump()
}

pub(crate) fn parse_err(pattern: &str) -> ParseError {
    parse_err_with(pattern, SyntaxOptions::TRADITIONAL)
}

pub(crate) fn parse_err_with(pattern: &str, options: SyntaxOptions) -> ParseError {
    match crate::parse(pattern, options) {
        Ok(ast) => panic!("pattern {pattern:?} should fail, got:\n{}", ast.dump()),
        Err(err) => err,
    }
}

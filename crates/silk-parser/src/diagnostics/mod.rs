//! Parse errors: structured kinds with attached source ranges.
//!
//! Lexical helpers throw; the parser's transactional `try_eating` restores
//! the cursor on `None` but never on error, so the range always points at
//! the failure. The first error aborts the parse; there is no recovery.

mod printer;

pub use printer::ErrorPrinter;

use silk_ast::Span;

pub(crate) type Result<T> = std::result::Result<T, ParseError>;

/// An error with the range at which it was detected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("error at {span}: {kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Shift the range right by `offset`. Used when the pattern was embedded
    /// in a larger literal and errors must point into the full input.
    pub fn offset(mut self, offset: usize) -> Self {
        self.span = self.span.offset(offset);
        self
    }

    /// Render with a caret-annotated source excerpt.
    pub fn render<'a>(&'a self, source: &'a str) -> ErrorPrinter<'a> {
        ErrorPrinter::new(self, source)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseErrorKind {
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,

    #[error("expected `{0}`")]
    Expected(String),

    #[error("expected one of: {}", .0.join(", "))]
    ExpectedSequence(Vec<String>),

    #[error("expected non-empty contents")]
    ExpectedNonEmptyContents,

    #[error("expected ASCII character, found {0:?}")]
    ExpectedAscii(char),

    #[error("expected a base-{radix} number, found `{text}`")]
    ExpectedNumber { text: String, radix: u32 },

    #[error("expected {expected} digits, found `{text}`")]
    ExpectedNumDigits { text: String, expected: usize },

    #[error("number `{0}` is too large")]
    NumberOverflow(String),

    #[error("invalid scalar value U+{0:X}")]
    InvalidScalar(u32),

    #[error("expected a group specifier")]
    ExpectedGroupSpecifier,

    #[error("unknown group kind `({0}`")]
    UnknownGroupKind(String),

    #[error("invalid matching option `{0}`")]
    InvalidMatchingOption(char),

    #[error("cannot remove options after the `^` reset specifier")]
    CannotRemoveMatchingOptionsAfterCaret,

    #[error("text segment mode cannot be removed")]
    CannotRemoveTextSegmentOptions,

    #[error("quantifier must follow an operand")]
    QuantifierWithoutOperand,

    #[error("{0}")]
    Misc(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_kind_and_range() {
        let err = ParseError::new(ParseErrorKind::Expected(")".to_string()), Span::new(4, 5));
        assert_eq!(err.to_string(), "error at 4..5: expected `)`");
    }

    #[test]
    fn offset_moves_the_range() {
        let err = ParseError::new(ParseErrorKind::UnexpectedEndOfInput, Span::empty(3));
        assert_eq!(err.offset(2).span, Span::empty(5));
    }
}

//! Regex-literal delimiter detection and stripping.
//!
//! Used by tooling that embeds regex literals in a host language: find the
//! delimiter pair, slice out the pattern, and remember which dialect the
//! delimiter implies. Escaped closing delimiters (`\/`) do not terminate.

use silk_ast::Span;

use crate::diagnostics::{ParseError, ParseErrorKind};
use crate::options::SyntaxOptions;

/// The recognized delimiter pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    /// `/.../` — no newlines allowed inside.
    Slash,
    /// `#/.../#` — may span lines.
    PoundSlash,
    /// `re'...'`
    ReQuote,
    /// `rx'...'`
    RxQuote,
    /// `'/.../'`
    QuotedSlash,
    /// `'|...|'`
    QuotedPipe,
}

impl Delimiter {
    /// Tried in order; longer openings first so `#/` wins over `/`.
    const ALL: [Delimiter; 6] = [
        Delimiter::PoundSlash,
        Delimiter::ReQuote,
        Delimiter::RxQuote,
        Delimiter::QuotedSlash,
        Delimiter::QuotedPipe,
        Delimiter::Slash,
    ];

    pub fn opening(self) -> &'static str {
        match self {
            Delimiter::Slash => "/",
            Delimiter::PoundSlash => "#/",
            Delimiter::ReQuote => "re'",
            Delimiter::RxQuote => "rx'",
            Delimiter::QuotedSlash => "'/",
            Delimiter::QuotedPipe => "'|",
        }
    }

    pub fn closing(self) -> &'static str {
        match self {
            Delimiter::Slash => "/",
            Delimiter::PoundSlash => "/#",
            Delimiter::ReQuote | Delimiter::RxQuote => "'",
            Delimiter::QuotedSlash => "/'",
            Delimiter::QuotedPipe => "|'",
        }
    }

    /// Whether the pattern may contain raw newlines.
    fn allows_newlines(self) -> bool {
        !matches!(self, Delimiter::Slash)
    }

    /// The dialect the delimiter selects: the quoted and `re'`/`rx'` forms
    /// take the experimental extensions, plain slashes stay traditional.
    pub fn syntax_options(self) -> SyntaxOptions {
        match self {
            Delimiter::Slash | Delimiter::PoundSlash => SyntaxOptions::TRADITIONAL,
            Delimiter::ReQuote
            | Delimiter::RxQuote
            | Delimiter::QuotedSlash
            | Delimiter::QuotedPipe => SyntaxOptions::experimental(),
        }
    }
}

/// Delimiter-detection failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DelimiterError {
    #[error("input does not start with a regex literal delimiter")]
    UnknownDelimiter,

    #[error("unterminated regex literal, expected `{expected}`")]
    Unterminated { expected: &'static str },

    #[error("regex literal may not span multiple lines")]
    UnexpectedNewline,
}

/// A successfully delimited literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexedRegex<'src> {
    /// The pattern between the delimiters.
    pub contents: &'src str,
    pub delimiter: Delimiter,
    /// Bytes consumed from the input, delimiters included.
    pub len: usize,
}

/// Detect and strip one delimiter pair. Pure delimiter lexing; the contents
/// are not parsed.
pub fn lex_regex(input: &str) -> Result<LexedRegex<'_>, DelimiterError> {
    let delimiter = Delimiter::ALL
        .into_iter()
        .find(|d| input.starts_with(d.opening()))
        .ok_or(DelimiterError::UnknownDelimiter)?;

    let open_len = delimiter.opening().len();
    let closing = delimiter.closing();
    let body = &input[open_len..];

    let mut iter = body.char_indices();
    while let Some((offset, c)) = iter.next() {
        if body[offset..].starts_with(closing) {
            return Ok(LexedRegex {
                contents: &body[..offset],
                delimiter,
                len: open_len + offset + closing.len(),
            });
        }
        match c {
            '\\' => {
                // The escaped character cannot close the literal.
                iter.next();
            }
            '\n' if !delimiter.allows_newlines() => {
                return Err(DelimiterError::UnexpectedNewline);
            }
            _ => {}
        }
    }

    Err(DelimiterError::Unterminated { expected: closing })
}

/// Strip delimiters and parse the contents with the dialect they imply.
/// Spans in the result (and in errors) are relative to the full input.
pub fn parse_with_delimiters(input: &str) -> Result<silk_ast::Ast, ParseError> {
    let lexed = lex_regex(input).map_err(|err| {
        ParseError::new(
            ParseErrorKind::Misc(err.to_string()),
            Span::new(0, input.len()),
        )
    })?;

    let offset = lexed.delimiter.opening().len();
    let mut ast = crate::parse(lexed.contents, lexed.delimiter.syntax_options())
        .map_err(|err| err.offset(offset))?;
    ast.offset_spans(offset);
    Ok(ast)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slash_delimited() {
        let lexed = lex_regex("/a(b)*/").unwrap();
        assert_eq!(lexed.contents, "a(b)*");
        assert_eq!(lexed.delimiter, Delimiter::Slash);
        assert_eq!(lexed.len, 7);
    }

    #[test]
    fn escaped_closing_does_not_terminate() {
        let lexed = lex_regex(r"/a\/b/").unwrap();
        assert_eq!(lexed.contents, r"a\/b");
    }

    #[test]
    fn pound_form_spans_lines() {
        let lexed = lex_regex("#/a\nb/#").unwrap();
        assert_eq!(lexed.contents, "a\nb");
        assert_eq!(lexed.delimiter, Delimiter::PoundSlash);

        assert_eq!(lex_regex("/a\nb/"), Err(DelimiterError::UnexpectedNewline));
    }

    #[test]
    fn quote_forms() {
        assert_eq!(lex_regex("re'ab'").unwrap().contents, "ab");
        assert_eq!(lex_regex("rx'ab'").unwrap().contents, "ab");
        assert_eq!(lex_regex("'/ab/'").unwrap().contents, "ab");
        assert_eq!(lex_regex("'|ab|'").unwrap().contents, "ab");
    }

    #[test]
    fn trailing_input_is_left_alone() {
        let input = "/ab/ the rest";
        let lexed = lex_regex(input).unwrap();
        assert_eq!(lexed.len, 4);
        assert_eq!(&input[lexed.len..], " the rest");
    }

    #[test]
    fn unterminated_and_unknown() {
        assert_eq!(
            lex_regex("/abc"),
            Err(DelimiterError::Unterminated { expected: "/" })
        );
        assert_eq!(lex_regex("abc"), Err(DelimiterError::UnknownDelimiter));
    }

    #[test]
    fn parse_offsets_spans_into_the_full_input() {
        let ast = parse_with_delimiters("/ab/").unwrap();
        assert_eq!(ast.span(), silk_ast::Span::new(1, 3));
    }

    #[test]
    fn parse_offsets_error_spans_too() {
        let err = parse_with_delimiters("/a(/").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::UnexpectedEndOfInput);
        assert_eq!(err.span, Span::empty(3));
    }
}

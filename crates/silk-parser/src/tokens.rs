//! Lightweight dialect-independent token lexer.
//!
//! A simplified character-level grammar for tooling (highlighting, literal
//! scanning): metacharacters, escapes, digit runs, whitespace, and literal
//! text. Tokens carry spans only; text is sliced from the source on demand.
//! This is not the lexer the parser uses — the parser lexes on a raw cursor
//! with full dialect awareness.

use logos::Logos;
use silk_ast::Span;

/// Token kinds for the simplified grammar.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(test, derive(serde::Serialize))]
pub enum TokenKind {
    #[token("(")]
    OpenParen,

    #[token(")")]
    CloseParen,

    #[token("[")]
    OpenBracket,

    #[token("]")]
    CloseBracket,

    #[token("{")]
    OpenBrace,

    #[token("}")]
    CloseBrace,

    #[token("|")]
    Pipe,

    #[token("*")]
    Star,

    #[token("+")]
    Plus,

    #[token("?")]
    Question,

    #[token(".")]
    Dot,

    #[token("^")]
    Caret,

    #[token("$")]
    Dollar,

    #[token("-")]
    Dash,

    #[token(",")]
    Comma,

    /// A backslash and the character it escapes.
    #[regex(r"\\[\s\S]")]
    Escape,

    #[regex(r"[0-9]+")]
    Number,

    #[regex(r"[ \t\r\n]+")]
    Whitespace,

    /// A run of characters with no structural meaning.
    #[regex(r"[^\\()\[\]{}|*+?.^$,0-9 \t\r\n-]+")]
    Literal,

    /// Coalesced unlexable input (a lone trailing backslash).
    Garbage,
}

/// Zero-copy token: kind + span, text retrieved via [`token_text`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// Tokenize a pattern. Consecutive unlexable characters coalesce into single
/// `Garbage` tokens so malformed input stays manageable.
pub fn lex(pattern: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(pattern);
    let mut error_start: Option<usize> = None;

    loop {
        match lexer.next() {
            Some(Ok(kind)) => {
                if let Some(start) = error_start.take() {
                    tokens.push(Token::new(
                        TokenKind::Garbage,
                        Span::new(start, lexer.span().start),
                    ));
                }
                let span = lexer.span();
                tokens.push(Token::new(kind, Span::new(span.start, span.end)));
            }
            Some(Err(())) => {
                if error_start.is_none() {
                    error_start = Some(lexer.span().start);
                }
            }
            None => {
                if let Some(start) = error_start.take() {
                    tokens.push(Token::new(
                        TokenKind::Garbage,
                        Span::new(start, pattern.len()),
                    ));
                }
                break;
            }
        }
    }

    tokens
}

/// The text slice a token covers. O(1) slice into the source.
#[inline]
pub fn token_text<'src>(source: &'src str, token: &Token) -> &'src str {
    token.span.text(source)
}

//! Parser state and low-level operations.
//!
//! All lexical helpers and grammar productions are `impl Parser` extension
//! blocks in the sibling modules; this file owns the state and the
//! transactional cursor contract.

use silk_ast::{Ast, Located, MatchingOptionSequence, OptionKind, Span};

use crate::cursor::SourceCursor;
use crate::diagnostics::{ParseError, ParseErrorKind, Result};
use crate::options::SyntaxOptions;

pub struct Parser<'src> {
    pub(crate) src: SourceCursor<'src>,
    pub(crate) options: SyntaxOptions,
    /// Capturing groups opened to the left of the current position. Drives
    /// the octal/backreference choice for bare `\N` escapes.
    pub(crate) prior_group_count: u32,
    /// Custom-character-class nesting depth; `]` outside a class is literal.
    pub(crate) class_depth: u32,
    /// `(?x)` in effect: whitespace outside classes lexes as trivia.
    pub(crate) extended: bool,
    /// `(?xx)` in effect: whitespace inside classes is skipped too.
    pub(crate) extra_extended: bool,
}

/// Saved lexing modes, restored when leaving a group scope.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ModeCheckpoint {
    extended: bool,
    extra_extended: bool,
}

impl<'src> Parser<'src> {
    pub fn new(input: &'src str, options: SyntaxOptions) -> Self {
        let whitespace = options.ignores_whitespace();
        Self {
            src: SourceCursor::new(input),
            options,
            prior_group_count: 0,
            class_depth: 0,
            extended: whitespace,
            extra_extended: whitespace,
        }
    }

    /// Parse the whole pattern. Consumes the parser; the first error aborts.
    pub fn parse(mut self) -> Result<Ast> {
        let ast = self.parse_pattern()?;
        debug_assert_eq!(self.class_depth, 0, "unbalanced class depth");
        Ok(ast)
    }

    pub(crate) fn err<T>(&self, kind: ParseErrorKind, span: Span) -> Result<T> {
        Err(ParseError::new(kind, span))
    }

    /// Error at the current position: an empty span here.
    pub(crate) fn err_here<T>(&self, kind: ParseErrorKind) -> Result<T> {
        self.err(kind, self.src.here())
    }

    /// Transactional attempt: run `f`, restore the cursor if it produced
    /// nothing. Errors propagate with the cursor untouched so their ranges
    /// keep pointing at the failure.
    pub(crate) fn try_eating<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<Option<T>>,
    ) -> Result<Option<T>> {
        let checkpoint = self.src.position();
        let result = f(self)?;
        if result.is_none() {
            self.src.rewind(checkpoint);
        }
        Ok(result)
    }

    /// Run `f` and wrap its result with the span it consumed.
    pub(crate) fn record<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T>,
    ) -> Result<Located<T>> {
        let start = self.src.position();
        let value = f(self)?;
        Ok(Located::new(value, self.src.span_from(start)))
    }

    /// Consume one character or fail with `UnexpectedEndOfInput`.
    pub(crate) fn eat_or_end(&mut self) -> Result<char> {
        match self.src.peek() {
            Some(_) => Ok(self.src.eat()),
            None => self.err_here(ParseErrorKind::UnexpectedEndOfInput),
        }
    }

    /// Consume `c`, or fail with `Expected` (or `UnexpectedEndOfInput`).
    pub(crate) fn expect_char(&mut self, c: char) -> Result<()> {
        if self.src.try_eat(c) {
            return Ok(());
        }
        match self.src.peek() {
            None => self.err_here(ParseErrorKind::UnexpectedEndOfInput),
            Some(found) => {
                let start = self.src.position();
                self.err(
                    ParseErrorKind::Expected(c.to_string()),
                    Span::new(start, start + found.len_utf8()),
                )
            }
        }
    }

    // === Numbers ===========================================================

    /// Maximal run of digits in `radix`; at least one is required.
    pub(crate) fn lex_number(&mut self, radix: u32) -> Result<Located<u32>> {
        let start = self.src.position();
        let text = self.src.eat_while(|c| c.is_digit(radix));
        if text.is_empty() {
            return self.err_here(ParseErrorKind::ExpectedNumber {
                text: String::new(),
                radix,
            });
        }
        let span = self.src.span_from(start);
        match u32::from_str_radix(text, radix) {
            Ok(value) => Ok(Located::new(value, span)),
            Err(_) => self.err(ParseErrorKind::NumberOverflow(text.to_string()), span),
        }
    }

    /// Like [`Self::lex_number`], but absence is `None` rather than an error.
    pub(crate) fn lex_optional_number(&mut self, radix: u32) -> Result<Option<Located<u32>>> {
        if !self.src.peek().is_some_and(|c| c.is_digit(radix)) {
            return Ok(None);
        }
        self.lex_number(radix).map(Some)
    }

    /// Exactly `n` digits in `radix`.
    pub(crate) fn lex_exact_digits(&mut self, n: usize, radix: u32) -> Result<Located<u32>> {
        let start = self.src.position();
        let text = self.src.eat_up_to(n, |c| c.is_digit(radix));
        let span = self.src.span_from(start);
        if text.len() != n {
            return self.err(
                ParseErrorKind::ExpectedNumDigits {
                    text: text.to_string(),
                    expected: n,
                },
                span,
            );
        }
        match u32::from_str_radix(text, radix) {
            Ok(value) => Ok(Located::new(value, span)),
            Err(_) => self.err(ParseErrorKind::NumberOverflow(text.to_string()), span),
        }
    }

    /// Check a codepoint is a Unicode scalar (rejects surrogates and values
    /// past U+10FFFF).
    pub(crate) fn scalar_from(&self, value: Located<u32>) -> Result<Located<char>> {
        match char::from_u32(value.value) {
            Some(c) => Ok(Located::new(c, value.span)),
            None => self.err(ParseErrorKind::InvalidScalar(value.value), value.span),
        }
    }

    // === Lexing modes ======================================================

    /// Whether whitespace is currently non-semantic in the given context.
    pub(crate) fn skips_whitespace(&self, in_class: bool) -> bool {
        if in_class {
            self.extra_extended
        } else {
            self.extended
        }
    }

    pub(crate) fn mode_checkpoint(&self) -> ModeCheckpoint {
        ModeCheckpoint {
            extended: self.extended,
            extra_extended: self.extra_extended,
        }
    }

    pub(crate) fn restore_modes(&mut self, checkpoint: ModeCheckpoint) {
        self.extended = checkpoint.extended;
        self.extra_extended = checkpoint.extra_extended;
    }

    /// Update lexing modes for an option-changing group. Only the extended
    /// flags affect lexing; everything else is carried in the AST for
    /// downstream consumers.
    pub(crate) fn apply_matching_options(&mut self, sequence: &MatchingOptionSequence) {
        if sequence.resets_all() {
            self.extended = false;
            self.extra_extended = false;
        }
        for opt in &sequence.adding {
            match opt.value {
                OptionKind::Extended => self.extended = true,
                OptionKind::ExtraExtended => {
                    self.extended = true;
                    self.extra_extended = true;
                }
                _ => {}
            }
        }
        for opt in &sequence.removing {
            if matches!(opt.value, OptionKind::Extended | OptionKind::ExtraExtended) {
                self.extended = false;
                self.extra_extended = false;
            }
        }
    }
}

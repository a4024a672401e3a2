//! Quotes, comments, and non-semantic whitespace.
//!
//! These lex ahead of atoms in the concatenation loop: none of them can take
//! a quantifier.

use silk_ast::{Quote, Trivia};

use crate::diagnostics::{ParseErrorKind, Result};
use crate::options::SyntaxOptions;
use crate::parser::Parser;

impl Parser<'_> {
    /// One piece of trivia, if the input starts with any: `(?#...)`,
    /// `/* ... */` (experimental), and in whitespace-ignoring mode a run of
    /// whitespace or a `#` line comment.
    pub(crate) fn lex_trivia(&mut self, in_class: bool) -> Result<Option<Trivia>> {
        let start = self.src.position();

        if !in_class && self.src.try_eat_seq("(?#") {
            self.src.eat_while(|c| c != ')');
            self.expect_char(')')?;
            return Ok(Some(self.trivia_from(start)));
        }

        if self.options.contains(SyntaxOptions::EXPERIMENTAL_COMMENTS)
            && self.src.try_eat_seq("/*")
        {
            while !self.src.is_empty() && !self.src.starts_with("*/") {
                self.src.eat();
            }
            if !self.src.try_eat_seq("*/") {
                return self.err_here(ParseErrorKind::Expected("*/".to_string()));
            }
            return Ok(Some(self.trivia_from(start)));
        }

        if self.skips_whitespace(in_class) {
            if self.src.try_eat('#') {
                self.src.eat_while(|c| c != '\n');
                return Ok(Some(self.trivia_from(start)));
            }
            let run = self.src.eat_while(|c| matches!(c, ' ' | '\t' | '\r' | '\n'));
            if !run.is_empty() {
                return Ok(Some(self.trivia_from(start)));
            }
        }

        Ok(None)
    }

    fn trivia_from(&self, start: usize) -> Trivia {
        let span = self.src.span_from(start);
        Trivia {
            text: span.text(self.src.input()).to_string(),
            span,
        }
    }

    /// A quoted literal, if the input starts with one: `\Q...\E` (an
    /// unterminated quote runs to the end of input) or, experimentally,
    /// `"..."` with `\"` and `\\` escapes.
    pub(crate) fn lex_quote(&mut self) -> Result<Option<Quote>> {
        let start = self.src.position();

        if self.src.try_eat_seq("\\Q") {
            let mut literal = String::new();
            while !self.src.is_empty() && !self.src.starts_with("\\E") {
                literal.push(self.src.eat());
            }
            self.src.try_eat_seq("\\E");
            return Ok(Some(Quote {
                literal,
                span: self.src.span_from(start),
            }));
        }

        if self.options.contains(SyntaxOptions::EXPERIMENTAL_QUOTES) && self.src.try_eat('"') {
            let mut literal = String::new();
            loop {
                match self.src.peek() {
                    None => return self.err_here(ParseErrorKind::Expected("\"".to_string())),
                    Some('"') => {
                        self.src.eat();
                        break;
                    }
                    Some('\\') => {
                        self.src.eat();
                        match self.src.peek() {
                            Some(c @ ('"' | '\\')) => {
                                self.src.eat();
                                literal.push(c);
                            }
                            Some(c) => {
                                // Unknown escapes keep both characters.
                                self.src.eat();
                                literal.push('\\');
                                literal.push(c);
                            }
                            None => {
                                return self
                                    .err_here(ParseErrorKind::Expected("\"".to_string()));
                            }
                        }
                    }
                    Some(c) => {
                        self.src.eat();
                        literal.push(c);
                    }
                }
            }
            return Ok(Some(Quote {
                literal,
                span: self.src.span_from(start),
            }));
        }

        Ok(None)
    }
}

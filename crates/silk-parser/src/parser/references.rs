//! Backreferences, subpattern calls, and the octal/backreference choice.

use silk_ast::{Atom, AtomKind, Located, RefKind, Reference, Span};

use crate::diagnostics::{ParseErrorKind, Result};
use crate::parser::Parser;

impl Parser<'_> {
    /// `\` followed by a digit, outside any reference delimiter.
    ///
    /// A leading `0` is always octal (up to three octal digits, the zero
    /// included). Otherwise the maximal decimal run `N` is a backreference
    /// iff `1 <= N <= 9`, or the first digit is `8`/`9` (not octal), or `N`
    /// refers to a group that already exists; anything else re-lexes as up
    /// to three octal digits. Inside a custom character class references do
    /// not exist, so digits are always octal (`8`/`9` are literal).
    pub(crate) fn lex_octal_or_backreference(
        &mut self,
        start: usize,
        in_class: bool,
    ) -> Result<Atom> {
        let d0 = self.src.peek().expect("caller saw a digit");
        debug_assert!(d0.is_ascii_digit());

        if in_class {
            if !d0.is_digit(8) {
                self.src.eat();
                return Ok(Atom::new(AtomKind::Char(d0), self.src.span_from(start)));
            }
            return self.lex_octal_digits(start);
        }

        if d0 == '0' {
            return self.lex_octal_digits(start);
        }

        let digit_start = self.src.position();
        let number = self.lex_number(10)?;
        let n = number.value;
        let is_backreference =
            (1..=9).contains(&n) || matches!(d0, '8' | '9') || n <= self.prior_group_count;
        if is_backreference {
            let reference = Reference::new(RefKind::Absolute(n), number.span);
            return Ok(Atom::new(
                AtomKind::Backreference(reference),
                self.src.span_from(start),
            ));
        }

        self.src.rewind(digit_start);
        self.lex_octal_digits(start)
    }

    /// Up to three octal digits starting at the cursor.
    fn lex_octal_digits(&mut self, start: usize) -> Result<Atom> {
        let digit_start = self.src.position();
        let text = self.src.eat_up_to(3, |c| c.is_digit(8));
        debug_assert!(!text.is_empty());
        let value = u32::from_str_radix(text, 8).expect("three octal digits fit");
        let scalar = self.scalar_from(Located::new(value, self.src.span_from(digit_start)))?;
        Ok(Atom::new(
            AtomKind::Scalar(scalar.value),
            self.src.span_from(start),
        ))
    }

    /// `\g...` and `\k...` reference escapes. The `g`/`k` is consumed.
    ///
    /// `\k` forms and `\g{...}`/`\gN`/`\g±N` are backreferences; the
    /// delimited `\g<...>`/`\g'...'` forms are subpattern calls.
    pub(crate) fn lex_escaped_reference(&mut self, start: usize, intro: char) -> Result<Atom> {
        let kind = match (intro, self.src.peek()) {
            ('g', Some('{')) => {
                self.src.eat();
                let reference = self.lex_reference_body('}')?;
                AtomKind::Backreference(reference)
            }
            ('g', Some('<')) => {
                self.src.eat();
                let reference = self.lex_reference_body('>')?;
                AtomKind::Subpattern(reference)
            }
            ('g', Some('\'')) => {
                self.src.eat();
                let reference = self.lex_reference_body('\'')?;
                AtomKind::Subpattern(reference)
            }
            ('g', Some(c)) if c.is_ascii_digit() || c == '+' || c == '-' => {
                let reference = self.lex_numbered_reference()?;
                AtomKind::Backreference(reference)
            }
            ('k', Some('<')) => {
                self.src.eat();
                let reference = self.lex_reference_body('>')?;
                AtomKind::Backreference(reference)
            }
            ('k', Some('\'')) => {
                self.src.eat();
                let reference = self.lex_reference_body('\'')?;
                AtomKind::Backreference(reference)
            }
            ('k', Some('{')) => {
                self.src.eat();
                let reference = self.lex_reference_body('}')?;
                AtomKind::Backreference(reference)
            }
            _ => return self.err_here(ParseErrorKind::ExpectedGroupSpecifier),
        };
        Ok(Atom::new(kind, self.src.span_from(start)))
    }

    /// A number, signed relative number, or name, closed by `terminator`.
    fn lex_reference_body(&mut self, terminator: char) -> Result<Reference> {
        let reference = match self.src.peek() {
            Some(c) if c.is_ascii_digit() || c == '+' || c == '-' => {
                self.lex_numbered_reference()?
            }
            _ => {
                let name = self.lex_identifier("group name")?;
                Reference::new(RefKind::Named(name.value), name.span)
            }
        };
        self.expect_char(terminator)?;
        Ok(reference)
    }

    /// `N`, `+N`, or `-N`.
    pub(crate) fn lex_numbered_reference(&mut self) -> Result<Reference> {
        let start = self.src.position();
        let sign = match self.src.peek() {
            Some('+') => {
                self.src.eat();
                Some(1)
            }
            Some('-') => {
                self.src.eat();
                Some(-1)
            }
            _ => None,
        };
        let number = self.lex_number(10)?;
        let span = self.src.span_from(start);
        let kind = match sign {
            Some(sign) => RefKind::Relative(sign * number.value as i32),
            None if number.value == 0 => RefKind::Recurse,
            None => RefKind::Absolute(number.value),
        };
        Ok(Reference::new(kind, span))
    }

    /// Group-like references behind `(?`: `(?P=name)`, `(?P>name)`,
    /// `(?&name)`, `(?R)`, `(?3)`, `(?+2)`. Returns `None` (restoring
    /// nothing itself; the caller runs this under `try_eating`) when the
    /// construct is not a reference, so `(?P<...>` and `(?-i)` fall through
    /// to group-start lexing.
    pub(crate) fn lex_group_like_reference(&mut self) -> Result<Option<Atom>> {
        let start = self.src.position();
        if !self.src.try_eat_seq("(?") {
            return Ok(None);
        }

        let kind = match self.src.peek() {
            Some('P') if self.src.starts_with("P=") => {
                self.src.try_eat_seq("P=");
                let name = self.lex_identifier("group name")?;
                AtomKind::Backreference(Reference::new(RefKind::Named(name.value), name.span))
            }
            Some('P') if self.src.starts_with("P>") => {
                self.src.try_eat_seq("P>");
                let name = self.lex_identifier("group name")?;
                AtomKind::Subpattern(Reference::new(RefKind::Named(name.value), name.span))
            }
            Some('&') => {
                self.src.eat();
                let name = self.lex_identifier("group name")?;
                AtomKind::Subpattern(Reference::new(RefKind::Named(name.value), name.span))
            }
            Some('R') => {
                let ref_start = self.src.position();
                self.src.eat();
                AtomKind::Subpattern(Reference::new(
                    RefKind::Recurse,
                    self.src.span_from(ref_start),
                ))
            }
            Some(c) if c.is_ascii_digit() => {
                AtomKind::Subpattern(self.lex_numbered_reference()?)
            }
            Some('+') | Some('-') => {
                // `(?-i)` is an option group; only digits make a reference.
                if !self.src.peek_at(1).is_some_and(|c| c.is_ascii_digit()) {
                    return Ok(None);
                }
                AtomKind::Subpattern(self.lex_numbered_reference()?)
            }
            _ => return Ok(None),
        };

        self.expect_char(')')?;
        Ok(Some(Atom::new(kind, self.src.span_from(start))))
    }

    /// A group name: a letter or underscore, then word characters.
    pub(crate) fn lex_identifier(&mut self, what: &str) -> Result<Located<String>> {
        let start = self.src.position();
        match self.src.peek() {
            None => return self.err_here(ParseErrorKind::UnexpectedEndOfInput),
            Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
            Some(_) => {
                return self.err(
                    ParseErrorKind::Misc(format!("{what} must begin with a letter or underscore")),
                    Span::empty(start),
                );
            }
        }
        let name = self
            .src
            .eat_while(|c| c.is_ascii_alphanumeric() || c == '_')
            .to_string();
        Ok(Located::new(name, self.src.span_from(start)))
    }
}

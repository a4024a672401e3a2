//! Escape-sequence lexing: builtins, Unicode scalars, keyboard escapes.
//!
//! Everything here is dispatched after the parser has consumed a backslash;
//! `start` is always the backslash position so atom spans cover the whole
//! lexeme.

use silk_ast::{Atom, AtomKind, EscapedBuiltin, Located};

use crate::diagnostics::{ParseErrorKind, Result};
use crate::parser::Parser;

impl Parser<'_> {
    /// Lex the atom following a backslash. `in_class` selects the
    /// character-class subset: no references, no anchors, `\b` is backspace.
    pub(crate) fn lex_escaped_atom(&mut self, start: usize, in_class: bool) -> Result<Atom> {
        let Some(c) = self.src.peek() else {
            return self.err_here(ParseErrorKind::UnexpectedEndOfInput);
        };

        match c {
            'u' | 'x' | 'U' | 'o' => {
                self.src.eat();
                let scalar = self.lex_scalar_tail(c)?;
                Ok(Atom::new(AtomKind::Scalar(scalar.value), self.src.span_from(start)))
            }
            'N' => {
                self.src.eat();
                self.lex_named_or_scalar(start, in_class)
            }
            'p' | 'P' => {
                self.src.eat();
                self.lex_character_property(start, c == 'P')
            }
            '0'..='9' => self.lex_octal_or_backreference(start, in_class),
            'g' | 'k' if !in_class => {
                self.src.eat();
                self.lex_escaped_reference(start, c)
            }
            'c' | 'C' | 'M' => self.lex_keyboard_escape(start),
            _ => {
                self.src.eat();
                if let Some(builtin) = builtin_for(c, in_class) {
                    return Ok(Atom::new(
                        AtomKind::EscapedBuiltin(builtin),
                        self.src.span_from(start),
                    ));
                }
                if c.is_ascii_alphanumeric() {
                    // A letter with no assigned meaning (or one that only has
                    // meaning outside a class) is an error, not a literal.
                    return self.err(
                        ParseErrorKind::Misc(format!("invalid escape sequence `\\{c}`")),
                        self.src.span_from(start),
                    );
                }
                // Escaped metacharacters and punctuation are the literal
                // character.
                Ok(Atom::new(AtomKind::Char(c), self.src.span_from(start)))
            }
        }
    }

    /// The scalar notations. The introducing character has been consumed.
    ///
    /// | Syntax       | Digits | Radix |
    /// |--------------|--------|-------|
    /// | `\u{H+}`     | 1-8    | 16    |
    /// | `\uHHHH`     | 4      | 16    |
    /// | `\x{H+}`     | 1-8    | 16    |
    /// | `\xHH`       | 0-2    | 16    |
    /// | `\UHHHHHHHH` | 8      | 16    |
    /// | `\o{O+}`     | 1+     | 8     |
    fn lex_scalar_tail(&mut self, intro: char) -> Result<Located<char>> {
        let value = match intro {
            'u' | 'x' if self.src.try_eat('{') => {
                let value = self.lex_number(16)?;
                self.expect_char('}')?;
                value
            }
            'u' => self.lex_exact_digits(4, 16)?,
            'x' => {
                // Zero digits is allowed and means NUL.
                let start = self.src.position();
                let text = self.src.eat_up_to(2, |c| c.is_ascii_hexdigit());
                let span = self.src.span_from(start);
                let value = if text.is_empty() {
                    0
                } else {
                    u32::from_str_radix(text, 16).expect("two hex digits fit")
                };
                Located::new(value, span)
            }
            'U' => self.lex_exact_digits(8, 16)?,
            'o' => {
                self.expect_char('{')?;
                let value = self.lex_number(8)?;
                self.expect_char('}')?;
                value
            }
            _ => unreachable!("lex_scalar_tail dispatched on {intro:?}"),
        };
        self.scalar_from(value)
    }

    /// `\N{U+41}` is a scalar, `\N{DEGREE SIGN}` a named character, bare `\N`
    /// the not-a-newline builtin.
    fn lex_named_or_scalar(&mut self, start: usize, in_class: bool) -> Result<Atom> {
        if !self.src.try_eat('{') {
            if in_class {
                return self.err(
                    ParseErrorKind::Misc(
                        "`\\N` is not allowed in a custom character class".to_string(),
                    ),
                    self.src.span_from(start),
                );
            }
            return Ok(Atom::new(
                AtomKind::EscapedBuiltin(EscapedBuiltin::NotNewline),
                self.src.span_from(start),
            ));
        }

        if self.src.try_eat_seq("U+") {
            let value = self.lex_number(16)?;
            let scalar = self.scalar_from(value)?;
            self.expect_char('}')?;
            return Ok(Atom::new(AtomKind::Scalar(scalar.value), self.src.span_from(start)));
        }

        let name_start = self.src.position();
        let name = self.src.eat_while(|c| c != '}');
        if name.is_empty() {
            return self.err(
                ParseErrorKind::ExpectedNonEmptyContents,
                self.src.span_from(name_start),
            );
        }
        let name = name.to_string();
        self.expect_char('}')?;
        Ok(Atom::new(
            AtomKind::NamedCharacter(name),
            self.src.span_from(start),
        ))
    }

    /// `\cX`, `\C-X`, `\M-X`, `\M-\C-X`. The operand must be ASCII.
    fn lex_keyboard_escape(&mut self, start: usize) -> Result<Atom> {
        let intro = self.src.eat();
        let kind = match intro {
            'c' => AtomKind::KeyboardControl(self.lex_ascii_operand()?),
            'C' => {
                self.expect_char('-')?;
                AtomKind::KeyboardControl(self.lex_ascii_operand()?)
            }
            'M' => {
                self.expect_char('-')?;
                if self.src.try_eat_seq("\\C-") {
                    AtomKind::KeyboardMetaControl(self.lex_ascii_operand()?)
                } else {
                    AtomKind::KeyboardMeta(self.lex_ascii_operand()?)
                }
            }
            _ => unreachable!("lex_keyboard_escape dispatched on {intro:?}"),
        };
        Ok(Atom::new(kind, self.src.span_from(start)))
    }

    fn lex_ascii_operand(&mut self) -> Result<char> {
        let start = self.src.position();
        let c = self.eat_or_end()?;
        if !c.is_ascii() {
            return self.err(ParseErrorKind::ExpectedAscii(c), self.src.span_from(start));
        }
        Ok(c)
    }
}

/// The builtin for an escaped letter, or `None` when the letter has no fixed
/// meaning. Inside a custom character class only character-like escapes
/// survive; assertions are rejected by returning `None` there so the caller
/// reports them.
fn builtin_for(c: char, in_class: bool) -> Option<EscapedBuiltin> {
    use EscapedBuiltin::*;
    let builtin = match c {
        'a' => Alarm,
        'e' => Escape,
        'f' => FormFeed,
        'n' => Newline,
        'r' => CarriageReturn,
        't' => Tab,
        'v' => VerticalTab,
        'b' if in_class => Backspace,
        'b' => WordBoundary,
        'd' => DecimalDigit,
        'D' => NotDecimalDigit,
        'h' => HorizontalWhitespace,
        'H' => NotHorizontalWhitespace,
        's' => Whitespace,
        'S' => NotWhitespace,
        'w' => WordCharacter,
        'W' => NotWordCharacter,
        'B' => NotWordBoundary,
        'A' => StartOfSubject,
        'Z' => EndOfSubjectBeforeNewline,
        'z' => EndOfSubject,
        'G' => FirstMatchingPositionInSubject,
        'K' => ResetStartOfMatch,
        'R' => NewlineSequence,
        'O' => TrueAnychar,
        'X' => GraphemeCluster,
        'y' => TextSegmentBoundary,
        'Y' => NotTextSegmentBoundary,
        _ => return None,
    };
    if in_class && builtin.is_assertion() {
        return None;
    }
    if in_class && matches!(builtin, NewlineSequence | TrueAnychar | GraphemeCluster) {
        return None;
    }
    Some(builtin)
}

//! Quantifier lexing: `*` `+` `?` and the brace/range forms.

use silk_ast::{Located, QuantAmount, QuantKind};

use crate::diagnostics::Result;
use crate::options::SyntaxOptions;
use crate::parser::Parser;

impl Parser<'_> {
    /// Lex a quantifier with its kind suffix, or `None`.
    ///
    /// A `{` that does not open a valid range is left in place and re-lexes
    /// as a literal. In whitespace-ignoring mode the quantifier may be
    /// separated from its operand by whitespace.
    pub(crate) fn lex_quantifier(
        &mut self,
    ) -> Result<Option<(Located<QuantAmount>, Located<QuantKind>)>> {
        self.try_eating(|p| {
            if p.skips_whitespace(false) {
                p.src.eat_while(|c| matches!(c, ' ' | '\t'));
            }

            let amount_start = p.src.position();
            let amount = if p.src.try_eat('*') {
                QuantAmount::ZeroOrMore
            } else if p.src.try_eat('+') {
                QuantAmount::OneOrMore
            } else if p.src.try_eat('?') {
                QuantAmount::ZeroOrOne
            } else if p.src.peek() == Some('{') {
                match p.lex_range()? {
                    Some(amount) => amount,
                    None => return Ok(None),
                }
            } else {
                return Ok(None);
            };
            let amount = Located::new(amount, p.src.span_from(amount_start));

            let kind_start = p.src.position();
            let kind = if p.src.try_eat('?') {
                QuantKind::Reluctant
            } else if p.src.try_eat('+') {
                QuantKind::Possessive
            } else {
                QuantKind::Eager
            };
            let kind = Located::new(kind, p.src.span_from(kind_start));

            Ok(Some((amount, kind)))
        })
    }

    /// The braced amount: `{n}`, `{n,}`, `{,m}`, `{n,m}`, and with the
    /// experimental-ranges dialect `{n...m}`, `{n..<m}`, `{...m}`, `{..<m}`.
    /// Half-open upper bounds are decremented. Returns `None` (cursor state
    /// is the caller's `try_eating` problem) for anything that is not a
    /// range, including whitespace in the traditional dialect.
    fn lex_range(&mut self) -> Result<Option<QuantAmount>> {
        let ranges = self.options.contains(SyntaxOptions::EXPERIMENTAL_RANGES);
        if !self.src.try_eat('{') {
            return Ok(None);
        }

        self.skip_range_whitespace();
        let lower = self.lex_optional_number(10)?;
        self.skip_range_whitespace();

        enum UpperForm {
            None,
            Comma,
            Closed,
            HalfOpen,
        }

        let form = if self.src.try_eat(',') {
            UpperForm::Comma
        } else if ranges && self.src.try_eat_seq("..<") {
            UpperForm::HalfOpen
        } else if ranges && self.src.try_eat_seq("...") {
            UpperForm::Closed
        } else {
            UpperForm::None
        };

        self.skip_range_whitespace();
        let upper = self.lex_optional_number(10)?;
        self.skip_range_whitespace();

        if !self.src.try_eat('}') {
            return Ok(None);
        }

        let lower_value = lower.map(|n| n.value);
        let upper_value = match (&form, upper.map(|n| n.value)) {
            (UpperForm::HalfOpen, Some(0)) => return Ok(None),
            (UpperForm::HalfOpen, Some(m)) => Some(m - 1),
            (UpperForm::HalfOpen, None) => return Ok(None),
            (_, upper) => upper,
        };

        let amount = match form {
            UpperForm::None => match (lower_value, upper_value) {
                (Some(n), None) => QuantAmount::Exactly(n),
                _ => return Ok(None),
            },
            UpperForm::Comma | UpperForm::Closed | UpperForm::HalfOpen => {
                match (lower_value, upper_value) {
                    (Some(n), Some(m)) => QuantAmount::Range(n, m),
                    (Some(n), None) => QuantAmount::NOrMore(n),
                    (None, Some(m)) => QuantAmount::UpToN(m),
                    (None, None) => return Ok(None),
                }
            }
        };
        Ok(Some(amount))
    }

    /// Whitespace inside `{...}` is tolerated only in the experimental-ranges
    /// dialect; elsewhere its presence makes the braces literal.
    fn skip_range_whitespace(&mut self) {
        if self.options.contains(SyntaxOptions::EXPERIMENTAL_RANGES) {
            self.src.eat_while(|c| c == ' ' || c == '\t');
        }
    }
}

//! The custom-character-class sub-parser.
//!
//! Alternation, groups, quantifiers and trivia do not exist in here; members
//! are atoms, ranges, nested classes, POSIX classes, quotes, and set
//! operations. A `]` outside any class never reaches this module (it lexes
//! as a literal atom).

use silk_ast::{
    Ast, Atom, AtomKind, ClassMember, ClassRange, ClassStart, CustomCharacterClass, Located, SetOp,
};

use crate::diagnostics::{ParseErrorKind, Result};
use crate::parser::Parser;

impl Parser<'_> {
    /// `[` or `[^`, members, `]`.
    pub(crate) fn parse_custom_character_class(&mut self) -> Result<Ast> {
        let start = self.src.position();
        self.src.eat(); // '['
        let marker = if self.src.try_eat('^') {
            ClassStart::Inverted
        } else {
            ClassStart::Normal
        };
        let marker = Located::new(marker, self.src.span_from(start));
        let class = self.parse_class_body(marker, start)?;
        Ok(Ast::CustomCharacterClass(class))
    }

    /// Members until the matching `]`. Set operators split the surrounding
    /// member runs; chains fold left, so `[a&&b~~c]` is `((a ∩ b) ⊕ c)`.
    fn parse_class_body(
        &mut self,
        marker: Located<ClassStart>,
        start: usize,
    ) -> Result<CustomCharacterClass> {
        self.class_depth += 1;

        let mut runs: Vec<Vec<ClassMember>> = vec![Vec::new()];
        let mut ops: Vec<Located<SetOp>> = Vec::new();

        loop {
            if self.src.is_empty() {
                return self.err_here(ParseErrorKind::UnexpectedEndOfInput);
            }
            if self.src.try_eat(']') {
                break;
            }

            // Extra-extended mode skips whitespace inside classes; nothing is
            // recorded since classes carry no trivia.
            if self.skips_whitespace(true)
                && !self
                    .src
                    .eat_while(|c| matches!(c, ' ' | '\t' | '\r' | '\n'))
                    .is_empty()
            {
                continue;
            }

            let run_has_members = !runs.last().expect("one run").is_empty();
            if run_has_members {
                if let Some(op) = self.lex_set_operator() {
                    ops.push(op);
                    runs.push(Vec::new());
                    continue;
                }
            }

            let member = self.parse_class_member()?;
            runs.last_mut().expect("one run").push(member);
        }

        self.class_depth -= 1;
        let span = self.src.span_from(start);

        let mut runs = runs.into_iter();
        let mut members = runs.next().expect("one run");
        for (op, rhs) in ops.into_iter().zip(runs) {
            if rhs.is_empty() {
                return self.err(ParseErrorKind::ExpectedNonEmptyContents, op.span);
            }
            members = vec![ClassMember::SetOperation {
                lhs: members,
                op,
                rhs,
            }];
        }

        if members.is_empty() {
            return self.err(ParseErrorKind::ExpectedNonEmptyContents, span);
        }
        Ok(CustomCharacterClass {
            start: marker,
            members,
            span,
        })
    }

    fn lex_set_operator(&mut self) -> Option<Located<SetOp>> {
        let start = self.src.position();
        let op = if self.src.try_eat_seq("&&") {
            SetOp::Intersection
        } else if self.src.try_eat_seq("--") {
            SetOp::Subtraction
        } else if self.src.try_eat_seq("~~") {
            SetOp::SymmetricDifference
        } else {
            return None;
        };
        Some(Located::new(op, self.src.span_from(start)))
    }

    fn parse_class_member(&mut self) -> Result<ClassMember> {
        // POSIX classes look like nested classes; only a `:]` terminator
        // decides, so this is a transactional attempt.
        if self.src.starts_with("[:") {
            if let Some(atom) = self.try_eating(|p| p.lex_posix_class())? {
                return Ok(ClassMember::Atom(atom));
            }
        }

        if self.src.peek() == Some('[') {
            let start = self.src.position();
            self.src.eat();
            let marker = if self.src.try_eat('^') {
                ClassStart::Inverted
            } else {
                ClassStart::Normal
            };
            let marker = Located::new(marker, self.src.span_from(start));
            let nested = self.parse_class_body(marker, start)?;
            return Ok(ClassMember::Custom(nested));
        }

        if self.src.starts_with("\\Q") {
            let quote = self.lex_quote()?.expect("starts with \\Q");
            return Ok(ClassMember::Quote(quote));
        }

        let lhs = self.lex_class_atom()?;
        if self.at_range_dash() {
            let dash_start = self.src.position();
            self.src.eat();
            let dash = self.src.span_from(dash_start);
            let rhs = self.lex_class_atom()?;
            let span = lhs.span.union(rhs.span);
            return Ok(ClassMember::Range(ClassRange {
                lhs,
                dash,
                rhs,
                span,
            }));
        }
        Ok(ClassMember::Atom(lhs))
    }

    /// A `-` forms a range only when both endpoints exist: not before `]`,
    /// not part of the `--` operator, not followed by a set operator or a
    /// nested class.
    fn at_range_dash(&self) -> bool {
        self.src.peek() == Some('-')
            && !self.src.starts_with("-]")
            && !self.src.starts_with("--")
            && !self.src.starts_with("-&&")
            && !self.src.starts_with("-~~")
            && self.src.peek_at(1).is_some_and(|c| c != '[')
    }

    /// An atom in class position: an escape from the class-local subset, or
    /// any single literal character.
    fn lex_class_atom(&mut self) -> Result<Atom> {
        let start = self.src.position();
        if self.src.try_eat('\\') {
            return self.lex_escaped_atom(start, true);
        }
        let c = self.eat_or_end()?;
        Ok(Atom::new(AtomKind::Char(c), self.src.span_from(start)))
    }
}

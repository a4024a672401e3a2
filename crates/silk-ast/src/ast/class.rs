//! Custom character classes: `[...]`, ranges, nesting, set operators.

use std::fmt;

use crate::ast::atom::Atom;
use crate::ast::Quote;
use crate::span::{Located, Span};

/// A bracketed character set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomCharacterClass {
    pub start: Located<ClassStart>,
    pub members: Vec<ClassMember>,
    pub span: Span,
}

impl CustomCharacterClass {
    pub fn is_inverted(&self) -> bool {
        self.start.value == ClassStart::Inverted
    }
}

/// `[` vs `[^`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassStart {
    Normal,
    Inverted,
}

/// One member of a character class.
///
/// Alternation, groups, quantification and trivia never appear here; the
/// class sub-parser does not produce them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassMember {
    Atom(Atom),
    Range(ClassRange),
    /// Classes nest: `[a[bc]]`.
    Custom(CustomCharacterClass),
    /// `\Q...\E` inside a class.
    Quote(Quote),
    /// `lhs && rhs` and friends; operators are left-associative with equal
    /// precedence, so chains nest into the lhs.
    SetOperation {
        lhs: Vec<ClassMember>,
        op: Located<SetOp>,
        rhs: Vec<ClassMember>,
    },
}

impl ClassMember {
    pub fn span(&self) -> Span {
        match self {
            ClassMember::Atom(a) => a.span,
            ClassMember::Range(r) => r.span,
            ClassMember::Custom(c) => c.span,
            ClassMember::Quote(q) => q.span,
            ClassMember::SetOperation { lhs, op, rhs } => {
                let mut span = op.span;
                if let Some(first) = lhs.first() {
                    span = span.union(first.span());
                }
                if let Some(last) = rhs.last() {
                    span = span.union(last.span());
                }
                span
            }
        }
    }
}

/// `A-B`. Both endpoints are atoms; semantic validity (ordering, single
/// codepoints) is the consumer's concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassRange {
    pub lhs: Atom,
    /// Location of the `-`.
    pub dash: Span,
    pub rhs: Atom,
    pub span: Span,
}

/// Binary set operators recognized only inside a class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetOp {
    /// `&&`
    Intersection,
    /// `--`
    Subtraction,
    /// `~~`
    SymmetricDifference,
}

impl SetOp {
    pub fn token(self) -> &'static str {
        match self {
            SetOp::Intersection => "&&",
            SetOp::Subtraction => "--",
            SetOp::SymmetricDifference => "~~",
        }
    }
}

impl fmt::Display for SetOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SetOp::Intersection => "intersection",
            SetOp::Subtraction => "subtraction",
            SetOp::SymmetricDifference => "symmetric-difference",
        })
    }
}

//! Span shifting for patterns embedded in larger literals.

use super::atom::{Atom, AtomKind};
use super::class::{ClassMember, CustomCharacterClass};
use super::{Ast, GroupKind};

impl Ast {
    /// Shift every span in the tree right by `offset`. Used after parsing a
    /// delimited literal so locations point into the full input.
    pub fn offset_spans(&mut self, offset: usize) {
        match self {
            Ast::Alternation(alt) => {
                alt.span = alt.span.offset(offset);
                for pipe in &mut alt.pipes {
                    *pipe = pipe.offset(offset);
                }
                for child in &mut alt.children {
                    child.offset_spans(offset);
                }
            }
            Ast::Concatenation(concat) => {
                concat.span = concat.span.offset(offset);
                for child in &mut concat.children {
                    child.offset_spans(offset);
                }
            }
            Ast::Group(group) => {
                group.span = group.span.offset(offset);
                group.kind.span = group.kind.span.offset(offset);
                match &mut group.kind.value {
                    GroupKind::NamedCapture(name) => name.span = name.span.offset(offset),
                    GroupKind::ChangeMatchingOptions { sequence, .. } => {
                        if let Some(caret) = &mut sequence.caret {
                            *caret = caret.offset(offset);
                        }
                        if let Some(minus) = &mut sequence.minus {
                            *minus = minus.offset(offset);
                        }
                        for opt in sequence.adding.iter_mut().chain(&mut sequence.removing) {
                            opt.span = opt.span.offset(offset);
                        }
                    }
                    _ => {}
                }
                group.child.offset_spans(offset);
            }
            Ast::Quantification(quant) => {
                quant.span = quant.span.offset(offset);
                quant.amount.span = quant.amount.span.offset(offset);
                quant.kind.span = quant.kind.span.offset(offset);
                quant.child.offset_spans(offset);
            }
            Ast::Quote(quote) => quote.span = quote.span.offset(offset),
            Ast::Trivia(trivia) => trivia.span = trivia.span.offset(offset),
            Ast::Atom(atom) => offset_atom(atom, offset),
            Ast::CustomCharacterClass(class) => offset_class(class, offset),
            Ast::Empty(span) => *span = span.offset(offset),
        }
    }
}

fn offset_atom(atom: &mut Atom, offset: usize) {
    atom.span = atom.span.offset(offset);
    match &mut atom.kind {
        AtomKind::Backreference(reference) | AtomKind::Subpattern(reference) => {
            reference.span = reference.span.offset(offset);
        }
        _ => {}
    }
}

fn offset_class(class: &mut CustomCharacterClass, offset: usize) {
    class.span = class.span.offset(offset);
    class.start.span = class.start.span.offset(offset);
    for member in &mut class.members {
        offset_member(member, offset);
    }
}

fn offset_member(member: &mut ClassMember, offset: usize) {
    match member {
        ClassMember::Atom(atom) => offset_atom(atom, offset),
        ClassMember::Range(range) => {
            range.span = range.span.offset(offset);
            range.dash = range.dash.offset(offset);
            offset_atom(&mut range.lhs, offset);
            offset_atom(&mut range.rhs, offset);
        }
        ClassMember::Custom(inner) => offset_class(inner, offset),
        ClassMember::Quote(quote) => quote.span = quote.span.offset(offset),
        ClassMember::SetOperation { lhs, op, rhs } => {
            op.span = op.span.offset(offset);
            for m in lhs.iter_mut().chain(rhs) {
                offset_member(m, offset);
            }
        }
    }
}

//! Stable textual dump of the AST, for diagnostics and snapshot tests.
//!
//! One node per line, two-space indentation, span at the end of each line.
//! The format is part of the crate's test surface; change it deliberately.

use std::fmt::Write;

use super::atom::{Atom, AtomKind};
use super::class::{ClassMember, ClassStart, CustomCharacterClass};
use super::{Ast, GroupKind, QuantAmount, QuantKind};
use crate::span::Span;

impl Ast {
    /// Render the tree in the stable dump format.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.dump_into(&mut out, 0);
        // Snapshots read better without a trailing newline.
        if out.ends_with('\n') {
            out.pop();
        }
        out
    }

    fn dump_into(&self, out: &mut String, depth: usize) {
        indent(out, depth);
        match self {
            Ast::Alternation(a) => {
                line(out, "alternation", a.span);
                for child in &a.children {
                    child.dump_into(out, depth + 1);
                }
            }
            Ast::Concatenation(c) => {
                line(out, "concatenation", c.span);
                for child in &c.children {
                    child.dump_into(out, depth + 1);
                }
            }
            Ast::Group(g) => {
                let kind = match &g.kind.value {
                    GroupKind::Capture => "capture".to_string(),
                    GroupKind::NamedCapture(name) => format!("named-capture `{}`", name.value),
                    GroupKind::NonCapture => "non-capture".to_string(),
                    GroupKind::NonCaptureReset => "non-capture-reset".to_string(),
                    GroupKind::Atomic => "atomic".to_string(),
                    GroupKind::Lookahead => "lookahead".to_string(),
                    GroupKind::NegativeLookahead => "negative-lookahead".to_string(),
                    GroupKind::NonAtomicLookahead => "non-atomic-lookahead".to_string(),
                    GroupKind::Lookbehind => "lookbehind".to_string(),
                    GroupKind::NegativeLookbehind => "negative-lookbehind".to_string(),
                    GroupKind::NonAtomicLookbehind => "non-atomic-lookbehind".to_string(),
                    GroupKind::ScriptRun => "script-run".to_string(),
                    GroupKind::AtomicScriptRun => "atomic-script-run".to_string(),
                    GroupKind::ChangeMatchingOptions { sequence, isolated } => {
                        if *isolated {
                            format!("change-options `{sequence}` (isolated)")
                        } else {
                            format!("change-options `{sequence}`")
                        }
                    }
                };
                line(out, &format!("group {kind}"), g.span);
                g.child.dump_into(out, depth + 1);
            }
            Ast::Quantification(q) => {
                let amount = match q.amount.value {
                    QuantAmount::ZeroOrMore => "zero-or-more".to_string(),
                    QuantAmount::OneOrMore => "one-or-more".to_string(),
                    QuantAmount::ZeroOrOne => "zero-or-one".to_string(),
                    QuantAmount::Exactly(n) => format!("exactly {n}"),
                    QuantAmount::NOrMore(n) => format!("{n}-or-more"),
                    QuantAmount::UpToN(m) => format!("up-to {m}"),
                    QuantAmount::Range(n, m) => format!("{n}-to-{m}"),
                };
                let kind = match q.kind.value {
                    QuantKind::Eager => "eager",
                    QuantKind::Reluctant => "reluctant",
                    QuantKind::Possessive => "possessive",
                };
                line(out, &format!("quantified {amount} {kind}"), q.span);
                q.child.dump_into(out, depth + 1);
            }
            Ast::Quote(q) => line(out, &format!("quote {:?}", q.literal), q.span),
            Ast::Trivia(t) => line(out, &format!("trivia {:?}", t.text), t.span),
            Ast::Atom(atom) => dump_atom(out, atom),
            Ast::CustomCharacterClass(class) => {
                dump_class(out, class, depth);
            }
            Ast::Empty(span) => line(out, "empty", *span),
        }
    }
}

fn dump_atom(out: &mut String, atom: &Atom) {
    let text = match &atom.kind {
        AtomKind::Char(c) => format!("char {c:?}"),
        AtomKind::Scalar(c) => format!("scalar U+{:04X}", *c as u32),
        AtomKind::Dot => "dot".to_string(),
        AtomKind::StartOfLine => "start-of-line".to_string(),
        AtomKind::EndOfLine => "end-of-line".to_string(),
        AtomKind::EscapedBuiltin(b) => format!("builtin {b}"),
        AtomKind::NamedCharacter(name) => format!("named-char `{name}`"),
        AtomKind::Property(p) => {
            let mut s = String::from("property ");
            if p.inverted {
                s.push('!');
            }
            let _ = write!(s, "{}", p.kind);
            if p.is_posix {
                s.push_str(" (posix)");
            }
            s
        }
        AtomKind::Backreference(r) => format!("backref {}", r.kind),
        AtomKind::Subpattern(r) => format!("subpattern {}", r.kind),
        AtomKind::KeyboardControl(c) => format!("control {c:?}"),
        AtomKind::KeyboardMeta(c) => format!("meta {c:?}"),
        AtomKind::KeyboardMetaControl(c) => format!("meta-control {c:?}"),
    };
    line(out, &text, atom.span);
}

fn dump_class(out: &mut String, class: &CustomCharacterClass, depth: usize) {
    let start = match class.start.value {
        ClassStart::Normal => "class",
        ClassStart::Inverted => "class inverted",
    };
    line(out, start, class.span);
    for member in &class.members {
        dump_member(out, member, depth + 1);
    }
}

fn dump_member(out: &mut String, member: &ClassMember, depth: usize) {
    indent(out, depth);
    match member {
        ClassMember::Atom(atom) => dump_atom(out, atom),
        ClassMember::Range(range) => {
            line(out, "range", range.span);
            indent(out, depth + 1);
            dump_atom(out, &range.lhs);
            indent(out, depth + 1);
            dump_atom(out, &range.rhs);
        }
        ClassMember::Custom(inner) => dump_class(out, inner, depth),
        ClassMember::Quote(q) => line(out, &format!("quote {:?}", q.literal), q.span),
        ClassMember::SetOperation { lhs, op, rhs } => {
            line(out, &format!("set-op {}", op.value), member.span());
            indent(out, depth + 1);
            out.push_str("lhs\n");
            for m in lhs {
                dump_member(out, m, depth + 2);
            }
            indent(out, depth + 1);
            out.push_str("rhs\n");
            for m in rhs {
                dump_member(out, m, depth + 2);
            }
        }
    }
}

fn indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str("  ");
    }
}

fn line(out: &mut String, text: &str, span: Span) {
    let _ = writeln!(out, "{text} [{span}]");
}

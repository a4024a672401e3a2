//! Backreferences, subpattern calls, and octal disambiguation.

use silk_ast::{Ast, AtomKind, RefKind};

use super::{ast, dump};

fn last_atom_kind(pattern: &str) -> AtomKind {
    let parsed = ast(pattern);
    let node = match &parsed {
        Ast::Concatenation(concat) => concat.children.last().expect("children"),
        other => other,
    };
    match node {
        Ast::Atom(atom) => atom.kind.clone(),
        other => panic!("expected atom, got:\n{}", other.dump()),
    }
}

#[test]
fn single_digit_is_always_a_backreference() {
    assert_eq!(
        last_atom_kind(r"\3"),
        AtomKind::Backreference(silk_ast::Reference::new(
            RefKind::Absolute(3),
            silk_ast::Span::new(1, 2)
        ))
    );
    // `8` and `9` are not octal digits, so they stay references too.
    assert!(matches!(
        last_atom_kind(r"\89"),
        AtomKind::Backreference(r) if r.kind == RefKind::Absolute(89)
    ));
}

#[test]
fn two_digit_escape_without_enough_groups_is_octal() {
    insta::assert_snapshot!(dump(r"()()\10"), @r"
    concatenation [0..7]
      group capture [0..2]
        empty [1..1]
      group capture [2..4]
        empty [3..3]
      scalar U+0008 [4..7]
    ");
}

#[test]
fn two_digit_escape_with_enough_groups_is_a_backreference() {
    let pattern = r"()()()()()()()()()()\10";
    let Ast::Concatenation(concat) = ast(pattern) else {
        panic!("expected concatenation");
    };
    assert_eq!(concat.children.len(), 11);
    let Ast::Atom(atom) = concat.children.last().expect("children") else {
        panic!("expected atom");
    };
    assert!(matches!(
        &atom.kind,
        AtomKind::Backreference(r) if r.kind == RefKind::Absolute(10)
    ));
}

#[test]
fn octal_takes_at_most_three_digits() {
    // `\118` with no groups: octal `11`, then a literal `8`.
    insta::assert_snapshot!(dump(r"\118"), @r"
    concatenation [0..4]
      scalar U+0009 [0..3]
      char '8' [3..4]
    ");
}

#[test]
fn g_escape_forms() {
    assert!(matches!(
        last_atom_kind(r"\g2"),
        AtomKind::Backreference(r) if r.kind == RefKind::Absolute(2)
    ));
    assert!(matches!(
        last_atom_kind(r"\g+2"),
        AtomKind::Backreference(r) if r.kind == RefKind::Relative(2)
    ));
    assert!(matches!(
        last_atom_kind(r"\g{-1}"),
        AtomKind::Backreference(r) if r.kind == RefKind::Relative(-1)
    ));
    assert!(matches!(
        last_atom_kind(r"\g{name}"),
        AtomKind::Backreference(r) if r.kind == RefKind::Named("name".to_string())
    ));
    // Delimited `\g` forms are subpattern calls.
    assert!(matches!(
        last_atom_kind(r"\g<name>"),
        AtomKind::Subpattern(r) if r.kind == RefKind::Named("name".to_string())
    ));
    assert!(matches!(
        last_atom_kind(r"\g'2'"),
        AtomKind::Subpattern(r) if r.kind == RefKind::Absolute(2)
    ));
}

#[test]
fn k_escape_forms_are_backreferences() {
    for pattern in [r"\k<name>", r"\k'name'", r"\k{name}"] {
        assert!(matches!(
            last_atom_kind(pattern),
            AtomKind::Backreference(r) if r.kind == RefKind::Named("name".to_string())
        ));
    }
    assert!(matches!(
        last_atom_kind(r"\k<2>"),
        AtomKind::Backreference(r) if r.kind == RefKind::Absolute(2)
    ));
}

#[test]
fn group_like_references() {
    insta::assert_snapshot!(dump("(?P=x)"), @r"backref x [0..6]");
    insta::assert_snapshot!(dump("(?P>x)"), @r"subpattern x [0..6]");
    insta::assert_snapshot!(dump("(?&x)"), @r"subpattern x [0..5]");
    insta::assert_snapshot!(dump("(?R)"), @r"subpattern R [0..4]");
    insta::assert_snapshot!(dump("(?2)"), @r"subpattern 2 [0..4]");
    insta::assert_snapshot!(dump("(?+1)"), @r"subpattern +1 [0..5]");
    insta::assert_snapshot!(dump("(?-2)"), @r"subpattern -2 [0..5]");
}

#[test]
fn option_group_is_not_a_relative_reference() {
    // `(?-i:...)` must lex as an option-removing group, not `(?-...)`.
    insta::assert_snapshot!(dump("(?-i:a)"), @r"
    group change-options `-i` [0..7]
      char 'a' [5..6]
    ");
}

#[test]
fn disambiguation_is_stable_for_leading_zero() {
    // A leading zero is octal no matter how many groups exist.
    let parsed = ast(r"()()()()()()()()()()\010");
    let Ast::Concatenation(concat) = parsed else {
        panic!("expected concatenation");
    };
    let Ast::Atom(atom) = concat.children.last().expect("children") else {
        panic!("expected atom");
    };
    assert_eq!(atom.kind, AtomKind::Scalar('\u{8}'));
}

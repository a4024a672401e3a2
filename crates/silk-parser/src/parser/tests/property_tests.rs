//! Character-property predicates and POSIX classes.

use silk_ast::{Ast, AtomKind, PropertyKind};

use super::{ast, dump, parse_err};
use crate::diagnostics::ParseErrorKind;

fn property_kind(pattern: &str) -> PropertyKind {
    match ast(pattern) {
        Ast::Atom(atom) => match atom.kind {
            AtomKind::Property(p) => p.kind,
            other => panic!("expected property atom, got {other:?}"),
        },
        other => panic!("expected a single atom, got:\n{}", other.dump()),
    }
}

#[test]
fn general_categories() {
    insta::assert_snapshot!(dump(r"\p{Lu}"), @r"property gc=Lu [0..6]");
    insta::assert_snapshot!(dump(r"\p{Uppercase_Letter}"), @r"property gc=Lu [0..20]");
    insta::assert_snapshot!(dump(r"\p{gc=Nd}"), @r"property gc=Nd [0..9]");
}

#[test]
fn inverted_properties() {
    insta::assert_snapshot!(dump(r"\P{Greek}"), @r"property !sc=Greek [0..9]");
}

#[test]
fn scripts_with_loose_matching() {
    // UAX44-LM3: case-insensitive, separators dropped, `is` prefix allowed.
    insta::assert_snapshot!(dump(r"\p{sc=isGreek}"), @r"property sc=Greek [0..14]");
    assert_eq!(
        property_kind(r"\p{script=GREEK}"),
        PropertyKind::Script("Greek".to_string())
    );
    assert_eq!(
        property_kind(r"\p{scx=Han}"),
        PropertyKind::ScriptExtensions("Han".to_string())
    );
}

#[test]
fn binary_and_special_values() {
    assert_eq!(
        property_kind(r"\p{White_Space}"),
        PropertyKind::Binary("White_Space".to_string())
    );
    assert_eq!(property_kind(r"\p{Any}"), PropertyKind::Any);
    assert_eq!(property_kind(r"\p{ASCII}"), PropertyKind::Ascii);
    assert_eq!(property_kind(r"\p{assigned}"), PropertyKind::Assigned);
}

#[test]
fn unknown_properties_are_preserved() {
    assert_eq!(
        property_kind(r"\p{fizzbuzz}"),
        PropertyKind::Other {
            key: None,
            value: "fizzbuzz".to_string()
        }
    );
    assert_eq!(
        property_kind(r"\p{vims=on}"),
        PropertyKind::Other {
            key: Some("vims".to_string()),
            value: "on".to_string()
        }
    );
}

#[test]
fn blocks_and_names_pass_through() {
    assert_eq!(
        property_kind(r"\p{blk=Basic_Latin}"),
        PropertyKind::Block("Basic_Latin".to_string())
    );
    assert_eq!(
        property_kind(r"\p{name=LATIN SMALL LETTER A}"),
        PropertyKind::Name("LATIN SMALL LETTER A".to_string())
    );
}

#[test]
fn posix_classes_inside_character_classes() {
    insta::assert_snapshot!(dump("[[:alnum:]]"), @r"
    class [0..11]
      property alnum (posix) [1..10]
    ");
    insta::assert_snapshot!(dump("[[:^space:]]"), @r"
    class [0..12]
      property !space (posix) [1..11]
    ");
}

#[test]
fn empty_property_body_is_an_error() {
    assert_eq!(
        parse_err(r"\p{}").kind,
        ParseErrorKind::ExpectedNonEmptyContents
    );
}

#[test]
fn property_requires_braces() {
    assert_eq!(
        parse_err(r"\pL").kind,
        ParseErrorKind::Expected("{".to_string())
    );
}

//! Escape sequences: scalars, builtins, named characters, keyboard forms.

use silk_ast::{Ast, AtomKind};

use super::{ast, dump, parse_err};
use crate::diagnostics::ParseErrorKind;

fn atom_kind(pattern: &str) -> AtomKind {
    match ast(pattern) {
        Ast::Atom(atom) => atom.kind,
        other => panic!("expected a single atom, got:\n{}", other.dump()),
    }
}

#[test]
fn scalar_notations() {
    insta::assert_snapshot!(dump("\\u0065"), @r"scalar U+0065 [0..6]");
    insta::assert_snapshot!(dump(r"\u{41}"), @r"scalar U+0041 [0..6]");
    insta::assert_snapshot!(dump(r"\x41"), @r"scalar U+0041 [0..4]");
    insta::assert_snapshot!(dump(r"\x{1F600}"), @r"scalar U+1F600 [0..9]");
    insta::assert_snapshot!(dump(r"\101"), @r"scalar U+0041 [0..4]");
    insta::assert_snapshot!(dump(r"\U00000041"), @r"scalar U+0041 [0..10]");
    insta::assert_snapshot!(dump(r"\o{101}"), @r"scalar U+0041 [0..7]");
    insta::assert_snapshot!(dump(r"\N{U+41}"), @r"scalar U+0041 [0..8]");
}

#[test]
fn bare_hex_without_digits_is_nul() {
    insta::assert_snapshot!(dump(r"\x"), @r"scalar U+0000 [0..2]");
    insta::assert_snapshot!(dump(r"\xF"), @r"scalar U+000F [0..3]");
}

#[test]
fn cosmetically_different_spellings_are_equal_atoms() {
    let spellings = [r"\u{41}", r"\x41", r"\101", r"\U00000041", r"\o{101}", "A"];
    for spelling in spellings {
        assert_eq!(
            atom_kind(spelling),
            AtomKind::Char('A'),
            "{spelling} should denote U+0041"
        );
    }
}

#[test]
fn leading_zero_octal_takes_three_digits() {
    // `\0707` is U+0038 followed by a literal 7.
    insta::assert_snapshot!(dump(r"\0707"), @r"
    concatenation [0..5]
      scalar U+0038 [0..4]
      char '7' [4..5]
    ");
}

#[test]
fn named_characters() {
    insta::assert_snapshot!(dump(r"\N{DEGREE SIGN}"), @r"named-char `DEGREE SIGN` [0..15]");
    // Bare `\N` is the not-a-newline builtin.
    insta::assert_snapshot!(dump(r"\N"), @r"builtin \N [0..2]");
}

#[test]
fn builtin_escapes() {
    insta::assert_snapshot!(dump(r"\d\S\w"), @r"
    concatenation [0..6]
      builtin \d [0..2]
      builtin \S [2..4]
      builtin \w [4..6]
    ");
    insta::assert_snapshot!(dump(r"\b\A\z"), @r"
    concatenation [0..6]
      builtin \b [0..2]
      builtin \A [2..4]
      builtin \z [4..6]
    ");
}

#[test]
fn escaped_metacharacters_are_literal() {
    insta::assert_snapshot!(dump(r"\*\("), @r"
    concatenation [0..4]
      char '*' [0..2]
      char '(' [2..4]
    ");
}

#[test]
fn keyboard_escapes() {
    insta::assert_snapshot!(dump(r"\cA"), @r"control 'A' [0..3]");
    insta::assert_snapshot!(dump(r"\C-A"), @r"control 'A' [0..4]");
    insta::assert_snapshot!(dump(r"\M-a"), @r"meta 'a' [0..4]");
    insta::assert_snapshot!(dump(r"\M-\C-a"), @r"meta-control 'a' [0..7]");
}

#[test]
fn keyboard_operand_must_be_ascii() {
    let err = parse_err(r"\cé");
    assert_eq!(err.kind, ParseErrorKind::ExpectedAscii('é'));
    assert_eq!(err.span, silk_ast::Span::new(2, 4));
}

#[test]
fn scalar_errors() {
    assert_eq!(
        parse_err(r"\u{}").kind,
        ParseErrorKind::ExpectedNumber {
            text: String::new(),
            radix: 16
        }
    );
    assert_eq!(
        parse_err(r"\u12").kind,
        ParseErrorKind::ExpectedNumDigits {
            text: "12".to_string(),
            expected: 4
        }
    );
    assert_eq!(
        parse_err(r"\u{110000}").kind,
        ParseErrorKind::InvalidScalar(0x110000)
    );
    // Surrogates are not scalars.
    assert_eq!(
        parse_err(r"\u{D800}").kind,
        ParseErrorKind::InvalidScalar(0xD800)
    );
    assert_eq!(
        parse_err(r"\u{FFFFFFFFF}").kind,
        ParseErrorKind::NumberOverflow("FFFFFFFFF".to_string())
    );
}

#[test]
fn meaningless_letter_escapes_are_errors() {
    assert_eq!(
        parse_err(r"\i").kind,
        ParseErrorKind::Misc("invalid escape sequence `\\i`".to_string())
    );
}

#[test]
fn trailing_backslash_is_an_error() {
    let err = parse_err("a\\");
    assert_eq!(err.kind, ParseErrorKind::UnexpectedEndOfInput);
    assert_eq!(err.span, silk_ast::Span::empty(2));
}

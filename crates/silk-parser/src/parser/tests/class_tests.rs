//! Custom character classes: members, ranges, nesting, set operators.

use super::{dump, parse_err};
use crate::diagnostics::ParseErrorKind;

#[test]
fn simple_members() {
    insta::assert_snapshot!(dump("[abc]"), @r"
    class [0..5]
      char 'a' [1..2]
      char 'b' [2..3]
      char 'c' [3..4]
    ");
    insta::assert_snapshot!(dump("[^ab]"), @r"
    class inverted [0..5]
      char 'a' [2..3]
      char 'b' [3..4]
    ");
}

#[test]
fn ranges() {
    insta::assert_snapshot!(dump("[a-z]"), @r"
    class [0..5]
      range [1..4]
        char 'a' [1..2]
        char 'z' [3..4]
    ");
    insta::assert_snapshot!(dump("[a-cx-z]"), @r"
    class [0..8]
      range [1..4]
        char 'a' [1..2]
        char 'c' [3..4]
      range [4..7]
        char 'x' [4..5]
        char 'z' [6..7]
    ");
}

#[test]
fn literal_dashes() {
    insta::assert_snapshot!(dump("[-a]"), @r"
    class [0..4]
      char '-' [1..2]
      char 'a' [2..3]
    ");
    insta::assert_snapshot!(dump("[a-]"), @r"
    class [0..4]
      char 'a' [1..2]
      char '-' [2..3]
    ");
}

#[test]
fn escapes_in_classes() {
    insta::assert_snapshot!(dump(r"[\d\x41]"), @r"
    class [0..8]
      builtin \d [1..3]
      scalar U+0041 [3..7]
    ");
    // `\b` flips to backspace inside a class.
    insta::assert_snapshot!(dump(r"[\b]"), @r"
    class [0..4]
      builtin \b [1..3]
    ");
}

#[test]
fn nested_classes() {
    insta::assert_snapshot!(dump("[a[bc]d]"), @r"
    class [0..8]
      char 'a' [1..2]
      class [2..6]
        char 'b' [3..4]
        char 'c' [4..5]
      char 'd' [6..7]
    ");
}

#[test]
fn set_operators() {
    insta::assert_snapshot!(dump("[a-d--a-c]"), @r"
    class [0..10]
      set-op subtraction [1..9]
        lhs
          range [1..4]
            char 'a' [1..2]
            char 'd' [3..4]
        rhs
          range [6..9]
            char 'a' [6..7]
            char 'c' [8..9]
    ");
    insta::assert_snapshot!(dump("[a&&b]"), @r"
    class [0..6]
      set-op intersection [1..5]
        lhs
          char 'a' [1..2]
        rhs
          char 'b' [4..5]
    ");
}

#[test]
fn chained_operators_fold_left() {
    insta::assert_snapshot!(dump("[a&&b~~c]"), @r"
    class [0..9]
      set-op symmetric-difference [1..8]
        lhs
          set-op intersection [1..5]
            lhs
              char 'a' [1..2]
            rhs
              char 'b' [4..5]
        rhs
          char 'c' [7..8]
    ");
}

#[test]
fn single_punctuation_is_literal() {
    insta::assert_snapshot!(dump("[&~.^$]"), @r"
    class [0..7]
      char '&' [1..2]
      char '~' [2..3]
      char '.' [3..4]
      char '^' [4..5]
      char '$' [5..6]
    ");
}

#[test]
fn quote_members() {
    insta::assert_snapshot!(dump(r"[\Qab\E]"), @r#"
    class [0..8]
      quote "ab" [1..7]
    "#);
}

#[test]
fn closing_bracket_outside_class_is_literal() {
    insta::assert_snapshot!(dump("a]b"), @r"
    concatenation [0..3]
      char 'a' [0..1]
      char ']' [1..2]
      char 'b' [2..3]
    ");
}

#[test]
fn empty_class_is_an_error() {
    assert_eq!(
        parse_err("[]").kind,
        ParseErrorKind::ExpectedNonEmptyContents
    );
    assert_eq!(
        parse_err("[a&&]").kind,
        ParseErrorKind::ExpectedNonEmptyContents
    );
}

#[test]
fn unterminated_class_is_an_error() {
    let err = parse_err("[ab");
    assert_eq!(err.kind, ParseErrorKind::UnexpectedEndOfInput);
    assert_eq!(err.span, silk_ast::Span::empty(3));
}

#[test]
fn backreference_digits_are_octal_in_classes() {
    // No references inside classes: `\1` is the octal scalar U+0001.
    insta::assert_snapshot!(dump(r"()[\1]"), @r"
    concatenation [0..6]
      group capture [0..2]
        empty [1..1]
      class [2..6]
        scalar U+0001 [3..5]
    ");
}

//! Comments, quotes, and non-semantic whitespace.

use super::{dump, dump_with, parse_err, parse_err_with};
use crate::diagnostics::ParseErrorKind;
use crate::options::SyntaxOptions;

#[test]
fn inline_comments() {
    insta::assert_snapshot!(dump("a(?#note)b"), @r#"
    concatenation [0..10]
      char 'a' [0..1]
      trivia "(?#note)" [1..9]
      char 'b' [9..10]
    "#);
}

#[test]
fn unterminated_comment_is_an_error() {
    let err = parse_err("a(?#note");
    assert_eq!(err.kind, ParseErrorKind::UnexpectedEndOfInput);
}

#[test]
fn experimental_block_comments() {
    let opts = SyntaxOptions::EXPERIMENTAL_COMMENTS;
    insta::assert_snapshot!(dump_with("a/* note */b", opts), @r#"
    concatenation [0..12]
      char 'a' [0..1]
      trivia "/* note */" [1..11]
      char 'b' [11..12]
    "#);
    assert_eq!(
        parse_err_with("a/*b", opts).kind,
        ParseErrorKind::Expected("*/".to_string())
    );
}

#[test]
fn block_comments_are_literal_without_the_flag() {
    insta::assert_snapshot!(dump("a/*b"), @r"
    concatenation [0..4]
      char 'a' [0..1]
      quantified zero-or-more eager [1..3]
        char '/' [1..2]
      char 'b' [3..4]
    ");
}

#[test]
fn quotes() {
    insta::assert_snapshot!(dump(r"a\Qb*c\Ed"), @r#"
    concatenation [0..9]
      char 'a' [0..1]
      quote "b*c" [1..8]
      char 'd' [8..9]
    "#);
}

#[test]
fn unterminated_quote_runs_to_the_end() {
    insta::assert_snapshot!(dump(r"\Qab"), @r#"quote "ab" [0..4]"#);
}

#[test]
fn experimental_string_quotes() {
    let opts = SyntaxOptions::EXPERIMENTAL_QUOTES;
    insta::assert_snapshot!(dump_with(r#""a\"b""#, opts), @r#"quote "a\"b" [0..6]"#);
    assert_eq!(
        parse_err_with(r#""ab"#, opts).kind,
        ParseErrorKind::Expected("\"".to_string())
    );
}

#[test]
fn whitespace_mode_collapses_runs() {
    let opts = SyntaxOptions::IGNORE_WHITESPACE;
    insta::assert_snapshot!(dump_with("a  b", opts), @r#"
    concatenation [0..4]
      char 'a' [0..1]
      trivia "  " [1..3]
      char 'b' [3..4]
    "#);
}

#[test]
fn line_comments_in_whitespace_mode() {
    let opts = SyntaxOptions::IGNORE_WHITESPACE;
    insta::assert_snapshot!(dump_with("a# note\nb", opts), @r##"
    concatenation [0..9]
      char 'a' [0..1]
      trivia "# note" [1..7]
      trivia "\n" [7..8]
      char 'b' [8..9]
    "##);
}

#[test]
fn multiline_patterns_in_whitespace_mode() {
    let opts = SyntaxOptions::IGNORE_WHITESPACE;
    let pattern = indoc::indoc! {r"
        a # first
        b"};
    insta::assert_snapshot!(dump_with(pattern, opts), @r##"
    concatenation [0..11]
      char 'a' [0..1]
      trivia " " [1..2]
      trivia "# first" [2..9]
      trivia "\n" [9..10]
      char 'b' [10..11]
    "##);
}

#[test]
fn quantifier_may_follow_whitespace_in_whitespace_mode() {
    let opts = SyntaxOptions::IGNORE_WHITESPACE;
    insta::assert_snapshot!(dump_with("a *", opts), @r"
    quantified zero-or-more eager [0..3]
      char 'a' [0..1]
    ");
}

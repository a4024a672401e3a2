//! Error locations and the no-recovery contract.

use silk_ast::Span;

use super::parse_err;
use crate::diagnostics::ParseErrorKind;

#[test]
fn unclosed_group_points_past_the_paren() {
    let err = parse_err("(");
    assert_eq!(err.kind, ParseErrorKind::UnexpectedEndOfInput);
    assert_eq!(err.span, Span::empty(1));
}

#[test]
fn unclosed_group_with_contents() {
    let err = parse_err("(ab");
    assert_eq!(err.kind, ParseErrorKind::UnexpectedEndOfInput);
    assert_eq!(err.span, Span::empty(3));
}

#[test]
fn unmatched_closing_paren() {
    let err = parse_err("ab)c");
    assert_eq!(
        err.kind,
        ParseErrorKind::Misc("unmatched closing parenthesis".to_string())
    );
    assert_eq!(err.span, Span::new(2, 3));
}

#[test]
fn leading_quantifier_has_no_operand() {
    let err = parse_err("*a");
    assert_eq!(err.kind, ParseErrorKind::QuantifierWithoutOperand);
    assert_eq!(err.span, Span::new(0, 1));
}

#[test]
fn quantifier_after_quantifier() {
    let err = parse_err("a**");
    assert_eq!(err.kind, ParseErrorKind::QuantifierWithoutOperand);
    assert_eq!(err.span, Span::new(2, 3));
}

#[test]
fn quantifier_after_comment() {
    let err = parse_err("a(?#note)*");
    assert_eq!(err.kind, ParseErrorKind::QuantifierWithoutOperand);
    assert_eq!(err.span, Span::new(9, 10));
}

#[test]
fn quantifier_after_quote() {
    let err = parse_err(r"\Qab\E+");
    assert_eq!(err.kind, ParseErrorKind::QuantifierWithoutOperand);
    assert_eq!(err.span, Span::new(6, 7));
}

#[test]
fn quantifier_at_branch_start() {
    let err = parse_err("a|?b");
    assert_eq!(err.kind, ParseErrorKind::QuantifierWithoutOperand);
    assert_eq!(err.span, Span::new(2, 3));
}

#[test]
fn first_error_wins() {
    // Both the `\u{}` and the trailing `(` are wrong; the earlier one
    // surfaces.
    let err = parse_err(r"\u{}(");
    assert_eq!(
        err.kind,
        ParseErrorKind::ExpectedNumber {
            text: String::new(),
            radix: 16
        }
    );
    assert_eq!(err.span, Span::empty(3));
}

#[test]
fn errors_render_with_carets() {
    let err = parse_err("(?^-i:)");
    let rendered = err.render("(?^-i:)").render();
    assert!(
        rendered.contains("cannot remove options"),
        "unexpected rendering:\n{rendered}"
    );
}

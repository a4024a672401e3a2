//! Debug-only structural checks on freshly parsed trees.

#![cfg_attr(coverage_nightly, coverage(off))]

use silk_ast::{Ast, Span};

/// Assert the structural invariants of a successful parse: every span lies
/// within the input, parents enclose children, and alternations carry one
/// pipe fewer than branches.
pub(crate) fn validate(ast: &Ast, input_len: usize) {
    let bounds = Span::new(0, input_len);
    validate_node(ast, bounds);
}

fn validate_node(ast: &Ast, bounds: Span) {
    let span = ast.span();
    assert!(
        bounds.contains(span),
        "node span {span} escapes {bounds}"
    );

    if let Ast::Alternation(alt) = ast {
        assert!(alt.children.len() >= 2, "alternation with <2 branches");
        assert_eq!(
            alt.pipes.len(),
            alt.children.len() - 1,
            "alternation pipe/branch arity"
        );
    }

    for child in ast.children() {
        assert!(
            span.contains(child.span()),
            "child span {} escapes parent {span}",
            child.span()
        );
        validate_node(child, span);
    }
}

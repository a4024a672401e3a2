//! Caret-annotated rendering of parse errors.

use std::fmt;

use annotate_snippets::{AnnotationKind, Level, Renderer, Snippet};

use super::ParseError;

/// Borrowed view rendering one error against its source pattern.
pub struct ErrorPrinter<'a> {
    error: &'a ParseError,
    source: &'a str,
}

impl<'a> ErrorPrinter<'a> {
    pub fn new(error: &'a ParseError, source: &'a str) -> Self {
        Self { error, source }
    }

    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ErrorPrinter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = self.error.kind.to_string();
        let range = adjust_range(self.error.span.into(), self.source.len());

        let report = vec![
            Level::ERROR.primary_title(&message).element(
                Snippet::source(self.source)
                    .line_start(1)
                    .annotation(AnnotationKind::Primary.span(range).label(&message)),
            ),
        ];

        write!(f, "{}", Renderer::plain().render(&report))
    }
}

/// Zero-width ranges render poorly; widen to one character where possible.
fn adjust_range(range: std::ops::Range<usize>, limit: usize) -> std::ops::Range<usize> {
    if range.start == range.end {
        return range.start..(range.start + 1).min(limit);
    }
    range
}

#[cfg(test)]
mod tests {
    use silk_ast::Span;

    use super::*;
    use crate::diagnostics::ParseErrorKind;

    #[test]
    fn rendering_includes_message_and_source() {
        let err = ParseError::new(ParseErrorKind::Expected(")".to_string()), Span::empty(4));
        let rendered = err.render("(abc").render();
        assert!(rendered.contains("expected `)`"), "{rendered}");
        assert!(rendered.contains("(abc"), "{rendered}");
    }
}

//! Dialect feature flags threaded through the parser state.

use bitflags::bitflags;

bitflags! {
    /// Orthogonal syntax extensions. The empty set is the traditional
    /// dialect: every extension off.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct SyntaxOptions: u8 {
        /// `"..."` quoted literals.
        const EXPERIMENTAL_QUOTES = 1 << 0;
        /// `/* ... */` comments.
        const EXPERIMENTAL_COMMENTS = 1 << 1;
        /// `{n...m}` / `{n..<m}` quantifier ranges.
        const EXPERIMENTAL_RANGES = 1 << 2;
        /// `(_: ...)` and `(name: ...)` capture shorthands.
        const EXPERIMENTAL_CAPTURES = 1 << 3;
        /// Runs of whitespace lex as trivia, as if `(?x)` were active.
        const IGNORE_WHITESPACE = 1 << 4;
        /// Alias kept for callers that use the older name.
        const NON_SEMANTIC_WHITESPACE = 1 << 4;
    }
}

impl SyntaxOptions {
    /// The default dialect: all extensions off.
    pub const TRADITIONAL: SyntaxOptions = SyntaxOptions::empty();

    /// Everything the experimental literal dialect enables.
    pub fn experimental() -> SyntaxOptions {
        SyntaxOptions::EXPERIMENTAL_QUOTES
            | SyntaxOptions::EXPERIMENTAL_COMMENTS
            | SyntaxOptions::EXPERIMENTAL_RANGES
            | SyntaxOptions::EXPERIMENTAL_CAPTURES
            | SyntaxOptions::IGNORE_WHITESPACE
    }

    pub fn ignores_whitespace(self) -> bool {
        self.contains(SyntaxOptions::IGNORE_WHITESPACE)
    }
}

//! Matching options, `(?i)`, `(?x-s:...)`, `(?^)`, `(?y{g})`.

use std::fmt;

use crate::span::{Located, Span};

/// One matching option letter (or `y{...}` selector).
pub type MatchingOption = Located<OptionKind>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    /// `i`
    CaseInsensitive,
    /// `J`
    AllowDuplicateGroupNames,
    /// `m`
    Multiline,
    /// `n`
    NoAutoCapture,
    /// `s`
    SingleLine,
    /// `U`
    UngreedyQuantifiers,
    /// `x`
    Extended,
    /// `xx`
    ExtraExtended,
    /// `w`
    UnicodeWordBoundaries,
    /// `D`
    AsciiOnlyDigit,
    /// `P`
    AsciiOnlyPosixProps,
    /// `S`
    AsciiOnlySpace,
    /// `W`
    AsciiOnlyWord,
    /// `y{g}`
    TextSegmentGraphemeMode,
    /// `y{w}`
    TextSegmentWordMode,
}

impl OptionKind {
    /// Text-segment modes are modal: they select a segmentation and can only
    /// be switched, never removed.
    pub fn is_text_segment_mode(self) -> bool {
        matches!(
            self,
            OptionKind::TextSegmentGraphemeMode | OptionKind::TextSegmentWordMode
        )
    }
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use OptionKind::*;
        f.write_str(match self {
            CaseInsensitive => "i",
            AllowDuplicateGroupNames => "J",
            Multiline => "m",
            NoAutoCapture => "n",
            SingleLine => "s",
            UngreedyQuantifiers => "U",
            Extended => "x",
            ExtraExtended => "xx",
            UnicodeWordBoundaries => "w",
            AsciiOnlyDigit => "D",
            AsciiOnlyPosixProps => "P",
            AsciiOnlySpace => "S",
            AsciiOnlyWord => "W",
            TextSegmentGraphemeMode => "y{g}",
            TextSegmentWordMode => "y{w}",
        })
    }
}

/// A full option specifier: `^? adding* (- removing*)?`.
///
/// A leading `^` unsets everything before applying `adding`, and forbids a
/// `removing` part; the lexer enforces both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchingOptionSequence {
    /// Location of the `^`, when present.
    pub caret: Option<Span>,
    pub adding: Vec<MatchingOption>,
    /// Location of the `-`, when present.
    pub minus: Option<Span>,
    pub removing: Vec<MatchingOption>,
}

impl MatchingOptionSequence {
    pub fn resets_all(&self) -> bool {
        self.caret.is_some()
    }

    pub fn adds(&self, kind: OptionKind) -> bool {
        self.adding.iter().any(|opt| opt.value == kind)
    }

    pub fn removes(&self, kind: OptionKind) -> bool {
        self.removing.iter().any(|opt| opt.value == kind)
    }
}

impl fmt::Display for MatchingOptionSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.caret.is_some() {
            write!(f, "^")?;
        }
        for opt in &self.adding {
            write!(f, "{}", opt.value)?;
        }
        if self.minus.is_some() || !self.removing.is_empty() {
            write!(f, "-")?;
        }
        for opt in &self.removing {
            write!(f, "{}", opt.value)?;
        }
        Ok(())
    }
}

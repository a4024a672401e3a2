//! Leaf atoms: literals, escapes, properties, references.

use std::fmt;

use crate::span::Span;

/// A single matchable unit.
#[derive(Debug, Clone, Eq)]
pub struct Atom {
    pub kind: AtomKind,
    pub span: Span,
}

impl Atom {
    pub fn new(kind: AtomKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Codepoint value, if this atom stands for exactly one.
    pub fn as_char(&self) -> Option<char> {
        match self.kind {
            AtomKind::Char(c) | AtomKind::Scalar(c) => Some(c),
            _ => None,
        }
    }
}

impl PartialEq for Atom {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.span == other.span
    }
}

#[derive(Debug, Clone, Eq)]
pub enum AtomKind {
    /// A literal character taken verbatim from the pattern.
    Char(char),
    /// A scalar spelled as an escape sequence (`\u{41}`, `\x41`, `\101`).
    ///
    /// Compares equal to [`AtomKind::Char`] of the same codepoint: the
    /// spelling is cosmetic and must not affect structural equality.
    Scalar(char),
    /// `.`
    Dot,
    /// `^`
    StartOfLine,
    /// `$`
    EndOfLine,
    /// `\d`, `\b`, `\A`, ... (see [`EscapedBuiltin`]).
    EscapedBuiltin(EscapedBuiltin),
    /// `\N{NAME}`
    NamedCharacter(String),
    /// `\p{...}`, `\P{...}`, or a POSIX class `[:name:]`.
    Property(CharacterProperty),
    /// `\1`, `\k<name>`, `\g{-2}`, `(?P=name)`, ...
    Backreference(Reference),
    /// `\g<name>`, `(?&name)`, `(?R)`, `(?+2)`, ...
    Subpattern(Reference),
    /// `\cX` / `\C-X`
    KeyboardControl(char),
    /// `\M-X`
    KeyboardMeta(char),
    /// `\M-\C-X`
    KeyboardMetaControl(char),
}

impl PartialEq for AtomKind {
    fn eq(&self, other: &Self) -> bool {
        use AtomKind::*;
        match (self, other) {
            // A literal and an escape spelling of the same codepoint are the
            // same atom.
            (Char(a) | Scalar(a), Char(b) | Scalar(b)) => a == b,
            (Dot, Dot) | (StartOfLine, StartOfLine) | (EndOfLine, EndOfLine) => true,
            (EscapedBuiltin(a), EscapedBuiltin(b)) => a == b,
            (NamedCharacter(a), NamedCharacter(b)) => a == b,
            (Property(a), Property(b)) => a == b,
            (Backreference(a), Backreference(b)) => a == b,
            (Subpattern(a), Subpattern(b)) => a == b,
            (KeyboardControl(a), KeyboardControl(b)) => a == b,
            (KeyboardMeta(a), KeyboardMeta(b)) => a == b,
            (KeyboardMetaControl(a), KeyboardMetaControl(b)) => a == b,
            _ => false,
        }
    }
}

/// Escapes with a fixed meaning, `\d`, `\A`, `\R` and friends.
///
/// Inside a custom character class only the character-like subset is legal;
/// the parser enforces that (`\b` flips to `Backspace` there).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscapedBuiltin {
    // Single characters.
    Alarm,          // \a
    Escape,         // \e
    FormFeed,       // \f
    Newline,        // \n
    CarriageReturn, // \r
    Tab,            // \t
    VerticalTab,    // \v
    Backspace,      // \b inside a custom character class
    // Character classes.
    DecimalDigit,             // \d
    NotDecimalDigit,          // \D
    HorizontalWhitespace,     // \h
    NotHorizontalWhitespace,  // \H
    Whitespace,               // \s
    NotWhitespace,            // \S
    WordCharacter,            // \w
    NotWordCharacter,         // \W
    NewlineSequence,          // \R
    NotNewline,               // \N
    TrueAnychar,              // \O
    GraphemeCluster,          // \X
    // Assertions.
    WordBoundary,               // \b
    NotWordBoundary,            // \B
    StartOfSubject,             // \A
    EndOfSubjectBeforeNewline,  // \Z
    EndOfSubject,               // \z
    FirstMatchingPositionInSubject, // \G
    ResetStartOfMatch,          // \K
    TextSegmentBoundary,        // \y
    NotTextSegmentBoundary,     // \Y
}

impl EscapedBuiltin {
    /// The character that spells this escape after the backslash.
    pub fn letter(self) -> char {
        use EscapedBuiltin::*;
        match self {
            Alarm => 'a',
            Escape => 'e',
            FormFeed => 'f',
            Newline => 'n',
            CarriageReturn => 'r',
            Tab => 't',
            VerticalTab => 'v',
            Backspace | WordBoundary => 'b',
            DecimalDigit => 'd',
            NotDecimalDigit => 'D',
            HorizontalWhitespace => 'h',
            NotHorizontalWhitespace => 'H',
            Whitespace => 's',
            NotWhitespace => 'S',
            WordCharacter => 'w',
            NotWordCharacter => 'W',
            NewlineSequence => 'R',
            NotNewline => 'N',
            TrueAnychar => 'O',
            GraphemeCluster => 'X',
            NotWordBoundary => 'B',
            StartOfSubject => 'A',
            EndOfSubjectBeforeNewline => 'Z',
            EndOfSubject => 'z',
            FirstMatchingPositionInSubject => 'G',
            ResetStartOfMatch => 'K',
            TextSegmentBoundary => 'y',
            NotTextSegmentBoundary => 'Y',
        }
    }

    /// Whether this escape is an assertion rather than a matchable character
    /// or character class.
    pub fn is_assertion(self) -> bool {
        use EscapedBuiltin::*;
        matches!(
            self,
            WordBoundary
                | NotWordBoundary
                | StartOfSubject
                | EndOfSubjectBeforeNewline
                | EndOfSubject
                | FirstMatchingPositionInSubject
                | ResetStartOfMatch
                | TextSegmentBoundary
                | NotTextSegmentBoundary
        )
    }
}

impl fmt::Display for EscapedBuiltin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\\{}", self.letter())
    }
}

/// A numbered, relative, or named reference to a group, or a recursion of the
/// whole pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    pub kind: RefKind,
    pub span: Span,
}

impl Reference {
    pub fn new(kind: RefKind, span: Span) -> Self {
        Self { kind, span }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefKind {
    /// `\3`, `\g{3}`, `(?3)`
    Absolute(u32),
    /// `\g{-2}`, `(?+1)`; negative counts back, positive counts forward.
    Relative(i32),
    /// `\k<name>`, `(?P=name)`
    Named(String),
    /// `(?R)` — recurse the whole pattern.
    Recurse,
}

impl fmt::Display for RefKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RefKind::Absolute(n) => write!(f, "{n}"),
            RefKind::Relative(n) if *n >= 0 => write!(f, "+{n}"),
            RefKind::Relative(n) => write!(f, "{n}"),
            RefKind::Named(name) => write!(f, "{name}"),
            RefKind::Recurse => write!(f, "R"),
        }
    }
}

/// A character-property predicate, `\p{...}` / `\P{...}` / `[:name:]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterProperty {
    pub kind: PropertyKind,
    /// `\P{...}` or `[:^name:]`.
    pub inverted: bool,
    /// Lexed from POSIX `[:name:]` syntax rather than `\p`.
    pub is_posix: bool,
}

/// The classified body of a property predicate.
///
/// Classification is purely lexical (UAX44-LM3 loose matching against static
/// name tables); no codepoint database is consulted. Names that match no
/// table are preserved verbatim as [`PropertyKind::Other`] so the AST
/// round-trips across classifier databases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyKind {
    /// `\p{Any}`
    Any,
    /// `\p{Assigned}`
    Assigned,
    /// `\p{ASCII}`
    Ascii,
    /// `\p{gc=Lu}`, `\p{Uppercase_Letter}`
    GeneralCategory(GeneralCategory),
    /// `\p{sc=Greek}`, `\p{Greek}`
    Script(String),
    /// `\p{scx=Han}`
    ScriptExtensions(String),
    /// `\p{blk=Basic_Latin}` — blocks are carried through uninterpreted.
    Block(String),
    /// `\p{age=3.0}`
    Age(String),
    /// `\p{name=LATIN SMALL LETTER A}`
    Name(String),
    /// A binary property, `\p{Alphabetic}`, `\p{White_Space}`, ...
    /// Holds the canonical (tightened) property name.
    Binary(String),
    /// `[:alnum:]` and the other POSIX names, also reachable as `\p{alnum}`.
    Posix(PosixClass),
    /// Anything the static tables don't know. Key is present for the
    /// `key=value` form, absent for bare values.
    Other {
        key: Option<String>,
        value: String,
    },
}

/// Unicode general categories, short and long names both accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneralCategory {
    Other,                // C
    Control,              // Cc
    Format,               // Cf
    Unassigned,           // Cn
    PrivateUse,           // Co
    Surrogate,            // Cs
    Letter,               // L
    CasedLetter,          // LC
    LowercaseLetter,      // Ll
    ModifierLetter,       // Lm
    OtherLetter,          // Lo
    TitlecaseLetter,      // Lt
    UppercaseLetter,      // Lu
    Mark,                 // M
    SpacingMark,          // Mc
    EnclosingMark,        // Me
    NonspacingMark,       // Mn
    Number,               // N
    DecimalNumber,        // Nd
    LetterNumber,         // Nl
    OtherNumber,          // No
    Punctuation,          // P
    ConnectorPunctuation, // Pc
    DashPunctuation,      // Pd
    ClosePunctuation,     // Pe
    FinalPunctuation,     // Pf
    InitialPunctuation,   // Pi
    OtherPunctuation,     // Po
    OpenPunctuation,      // Ps
    Symbol,               // S
    CurrencySymbol,       // Sc
    ModifierSymbol,       // Sk
    MathSymbol,           // Sm
    OtherSymbol,          // So
    Separator,            // Z
    LineSeparator,        // Zl
    ParagraphSeparator,   // Zp
    SpaceSeparator,       // Zs
}

impl GeneralCategory {
    pub fn abbreviation(self) -> &'static str {
        use GeneralCategory::*;
        match self {
            Other => "C",
            Control => "Cc",
            Format => "Cf",
            Unassigned => "Cn",
            PrivateUse => "Co",
            Surrogate => "Cs",
            Letter => "L",
            CasedLetter => "LC",
            LowercaseLetter => "Ll",
            ModifierLetter => "Lm",
            OtherLetter => "Lo",
            TitlecaseLetter => "Lt",
            UppercaseLetter => "Lu",
            Mark => "M",
            SpacingMark => "Mc",
            EnclosingMark => "Me",
            NonspacingMark => "Mn",
            Number => "N",
            DecimalNumber => "Nd",
            LetterNumber => "Nl",
            OtherNumber => "No",
            Punctuation => "P",
            ConnectorPunctuation => "Pc",
            DashPunctuation => "Pd",
            ClosePunctuation => "Pe",
            FinalPunctuation => "Pf",
            InitialPunctuation => "Pi",
            OtherPunctuation => "Po",
            OpenPunctuation => "Ps",
            Symbol => "S",
            CurrencySymbol => "Sc",
            ModifierSymbol => "Sk",
            MathSymbol => "Sm",
            OtherSymbol => "So",
            Separator => "Z",
            LineSeparator => "Zl",
            ParagraphSeparator => "Zp",
            SpaceSeparator => "Zs",
        }
    }
}

/// The POSIX bracket-class names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PosixClass {
    Alnum,
    Alpha,
    Ascii,
    Blank,
    Cntrl,
    Digit,
    Graph,
    Lower,
    Print,
    Punct,
    Space,
    Upper,
    Word,
    Xdigit,
}

impl PosixClass {
    pub fn name(self) -> &'static str {
        use PosixClass::*;
        match self {
            Alnum => "alnum",
            Alpha => "alpha",
            Ascii => "ascii",
            Blank => "blank",
            Cntrl => "cntrl",
            Digit => "digit",
            Graph => "graph",
            Lower => "lower",
            Print => "print",
            Punct => "punct",
            Space => "space",
            Upper => "upper",
            Word => "word",
            Xdigit => "xdigit",
        }
    }
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyKind::Any => write!(f, "Any"),
            PropertyKind::Assigned => write!(f, "Assigned"),
            PropertyKind::Ascii => write!(f, "ASCII"),
            PropertyKind::GeneralCategory(gc) => write!(f, "gc={}", gc.abbreviation()),
            PropertyKind::Script(s) => write!(f, "sc={s}"),
            PropertyKind::ScriptExtensions(s) => write!(f, "scx={s}"),
            PropertyKind::Block(b) => write!(f, "blk={b}"),
            PropertyKind::Age(a) => write!(f, "age={a}"),
            PropertyKind::Name(n) => write!(f, "name={n}"),
            PropertyKind::Binary(b) => write!(f, "{b}"),
            PropertyKind::Posix(p) => write!(f, "{}", p.name()),
            PropertyKind::Other { key: Some(k), value } => write!(f, "{k}={value} (other)"),
            PropertyKind::Other { key: None, value } => write!(f, "{value} (other)"),
        }
    }
}

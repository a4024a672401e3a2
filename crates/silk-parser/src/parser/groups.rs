//! Group introducers and matching-option sequences.

use silk_ast::{
    GroupKind, Located, MatchingOption, MatchingOptionSequence, OptionKind, Span,
};

use crate::diagnostics::{ParseErrorKind, Result};
use crate::options::SyntaxOptions;
use crate::parser::Parser;

/// What a `(` turned out to introduce.
pub(crate) enum GroupStart {
    /// A group whose child ends at a matching `)`.
    Group(Located<GroupKind>),
    /// `(?opts)` — an option change scoping over the remainder of the
    /// enclosing alternation branch. The span covers `(` through `)`.
    IsolatedOptions(Located<MatchingOptionSequence>),
}

impl Parser<'_> {
    /// Classify a group introducer. `start` is the position of the already
    /// consumed `(`. Group-like references (`(?P=...)`, `(?R)`, ...) must be
    /// ruled out by the caller first.
    pub(crate) fn lex_group_start(&mut self, start: usize) -> Result<GroupStart> {
        if self.src.try_eat('?') {
            return self.lex_question_group(start);
        }

        if self.src.try_eat('*') {
            let kind = self.lex_long_form_kind(start)?;
            return Ok(GroupStart::Group(Located::new(kind, self.src.span_from(start))));
        }

        if self.options.contains(SyntaxOptions::EXPERIMENTAL_CAPTURES) {
            if let Some(kind) = self.try_eating(|p| p.lex_capture_shorthand())? {
                return Ok(GroupStart::Group(Located::new(
                    kind,
                    self.src.span_from(start),
                )));
            }
        }

        Ok(GroupStart::Group(Located::new(
            GroupKind::Capture,
            self.src.span_from(start),
        )))
    }

    /// Everything after `(?`.
    fn lex_question_group(&mut self, start: usize) -> Result<GroupStart> {
        let kind = if self.src.try_eat(':') {
            Some(GroupKind::NonCapture)
        } else if self.src.try_eat('|') {
            Some(GroupKind::NonCaptureReset)
        } else if self.src.try_eat('>') {
            Some(GroupKind::Atomic)
        } else if self.src.try_eat('=') {
            Some(GroupKind::Lookahead)
        } else if self.src.try_eat('!') {
            Some(GroupKind::NegativeLookahead)
        } else if self.src.try_eat('*') {
            Some(GroupKind::NonAtomicLookahead)
        } else if self.src.try_eat_seq("<=") {
            Some(GroupKind::Lookbehind)
        } else if self.src.try_eat_seq("<!") {
            Some(GroupKind::NegativeLookbehind)
        } else if self.src.try_eat_seq("<*") {
            Some(GroupKind::NonAtomicLookbehind)
        } else {
            None
        };
        if let Some(kind) = kind {
            return Ok(GroupStart::Group(Located::new(
                kind,
                self.src.span_from(start),
            )));
        }

        if self.src.try_eat('<') {
            let name = self.lex_identifier("group name")?;
            self.expect_char('>')?;
            return Ok(GroupStart::Group(Located::new(
                GroupKind::NamedCapture(name),
                self.src.span_from(start),
            )));
        }
        if self.src.try_eat('\'') {
            let name = self.lex_identifier("group name")?;
            self.expect_char('\'')?;
            return Ok(GroupStart::Group(Located::new(
                GroupKind::NamedCapture(name),
                self.src.span_from(start),
            )));
        }
        if self.src.try_eat('P') {
            if self.src.try_eat('<') {
                let name = self.lex_identifier("group name")?;
                self.expect_char('>')?;
                return Ok(GroupStart::Group(Located::new(
                    GroupKind::NamedCapture(name),
                    self.src.span_from(start),
                )));
            }
            // `(?P=` and `(?P>` were already claimed by reference lexing.
            let found = self.src.peek().map(String::from).unwrap_or_default();
            return self.err(
                ParseErrorKind::UnknownGroupKind(format!("?P{found}")),
                self.src.span_from(start),
            );
        }

        // What remains must be a matching-option sequence, scoped by `:` or
        // isolated by `)`.
        let sequence = self.lex_matching_option_sequence()?;
        if self.src.try_eat(':') {
            return Ok(GroupStart::Group(Located::new(
                GroupKind::ChangeMatchingOptions {
                    sequence,
                    isolated: false,
                },
                self.src.span_from(start),
            )));
        }
        if self.src.try_eat(')') {
            return Ok(GroupStart::IsolatedOptions(Located::new(
                sequence,
                self.src.span_from(start),
            )));
        }
        match self.src.peek() {
            None => self.err_here(ParseErrorKind::UnexpectedEndOfInput),
            Some(c) => {
                let pos = self.src.position();
                self.err(
                    ParseErrorKind::InvalidMatchingOption(c),
                    Span::new(pos, pos + c.len_utf8()),
                )
            }
        }
    }

    /// The PCRE2 long-form sentinels after `(*`.
    fn lex_long_form_kind(&mut self, start: usize) -> Result<GroupKind> {
        let word_start = self.src.position();
        let word = self
            .src
            .eat_while(|c| c.is_ascii_alphanumeric() || c == '_')
            .to_string();
        let kind = match word.as_str() {
            "atomic" => GroupKind::Atomic,
            "pla" | "positive_lookahead" => GroupKind::Lookahead,
            "nla" | "negative_lookahead" => GroupKind::NegativeLookahead,
            "plb" | "positive_lookbehind" => GroupKind::Lookbehind,
            "nlb" | "negative_lookbehind" => GroupKind::NegativeLookbehind,
            "napla" | "non_atomic_positive_lookahead" => GroupKind::NonAtomicLookahead,
            "naplb" | "non_atomic_positive_lookbehind" => GroupKind::NonAtomicLookbehind,
            "sr" | "script_run" => GroupKind::ScriptRun,
            "asr" | "atomic_script_run" => GroupKind::AtomicScriptRun,
            _ => {
                return self.err(
                    ParseErrorKind::UnknownGroupKind(format!("*{word}")),
                    self.src.span_from(start),
                );
            }
        };
        if !self.src.try_eat(':') {
            return self.err(
                ParseErrorKind::UnknownGroupKind(format!("*{word}")),
                self.src.span_from(word_start),
            );
        }
        Ok(kind)
    }

    /// `(_: ...)` / `(name: ...)` under the experimental-captures dialect.
    fn lex_capture_shorthand(&mut self) -> Result<Option<GroupKind>> {
        if self.src.try_eat_seq("_:") {
            return Ok(Some(GroupKind::NonCapture));
        }
        let Some(c) = self.src.peek() else {
            return Ok(None);
        };
        if !(c.is_ascii_alphabetic() || c == '_') {
            return Ok(None);
        }
        let name = self.lex_identifier("capture name")?;
        if !self.src.try_eat(':') {
            return Ok(None);
        }
        Ok(Some(GroupKind::NamedCapture(name)))
    }

    /// `^? adding* (- removing*)?`, stopped by `:` or `)`.
    pub(crate) fn lex_matching_option_sequence(&mut self) -> Result<MatchingOptionSequence> {
        let caret_start = self.src.position();
        let caret = self
            .src
            .try_eat('^')
            .then(|| self.src.span_from(caret_start));

        let mut adding = Vec::new();
        let mut minus = None;
        let mut removing = Vec::new();

        loop {
            match self.src.peek() {
                None => return self.err_here(ParseErrorKind::UnexpectedEndOfInput),
                Some(':') | Some(')') => break,
                Some('-') => {
                    let minus_start = self.src.position();
                    self.src.eat();
                    let minus_span = self.src.span_from(minus_start);
                    if caret.is_some() {
                        return self.err(
                            ParseErrorKind::CannotRemoveMatchingOptionsAfterCaret,
                            minus_span,
                        );
                    }
                    if minus.is_some() {
                        return self.err(ParseErrorKind::InvalidMatchingOption('-'), minus_span);
                    }
                    minus = Some(minus_span);
                }
                Some(_) => {
                    let option = self.lex_matching_option()?;
                    if minus.is_some() {
                        if option.value.is_text_segment_mode() {
                            return self.err(
                                ParseErrorKind::CannotRemoveTextSegmentOptions,
                                option.span,
                            );
                        }
                        removing.push(option);
                    } else {
                        adding.push(option);
                    }
                }
            }
        }

        Ok(MatchingOptionSequence {
            caret,
            adding,
            minus,
            removing,
        })
    }

    fn lex_matching_option(&mut self) -> Result<MatchingOption> {
        self.record(|p| {
            let start = p.src.position();
            let c = p.eat_or_end()?;
            match c {
                'i' => Ok(OptionKind::CaseInsensitive),
                'J' => Ok(OptionKind::AllowDuplicateGroupNames),
                'm' => Ok(OptionKind::Multiline),
                'n' => Ok(OptionKind::NoAutoCapture),
                's' => Ok(OptionKind::SingleLine),
                'U' => Ok(OptionKind::UngreedyQuantifiers),
                // Doubled `x` upgrades to extra-extended.
                'x' if p.src.try_eat('x') => Ok(OptionKind::ExtraExtended),
                'x' => Ok(OptionKind::Extended),
                'w' => Ok(OptionKind::UnicodeWordBoundaries),
                'D' => Ok(OptionKind::AsciiOnlyDigit),
                'P' => Ok(OptionKind::AsciiOnlyPosixProps),
                'S' => Ok(OptionKind::AsciiOnlySpace),
                'W' => Ok(OptionKind::AsciiOnlyWord),
                'y' => {
                    p.expect_char('{')?;
                    let selector = p.eat_or_end()?;
                    let kind = match selector {
                        'g' => OptionKind::TextSegmentGraphemeMode,
                        'w' => OptionKind::TextSegmentWordMode,
                        _ => {
                            return p.err(
                                ParseErrorKind::ExpectedSequence(vec![
                                    "y{g}".to_string(),
                                    "y{w}".to_string(),
                                ]),
                                p.src.span_from(start),
                            );
                        }
                    };
                    p.expect_char('}')?;
                    Ok(kind)
                }
                _ => p.err(
                    ParseErrorKind::InvalidMatchingOption(c),
                    p.src.span_from(start),
                ),
            }
        })
    }
}

//! Grammar productions: alternation, concatenation, quantification, atoms.
//!
//! Precedence low to high: alternation, concatenation, quantification, atom.
//! Quotes and comments lex ahead of atoms because they cannot take a
//! quantifier. The parser peeks raw characters only to dispatch; everything
//! else goes through the lexical helpers.

use silk_ast::{
    Alternation, Ast, Atom, AtomKind, Concatenation, Group, GroupKind, Located, Quantification,
    Span,
};

use crate::diagnostics::{ParseErrorKind, Result};
use crate::parser::groups::GroupStart;
use crate::parser::Parser;

impl Parser<'_> {
    /// The whole pattern. Anything left over is an unmatched `)`.
    pub(crate) fn parse_pattern(&mut self) -> Result<Ast> {
        let ast = self.parse_alternation()?;
        if let Some(c) = self.src.peek() {
            let pos = self.src.position();
            return self.err(
                ParseErrorKind::Misc("unmatched closing parenthesis".to_string()),
                Span::new(pos, pos + c.len_utf8()),
            );
        }
        Ok(ast)
    }

    /// `Concatenation ('|' Concatenation)*`; collapses when there is no pipe.
    /// Every empty branch becomes an explicit `Empty` node, so `a|`, `|b`,
    /// `|` and `||` all parse.
    pub(crate) fn parse_alternation(&mut self) -> Result<Ast> {
        let start = self.src.position();
        let mut children = vec![self.parse_concatenation()?];
        let mut pipes = Vec::new();

        while self.src.peek() == Some('|') {
            let pipe_start = self.src.position();
            self.src.eat();
            pipes.push(self.src.span_from(pipe_start));
            children.push(self.parse_concatenation()?);
        }

        if pipes.is_empty() {
            return Ok(children.pop().expect("one branch"));
        }
        Ok(Ast::Alternation(Alternation {
            children,
            pipes,
            span: self.src.span_from(start),
        }))
    }

    /// Elements until `|`, `)`, or end of input. A single child collapses to
    /// itself; none is an `Empty` node.
    pub(crate) fn parse_concatenation(&mut self) -> Result<Ast> {
        let start = self.src.position();
        let mut children: Vec<Ast> = Vec::new();

        loop {
            match self.src.peek() {
                None | Some('|') | Some(')') => break,
                _ => {}
            }

            if let Some(trivia) = self.lex_trivia(false)? {
                children.push(Ast::Trivia(trivia));
                continue;
            }
            if let Some(quote) = self.lex_quote()? {
                children.push(Ast::Quote(quote));
                continue;
            }

            // A quantifier here has nothing to bind to: the previous element
            // was a quote, trivia, or nothing at all.
            if let Some((amount, kind)) = self.lex_quantifier()? {
                return self.err(
                    ParseErrorKind::QuantifierWithoutOperand,
                    Span::new(amount.span.start, kind.span.end),
                );
            }

            let primary = self.parse_primary()?;
            children.push(self.parse_quantified(primary)?);
        }

        match children.len() {
            0 => Ok(Ast::Empty(self.src.here())),
            1 => Ok(children.pop().expect("one child")),
            _ => Ok(Ast::Concatenation(Concatenation {
                children,
                span: self.src.span_from(start),
            })),
        }
    }

    /// Wrap `child` if a quantifier follows. Quantification binds tighter
    /// than concatenation: `abc*` is `a`, `b`, `(c*)`.
    fn parse_quantified(&mut self, child: Ast) -> Result<Ast> {
        let Some((amount, kind)) = self.lex_quantifier()? else {
            return Ok(child);
        };
        let span = Span::new(child.span().start, kind.span.end);
        Ok(Ast::Quantification(Quantification {
            amount,
            kind,
            child: Box::new(child),
            span,
        }))
    }

    /// One atom: group, class, escape, anchor, dot, or a literal character.
    fn parse_primary(&mut self) -> Result<Ast> {
        let start = self.src.position();
        let c = self.src.peek().expect("caller checked for input");
        match c {
            '(' => self.parse_group_or_reference(),
            '[' => self.parse_custom_character_class(),
            '\\' => {
                self.src.eat();
                let atom = self.lex_escaped_atom(start, false)?;
                Ok(Ast::Atom(atom))
            }
            '^' => Ok(self.single_char_atom(AtomKind::StartOfLine)),
            '$' => Ok(self.single_char_atom(AtomKind::EndOfLine)),
            '.' => Ok(self.single_char_atom(AtomKind::Dot)),
            // A `]` with no open class is a literal, as is a `{` that failed
            // to lex as a range quantifier.
            _ => {
                self.src.eat();
                Ok(Ast::Atom(Atom::new(
                    AtomKind::Char(c),
                    self.src.span_from(start),
                )))
            }
        }
    }

    fn single_char_atom(&mut self, kind: AtomKind) -> Ast {
        let start = self.src.position();
        self.src.eat();
        Ast::Atom(Atom::new(kind, self.src.span_from(start)))
    }

    /// `(` opens a group, unless it is a group-like reference
    /// (`(?P=name)`, `(?R)`, `(?+2)`, ...), which is an atom. The reference
    /// check runs first to win the ambiguity against `(?P<...>` captures and
    /// `(?-...)` option groups.
    fn parse_group_or_reference(&mut self) -> Result<Ast> {
        if let Some(atom) = self.try_eating(|p| p.lex_group_like_reference())? {
            return Ok(Ast::Atom(atom));
        }

        let start = self.src.position();
        self.src.eat(); // '('

        match self.lex_group_start(start)? {
            GroupStart::Group(kind) => self.parse_group_body(start, kind),
            GroupStart::IsolatedOptions(sequence) => {
                // The options scope over the remainder of this alternation
                // branch; the concatenation that follows is the child.
                let modes = self.mode_checkpoint();
                self.apply_matching_options(&sequence.value);
                let child = self.parse_concatenation();
                self.restore_modes(modes);
                let child = child?;

                let span = Span::new(start, child.span().end.max(sequence.span.end));
                Ok(Ast::Group(Group {
                    kind: sequence.map(|sequence| GroupKind::ChangeMatchingOptions {
                        sequence,
                        isolated: true,
                    }),
                    child: Box::new(child),
                    span,
                }))
            }
        }
    }

    fn parse_group_body(&mut self, start: usize, kind: Located<GroupKind>) -> Result<Ast> {
        if kind.value.is_capturing() {
            self.prior_group_count += 1;
        }

        let modes = self.mode_checkpoint();
        if let GroupKind::ChangeMatchingOptions { sequence, .. } = &kind.value {
            self.apply_matching_options(sequence);
        }
        let child = self.parse_alternation();
        self.restore_modes(modes);
        let child = child?;

        self.expect_char(')')?;
        Ok(Ast::Group(Group {
            kind,
            child: Box::new(child),
            span: self.src.span_from(start),
        }))
    }
}

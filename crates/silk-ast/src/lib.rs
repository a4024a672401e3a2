#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! AST and capture-structure model for the silk regex front end.
//!
//! This crate holds the data the parser produces and downstream compilers
//! consume:
//! - `span` - source ranges and located values
//! - `ast` - the owned regex tree, traversal, and the stable dump format
//! - `capture` - capture-structure shapes and their binary serialization
//!
//! Nothing here does I/O or touches a codepoint database; property predicates
//! are carried as classified names only.

pub mod ast;
pub mod capture;
mod span;

pub use ast::{
    Alternation, Ast, Atom, AtomKind, CharacterProperty, ClassMember, ClassRange, ClassStart,
    Concatenation, CustomCharacterClass, EscapedBuiltin, GeneralCategory, Group, GroupKind,
    MatchingOption, MatchingOptionSequence, OptionKind, PosixClass, PropertyKind, QuantAmount,
    QuantKind, Quantification, Quote, RefKind, Reference, SetOp, Trivia,
};
pub use capture::{CaptureDecodeError, CaptureStructure};
pub use span::{Located, Span};

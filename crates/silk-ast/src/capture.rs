//! Capture structure: the shape of the values a match produces.
//!
//! Derived from the AST by walking capturing groups in encounter order.
//! Quantification turns a capture into an array or an option, alternation
//! into an option (a branch may not participate in a match). The binary
//! form uses postcard and round-trips exactly.

use indexmap::IndexMap;

use crate::ast::{Ast, GroupKind, QuantAmount};

/// The type shape of the captures of a pattern.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum CaptureStructure {
    /// One capturing group; named when the group was.
    Atom(Option<String>),
    /// A capture that may be absent: under `?` / `{,m}`, or in an
    /// alternation branch.
    Optional(Box<CaptureStructure>),
    /// A capture under a repeating quantifier.
    Array(Box<CaptureStructure>),
    /// Zero or several sibling captures in encounter order. The empty tuple
    /// is the structure of a capture-free pattern.
    Tuple(Vec<CaptureStructure>),
}

/// Decoding failures for the binary form.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CaptureDecodeError {
    #[error("malformed capture structure: {0}")]
    Malformed(postcard::Error),
}

impl CaptureStructure {
    /// Compute the capture structure of a parsed pattern.
    pub fn from_ast(ast: &Ast) -> CaptureStructure {
        let mut slots = Vec::new();
        collect(ast, &mut slots);
        match slots.len() {
            1 => slots.pop().expect("one slot"),
            _ => CaptureStructure::Tuple(slots),
        }
    }

    /// No captures at all.
    pub fn is_empty(&self) -> bool {
        matches!(self, CaptureStructure::Tuple(slots) if slots.is_empty())
    }

    /// Named slots mapped to their flat slot index, in encounter order.
    pub fn name_map(&self) -> IndexMap<String, usize> {
        let mut map = IndexMap::new();
        let mut index = 0;
        self.visit_names(&mut map, &mut index);
        map
    }

    fn visit_names(&self, map: &mut IndexMap<String, usize>, index: &mut usize) {
        match self {
            CaptureStructure::Atom(name) => {
                if let Some(name) = name {
                    map.entry(name.clone()).or_insert(*index);
                }
                *index += 1;
            }
            CaptureStructure::Optional(inner) | CaptureStructure::Array(inner) => {
                inner.visit_names(map, index);
            }
            CaptureStructure::Tuple(slots) => {
                for slot in slots {
                    slot.visit_names(map, index);
                }
            }
        }
    }

    /// Size of the buffer [`Self::encode_into`] needs.
    pub fn encoded_size(&self) -> usize {
        self.to_binary().len()
    }

    /// Serialize into a caller-provided buffer; returns the used prefix.
    pub fn encode_into<'buf>(&self, buf: &'buf mut [u8]) -> Result<&'buf mut [u8], postcard::Error> {
        postcard::to_slice(self, buf)
    }

    /// Serialize to an owned buffer.
    pub fn to_binary(&self) -> Vec<u8> {
        postcard::to_allocvec(self).expect("serialization should not fail")
    }

    /// Deserialize from the binary form.
    pub fn from_binary(bytes: &[u8]) -> Result<Self, CaptureDecodeError> {
        postcard::from_bytes(bytes).map_err(CaptureDecodeError::Malformed)
    }
}

/// Append the capture slots of `ast` to `slots`, left to right.
fn collect(ast: &Ast, slots: &mut Vec<CaptureStructure>) {
    match ast {
        Ast::Group(group) => match &group.kind.value {
            GroupKind::Capture => {
                slots.push(CaptureStructure::Atom(None));
                collect(&group.child, slots);
            }
            GroupKind::NamedCapture(name) => {
                slots.push(CaptureStructure::Atom(Some(name.value.clone())));
                collect(&group.child, slots);
            }
            _ => collect(&group.child, slots),
        },
        Ast::Quantification(quant) => {
            let mut inner = Vec::new();
            collect(&quant.child, &mut inner);
            let wrap = wrapper_for(quant.amount.value);
            for slot in inner {
                slots.push(wrap(slot));
            }
        }
        Ast::Alternation(alt) => {
            // Only one branch participates in any given match.
            for branch in &alt.children {
                let mut inner = Vec::new();
                collect(branch, &mut inner);
                for slot in inner {
                    slots.push(optional(slot));
                }
            }
        }
        _ => {
            for child in ast.children() {
                collect(child, slots);
            }
        }
    }
}

fn wrapper_for(amount: QuantAmount) -> fn(CaptureStructure) -> CaptureStructure {
    match amount {
        // `?`, `{,m}`, `{0,m}`: the capture may simply be absent.
        QuantAmount::ZeroOrOne | QuantAmount::UpToN(_) | QuantAmount::Range(0, _) => optional,
        QuantAmount::Exactly(1) => passthrough,
        QuantAmount::ZeroOrMore
        | QuantAmount::OneOrMore
        | QuantAmount::NOrMore(_)
        | QuantAmount::Range(..)
        | QuantAmount::Exactly(_) => array,
    }
}

fn optional(inner: CaptureStructure) -> CaptureStructure {
    CaptureStructure::Optional(Box::new(inner))
}

fn array(inner: CaptureStructure) -> CaptureStructure {
    CaptureStructure::Array(Box::new(inner))
}

fn passthrough(inner: CaptureStructure) -> CaptureStructure {
    inner
}

//! CSS selector string construction with ordering validation.
//! Spec: <https://www.w3.org/TR/selectors-3/>
//!
//! This module builds selector TEXT only; it never parses CSS or matches
//! selectors against a document, and it does not validate identifier syntax.
//! What it does enforce is structural well-formedness of one simple selector
//! chain:
//! - Fragments follow the canonical order: element, id, class, attribute,
//!   pseudo-class, pseudo-element (Spec: Section 5–8 ordering conventions).
//! - Element, id, and pseudo-element appear at most once per chain.
//!
//! Two built selectors can be joined with a combinator token via [`combine`];
//! the combined result is plain concatenation and is exempt from the chain
//! rules (Spec: Section 11 — Combinators).

#![forbid(unsafe_code)]

use core::fmt::{self, Display, Formatter};

mod builder;
mod error;

// Re-export public API
pub use builder::{SelectorBuilder, combine, combine_with};
pub use error::SelectorError;

/// Fragment kinds of a simple selector chain, in canonical order.
/// Spec: Section 5, 6, 7, 8 — simple selectors
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FragmentKind {
    /// A pre-rendered combined selector produced by [`combine`]; exempt
    /// from ordering and singleton rules.
    Compound,
    /// Bare type name, e.g. `div`.
    /// Spec: Section 5 — Type selectors
    Element,
    /// `#name`.
    /// Spec: Section 7 — ID selectors
    Id,
    /// `.name`.
    /// Spec: Section 6 — Class selectors
    Class,
    /// `[spec]`, bracket contents taken verbatim.
    /// Spec: Section 8 — Attribute selectors
    Attribute,
    /// `:name`.
    PseudoClass,
    /// `::name`.
    PseudoElement,
}

impl FragmentKind {
    /// Canonical position of this kind in a simple selector chain (1–6).
    /// `Compound` is 0 and never constrains a chain.
    pub const fn rank(self) -> u8 {
        match self {
            Self::Compound => 0,
            Self::Element => 1,
            Self::Id => 2,
            Self::Class => 3,
            Self::Attribute => 4,
            Self::PseudoClass => 5,
            Self::PseudoElement => 6,
        }
    }

    /// Whether at most one fragment of this kind may appear per chain.
    pub const fn is_singleton(self) -> bool {
        matches!(self, Self::Element | Self::Id | Self::PseudoElement)
    }

    /// Human-readable kind name used in error messages.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Compound => "combined selector",
            Self::Element => "element",
            Self::Id => "id",
            Self::Class => "class",
            Self::Attribute => "attribute",
            Self::PseudoClass => "pseudo-class",
            Self::PseudoElement => "pseudo-element",
        }
    }
}

/// Combinators between two built selectors.
/// Spec: Section 11 — Combinators
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Combinator {
    Descendant,
    Child,
    AdjacentSibling,
    GeneralSibling,
}

impl Combinator {
    /// The combinator's token text. Descendant is the single space.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Descendant => " ",
            Self::Child => ">",
            Self::AdjacentSibling => "+",
            Self::GeneralSibling => "~",
        }
    }
}

impl Display for Combinator {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.token())
    }
}

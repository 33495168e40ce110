//! Construction-time errors for selector chains.

use crate::FragmentKind;
use core::error::Error;
use core::fmt::{self, Display, Formatter};

/// Errors raised while appending fragments to a simple selector chain.
///
/// Both variants are programmer-facing construction errors raised
/// synchronously by the offending call; `combine` and `stringify` never
/// raise them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectorError {
    /// A singleton kind (element, id, pseudo-element) was appended a second
    /// time to the same chain.
    DuplicateSingleton {
        /// The repeated kind.
        kind: FragmentKind,
    },
    /// A fragment was appended after one of strictly higher canonical rank.
    OrderViolation {
        /// The kind most recently appended to the chain.
        last: FragmentKind,
        /// The kind that was rejected.
        incoming: FragmentKind,
    },
}

impl Display for SelectorError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateSingleton { kind } => write!(
                formatter,
                "{} may appear at most once per selector chain",
                kind.label()
            ),
            Self::OrderViolation { last, incoming } => write!(
                formatter,
                "{} cannot follow {} in a selector chain",
                incoming.label(),
                last.label()
            ),
        }
    }
}

impl Error for SelectorError {}

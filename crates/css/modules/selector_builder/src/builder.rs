//! Fluent, persistent selector builder.
//! Spec: <https://www.w3.org/TR/selectors-3/#selector-syntax>

use crate::{Combinator, FragmentKind, SelectorError};
use core::fmt::{self, Display, Formatter};

/// One rendered selector fragment and its kind.
///
/// `rendered` carries the fragment's own punctuation (`#`, `.`, `[..]`,
/// `:`, `::`); the element name is bare.
#[derive(Clone, Debug, PartialEq, Eq)]
struct Fragment {
    kind: FragmentKind,
    rendered: String,
}

/// Builder for one simple selector chain.
///
/// Every chaining call takes `&self`, copies the fragment list, applies one
/// delta, and returns a fresh builder. The receiver is never mutated, so a
/// builder can be branched into independent chains without aliasing.
/// Ordering and singleton checks are recomputed from the full fragment list
/// on each append rather than carried as incremental counters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectorBuilder {
    /// Fragments in append order.
    fragments: Vec<Fragment>,
}

impl SelectorBuilder {
    /// The empty chain, shared starting point for every selector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a bare element name, e.g. `div`.
    /// Spec: Section 5 — Type selectors
    ///
    /// # Errors
    /// Returns [`SelectorError::DuplicateSingleton`] if the chain already has
    /// an element fragment, or [`SelectorError::OrderViolation`] if any
    /// higher-rank fragment has been appended.
    pub fn element(&self, name: &str) -> Result<Self, SelectorError> {
        self.append(FragmentKind::Element, name.to_owned())
    }

    /// Append `#name`.
    /// Spec: Section 7 — ID selectors
    ///
    /// # Errors
    /// Returns [`SelectorError::DuplicateSingleton`] if the chain already has
    /// an id fragment, or [`SelectorError::OrderViolation`] if any
    /// higher-rank fragment has been appended.
    pub fn id(&self, name: &str) -> Result<Self, SelectorError> {
        self.append(FragmentKind::Id, format!("#{name}"))
    }

    /// Append `.name`. Repeatable.
    /// Spec: Section 6 — Class selectors
    ///
    /// # Errors
    /// Returns [`SelectorError::OrderViolation`] if a fragment of higher rank
    /// than class has been appended.
    pub fn class(&self, name: &str) -> Result<Self, SelectorError> {
        self.append(FragmentKind::Class, format!(".{name}"))
    }

    /// Append `[spec]` with the bracket contents taken verbatim, e.g.
    /// `href$=".png"`. Repeatable.
    /// Spec: Section 8 — Attribute selectors
    ///
    /// # Errors
    /// Returns [`SelectorError::OrderViolation`] if a fragment of higher rank
    /// than attribute has been appended.
    pub fn attr(&self, spec: &str) -> Result<Self, SelectorError> {
        self.append(FragmentKind::Attribute, format!("[{spec}]"))
    }

    /// Append `:name`. Repeatable.
    ///
    /// # Errors
    /// Returns [`SelectorError::OrderViolation`] if a pseudo-element has been
    /// appended.
    pub fn pseudo_class(&self, name: &str) -> Result<Self, SelectorError> {
        self.append(FragmentKind::PseudoClass, format!(":{name}"))
    }

    /// Append `::name`.
    ///
    /// # Errors
    /// Returns [`SelectorError::DuplicateSingleton`] if the chain already has
    /// a pseudo-element fragment.
    pub fn pseudo_element(&self, name: &str) -> Result<Self, SelectorError> {
        self.append(FragmentKind::PseudoElement, format!("::{name}"))
    }

    /// Render the accumulated selector text. Pure accessor, never fails.
    pub fn stringify(&self) -> String {
        self.fragments
            .iter()
            .map(|fragment| fragment.rendered.as_str())
            .collect()
    }

    /// Kind of the most recently appended fragment, if any.
    fn last_kind(&self) -> Option<FragmentKind> {
        self.fragments.last().map(|fragment| fragment.kind)
    }

    /// Validate `kind` against the current fragment list and, on success,
    /// return a new builder with `rendered` appended.
    ///
    /// The order check runs before the singleton check, so appending a
    /// duplicate singleton AFTER a higher-rank fragment reports the order
    /// violation.
    fn append(&self, kind: FragmentKind, rendered: String) -> Result<Self, SelectorError> {
        if let Some(last) = self.last_kind()
            && last.rank() > kind.rank()
        {
            return Err(SelectorError::OrderViolation {
                last,
                incoming: kind,
            });
        }
        if kind.is_singleton()
            && self
                .fragments
                .iter()
                .any(|fragment| fragment.kind == kind)
        {
            return Err(SelectorError::DuplicateSingleton { kind });
        }
        log::trace!("selector append: {} {rendered}", kind.label());
        let mut fragments = self.fragments.clone();
        fragments.push(Fragment { kind, rendered });
        Ok(Self { fragments })
    }
}

impl Display for SelectorBuilder {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        for fragment in &self.fragments {
            formatter.write_str(&fragment.rendered)?;
        }
        Ok(())
    }
}

/// Join two built selectors with a combinator token, padded by one space on
/// each side regardless of the token's content.
/// Spec: Section 11 — Combinators
///
/// The result is structural concatenation only: it carries a single
/// `Compound` fragment and is not subject to the ordering or singleton rules.
/// Appending to the combined builder starts a fresh simple chain.
pub fn combine(
    left: &SelectorBuilder,
    combinator: &str,
    right: &SelectorBuilder,
) -> SelectorBuilder {
    let rendered = format!("{left} {combinator} {right}");
    log::trace!("selector combine: {rendered}");
    SelectorBuilder {
        fragments: vec![Fragment {
            kind: FragmentKind::Compound,
            rendered,
        }],
    }
}

/// [`combine`] with a typed [`Combinator`]. The descendant combinator is
/// rendered as a single space rather than a space-padded space token.
pub fn combine_with(
    left: &SelectorBuilder,
    combinator: Combinator,
    right: &SelectorBuilder,
) -> SelectorBuilder {
    if combinator == Combinator::Descendant {
        let rendered = format!("{left} {right}");
        SelectorBuilder {
            fragments: vec![Fragment {
                kind: FragmentKind::Compound,
                rendered,
            }],
        }
    } else {
        combine(left, combinator.token(), right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test that an empty builder renders the empty string.
    #[test]
    fn test_empty_chain() {
        assert_eq!(SelectorBuilder::new().stringify(), "");
    }

    /// Test rank-ordered appends of every fragment kind.
    ///
    /// # Panics
    /// Panics if any append fails or the rendered text is wrong.
    #[test]
    fn test_full_chain_in_rank_order() -> Result<(), SelectorError> {
        let sel = SelectorBuilder::new()
            .element("a")?
            .id("main")?
            .class("nav")?
            .attr("href$=\".png\"")?
            .pseudo_class("focus")?
            .pseudo_element("before")?;
        assert_eq!(sel.stringify(), "a#main.nav[href$=\".png\"]:focus::before");
        Ok(())
    }

    /// Test that repeatable kinds append in call order.
    ///
    /// # Panics
    /// Panics if a repeated class or pseudo-class append fails.
    #[test]
    fn test_repeatable_kinds() -> Result<(), SelectorError> {
        let sel = SelectorBuilder::new()
            .class("container")?
            .class("editable")?
            .pseudo_class("hover")?
            .pseudo_class("focus")?;
        assert_eq!(sel.stringify(), ".container.editable:hover:focus");
        Ok(())
    }

    /// Test that a second element fragment is rejected as a duplicate.
    ///
    /// # Panics
    /// Panics if the first append fails or the second one succeeds.
    #[test]
    fn test_duplicate_element() -> Result<(), SelectorError> {
        let chain = SelectorBuilder::new().element("a")?;
        assert_eq!(
            chain.element("b"),
            Err(SelectorError::DuplicateSingleton {
                kind: FragmentKind::Element,
            })
        );
        Ok(())
    }

    /// Test that element after class is rejected as out of order.
    ///
    /// # Panics
    /// Panics if the class append fails or the element append succeeds.
    #[test]
    fn test_element_after_class() -> Result<(), SelectorError> {
        let chain = SelectorBuilder::new().class("x")?;
        assert_eq!(
            chain.element("a"),
            Err(SelectorError::OrderViolation {
                last: FragmentKind::Class,
                incoming: FragmentKind::Element,
            })
        );
        Ok(())
    }

    /// Test that a failed append leaves the receiver chain usable.
    ///
    /// # Panics
    /// Panics if the original chain was corrupted by the rejected append.
    #[test]
    fn test_failed_append_leaves_parent_intact() -> Result<(), SelectorError> {
        let chain = SelectorBuilder::new().id("main")?;
        assert_eq!(
            chain.element("div"),
            Err(SelectorError::OrderViolation {
                last: FragmentKind::Id,
                incoming: FragmentKind::Element,
            })
        );
        assert_eq!(chain.class("nav")?.stringify(), "#main.nav");
        Ok(())
    }

    /// Test that branching one chain into two does not alias state.
    ///
    /// # Panics
    /// Panics if one branch's appends leak into the other.
    #[test]
    fn test_branches_are_independent() -> Result<(), SelectorError> {
        let base = SelectorBuilder::new().element("ul")?;
        let first = base.class("menu")?;
        let second = base.class("toolbar")?.pseudo_class("hover")?;
        assert_eq!(first.stringify(), "ul.menu");
        assert_eq!(second.stringify(), "ul.toolbar:hover");
        assert_eq!(base.stringify(), "ul");
        Ok(())
    }

    /// Test combine padding and its equivalence to stringify concatenation.
    ///
    /// # Panics
    /// Panics if the combined text differs from manual concatenation.
    #[test]
    fn test_combine_concatenation() -> Result<(), SelectorError> {
        let left = SelectorBuilder::new().element("div")?.id("main")?;
        let right = SelectorBuilder::new().element("table")?.id("data")?;
        let combined = combine(&left, "+", &right);
        assert_eq!(combined.stringify(), "div#main + table#data");
        assert_eq!(
            combined.stringify(),
            format!("{} + {}", left.stringify(), right.stringify())
        );
        Ok(())
    }

    /// Test that combined results nest into further combinations.
    ///
    /// # Panics
    /// Panics if the nested combination renders incorrectly.
    #[test]
    fn test_combine_nests() -> Result<(), SelectorError> {
        let nav = SelectorBuilder::new().element("nav")?;
        let list = SelectorBuilder::new().element("ul")?;
        let item = SelectorBuilder::new().element("li")?;
        let inner = combine(&nav, ">", &list);
        assert_eq!(combine(&inner, "~", &item).stringify(), "nav > ul ~ li");
        Ok(())
    }

    /// Test typed combinators, including the single-space descendant.
    ///
    /// # Panics
    /// Panics if a typed combinator renders the wrong token.
    #[test]
    fn test_combine_with_typed_combinator() -> Result<(), SelectorError> {
        let outer = SelectorBuilder::new().element("section")?;
        let inner = SelectorBuilder::new().element("p")?;
        assert_eq!(
            combine_with(&outer, Combinator::Child, &inner).stringify(),
            "section > p"
        );
        assert_eq!(
            combine_with(&outer, Combinator::Descendant, &inner).stringify(),
            "section p"
        );
        Ok(())
    }

    /// Test that appending after combine starts a fresh chain.
    ///
    /// # Panics
    /// Panics if the fresh chain is constrained by the combined prefix.
    #[test]
    fn test_append_after_combine() -> Result<(), SelectorError> {
        let left = SelectorBuilder::new().element("div")?;
        let right = SelectorBuilder::new().element("span")?;
        let sel = combine(&left, ">", &right).element("em")?;
        assert_eq!(sel.stringify(), "div > spanem");
        Ok(())
    }

    /// Test Display renders the same text as stringify.
    ///
    /// # Panics
    /// Panics if Display and stringify disagree.
    #[test]
    fn test_display_matches_stringify() -> Result<(), SelectorError> {
        let sel = SelectorBuilder::new().id("main")?.class("nav")?;
        assert_eq!(sel.to_string(), sel.stringify());
        Ok(())
    }
}

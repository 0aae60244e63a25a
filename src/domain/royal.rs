//! Nodes of a royal family tree.
//!
//! A [`RoyalNode`] holds a royal, and optionally a consort when the royal is
//! married. Only married royals (couples) bear children, which is why the
//! operations that add children take a [`CoupleId`] rather than a plain
//! [`NodeId`].

use std::fmt;

use crate::domain::{Person, tree::NodeId};

/// Position of a person in the family's person registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PersonSlot(pub(crate) usize);

/// Whether a royal is single or married.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RoyalKind {
    Single,
    Couple { consort: PersonSlot },
}

/// A node of the family tree.
#[derive(Debug, Clone)]
pub struct RoyalNode {
    royal: PersonSlot,
    kind: RoyalKind,
    ancestor_of_ruler: bool,
}

impl RoyalNode {
    pub(crate) const fn single(royal: PersonSlot) -> Self {
        Self {
            royal,
            kind: RoyalKind::Single,
            ancestor_of_ruler: false,
        }
    }

    pub(crate) const fn couple(royal: PersonSlot, consort: PersonSlot) -> Self {
        Self {
            royal,
            kind: RoyalKind::Couple { consort },
            ancestor_of_ruler: false,
        }
    }

    /// Whether this node is a married couple.
    #[must_use]
    pub const fn is_couple(&self) -> bool {
        matches!(self.kind, RoyalKind::Couple { .. })
    }

    /// Whether this node is the ruler or one of the ruler's ancestors.
    #[must_use]
    pub const fn is_ancestor_of_ruler(&self) -> bool {
        self.ancestor_of_ruler
    }

    pub(crate) const fn royal(&self) -> PersonSlot {
        self.royal
    }

    pub(crate) const fn consort(&self) -> Option<PersonSlot> {
        match self.kind {
            RoyalKind::Single => None,
            RoyalKind::Couple { consort } => Some(consort),
        }
    }

    pub(crate) const fn set_ancestor_of_ruler(&mut self, value: bool) {
        self.ancestor_of_ruler = value;
    }
}

/// Handle to a couple node in a [`FamilyTree`](crate::domain::FamilyTree).
///
/// Couple handles are only ever created for couple nodes, and nodes never
/// change kind, so a `CoupleId` can always bear children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CoupleId(NodeId);

impl CoupleId {
    pub(crate) const fn new(node: NodeId) -> Self {
        Self(node)
    }

    /// The underlying node handle.
    #[must_use]
    pub const fn node(self) -> NodeId {
        self.0
    }
}

impl From<CoupleId> for NodeId {
    fn from(couple: CoupleId) -> Self {
        couple.0
    }
}

impl fmt::Display for CoupleId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Display form of a node: `First Last (G)`, followed by
/// ` and Consort Name` for couples.
#[derive(Debug, Clone, Copy)]
pub struct NodeDisplay<'a> {
    pub(crate) royal: &'a Person,
    pub(crate) consort: Option<&'a Person>,
}

impl fmt::Display for NodeDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({})", self.royal, self.royal.gender())?;
        if let Some(consort) = self.consort {
            write!(f, " and {consort}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Gender;

    #[test]
    fn single_royal_display() {
        let sarah = Person::new("Sarah", "Gibeau", Gender::Female);
        let display = NodeDisplay {
            royal: &sarah,
            consort: None,
        };
        assert_eq!(display.to_string(), "Sarah Gibeau (F)");
    }

    #[test]
    fn couple_display() {
        let sarah = Person::new("Sarah", "Gibeau", Gender::Female);
        let mr = Person::new("Mr", "Gibeau", Gender::Male);
        let display = NodeDisplay {
            royal: &sarah,
            consort: Some(&mr),
        };
        assert_eq!(display.to_string(), "Sarah Gibeau (F) and Mr Gibeau");
    }

    #[test]
    fn new_nodes_are_not_ancestors_of_the_ruler() {
        let single = RoyalNode::single(PersonSlot(0));
        let couple = RoyalNode::couple(PersonSlot(0), PersonSlot(1));

        assert!(!single.is_couple());
        assert!(couple.is_couple());
        assert!(!single.is_ancestor_of_ruler());
        assert!(!couple.is_ancestor_of_ruler());
        assert_eq!(couple.consort(), Some(PersonSlot(1)));
        assert_eq!(single.consort(), None);
    }
}

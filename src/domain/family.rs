//! The royal family tree and its line of succession.
//!
//! The [`FamilyTree`] owns every [`Person`] and every node. Callers hold
//! [`PersonId`]s, [`NodeId`]s and [`CoupleId`]s, and all changes go through
//! the tree so the ruler bookkeeping stays consistent.

use std::fmt;

use thiserror::Error;
use tracing::{debug, instrument, trace, warn};

use crate::domain::{
    Config, Gender, Person, PersonId, Succession,
    royal::{CoupleId, NodeDisplay, PersonSlot, RoyalNode},
    tree::{NodeId, PreOrder, Tree},
};

/// Errors raised by family tree operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    /// The royal is dead, and so can no longer marry, have children or be
    /// crowned.
    #[error("{0} is dead")]
    DeadRoyal(String),

    /// No node of the tree holds the given person as its royal.
    #[error("royal {0} not found in the family tree")]
    NoSuchRoyal(PersonId),

    /// The line of succession was requested before anyone was crowned.
    #[error("no ruler has been crowned")]
    NoRulerSet,
}

/// A royal family and its current ruler.
#[derive(Debug, Default)]
pub struct FamilyTree {
    config: Config,
    people: Vec<Person>,
    nodes: Tree<RoyalNode>,
    ruler: Option<NodeId>,
}

impl FamilyTree {
    /// Creates an empty family governed by the given configuration.
    #[must_use]
    pub const fn new(config: Config) -> Self {
        Self {
            config,
            people: Vec::new(),
            nodes: Tree::new(),
            ruler: None,
        }
    }

    /// Creates an empty family using the given succession rule.
    #[must_use]
    pub const fn with_succession(succession: Succession) -> Self {
        Self::new(Config::new(succession))
    }

    /// The configuration of the realm.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// The succession rule in force.
    #[must_use]
    pub const fn succession(&self) -> Succession {
        self.config.succession()
    }

    /// Adds a couple that is not yet part of the tree, typically the founders.
    pub fn couple(&mut self, royal: Person, consort: Person) -> CoupleId {
        let royal = self.register(royal);
        let consort = self.register(consort);
        CoupleId::new(self.nodes.insert(RoyalNode::couple(royal, consort)))
    }

    /// Adds an unmarried royal that is not yet part of the tree.
    pub fn single(&mut self, royal: Person) -> NodeId {
        let royal = self.register(royal);
        self.nodes.insert(RoyalNode::single(royal))
    }

    /// Makes `couple` the root of the tree without crowning anyone.
    pub fn set_root(&mut self, couple: CoupleId) {
        self.nodes.set_root(couple.node());
    }

    /// Makes `couple` both the root of the tree and the ruler.
    #[instrument(skip(self))]
    pub fn start(&mut self, couple: CoupleId) {
        let node = couple.node();
        if let Some(previous) = self.nodes.root() {
            self.reset_descendants(previous);
        }
        self.nodes.set_root(node);
        self.reset_descendants(node);
        self.ruler = Some(node);
        self.set_ancestors(node);
        debug!(founders = %self.display_node(node), "family started");
    }

    /// The root of the tree, if any.
    #[must_use]
    pub const fn root(&self) -> Option<NodeId> {
        self.nodes.root()
    }

    /// The ruler's node, if anyone has been crowned.
    #[must_use]
    pub const fn ruler(&self) -> Option<NodeId> {
        self.ruler
    }

    /// Returns the node at `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this family.
    #[must_use]
    pub fn node(&self, id: NodeId) -> &RoyalNode {
        &self.nodes[id]
    }

    /// The royal held by the node at `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this family.
    #[must_use]
    pub fn royal(&self, id: NodeId) -> &Person {
        self.person_at(self.nodes[id].royal())
    }

    /// The consort of the node at `id`, if it is a couple.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this family.
    #[must_use]
    pub fn consort(&self, id: NodeId) -> Option<&Person> {
        self.nodes[id].consort().map(|slot| self.person_at(slot))
    }

    /// Looks up any person known to the family, royal or consort.
    #[must_use]
    pub fn person(&self, id: PersonId) -> Option<&Person> {
        self.people.iter().find(|person| person.id() == id)
    }

    /// The parent of the node at `id`.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.parent(id)
    }

    /// The children of the node at `id`, eldest first.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes.children(id)
    }

    /// The depth of the node at `id`; the root has depth 1.
    #[must_use]
    pub fn depth(&self, id: NodeId) -> usize {
        self.nodes.depth(id)
    }

    /// Whether the node at `id` is the ruler or one of the ruler's ancestors.
    #[must_use]
    pub fn is_ancestor_of_ruler(&self, id: NodeId) -> bool {
        self.nodes[id].is_ancestor_of_ruler()
    }

    /// Iterates over every node reachable from the root, in pre-order.
    #[must_use]
    pub fn traverse(&self) -> PreOrder<'_, RoyalNode> {
        self.nodes.traverse()
    }

    /// The display form of the node at `id`.
    #[must_use]
    pub fn display_node(&self, id: NodeId) -> NodeDisplay<'_> {
        NodeDisplay {
            royal: self.royal(id),
            consort: self.consort(id),
        }
    }

    /// Marries the royal at `node` to `consort`.
    ///
    /// The new couple starts without children. If `node` has a parent, the
    /// couple replaces it at the same position among its siblings and `node`
    /// is detached from the tree; a ruler at `node` moves to the couple.
    /// Otherwise the tree is left untouched and the couple is returned
    /// detached.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DeadRoyal`] if the royal is dead.
    #[instrument(skip(self, consort), fields(consort = %consort))]
    pub fn marry(&mut self, node: NodeId, consort: Person) -> Result<CoupleId, Error> {
        let royal = self.nodes[node].royal();
        let was_ancestor = self.nodes[node].is_ancestor_of_ruler();
        self.ensure_alive(royal)?;

        let consort = self.register(consort);
        let couple = self.nodes.insert(RoyalNode::couple(royal, consort));

        if !self.nodes.replace_child(node, couple) {
            debug!(couple = %self.display_node(couple), "married without a parent");
            return Ok(CoupleId::new(couple));
        }

        self.nodes[couple].set_ancestor_of_ruler(was_ancestor);
        if self.ruler == Some(node) {
            self.ruler = Some(couple);
        } else if was_ancestor {
            // the ruler's branch stayed with the detached node
            warn!(%node, "remarriage detached the ruler from the tree");
            if let Some(root) = self.nodes.root() {
                self.reset_descendants(root);
            }
            self.reset_descendants(node);
            self.ruler = None;
        }
        self.nodes[node].set_ancestor_of_ruler(false);

        debug!(couple = %self.display_node(couple), "married");
        Ok(CoupleId::new(couple))
    }

    /// A son is born to `couple`. See [`FamilyTree::have_child`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::DeadRoyal`] if the couple's royal is dead.
    pub fn have_son(&mut self, couple: CoupleId, name: &str) -> Result<NodeId, Error> {
        self.have_child(couple, name, Gender::Male)
    }

    /// A daughter is born to `couple`. See [`FamilyTree::have_child`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::DeadRoyal`] if the couple's royal is dead.
    pub fn have_daughter(&mut self, couple: CoupleId, name: &str) -> Result<NodeId, Error> {
        self.have_child(couple, name, Gender::Female)
    }

    /// A child is born to `couple`.
    ///
    /// The child takes the royal's last name and becomes the youngest of the
    /// couple's children.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DeadRoyal`] if the couple's royal is dead.
    #[instrument(skip(self))]
    pub fn have_child(
        &mut self,
        couple: CoupleId,
        name: &str,
        gender: Gender,
    ) -> Result<NodeId, Error> {
        let royal = self.nodes[couple.node()].royal();
        self.ensure_alive(royal)?;

        let last = self.person_at(royal).last().to_string();
        let child = self.register(Person::new(name, last, gender));
        let id = self.nodes.add_child(couple.node(), RoyalNode::single(child));

        trace!(%id, child = %self.person_at(child), "born");
        Ok(id)
    }

    /// Finds the node holding `person` as its royal, in `node`'s subtree.
    ///
    /// Consorts are not royals and are never found.
    #[must_use]
    pub fn search_from(&self, node: NodeId, person: PersonId) -> Option<NodeId> {
        self.nodes
            .pre_order(node)
            .find(|&id| self.royal(id).id() == person)
    }

    /// Finds the node holding `person` as its royal, anywhere in the tree.
    #[must_use]
    pub fn search(&self, person: PersonId) -> Option<NodeId> {
        self.search_from(self.nodes.root()?, person)
    }

    /// Finds royals by name, in pre-order.
    ///
    /// `name` matches either the full `"First Last"` form or the first name
    /// alone.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Vec<NodeId> {
        let name = name.trim();
        self.traverse()
            .filter(|&id| {
                let royal = self.royal(id);
                royal.first() == name || royal.to_string() == name
            })
            .collect()
    }

    /// Crowns `person`.
    ///
    /// Afterwards exactly the nodes from the new ruler up to the root are
    /// marked as ancestors of the ruler.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSuchRoyal`] if `person` is not a royal of this
    /// tree, or [`Error::DeadRoyal`] if they are dead.
    #[instrument(skip(self))]
    pub fn crown(&mut self, person: PersonId) -> Result<(), Error> {
        let ruler = self.search(person).ok_or(Error::NoSuchRoyal(person))?;
        self.ensure_alive(self.nodes[ruler].royal())?;

        if let Some(root) = self.nodes.root() {
            self.reset_descendants(root);
        }
        self.ruler = Some(ruler);
        self.set_ancestors(ruler);

        debug!(ruler = %self.royal(ruler), "crowned");
        Ok(())
    }

    /// Records the death of `person`. Killing the dead is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSuchRoyal`] if `person` is not a royal of this tree.
    #[instrument(skip(self))]
    pub fn kill(&mut self, person: PersonId) -> Result<(), Error> {
        let node = self.search(person).ok_or(Error::NoSuchRoyal(person))?;
        let slot = self.nodes[node].royal();
        self.people[slot.0].die();

        debug!(royal = %self.person_at(slot), "died");
        Ok(())
    }

    /// The line of succession, starting with the ruler.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoRulerSet`] if nobody has been crowned.
    pub fn line_of_succession(&self) -> Result<Vec<&Person>, Error> {
        let ruler = self.ruler.ok_or(Error::NoRulerSet)?;
        Ok(self.line_of_succession_from(ruler))
    }

    /// The line of succession as seen from `node`.
    ///
    /// The living royal of `node` comes first, then the lines of its
    /// children. While the current level is marked as an ancestor of the
    /// ruler, the walk continues with its parent, listing the parent and the
    /// branches not yet visited.
    ///
    /// # Panics
    ///
    /// Panics if `node` does not belong to this family.
    #[must_use]
    pub fn line_of_succession_from(&self, node: NodeId) -> Vec<&Person> {
        let preferred = self.preferred_gender(node);
        let mut line = Vec::new();

        for level in self.nodes.ancestors(node) {
            self.collect_line(level, preferred, &mut line);
            if !self.nodes[level].is_ancestor_of_ruler() {
                break;
            }
        }

        line
    }
}

impl FamilyTree {
    fn register(&mut self, person: Person) -> PersonSlot {
        let slot = PersonSlot(self.people.len());
        self.people.push(person);
        slot
    }

    fn person_at(&self, slot: PersonSlot) -> &Person {
        &self.people[slot.0]
    }

    fn ensure_alive(&self, slot: PersonSlot) -> Result<(), Error> {
        let person = self.person_at(slot);
        if person.is_alive() {
            Ok(())
        } else {
            Err(Error::DeadRoyal(person.to_string()))
        }
    }

    /// The founding royal's gender, or that of `node`'s oldest known
    /// ancestor when the tree has no root yet.
    fn preferred_gender(&self, node: NodeId) -> Gender {
        let founder = self
            .nodes
            .root()
            .unwrap_or_else(|| self.nodes.ancestors(node).last().unwrap_or(node));
        self.royal(founder).gender()
    }

    fn collect_line<'a>(&'a self, id: NodeId, preferred: Gender, line: &mut Vec<&'a Person>) {
        let royal = self.royal(id);
        if royal.is_alive() {
            line.push(royal);
        }

        // the ruler's own branch is listed by the level below
        let heirs = self
            .nodes
            .children(id)
            .iter()
            .copied()
            .filter(|&child| !self.nodes[child].is_ancestor_of_ruler());

        match self.config.succession() {
            Succession::Absolute => {
                for child in heirs {
                    self.collect_line(child, preferred, line);
                }
            }
            Succession::GenderPreference => {
                let (favoured, others): (Vec<_>, Vec<_>) =
                    heirs.partition(|&child| self.royal(child).gender() == preferred);
                for child in favoured.into_iter().chain(others) {
                    self.collect_line(child, preferred, line);
                }
            }
        }
    }

    fn reset_descendants(&mut self, node: NodeId) {
        let subtree: Vec<NodeId> = self.nodes.pre_order(node).collect();
        for id in subtree {
            self.nodes[id].set_ancestor_of_ruler(false);
        }
    }

    fn set_ancestors(&mut self, node: NodeId) {
        let path: Vec<NodeId> = self.nodes.ancestors(node).collect();
        for id in path {
            self.nodes[id].set_ancestor_of_ruler(true);
        }
    }
}

impl fmt::Display for FamilyTree {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.nodes.write_outline(f, |id| self.display_node(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The Gibeau family, in the order the tests below rely on:
    ///
    /// ```text
    /// founders
    /// ├── Zeus (M) and Hera Juno
    /// │   └── Hercules (M)
    /// ├── Aphrodite (F) and Apollo A
    /// │   ├── Artemis (F)
    /// │   └── Athena (F)
    /// └── Dionysus (M)
    /// ```
    struct Olympians {
        tree: FamilyTree,
        founders: CoupleId,
        zeus: NodeId,
        aphrodite: NodeId,
        dionysus: NodeId,
        zeus_and_hera: CoupleId,
        hercules: NodeId,
        aphrodite_and_apollo: CoupleId,
        artemis: NodeId,
        athena: NodeId,
    }

    impl Olympians {
        fn with_founders(succession: Succession, royal: Person, consort: Person) -> Self {
            let mut tree = FamilyTree::with_succession(succession);
            let founders = tree.couple(royal, consort);
            let zeus = tree.have_son(founders, "Zeus").unwrap();
            let aphrodite = tree.have_daughter(founders, "Aphrodite").unwrap();
            let dionysus = tree.have_son(founders, "Dionysus").unwrap();
            let zeus_and_hera = tree
                .marry(zeus, Person::new("Hera", "Juno", Gender::Female))
                .unwrap();
            let hercules = tree.have_son(zeus_and_hera, "Hercules").unwrap();
            let aphrodite_and_apollo = tree
                .marry(aphrodite, Person::new("Apollo", "A", Gender::Male))
                .unwrap();
            let artemis = tree.have_daughter(aphrodite_and_apollo, "Artemis").unwrap();
            let athena = tree.have_daughter(aphrodite_and_apollo, "Athena").unwrap();
            tree.set_root(founders);

            Self {
                tree,
                founders,
                zeus,
                aphrodite,
                dionysus,
                zeus_and_hera,
                hercules,
                aphrodite_and_apollo,
                artemis,
                athena,
            }
        }

        /// Sarah is the royal, Mr her consort.
        fn queen(succession: Succession) -> Self {
            Self::with_founders(
                succession,
                Person::new("Sarah", "Gibeau", Gender::Female),
                Person::new("Mr", "Gibeau", Gender::Male),
            )
        }

        /// Mr is the royal, Sarah his consort.
        fn king(succession: Succession) -> Self {
            Self::with_founders(
                succession,
                Person::new("Mr", "Gibeau", Gender::Male),
                Person::new("Sarah", "Gibeau", Gender::Female),
            )
        }

        fn id(&self, node: impl Into<NodeId>) -> PersonId {
            self.tree.royal(node.into()).id()
        }

        fn crown(&mut self, node: impl Into<NodeId>) {
            let person = self.id(node);
            self.tree.crown(person).unwrap();
        }

        fn line(&self) -> Vec<String> {
            names(&self.tree.line_of_succession().unwrap())
        }
    }

    fn names(line: &[&Person]) -> Vec<String> {
        line.iter().map(|person| person.first().to_string()).collect()
    }

    #[test]
    fn start_sets_root_and_ruler() {
        let mut tree = FamilyTree::default();
        let founders = tree.couple(
            Person::new("Sarah", "Gibeau", Gender::Female),
            Person::new("Mr", "Gibeau", Gender::Male),
        );
        assert_eq!(tree.ruler(), None);
        assert_eq!(tree.succession(), Succession::Absolute);

        tree.start(founders);

        assert_eq!(tree.root(), Some(founders.node()));
        assert_eq!(tree.ruler(), Some(founders.node()));
        assert!(tree.is_ancestor_of_ruler(founders.node()));
        assert_eq!(names(&tree.line_of_succession().unwrap()), ["Sarah"]);
    }

    #[test]
    fn line_of_succession_without_ruler_fails() {
        let olympians = Olympians::queen(Succession::Absolute);
        assert_eq!(
            olympians.tree.line_of_succession().unwrap_err(),
            Error::NoRulerSet
        );
    }

    #[test]
    fn marry_creates_childless_couple() {
        let mut tree = FamilyTree::default();
        let sarah = tree.single(Person::new("Sarah", "Gibeau", Gender::Female));
        let mr = Person::new("Mr", "Gibeau", Gender::Male);
        let mr_id = mr.id();

        let couple = tree.marry(sarah, mr).unwrap();

        assert_eq!(tree.royal(couple.node()).id(), tree.royal(sarah).id());
        assert_eq!(tree.consort(couple.node()).map(Person::id), Some(mr_id));
        assert!(tree.node(couple.node()).is_couple());
        assert_eq!(tree.parent(couple.node()), None);
        assert!(tree.children(couple.node()).is_empty());
        assert_eq!(
            tree.display_node(couple.node()).to_string(),
            "Sarah Gibeau (F) and Mr Gibeau"
        );
    }

    #[test]
    fn marry_keeps_position_among_siblings() {
        let o = Olympians::queen(Succession::Absolute);

        assert_eq!(
            o.tree.children(o.founders.node()),
            &[
                o.zeus_and_hera.node(),
                o.aphrodite_and_apollo.node(),
                o.dionysus
            ]
        );
        assert_eq!(o.tree.parent(o.aphrodite_and_apollo.node()), Some(o.founders.node()));
        assert_eq!(o.tree.parent(o.aphrodite), None);
        assert!(!o.tree.traverse().any(|id| id == o.zeus || id == o.aphrodite));
    }

    #[test]
    fn marry_dead_royal_fails() {
        let mut o = Olympians::queen(Succession::Absolute);
        o.tree.kill(o.id(o.dionysus)).unwrap();

        let err = o
            .tree
            .marry(o.dionysus, Person::new("Ariadne", "Minos", Gender::Female))
            .expect_err("the dead cannot marry");

        assert_eq!(err, Error::DeadRoyal("Dionysus Gibeau".to_string()));
        assert_eq!(o.tree.children(o.founders.node())[2], o.dionysus);
    }

    #[test]
    fn marrying_the_root_keeps_the_family() {
        let mut o = Olympians::queen(Succession::Absolute);
        o.tree.start(o.founders);
        let before = o.tree.traverse().count();

        let remarried = o
            .tree
            .marry(o.founders.node(), Person::new("Ares", "Mars", Gender::Male))
            .unwrap();

        assert_eq!(o.tree.root(), Some(o.founders.node()));
        assert_eq!(o.tree.ruler(), Some(o.founders.node()));
        assert!(o.tree.is_ancestor_of_ruler(o.founders.node()));
        assert_eq!(o.tree.parent(remarried.node()), None);
        assert!(!o.tree.is_ancestor_of_ruler(remarried.node()));
        assert_eq!(o.tree.traverse().count(), before);
        assert!(!o.tree.traverse().any(|id| id == remarried.node()));
        assert_eq!(o.tree.search(o.id(o.zeus)), Some(o.zeus_and_hera.node()));
    }

    #[test]
    fn children_can_be_crowned_after_the_founder_remarries() {
        let mut tree = FamilyTree::default();
        let founders = tree.couple(
            Person::new("Sarah", "Gibeau", Gender::Female),
            Person::new("Mr", "Gibeau", Gender::Male),
        );
        tree.start(founders);
        let zeus = tree.have_son(founders, "Zeus").unwrap();
        let zeus_id = tree.royal(zeus).id();

        tree.marry(founders.node(), Person::new("Ares", "Mars", Gender::Male)).unwrap();
        tree.crown(zeus_id).unwrap();

        assert_eq!(tree.search(zeus_id), Some(zeus));
        assert_eq!(tree.ruler(), Some(zeus));
        let line: Vec<_> = tree
            .line_of_succession()
            .unwrap()
            .into_iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(line, ["Zeus Gibeau", "Sarah Gibeau"]);
    }

    #[test]
    fn marrying_the_ruler_keeps_the_crown() {
        let mut o = Olympians::queen(Succession::Absolute);
        o.crown(o.dionysus);

        let couple = o
            .tree
            .marry(o.dionysus, Person::new("Ariadne", "Minos", Gender::Female))
            .unwrap();

        assert_eq!(o.tree.ruler(), Some(couple.node()));
        assert!(o.tree.is_ancestor_of_ruler(couple.node()));
        assert_eq!(o.line()[0], "Dionysus");
    }

    #[test]
    fn remarrying_an_ancestor_of_the_ruler_clears_the_ruler() {
        let mut o = Olympians::queen(Succession::Absolute);
        o.crown(o.hercules);

        o.tree
            .marry(o.zeus_and_hera.node(), Person::new("Leto", "Titan", Gender::Female))
            .unwrap();

        assert_eq!(o.tree.ruler(), None);
        assert!(!o.tree.traverse().any(|id| o.tree.is_ancestor_of_ruler(id)));
    }

    #[test]
    fn children_are_born_in_order_with_the_royal_last_name() {
        let o = Olympians::queen(Succession::Absolute);

        let hercules = o.tree.royal(o.hercules);
        assert_eq!(hercules.first(), "Hercules");
        assert_eq!(hercules.last(), "Gibeau");
        assert_eq!(hercules.gender(), Gender::Male);
        assert!(hercules.is_alive());
        assert_eq!(o.tree.parent(o.hercules), Some(o.zeus_and_hera.node()));

        assert_eq!(
            o.tree.children(o.aphrodite_and_apollo.node()),
            &[o.artemis, o.athena]
        );
        assert_eq!(o.tree.royal(o.athena).gender(), Gender::Female);
        assert_eq!(o.tree.depth(o.athena), 3);
    }

    #[test]
    fn dead_royal_cannot_have_children() {
        let mut o = Olympians::queen(Succession::Absolute);
        o.tree.kill(o.id(o.founders)).unwrap();

        let expected = Error::DeadRoyal("Sarah Gibeau".to_string());
        assert_eq!(o.tree.have_son(o.founders, "Ares"), Err(expected.clone()));
        assert_eq!(o.tree.have_daughter(o.founders, "Hebe"), Err(expected));
        assert_eq!(o.tree.children(o.founders.node()).len(), 3);
    }

    #[test]
    fn search_from_node_only_searches_its_subtree() {
        let o = Olympians::queen(Succession::Absolute);
        let root = o.founders.node();
        let hera = o.tree.consort(o.zeus_and_hera.node()).unwrap().id();

        assert_eq!(o.tree.search_from(root, o.id(o.founders)), Some(root));
        assert_eq!(
            o.tree.search_from(root, o.id(o.aphrodite)),
            Some(o.aphrodite_and_apollo.node())
        );
        assert_eq!(o.tree.search_from(root, o.id(o.zeus)), Some(o.zeus_and_hera.node()));
        assert_eq!(o.tree.search_from(root, hera), None);

        let branch = o.aphrodite_and_apollo.node();
        assert_eq!(o.tree.search_from(branch, o.id(o.athena)), Some(o.athena));
        assert_eq!(o.tree.search_from(branch, o.id(o.founders)), None);
        assert_eq!(o.tree.search_from(branch, o.id(o.zeus)), None);
    }

    #[test]
    fn search_on_empty_tree_finds_nothing() {
        let mut tree = FamilyTree::default();
        let sarah = Person::new("Sarah", "Gibeau", Gender::Female);
        let sarah_id = sarah.id();
        tree.single(sarah);

        assert_eq!(tree.search(sarah_id), None);
        assert_eq!(tree.person(sarah_id).map(Person::first), Some("Sarah"));
    }

    #[test]
    fn find_by_name_matches_full_or_first_name() {
        let o = Olympians::queen(Succession::Absolute);

        assert_eq!(o.tree.find_by_name("Athena"), vec![o.athena]);
        assert_eq!(o.tree.find_by_name("Zeus Gibeau"), vec![o.zeus_and_hera.node()]);
        assert!(o.tree.find_by_name("Hera").is_empty());
    }

    #[test]
    fn crown_marks_exactly_the_path_to_the_root() {
        let mut o = Olympians::queen(Succession::Absolute);
        o.crown(o.zeus);

        let marked: Vec<NodeId> = o
            .tree
            .traverse()
            .filter(|&id| o.tree.is_ancestor_of_ruler(id))
            .collect();
        assert_eq!(marked, vec![o.founders.node(), o.zeus_and_hera.node()]);
        assert_eq!(o.tree.ruler(), Some(o.zeus_and_hera.node()));

        o.crown(o.artemis);
        let marked: Vec<NodeId> = o
            .tree
            .traverse()
            .filter(|&id| o.tree.is_ancestor_of_ruler(id))
            .collect();
        assert_eq!(
            marked,
            vec![o.founders.node(), o.aphrodite_and_apollo.node(), o.artemis]
        );
    }

    #[test]
    fn crown_unknown_royal_fails() {
        let mut o = Olympians::queen(Succession::Absolute);
        let venus = Person::new("Venus", "Flytrap", Gender::Female).id();

        assert_eq!(o.tree.crown(venus), Err(Error::NoSuchRoyal(venus)));
        assert_eq!(o.tree.ruler(), None);
    }

    #[test]
    fn crown_dead_royal_fails() {
        let mut o = Olympians::queen(Succession::Absolute);
        o.crown(o.founders);
        let zeus = o.id(o.zeus);
        o.tree.kill(zeus).unwrap();

        assert_eq!(
            o.tree.crown(zeus),
            Err(Error::DeadRoyal("Zeus Gibeau".to_string()))
        );
        assert_eq!(o.tree.ruler(), Some(o.founders.node()));
    }

    #[test]
    fn kill_is_idempotent_and_spares_consorts() {
        let mut o = Olympians::queen(Succession::Absolute);
        let zeus = o.id(o.zeus);
        let hera = o.tree.consort(o.zeus_and_hera.node()).unwrap().id();

        o.tree.kill(zeus).unwrap();
        assert!(!o.tree.royal(o.zeus_and_hera.node()).is_alive());
        assert!(o.tree.person(hera).unwrap().is_alive());

        o.tree.kill(zeus).unwrap();
        assert!(!o.tree.royal(o.zeus_and_hera.node()).is_alive());

        o.tree.kill(o.id(o.aphrodite)).unwrap();
        let living: Vec<_> = o
            .tree
            .traverse()
            .filter(|&id| o.tree.royal(id).is_alive())
            .map(|id| o.tree.royal(id).first().to_string())
            .collect();
        assert_eq!(living, ["Sarah", "Hercules", "Artemis", "Athena", "Dionysus"]);

        assert_eq!(o.tree.kill(hera), Err(Error::NoSuchRoyal(hera)));
    }

    #[test]
    fn uncrowned_node_lists_itself_and_descendants() {
        let o = Olympians::queen(Succession::Absolute);

        assert_eq!(
            names(&o.tree.line_of_succession_from(o.founders.node())),
            ["Sarah", "Zeus", "Hercules", "Aphrodite", "Artemis", "Athena", "Dionysus"]
        );
        assert_eq!(
            names(&o.tree.line_of_succession_from(o.aphrodite_and_apollo.node())),
            ["Aphrodite", "Artemis", "Athena"]
        );
    }

    #[test]
    fn absolute_root_ruler() {
        let mut o = Olympians::queen(Succession::Absolute);
        o.crown(o.founders);
        assert_eq!(
            o.line(),
            ["Sarah", "Zeus", "Hercules", "Aphrodite", "Artemis", "Athena", "Dionysus"]
        );
    }

    #[test]
    fn absolute_leaf_ruler() {
        let mut o = Olympians::queen(Succession::Absolute);
        o.crown(o.artemis);
        assert_eq!(
            o.line(),
            ["Artemis", "Aphrodite", "Athena", "Sarah", "Zeus", "Hercules", "Dionysus"]
        );
    }

    #[test]
    fn absolute_internal_ruler() {
        let mut o = Olympians::queen(Succession::Absolute);
        o.crown(o.zeus_and_hera);
        assert_eq!(
            o.line(),
            ["Zeus", "Hercules", "Sarah", "Aphrodite", "Artemis", "Athena", "Dionysus"]
        );
    }

    #[test]
    fn absolute_dead_royal_is_skipped() {
        let mut o = Olympians::queen(Succession::Absolute);
        o.crown(o.founders);
        o.tree.kill(o.id(o.zeus)).unwrap();
        assert_eq!(
            o.line(),
            ["Sarah", "Hercules", "Aphrodite", "Artemis", "Athena", "Dionysus"]
        );
    }

    #[test]
    fn dead_ruler_is_not_listed() {
        let mut o = Olympians::queen(Succession::Absolute);
        o.crown(o.founders);
        o.tree.kill(o.id(o.founders)).unwrap();
        assert_eq!(
            o.line(),
            ["Zeus", "Hercules", "Aphrodite", "Artemis", "Athena", "Dionysus"]
        );
    }

    #[test]
    fn male_preference_root_ruler() {
        let mut o = Olympians::king(Succession::GenderPreference);
        o.crown(o.founders);
        assert_eq!(
            o.line(),
            ["Mr", "Zeus", "Hercules", "Dionysus", "Aphrodite", "Artemis", "Athena"]
        );
    }

    #[test]
    fn male_preference_internal_ruler() {
        let mut o = Olympians::king(Succession::GenderPreference);
        o.crown(o.zeus_and_hera);
        assert_eq!(
            o.line(),
            ["Zeus", "Hercules", "Mr", "Dionysus", "Aphrodite", "Artemis", "Athena"]
        );
    }

    #[test]
    fn female_preference_root_ruler() {
        let mut o = Olympians::queen(Succession::GenderPreference);
        o.crown(o.founders);
        assert_eq!(
            o.line(),
            ["Sarah", "Aphrodite", "Artemis", "Athena", "Zeus", "Hercules", "Dionysus"]
        );
    }

    #[test]
    fn female_preference_internal_ruler() {
        let mut o = Olympians::queen(Succession::GenderPreference);
        o.crown(o.zeus_and_hera);
        assert_eq!(
            o.line(),
            ["Zeus", "Hercules", "Sarah", "Aphrodite", "Artemis", "Athena", "Dionysus"]
        );
    }

    #[test]
    fn female_preference_leaf_ruler() {
        let mut o = Olympians::queen(Succession::GenderPreference);
        o.crown(o.dionysus);
        assert_eq!(
            o.line(),
            ["Dionysus", "Sarah", "Aphrodite", "Artemis", "Athena", "Zeus", "Hercules"]
        );
    }

    #[test]
    fn display_outlines_reachable_nodes() {
        let o = Olympians::queen(Succession::Absolute);

        let expected = "    Sarah Gibeau (F) and Mr Gibeau
        Zeus Gibeau (M) and Hera Juno
            Hercules Gibeau (M)
        Aphrodite Gibeau (F) and Apollo A
            Artemis Gibeau (F)
            Athena Gibeau (F)
        Dionysus Gibeau (M)
";
        assert_eq!(o.tree.to_string(), expected);
    }
}

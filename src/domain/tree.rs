//! A generic arena-backed tree with an arbitrary branching factor.
//!
//! Nodes are stored in a flat arena and refer to each other by [`NodeId`].
//! A node is owned by the arena, never by its parent: the parent link is a
//! plain index used for lookups, and the child list records insertion order.

use std::{
    fmt,
    ops::{Index, IndexMut},
};

/// Stable handle to a node in a [`Tree`].
///
/// Handles are only meaningful for the tree that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// Returns the position of the node in the arena.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// An in-memory tree of `T` values.
///
/// Nodes are never removed. A node can be detached (it then has no parent and
/// is no longer reachable from the root), but its handle stays valid.
#[derive(Debug, Clone)]
pub struct Tree<T> {
    nodes: Vec<Node<T>>,
    root: Option<NodeId>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Tree<T> {
    /// Creates an empty tree with no root.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
        }
    }

    /// Creates a tree containing a single root node.
    #[must_use]
    pub fn with_root(value: T) -> Self {
        let mut tree = Self::new();
        let root = tree.insert(value);
        tree.root = Some(root);
        tree
    }

    /// Allocates a detached node and returns its handle.
    pub fn insert(&mut self, value: T) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            value,
            parent: None,
            children: Vec::new(),
        });
        id
    }

    /// The root of the tree, if one has been set.
    #[must_use]
    pub const fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Makes `id` the root of the tree.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this tree.
    pub fn set_root(&mut self, id: NodeId) {
        assert!(self.contains(id), "node {id} not found in tree");
        self.root = Some(id);
    }

    /// Whether `id` refers to a node of this tree.
    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        id.0 < self.nodes.len()
    }

    /// The number of nodes in the arena, detached ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the arena holds no nodes at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the value stored at `id`.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&T> {
        self.nodes.get(id.0).map(|node| &node.value)
    }

    /// Returns the value stored at `id` mutably.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        self.nodes.get_mut(id.0).map(|node| &mut node.value)
    }

    /// The parent of `id`, or `None` for a root or detached node.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this tree.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    /// The children of `id`, in insertion order.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this tree.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).children
    }

    /// Creates a new node holding `value` as the last child of `parent`.
    ///
    /// # Panics
    ///
    /// Panics if `parent` does not belong to this tree.
    pub fn add_child(&mut self, parent: NodeId, value: T) -> NodeId {
        assert!(self.contains(parent), "parent node {parent} not found in tree");

        let child = self.insert(value);
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
        child
    }

    /// Puts `new` in place of `old` in the child list of `old`'s parent.
    ///
    /// The first occurrence of `old` is replaced, so `new` takes over its
    /// position among its siblings. `old` is left detached. Returns `false`
    /// (and changes nothing) if `old` has no parent.
    ///
    /// # Panics
    ///
    /// Panics if either node does not belong to this tree, or if `new` is
    /// already attached to a parent.
    pub fn replace_child(&mut self, old: NodeId, new: NodeId) -> bool {
        assert!(
            self.node(new).parent.is_none(),
            "replacement node {new} is already attached"
        );

        let Some(parent) = self.node(old).parent else {
            return false;
        };
        let Some(position) = self.nodes[parent.0]
            .children
            .iter()
            .position(|&child| child == old)
        else {
            return false;
        };

        self.nodes[parent.0].children[position] = new;
        self.nodes[new.0].parent = Some(parent);
        self.nodes[old.0].parent = None;

        tracing::trace!(%old, %new, %parent, position, "spliced node into parent");
        true
    }

    /// The depth of `id`; a node without a parent has depth 1.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this tree.
    #[must_use]
    pub fn depth(&self, id: NodeId) -> usize {
        match self.parent(id) {
            None => 1,
            Some(parent) => self.depth(parent) + 1,
        }
    }

    /// Iterates over `id` followed by each of its strict ancestors.
    #[must_use]
    pub const fn ancestors(&self, id: NodeId) -> Ancestors<'_, T> {
        Ancestors {
            tree: self,
            next: Some(id),
        }
    }

    /// Iterates over `id` and its descendants in pre-order.
    #[must_use]
    pub fn pre_order(&self, id: NodeId) -> PreOrder<'_, T> {
        PreOrder {
            tree: self,
            stack: vec![id],
        }
    }

    /// Iterates over every node reachable from the root, in pre-order.
    ///
    /// Yields nothing if the tree has no root.
    #[must_use]
    pub fn traverse(&self) -> PreOrder<'_, T> {
        PreOrder {
            tree: self,
            stack: self.root.into_iter().collect(),
        }
    }

    /// Writes each reachable node on its own line, indented by four spaces
    /// per level of depth.
    ///
    /// # Errors
    ///
    /// Propagates errors from the underlying writer.
    pub fn write_outline<W, D>(
        &self,
        out: &mut W,
        mut label: impl FnMut(NodeId) -> D,
    ) -> fmt::Result
    where
        W: fmt::Write,
        D: fmt::Display,
    {
        for id in self.traverse() {
            let indent = "    ".repeat(self.depth(id));
            writeln!(out, "{indent}{}", label(id))?;
        }
        Ok(())
    }

    /// Renders the outline produced by [`Tree::write_outline`] as a string.
    #[must_use]
    pub fn outline<D: fmt::Display>(&self, label: impl FnMut(NodeId) -> D) -> String {
        let mut out = String::new();
        // writing into a String cannot fail
        let _ = self.write_outline(&mut out, label);
        out
    }

    fn node(&self, id: NodeId) -> &Node<T> {
        self.nodes
            .get(id.0)
            .unwrap_or_else(|| panic!("node {id} not found in tree"))
    }
}

impl<T> Index<NodeId> for Tree<T> {
    type Output = T;

    fn index(&self, id: NodeId) -> &Self::Output {
        &self.node(id).value
    }
}

impl<T> IndexMut<NodeId> for Tree<T> {
    fn index_mut(&mut self, id: NodeId) -> &mut Self::Output {
        &mut self
            .nodes
            .get_mut(id.0)
            .unwrap_or_else(|| panic!("node {id} not found in tree"))
            .value
    }
}

impl<T: fmt::Display> fmt::Display for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.write_outline(f, |id| &self[id])
    }
}

/// Iterator over a node and its ancestors. See [`Tree::ancestors`].
#[derive(Debug, Clone)]
pub struct Ancestors<'a, T> {
    tree: &'a Tree<T>,
    next: Option<NodeId>,
}

impl<T> Iterator for Ancestors<'_, T> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = self.tree.parent(current);
        Some(current)
    }
}

/// Pre-order iterator over a subtree. See [`Tree::pre_order`].
#[derive(Debug, Clone)]
pub struct PreOrder<'a, T> {
    tree: &'a Tree<T>,
    stack: Vec<NodeId>,
}

impl<T> Iterator for PreOrder<'_, T> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.stack.pop()?;
        // reversed so the eldest child is visited first
        self.stack
            .extend(self.tree.children(current).iter().rev().copied());
        Some(current)
    }
}

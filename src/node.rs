//! A single vertex of a [`crate::tree::PrefixTree`].
//!
//! A node records the character on the edge from its parent, whether the
//! path from the root to it spells a stored string, and its children keyed
//! by their character. Nodes hold no traversal logic; the tree drives all
//! walks.
//!
//! ```
//! use prefix_tree::{Node, NodeError};
//!
//! let mut node = Node::root();
//! node.add_child('a', Node::new('a')).unwrap();
//! assert!(node.has_child('a'));
//! assert_eq!(node.get_child('a').unwrap().character(), Some('a'));
//! assert_eq!(node.get_child('b').unwrap_err(), NodeError::MissingChild('b'));
//! ```

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use crate::error::NodeError;

/// Tree vertex owning its subtree.
///
/// Dropping a node tears its subtree down iteratively, so any depth is
/// safe. The derived `Clone`, `PartialEq` and `Debug` recurse once per
/// level and are limited by the call stack.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Node {
    // None only for the root sentinel
    character: Option<char>,
    pub(crate) children: BTreeMap<char, Node>,
    pub(crate) terminal: bool,
}

impl Node {
    /// Create a non-terminal node for `character` with no children.
    pub fn new(character: char) -> Self {
        Self {
            character: Some(character),
            children: BTreeMap::new(),
            terminal: false,
        }
    }

    /// Create a root node. The root carries no character.
    pub fn root() -> Self {
        Self::default()
    }

    /// The character on the edge from this node's parent, `None` for a root.
    #[inline(always)]
    pub fn character(&self) -> Option<char> {
        self.character
    }

    /// Does the path from the root to this node spell a stored string?
    #[inline(always)]
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Is there a child for `c`?
    pub fn has_child(&self, c: char) -> bool {
        self.children.contains_key(&c)
    }

    /// Get the child for `c`.
    ///
    /// Asking for a character with no child is a caller error and is
    /// reported as [`NodeError::MissingChild`].
    pub fn get_child(&self, c: char) -> Result<&Node, NodeError> {
        self.children.get(&c).ok_or(NodeError::MissingChild(c))
    }

    /// Attach `node` as the child for `c`, taking ownership of it.
    ///
    /// An existing child is never replaced: the call fails with
    /// [`NodeError::ChildExists`] and `node` is dropped.
    ///
    /// [`crate::tree::PrefixTree::insert`] does not go through here; it
    /// descends with a get-or-create step that reuses any existing child.
    pub fn add_child(&mut self, c: char, node: Node) -> Result<(), NodeError> {
        match self.children.entry(c) {
            Entry::Occupied(_) => Err(NodeError::ChildExists(c)),
            Entry::Vacant(slot) => {
                slot.insert(node);
                Ok(())
            }
        }
    }

    /// Iterate over `(character, child)` pairs in ascending character order.
    pub fn children(&self) -> impl Iterator<Item = (char, &Node)> {
        self.children.iter().map(|(c, n)| (*c, n))
    }

    /// How many children does this node have?
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Does this node have no children?
    ///
    /// Unrelated to [`crate::tree::PrefixTree::is_empty`], which counts
    /// stored strings.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    // Descend into the child for `c`, creating it first if missing. An
    // existing child and its subtree are kept.
    pub(crate) fn child_or_insert(&mut self, c: char) -> &mut Node {
        self.children.entry(c).or_insert_with(|| Node::new(c))
    }
}

impl Drop for Node {
    fn drop(&mut self) {
        let mut stack: Vec<Node> = std::mem::take(&mut self.children)
            .into_values()
            .collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(std::mem::take(&mut node.children).into_values());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_creates_a_bare_node() {
        let node = Node::new('x');
        assert_eq!(node.character(), Some('x'));
        assert!(!node.is_terminal());
        assert!(node.is_empty());
        assert_eq!(0, node.len());
    }

    #[test]
    fn it_creates_a_root_without_character() {
        let root = Node::root();
        assert_eq!(root.character(), None);
        assert!(!root.is_terminal());
    }

    #[test]
    fn it_adds_and_gets_children() {
        let mut node = Node::root();
        node.add_child('b', Node::new('b')).unwrap();
        node.add_child('a', Node::new('a')).unwrap();
        assert!(node.has_child('a'));
        assert!(node.has_child('b'));
        assert!(!node.has_child('c'));
        assert_eq!(node.get_child('b').unwrap().character(), Some('b'));
        assert_eq!(2, node.len());
    }

    #[test]
    fn it_fails_fast_on_missing_child() {
        let node = Node::new('a');
        assert_eq!(node.get_child('z'), Err(NodeError::MissingChild('z')));
    }

    #[test]
    fn it_refuses_to_overwrite_a_child() {
        let mut node = Node::root();
        let mut existing = Node::new('a');
        existing.add_child('b', Node::new('b')).unwrap();
        node.add_child('a', existing).unwrap();

        assert_eq!(
            node.add_child('a', Node::new('a')),
            Err(NodeError::ChildExists('a'))
        );
        // Original subtree survives
        assert!(node.get_child('a').unwrap().has_child('b'));
    }

    #[test]
    fn it_lists_children_in_character_order() {
        let mut node = Node::root();
        for c in ['q', 'b', 'z', 'a'] {
            node.add_child(c, Node::new(c)).unwrap();
        }
        let order: Vec<char> = node.children().map(|(c, _)| c).collect();
        assert_eq!(vec!['a', 'b', 'q', 'z'], order);
    }

    #[test]
    fn it_reuses_existing_child_on_descend() {
        let mut node = Node::root();
        node.child_or_insert('a').terminal = true;
        assert!(node.child_or_insert('a').is_terminal());
        assert_eq!(1, node.len());
    }

    #[test]
    fn it_descends_without_replacing_subtree() {
        let mut node = Node::root();
        node.child_or_insert('a').child_or_insert('b').terminal = true;
        node.child_or_insert('a').child_or_insert('c');
        let a = node.get_child('a').unwrap();
        assert_eq!(2, a.len());
        assert!(a.get_child('b').unwrap().is_terminal());
        assert!(!a.get_child('c').unwrap().is_terminal());
    }

    #[test]
    fn it_drops_a_deep_chain() {
        let mut root = Node::root();
        let mut node = &mut root;
        for _ in 0..100_000 {
            node = node.child_or_insert('x');
        }
        node.terminal = true;
        drop(root);
    }
}

//! Provides PrefixTree iterators.
//!
//! [`Strings`] walks the tree depth-first with an explicit stack, so it is
//! lazy and holds no state shared with the tree: every call to
//! [`crate::tree::PrefixTree::iter`] starts a fresh walk.
//!
//! ```
//! use prefix_tree::PrefixTree;
//!
//! let tree = PrefixTree::from_strings(["ABC", "ABD", "A", "XYZ"]);
//! let mut strings = tree.iter();
//! assert_eq!(strings.next().as_deref(), Some("A"));
//! assert_eq!(strings.next().as_deref(), Some("ABC"));
//!
//! // Lazy completion stops walking as soon as we stop asking
//! let first = tree.completions("AB").next();
//! assert_eq!(first.as_deref(), Some("ABC"));
//! ```
use std::collections::btree_map;
use std::iter::FusedIterator;

use crate::node::Node;
use crate::tree::PrefixTree;

/// Iterator over the strings stored beneath a node.
#[derive(Debug)]
pub struct Strings<'a> {
    // Path from the tree root to the node on top of `stack`
    prefix: String,
    stack: Vec<btree_map::Iter<'a, char, Node>>,
    // Node entered but not yet reported or expanded
    pending: Option<&'a Node>,
}

impl<'a> Strings<'a> {
    pub(crate) fn new(node: &'a Node, prefix: &str) -> Self {
        Self {
            prefix: prefix.to_owned(),
            stack: vec![],
            pending: Some(node),
        }
    }

    pub(crate) fn empty() -> Self {
        Self {
            prefix: String::new(),
            stack: vec![],
            pending: None,
        }
    }
}

impl<'a> Iterator for Strings<'a> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(node) = self.pending.take() {
                self.stack.push(node.children.iter());
                if node.is_terminal() {
                    return Some(self.prefix.clone());
                }
                continue;
            }
            match self.stack.last_mut()?.next() {
                Some((c, child)) => {
                    self.prefix.push(*c);
                    self.pending = Some(child);
                }
                None => {
                    self.stack.pop();
                    // The starting node's chars belong to the caller's prefix
                    if !self.stack.is_empty() {
                        self.prefix.pop();
                    }
                }
            }
        }
    }
}

impl FusedIterator for Strings<'_> {}

// Iterator
impl<'a> IntoIterator for &'a PrefixTree {
    type Item = String;
    type IntoIter = Strings<'a>;

    fn into_iter(self) -> Self::IntoIter {
        Strings::new(self.root(), "")
    }
}

impl IntoIterator for PrefixTree {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.strings().into_iter()
    }
}

//! Provides a prefix tree storing a set of strings, one `char` per edge.
//!
//! Insertion, membership and prefix completion cost time proportional to
//! the length of the query plus the size of the matched subtree. The height
//! of the tree is the length of the longest stored string, independent of
//! how many strings are stored, which makes it a good fit for spell-check
//! dictionaries and autocomplete.
//!
//! Example 1
//! ```
//! use prefix_tree::PrefixTree;
//!
//! let mut tree = PrefixTree::new();
//! for s in ["ABC", "ABD", "A", "XYZ"] {
//!     tree.insert(s);
//! }
//!
//! assert_eq!(tree.len(), 4);
//! assert!(tree.contains("A"));
//! assert!(!tree.contains("AB")); // Only a prefix of stored strings
//! assert_eq!(tree.complete("AB"), vec!["ABC", "ABD"]);
//! assert!(tree.complete("Q").is_empty());
//! ```
//!
//! Trees can also be built directly from any collection of strings. All
//! enumerations are in lexicographic `char` order.
//!
//! Example 2
//! ```
//! use prefix_tree::PrefixTree;
//!
//! let tree: PrefixTree = "Shelly sells seashells by the sea shore"
//!     .split_whitespace()
//!     .collect();
//!
//! assert_eq!(tree.complete("se"), vec!["sea", "seashells", "sells"]);
//! assert_eq!(
//!     format!("{:?}", tree),
//!     r#"PrefixTree(["Shelly", "by", "sea", "seashells", "sells", "shore", "the"])"#
//! );
//! ```

use std::fmt;

use tracing::{debug, trace};

use crate::iterator::Strings;
use crate::node::Node;

/// Stores a set of strings as paths of single-character nodes.
///
/// `insert`, `contains`, `contains_prefix`, `iter`, `completions` and drop
/// walk the tree without recursion and accept strings of any length.
/// `complete`, `strings`, `Debug`, `Clone` and `==` recurse once per
/// character, so very long strings (tens of thousands of chars) can
/// exhaust the thread's stack there.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct PrefixTree {
    root: Node,
    size: usize,
}

impl PrefixTree {
    /// Create a new, empty PrefixTree.
    pub fn new() -> Self {
        Self {
            root: Node::root(),
            size: 0,
        }
    }

    /// Create a PrefixTree holding each of the supplied strings.
    pub fn from_strings<I, S>(strings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tree = Self::new();
        tree.extend(strings);
        tree
    }

    /// The root node. It carries no character and is terminal only if the
    /// empty string was inserted.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// How many distinct strings does the PrefixTree contain?
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Is the PrefixTree empty?
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Does the PrefixTree contain the supplied string?
    pub fn contains(&self, string: &str) -> bool {
        let (node, depth) = self.find_node(string);
        depth == string.chars().count() && node.is_terminal()
    }

    /// Does the PrefixTree contain at least one string starting with `prefix`?
    pub fn contains_prefix(&self, prefix: &str) -> bool {
        let (node, depth) = self.find_node(prefix);
        // Nodes are only ever created on the path to a terminal, so any
        // node with children leads to a stored string.
        depth == prefix.chars().count() && (node.is_terminal() || !node.is_empty())
    }

    /// Insert the string into the PrefixTree. Returns true if it was not
    /// already present. Inserting the empty string marks the root terminal.
    pub fn insert(&mut self, string: &str) -> bool {
        let already_present = self.contains(string);

        let node = string
            .chars()
            .fold(&mut self.root, |node, c| node.child_or_insert(c));
        node.terminal = true;

        if already_present {
            trace!(string, "duplicate insert");
        } else {
            self.size += 1;
            trace!(string, size = self.size, "inserted");
        }
        !already_present
    }

    /// Every stored string starting with `prefix`, in lexicographic order.
    /// `prefix` itself is included if it is stored.
    pub fn complete(&self, prefix: &str) -> Vec<String> {
        let mut completions = vec![];
        let (node, depth) = self.find_node(prefix);
        if depth == prefix.chars().count() {
            let mut buffer = String::from(prefix);
            Self::traverse(node, &mut buffer, &mut |s: &str| {
                completions.push(s.to_owned())
            });
        }
        debug!(
            prefix,
            depth,
            completions = completions.len(),
            "completed prefix"
        );
        completions
    }

    /// Every stored string, in lexicographic order. Same as `complete("")`.
    pub fn strings(&self) -> Vec<String> {
        let mut strings = Vec::with_capacity(self.size);
        let mut buffer = String::new();
        Self::traverse(&self.root, &mut buffer, &mut |s: &str| {
            strings.push(s.to_owned())
        });
        strings
    }

    /// Create a lazy iterator over every stored string. Yields the same
    /// sequence as [`PrefixTree::strings`].
    pub fn iter(&self) -> Strings<'_> {
        self.into_iter()
    }

    /// Create a lazy iterator over every stored string starting with
    /// `prefix`. Yields the same sequence as [`PrefixTree::complete`].
    pub fn completions(&self, prefix: &str) -> Strings<'_> {
        let (node, depth) = self.find_node(prefix);
        if depth == prefix.chars().count() {
            Strings::new(node, prefix)
        } else {
            Strings::empty()
        }
    }

    // Walk from the root for as long as `string` has matching edges.
    // Returns the deepest matched node and the number of chars matched.
    pub(crate) fn find_node(&self, string: &str) -> (&Node, usize) {
        let mut node = &self.root;
        let mut depth = 0;
        for c in string.chars() {
            let Ok(child) = node.get_child(c) else {
                break;
            };
            node = child;
            depth += 1;
        }
        (node, depth)
    }

    // Depth-first, terminal visited before its children. `prefix` holds
    // the path to `node` and is restored before returning.
    fn traverse<F: FnMut(&str)>(node: &Node, prefix: &mut String, visit: &mut F) {
        if node.is_terminal() {
            visit(prefix.as_str());
        }
        for (c, child) in node.children() {
            prefix.push(c);
            Self::traverse(child, prefix, visit);
            prefix.pop();
        }
    }
}

impl fmt::Debug for PrefixTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PrefixTree").field(&self.strings()).finish()
    }
}

impl<S: AsRef<str>> Extend<S> for PrefixTree {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for s in iter {
            self.insert(s.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for PrefixTree {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_strings(iter)
    }
}

//! Provides a prefix tree (trie) for storing a set of strings so that
//! membership and "every string starting with P" queries cost time
//! proportional to the query and the size of the matched subtree, not to
//! the number of strings stored.
//!
//! Each string is stored one `char` per edge along a path from the root
//! to a terminal [`crate::node::Node`]. The tree itself is
//! [`crate::tree::PrefixTree`].
//!
//! Children are kept in lexicographic `char` order, so every enumeration
//! ([`crate::tree::PrefixTree::strings`], [`crate::tree::PrefixTree::complete`]
//! and the iterators in [`crate::iterator`]) is deterministic: a terminal
//! string is reported before any longer string that extends it.
//!
//! Examples:
//! * tree : [`crate::tree`]
//! * iterator : [`crate::iterator`]
//!
//! Typical usages for this data structure:
//!  - Autocomplete
//!  - Spell-check dictionaries
//!  - Prefix matching keys
//!
//! The tree is not synchronised. Callers sharing one across threads must
//! serialise access themselves (e.g. behind a `Mutex`).

pub mod error;

pub mod iterator;

pub mod node;

pub mod tree;

pub use error::NodeError;
pub use node::Node;
pub use tree::PrefixTree;

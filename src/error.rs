//! Errors raised by [`crate::node::Node`] accessors.

/// Misuse of a node's child table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum NodeError {
    /// No child exists for the requested character.
    #[error("no child node for character {0:?}")]
    MissingChild(char),

    /// A child already exists for the character; the existing subtree was kept.
    #[error("child node for character {0:?} already exists")]
    ChildExists(char),
}

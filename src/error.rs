//! Error types for seqkit operations.
//!
//! Only the dependency leveling engine can fail; the locators report
//! absence as `None` and the sort engine has no failure mode. All errors
//! are raised synchronously at the point of detection and are terminal
//! for the call; nothing is retried or swallowed.

/// Errors produced by [`group_by_dependencies`](crate::levels::group_by_dependencies).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The dependency function returned an item that is not a member of
    /// the input item set. `index` is the position of the item whose
    /// dependency list referenced it.
    #[error("item at index {index} depends on an item outside the input set")]
    ForeignDependency { index: usize },

    /// The dependency graph contains a cycle. `index` is the position of
    /// an item on the cycle. Callers should treat this as a modeling bug
    /// in the supplied dependency function, not a transient condition.
    #[error("circular dependency detected at item index {index}")]
    CircularDependency { index: usize },
}

pub type Result<T> = std::result::Result<T, Error>;

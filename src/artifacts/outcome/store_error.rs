/// Anticipated failures of store operations
///
/// Each variant's display text is the message shown to the caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("Commit {0} does not exist.")]
    CommitNotFound(String),

    #[error("Nothing to commit, working directory clean.")]
    NothingToCommit,

    #[error("Object {0} is not committed.")]
    NotCommitted(String),

    #[error("Branch {0} already exists.")]
    BranchExists(String),

    #[error("Branch {0} does not exist.")]
    BranchNotFound(String),

    #[error("Cannot remove current branch.")]
    CannotRemoveCurrentBranch,

    /// The current branch has an empty history
    #[error("Branch {0} does not have any commits yet.")]
    NoCommits(String),
}

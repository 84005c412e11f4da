//! Branch history
//!
//! A branch is a name plus its commits, oldest first. The sequence only grows by
//! appending a new commit and only shrinks by checking out an earlier commit,
//! which drops every later commit for good.
//!
//! Commits are shared through `Arc` so a branch created from another one gets
//! its own vector of the very same commits. Commits are immutable once
//! hashed, so the sharing is invisible to callers.

use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::Snapshot;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::outcome::{Outcome, StoreError};
use std::sync::Arc;
use tracing::{debug, info};

/// Named, ordered history of commits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branch<V> {
    name: BranchName,
    commits: Vec<Arc<Commit<V>>>,
}

impl<V: Clone> Branch<V> {
    /// Create a branch with an empty history
    pub fn new(name: BranchName) -> Self {
        Branch {
            name,
            commits: Vec::new(),
        }
    }

    /// Create a branch whose history starts as a copy of `commits`
    ///
    /// The vector is owned by the new branch; later appends or truncations on
    /// either side are not visible to the other.
    pub fn with_history(name: BranchName, commits: &[Arc<Commit<V>>]) -> Self {
        Branch {
            name,
            commits: commits.to_vec(),
        }
    }

    pub fn name(&self) -> &BranchName {
        &self.name
    }

    pub fn commits(&self) -> &[Arc<Commit<V>>] {
        &self.commits
    }

    pub fn last_commit(&self) -> Option<&Arc<Commit<V>>> {
        self.commits.last()
    }

    pub fn is_empty(&self) -> bool {
        self.commits.is_empty()
    }

    pub fn len(&self) -> usize {
        self.commits.len()
    }

    /// Snapshot of the newest commit, if any
    pub fn head_snapshot(&self) -> Option<&Snapshot<V>> {
        self.last_commit().map(|commit| commit.snapshot())
    }

    /// Append a commit built from an already merged snapshot
    ///
    /// # Arguments
    ///
    /// * `message` - Commit message
    /// * `snapshot` - Complete set of tracked objects for the new commit
    /// * `changed` - Number of staged changes folded into this commit
    /// * `timestamp` - Commit creation time
    pub fn make_new_commit(
        &mut self,
        message: &str,
        snapshot: Snapshot<V>,
        changed: usize,
        timestamp: chrono::DateTime<chrono::FixedOffset>,
    ) -> Outcome<Arc<Commit<V>>> {
        let mut commit = Commit::new_with_timestamp(snapshot, message.to_string(), timestamp);
        commit.assign_hash();

        let commit = Arc::new(commit);
        self.commits.push(commit.clone());

        info!(
            branch = %self.name,
            commit = %commit.id(),
            changed,
            "created commit"
        );

        Outcome::success(format!("{message}\n\t{changed} objects changed"), commit)
    }

    /// Report the committed value of an object that is being removed
    ///
    /// Nothing is mutated here; the object disappears from the next commit
    /// because its name sits in the staging area's removal set.
    pub fn remove_file(&self, name: &str) -> Outcome<V> {
        match self.last_commit().and_then(|commit| commit.object(name)) {
            Some(value) => Outcome::success(format!("Added {name} for removal."), value.clone()),
            None => Outcome::failure(StoreError::NotCommitted(name.to_string())),
        }
    }

    /// Truncate the history so that the commit with `hash` becomes the newest
    ///
    /// The oldest commit with a matching id wins. An unknown hash leaves the
    /// history untouched.
    pub fn checkout(&mut self, hash: &str) -> Outcome<Arc<Commit<V>>> {
        let Some(index) = self.commits.iter().position(|commit| commit.id() == hash) else {
            debug!(branch = %self.name, commit = hash, "unknown commit, checkout refused");
            return Outcome::failure(StoreError::CommitNotFound(hash.to_string()));
        };

        let discarded = self.commits.len() - (index + 1);
        self.commits.truncate(index + 1);

        info!(branch = %self.name, commit = hash, discarded, "moved branch head");

        let commit = self.commits[index].clone();
        Outcome::success(format!("HEAD is now at {hash}."), commit)
    }
}

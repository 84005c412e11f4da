//! Branch manager
//!
//! Owns the branch collection, the current branch and the staging area, and
//! implements every mutating and querying operation of the store.
//!
//! ## Branch collection
//!
//! The current branch is held apart from the other branches. Switching
//! branches swaps it with the requested one, so the current branch can never
//! be missing from the collection and can never be removed from it.
//!
//! ## Staging area
//!
//! There is one staging area per repository, shared by all branches. A commit
//! on the current branch consumes it entirely.

use crate::areas::staging::StagingArea;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::branch::history::Branch;
use crate::artifacts::objects::clock::Clock;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::outcome::{Outcome, StoreError};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, info};

/// Branch collection plus staging area
#[derive(Debug, Clone)]
pub struct BranchManager<V> {
    /// Checked-out branch
    current: Branch<V>,
    /// Every other branch, by name
    branches: BTreeMap<BranchName, Branch<V>>,
    staging: StagingArea<V>,
    clock: Clock,
}

impl<V: Clone> BranchManager<V> {
    /// Create a manager holding a single empty `master` branch
    pub fn new() -> Self {
        BranchManager {
            current: Branch::new(BranchName::default_branch()),
            branches: BTreeMap::new(),
            staging: StagingArea::new(),
            clock: Clock::default(),
        }
    }

    /// Replace the source of commit timestamps
    pub fn set_clock(&mut self, clock: Clock) {
        self.clock = clock;
    }

    pub fn current_branch(&self) -> &Branch<V> {
        &self.current
    }

    /// Look up any branch, the current one included
    pub fn branch(&self, name: &str) -> Option<&Branch<V>> {
        if self.current.name().as_ref() == name {
            Some(&self.current)
        } else {
            self.branches.get(name)
        }
    }

    /// All branch names in ascending order
    pub fn branch_names(&self) -> Vec<&BranchName> {
        let mut names = self
            .branches
            .keys()
            .chain(std::iter::once(self.current.name()))
            .collect::<Vec<_>>();
        names.sort();

        names
    }

    /// Number of changes waiting for the next commit
    pub fn staged_changes(&self) -> usize {
        self.staging.changed()
    }

    /// Stage `object` under `name`
    pub fn add(&mut self, name: &str, object: V) -> Outcome<V> {
        self.staging.stage(name, object.clone());
        debug!(name, changed = self.staging.changed(), "staged object");

        Outcome::success(format!("Added {name} to stage."), object)
    }

    /// Fold the staging area into a new commit on the current branch
    pub fn commit(&mut self, message: &str) -> Outcome<Arc<Commit<V>>> {
        if self.staging.is_clean() {
            debug!(branch = %self.current.name(), "nothing staged, commit refused");
            return StoreError::NothingToCommit.into();
        }

        let snapshot = self.staging.overlay(self.current.head_snapshot());
        let changed = self.staging.changed();
        let outcome = self
            .current
            .make_new_commit(message, snapshot, changed, self.clock.now());
        self.staging.clear();

        outcome
    }

    /// Stage the removal of `name`
    ///
    /// A name that is only staged is dropped from the staging area. A name
    /// committed on the current branch is excluded from the next commit.
    pub fn remove_file(&mut self, name: &str) -> Outcome<V> {
        if let Some(object) = self.staging.unstage(name) {
            debug!(name, "dropped staged object");
            return Outcome::success(format!("Added {name} for removal."), object);
        }

        let outcome = self.current.remove_file(name);
        if outcome.is_success() {
            self.staging.mark_removed(name);
            debug!(name, changed = self.staging.changed(), "staged removal");
        } else {
            debug!(name, "object not committed, removal refused");
        }

        outcome
    }

    /// Move the current branch back to the commit with `hash`
    pub fn checkout_hash(&mut self, hash: &str) -> Outcome<Arc<Commit<V>>> {
        self.current.checkout(hash)
    }

    /// Create a branch starting from the current branch's history
    pub fn create(&mut self, branch_name: &str) -> Outcome<&Branch<V>> {
        if self.branch(branch_name).is_some() {
            debug!(branch = branch_name, "branch exists, create refused");
            return StoreError::BranchExists(branch_name.to_string()).into();
        }

        let name = BranchName::from(branch_name);
        let branch = Branch::with_history(name.clone(), self.current.commits());
        info!(
            branch = branch_name,
            from = %self.current.name(),
            commits = branch.len(),
            "created branch"
        );

        let branch = self.branches.entry(name).or_insert(branch);
        Outcome::success(format!("Created branch {branch_name}."), &*branch)
    }

    /// Make `branch_name` the current branch
    pub fn checkout(&mut self, branch_name: &str) -> Outcome<&Branch<V>> {
        if self.current.name().as_ref() != branch_name {
            let Some(target) = self.branches.remove(branch_name) else {
                debug!(branch = branch_name, "unknown branch, switch refused");
                return StoreError::BranchNotFound(branch_name.to_string()).into();
            };

            let previous = std::mem::replace(&mut self.current, target);
            info!(from = %previous.name(), to = branch_name, "switched branch");
            self.branches.insert(previous.name().clone(), previous);
        }

        Outcome::success(format!("Switched to branch {branch_name}."), &self.current)
    }

    /// Delete a branch other than the current one
    pub fn remove(&mut self, branch_name: &str) -> Outcome<Branch<V>> {
        if self.current.name().as_ref() == branch_name {
            debug!(branch = branch_name, "current branch, removal refused");
            return StoreError::CannotRemoveCurrentBranch.into();
        }

        match self.branches.remove(branch_name) {
            Some(branch) => {
                info!(branch = branch_name, "removed branch");
                Outcome::success(format!("Removed branch {branch_name}."), branch)
            }
            None => {
                debug!(branch = branch_name, "unknown branch, removal refused");
                StoreError::BranchNotFound(branch_name.to_string()).into()
            }
        }
    }

    /// List branches, marking the current one with `* `
    pub fn list(&self) -> Outcome<()> {
        let lines = self
            .branch_names()
            .into_iter()
            .map(|name| {
                let marker = if name == self.current.name() { "* " } else { "  " };
                format!("{marker}{name}")
            })
            .collect::<Vec<_>>();

        Outcome::success(lines.join("\n"), ())
    }

    /// Render the current branch's history, newest commit first
    pub fn log(&self) -> Outcome<()> {
        if self.current.is_empty() {
            return self.no_commits();
        }

        let entries = self
            .current
            .commits()
            .iter()
            .rev()
            .map(|commit| commit.render())
            .collect::<Vec<_>>();

        Outcome::success(entries.join("\n\n"), ())
    }

    /// Newest commit of the current branch
    pub fn head(&self) -> Outcome<Arc<Commit<V>>> {
        match self.current.last_commit() {
            Some(commit) => Outcome::success(commit.message(), commit.clone()),
            None => self.no_commits(),
        }
    }

    /// Committed value of `name` on the current branch
    pub fn get(&self, name: &str) -> Outcome<V> {
        match self.current.head_snapshot().and_then(|snapshot| snapshot.get(name)) {
            Some(object) => Outcome::success(format!("Found object {name}."), object.clone()),
            None => StoreError::NotCommitted(name.to_string()).into(),
        }
    }

    fn no_commits<T>(&self) -> Outcome<T> {
        StoreError::NoCommits(self.current.name().to_string()).into()
    }
}

impl<V: Clone> Default for BranchManager<V> {
    fn default() -> Self {
        Self::new()
    }
}

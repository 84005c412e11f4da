//! Staging area
//!
//! Tracks what goes into the next commit: objects added by name, names marked
//! for removal, and a count of staged changes. The next successful commit
//! folds everything into a full snapshot and clears the area.

use crate::artifacts::objects::Snapshot;
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone)]
pub(crate) struct StagingArea<V> {
    /// Objects staged for addition, by name
    added: BTreeMap<String, V>,
    /// Names staged for removal
    removed: BTreeSet<String>,
    /// Number of staged changes since the last commit
    changed: usize,
}

impl<V: Clone> StagingArea<V> {
    pub fn new() -> Self {
        StagingArea {
            added: BTreeMap::new(),
            removed: BTreeSet::new(),
            changed: 0,
        }
    }

    pub fn changed(&self) -> usize {
        self.changed
    }

    pub fn is_clean(&self) -> bool {
        self.changed == 0
    }

    /// Stage `object` under `name`
    ///
    /// Re-staging a name replaces its value without counting another change.
    pub fn stage(&mut self, name: &str, object: V) {
        if self.added.insert(name.to_string(), object).is_none() {
            self.changed += 1;
        }
    }

    /// Drop a staged addition and mark the name for removal
    pub fn unstage(&mut self, name: &str) -> Option<V> {
        let object = self.added.remove(name)?;
        self.mark_removed(name);

        Some(object)
    }

    pub fn mark_removed(&mut self, name: &str) {
        self.removed.insert(name.to_string());
        self.changed += 1;
    }

    /// Build the next snapshot: `base` overlaid with additions, minus removals
    pub fn overlay(&self, base: Option<&Snapshot<V>>) -> Snapshot<V> {
        let mut snapshot = base.cloned().unwrap_or_default();
        snapshot.extend(
            self.added
                .iter()
                .map(|(name, object)| (name.clone(), object.clone())),
        );
        snapshot.retain(|name, _| !self.removed.contains(name));

        snapshot
    }

    pub fn clear(&mut self) {
        self.added.clear();
        self.removed.clear();
        self.changed = 0;
    }
}

impl<V: Clone> Default for StagingArea<V> {
    fn default() -> Self {
        Self::new()
    }
}

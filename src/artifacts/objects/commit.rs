//! Commit object
//!
//! A commit is an immutable, timestamped snapshot of everything tracked at the
//! moment it was created. Its id is assigned right after construction and
//! never changes afterwards.
//!
//! ## Log format
//!
//! ```text
//! Commit <sha>
//! Date: <Thu Jan 01 00:00 2026 +0000>
//!
//! 	<message>
//! ```

use crate::artifacts::objects::commit_id::CommitId;
use crate::artifacts::objects::{DATE_FORMAT, Snapshot};

/// Commit object
///
/// Holds the full snapshot rather than a diff against its predecessor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit<V> {
    /// Identifier, empty until `assign_hash` runs
    id: CommitId,
    /// Every tracked object at this point
    snapshot: Snapshot<V>,
    message: String,
    timestamp: chrono::DateTime<chrono::FixedOffset>,
}

impl<V> Commit<V> {
    /// Create a commit stamped with the current local time
    pub fn new(snapshot: Snapshot<V>, message: String) -> Self {
        Self::new_with_timestamp(snapshot, message, chrono::Local::now().fixed_offset())
    }

    /// Create a commit with a specific timestamp
    ///
    /// # Arguments
    ///
    /// * `snapshot` - Complete mapping of tracked objects
    /// * `message` - Commit message
    /// * `timestamp` - Creation time with timezone
    pub fn new_with_timestamp(
        snapshot: Snapshot<V>,
        message: String,
        timestamp: chrono::DateTime<chrono::FixedOffset>,
    ) -> Self {
        Commit {
            id: CommitId::default(),
            snapshot,
            message,
            timestamp,
        }
    }

    /// Compute and store the id from the timestamp and the message
    pub fn assign_hash(&mut self) -> &CommitId {
        self.id = CommitId::compute(&self.timestamp, &self.message);
        &self.id
    }

    pub fn id(&self) -> &CommitId {
        &self.id
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn snapshot(&self) -> &Snapshot<V> {
        &self.snapshot
    }

    /// Look up a tracked object by name
    pub fn object(&self, name: &str) -> Option<&V> {
        self.snapshot.get(name)
    }

    /// All tracked object values, ordered by name
    pub fn objects(&self) -> Vec<&V> {
        self.snapshot.values().collect()
    }

    /// Format timestamp in human-readable form
    ///
    /// # Returns
    ///
    /// String like "Thu Jan 01 12:34 2026 +0000"
    pub fn readable_timestamp(&self) -> String {
        self.timestamp.format(DATE_FORMAT).to_string()
    }

    /// Format the commit as a log entry
    pub fn render(&self) -> String {
        format!(
            "Commit {}\nDate: {}\n\n\t{}",
            self.id,
            self.readable_timestamp(),
            self.message
        )
    }
}

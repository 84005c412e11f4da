//! Commit identifier (SHA-1 hash)
//!
//! Commit ids are 40-character hexadecimal strings. They are derived from the
//! commit timestamp (formatted with minute resolution) followed by the commit
//! message. The snapshot itself does not take part in the hash, so two commits
//! with the same message created within the same minute share an id.
//!
//! ## Format
//!
//! - Full: 40 hex characters (e.g., "abc123...def")
//! - Short: First 7 characters (e.g., "abc1234")

use crate::artifacts::objects::{COMMIT_ID_LENGTH, DATE_FORMAT};
use sha1::{Digest, Sha1};

/// Commit identifier (SHA-1 hash)
///
/// The default value is the empty id of a commit whose hash has not been
/// assigned yet.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct CommitId(String);

impl CommitId {
    /// Hash the formatted timestamp concatenated with the message
    ///
    /// # Arguments
    ///
    /// * `timestamp` - Commit creation time
    /// * `message` - Commit message
    pub fn compute(timestamp: &chrono::DateTime<chrono::FixedOffset>, message: &str) -> Self {
        let mut hasher = Sha1::new();
        hasher.update(timestamp.format(DATE_FORMAT).to_string().as_bytes());
        hasher.update(message.as_bytes());

        let digest = hasher.finalize();
        Self(format!("{digest:x}"))
    }

    /// Whether the id has been assigned
    pub fn is_assigned(&self) -> bool {
        self.0.len() == COMMIT_ID_LENGTH
    }

    /// Get abbreviated form of the commit id
    ///
    /// # Returns
    ///
    /// First 7 characters of the hash, or the whole id if it is shorter
    pub fn to_short_id(&self) -> String {
        self.0.chars().take(7).collect()
    }
}

impl AsRef<str> for CommitId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for CommitId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for CommitId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl std::fmt::Display for CommitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

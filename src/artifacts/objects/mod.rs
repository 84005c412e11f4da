//! Commit objects and their identifiers
//!
//! The store tracks opaque named objects. A commit captures the complete set of
//! tracked objects at one point in time, never a delta against its parent:
//!
//! - **Snapshot**: Mapping from object name to object value
//! - **Commit**: Snapshot plus message, timestamp and identifier
//! - **CommitId**: SHA-1 over the formatted timestamp and the message
//! - **Clock**: Source of commit timestamps

pub mod clock;
pub mod commit;
pub mod commit_id;

use std::collections::BTreeMap;

/// Length of a SHA-1 hash in hexadecimal format
pub const COMMIT_ID_LENGTH: usize = 40;

/// Timestamp format used both for display and as commit id input
pub const DATE_FORMAT: &str = "%a %b %d %H:%M %Y %z";

/// Full mapping of every tracked object name to its value
pub type Snapshot<V> = BTreeMap<String, V>;

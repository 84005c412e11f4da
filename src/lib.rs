//! In-memory, git-like object store
//!
//! Named opaque objects are staged, committed as full snapshots, and tracked
//! on independent branches. Every operation answers with an
//! [`Outcome`](artifacts::outcome::Outcome) instead of failing hard:
//!
//! ```
//! use objstore::Repository;
//!
//! let mut repository = Repository::new();
//! repository.add("f1", "A");
//! repository.commit("first");
//!
//! let found = repository.get("f1");
//! assert!(found.is_success());
//! assert_eq!(found.into_payload(), Some("A"));
//! ```
//!
//! - `areas`: Stateful components (staging area, branch manager, repository)
//! - `artifacts`: Value types (commits, branches, outcomes)
//! - `commands`: Line-oriented command layer used by the `objstore` binary

pub mod areas;
pub mod artifacts;
pub mod commands;

pub use areas::branch_manager::BranchManager;
pub use areas::repository::Repository;
pub use artifacts::branch::branch_name::BranchName;
pub use artifacts::branch::history::Branch;
pub use artifacts::objects::Snapshot;
pub use artifacts::objects::clock::Clock;
pub use artifacts::objects::commit::Commit;
pub use artifacts::objects::commit_id::CommitId;
pub use artifacts::outcome::{Outcome, StoreError};
